/**
 * API Route Configuration
 *
 * This module defines the JSON API routes, split into the public surface
 * and the admin surface.
 *
 * # Public Routes
 *
 * - `POST /api/contact` - contact form submission
 * - `GET /api/settings/contact-form` - contact form availability flag
 * - `POST /api/login` - admin login (sets the session cookie)
 * - `POST /api/logout` - admin logout (clears the session cookie)
 *
 * # Admin Routes (behind the gate)
 *
 * - `GET /api/messages` - inbox listing
 * - `DELETE /api/messages/{id}` - delete a message
 * - `PATCH /api/messages/{id}/read` - mark a message read
 * - `GET|PATCH /api/admin/settings/contact-form` - read/toggle the flag
 * - `PATCH /api/admin/profile/change-password` - change the admin password
 *
 * Routes answer 405 for verbs they do not support (axum method routing).
 */

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};

use crate::auth::gate::admin_gate;
use crate::auth::handlers::{change_password, login, logout};
use crate::messages::handlers::{get_messages, mark_read, remove_message, submit_contact};
use crate::server::state::AppState;
use crate::settings::handlers::{
    get_contact_form_setting, get_contact_form_status, update_contact_form_setting,
};

/// Routes reachable without a session.
pub fn public_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/settings/contact-form", get(get_contact_form_status))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
}

/// Routes behind the admin gate. Requests without a valid admin session get
/// the JSON 401 branch of the gate, never a redirect.
pub fn admin_api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/messages", get(get_messages))
        .route("/api/messages/{id}", delete(remove_message))
        .route("/api/messages/{id}/read", patch(mark_read))
        .route(
            "/api/admin/settings/contact-form",
            get(get_contact_form_setting).patch(update_contact_form_setting),
        )
        .route("/api/admin/profile/change-password", patch(change_password))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_gate))
}
