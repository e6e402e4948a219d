/**
 * Router Configuration
 *
 * This module assembles the complete Axum router:
 *
 * 1. Public API routes (contact form, flag read, login/logout)
 * 2. Admin API routes, behind the auth gate
 * 3. Admin pages (login form, dashboard), behind the auth gate
 * 4. Static site assets as the fallback (everything else under `public/`)
 *
 * The cookie layer wraps the whole router so the gate and the handlers can
 * read and write the session cookie; the trace layer is outermost.
 *
 * The gate is layered only over the protected subtrees, so public paths
 * structurally never pass through it.
 */

use axum::{
    http::StatusCode,
    middleware,
    response::Redirect,
    routing::get,
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::auth::gate::{admin_gate, DASHBOARD_PATH};
use crate::routes::api_routes::{admin_api_routes, public_api_routes};
use crate::server::state::AppState;

/// Unknown admin pages still sit behind the gate: unauthenticated visitors
/// are redirected to the login page before this 404 is ever reached.
async fn admin_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

/// Admin panel pages. The HTML itself is static; all access policy lives in
/// the gate layered over these routes.
fn admin_page_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin", get(|| async { Redirect::to(DASHBOARD_PATH) }))
        .route_service("/admin/login", ServeFile::new("public/admin/login.html"))
        .route_service(
            "/admin/dashboard",
            ServeFile::new("public/admin/dashboard.html"),
        )
        .route("/admin/{*path}", get(admin_not_found))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_gate))
}

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(public_api_routes())
        .merge(admin_api_routes(&state))
        .merge(admin_page_routes(&state))
        // Everything else is the static public site
        .fallback_service(ServeDir::new("public"))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
