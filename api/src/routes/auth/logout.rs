use actix_web::{cookie::Cookie, error::HttpError, web, HttpResponse};
use tracing::error;

use sg_shared::config::SessionConfig;
use sg_shared::types::StatusResponse;

use super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Logs out by instructing the client to drop the session cookie. The
/// token itself stays valid until its expiry (there is no revocation
/// list), so logout is pure cookie glue and needs no authentication:
/// clearing an absent cookie is a no-op.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Failure (500 Internal Server Error)
/// ```json
/// {
///     "success": false,
///     "message": "<error text>"
/// }
/// ```
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    match build_logout_response(&state.session) {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "failed to clear session cookie");
            HttpResponse::InternalServerError()
                .json(StatusResponse::failure(err.to_string()))
        }
    }
}

/// Builds the success response carrying the removal cookie
fn build_logout_response(session: &SessionConfig) -> Result<HttpResponse, HttpError> {
    let cookie = Cookie::build(session.cookie_name.clone(), "")
        .path("/")
        .http_only(session.http_only)
        .secure(session.secure)
        .finish();

    let mut response =
        HttpResponse::Ok().json(StatusResponse::success("Logged out successfully"));
    response.add_removal_cookie(&cookie)?;

    Ok(response)
}
