use actix_web::HttpResponse;

use crate::dto::SessionResponse;
use crate::middleware::auth::SessionContext;

/// Handler for GET /api/v1/auth/session
///
/// Returns the subject and issuance time of the presented session token.
/// The session middleware has already verified the cookie; requests
/// without a valid token never reach this handler.
pub async fn current_session(context: SessionContext) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        subject: context.subject,
        issued_at: context.issued_at,
    })
}
