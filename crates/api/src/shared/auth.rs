use crate::error::NotifierError;
use actix_web::{http::header, HttpRequest};
use pashumitra_scheduler_infra::NotifierContext;

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

fn api_key(req: &HttpRequest) -> Option<&str> {
    req.headers().get("x-api-key")?.to_str().ok()
}

/// Routes are open unless `CRON_SECRET` is configured. Then the secret has
/// to be provided as a bearer token or in the `x-api-key` header.
pub fn protect_route(req: &HttpRequest, ctx: &NotifierContext) -> Result<(), NotifierError> {
    let secret = match &ctx.config.cron_secret {
        Some(secret) => secret,
        None => return Ok(()),
    };

    match bearer_token(req).or_else(|| api_key(req)) {
        Some(provided) if provided == secret => Ok(()),
        Some(_) => Err(NotifierError::Unauthorized(
            "Invalid secret provided".to_string(),
        )),
        None => Err(NotifierError::Unauthorized(
            "Unable to find the secret in the Authorization or x-api-key header".to_string(),
        )),
    }
}
