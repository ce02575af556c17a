mod get_next_injections;
mod ledger;
mod send_injection_notifications;

use crate::error::NotifierError;
use actix_web::{http::Method, web, HttpResponse};
use get_next_injections::get_next_injections_controller;
use send_injection_notifications::send_injection_notifications_controller;
pub(crate) use send_injection_notifications::SendInjectionNotificationsUseCase;

async fn preflight_controller() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed_controller() -> Result<HttpResponse, NotifierError> {
    Err(NotifierError::MethodNotAllowed)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cron/injection-notifications")
            .route(web::get().to(send_injection_notifications_controller))
            .route(web::method(Method::OPTIONS).to(preflight_controller))
            .default_service(web::to(method_not_allowed_controller)),
    );

    cfg.route(
        "/injections/next",
        web::get().to(get_next_injections_controller),
    );
}
