use actix_web::{web, HttpResponse};
use pashumitra_scheduler_api_structs::get_service_health::*;
use pashumitra_scheduler_infra::NotifierContext;

async fn status(ctx: web::Data<NotifierContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Injection notifier is up!".into(),
        timestamp: ctx.sys.now(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
