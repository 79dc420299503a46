use crate::handlers::emergency::send_alert;
use crate::models::emergency::EmergencyRequest;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, ResponseError, post, web};

#[post("/emergency")]
async fn emergency(state: web::Data<AppState>, body: web::Json<EmergencyRequest>) -> impl Responder {
    match send_alert(&state, body.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => {
            tracing::error!("Emergency alert error: {}", e);
            e.error_response()
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(emergency);
}
