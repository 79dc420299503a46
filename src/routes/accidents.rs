use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, web};

#[get("/accidents")]
async fn accidents(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.accidents)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(accidents);
}
