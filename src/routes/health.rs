use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

/// Dataset sizes. Only reachable once startup loading has finished.
#[get("/ready")]
async fn ready(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "accidents": state.accidents.len(),
        "hospitals": state.hospitals.len(),
    }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(ready);
}
