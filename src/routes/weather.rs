use crate::handlers::query::CoordinateQuery;
use crate::handlers::weather::weather_report;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, ResponseError, get, web};

#[get("/weather")]
async fn weather(state: web::Data<AppState>, query: web::Query<CoordinateQuery>) -> impl Responder {
    let at = match query.coordinate() {
        Ok(at) => at,
        Err(e) => return e.error_response(),
    };

    match weather_report(&state, at).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => {
            tracing::error!("Weather endpoint error: {}", e);
            e.error_response()
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(weather);
}
