use crate::handlers::hospitals::nearby_hospitals;
use crate::handlers::query::CoordinateQuery;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, ResponseError, get, web};

#[get("/hospitals")]
async fn hospitals(state: web::Data<AppState>, query: web::Query<CoordinateQuery>) -> impl Responder {
    let origin = match query.coordinate() {
        Ok(origin) => origin,
        Err(e) => return e.error_response(),
    };

    match nearby_hospitals(&state, origin).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => {
            tracing::error!("Error fetching hospitals and weather: {}", e);
            e.error_response()
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(hospitals);
}
