use std::path::PathBuf;

use crate::error::ApiError;
use actix_web::{HttpResponse, Responder, ResponseError, get, http::header::ContentType, web};

/// Location of the map page served at `/`.
#[derive(Debug, Clone)]
pub struct MapPage(pub PathBuf);

#[get("/")]
async fn index(page: web::Data<MapPage>) -> impl Responder {
    match tokio::fs::read_to_string(&page.0).await {
        Ok(html) => HttpResponse::Ok().content_type(ContentType::html()).body(html),
        Err(e) => {
            tracing::warn!("cannot read map page {}: {}", page.0.display(), e);
            ApiError::NotFound("Map page not available".to_string()).error_response()
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
