pub mod accidents;
pub mod emergency;
pub mod health;
pub mod hospitals;
pub mod index;
pub mod weather;

use crate::error::ApiError;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    let json = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());
    let query = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());

    cfg.service(web::scope("/health").configure(health::init))
        .service(
            web::scope("/api")
                .app_data(json)
                .app_data(query)
                .configure(accidents::init)
                .configure(hospitals::init)
                .configure(weather::init)
                .configure(emergency::init),
        )
        .configure(index::init);
}
