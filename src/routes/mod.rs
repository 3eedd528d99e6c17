// Route exports
pub mod quiz;

use actix_web::{error, web, HttpRequest};

use crate::models::ErrorResponse;

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse::bad_request("invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Handle path parameter errors, e.g. a malformed session id
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ErrorResponse::bad_request("invalid_path", format!("Invalid path: {}", err)).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .configure(quiz::configure),
    );
}
