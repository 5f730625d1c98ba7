use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Static asset unavailable: {0}")]
    AssetUnavailable(String),
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for ServeError {
    fn error_response(&self) -> HttpResponse {
        let api_error = ApiError {
            code: match self {
                ServeError::AssetUnavailable(_) => 500,
            },
            message: self.to_string(),
        };

        let response = ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        };

        match self {
            ServeError::AssetUnavailable(_) => HttpResponse::InternalServerError().json(response),
        }
    }
}
