use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json` body extractor whose rejections use the `{"error": ...}` body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejections use the `{"error": ...}` body
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
