//! Extractors whose rejections render as [`AppError`] responses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor; malformed bodies become `400 {error}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor; malformed queries become `400 {error}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
