use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// `{rows: [...]}` envelope used by the search endpoints.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RowsDto<T> {
    pub rows: Vec<T>,
}

impl<T> RowsDto<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }
}
