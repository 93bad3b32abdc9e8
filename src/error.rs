use crate::open_api::error::OpenApiError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KmaAsosError {
    #[error(transparent)]
    OpenApi(#[from] OpenApiError),

    #[error("Start date {start} is after end date {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}
