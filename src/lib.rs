mod clients;
mod error;
mod kma_asos;
mod open_api;
mod types;
mod utils;

pub use error::KmaAsosError;
pub use kma_asos::*;

pub use clients::daily_client::*;

pub use open_api::error::OpenApiError;
pub use open_api::response::{DailyPage, DailyRecord, PageBody, PageHeader, PageItems};

pub use types::query::DailyQuery;
pub use types::station::StationId;
