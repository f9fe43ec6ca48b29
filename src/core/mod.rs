pub mod api;
pub mod controller;
pub mod debounce;
pub mod errors;
pub mod models;
pub mod projection;
pub mod tasks;

pub use api::QuoteService;
pub use controller::{ErrorAck, ErrorSignal, QuoteBoard};
pub use errors::ApiError;
pub use models::{Quote, VoteReceipt};
pub use projection::{ChartSeries, SortOrder};
