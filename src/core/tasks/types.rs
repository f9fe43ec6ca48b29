use crate::core::{
    errors::ApiError,
    models::{
        Quote,
        VoteReceipt,
    },
};

/// Completion messages from background tasks, polled once per frame.
#[derive(Debug)]
pub enum TaskResult {
    LoginFinished(Result<(), ApiError>),
    QuotesFetched { seq: u64, result: Result<Vec<Quote>, ApiError> },
    VoteFinished { id: String, result: Result<VoteReceipt, ApiError> },
}
