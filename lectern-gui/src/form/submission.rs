use std::sync::atomic::{AtomicU64, Ordering};

use crate::services::api::ApiError;

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one submission. Unique for the process lifetime, so an outcome
/// can never be mistaken for the one of another form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub(super) fn next() -> Self {
        Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting(Ticket),
}

/// Settled result of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The server answered and refused.
    Rejected(String),
    /// No usable answer: connection failure, timeout or garbage body.
    TransportFailed(String),
}

impl<T> From<Result<T, ApiError>> for Outcome<T> {
    fn from(res: Result<T, ApiError>) -> Self {
        match res {
            Ok(value) => Outcome::Success(value),
            Err(e) if e.is_rejection() => Outcome::Rejected(e.to_string()),
            Err(e) => Outcome::TransportFailed(e.to_string()),
        }
    }
}
