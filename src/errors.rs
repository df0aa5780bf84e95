use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
///
/// Not-found outcomes on update/delete are not errors; the facade reports
/// those as `Ok(None)` / `Ok(false)`.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("amount must not be negative: {0}")]
    NegativeAmount(f64),
    #[error("account {0} does not exist")]
    UnknownAccount(Uuid),
    #[error("account {0} still has operations attached")]
    AccountInUse(Uuid),
}

impl LedgerError {
    /// True for failures a caller can fix by re-prompting for input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyName | Self::NegativeAmount(_))
    }
}
