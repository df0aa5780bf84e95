use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, FlowKind, Identifiable};
use crate::errors::LedgerError;

/// A single income or expense movement recorded against an account.
///
/// `account_id` is fixed for the operation's lifetime; an operation cannot
/// be moved to a different account. The amount is always non-negative, and
/// the balance effect takes its sign from [`FlowKind`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    pub id: Uuid,
    pub kind: FlowKind,
    pub account_id: Uuid,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category_id: Uuid,
}

impl Operation {
    pub fn new(
        id: Uuid,
        kind: FlowKind,
        account_id: Uuid,
        amount: f64,
        date: DateTime<Utc>,
        description: impl Into<String>,
        category_id: Uuid,
    ) -> Result<Self, LedgerError> {
        Self::validate_amount(amount)?;
        Ok(Self {
            id,
            kind,
            account_id,
            amount,
            date,
            description: description.into(),
            category_id,
        })
    }

    /// Rejects negative amounts. Runs before any storage write.
    pub fn validate_amount(amount: f64) -> Result<(), LedgerError> {
        if amount < 0.0 {
            Err(LedgerError::NegativeAmount(amount))
        } else {
            Ok(())
        }
    }

    /// Contribution of this operation to its account's balance: positive for
    /// income, negative for expense.
    pub fn signed_effect(&self) -> f64 {
        self.kind.sign() * self.amount
    }
}

impl Identifiable for Operation {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Operation {
    fn display_label(&self) -> String {
        format!("{} {:.2}", self.kind, self.amount)
    }
}
