//! Traits and value types shared across the domain entities.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Direction of a money flow. Shared by categories and operations; the sign
/// of an operation's balance effect comes from its kind alone, never from
/// the amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowKind {
    Income,
    Expense,
}

impl FlowKind {
    /// Multiplier turning an amount into its signed balance effect.
    pub fn sign(self) -> f64 {
        match self {
            FlowKind::Income => 1.0,
            FlowKind::Expense => -1.0,
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowKind::Income => "Income",
            FlowKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Rejects empty or whitespace-only names. Runs before any storage write.
pub fn validate_name(name: &str) -> Result<(), LedgerError> {
    if name.trim().is_empty() {
        Err(LedgerError::EmptyName)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(validate_name(""), Err(LedgerError::EmptyName));
        assert_eq!(validate_name("   \t"), Err(LedgerError::EmptyName));
        assert!(validate_name("Groceries").is_ok());
    }

    #[test]
    fn kind_signs_are_opposite() {
        assert_eq!(FlowKind::Income.sign(), 1.0);
        assert_eq!(FlowKind::Expense.sign(), -1.0);
    }
}
