use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{validate_name, Displayable, FlowKind, Identifiable};
use crate::errors::LedgerError;

/// Categorises ledger operations for display and reporting.
///
/// Purely descriptive: operations hold a category id as an unchecked foreign
/// key, and a category may be deleted while operations still reference it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub kind: FlowKind,
    pub name: String,
}

impl Category {
    pub fn new(id: Uuid, kind: FlowKind, name: impl Into<String>) -> Result<Self, LedgerError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { id, kind, name })
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        let err = Category::new(Uuid::new_v4(), FlowKind::Expense, "").unwrap_err();
        assert_eq!(err, LedgerError::EmptyName);
    }

    #[test]
    fn label_includes_kind() {
        let category = Category::new(Uuid::new_v4(), FlowKind::Income, "Salary").unwrap();
        assert_eq!(category.display_label(), "Salary (Income)");
    }
}
