//! Bank entity.

use super::Entity;

/// A bank identified by a unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pub id: i64,
    pub name: String,
}

impl Bank {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

impl Entity for Bank {
    const TABLE: &'static str = "banks";
    const COLUMNS: &'static [&'static str] = &["id", "name"];
}

/// Input data for creating a new bank.
#[derive(Debug, Clone)]
pub struct NewBank {
    pub name: String,
}

/// Partial update for an existing bank.
#[derive(Debug, Clone, Default)]
pub struct BankPatch {
    pub name: Option<String>,
}

impl BankPatch {
    /// Returns true if applying the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Merges the present fields into `bank`.
    pub fn apply(self, bank: &mut Bank) {
        if let Some(name) = self.name {
            bank.name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_creation() {
        let bank = Bank::new(1, "Monobank".to_string());

        assert_eq!(bank.id, 1);
        assert_eq!(bank.name, "Monobank");
    }

    #[test]
    fn test_patch_renames() {
        let mut bank = Bank::new(1, "Old".to_string());
        let patch = BankPatch {
            name: Some("New".to_string()),
        };

        assert!(!patch.is_empty());
        patch.apply(&mut bank);

        assert_eq!(bank, Bank::new(1, "New".to_string()));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut bank = Bank::new(7, "Same".to_string());
        let patch = BankPatch::default();

        assert!(patch.is_empty());
        patch.apply(&mut bank);

        assert_eq!(bank, Bank::new(7, "Same".to_string()));
    }
}
