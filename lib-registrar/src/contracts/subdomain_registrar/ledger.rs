//! Label ownership ledger
//!
//! The registrar's own record of who holds each label. It, not the name
//! registry, decides conflicts and release eligibility: registry ownership
//! can drift once a node is handed to its owner, the ledger cannot.

use std::collections::HashMap;

use lib_types::{Address, Label};

/// Label -> current owner. Absent labels are unclaimed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelLedger {
    owners: HashMap<Label, Address>,
}

impl LabelLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current owner, `None` when unclaimed or released
    pub fn owner_of(&self, label: &Label) -> Option<Address> {
        self.owners.get(label).copied().filter(|owner| !owner.is_zero())
    }

    /// Record `owner` for `label`. Recording the zero address clears it.
    pub fn record(&mut self, label: Label, owner: Address) {
        if owner.is_zero() {
            self.owners.remove(&label);
        } else {
            self.owners.insert(label, owner);
        }
    }

    /// Clear `label`, returning its previous owner
    pub fn clear(&mut self, label: &Label) -> Option<Address> {
        self.owners.remove(label)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
