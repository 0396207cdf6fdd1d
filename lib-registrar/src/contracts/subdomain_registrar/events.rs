//! Registrar Events
//!
//! Committed state changes append an event to the registrar log for
//! off-chain observers. Events from a failed call are discarded with the
//! rest of its effects.

use lib_types::{Address, Amount, Label, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RegistrarEvent {
    /// Claimants were added
    ClaimantsAdded {
        /// Claimant that made the change
        by: Address,
        /// Addresses that were not already claimants
        claimants: Vec<Address>,
    },

    /// Claimants were removed
    ClaimantsRemoved {
        by: Address,
        /// Addresses that were claimants before the call
        claimants: Vec<Address>,
    },

    /// A label was registered for the first time
    LabelRegistered {
        label: Label,
        node: Node,
        owner: Address,
        /// Value forwarded to the owner
        value: Amount,
        block_number: u64,
    },

    /// A label was released back to the unclaimed state
    LabelReleased {
        label: Label,
        node: Node,
        previous_owner: Address,
        /// Whoever submitted the signed release
        submitter: Address,
        block_number: u64,
    },

    /// The root node was pointed at the public resolver
    RootResolverSet { node: Node, resolver: Address },
}

impl RegistrarEvent {
    /// Get event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            RegistrarEvent::ClaimantsAdded { .. } => "claimants_added",
            RegistrarEvent::ClaimantsRemoved { .. } => "claimants_removed",
            RegistrarEvent::LabelRegistered { .. } => "label_registered",
            RegistrarEvent::LabelReleased { .. } => "label_released",
            RegistrarEvent::RootResolverSet { .. } => "root_resolver_set",
        }
    }

    /// Label the event concerns, if any
    pub fn label(&self) -> Option<&Label> {
        match self {
            RegistrarEvent::LabelRegistered { label, .. } => Some(label),
            RegistrarEvent::LabelReleased { label, .. } => Some(label),
            _ => None,
        }
    }
}
