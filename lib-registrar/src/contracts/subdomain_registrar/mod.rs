//! Subdomain Registrar Contract Module
//!
//! Allocates labels under a single root node, governed by a set of
//! claimants.
//!
//! # Components
//!
//! - [`claimants`]: who may register labels and edit the claimant set
//! - [`ledger`]: which address holds each label
//! - [`core`]: the registrar, bulk registration and value forwarding
//! - [`release`]: owner-signed, deadline-bound release of a label
//!
//! # Label lifecycle
//!
//! ```text
//! Unclaimed --register--> Owned(a) --release(sig by a)--> Unclaimed
//! Owned(a)  --register(a)--> Owned(a)       (no-op, no payout)
//! Owned(a)  --register(b)--> rejected       (b != a)
//! ```

pub mod claimants;
pub mod core;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod release;


pub use self::core::{RegistrationReceipt, SubdomainRegistrar};
pub use claimants::ClaimantRegistry;
pub use errors::{ErrorKind, RegistrarError};
pub use events::RegistrarEvent;
pub use ledger::LabelLedger;
pub use release::{release_sign_data_for, ReleaseOutcome, RELEASE_SIGN_DATA_LENGTH};
