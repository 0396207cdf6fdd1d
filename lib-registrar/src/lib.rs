//! Subdomain Registrar Package
//!
//! Allocates subdomains under a single root name to end-user addresses.
//! A small set of claimants mints ownership records in bulk (optionally
//! forwarding attached value to the new owners), and a label's holder can
//! later relinquish it with an offline signature that anyone may submit.

pub mod config;
pub mod contracts;

pub use config::{load_config, ConfigError, RegistrarConfig};
pub use contracts::{
    AddressResolver, EnsError, ExecutionContext, MemoryBalances, MemoryNameRegistry,
    MemoryPublicResolver, NameRegistry, NativeBalances, TransferError,
};
pub use contracts::subdomain_registrar::{
    ClaimantRegistry, ErrorKind, LabelLedger, RegistrarError, RegistrarEvent,
    RegistrationReceipt, ReleaseOutcome, SubdomainRegistrar, release_sign_data_for,
    RELEASE_SIGN_DATA_LENGTH,
};
