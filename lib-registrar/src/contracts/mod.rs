//! # Registrar Contract System
//!
//! The registrar core plus the narrow interfaces it drives:
//! - [`ens`]: name registry and address resolver capabilities
//! - [`balances`]: native value transfers
//! - [`executor`]: per-call execution context
//! - [`subdomain_registrar`]: claimants, label ledger, registration and release

pub mod balances;
pub mod ens;
pub mod executor;
pub mod subdomain_registrar;

pub use balances::{MemoryBalances, NativeBalances, TransferError};
pub use ens::{AddressResolver, EnsError, MemoryNameRegistry, MemoryPublicResolver, NameRegistry};
pub use executor::ExecutionContext;
