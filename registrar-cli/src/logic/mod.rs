//! Pure functional business logic
//!
//! Functions here take inputs and return outputs with no I/O, printing or
//! state mutation. The `commands` module wires them to the terminal.

pub mod names;
pub mod release;

pub use names::{validate_fragment, validate_name};
pub use release::{parse_hex_bytes, recover_release_signer, sign_release, ReleaseRequest};
