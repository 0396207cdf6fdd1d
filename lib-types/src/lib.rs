//! Subdomain registrar primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Rule: No String identifiers in contract state. Ever.

pub mod primitives;

pub use primitives::{
    Address, Amount, Label, Node, ParseError, Timestamp, ADDRESS_LENGTH, HASH_LENGTH,
};
