//! Contract execution environment state
//!
//! Every registrar call receives an [`ExecutionContext`]: who is calling, how
//! much native value is attached, and the block it executes in. The block
//! timestamp is the registrar's only notion of "now", so tests control expiry
//! by choosing it.

use lib_types::{Address, Amount, Timestamp};
use serde::{Deserialize, Serialize};

/// Immutable context passed to all registrar calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Transaction sender
    pub caller: Address,
    /// Native value attached to the call
    pub value: Amount,
    /// Current block number
    pub block_number: u64,
    /// Current block timestamp (seconds)
    pub timestamp: Timestamp,
}

impl ExecutionContext {
    /// Create a context for a call without attached value
    pub fn new(caller: Address, block_number: u64, timestamp: Timestamp) -> Self {
        Self {
            caller,
            value: 0,
            block_number,
            timestamp,
        }
    }

    /// Same call, with `value` attached
    pub fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_carries_no_value() {
        let caller = Address::new([1u8; 20]);
        let ctx = ExecutionContext::new(caller, 7, 1_000);
        assert_eq!(ctx.value, 0);
        assert_eq!(ctx.block_number, 7);

        let funded = ctx.with_value(10);
        assert_eq!(funded.value, 10);
        assert_eq!(funded.caller, caller);
    }
}
