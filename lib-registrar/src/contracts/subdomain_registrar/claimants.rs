//! Claimant set
//!
//! Claimants may register labels and edit the claimant set itself. Any
//! claimant may add or remove any address, including itself, so the set can
//! become empty and freeze every privileged operation for good.

use std::collections::HashSet;

use lib_types::Address;

/// Set of addresses allowed to mint label ownership
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimantRegistry {
    members: HashSet<Address>,
}

impl ClaimantRegistry {
    /// Registry whose only member is `deployer`
    pub fn new(deployer: Address) -> Self {
        let mut members = HashSet::new();
        members.insert(deployer);
        Self { members }
    }

    pub fn is_claimant(&self, address: &Address) -> bool {
        self.members.contains(address)
    }

    /// Insert each address, returning those that were not already members
    pub fn add(&mut self, addresses: &[Address]) -> Vec<Address> {
        addresses
            .iter()
            .filter(|address| self.members.insert(**address))
            .copied()
            .collect()
    }

    /// Remove each address, returning those that were members
    pub fn remove(&mut self, addresses: &[Address]) -> Vec<Address> {
        addresses
            .iter()
            .filter(|address| self.members.remove(*address))
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn addr(id: u8) -> Address {
        Address::new([id; 20])
    }

    #[test]
    fn test_deployer_is_member() {
        let claimants = ClaimantRegistry::new(addr(1));
        assert!(claimants.is_claimant(&addr(1)));
        assert!(!claimants.is_claimant(&addr(2)));
        assert_eq!(claimants.len(), 1);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut claimants = ClaimantRegistry::new(addr(1));
        assert_eq!(claimants.add(&[addr(1), addr(2), addr(2)]), vec![addr(2)]);
        assert_eq!(claimants.len(), 2);
    }

    #[test]
    fn test_last_member_can_remove_itself() {
        let mut claimants = ClaimantRegistry::new(addr(1));
        assert_eq!(claimants.remove(&[addr(1), addr(7)]), vec![addr(1)]);
        assert!(claimants.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8),
        Remove(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![(0u8..6).prop_map(Op::Add), (0u8..6).prop_map(Op::Remove)]
    }

    proptest! {
        /// Membership after any history equals the outcome of the last op
        /// touching each address.
        #[test]
        fn prop_membership_follows_last_change(ops in proptest::collection::vec(op(), 0..40)) {
            let mut claimants = ClaimantRegistry::new(addr(0));
            let mut expected: std::collections::HashMap<u8, bool> = std::collections::HashMap::new();
            expected.insert(0, true);

            for op in &ops {
                match op {
                    Op::Add(id) => {
                        claimants.add(&[addr(*id)]);
                        expected.insert(*id, true);
                    }
                    Op::Remove(id) => {
                        claimants.remove(&[addr(*id)]);
                        expected.insert(*id, false);
                    }
                }
            }

            for id in 0u8..6 {
                let want = expected.get(&id).copied().unwrap_or(false);
                prop_assert_eq!(claimants.is_claimant(&addr(id)), want);
            }
        }

        /// Applying the same adds in any order yields the same set.
        #[test]
        fn prop_add_order_irrelevant(ids in proptest::collection::vec(0u8..10, 0..20)) {
            let mut forward = ClaimantRegistry::new(addr(0));
            let mut backward = ClaimantRegistry::new(addr(0));
            let addresses: Vec<Address> = ids.iter().map(|id| addr(*id)).collect();
            let reversed: Vec<Address> = addresses.iter().rev().copied().collect();

            forward.add(&addresses);
            backward.add(&reversed);
            prop_assert_eq!(forward, backward);
        }
    }
}
