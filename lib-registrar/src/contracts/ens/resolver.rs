//! In-memory public resolver

use std::collections::HashMap;

use lib_types::{Address, Node};

use super::{AddressResolver, EnsError, NameRegistry};

/// Address records keyed by node, writable by each node's registry owner
#[derive(Debug, Clone, Default)]
pub struct MemoryPublicResolver {
    addresses: HashMap<Node, Address>,
}

impl MemoryPublicResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddressResolver for MemoryPublicResolver {
    fn set_addr(
        &mut self,
        caller: &Address,
        registry: &dyn NameRegistry,
        node: &Node,
        addr: Address,
    ) -> Result<(), EnsError> {
        if registry.owner(node) != *caller {
            return Err(EnsError::NotAuthorised {
                node: *node,
                caller: *caller,
            });
        }
        self.addresses.insert(*node, addr);
        Ok(())
    }

    fn addr(&self, node: &Node) -> Address {
        self.addresses.get(node).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::ens::MemoryNameRegistry;

    #[test]
    fn test_only_node_owner_sets_addr() {
        let owner = Address::new([1u8; 20]);
        let stranger = Address::new([2u8; 20]);
        let target = Address::new([3u8; 20]);
        let registry = MemoryNameRegistry::new(owner);
        let mut resolver = MemoryPublicResolver::new();

        let err = resolver
            .set_addr(&stranger, &registry, &Node::zero(), target)
            .unwrap_err();
        assert!(matches!(err, EnsError::NotAuthorised { .. }));
        assert_eq!(resolver.addr(&Node::zero()), Address::zero());

        resolver.set_addr(&owner, &registry, &Node::zero(), target).unwrap();
        assert_eq!(resolver.addr(&Node::zero()), target);
    }
}
