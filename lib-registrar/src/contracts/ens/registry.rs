//! In-memory name registry with ENS ownership semantics

use std::collections::HashMap;

use lib_crypto::subnode;
use lib_types::{Address, Label, Node};

use super::{EnsError, NameRegistry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NodeRecord {
    owner: Address,
    resolver: Address,
}

/// Registry of node records
///
/// The root node (`Node::zero()`) belongs to whoever deployed the registry;
/// everything below it is handed out with [`NameRegistry::set_subnode_owner`].
#[derive(Debug, Clone, Default)]
pub struct MemoryNameRegistry {
    records: HashMap<Node, NodeRecord>,
}

impl MemoryNameRegistry {
    /// Create a registry whose root node is owned by `root_owner`
    pub fn new(root_owner: Address) -> Self {
        let mut records = HashMap::new();
        records.insert(
            Node::zero(),
            NodeRecord {
                owner: root_owner,
                resolver: Address::zero(),
            },
        );
        Self { records }
    }

    fn authorise(&self, caller: &Address, node: &Node) -> Result<(), EnsError> {
        let owner = self.owner(node);
        if owner.is_zero() || owner != *caller {
            return Err(EnsError::NotAuthorised {
                node: *node,
                caller: *caller,
            });
        }
        Ok(())
    }
}

impl NameRegistry for MemoryNameRegistry {
    fn owner(&self, node: &Node) -> Address {
        self.records.get(node).map(|r| r.owner).unwrap_or_default()
    }

    fn resolver(&self, node: &Node) -> Address {
        self.records.get(node).map(|r| r.resolver).unwrap_or_default()
    }

    fn set_owner(&mut self, caller: &Address, node: &Node, owner: Address) -> Result<(), EnsError> {
        self.authorise(caller, node)?;
        self.records.entry(*node).or_default().owner = owner;
        Ok(())
    }

    fn set_subnode_owner(
        &mut self,
        caller: &Address,
        parent: &Node,
        label: &Label,
        owner: Address,
    ) -> Result<Node, EnsError> {
        self.authorise(caller, parent)?;
        let node = subnode(parent, label);
        self.records.entry(node).or_default().owner = owner;
        Ok(node)
    }

    fn set_resolver(&mut self, caller: &Address, node: &Node, resolver: Address) -> Result<(), EnsError> {
        self.authorise(caller, node)?;
        self.records.entry(*node).or_default().resolver = resolver;
        Ok(())
    }
}
