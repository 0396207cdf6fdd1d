//! Name registry and resolver capabilities
//!
//! The registrar never talks to a concrete registry. It drives two narrow
//! interfaces:
//! - [`NameRegistry`]: node ownership and resolver assignment
//! - [`AddressResolver`]: node to address resolution records
//!
//! Both mirror the authorization rule of the public ENS contracts: only the
//! current owner of a node may change it. That rule is why the registrar
//! takes a fresh node for itself, writes the resolver records, and only then
//! hands the node to its final owner.

pub mod registry;
pub mod resolver;

use lib_types::{Address, Label, Node};
use thiserror::Error;

pub use registry::MemoryNameRegistry;
pub use resolver::MemoryPublicResolver;

/// Failures reported by a name registry or resolver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnsError {
    #[error("{caller} is not authorised to modify node {node}")]
    NotAuthorised { node: Node, caller: Address },

    #[error("registry call failed: {0}")]
    Backend(String),
}

/// Node ownership and resolver assignment
pub trait NameRegistry {
    /// Current owner of `node` (zero when unowned)
    fn owner(&self, node: &Node) -> Address;

    /// Resolver assigned to `node` (zero when unset)
    fn resolver(&self, node: &Node) -> Address;

    /// Transfer `node` to `owner`
    fn set_owner(&mut self, caller: &Address, node: &Node, owner: Address) -> Result<(), EnsError>;

    /// Assign the node `label` under `parent` to `owner`, returning that node
    fn set_subnode_owner(
        &mut self,
        caller: &Address,
        parent: &Node,
        label: &Label,
        owner: Address,
    ) -> Result<Node, EnsError>;

    /// Point `node` at `resolver`
    fn set_resolver(&mut self, caller: &Address, node: &Node, resolver: Address) -> Result<(), EnsError>;
}

/// Node to address resolution records
pub trait AddressResolver {
    /// Set the address `node` resolves to. `registry` decides whether
    /// `caller` currently controls `node`.
    fn set_addr(
        &mut self,
        caller: &Address,
        registry: &dyn NameRegistry,
        node: &Node,
        addr: Address,
    ) -> Result<(), EnsError>;

    /// Address `node` resolves to (zero when unset)
    fn addr(&self, node: &Node) -> Address;
}
