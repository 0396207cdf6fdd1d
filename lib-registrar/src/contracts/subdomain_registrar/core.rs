//! Subdomain registrar contract implementation.
//!
//! Claimant-gated bulk registration of labels under one root node, with
//! attached value forwarded to the new owners and the excess refunded.

use lib_crypto::subnode;
use lib_types::{Address, Amount, Label, Node};
use tracing::{debug, info, warn};

use super::claimants::ClaimantRegistry;
use super::errors::RegistrarError;
use super::events::RegistrarEvent;
use super::ledger::LabelLedger;
use crate::config::RegistrarConfig;
use crate::contracts::balances::NativeBalances;
use crate::contracts::ens::{AddressResolver, NameRegistry};
use crate::contracts::executor::ExecutionContext;

/// Result of a committed `register` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationReceipt {
    /// Labels assigned for the first time, in call order
    pub registered: Vec<Label>,
    /// Labels already held by the requested owner
    pub skipped: Vec<Label>,
    /// Value forwarded to new owners
    pub paid: Amount,
    /// Value returned to the caller
    pub refunded: Amount,
}

/// The registrar contract
///
/// Owns its claimant set and label ledger outright. The name registry,
/// resolver and value ledger are reached only through their traits.
///
/// # Invariants
///
/// - The deployer is a claimant right after construction.
/// - A label recorded in the ledger is never reassigned to a different owner;
///   it must be released first.
/// - Every mutating call commits entirely or leaves no trace (see
///   [`SubdomainRegistrar::transact`]).
/// - Ledger entries are written before the registry, resolver or value ledger
///   is called.
#[derive(Debug, Clone)]
pub struct SubdomainRegistrar<R, A, B> {
    /// This contract's own account
    pub(super) address: Address,
    pub(super) public_resolver: Address,
    pub(super) root_node: Node,
    pub(super) claimants: ClaimantRegistry,
    pub(super) ledger: LabelLedger,
    pub(super) registry: R,
    pub(super) resolver: A,
    pub(super) balances: B,
    pub(super) logs: Vec<RegistrarEvent>,
}

impl<R, A, B> SubdomainRegistrar<R, A, B>
where
    R: NameRegistry + Clone,
    A: AddressResolver + Clone,
    B: NativeBalances + Clone,
{
    /// Deploy a registrar for `config.root_name` with `deployer` as the first claimant
    ///
    /// The registrar must separately be made owner of its root node in the
    /// registry before it can register anything.
    pub fn new(config: &RegistrarConfig, deployer: Address, registry: R, resolver: A, balances: B) -> Self {
        Self::with_root_node(
            config.contract_address,
            config.public_resolver_address,
            config.root_node(),
            deployer,
            registry,
            resolver,
            balances,
        )
    }

    /// Deploy a registrar for an already-hashed root node
    pub fn with_root_node(
        address: Address,
        public_resolver: Address,
        root_node: Node,
        deployer: Address,
        registry: R,
        resolver: A,
        balances: B,
    ) -> Self {
        info!(
            "Deploying subdomain registrar {} for root {} (deployer {})",
            address, root_node, deployer
        );
        Self {
            address,
            public_resolver,
            root_node,
            claimants: ClaimantRegistry::new(deployer),
            ledger: LabelLedger::new(),
            registry,
            resolver,
            balances,
            logs: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn root_node(&self) -> Node {
        self.root_node
    }

    pub fn public_resolver(&self) -> Address {
        self.public_resolver
    }

    pub fn is_claimant(&self, address: &Address) -> bool {
        self.claimants.is_claimant(address)
    }

    /// Current ledger owner of `label`
    pub fn label_owner(&self, label: &Label) -> Option<Address> {
        self.ledger.owner_of(label)
    }

    /// Full node of `label` under the root
    pub fn node_of(&self, label: &Label) -> Node {
        subnode(&self.root_node, label)
    }

    pub fn claimants(&self) -> &ClaimantRegistry {
        &self.claimants
    }

    pub fn ledger(&self) -> &LabelLedger {
        &self.ledger
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Direct access for setting up the registry (e.g. handing over the root node)
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn resolver(&self) -> &A {
        &self.resolver
    }

    pub fn balances(&self) -> &B {
        &self.balances
    }

    /// Direct access for funding accounts
    pub fn balances_mut(&mut self) -> &mut B {
        &mut self.balances
    }

    pub fn get_logs(&self) -> &[RegistrarEvent] {
        &self.logs
    }

    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    // ------------------------------------------------------------------
    // Atomic execution
    // ------------------------------------------------------------------

    /// Run `op` as one all-or-nothing unit
    ///
    /// The registrar and its collaborators are checkpointed first and
    /// restored if `op` fails. The event log is append-only within a call,
    /// so it is left out of the checkpoint and truncated back instead.
    pub(super) fn transact<T>(
        &mut self,
        name: &str,
        op: impl FnOnce(&mut Self) -> Result<T, RegistrarError>,
    ) -> Result<T, RegistrarError> {
        let log_len = self.logs.len();
        let logs = std::mem::take(&mut self.logs);
        let checkpoint = self.clone();
        self.logs = logs;

        match op(self) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("{} reverted: {}", name, e);
                let mut logs = std::mem::take(&mut self.logs);
                logs.truncate(log_len);
                *self = checkpoint;
                self.logs = logs;
                Err(e)
            }
        }
    }

    pub(super) fn require_claimant(&self, ctx: &ExecutionContext) -> Result<(), RegistrarError> {
        if !self.claimants.is_claimant(&ctx.caller) {
            return Err(RegistrarError::NotClaimant { caller: ctx.caller });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Claimant administration
    // ------------------------------------------------------------------

    /// Add each address to the claimant set
    pub fn add_claimants(&mut self, ctx: &ExecutionContext, addresses: &[Address]) -> Result<(), RegistrarError> {
        self.transact("add_claimants", |this| {
            this.require_claimant(ctx)?;
            let added = this.claimants.add(addresses);
            info!("{} added {} claimant(s)", ctx.caller, added.len());
            this.logs.push(RegistrarEvent::ClaimantsAdded {
                by: ctx.caller,
                claimants: added,
            });
            Ok(())
        })
    }

    /// Remove each address from the claimant set, the caller included if listed
    pub fn remove_claimants(&mut self, ctx: &ExecutionContext, addresses: &[Address]) -> Result<(), RegistrarError> {
        self.transact("remove_claimants", |this| {
            this.require_claimant(ctx)?;
            let removed = this.claimants.remove(addresses);
            info!("{} removed {} claimant(s)", ctx.caller, removed.len());
            if this.claimants.is_empty() {
                warn!("Claimant set is now empty; privileged operations are frozen");
            }
            this.logs.push(RegistrarEvent::ClaimantsRemoved {
                by: ctx.caller,
                claimants: removed,
            });
            Ok(())
        })
    }

    /// Point the root node at the public resolver
    ///
    /// One-time administrative bootstrap; requires the registrar to own its root node.
    pub fn set_resolver(&mut self, ctx: &ExecutionContext) -> Result<(), RegistrarError> {
        self.transact("set_resolver", |this| {
            this.require_claimant(ctx)?;
            let (address, root, resolver) = (this.address, this.root_node, this.public_resolver);
            this.registry.set_resolver(&address, &root, resolver)?;
            info!("Root {} now resolves through {}", root, resolver);
            this.logs.push(RegistrarEvent::RootResolverSet { node: root, resolver });
            Ok(())
        })
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Assign `labels[i]` to `owners[i]`, forwarding `values[i]` to each new owner
    ///
    /// Labels already held by the same owner are skipped and receive nothing.
    /// Attached value must cover the sum paid to new owners; the rest is
    /// refunded to the caller.
    ///
    /// # Errors
    /// - `NotClaimant` if the caller is not a claimant
    /// - `LengthMismatch` if the three slices differ in length
    /// - `ZeroOwner` if any owner is the zero address
    /// - `OwnerConflict` if a label is held by a different owner
    /// - `InsufficientValue` if the attached value does not cover the payouts
    /// - `Registry` / `Transfer` if a collaborator refuses a call
    pub fn register(
        &mut self,
        ctx: &ExecutionContext,
        labels: &[Label],
        owners: &[Address],
        values: &[Amount],
    ) -> Result<RegistrationReceipt, RegistrarError> {
        self.transact("register", |this| this.register_inner(ctx, labels, owners, values))
    }

    fn register_inner(
        &mut self,
        ctx: &ExecutionContext,
        labels: &[Label],
        owners: &[Address],
        values: &[Amount],
    ) -> Result<RegistrationReceipt, RegistrarError> {
        // === CHECKS ===
        self.require_claimant(ctx)?;

        if labels.len() != owners.len() || labels.len() != values.len() {
            return Err(RegistrarError::LengthMismatch {
                labels: labels.len(),
                owners: owners.len(),
                values: values.len(),
            });
        }

        // The zero address is the ledger's "unclaimed" sentinel.
        if let Some(index) = owners.iter().position(|owner| owner.is_zero()) {
            return Err(RegistrarError::ZeroOwner { label: labels[index] });
        }

        // === EFFECTS (ledger first) ===
        let mut receipt = RegistrationReceipt::default();
        let mut payouts: Vec<(Label, Address, Amount)> = Vec::new();

        for ((label, owner), value) in labels.iter().zip(owners).zip(values) {
            match self.ledger.owner_of(label) {
                Some(current) if current == *owner => {
                    debug!("Label {} already owned by {}, skipping", label, owner);
                    receipt.skipped.push(*label);
                }
                Some(current) => {
                    return Err(RegistrarError::OwnerConflict {
                        label: *label,
                        current,
                        requested: *owner,
                    });
                }
                None => {
                    self.ledger.record(*label, *owner);
                    receipt.registered.push(*label);
                    receipt.paid = receipt
                        .paid
                        .checked_add(*value)
                        .ok_or(RegistrarError::PayoutOverflow)?;
                    payouts.push((*label, *owner, *value));
                }
            }
        }

        if ctx.value < receipt.paid {
            return Err(RegistrarError::InsufficientValue {
                required: receipt.paid,
                attached: ctx.value,
            });
        }
        receipt.refunded = ctx.value - receipt.paid;

        // === INTERACTIONS ===
        if ctx.value > 0 {
            self.balances.transfer(&ctx.caller, &self.address, ctx.value)?;
        }

        for (label, owner, value) in payouts {
            let node = self.assign_node(&label, owner)?;
            self.balances.transfer(&self.address, &owner, value)?;
            self.logs.push(RegistrarEvent::LabelRegistered {
                label,
                node,
                owner,
                value,
                block_number: ctx.block_number,
            });
        }

        if receipt.refunded > 0 {
            self.balances.transfer(&self.address, &ctx.caller, receipt.refunded)?;
        }

        info!(
            "Registered {} label(s), skipped {}, paid {}, refunded {}",
            receipt.registered.len(),
            receipt.skipped.len(),
            receipt.paid,
            receipt.refunded
        );
        Ok(receipt)
    }

    /// Create the subnode, set its resolver and address, then hand it to `owner`
    ///
    /// The registrar owns the node until the last step because the registry
    /// and resolver only accept changes from the node's current owner.
    fn assign_node(&mut self, label: &Label, owner: Address) -> Result<Node, RegistrarError> {
        let (address, root, resolver) = (self.address, self.root_node, self.public_resolver);

        let node = self.registry.set_subnode_owner(&address, &root, label, address)?;
        self.registry.set_resolver(&address, &node, resolver)?;
        self.resolver.set_addr(&address, &self.registry, &node, owner)?;
        self.registry.set_owner(&address, &node, owner)?;

        Ok(node)
    }
}
