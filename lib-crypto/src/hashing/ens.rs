//! ENS name hashing
//!
//! ```text
//! namehash("")          = 0x00..00
//! namehash(label.rest)  = keccak256(namehash(rest) || keccak256(label))
//! ```

use lib_types::{Label, Node};

use super::{keccak256, keccak256_multiple};

/// Hash of one human-readable name fragment
pub fn labelhash(fragment: &str) -> Label {
    Label::new(keccak256(fragment.as_bytes()))
}

/// Node of `label` directly under `parent`
pub fn subnode(parent: &Node, label: &Label) -> Node {
    Node::new(keccak256_multiple(&[parent.as_bytes(), label.as_bytes()]))
}

/// Recursive ENS namehash of a dot-separated name
///
/// Names are hashed as given; callers are expected to pass normalized names.
pub fn namehash(name: &str) -> Node {
    if name.is_empty() {
        return Node::zero();
    }
    name.rsplit('.')
        .fold(Node::zero(), |node, fragment| subnode(&node, &labelhash(fragment)))
}
