//! The tree interface walked by the path functions.
//!
//! A tree has a root ([`PathRoot`]) whose entries are nodes ([`PathNode`]).
//! Nodes are self-similar: the children of a container node are nodes of
//! the same type. Roots are always containers; a node may be a container
//! (it has keyed children) or a leaf.

/// A node in a keyed tree.
pub trait PathNode: Sized {
    /// Borrow the child stored under `key`, if this node is a container
    /// holding it.
    fn child(&self, key: &str) -> Option<&Self>;

    /// Mutably borrow the child stored under `key`.
    fn child_mut(&mut self, key: &str) -> Option<&mut Self>;

    /// Store `value` under `key`, overwriting any previous child.
    ///
    /// Returns `false` (and drops `value`) if this node is not a container.
    fn insert_child(&mut self, key: &str, value: Self) -> bool;

    /// Remove and return the child stored under `key`.
    fn remove_child(&mut self, key: &str) -> Option<Self>;

    /// Returns `true` if this node can hold keyed children.
    fn is_container(&self) -> bool;

    /// A new, empty container node. Used to autovivify missing intermediate
    /// segments on [`set`](crate::set).
    fn empty_container() -> Self;
}

/// The root of a keyed tree.
pub trait PathRoot {
    /// Node type stored in this root.
    type Node: PathNode;

    /// Borrow the entry stored under `key`.
    fn entry(&self, key: &str) -> Option<&Self::Node>;

    /// Mutably borrow the entry stored under `key`.
    fn entry_mut(&mut self, key: &str) -> Option<&mut Self::Node>;

    /// Store `value` under `key`, overwriting any previous entry.
    fn insert_entry(&mut self, key: &str, value: Self::Node);

    /// Remove and return the entry stored under `key`.
    fn remove_entry(&mut self, key: &str) -> Option<Self::Node>;
}
