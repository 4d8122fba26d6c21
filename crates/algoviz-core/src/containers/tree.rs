//! Tree arena.
//!
//! Nodes are stored in slots addressed by [`TreeNodeId`]. Each node owns its
//! value, holds either binary (`left`/`right`) or N-ary (ordered list) child
//! links, and keeps a non-owning `parent` back-link. The representation a node
//! uses always matches the tree's [`TreeShape`].
//!
//! The arena only provides structural primitives; insertion policies,
//! traversals and shape conversion live in `algoviz-algorithms`.

use algoviz_common::{Error, Result, TreeNodeId, Value, ValueType};
use smallvec::SmallVec;

/// Default branching degree for N-ary trees.
pub const DEFAULT_NARY_DEGREE: usize = 3;

/// How many children a node may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeShape {
    /// At most a left and a right child.
    #[default]
    Binary,
    /// An ordered list of at most `degree` children.
    Nary {
        /// Maximum number of children per node.
        degree: usize,
    },
}

impl TreeShape {
    /// Returns `true` for [`TreeShape::Binary`].
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Binary)
    }

    /// Returns the maximum child count per node.
    #[must_use]
    pub const fn degree(self) -> usize {
        match self {
            Self::Binary => 2,
            Self::Nary { degree } => degree,
        }
    }

    /// Checks that the shape can hold more than a root.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for an N-ary degree of zero.
    pub fn validate(self) -> Result<()> {
        if self.degree() == 0 {
            return Err(Error::InvalidConfig(
                "N-ary tree degree must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A node's child links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// Binary links.
    Binary {
        /// Left child.
        left: Option<TreeNodeId>,
        /// Right child.
        right: Option<TreeNodeId>,
    },
    /// Ordered N-ary links.
    Nary(SmallVec<[TreeNodeId; 4]>),
}

impl Children {
    fn empty(shape: TreeShape) -> Self {
        match shape {
            TreeShape::Binary => Self::Binary {
                left: None,
                right: None,
            },
            TreeShape::Nary { .. } => Self::Nary(SmallVec::new()),
        }
    }

    /// Returns the present children in order (left before right).
    #[must_use]
    pub fn ids(&self) -> SmallVec<[TreeNodeId; 4]> {
        match self {
            Self::Binary { left, right } => left.iter().chain(right.iter()).copied().collect(),
            Self::Nary(ids) => ids.clone(),
        }
    }

    /// Returns the number of present children.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Binary { left, right } => usize::from(left.is_some()) + usize::from(right.is_some()),
            Self::Nary(ids) => ids.len(),
        }
    }

    /// Returns `true` if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove(&mut self, child: TreeNodeId) -> bool {
        match self {
            Self::Binary { left, right } => {
                if *left == Some(child) {
                    *left = None;
                    true
                } else if *right == Some(child) {
                    *right = None;
                    true
                } else {
                    false
                }
            }
            Self::Nary(ids) => match ids.iter().position(|&c| c == child) {
                Some(pos) => {
                    ids.remove(pos);
                    true
                }
                None => false,
            },
        }
    }
}

/// Which binary child slot to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The left slot.
    Left,
    /// The right slot.
    Right,
}

#[derive(Debug, Clone)]
struct TreeNode {
    value: Value,
    parent: Option<TreeNodeId>,
    children: Children,
}

/// A binary or N-ary tree of values of one kind.
#[derive(Debug, Clone)]
pub struct Tree {
    value_type: ValueType,
    shape: TreeShape,
    slots: Vec<Option<TreeNode>>,
    free: Vec<TreeNodeId>,
    root: Option<TreeNodeId>,
    len: usize,
}

impl Tree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new(value_type: ValueType, shape: TreeShape) -> Self {
        Self {
            value_type,
            shape,
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Returns the element kind.
    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the current shape.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> TreeShape {
        self.shape
    }

    /// Returns the root handle.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> Option<TreeNodeId> {
        self.root
    }

    /// Returns the number of live nodes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `id` addresses a live node.
    #[must_use]
    pub fn contains(&self, id: TreeNodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the value at `id`.
    #[must_use]
    pub fn value(&self, id: TreeNodeId) -> Option<&Value> {
        self.node(id).map(|n| &n.value)
    }

    /// Replaces the value at `id`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` for a dead handle or
    /// `Error::TypeMismatch` for a value of another kind.
    pub fn replace_value(&mut self, id: TreeNodeId, value: Value) -> Result<Value> {
        Error::check_type(self.value_type, value.value_type())?;
        let node = self.node_mut(id)?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    /// Returns the parent of `id`.
    #[must_use]
    pub fn parent(&self, id: TreeNodeId) -> Option<TreeNodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Returns the child links of `id`.
    #[must_use]
    pub fn children(&self, id: TreeNodeId) -> Option<&Children> {
        self.node(id).map(|n| &n.children)
    }

    /// Returns the present children of `id` in order.
    #[must_use]
    pub fn child_ids(&self, id: TreeNodeId) -> SmallVec<[TreeNodeId; 4]> {
        self.children(id).map(Children::ids).unwrap_or_default()
    }

    /// Returns the left child of a binary node.
    #[must_use]
    pub fn left(&self, id: TreeNodeId) -> Option<TreeNodeId> {
        match self.children(id)? {
            Children::Binary { left, .. } => *left,
            Children::Nary(_) => None,
        }
    }

    /// Returns the right child of a binary node.
    #[must_use]
    pub fn right(&self, id: TreeNodeId) -> Option<TreeNodeId> {
        match self.children(id)? {
            Children::Binary { right, .. } => *right,
            Children::Nary(_) => None,
        }
    }

    // === Structural edits ===

    /// Creates the root node.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeViolation` if the tree already has a root, or
    /// `Error::TypeMismatch` for a value of another kind.
    pub fn insert_root(&mut self, value: Value) -> Result<TreeNodeId> {
        Error::check_type(self.value_type, value.value_type())?;
        if self.root.is_some() {
            return Err(Error::ShapeViolation("tree already has a root".into()));
        }
        let id = self.alloc(value, None);
        self.root = Some(id);
        Ok(id)
    }

    /// Creates a binary child of `parent` in the empty slot `side`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` for a dead parent, `Error::ShapeViolation`
    /// if the tree is N-ary or the slot is occupied, or `Error::TypeMismatch`.
    pub fn attach_binary(&mut self, parent: TreeNodeId, side: Side, value: Value) -> Result<TreeNodeId> {
        Error::check_type(self.value_type, value.value_type())?;
        match &self.node_ref(parent)?.children {
            Children::Binary { left, right } => {
                let slot = match side {
                    Side::Left => left,
                    Side::Right => right,
                };
                if slot.is_some() {
                    return Err(Error::ShapeViolation(format!("{side:?} child slot is occupied")));
                }
            }
            Children::Nary(_) => {
                return Err(Error::ShapeViolation("binary attach on an N-ary node".into()));
            }
        }
        let id = self.alloc(value, Some(parent));
        if let Children::Binary { left, right } = &mut self.node_mut(parent)?.children {
            match side {
                Side::Left => *left = Some(id),
                Side::Right => *right = Some(id),
            }
        }
        Ok(id)
    }

    /// Appends an N-ary child to `parent`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` for a dead parent, `Error::ShapeViolation`
    /// if the tree is binary or `parent` already has `degree` children, or
    /// `Error::TypeMismatch`.
    pub fn attach_child(&mut self, parent: TreeNodeId, value: Value) -> Result<TreeNodeId> {
        Error::check_type(self.value_type, value.value_type())?;
        let degree = self.shape.degree();
        match &self.node_ref(parent)?.children {
            Children::Nary(ids) if ids.len() < degree => {}
            Children::Nary(_) => {
                return Err(Error::ShapeViolation(format!("node already has {degree} children")));
            }
            Children::Binary { .. } => {
                return Err(Error::ShapeViolation("N-ary attach on a binary node".into()));
            }
        }
        let id = self.alloc(value, Some(parent));
        if let Children::Nary(ids) = &mut self.node_mut(parent)?.children {
            ids.push(id);
        }
        Ok(id)
    }

    /// Detaches the subtree rooted at `id` and frees every node in it,
    /// returning the number of nodes removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` for a dead handle.
    pub fn remove_subtree(&mut self, id: TreeNodeId) -> Result<usize> {
        let parent = self.node_ref(id)?.parent;
        match parent {
            Some(p) => {
                self.node_mut(p)?.children.remove(id);
            }
            None => self.root = None,
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.slots.get_mut(current.slot()).and_then(Option::take) {
                stack.extend(node.children.ids());
                self.free.push(current);
                removed += 1;
            }
        }
        self.len -= removed;
        Ok(removed)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Removes every node and switches to `shape`.
    pub fn reset(&mut self, shape: TreeShape) {
        self.clear();
        self.shape = shape;
    }

    /// Replaces the child links of every node and switches to `shape`.
    ///
    /// `links` maps each live node to its new children; nodes not listed get
    /// no children. Parent back-links are recomputed from the new links. The
    /// root stays the root.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeViolation` if a link set does not match `shape`,
    /// or `Error::NodeNotFound` if a link names a dead node.
    pub fn relink<I>(&mut self, shape: TreeShape, links: I) -> Result<()>
    where
        I: IntoIterator<Item = (TreeNodeId, Children)>,
    {
        let mut staged: Vec<Option<Children>> = vec![None; self.slots.len()];
        for (id, children) in links {
            let fits = match (&children, shape) {
                (Children::Binary { .. }, TreeShape::Binary) => true,
                (Children::Nary(ids), TreeShape::Nary { degree }) => ids.len() <= degree,
                _ => false,
            };
            if !fits {
                return Err(Error::ShapeViolation(format!("links of {id:?} do not fit {shape:?}")));
            }
            for child in children.ids() {
                self.node_ref(child)?;
            }
            self.node_ref(id)?;
            staged[id.slot()] = Some(children);
        }

        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if let Some(node) = entry {
                node.children = staged[slot].take().unwrap_or_else(|| Children::empty(shape));
                node.parent = None;
            }
        }
        for slot in 0..self.slots.len() {
            let Some(node) = &self.slots[slot] else { continue };
            for child in node.children.ids() {
                if let Some(child_node) = self.slots[child.slot()].as_mut() {
                    child_node.parent = Some(TreeNodeId::from_slot(slot));
                }
            }
        }
        self.shape = shape;
        Ok(())
    }

    // === Internals ===

    fn node(&self, id: TreeNodeId) -> Option<&TreeNode> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    fn node_ref(&self, id: TreeNodeId) -> Result<&TreeNode> {
        self.node(id)
            .ok_or_else(|| Error::NodeNotFound(format!("tree slot {}", id.slot())))
    }

    fn node_mut(&mut self, id: TreeNodeId) -> Result<&mut TreeNode> {
        self.slots
            .get_mut(id.slot())
            .and_then(Option::as_mut)
            .ok_or_else(|| Error::NodeNotFound(format!("tree slot {}", id.slot())))
    }

    fn alloc(&mut self, value: Value, parent: Option<TreeNodeId>) -> TreeNodeId {
        let node = TreeNode {
            value,
            parent,
            children: Children::empty(self.shape),
        };
        self.len += 1;
        if let Some(id) = self.free.pop() {
            self.slots[id.slot()] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            TreeNodeId::from_slot(self.slots.len() - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i32) -> Value {
        Value::Integer(v)
    }

    #[test]
    fn test_shape_validate() {
        assert!(TreeShape::Binary.validate().is_ok());
        assert!(TreeShape::Nary { degree: 1 }.validate().is_ok());
        assert!(matches!(
            TreeShape::Nary { degree: 0 }.validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_binary_attach() {
        let mut tree = Tree::new(ValueType::Integer, TreeShape::Binary);
        let root = tree.insert_root(int(10)).unwrap();
        let l = tree.attach_binary(root, Side::Left, int(5)).unwrap();
        let r = tree.attach_binary(root, Side::Right, int(15)).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.left(root), Some(l));
        assert_eq!(tree.right(root), Some(r));
        assert_eq!(tree.parent(l), Some(root));
        assert_eq!(tree.child_ids(root).as_slice(), &[l, r]);
        assert!(matches!(
            tree.attach_binary(root, Side::Left, int(1)),
            Err(Error::ShapeViolation(_))
        ));
        assert!(tree.insert_root(int(1)).is_err());
    }

    #[test]
    fn test_nary_degree_limit() {
        let mut tree = Tree::new(ValueType::Integer, TreeShape::Nary { degree: 2 });
        let root = tree.insert_root(int(1)).unwrap();
        tree.attach_child(root, int(2)).unwrap();
        tree.attach_child(root, int(3)).unwrap();
        assert!(tree.attach_child(root, int(4)).is_err());
        assert!(tree.attach_binary(root, Side::Left, int(4)).is_err());
        assert_eq!(tree.left(root), None);
    }

    #[test]
    fn test_remove_subtree() {
        let mut tree = Tree::new(ValueType::Integer, TreeShape::Nary { degree: 3 });
        let root = tree.insert_root(int(1)).unwrap();
        let a = tree.attach_child(root, int(2)).unwrap();
        let b = tree.attach_child(root, int(3)).unwrap();
        tree.attach_child(a, int(4)).unwrap();
        tree.attach_child(a, int(5)).unwrap();

        assert_eq!(tree.remove_subtree(a).unwrap(), 3);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.child_ids(root).as_slice(), &[b]);
        assert!(!tree.contains(a));

        // Freed slots are reused
        let c = tree.attach_child(root, int(6)).unwrap();
        assert!(c.slot() < 5);

        assert_eq!(tree.remove_subtree(root).unwrap(), 3);
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_replace_value() {
        let mut tree = Tree::new(ValueType::Text, TreeShape::Binary);
        let root = tree.insert_root(Value::text("a")).unwrap();
        assert_eq!(tree.replace_value(root, Value::text("b")).unwrap(), Value::text("a"));
        assert!(tree.replace_value(root, int(1)).is_err());
        assert_eq!(tree.value(root), Some(&Value::text("b")));
    }

    #[test]
    fn test_relink_to_binary() {
        let mut tree = Tree::new(ValueType::Integer, TreeShape::Nary { degree: 3 });
        let root = tree.insert_root(int(1)).unwrap();
        let a = tree.attach_child(root, int(2)).unwrap();
        let b = tree.attach_child(root, int(3)).unwrap();

        tree.relink(
            TreeShape::Binary,
            [
                (root, Children::Binary { left: Some(a), right: None }),
                (a, Children::Binary { left: None, right: Some(b) }),
            ],
        )
        .unwrap();

        assert!(tree.shape().is_binary());
        assert_eq!(tree.left(root), Some(a));
        assert_eq!(tree.right(a), Some(b));
        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.right(b), None);
    }

    #[test]
    fn test_relink_rejects_mismatched_links() {
        let mut tree = Tree::new(ValueType::Integer, TreeShape::Binary);
        let root = tree.insert_root(int(1)).unwrap();
        let result = tree.relink(TreeShape::Binary, [(root, Children::Nary(SmallVec::new()))]);
        assert!(result.is_err());
    }
}
