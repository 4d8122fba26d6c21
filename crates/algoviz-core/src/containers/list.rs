//! Singly or doubly linked list over a slot arena.
//!
//! Nodes live in a `Vec` of slots addressed by [`ListNodeId`]; freed slots are
//! recycled through a free list. `next` links own the chain conceptually,
//! `prev` links are back-references maintained only in doubly linked mode.
//!
//! Invariants:
//! - `len` equals the number of nodes reachable from `head`
//! - `tail.next` is always `None`
//! - in doubly linked mode, `a.next == b` iff `b.prev == a`

use crate::observer::SortObserver;
use crate::render::RenderedText;
use crate::sorting::{SortAlgorithm, SortOutcome, sort_by};
use algoviz_common::{Error, ListNodeId, RandomProfile, Result, Value, ValueGenerator, ValueType};

/// Node count above which rendering drops accent hints.
pub const LIST_STYLED_LIMIT: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
struct ListNode {
    value: Value,
    next: Option<ListNodeId>,
    prev: Option<ListNodeId>,
}

/// A linked list of values of one kind.
#[derive(Debug, Clone)]
pub struct LinkedList {
    value_type: ValueType,
    doubly: bool,
    slots: Vec<Option<ListNode>>,
    free: Vec<ListNodeId>,
    head: Option<ListNodeId>,
    tail: Option<ListNodeId>,
    len: usize,
}

impl LinkedList {
    /// Creates an empty list.
    #[must_use]
    pub fn new(value_type: ValueType, doubly: bool) -> Self {
        Self {
            value_type,
            doubly,
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Builds a list from whitespace-separated literals, appended in order.
    #[must_use]
    pub fn parse(value_type: ValueType, doubly: bool, input: &str) -> Self {
        let mut list = Self::new(value_type, doubly);
        for value in value_type.parse_tokens(input) {
            list.push_back(value);
        }
        list
    }

    /// Returns the element kind.
    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns `true` if nodes carry `prev` links.
    #[inline]
    #[must_use]
    pub const fn is_doubly(&self) -> bool {
        self.doubly
    }

    /// Returns the number of nodes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head handle.
    #[must_use]
    pub const fn head(&self) -> Option<ListNodeId> {
        self.head
    }

    /// Returns the tail handle.
    #[must_use]
    pub const fn tail(&self) -> Option<ListNodeId> {
        self.tail
    }

    /// Returns the value stored at `id`.
    #[must_use]
    pub fn value(&self, id: ListNodeId) -> Option<&Value> {
        self.node(id).map(|n| &n.value)
    }

    /// Returns the successor of `id`.
    #[must_use]
    pub fn next(&self, id: ListNodeId) -> Option<ListNodeId> {
        self.node(id).and_then(|n| n.next)
    }

    /// Returns the predecessor of `id`. Always `None` in singly linked mode.
    #[must_use]
    pub fn prev(&self, id: ListNodeId) -> Option<ListNodeId> {
        self.node(id).and_then(|n| n.prev)
    }

    // === Mutation ===

    /// Inserts `value` at `position`.
    ///
    /// Position 0 inserts at the head; a negative position or one at or past
    /// the end appends at the tail. Otherwise the node is spliced in so that
    /// it ends up at `position`. Returns the new node's handle.
    ///
    /// # Errors
    ///
    /// Returns `Error::TypeMismatch` if `value` is of another kind; the list
    /// is left unchanged.
    pub fn insert_at(&mut self, value: Value, position: isize) -> Result<ListNodeId> {
        Error::check_type(self.value_type, value.value_type())?;
        let id = match usize::try_from(position) {
            Ok(0) => self.push_front(value),
            Ok(pos) if pos < self.len => {
                let before = self.nth(pos - 1).ok_or(Error::InvalidIndex {
                    index: pos,
                    len: self.len,
                })?;
                self.insert_after(before, value)
            }
            _ => self.push_back(value),
        };
        tracing::debug!(position, len = self.len, "list node inserted");
        Ok(id)
    }

    /// Removes the node at `position`, returning its value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIndex` if the list is empty or `position` is out
    /// of range; the list is left unchanged.
    pub fn delete_at(&mut self, position: usize) -> Result<Value> {
        let id = self.nth(position).ok_or(Error::InvalidIndex {
            index: position,
            len: self.len,
        })?;
        let value = self.unlink(id);
        tracing::debug!(position, len = self.len, "list node deleted");
        Ok(value)
    }

    /// Replaces the value at `position`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIndex` for an out-of-range position or
    /// `Error::TypeMismatch` for a value of another kind.
    pub fn modify_at(&mut self, position: usize, value: Value) -> Result<Value> {
        Error::check_type(self.value_type, value.value_type())?;
        let id = self.nth(position).ok_or(Error::InvalidIndex {
            index: position,
            len: self.len,
        })?;
        let node = self.node_mut(id);
        Ok(std::mem::replace(&mut node.value, value))
    }

    /// Appends `value` at the tail.
    pub fn push_back(&mut self, value: Value) -> ListNodeId {
        let prev = if self.doubly { self.tail } else { None };
        let id = self.alloc(ListNode {
            value,
            next: None,
            prev,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Prepends `value` at the head.
    pub fn push_front(&mut self, value: Value) -> ListNodeId {
        let id = self.alloc(ListNode {
            value,
            next: self.head,
            prev: None,
        });
        match self.head {
            Some(head) => {
                if self.doubly {
                    self.node_mut(head).prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Clears the list and appends `size` random values.
    pub fn fill_random(&mut self, size: usize, generator: &mut ValueGenerator) {
        self.clear();
        self.slots.reserve(size);
        for _ in 0..size {
            let value = generator.value(self.value_type, RandomProfile::List);
            self.push_back(value);
        }
    }

    // === Traversal ===

    /// Iterates values from head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
            forward: true,
        }
    }

    /// Iterates values from tail to head by following `prev` links.
    ///
    /// Returns `None` for singly linked lists, which keep no back-links.
    #[must_use]
    pub fn iter_rev(&self) -> Option<Iter<'_>> {
        self.doubly.then_some(Iter {
            list: self,
            cursor: self.tail,
            forward: false,
        })
    }

    /// Returns the values in list order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Renders the list as `a -> b -> c`, or `(empty)`.
    ///
    /// With `styled`, every node is accented unless the list has more than
    /// [`LIST_STYLED_LIMIT`] nodes.
    #[must_use]
    pub fn to_text(&self, styled: bool) -> RenderedText {
        self.to_text_with_limit(styled, LIST_STYLED_LIMIT)
    }

    /// Like [`to_text`](Self::to_text) with an explicit styling limit.
    #[must_use]
    pub fn to_text_with_limit(&self, styled: bool, limit: usize) -> RenderedText {
        let styled = styled && self.len <= limit;
        RenderedText::new(self.iter().map(Value::render), " -> ", |_| styled)
            .with_placeholder("(empty)")
    }

    /// Sorts the values in a scratch buffer, then writes them back in list
    /// order. Node handles stay valid.
    pub fn sort<O>(&mut self, algorithm: SortAlgorithm, observer: &mut O) -> SortOutcome
    where
        O: SortObserver<Value> + ?Sized,
    {
        if self.is_empty() {
            return SortOutcome::default();
        }
        let mut scratch = self.to_vec();
        let outcome = sort_by(&mut scratch, algorithm, Value::compare, observer);
        tracing::debug!(
            algorithm = algorithm.name(),
            len = self.len,
            elapsed_ns = outcome.elapsed_ns,
            "list sorted"
        );

        let mut cursor = self.head;
        for value in scratch {
            let Some(id) = cursor else { break };
            let node = self.node_mut(id);
            node.value = value;
            cursor = node.next;
        }
        outcome
    }

    // === Internals ===

    fn node(&self, id: ListNodeId) -> Option<&ListNode> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    // Handles reaching this point come from the list's own links.
    fn node_mut(&mut self, id: ListNodeId) -> &mut ListNode {
        match self.slots.get_mut(id.slot()) {
            Some(Some(node)) => node,
            _ => unreachable!("dangling list handle {id:?}"),
        }
    }

    fn alloc(&mut self, node: ListNode) -> ListNodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.slot()] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            ListNodeId::from_slot(self.slots.len() - 1)
        }
    }

    fn nth(&self, position: usize) -> Option<ListNodeId> {
        if position >= self.len {
            return None;
        }
        let mut cursor = self.head;
        for _ in 0..position {
            cursor = cursor.and_then(|id| self.next(id));
        }
        cursor
    }

    fn insert_after(&mut self, before: ListNodeId, value: Value) -> ListNodeId {
        let after = self.next(before);
        let id = self.alloc(ListNode {
            value,
            next: after,
            prev: if self.doubly { Some(before) } else { None },
        });
        self.node_mut(before).next = Some(id);
        match after {
            Some(after) => {
                if self.doubly {
                    self.node_mut(after).prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.len += 1;
        id
    }

    fn unlink(&mut self, id: ListNodeId) -> Value {
        let next = self.next(id);
        // Singly linked nodes have no back-link, so walk from the head.
        let prev = if self.doubly {
            self.prev(id)
        } else {
            let mut cursor = self.head;
            let mut prev = None;
            while let Some(c) = cursor {
                if c == id {
                    break;
                }
                prev = Some(c);
                cursor = self.next(c);
            }
            prev
        };

        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if self.doubly {
                    self.node_mut(n).prev = prev;
                }
            }
            None => self.tail = prev,
        }

        self.len -= 1;
        self.free.push(id);
        match self.slots[id.slot()].take() {
            Some(node) => node.value,
            None => unreachable!("dangling list handle {id:?}"),
        }
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.value_type == other.value_type
            && self.doubly == other.doubly
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}

/// Iterator over list values.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a LinkedList,
    cursor: Option<ListNodeId>,
    forward: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.node(id)?;
        self.cursor = if self.forward { node.next } else { node.prev };
        Some(&node.value)
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    fn ints(list: &LinkedList) -> Vec<i32> {
        list.iter().filter_map(Value::as_integer).collect()
    }

    #[test]
    fn test_delete_example() {
        let mut list = LinkedList::parse(ValueType::Integer, true, "10 20 30");
        assert_eq!(list.delete_at(1), Ok(Value::Integer(20)));
        assert_eq!(ints(&list), vec![10, 30]);
        assert_eq!(list.len(), 2);

        assert_eq!(
            list.delete_at(5),
            Err(Error::InvalidIndex { index: 5, len: 2 })
        );
        assert_eq!(list.len(), 2);

        let back: Vec<i32> = list.iter_rev().unwrap().filter_map(Value::as_integer).collect();
        assert_eq!(back, vec![30, 10]);
    }

    #[test]
    fn test_insert_positions() {
        let mut list = LinkedList::parse(ValueType::Integer, false, "1 2 3");
        list.insert_at(Value::Integer(0), 0).unwrap();
        list.insert_at(Value::Integer(9), -1).unwrap();
        list.insert_at(Value::Integer(8), 100).unwrap();
        list.insert_at(Value::Integer(5), 2).unwrap();
        assert_eq!(ints(&list), vec![0, 1, 5, 2, 3, 9, 8]);
        assert_eq!(list.len(), 7);
        assert_eq!(list.value(list.tail().unwrap()), Some(&Value::Integer(8)));
    }

    #[test]
    fn test_insert_rejects_wrong_type() {
        let mut list = LinkedList::new(ValueType::Integer, true);
        assert!(list.insert_at(Value::text("x"), 0).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_head_and_tail() {
        let mut list = LinkedList::parse(ValueType::Integer, true, "1 2 3");
        list.delete_at(0).unwrap();
        list.delete_at(1).unwrap();
        assert_eq!(ints(&list), vec![2]);
        assert_eq!(list.head(), list.tail());
        list.delete_at(0).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert!(list.delete_at(0).is_err());
    }

    #[test]
    fn test_singly_delete_middle_fixes_tail() {
        let mut list = LinkedList::parse(ValueType::Integer, false, "1 2 3");
        list.delete_at(2).unwrap();
        assert_eq!(list.value(list.tail().unwrap()), Some(&Value::Integer(2)));
        list.push_back(Value::Integer(4));
        assert_eq!(ints(&list), vec![1, 2, 4]);
        assert!(list.iter_rev().is_none());
    }

    #[test]
    fn test_doubly_links_consistent() {
        let mut list = LinkedList::parse(ValueType::Integer, true, "1 2 3 4 5");
        list.delete_at(2).unwrap();
        list.insert_at(Value::Integer(7), 1).unwrap();
        let mut cursor = list.head();
        let mut prev = None;
        while let Some(id) = cursor {
            assert_eq!(list.prev(id), prev);
            prev = Some(id);
            cursor = list.next(id);
        }
        assert_eq!(prev, list.tail());
    }

    #[test]
    fn test_modify_at() {
        let mut list = LinkedList::parse(ValueType::Text, false, "a b");
        let old = list.modify_at(1, Value::text("z")).unwrap();
        assert_eq!(old, Value::text("b"));
        assert_eq!(list.to_text(false).to_string(), "a -> z");
        assert!(list.modify_at(2, Value::text("q")).is_err());
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut list = LinkedList::parse(ValueType::Integer, true, "1 2 3");
        list.delete_at(1).unwrap();
        list.push_back(Value::Integer(4));
        assert_eq!(list.slots.len(), 3);
    }

    #[test]
    fn test_sort_writes_back() {
        let mut list = LinkedList::parse(ValueType::Integer, true, "4 1 3 2");
        let head = list.head().unwrap();
        list.sort(SortAlgorithm::Insertion, &mut NoopObserver);
        assert_eq!(ints(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.head(), Some(head));
    }

    #[test]
    fn test_sort_text_list_counts_work() {
        let mut list = LinkedList::parse(ValueType::Text, false, "pear apple fig");
        let outcome = list.sort(SortAlgorithm::Bubble, &mut NoopObserver);
        assert_eq!(list.to_text(false).to_string(), "apple -> fig -> pear");
        assert!(outcome.stats.comparisons > 0);
        assert!(outcome.stats.swaps > 0);
    }

    #[test]
    fn test_render() {
        let empty = LinkedList::new(ValueType::Integer, false);
        assert_eq!(empty.to_text(true).to_string(), "(empty)");

        let doubly = LinkedList::parse(ValueType::Integer, true, "1 2");
        assert_eq!(doubly.to_text(true).to_string(), "1 -> 2");
        assert!(doubly.to_text(true).is_styled());
    }

    #[test]
    fn test_fill_random_replaces() {
        let mut generator = ValueGenerator::seeded(2);
        let mut list = LinkedList::parse(ValueType::Integer, false, "1 2 3");
        list.fill_random(10, &mut generator);
        assert_eq!(list.len(), 10);
        assert!(ints(&list).iter().all(|v| (0..1000).contains(v)));
    }

    #[test]
    fn test_clone_is_independent() {
        let list = LinkedList::parse(ValueType::Text, true, "x y");
        let mut copy = list.clone();
        copy.modify_at(0, Value::text("w")).unwrap();
        assert_ne!(list, copy);
        assert_eq!(list.to_vec(), vec![Value::text("x"), Value::text("y")]);
    }
}
