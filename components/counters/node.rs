/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The counter forest: nodes live in an arena and refer to each other by id.
//!
//! A reset node opens a scope; the nodes of its scope are its children and
//! increment nodes are always leaves. `count_in_parent` is the running value
//! of the counter at a node, seeded by the parent's value.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

use log::warn;
use rustc_hash::FxHashSet;

/// A handle to a node in a [`CounterForest`]. Handles of destroyed nodes are
/// never reused for a different node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CounterNodeId {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
pub struct CounterNode<N> {
    owner: N,
    has_reset_type: bool,
    value: i32,
    count_in_parent: i32,
    parent: Option<CounterNodeId>,
    previous_sibling: Option<CounterNodeId>,
    next_sibling: Option<CounterNodeId>,
    first_child: Option<CounterNodeId>,
    last_child: Option<CounterNodeId>,
    pub(crate) placement_deferred: bool,
}

impl<N: Copy> CounterNode<N> {
    /// The element whose style created this node.
    pub fn owner(&self) -> N {
        self.owner
    }

    pub fn has_reset_type(&self) -> bool {
        self.has_reset_type
    }

    /// A root node opens a scope even when it was created by an increment.
    pub fn acts_as_reset(&self) -> bool {
        self.has_reset_type || self.parent.is_none()
    }

    /// The reset value, or the increment step.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn count_in_parent(&self) -> i32 {
        self.count_in_parent
    }

    pub fn parent(&self) -> Option<CounterNodeId> {
        self.parent
    }

    pub fn previous_sibling(&self) -> Option<CounterNodeId> {
        self.previous_sibling
    }

    pub fn next_sibling(&self) -> Option<CounterNodeId> {
        self.next_sibling
    }

    pub fn first_child(&self) -> Option<CounterNodeId> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<CounterNodeId> {
        self.last_child
    }

    /// Whether this node is waiting for a consistent place in the forest.
    pub fn is_placement_deferred(&self) -> bool {
        self.placement_deferred
    }

    /// The value this node shows: its own value when it opens a scope,
    /// otherwise the running count.
    pub fn displayed_value(&self) -> i32 {
        if self.acts_as_reset() {
            self.value
        } else {
            self.count_in_parent
        }
    }
}

struct Slot<N> {
    generation: u32,
    node: Option<CounterNode<N>>,
}

/// Owns every counter node of a document, across all counter names.
pub struct CounterForest<N> {
    slots: Vec<Slot<N>>,
    free: Vec<u32>,
    /// Owners whose counter text may have changed since the last
    /// `take_damage`.
    damaged: FxHashSet<N>,
}

impl<N> Default for CounterForest<N> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            damaged: FxHashSet::default(),
        }
    }
}

impl<N: Copy + Debug + Eq + Hash> CounterForest<N> {
    pub fn get(&self, id: CounterNodeId) -> Option<&CounterNode<N>> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    fn get_mut(&mut self, id: CounterNodeId) -> Option<&mut CounterNode<N>> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    pub fn contains(&self, id: CounterNodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create an unlinked node.
    pub(crate) fn create(&mut self, owner: N, has_reset_type: bool, value: i32) -> CounterNodeId {
        let node = CounterNode {
            owner,
            has_reset_type,
            value,
            count_in_parent: 0,
            parent: None,
            previous_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            placement_deferred: false,
        };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                CounterNodeId {
                    index,
                    generation: slot.generation,
                }
            },
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                CounterNodeId {
                    index,
                    generation: 0,
                }
            },
        }
    }

    /// Drop an unlinked, childless node. Its id becomes stale.
    pub(crate) fn release(&mut self, id: CounterNodeId) {
        let Some(slot) = self.slots.get_mut(id.index as usize) else {
            return;
        };
        if slot.generation != id.generation || slot.node.is_none() {
            return;
        }
        debug_assert!(slot.node.as_ref().is_some_and(|node| {
            node.parent.is_none() && node.first_child.is_none()
        }));
        slot.node = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
    }

    fn compute_count_in_parent(&self, id: CounterNodeId) -> i32 {
        let node = &self[id];
        let increment = if node.acts_as_reset() { 0 } else { node.value };
        let base = match (node.previous_sibling, node.parent) {
            (Some(previous), _) => self[previous].count_in_parent,
            (None, Some(parent)) => self[parent].value,
            (None, None) => return 0,
        };
        base.saturating_add(increment)
    }

    /// Refresh the cached counts from `id` onwards, stopping at the first
    /// sibling whose count did not change.
    pub(crate) fn recount(&mut self, id: CounterNodeId) {
        let mut current = Some(id);
        while let Some(node) = current {
            let count = self.compute_count_in_parent(node);
            if count == self[node].count_in_parent {
                break;
            }
            self[node].count_in_parent = count;
            self.damage_subtree(node);
            current = self[node].next_sibling;
        }
    }

    /// Splice `child` into `parent`'s children right after `reference`, or
    /// first when `reference` is `None`.
    ///
    /// A former root that is not a reset gives up its scope: its children
    /// become its following siblings.
    pub(crate) fn link_after(
        &mut self,
        parent: CounterNodeId,
        child: CounterNodeId,
        reference: Option<CounterNodeId>,
    ) -> bool {
        if reference.is_some_and(|reference| self[reference].parent != Some(parent)) {
            warn!("Refusing to insert {child:?}: {reference:?} is not a child of {parent:?}");
            return false;
        }
        debug_assert!(self[child].parent.is_none());

        let next = match reference {
            Some(reference) => self[reference].next_sibling.replace(child),
            None => self[parent].first_child.replace(child),
        };
        {
            let node = &mut self[child];
            node.parent = Some(parent);
            node.previous_sibling = reference;
            node.next_sibling = next;
        }
        match next {
            Some(next) => self[next].previous_sibling = Some(child),
            None => self[parent].last_child = Some(child),
        }

        let orphans = if self[child].has_reset_type {
            None
        } else {
            self[child].first_child.zip(self[child].last_child)
        };
        let Some((first, last)) = orphans else {
            self[child].count_in_parent = self.compute_count_in_parent(child);
            self.damage_subtree(child);
            if let Some(next) = next {
                self.recount(next);
            }
            return true;
        };

        self[child].next_sibling = Some(first);
        self[first].previous_sibling = Some(child);
        self[last].next_sibling = next;
        match next {
            Some(next) => self[next].previous_sibling = Some(last),
            None => self[parent].last_child = Some(last),
        }
        let mut current = Some(first);
        while let Some(orphan) = current {
            self[orphan].parent = Some(parent);
            current = if orphan == last {
                None
            } else {
                self[orphan].next_sibling
            };
        }
        {
            let node = &mut self[child];
            node.first_child = None;
            node.last_child = None;
        }
        self[child].count_in_parent = self.compute_count_in_parent(child);
        self.damage_subtree(child);
        self.recount(first);
        if let Some(next) = next {
            self.recount(next);
        }
        true
    }

    /// Detach `child` from its parent. Its own children stay with it.
    pub(crate) fn unlink(&mut self, child: CounterNodeId) {
        let Some(parent) = self[child].parent else {
            return;
        };
        let (previous, next) = {
            let node = &mut self[child];
            let siblings = (node.previous_sibling.take(), node.next_sibling.take());
            node.parent = None;
            node.count_in_parent = 0;
            siblings
        };
        match previous {
            Some(previous) => self[previous].next_sibling = next,
            None => self[parent].first_child = next,
        }
        match next {
            Some(next) => self[next].previous_sibling = previous,
            None => self[parent].last_child = previous,
        }
        self.damage_subtree(child);
        if let Some(next) = next {
            self.recount(next);
        }
    }

    pub fn last_descendant(&self, id: CounterNodeId) -> CounterNodeId {
        let mut last = id;
        while let Some(child) = self[last].last_child {
            last = child;
        }
        last
    }

    pub fn previous_in_preorder(&self, id: CounterNodeId) -> Option<CounterNodeId> {
        match self[id].previous_sibling {
            Some(previous) => Some(self.last_descendant(previous)),
            None => self[id].parent,
        }
    }

    /// The next node in preorder within the tree rooted at `stay_within`.
    pub fn next_in_preorder(
        &self,
        id: CounterNodeId,
        stay_within: CounterNodeId,
    ) -> Option<CounterNodeId> {
        if let Some(child) = self[id].first_child {
            return Some(child);
        }
        let mut current = id;
        loop {
            if current == stay_within {
                return None;
            }
            if let Some(next) = self[current].next_sibling {
                return Some(next);
            }
            current = self[current].parent?;
        }
    }

    pub fn root(&self, id: CounterNodeId) -> CounterNodeId {
        let mut root = id;
        while let Some(parent) = self[root].parent {
            root = parent;
        }
        root
    }

    /// Nesting depth below the root.
    pub fn depth(&self, id: CounterNodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self[current].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    pub(crate) fn damage(&mut self, owner: N) {
        self.damaged.insert(owner);
    }

    fn damage_subtree(&mut self, id: CounterNodeId) {
        let mut current = Some(id);
        while let Some(node) = current {
            let owner = self[node].owner;
            self.damaged.insert(owner);
            current = self.next_in_preorder(node, id);
        }
    }

    pub(crate) fn take_damage(&mut self) -> FxHashSet<N> {
        std::mem::take(&mut self.damaged)
    }
}

impl<N: Copy + Debug + Eq + Hash> Index<CounterNodeId> for CounterForest<N> {
    type Output = CounterNode<N>;

    fn index(&self, id: CounterNodeId) -> &CounterNode<N> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale counter node {id:?}"),
        }
    }
}

impl<N: Copy + Debug + Eq + Hash> IndexMut<CounterNodeId> for CounterForest<N> {
    fn index_mut(&mut self, id: CounterNodeId) -> &mut CounterNode<N> {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale counter node {id:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> CounterForest<u32> {
        CounterForest::default()
    }

    #[test]
    fn test_count_in_parent_runs_from_parent_value() {
        let mut forest = forest();
        let reset = forest.create(0, true, 10);
        let first = forest.create(1, false, 1);
        let second = forest.create(2, false, 2);
        assert!(forest.link_after(reset, first, None));
        assert!(forest.link_after(reset, second, Some(first)));
        assert_eq!(forest[first].count_in_parent(), 11);
        assert_eq!(forest[second].count_in_parent(), 13);
        assert!(!forest[first].acts_as_reset());
        assert!(forest[reset].acts_as_reset());

        // Inserting in front shifts everything after it.
        let zeroth = forest.create(3, false, 5);
        assert!(forest.link_after(reset, zeroth, None));
        assert_eq!(forest[zeroth].count_in_parent(), 15);
        assert_eq!(forest[first].count_in_parent(), 16);
        assert_eq!(forest[second].count_in_parent(), 18);

        forest.unlink(zeroth);
        assert_eq!(forest[first].count_in_parent(), 11);
        assert_eq!(forest[second].count_in_parent(), 13);
        assert_eq!(forest[zeroth].parent(), None);
        assert_eq!(forest[reset].first_child(), Some(first));
    }

    #[test]
    fn test_nested_reset_adds_nothing() {
        let mut forest = forest();
        let root = forest.create(0, true, 0);
        let increment = forest.create(1, false, 1);
        let nested = forest.create(2, true, 7);
        let after = forest.create(3, false, 1);
        forest.link_after(root, increment, None);
        forest.link_after(root, nested, Some(increment));
        forest.link_after(root, after, Some(nested));
        assert_eq!(forest[nested].count_in_parent(), 1);
        assert_eq!(forest[nested].displayed_value(), 7);
        assert_eq!(forest[after].count_in_parent(), 2);
    }

    #[test]
    fn test_former_root_hands_children_to_new_parent() {
        let mut forest = forest();
        let orphan_scope = forest.create(1, false, 1);
        let a = forest.create(2, false, 1);
        let b = forest.create(3, false, 1);
        forest.link_after(orphan_scope, a, None);
        forest.link_after(orphan_scope, b, Some(a));
        assert_eq!(forest[b].count_in_parent(), 3);

        let reset = forest.create(0, true, 0);
        assert!(forest.link_after(reset, orphan_scope, None));
        assert_eq!(forest[orphan_scope].first_child(), None);
        assert_eq!(forest[orphan_scope].next_sibling(), Some(a));
        assert_eq!(forest[a].parent(), Some(reset));
        assert_eq!(forest[reset].last_child(), Some(b));
        assert_eq!(forest[orphan_scope].count_in_parent(), 1);
        assert_eq!(forest[a].count_in_parent(), 2);
        assert_eq!(forest[b].count_in_parent(), 3);
    }

    #[test]
    fn test_refuses_foreign_reference() {
        let mut forest = forest();
        let one = forest.create(0, true, 0);
        let two = forest.create(1, true, 0);
        let child = forest.create(2, false, 1);
        let stranger = forest.create(3, false, 1);
        forest.link_after(two, child, None);
        assert!(!forest.link_after(one, stranger, Some(child)));
        assert_eq!(forest[stranger].parent(), None);
    }

    #[test]
    fn test_released_ids_go_stale() {
        let mut forest = forest();
        let id = forest.create(0, false, 1);
        forest.release(id);
        assert!(!forest.contains(id));
        let reused = forest.create(1, false, 1);
        assert_ne!(id, reused);
        assert!(forest.get(id).is_none());
        assert_eq!(forest.len(), 1);
    }

    #[test]
    fn test_preorder_and_damage() {
        let mut forest = forest();
        let root = forest.create(0, true, 0);
        let scope = forest.create(1, true, 0);
        let inner = forest.create(2, false, 1);
        let tail = forest.create(3, false, 1);
        forest.link_after(root, scope, None);
        forest.link_after(scope, inner, None);
        forest.link_after(root, tail, Some(scope));
        assert_eq!(forest.next_in_preorder(root, root), Some(scope));
        assert_eq!(forest.next_in_preorder(inner, root), Some(tail));
        assert_eq!(forest.next_in_preorder(tail, root), None);
        assert_eq!(forest.previous_in_preorder(tail), Some(inner));
        assert_eq!(forest.last_descendant(root), tail);
        assert_eq!(forest.depth(inner), 2);
        assert_eq!(forest.root(inner), root);

        let damaged = forest.take_damage();
        assert!(damaged.contains(&2) && damaged.contains(&3));
        assert!(forest.take_damage().is_empty());
    }
}
