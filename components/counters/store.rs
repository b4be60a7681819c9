/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The counters of one document: which element owns which counter node, and
//! the callbacks that keep the forest in step with the document.

use std::fmt::Debug;
use std::hash::Hash;

use counter_style::ListStyleType;
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::directives::{CounterDirectiveMap, CounterName, CounterPlan, plan_counter};
use crate::dom::DirectiveProvider;
use crate::node::{CounterForest, CounterNode, CounterNodeId};
use crate::opts::CounterDebugOptions;
use crate::placement::Placement;

/// The counters owned by one element, one per name. Elements rarely have
/// more than a couple.
type CounterMap = SmallVec<[(CounterName, CounterNodeId); 2]>;

/// Counter state of a document. Created along with the document and dropped
/// with it; the host serializes all calls.
pub struct CounterMapStore<N> {
    pub(crate) forest: CounterForest<N>,
    maps: FxHashMap<N, CounterMap>,
    /// (owner, name) pairs whose node is being placed right now.
    in_progress: FxHashSet<(N, CounterName)>,
    pub(crate) opts: CounterDebugOptions,
}

impl<N: Copy + Debug + Eq + Hash> Default for CounterMapStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Copy + Debug + Eq + Hash> CounterMapStore<N> {
    pub fn new() -> Self {
        Self::with_debug_options(CounterDebugOptions::default())
    }

    pub fn with_debug_options(opts: CounterDebugOptions) -> Self {
        Self {
            forest: CounterForest::default(),
            maps: FxHashMap::default(),
            in_progress: FxHashSet::default(),
            opts,
        }
    }

    pub fn debug_options(&self) -> &CounterDebugOptions {
        &self.opts
    }

    pub fn forest(&self) -> &CounterForest<N> {
        &self.forest
    }

    pub fn node(&self, id: CounterNodeId) -> Option<&CounterNode<N>> {
        self.forest.get(id)
    }

    /// The existing `name` counter of `owner`, without creating it.
    pub fn counter(&self, owner: N, name: &CounterName) -> Option<CounterNodeId> {
        self.maps
            .get(&owner)?
            .iter()
            .find(|(counter_name, _)| counter_name == name)
            .map(|&(_, id)| id)
    }

    pub fn has_counters(&self, owner: N) -> bool {
        self.maps.contains_key(&owner)
    }

    /// Owners whose counter text may have changed since the last call.
    pub fn take_damage(&mut self) -> FxHashSet<N> {
        self.forest.take_damage()
    }

    /// Return the `name` counter of `owner`, creating and placing it when
    /// `owner` declares one. With `always_create` a node is made even without
    /// a directive, as `counter()` in generated content requires.
    pub fn resolve_counter<H>(
        &mut self,
        host: &H,
        owner: N,
        name: &CounterName,
        always_create: bool,
    ) -> Option<CounterNodeId>
    where
        H: DirectiveProvider<Node = N>,
    {
        if let Some(id) = self.counter(owner, name) {
            if self.forest[id].placement_deferred {
                self.retry_placement(host, id, name);
            }
            return Some(id);
        }

        let key = (owner, name.clone());
        if self.in_progress.contains(&key) {
            return None;
        }
        let plan = match plan_counter(host, owner, name) {
            Some(plan) => plan,
            None if always_create => CounterPlan {
                is_reset: false,
                value: 0,
            },
            None => return None,
        };

        self.in_progress.insert(key.clone());
        self.resolve_preceding_counters(host, owner, name);
        let id = self.forest.create(owner, plan.is_reset, plan.value);
        let placement = self.find_place_for_counter(host, owner, name, plan.is_reset);
        self.in_progress.remove(&key);
        debug!(
            "Created {name} counter {id:?} for {owner:?} (reset: {}, value: {}) at {placement:?}",
            plan.is_reset, plan.value
        );

        match placement {
            Placement::Child {
                parent,
                previous_sibling,
            } => {
                if !self.insert_after(parent, id, previous_sibling, name) {
                    self.forest[id].placement_deferred = true;
                }
            },
            Placement::Root => {},
            Placement::Deferred => self.forest[id].placement_deferred = true,
        }
        self.maps.entry(owner).or_default().push((name.clone(), id));

        if placement == Placement::Root {
            self.adopt_root_counters(host, owner, id, name);
        }
        self.dump_if_requested(id);
        Some(id)
    }

    /// Create the missing counters of the elements before `owner`, first to
    /// last, back to the closest element that already has one. The placement
    /// search then finds them placed instead of resolving each one from
    /// inside the search of the next, which nests as deep as the list is long.
    fn resolve_preceding_counters<H>(&mut self, host: &H, owner: N, name: &CounterName)
    where
        H: DirectiveProvider<Node = N>,
    {
        let mut pending = Vec::new();
        let mut current = host.previous_in_preorder(owner);
        while let Some(element) = current {
            if self.counter(element, name).is_some() ||
                self.in_progress.contains(&(element, name.clone()))
            {
                break;
            }
            if plan_counter(host, element, name).is_some() {
                pending.push(element);
            }
            current = host.previous_in_preorder(element);
        }
        if !pending.is_empty() {
            debug!(
                "Resolving {} earlier {name} counters before {owner:?}",
                pending.len()
            );
        }
        for element in pending.into_iter().rev() {
            self.resolve_counter(host, element, name, false);
        }
    }

    fn retry_placement<H>(&mut self, host: &H, id: CounterNodeId, name: &CounterName)
    where
        H: DirectiveProvider<Node = N>,
    {
        let (owner, is_reset) = {
            let node = &self.forest[id];
            (node.owner(), node.has_reset_type())
        };
        if self.forest[id].parent().is_some() {
            // Adopted by a new root in the meantime.
            self.forest[id].placement_deferred = false;
            return;
        }
        let key = (owner, name.clone());
        if !self.in_progress.insert(key.clone()) {
            return;
        }
        let placement = self.find_place_for_counter(host, owner, name, is_reset);
        self.in_progress.remove(&key);
        if !self.forest.contains(id) {
            return;
        }

        debug!("Retried placement of {name} counter of {owner:?}: {placement:?}");
        match placement {
            Placement::Deferred => {},
            Placement::Root => {
                self.forest[id].placement_deferred = false;
                self.adopt_root_counters(host, owner, id, name);
            },
            Placement::Child {
                parent,
                previous_sibling,
            } => {
                if self.insert_after(parent, id, previous_sibling, name) {
                    self.forest[id].placement_deferred = false;
                }
            },
        }
        self.dump_if_requested(id);
    }

    /// Insert `child` under `parent` after `reference`. A reset takes over
    /// the siblings that follow it: their nodes are destroyed and get
    /// re-resolved into the new scope on their next query.
    pub(crate) fn insert_after(
        &mut self,
        parent: CounterNodeId,
        child: CounterNodeId,
        reference: Option<CounterNodeId>,
        name: &CounterName,
    ) -> bool {
        if reference.is_some_and(|reference| self.forest[reference].parent() != Some(parent)) {
            warn!(
                "Refusing to insert {name} counter {child:?}: \
                 {reference:?} is not a child of {parent:?}"
            );
            return false;
        }
        if self.forest[child].has_reset_type() {
            while let Some(last) = self.forest[parent].last_child() {
                if Some(last) == reference {
                    break;
                }
                self.destroy_subtree(last, name);
            }
        }
        self.forest.link_after(parent, child, reference)
    }

    /// A new root may be the scope that earlier orphans were missing. Move
    /// the root counters that follow `owner` among its parent's descendants
    /// under it, up to the next reset on a sibling of `owner`.
    fn adopt_root_counters<H>(
        &mut self,
        host: &H,
        owner: N,
        id: CounterNodeId,
        name: &CounterName,
    ) where
        H: DirectiveProvider<Node = N>,
    {
        if self.opts.disable_root_promotion {
            return;
        }
        let stay_within = host.parent_element(owner);
        let mut current = host.next_in_preorder(owner, stay_within, false);
        while let Some(element) = current {
            let mut skip_descendants = false;
            if let Some(counter) = self.counter(element, name) {
                skip_descendants = true;
                let node = &self.forest[counter];
                if node.parent().is_none() {
                    if stay_within == host.parent_element(element) && node.has_reset_type() {
                        break;
                    }
                    debug!("Adopting root {name} counter of {element:?} under {owner:?}");
                    let last = self.forest[id].last_child();
                    if self.insert_after(id, counter, last, name) {
                        self.forest[counter].placement_deferred = false;
                    }
                }
            }
            current = host.next_in_preorder(element, stay_within, skip_descendants);
        }
    }

    /// Tear down every counter of `owner`.
    pub fn destroy_counter_nodes(&mut self, owner: N) {
        let Some(map) = self.maps.remove(&owner) else {
            return;
        };
        for (name, id) in map {
            if self.forest.contains(id) {
                self.destroy_subtree(id, &name);
            }
        }
    }

    /// Tear down the `name` counter of `owner`. Its descendants go with it.
    pub fn destroy_counter_node(&mut self, owner: N, name: &CounterName) {
        if let Some(id) = self.counter(owner, name) {
            self.destroy_subtree(id, name);
        }
    }

    fn destroy_subtree(&mut self, id: CounterNodeId, name: &CounterName) {
        debug!(
            "Destroying {name} counter of {:?} and its scope",
            self.forest[id].owner()
        );
        let mut current = self.forest.last_descendant(id);
        while current != id {
            let Some(previous) = self.forest.previous_in_preorder(current) else {
                break;
            };
            self.discard(current, name);
            current = previous;
        }
        self.discard(id, name);
    }

    fn discard(&mut self, id: CounterNodeId, name: &CounterName) {
        let owner = self.forest[id].owner();
        self.forest.unlink(id);
        self.forest.damage(owner);
        self.forest.release(id);
        if let Some(map) = self.maps.get_mut(&owner) {
            map.retain(|entry| !(entry.0 == *name && entry.1 == id));
            if map.is_empty() {
                self.maps.remove(&owner);
            }
        }
    }

    /// Called before `element` leaves the document: drops the counters of
    /// the element and of everything inside it, last first.
    pub fn element_removed_from_tree<H>(&mut self, host: &H, element: N)
    where
        H: DirectiveProvider<Node = N>,
    {
        if self.maps.is_empty() {
            return;
        }
        let mut subtree = vec![element];
        let mut current = host.next_in_preorder(element, Some(element), false);
        while let Some(node) = current {
            subtree.push(node);
            current = host.next_in_preorder(node, Some(element), false);
        }
        for node in subtree.into_iter().rev() {
            self.destroy_counter_nodes(node);
        }
    }

    /// Called once `element` and its descendants are attached.
    pub fn subtree_attached<H>(&mut self, host: &H, element: N)
    where
        H: DirectiveProvider<Node = N>,
    {
        // Attaching the parent will take care of us.
        if host
            .parent_element(element)
            .is_some_and(|parent| !host.is_attached(parent))
        {
            return;
        }
        let mut current = Some(element);
        while let Some(node) = current {
            self.update_counters(host, node);
            current = host.next_in_preorder(node, Some(element), false);
        }
    }

    /// Create the counters `element` declares and move the existing ones
    /// whose place changed.
    fn update_counters<H>(&mut self, host: &H, element: N)
    where
        H: DirectiveProvider<Node = N>,
    {
        let Some(directives) = host.counter_directives(element) else {
            return;
        };
        for name in directives.names() {
            let Some(id) = self.counter(element, name) else {
                self.resolve_counter(host, element, name, false);
                continue;
            };
            let is_reset = self.forest[id].has_reset_type();
            let placement = self.find_place_for_counter(host, element, name, is_reset);
            if self.counter(element, name) != Some(id) {
                continue;
            }
            let (parent, previous_sibling) = {
                let node = &self.forest[id];
                (node.parent(), node.previous_sibling())
            };
            match placement {
                Placement::Child {
                    parent: new_parent,
                    previous_sibling: new_previous,
                } => {
                    if parent == Some(new_parent) && previous_sibling == new_previous {
                        continue;
                    }
                    self.forest.unlink(id);
                    if !self.insert_after(new_parent, id, new_previous, name) {
                        self.forest[id].placement_deferred = true;
                    }
                },
                Placement::Root => {
                    if parent.is_none() {
                        self.forest[id].placement_deferred = false;
                        continue;
                    }
                    self.forest.unlink(id);
                },
                Placement::Deferred => {
                    self.forest.unlink(id);
                    self.forest[id].placement_deferred = true;
                },
            }
            self.dump_if_requested(id);
        }
    }

    /// Reconcile the counters of `element` with its new directives.
    pub fn style_changed<H>(
        &mut self,
        host: &H,
        element: N,
        old: Option<&CounterDirectiveMap>,
        new: Option<&CounterDirectiveMap>,
    ) where
        H: DirectiveProvider<Node = N>,
    {
        // Detached elements get their counters when they are attached.
        if !host.is_attached(element) {
            return;
        }
        let old = old.filter(|directives| !directives.is_empty());
        let new = new.filter(|directives| !directives.is_empty());
        match (old, new) {
            (Some(old), Some(new)) => {
                for (name, directives) in new.iter() {
                    if let Some(previous) = old.get(name) {
                        if previous == directives {
                            continue;
                        }
                        self.destroy_counter_node(element, name);
                    }
                    // Created right away: a node with nothing in its scope
                    // would never be queried otherwise.
                    self.resolve_counter(host, element, name, false);
                }
                for name in old.names() {
                    if !new.contains(name) {
                        self.destroy_counter_node(element, name);
                    }
                }
            },
            (Some(_), None) => self.destroy_counter_nodes(element),
            (None, Some(new)) => {
                self.destroy_counter_nodes(element);
                for name in new.names() {
                    self.resolve_counter(host, element, name, false);
                }
            },
            (None, None) => {},
        }
    }

    /// The text of `counter(name, style)` on `element`, or of
    /// `counters(name, separator, style)` when a separator is given.
    pub fn counter_text<H>(
        &mut self,
        host: &H,
        element: N,
        name: &CounterName,
        style: ListStyleType,
        separator: Option<&str>,
    ) -> String
    where
        H: DirectiveProvider<Node = N>,
    {
        let Some(id) = self.resolve_counter(host, element, name, true) else {
            return counter_style::counter_text(style, 0);
        };
        let node = &self.forest[id];
        let mut text = counter_style::counter_text(style, node.displayed_value());
        let Some(separator) = separator else {
            return text;
        };

        // Prefix the value of every enclosing scope.
        let mut scope = if node.acts_as_reset() {
            Some(id)
        } else {
            node.parent()
        };
        while let Some(child) = scope {
            let Some(parent) = self.forest[child].parent() else {
                break;
            };
            let outer = counter_style::counter_text(style, self.forest[child].count_in_parent());
            text = format!("{outer}{separator}{text}");
            scope = Some(parent);
        }
        text
    }

    /// An outline of the tree containing `id`, one node per line, with `id`
    /// marked by `*`.
    pub fn dump_tree(&self, id: CounterNodeId) -> String {
        if !self.forest.contains(id) {
            return String::new();
        }
        let root = self.forest.root(id);
        let mut dump = String::new();
        let mut current = Some(root);
        while let Some(node_id) = current {
            let node = &self.forest[node_id];
            dump.push_str(&format!(
                "{}{:indent$}{} value={} count_in_parent={} owner={:?}\n",
                if node_id == id { '*' } else { ' ' },
                "",
                if node.has_reset_type() {
                    "reset"
                } else {
                    "increment"
                },
                node.value(),
                node.count_in_parent(),
                node.owner(),
                indent = 2 * self.forest.depth(node_id),
            ));
            current = self.forest.next_in_preorder(node_id, root);
        }
        dump
    }

    fn dump_if_requested(&self, id: CounterNodeId) {
        if self.opts.dump_counter_tree && self.forest.contains(id) {
            debug!("Counter tree:\n{}", self.dump_tree(id));
        }
    }
}
