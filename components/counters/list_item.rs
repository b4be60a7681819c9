/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Ordinals of HTML list items.
//!
//! An item's ordinal is its `value` attribute when it has one, otherwise the
//! ordinal of the previous item of the same list plus one (minus one in a
//! reversed list), the first item starting at the list's `start`.
//!
//! <https://html.spec.whatwg.org/multipage/#ordinal-value>

use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

use crate::dom::DocumentTreeWalker;

/// The list whose numbering `item` takes part in: its nearest list container
/// ancestor, or its parent element when there is none.
pub fn enclosing_list<H: DocumentTreeWalker>(host: &H, item: H::Node) -> Option<H::Node> {
    let parent = host.parent_element(item);
    let mut ancestor = parent;
    while let Some(node) = ancestor {
        if host.list_container(node).is_some() {
            return Some(node);
        }
        ancestor = host.parent_element(node);
    }
    parent
}

/// The list `node` is an item of, if it is one.
fn list_of_item<H: DocumentTreeWalker>(host: &H, node: H::Node) -> Option<H::Node> {
    if !host.is_list_item(node) {
        return None;
    }
    enclosing_list(host, node)
}

/// The first item of `list` after `node` in preorder. Items of nested lists
/// are skipped.
pub fn next_list_item<H: DocumentTreeWalker>(
    host: &H,
    list: H::Node,
    node: H::Node,
) -> Option<H::Node> {
    let mut current = host.next_in_preorder(node, Some(list), false);
    while let Some(candidate) = current {
        let Some(other_list) = list_of_item(host, candidate) else {
            current = host.next_in_preorder(candidate, Some(list), false);
            continue;
        };
        if other_list == list {
            return Some(candidate);
        }
        // Everything below belongs to the nested list.
        current = host.next_in_preorder(candidate, Some(list), true);
    }
    None
}

pub fn first_list_item<H: DocumentTreeWalker>(host: &H, list: H::Node) -> Option<H::Node> {
    next_list_item(host, list, list)
}

/// The last item of `list` before `item` in preorder. Items of nested lists
/// are skipped.
pub fn previous_list_item<H: DocumentTreeWalker>(
    host: &H,
    list: H::Node,
    item: H::Node,
) -> Option<H::Node> {
    let mut current = host.previous_in_preorder(item);
    while let Some(candidate) = current {
        if candidate == list {
            return None;
        }
        let Some(other_list) = list_of_item(host, candidate) else {
            current = host.previous_in_preorder(candidate);
            continue;
        };
        if other_list == list {
            return Some(candidate);
        }
        // Jump over the rest of the nested list.
        current = Some(other_list);
    }
    None
}

/// The number of items of `list`.
pub fn item_count_for_ordered_list<H: DocumentTreeWalker>(host: &H, list: H::Node) -> i32 {
    let mut count: i32 = 0;
    let mut current = first_list_item(host, list);
    while let Some(item) = current {
        count = count.saturating_add(1);
        current = next_list_item(host, list, item);
    }
    count
}

/// Cached ordinals of list items. An item without an entry needs to be
/// recomputed.
#[derive(Debug)]
pub struct ListItemValuator<N> {
    values: FxHashMap<N, i32>,
}

impl<N> Default for ListItemValuator<N> {
    fn default() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }
}

impl<N: Copy + Debug + Eq + Hash> ListItemValuator<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_up_to_date(&self, item: N) -> bool {
        self.values.contains_key(&item)
    }

    pub fn value<H: DocumentTreeWalker<Node = N>>(&mut self, host: &H, item: N) -> i32 {
        if let Some(&value) = self.values.get(&item) {
            return value;
        }

        let list = enclosing_list(host, item);
        let container = list.and_then(|list| host.list_container(list));
        let start = container.map_or(1, |container| container.start());
        let step = if container.is_some_and(|container| container.is_reversed()) {
            -1
        } else {
            1
        };

        // Walk back to the closest item that already has a value.
        let mut pending = vec![item];
        let mut previous_value = None;
        if let Some(list) = list {
            let mut current = item;
            while let Some(previous) = previous_list_item(host, list, current) {
                if let Some(&value) = self.values.get(&previous) {
                    previous_value = Some(value);
                    break;
                }
                pending.push(previous);
                current = previous;
            }
        }

        let mut value = start;
        for node in pending.into_iter().rev() {
            value = match (host.explicit_list_item_value(node), previous_value) {
                (Some(explicit), _) => explicit,
                (None, Some(previous)) => previous.saturating_add(step),
                (None, None) => start,
            };
            self.values.insert(node, value);
            previous_value = Some(value);
        }
        value
    }

    /// Mark `item` and the items after it as needing a new value, stopping at
    /// the first one already marked. Every list is anchored at its first
    /// item, so the items before `item` keep their values.
    pub fn invalidate<H: DocumentTreeWalker<Node = N>>(&mut self, host: &H, item: N) {
        self.values.remove(&item);
        if let Some(list) = enclosing_list(host, item) {
            self.invalidate_after(host, list, item);
        }
    }

    fn invalidate_after<H: DocumentTreeWalker<Node = N>>(&mut self, host: &H, list: N, item: N) {
        let mut current = next_list_item(host, list, item);
        while let Some(next) = current {
            if self.values.remove(&next).is_none() {
                break;
            }
            current = next_list_item(host, list, next);
        }
    }

    /// `item` was just inserted into its list.
    pub fn item_inserted<H: DocumentTreeWalker<Node = N>>(&mut self, host: &H, item: N) {
        debug!("List item {item:?} inserted");
        self.invalidate(host, item);
    }

    /// `item` is about to leave its list. Call before the host unlinks it.
    pub fn item_will_be_removed<H: DocumentTreeWalker<Node = N>>(&mut self, host: &H, item: N) {
        debug!("List item {item:?} removed");
        self.invalidate(host, item);
        self.values.remove(&item);
    }

    /// The `value` attribute of `item` was set or removed.
    pub fn explicit_value_changed<H: DocumentTreeWalker<Node = N>>(&mut self, host: &H, item: N) {
        self.invalidate(host, item);
    }

    /// Mark every item of `list` as needing a new value.
    pub fn update_item_values_for_ordered_list<H: DocumentTreeWalker<Node = N>>(
        &mut self,
        host: &H,
        list: N,
    ) {
        let mut current = first_list_item(host, list);
        while let Some(item) = current {
            self.values.remove(&item);
            current = next_list_item(host, list, item);
        }
    }

    /// The `start` or `reversed` attribute of `list` changed.
    pub fn list_configuration_changed<H: DocumentTreeWalker<Node = N>>(
        &mut self,
        host: &H,
        list: N,
    ) {
        debug!("List {list:?} reconfigured");
        self.update_item_values_for_ordered_list(host, list);
    }

    /// Drop the cached value of a node that left the document.
    pub fn forget(&mut self, item: N) {
        self.values.remove(&item);
    }
}
