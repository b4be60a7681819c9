/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Finding where a new counter node belongs in its counter tree.
//!
//! The search walks the document backwards in preorder from the counter's
//! owner, looking at elements that have a counter of the same name. The
//! element where the search may stop is the owner's previous sibling (or its
//! parent), then that element's previous sibling or parent, and so on. Counters
//! found on the way, inside earlier siblings, are candidates for being our
//! previous sibling.
//!
//! <https://drafts.csswg.org/css-lists/#nested-counters>

use std::fmt::Debug;
use std::hash::Hash;

use log::{trace, warn};

use crate::directives::CounterName;
use crate::dom::{DirectiveProvider, are_siblings};
use crate::node::CounterNodeId;
use crate::store::CounterMapStore;

/// Where a new counter node goes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placement {
    /// Nothing in scope: the node starts its own tree.
    Root,
    /// Under `parent`, right after `previous_sibling` (first when `None`).
    Child {
        parent: CounterNodeId,
        previous_sibling: Option<CounterNodeId>,
    },
    /// The nodes found disagree about the tree shape, which happens while
    /// boxes are being reparented. The node stays unplaced and the search is
    /// repeated the next time the counter is resolved.
    Deferred,
}

impl Placement {
    /// Become a sibling of `counter`, unless it is a root, in which case the
    /// new node is a root too.
    fn after(parent: Option<CounterNodeId>, counter: CounterNodeId) -> Placement {
        match parent {
            Some(parent) => Placement::Child {
                parent,
                previous_sibling: Some(counter),
            },
            None => Placement::Root,
        }
    }
}

impl<N: Copy + Debug + Eq + Hash> CounterMapStore<N> {
    pub(crate) fn find_place_for_counter<H>(
        &mut self,
        host: &H,
        owner: N,
        name: &CounterName,
        is_reset: bool,
    ) -> Placement
    where
        H: DirectiveProvider<Node = N>,
    {
        let tracing = self.opts.trace_counter_placement;
        let mut search_end = host.previous_sibling_or_parent(owner);
        let mut current = host.previous_in_preorder(owner);
        let mut candidate: Option<CounterNodeId> = None;

        while let Some(element) = current {
            let counter = self.resolve_counter(host, element, name, false);
            if tracing {
                trace!(
                    "Placing {name} of {owner:?}: at {element:?}, search end {search_end:?}, \
                     counter {counter:?}, candidate {candidate:?}"
                );
            }

            if Some(element) == search_end {
                if let Some(counter) = counter {
                    let (counter_parent, counter_acts_as_reset) = {
                        let node = &self.forest[counter];
                        (node.parent(), node.acts_as_reset())
                    };
                    let siblings = are_siblings(host, element, owner);

                    match candidate {
                        Some(previous) => {
                            let Some(previous_node) = self.forest.get(previous) else {
                                return deferred(owner, name, "candidate was destroyed");
                            };
                            let previous_parent = previous_node.parent();
                            if counter_acts_as_reset {
                                // Two resets on sibling elements are siblings themselves.
                                if is_reset && siblings {
                                    return Placement::after(counter_parent, counter);
                                }
                                // Otherwise the reset is on an ancestor and opens our scope. A
                                // reparented box may have left the candidate somewhere else.
                                let previous_sibling =
                                    (previous_parent == Some(counter)).then_some(previous);
                                return Placement::Child {
                                    parent: counter,
                                    previous_sibling,
                                };
                            }
                            if !is_reset || !siblings {
                                if counter_parent != previous_parent {
                                    return deferred(
                                        owner,
                                        name,
                                        "candidate and search end disagree on the parent",
                                    );
                                }
                                return Placement::after(counter_parent, previous);
                            }
                        },
                        None => {
                            if counter_acts_as_reset {
                                if is_reset && siblings {
                                    return Placement::after(counter_parent, counter);
                                }
                                return Placement::Child {
                                    parent: counter,
                                    previous_sibling: None,
                                };
                            }
                            if !is_reset || !siblings {
                                return Placement::after(counter_parent, counter);
                            }
                            candidate = Some(counter);
                        },
                    }
                }
                // No usable counter here, or we are a reset following an
                // increment on a sibling: look further up.
                search_end = host.previous_sibling_or_parent(element);
            } else if let Some(counter) = counter {
                // Inside the subtree of one of our earlier siblings.
                if candidate.is_none() {
                    candidate = Some(counter);
                } else if self.forest[counter].acts_as_reset() {
                    // The earlier candidate sits inside this scope; nothing
                    // further inside this sibling can be ours.
                    candidate = Some(counter);
                    current = host.parent_element(element);
                    continue;
                }
                current = host.previous_sibling_or_parent(element);
                continue;
            }

            current = if candidate.is_some() {
                host.previous_sibling_or_parent(element)
            } else {
                host.previous_in_preorder(element)
            };
        }
        Placement::Root
    }
}

fn deferred<N: Debug>(owner: N, name: &CounterName, reason: &str) -> Placement {
    warn!("Deferring placement of {name} counter of {owner:?}: {reason}");
    Placement::Deferred
}
