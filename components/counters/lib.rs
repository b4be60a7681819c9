/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! CSS counters for layout.
//!
//! Every element that resets or increments a counter owns a node in a forest
//! of counter trees, one forest per document. A reset opens a scope and the
//! nodes in that scope become its children, so the value an element shows is
//! found by walking its siblings. The forest is kept in step with the document
//! through the callbacks on [`CounterMapStore`]; the host describes its tree
//! through [`DocumentTreeWalker`] and [`DirectiveProvider`].
//!
//! [`ListItemValuator`] computes the ordinals of HTML list items, and the
//! `counter_style` crate turns values into text.

mod directives;
mod dom;
mod list_item;
mod node;
mod opts;
mod placement;
mod store;

pub use counter_style::ListStyleType;

pub use crate::directives::{
    CounterDirectiveMap, CounterDirectives, CounterName, CounterPlan, LIST_ITEM, plan_counter,
};
pub use crate::dom::{DirectiveProvider, DocumentTreeWalker, ListContainer, PseudoKind};
pub use crate::list_item::{
    ListItemValuator, enclosing_list, first_list_item, item_count_for_ordered_list,
    next_list_item, previous_list_item,
};
pub use crate::node::{CounterForest, CounterNode, CounterNodeId};
pub use crate::opts::CounterDebugOptions;
pub use crate::placement::Placement;
pub use crate::store::CounterMapStore;
