/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! What the counter code needs to know about the document it numbers.
//!
//! Nodes are opaque handles. Pseudo-elements are nodes of their own: a
//! `::before` is visited right after its originating element and an `::after`
//! right after the originating element's last descendant, and their parent
//! element is the originating element.

use std::fmt::Debug;
use std::hash::Hash;

use crate::directives::CounterDirectiveMap;

/// The kind of pseudo-element a node generates, if any.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PseudoKind {
    None,
    Before,
    After,
    /// `::marker`, `::first-letter` and friends; these never carry counters.
    Other,
}

/// How a list container numbers its items.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListContainer {
    /// `<ol>`, with its `start` attribute and whether it is `reversed`.
    Ordered { start: Option<i32>, reversed: bool },
    /// `<ul>`, `<menu>` and `<dir>`.
    Unordered,
}

impl ListContainer {
    /// The value of the first item, absent an explicit one.
    pub fn start(&self) -> i32 {
        match *self {
            ListContainer::Ordered { start, .. } => start.unwrap_or(1),
            ListContainer::Unordered => 1,
        }
    }

    pub fn is_reversed(&self) -> bool {
        matches!(*self, ListContainer::Ordered { reversed: true, .. })
    }
}

/// Navigation over the host document, in the flattened order layout sees.
pub trait DocumentTreeWalker {
    type Node: Copy + Debug + Eq + Hash;

    /// The parent element; for a pseudo-element, its originating element.
    fn parent_element(&self, node: Self::Node) -> Option<Self::Node>;

    /// The preceding node in document preorder.
    fn previous_in_preorder(&self, node: Self::Node) -> Option<Self::Node>;

    /// The previous element sibling, or the parent element when there is none.
    fn previous_sibling_or_parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The following node in document preorder, never leaving the subtree of
    /// `stay_within` when it is given. With `skip_descendants` the children
    /// of `node` are not visited.
    fn next_in_preorder(
        &self,
        node: Self::Node,
        stay_within: Option<Self::Node>,
        skip_descendants: bool,
    ) -> Option<Self::Node>;

    fn pseudo_kind(&self, node: Self::Node) -> PseudoKind;

    fn is_text(&self, node: Self::Node) -> bool;

    /// False for the secondary boxes of an element that generates more than
    /// one, such as a table wrapper; only the principal box owns counters.
    fn is_principal_box(&self, node: Self::Node) -> bool;

    /// Whether the node currently takes part in layout.
    fn is_attached(&self, node: Self::Node) -> bool;

    fn list_container(&self, node: Self::Node) -> Option<ListContainer>;

    fn is_list_item(&self, node: Self::Node) -> bool;

    /// The `value` attribute of a list item.
    fn explicit_list_item_value(&self, node: Self::Node) -> Option<i32>;
}

/// Access to the computed `counter-reset` and `counter-increment` of a node.
pub trait DirectiveProvider: DocumentTreeWalker {
    fn counter_directives(&self, node: Self::Node) -> Option<&CounterDirectiveMap>;
}

/// Whether two nodes have the same parent element.
pub(crate) fn are_siblings<H: DocumentTreeWalker>(
    host: &H,
    first: H::Node,
    second: H::Node,
) -> bool {
    host.parent_element(first) == host.parent_element(second)
}
