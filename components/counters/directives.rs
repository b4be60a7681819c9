/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Per-element `counter-reset` / `counter-increment` values and how they turn
//! into a counter node.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use string_cache::DefaultAtom;

use crate::dom::{DirectiveProvider, ListContainer, PseudoKind};

/// The name of a counter, as written in `counter-reset: <name>`.
pub type CounterName = DefaultAtom;

/// The implicit counter maintained by list items.
pub const LIST_ITEM: &str = "list-item";

/// The reset and increment an element declares for one counter.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CounterDirectives {
    pub reset: Option<i32>,
    pub increment: Option<i32>,
}

/// What kind of counter node an element contributes, and with which value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CounterPlan {
    pub is_reset: bool,
    pub value: i32,
}

impl CounterDirectives {
    pub fn reset(value: i32) -> Self {
        Self {
            reset: Some(value),
            increment: None,
        }
    }

    pub fn increment(value: i32) -> Self {
        Self {
            reset: None,
            increment: Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reset.is_none() && self.increment.is_none()
    }

    /// A reset wins over an increment; when both are given the increment is
    /// applied on top of the reset value.
    pub fn plan(&self) -> Option<CounterPlan> {
        match (self.reset, self.increment) {
            (Some(reset), increment) => Some(CounterPlan {
                is_reset: true,
                value: reset.saturating_add(increment.unwrap_or(0)),
            }),
            (None, Some(increment)) => Some(CounterPlan {
                is_reset: false,
                value: increment,
            }),
            (None, None) => None,
        }
    }
}

/// All counter directives of one element.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CounterDirectiveMap {
    directives: FxHashMap<CounterName, CounterDirectives>,
}

impl CounterDirectiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reset to `name`, keeping any increment already declared.
    pub fn with_reset(mut self, name: &str, value: i32) -> Self {
        self.directives.entry(CounterName::from(name)).or_default().reset = Some(value);
        self
    }

    /// Add an increment to `name`, keeping any reset already declared.
    pub fn with_increment(mut self, name: &str, value: i32) -> Self {
        self.directives
            .entry(CounterName::from(name))
            .or_default()
            .increment = Some(value);
        self
    }

    pub fn insert(&mut self, name: CounterName, directives: CounterDirectives) {
        if directives.is_empty() {
            self.directives.remove(&name);
        } else {
            self.directives.insert(name, directives);
        }
    }

    pub fn remove(&mut self, name: &CounterName) -> Option<CounterDirectives> {
        self.directives.remove(name)
    }

    pub fn get(&self, name: &CounterName) -> Option<&CounterDirectives> {
        self.directives.get(name)
    }

    pub fn contains(&self, name: &CounterName) -> bool {
        self.directives.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &CounterName> {
        self.directives.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CounterName, &CounterDirectives)> {
        self.directives.iter()
    }
}

/// Decide whether `node` contributes a node to the `name` counter tree.
///
/// Explicit directives come first. Without them, the implicit `list-item`
/// counter is reset by list containers and incremented by list items.
pub fn plan_counter<H: DirectiveProvider>(
    host: &H,
    node: H::Node,
    name: &CounterName,
) -> Option<CounterPlan> {
    if host.is_text(node) || !host.is_principal_box(node) {
        return None;
    }
    match host.pseudo_kind(node) {
        PseudoKind::None | PseudoKind::Before | PseudoKind::After => {},
        PseudoKind::Other => return None,
    }

    if let Some(plan) = host
        .counter_directives(node)
        .and_then(|directives| directives.get(name))
        .and_then(CounterDirectives::plan)
    {
        return Some(plan);
    }

    if &**name != LIST_ITEM {
        return None;
    }
    if host.is_list_item(node) {
        return Some(match host.explicit_list_item_value(node) {
            Some(value) => CounterPlan {
                is_reset: true,
                value,
            },
            None => CounterPlan {
                is_reset: false,
                value: 1,
            },
        });
    }
    match host.list_container(node)? {
        ListContainer::Ordered { start, .. } => Some(CounterPlan {
            is_reset: true,
            value: start.unwrap_or(1),
        }),
        ListContainer::Unordered => Some(CounterPlan {
            is_reset: true,
            value: 0,
        }),
    }
}
