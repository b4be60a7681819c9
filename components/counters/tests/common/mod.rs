/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A small in-memory document for driving the counter code.

#![allow(dead_code)]

use counters::{
    CounterDirectiveMap, DirectiveProvider, DocumentTreeWalker, ListContainer, PseudoKind,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(pub usize);

struct TestNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: bool,
    pseudo: PseudoKind,
    attached: bool,
    directives: Option<CounterDirectiveMap>,
    list: Option<ListContainer>,
    list_item: bool,
    value: Option<i32>,
}

impl TestNode {
    fn new(parent: Option<NodeId>, attached: bool) -> Self {
        Self {
            parent,
            children: Vec::new(),
            text: false,
            pseudo: PseudoKind::None,
            attached,
            directives: None,
            list: None,
            list_item: false,
            value: None,
        }
    }
}

pub struct TestDocument {
    nodes: Vec<TestNode>,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

impl TestDocument {
    /// A document with just a root element.
    pub fn new() -> Self {
        init_logging();
        Self {
            nodes: vec![TestNode::new(None, true)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, node: TestNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn new_child(&mut self, parent: NodeId) -> NodeId {
        let attached = self.nodes[parent.0].attached;
        self.push(TestNode::new(Some(parent), attached))
    }

    /// Append `child` to `parent`, in front of an `::after` if there is one.
    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let children = &self.nodes[parent.0].children;
        let position = match children.last() {
            Some(last) if self.nodes[last.0].pseudo == PseudoKind::After => children.len() - 1,
            _ => children.len(),
        };
        self.nodes[parent.0].children.insert(position, child);
    }

    pub fn element(&mut self, parent: NodeId) -> NodeId {
        let node = self.new_child(parent);
        self.append_child(parent, node);
        node
    }

    pub fn element_with(&mut self, parent: NodeId, directives: CounterDirectiveMap) -> NodeId {
        let node = self.element(parent);
        self.nodes[node.0].directives = Some(directives);
        node
    }

    /// A new element right before `sibling`.
    pub fn element_before(&mut self, sibling: NodeId) -> NodeId {
        let parent = self.nodes[sibling.0].parent.expect("sibling has a parent");
        let node = self.new_child(parent);
        let position = self.index_in_parent(sibling);
        self.nodes[parent.0].children.insert(position, node);
        node
    }

    pub fn text(&mut self, parent: NodeId) -> NodeId {
        let node = self.element(parent);
        self.nodes[node.0].text = true;
        node
    }

    pub fn before(&mut self, parent: NodeId) -> NodeId {
        let node = self.new_child(parent);
        self.nodes[node.0].pseudo = PseudoKind::Before;
        self.nodes[parent.0].children.insert(0, node);
        node
    }

    pub fn after(&mut self, parent: NodeId) -> NodeId {
        let node = self.new_child(parent);
        self.nodes[node.0].pseudo = PseudoKind::After;
        self.nodes[parent.0].children.push(node);
        node
    }

    pub fn marker(&mut self, parent: NodeId) -> NodeId {
        let node = self.before(parent);
        self.nodes[node.0].pseudo = PseudoKind::Other;
        node
    }

    pub fn ordered_list(&mut self, parent: NodeId, start: Option<i32>, reversed: bool) -> NodeId {
        let node = self.element(parent);
        self.nodes[node.0].list = Some(ListContainer::Ordered { start, reversed });
        node
    }

    pub fn unordered_list(&mut self, parent: NodeId) -> NodeId {
        let node = self.element(parent);
        self.nodes[node.0].list = Some(ListContainer::Unordered);
        node
    }

    pub fn list_item(&mut self, parent: NodeId) -> NodeId {
        let node = self.element(parent);
        self.nodes[node.0].list_item = true;
        node
    }

    pub fn list_item_before(&mut self, sibling: NodeId) -> NodeId {
        let node = self.element_before(sibling);
        self.nodes[node.0].list_item = true;
        node
    }

    pub fn set_value(&mut self, item: NodeId, value: Option<i32>) {
        self.nodes[item.0].value = value;
    }

    pub fn set_list(&mut self, node: NodeId, list: ListContainer) {
        self.nodes[node.0].list = Some(list);
    }

    /// Replace the directives of `node`, returning the old ones.
    pub fn set_directives(
        &mut self,
        node: NodeId,
        directives: Option<CounterDirectiveMap>,
    ) -> Option<CounterDirectiveMap> {
        std::mem::replace(&mut self.nodes[node.0].directives, directives)
    }

    fn index_in_parent(&self, node: NodeId) -> usize {
        let parent = self.nodes[node.0].parent.expect("node has a parent");
        self.nodes[parent.0]
            .children
            .iter()
            .position(|&child| child == node)
            .expect("node is a child of its parent")
    }

    fn set_attached(&mut self, node: NodeId, attached: bool) {
        self.nodes[node.0].attached = attached;
        for child in self.nodes[node.0].children.clone() {
            self.set_attached(child, attached);
        }
    }

    /// Take `node` and its subtree out of the document.
    pub fn detach(&mut self, node: NodeId) {
        let position = self.index_in_parent(node);
        let parent = self.nodes[node.0].parent.take().expect("node has a parent");
        self.nodes[parent.0].children.remove(position);
        self.set_attached(node, false);
    }

    /// Put a detached `node` back as the last child of `parent`.
    pub fn attach(&mut self, parent: NodeId, node: NodeId) {
        self.nodes[node.0].parent = Some(parent);
        self.append_child(parent, node);
        let attached = self.nodes[parent.0].attached;
        self.set_attached(node, attached);
    }

    fn last_descendant(&self, node: NodeId) -> NodeId {
        let mut last = node;
        while let Some(&child) = self.nodes[last.0].children.last() {
            last = child;
        }
        last
    }

    fn sibling(&self, node: NodeId, offset: isize) -> Option<NodeId> {
        let parent = self.nodes[node.0].parent?;
        let position = self.index_in_parent(node).checked_add_signed(offset)?;
        self.nodes[parent.0].children.get(position).copied()
    }
}

impl DocumentTreeWalker for TestDocument {
    type Node = NodeId;

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn previous_in_preorder(&self, node: NodeId) -> Option<NodeId> {
        match self.sibling(node, -1) {
            Some(previous) => Some(self.last_descendant(previous)),
            None => self.nodes[node.0].parent,
        }
    }

    fn previous_sibling_or_parent(&self, node: NodeId) -> Option<NodeId> {
        let mut current = node;
        while let Some(previous) = self.sibling(current, -1) {
            if !self.nodes[previous.0].text {
                return Some(previous);
            }
            current = previous;
        }
        self.nodes[node.0].parent
    }

    fn next_in_preorder(
        &self,
        node: NodeId,
        stay_within: Option<NodeId>,
        skip_descendants: bool,
    ) -> Option<NodeId> {
        if !skip_descendants {
            if let Some(&child) = self.nodes[node.0].children.first() {
                return Some(child);
            }
        }
        let mut current = node;
        loop {
            if Some(current) == stay_within {
                return None;
            }
            if let Some(next) = self.sibling(current, 1) {
                return Some(next);
            }
            current = self.nodes[current.0].parent?;
        }
    }

    fn pseudo_kind(&self, node: NodeId) -> PseudoKind {
        self.nodes[node.0].pseudo
    }

    fn is_text(&self, node: NodeId) -> bool {
        self.nodes[node.0].text
    }

    fn is_principal_box(&self, _: NodeId) -> bool {
        true
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.nodes[node.0].attached
    }

    fn list_container(&self, node: NodeId) -> Option<ListContainer> {
        self.nodes[node.0].list
    }

    fn is_list_item(&self, node: NodeId) -> bool {
        self.nodes[node.0].list_item
    }

    fn explicit_list_item_value(&self, node: NodeId) -> Option<i32> {
        self.nodes[node.0].value
    }
}

impl DirectiveProvider for TestDocument {
    fn counter_directives(&self, node: NodeId) -> Option<&CounterDirectiveMap> {
        self.nodes[node.0].directives.as_ref()
    }
}
