/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

mod common;

use common::{NodeId, TestDocument};
use counters::{CounterDirectiveMap, CounterMapStore, CounterName, ListStyleType, plan_counter};

fn item() -> CounterName {
    CounterName::from("item")
}

fn reset(value: i32) -> CounterDirectiveMap {
    CounterDirectiveMap::new().with_reset("item", value)
}

fn increment(value: i32) -> CounterDirectiveMap {
    CounterDirectiveMap::new().with_increment("item", value)
}

fn text(store: &mut CounterMapStore<NodeId>, doc: &TestDocument, node: NodeId) -> String {
    store.counter_text(doc, node, &item(), ListStyleType::Decimal, None)
}

fn nested(store: &mut CounterMapStore<NodeId>, doc: &TestDocument, node: NodeId) -> String {
    store.counter_text(doc, node, &item(), ListStyleType::Decimal, Some("."))
}

#[test]
fn test_increments_count_within_a_reset() {
    let mut doc = TestDocument::new();
    let list = doc.element_with(doc.root(), reset(0));
    let first = doc.element_with(list, increment(1));
    let second = doc.element_with(list, increment(2));
    let third = doc.element_with(list, increment(1));

    let mut store = CounterMapStore::new();
    store.subtree_attached(&doc, doc.root());

    assert_eq!(text(&mut store, &doc, list), "0");
    assert_eq!(text(&mut store, &doc, first), "1");
    assert_eq!(text(&mut store, &doc, second), "3");
    assert_eq!(text(&mut store, &doc, third), "4");

    let scope = store.counter(list, &item()).unwrap();
    let children: Vec<_> = [first, second, third]
        .iter()
        .map(|&node| store.counter(node, &item()).unwrap())
        .collect();
    for child in &children {
        assert_eq!(store.node(*child).unwrap().parent(), Some(scope));
    }
    assert_eq!(store.node(scope).unwrap().first_child(), Some(children[0]));
    assert_eq!(store.node(scope).unwrap().last_child(), Some(children[2]));
}

#[test]
fn test_nested_resets_open_nested_scopes() {
    let mut doc = TestDocument::new();
    let outer = doc.element_with(doc.root(), reset(0));
    let first = doc.element_with(outer, increment(1));
    let second = doc.element_with(outer, increment(1));
    let inner = doc.element_with(second, reset(0));
    let inner_first = doc.element_with(inner, increment(1));
    let inner_second = doc.element_with(inner, increment(1));
    let third = doc.element_with(outer, increment(1));

    let mut store = CounterMapStore::new();
    store.subtree_attached(&doc, doc.root());

    assert_eq!(nested(&mut store, &doc, first), "1");
    assert_eq!(nested(&mut store, &doc, inner_first), "2.1");
    assert_eq!(nested(&mut store, &doc, inner_second), "2.2");
    assert_eq!(text(&mut store, &doc, inner_second), "2");
    assert_eq!(nested(&mut store, &doc, third), "3");

    let inner_scope = store.counter(inner, &item()).unwrap();
    let outer_scope = store.counter(outer, &item()).unwrap();
    assert_eq!(store.node(inner_scope).unwrap().parent(), Some(outer_scope));
    assert_eq!(store.node(inner_scope).unwrap().count_in_parent(), 2);
    let third_node = store.counter(third, &item()).unwrap();
    assert_eq!(
        store.node(third_node).unwrap().previous_sibling(),
        Some(inner_scope)
    );
}

#[test]
fn test_sibling_resets_start_separate_scopes() {
    let mut doc = TestDocument::new();
    let body = doc.root();
    let chapter_one = doc.element_with(body, reset(0));
    let section_one = doc.element_with(body, increment(1));
    let section_two = doc.element_with(body, increment(1));
    let chapter_two = doc.element_with(body, reset(0));
    let section_three = doc.element_with(body, increment(1));

    let mut store = CounterMapStore::new();
    store.subtree_attached(&doc, body);

    assert_eq!(text(&mut store, &doc, section_one), "1");
    assert_eq!(text(&mut store, &doc, section_two), "2");
    assert_eq!(text(&mut store, &doc, section_three), "1");

    let first_scope = store.counter(chapter_one, &item()).unwrap();
    let second_scope = store.counter(chapter_two, &item()).unwrap();
    assert_eq!(store.node(first_scope).unwrap().parent(), None);
    assert_eq!(store.node(second_scope).unwrap().parent(), None);
    let last = store.counter(section_three, &item()).unwrap();
    assert_eq!(store.node(last).unwrap().parent(), Some(second_scope));
}

#[test]
fn test_increments_without_a_reset_share_an_implicit_scope() {
    let mut doc = TestDocument::new();
    let first = doc.element_with(doc.root(), increment(1));
    let second = doc.element_with(doc.root(), increment(1));

    let mut store = CounterMapStore::new();
    store.subtree_attached(&doc, doc.root());

    let first_node = store.counter(first, &item()).unwrap();
    assert!(store.node(first_node).unwrap().acts_as_reset());
    assert!(!store.node(first_node).unwrap().has_reset_type());
    assert_eq!(text(&mut store, &doc, first), "1");
    assert_eq!(text(&mut store, &doc, second), "2");
}

#[test]
fn test_generated_content_reads_the_running_value() {
    let mut doc = TestDocument::new();
    let body = doc.element_with(doc.root(), reset(0));
    let first = doc.element_with(body, increment(1));
    let first_before = doc.before(first);
    doc.text(first);
    let second = doc.element_with(body, increment(1));
    let second_after = doc.after(second);

    let mut store = CounterMapStore::new();
    store.subtree_attached(&doc, doc.root());

    // Pseudo-elements without directives get an increment of zero.
    assert_eq!(text(&mut store, &doc, first_before), "1");
    assert_eq!(text(&mut store, &doc, second_after), "2");
    assert_eq!(text(&mut store, &doc, second), "2");
    let pseudo = store.counter(first_before, &item()).unwrap();
    assert_eq!(store.node(pseudo).unwrap().value(), 0);

    // A counter nobody declared still reads as zero.
    assert_eq!(
        store.counter_text(
            &doc,
            second,
            &CounterName::from("figure"),
            ListStyleType::UpperRoman,
            None
        ),
        "0"
    );
}

#[test]
fn test_counter_styles_and_separators() {
    let mut doc = TestDocument::new();
    let outer = doc.element_with(doc.root(), reset(2));
    let inner = doc.element_with(outer, reset(0).with_increment("item", 3));
    let leaf = doc.element_with(inner, increment(1));

    let mut store = CounterMapStore::new();
    store.subtree_attached(&doc, doc.root());

    assert_eq!(text(&mut store, &doc, inner), "3");
    assert_eq!(
        store.counter_text(&doc, leaf, &item(), ListStyleType::LowerRoman, Some(" / ")),
        "ii / iv"
    );
}

#[test]
fn test_marker_pseudo_elements_do_not_count() {
    let mut doc = TestDocument::new();
    let body = doc.element_with(doc.root(), reset(0));
    let first = doc.element_with(body, increment(1));
    let marker = doc.marker(first);
    doc.set_directives(marker, Some(increment(5)));
    let second = doc.element_with(body, increment(1));

    let mut store = CounterMapStore::new();
    store.subtree_attached(&doc, doc.root());
    assert_eq!(plan_counter(&doc, marker, &item()), None);
    assert!(!store.has_counters(marker));
    assert_eq!(text(&mut store, &doc, second), "2");
}
