use serde_json::{json, Value};
use workflow_params::{
    create_item, ColumnField, ColumnType, DataFrameSchema, GenericParameter, GraphNode, IndexBounds,
    Knowledge, SelectorItem, SelectorOptions, SelectorParameter, SelectorSchema,
};

fn node_with(columns: &[(&str, ColumnType)]) -> GraphNode {
    let mut node = GraphNode::new("n1", "select-columns");
    node.set_incoming_knowledge(
        0,
        Knowledge::with_schema(DataFrameSchema::new(
            columns
                .iter()
                .map(|(name, t)| ColumnField::new(*name, *t))
                .collect(),
        )),
    );
    node
}

fn single(value: Option<Value>, node: &GraphNode) -> SelectorParameter {
    SelectorParameter::new(
        SelectorOptions {
            name: "target".into(),
            value,
            schema: SelectorSchema::single(0),
            excluding: None,
        },
        node,
    )
}

fn multi(value: Option<Value>, excluding: Option<bool>, node: &GraphNode) -> SelectorParameter {
    SelectorParameter::new(
        SelectorOptions {
            name: "columns".into(),
            value,
            schema: SelectorSchema::multi(0),
            excluding,
        },
        node,
    )
}

#[test]
fn test_every_variant_round_trips_through_factory() {
    let items = [
        SelectorItem::column("price"),
        SelectorItem::index(2),
        SelectorItem::column_list(["a", "b"]),
        SelectorItem::index_range(0, 3).unwrap(),
        SelectorItem::type_list([ColumnType::Numeric, ColumnType::Boolean]),
    ];
    for item in items {
        let rebuilt = create_item(&item.to_wire()).expect("wire form should decode");
        assert_eq!(rebuilt.to_wire(), item.to_wire());
    }
}

#[test]
fn test_single_mode_serializes_item_directly() {
    let node = GraphNode::default();
    let raw = json!({"type": "column", "value": "price"});
    let p = single(Some(raw.clone()), &node);
    assert_eq!(p.serialize(), raw);
}

#[test]
fn test_single_mode_null_value_serializes_null() {
    let node = GraphNode::default();
    assert_eq!(single(None, &node).serialize(), Value::Null);
    assert_eq!(single(Some(Value::Null), &node).serialize(), Value::Null);
}

#[test]
fn test_single_mode_canonicalizes_extra_fields() {
    let node = GraphNode::default();
    let p = single(Some(json!({"type": "index", "value": 1, "label": "second"})), &node);
    assert_eq!(p.serialize(), json!({"type": "index", "value": 1}));
}

#[test]
fn test_multi_inclusion() {
    let node = GraphNode::default();
    let a = json!({"type": "column", "value": "a"});
    let b = json!({"type": "typeList", "values": ["string"]});
    let p = multi(Some(json!([a.clone(), b.clone()])), None, &node);
    assert_eq!(
        p.serialize(),
        json!({"excluding": false, "selections": [a, b]})
    );
}

#[test]
fn test_multi_empty_inclusion_is_null() {
    let node = GraphNode::default();
    let p = multi(Some(json!([])), Some(false), &node);
    assert_eq!(p.serialize(), Value::Null);
}

#[test]
fn test_multi_empty_exclusion_is_kept() {
    let node = GraphNode::default();
    let p = multi(Some(json!([])), Some(true), &node);
    assert_eq!(p.serialize(), json!({"excluding": true, "selections": []}));
}

#[test]
fn test_single_mode_over_population_fails_validation() {
    let node = node_with(&[("a", ColumnType::Numeric), ("b", ColumnType::Numeric)]);
    let mut p = single(Some(json!({"type": "column", "value": "a"})), &node);
    assert!(p.validate());
    p.set_items(vec![SelectorItem::column("a"), SelectorItem::column("b")]);
    assert!(!p.validate());
}

#[test]
fn test_refresh_rebinds_schema_only() {
    let mut node = GraphNode::new("n1", "select-columns");
    let mut p = multi(
        Some(json!([{"type": "column", "value": "price"}, {"type": "index", "value": 0}])),
        Some(true),
        &node,
    );
    assert!(p.data_frame_schema().is_none());
    assert!(p.validate());

    let items_before = p.items().to_vec();
    let excluding_before = p.excluding();

    node.set_incoming_knowledge(
        0,
        Knowledge::with_schema(DataFrameSchema::new(vec![ColumnField::new(
            "quantity",
            ColumnType::Numeric,
        )])),
    );
    p.refresh(&node);

    assert!(p.data_frame_schema().is_some_and(|s| s.contains("quantity")));
    assert_eq!(p.items(), &items_before[..]);
    assert_eq!(p.excluding(), excluding_before);
    assert!(!p.validate());

    node.clear_incoming_knowledge(0);
    p.refresh(&node);
    assert!(p.data_frame_schema().is_none());
    assert_eq!(p.items(), &items_before[..]);
    assert!(p.validate());
}

#[test]
fn test_malformed_entry_dropped_preserving_order() {
    let node = GraphNode::default();
    let p = multi(
        Some(json!([
            {"type": "column", "value": "first"},
            {"type": "unknown", "value": 42},
            {"type": "column", "value": "third"}
        ])),
        None,
        &node,
    );
    assert_eq!(p.items().len(), 2);
    assert_eq!(
        p.items(),
        &[SelectorItem::column("first"), SelectorItem::column("third")]
    );
}

#[test]
fn test_duplicates_are_kept() {
    let node = GraphNode::default();
    let a = json!({"type": "column", "value": "a"});
    let p = multi(Some(json!([a.clone(), a])), None, &node);
    assert_eq!(p.items().len(), 2);
}

#[test]
fn test_validation_against_bound_schema() {
    let node = node_with(&[("price", ColumnType::Numeric), ("name", ColumnType::String)]);
    let ok = multi(
        Some(json!([
            {"type": "columnList", "values": ["price", "name"]},
            {"type": "indexRange", "values": [0, 1]}
        ])),
        None,
        &node,
    );
    assert!(ok.validate());

    let missing = multi(Some(json!([{"type": "column", "value": "ghost"}])), None, &node);
    assert!(!missing.validate());

    let out_of_range = single(Some(json!({"type": "index", "value": 2})), &node);
    assert!(!out_of_range.validate());
}

#[test]
fn test_empty_multi_validates() {
    let node = node_with(&[("a", ColumnType::Numeric)]);
    assert!(multi(None, None, &node).validate());
    assert!(single(None, &node).validate());
}

#[test]
fn test_single_default_items() {
    let node = GraphNode::default();
    let p = SelectorParameter::new(
        SelectorOptions {
            name: "target".into(),
            value: None,
            schema: SelectorSchema::single(0).with_default(json!({"type": "column", "value": "id"})),
            excluding: None,
        },
        &node,
    );
    assert!(p.items().is_empty());
    assert_eq!(p.default_items(), Some(&[SelectorItem::column("id")][..]));
}

#[test]
fn test_init_items_rebuilds_wholesale() {
    let node = GraphNode::default();
    let mut p = multi(Some(json!([{"type": "column", "value": "a"}])), None, &node);
    p.init_items(Some(&json!([{"type": "index", "value": 3}])), None);
    assert_eq!(p.items(), &[SelectorItem::index(3)]);
    p.init_items(None, None);
    assert!(p.items().is_empty());
}

#[test]
fn test_edited_selection_survives_save_and_reload() {
    let node = GraphNode::default();
    let mut p = multi(None, None, &node);
    p.add_item(SelectorItem::column("price"));
    p.add_item(SelectorItem::index_range(1, 5).expect("ordered bounds"));
    p.add_item(SelectorItem::IndexRange(IndexBounds::new(0, 0).expect("ordered bounds")));
    p.add_item(SelectorItem::type_list([ColumnType::Timestamp]));
    assert!(SelectorItem::index_range(5, 1).is_none());

    let saved = p.serialize();
    let reloaded =
        SelectorParameter::from_wire("columns", SelectorSchema::multi(0), Some(&saved), &node);
    assert_eq!(reloaded.items(), p.items());
    assert_eq!(reloaded.serialize(), saved);
}
