use serde_json::{json, Value};
use workflow_params::{
    ColumnField, ColumnType, DataFrameSchema, GenericParameter, GraphNode, Knowledge, NodeConfig,
    Parameter, ParameterError, ParameterList, SelectorItem,
};

fn config() -> NodeConfig {
    serde_json::from_value(json!({
        "parameters": [
            {"name": "columns", "type": "selector", "portIndex": 0,
             "default": {"excluding": true, "selections": []}},
            {"name": "key", "type": "selector", "isSingle": true, "portIndex": 1},
            {"name": "normalize", "type": "boolean", "default": false},
            {"name": "threshold", "type": "numeric",
             "validator": {"type": "range", "configuration": {"begin": 0, "end": 100}}},
            {"name": "prefix", "type": "string",
             "validator": {"type": "regex", "configuration": {"regex": "[a-z]+"}}}
        ],
        "values": {
            "columns": {"excluding": false, "selections": [
                {"type": "column", "value": "price"},
                {"type": "bogus"},
                {"type": "typeList", "values": ["numeric"]}
            ]},
            "key": {"type": "column", "value": "id"},
            "normalize": true,
            "threshold": 50,
            "prefix": "col"
        }
    }))
    .unwrap()
}

fn join_node() -> GraphNode {
    let mut node = GraphNode::new("join-1", "join");
    node.set_incoming_knowledge(
        0,
        Knowledge::with_schema(DataFrameSchema::new(vec![
            ColumnField::new("price", ColumnType::Numeric),
            ColumnField::new("id", ColumnType::Numeric),
        ])),
    );
    node.set_incoming_knowledge(
        1,
        Knowledge::with_schema(DataFrameSchema::new(vec![ColumnField::new(
            "id",
            ColumnType::Numeric,
        )])),
    );
    node
}

#[test]
fn test_load_builds_every_kind() {
    let list = ParameterList::load(&config(), &join_node()).unwrap();
    let kinds: Vec<&str> = list.iter().map(Parameter::type_name).collect();
    assert_eq!(kinds, vec!["selector", "selector", "boolean", "numeric", "string"]);

    let columns = list.selector("columns").unwrap();
    assert_eq!(columns.items().len(), 2);
    assert!(columns.default_excluding());
    assert_eq!(columns.default_items(), Some(&[][..]));

    let key = list.selector("key").unwrap();
    assert!(key.is_single());
    assert_eq!(key.items(), &[SelectorItem::column("id")]);
}

#[test]
fn test_serialize_round_trips_saved_values() {
    let list = ParameterList::load(&config(), &join_node()).unwrap();
    let saved = Value::Object(list.serialize());
    assert_eq!(
        saved,
        json!({
            "columns": {"excluding": false, "selections": [
                {"type": "column", "value": "price"},
                {"type": "typeList", "values": ["numeric"]}
            ]},
            "key": {"type": "column", "value": "id"},
            "normalize": true,
            "threshold": 50,
            "prefix": "col"
        })
    );
}

#[test]
fn test_serialize_omits_unset_parameters() {
    let mut cfg = config();
    cfg.values.clear();
    let list = ParameterList::load(&cfg, &join_node()).unwrap();
    assert!(list.serialize().is_empty());
}

#[test]
fn test_validate_and_report() {
    let list = ParameterList::load(&config(), &join_node()).unwrap();
    assert!(list.validate());
    assert!(list.validation_report().is_valid);
}

#[test]
fn test_refresh_after_upstream_change() {
    let mut node = join_node();
    let mut list = ParameterList::load(&config(), &node).unwrap();
    assert!(list.validate());

    node.set_incoming_knowledge(
        1,
        Knowledge::with_schema(DataFrameSchema::new(vec![ColumnField::new(
            "customer_id",
            ColumnType::Numeric,
        )])),
    );
    list.refresh(&node);

    assert!(!list.validate());
    let report = list.validation_report();
    let errors = report.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E302");
    assert_eq!(errors[0].parameter.as_deref(), Some("key"));
}

#[test]
fn test_edit_through_list() {
    let mut list = ParameterList::load(&config(), &join_node()).unwrap();
    let columns = list.selector_mut("columns").unwrap();
    columns.set_items(Vec::new());
    assert_eq!(columns.serialize(), Value::Null);
    columns.reset_to_default();
    assert_eq!(columns.serialize(), json!({"excluding": true, "selections": []}));

    let report = list.validation_report();
    assert!(report.is_valid);
    assert_eq!(report.warnings().len(), 1);
    assert_eq!(report.warnings()[0].code, "W301");
}

#[test]
fn test_scalar_errors_surface() {
    let mut cfg = config();
    cfg.values.insert("normalize".into(), json!("yes"));
    let err = ParameterList::load(&cfg, &join_node()).unwrap_err();
    assert!(matches!(err, ParameterError::InvalidValue { ref name, .. } if name == "normalize"));
}

#[test]
fn test_out_of_range_numeric_reported() {
    let mut cfg = config();
    cfg.values.insert("threshold".into(), json!(150));
    let list = ParameterList::load(&cfg, &join_node()).unwrap();
    let report = list.validation_report();
    assert!(!report.is_valid);
    assert_eq!(report.errors()[0].code, "E310");
}
