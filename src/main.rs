use std::path::Path;

use workflow_params::{
    parse_node_config, ConfigFormat, ColumnField, ColumnType, DataFrameSchema, GraphNode,
    Knowledge, ParameterList,
};

const SAMPLE: &str = r#"
parameters:
  - name: columns
    type: selector
    portIndex: 0
    default:
      excluding: true
      selections: []
  - name: target
    type: selector
    isSingle: true
  - name: output column
    type: string
    validator:
      type: regex
      configuration:
        regex: "[a-z_][a-z0-9_]*"
  - name: fraction
    type: numeric
    default: 0.5
    validator:
      type: range
      configuration:
        begin: 0
        end: 1
values:
  columns:
    excluding: false
    selections:
      - type: columnList
        values: [price, quantity]
      - type: typeList
        values: [timestamp]
      - type: regex
        value: ".*"
  target:
    type: column
    value: discount
  output column: total
  fraction: 0.25
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Node Parameters ===\n");

    let (content, format) = match std::env::args().nth(1) {
        Some(path) => {
            let format = Path::new(&path)
                .extension()
                .and_then(|e| e.to_str())
                .and_then(ConfigFormat::from_extension)
                .unwrap_or(ConfigFormat::Yaml);
            let content = std::fs::read_to_string(&path).expect("Failed to read node config");
            (content, format)
        }
        None => (SAMPLE.to_string(), ConfigFormat::Yaml),
    };

    let config = parse_node_config(&content, format).expect("Failed to parse node config");
    println!("[OK] config parsed ({} parameters)", config.parameters.len());

    // Upstream inference has not run yet.
    let mut node = GraphNode::new("node-1", "select-columns").with_title("Select Columns");
    let mut params = ParameterList::load(&config, &node).expect("Failed to load parameters");

    let wire = serde_json::Value::Object(params.serialize());
    println!("\n=== Serialized ===");
    println!("{}", serde_json::to_string_pretty(&wire).unwrap_or_default());

    print_report("before inference", &params);

    node.set_incoming_knowledge(
        0,
        Knowledge::with_schema(DataFrameSchema::new(vec![
            ColumnField::new("price", ColumnType::Numeric),
            ColumnField::new("quantity", ColumnType::Numeric),
            ColumnField::new("ordered_at", ColumnType::Timestamp),
        ])),
    );
    params.refresh(&node);

    print_report("after inference", &params);
}

fn print_report(stage: &str, params: &ParameterList) {
    let report = params.validation_report();
    println!("\n=== Validation ({}) : valid={} ===", stage, report.is_valid);
    for d in &report.diagnostics {
        println!(
            "  [{:?}] {} {} {}",
            d.level,
            d.code,
            d.parameter.as_deref().unwrap_or("-"),
            d.message
        );
    }
}
