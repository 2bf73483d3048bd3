//! Column selector parameter.
//!
//! A selector lets the user pick one column (single mode) or a list of
//! selections (multi mode) from the data frame flowing into one of the node's
//! input ports. In multi mode the list is either an inclusion set or, when
//! `excluding` is on, the set of columns to leave out.
//!
//! Wire values:
//! - single mode: `null` or one item shape, e.g. `{"type":"column","value":"x"}`
//! - multi mode: `null` or `{"excluding": bool, "selections": [item, ...]}`

mod factory;
mod item;

use serde_json::Value;

use crate::domain::model::DataFrameSchema;
use crate::dsl::schema::SelectorSchema;
use crate::dsl::validation::{error, warn, Diagnostic};
use crate::graph::KnowledgeSource;

pub use factory::create_item;
pub use item::{IndexBounds, SelectorItem};
use item::ItemProblem;

use super::GenericParameter;

/// Construction input for [`SelectorParameter::new`].
#[derive(Debug, Clone, Default)]
pub struct SelectorOptions {
    pub name: String,
    /// Raw selection: one item shape in single mode, a list of item shapes in
    /// multi mode. `None` and `Some(Value::Null)` both mean nothing selected.
    pub value: Option<Value>,
    pub schema: SelectorSchema,
    /// Multi mode only; `None` means not supplied and defaults to `false`.
    pub excluding: Option<bool>,
}

/// Selection mode and the flags that only exist in multi mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multi {
        excluding: bool,
        default_excluding: bool,
    },
}

#[derive(Debug, Clone)]
pub struct SelectorParameter {
    name: String,
    schema: SelectorSchema,
    mode: SelectionMode,
    items: Vec<SelectorItem>,
    default_items: Option<Vec<SelectorItem>>,
    data_frame_schema: Option<DataFrameSchema>,
}

impl SelectorParameter {
    pub fn new(options: SelectorOptions, node: &dyn KnowledgeSource) -> Self {
        let SelectorOptions {
            name,
            value,
            schema,
            excluding,
        } = options;

        let mode = if schema.is_single {
            SelectionMode::Single
        } else {
            SelectionMode::Multi {
                excluding: excluding.unwrap_or(false),
                default_excluding: schema
                    .default
                    .as_ref()
                    .and_then(|d| d.get("excluding"))
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            }
        };

        let default_value = schema.default.clone();
        let mut param = Self {
            name,
            schema,
            mode,
            items: Vec::new(),
            default_items: None,
            data_frame_schema: None,
        };
        param.init_items(value.as_ref(), default_value.as_ref());
        param.set_data_frame_schema(node);
        param
    }

    /// Build a selector from a previously saved wire value.
    ///
    /// Multi-mode wire values `{excluding, selections}` are split into the
    /// selection list and the excluding flag. A bare list is taken as the
    /// selection list.
    pub fn from_wire(
        name: impl Into<String>,
        schema: SelectorSchema,
        wire: Option<&Value>,
        node: &dyn KnowledgeSource,
    ) -> Self {
        let (value, excluding) = match wire {
            Some(Value::Object(map))
                if !schema.is_single
                    && (map.contains_key("selections") || map.contains_key("excluding")) =>
            {
                (
                    map.get("selections").cloned(),
                    map.get("excluding").and_then(Value::as_bool),
                )
            }
            other => (other.cloned(), None),
        };
        Self::new(
            SelectorOptions {
                name: name.into(),
                value,
                schema,
                excluding,
            },
            node,
        )
    }

    /// Rebuild `items` from `value` and `default_items` from `default_value`.
    ///
    /// Both are replaced wholesale. An absent default leaves `default_items` unset.
    pub fn init_items(&mut self, value: Option<&Value>, default_value: Option<&Value>) {
        let single = self.schema.is_single;

        self.items = match present(value) {
            Some(v) if single => single_items(v),
            Some(v) => multi_items(v),
            None => Vec::new(),
        };

        if let Some(default) = present(default_value) {
            self.default_items = Some(if single {
                single_items(default)
            } else {
                default.get("selections").map(multi_items).unwrap_or_default()
            });
        }
    }

    /// Re-derive the data frame schema from the node's knowledge at `port_index`.
    pub fn set_data_frame_schema(&mut self, node: &dyn KnowledgeSource) {
        let port_index = self.schema.port_index;
        self.data_frame_schema = node
            .incoming_knowledge(port_index)
            .and_then(|k| k.data_frame_schema())
            .cloned();
        tracing::debug!(
            parameter = %self.name,
            port_index,
            bound = self.data_frame_schema.is_some(),
            "selector data frame schema refreshed"
        );
    }

    pub fn schema(&self) -> &SelectorSchema {
        &self.schema
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_single(&self) -> bool {
        matches!(self.mode, SelectionMode::Single)
    }

    pub fn port_index(&self) -> usize {
        self.schema.port_index
    }

    pub fn items(&self) -> &[SelectorItem] {
        &self.items
    }

    pub fn default_items(&self) -> Option<&[SelectorItem]> {
        self.default_items.as_deref()
    }

    /// Always `false` in single mode.
    pub fn excluding(&self) -> bool {
        match self.mode {
            SelectionMode::Single => false,
            SelectionMode::Multi { excluding, .. } => excluding,
        }
    }

    /// Always `false` in single mode.
    pub fn default_excluding(&self) -> bool {
        match self.mode {
            SelectionMode::Single => false,
            SelectionMode::Multi {
                default_excluding, ..
            } => default_excluding,
        }
    }

    pub fn data_frame_schema(&self) -> Option<&DataFrameSchema> {
        self.data_frame_schema.as_ref()
    }

    /// Replace the selection wholesale.
    pub fn set_items(&mut self, items: Vec<SelectorItem>) {
        self.items = items;
    }

    pub fn add_item(&mut self, item: SelectorItem) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, index: usize) -> Option<SelectorItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Switch between inclusion and exclusion. Returns `false` in single mode,
    /// where the flag does not exist.
    pub fn set_excluding(&mut self, value: bool) -> bool {
        match &mut self.mode {
            SelectionMode::Single => {
                tracing::debug!(parameter = %self.name, "excluding ignored for single selector");
                false
            }
            SelectionMode::Multi { excluding, .. } => {
                *excluding = value;
                true
            }
        }
    }

    /// Put the selection back to the schema default.
    pub fn reset_to_default(&mut self) {
        self.items = self.default_items.clone().unwrap_or_default();
        if let SelectionMode::Multi {
            excluding,
            default_excluding,
        } = &mut self.mode
        {
            *excluding = *default_excluding;
        }
    }
}

impl GenericParameter for SelectorParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self) -> Value {
        match self.mode {
            SelectionMode::Single => self
                .items
                .first()
                .map(SelectorItem::to_wire)
                .unwrap_or(Value::Null),
            SelectionMode::Multi { excluding, .. } => {
                if !excluding && self.items.is_empty() {
                    return Value::Null;
                }
                let selections: Vec<Value> = self.items.iter().map(SelectorItem::to_wire).collect();
                serde_json::json!({
                    "excluding": excluding,
                    "selections": selections,
                })
            }
        }
    }

    fn validate(&self) -> bool {
        if self.is_single() && self.items.len() > 1 {
            return false;
        }
        let schema = self.data_frame_schema.as_ref();
        self.items.iter().all(|item| item.validate(schema))
    }

    fn refresh(&mut self, node: &dyn KnowledgeSource) {
        self.set_data_frame_schema(node);
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        let name = Some(self.name.clone());
        if self.is_single() && self.items.len() > 1 {
            return vec![error(
                "E301",
                format!("Single selector holds {} selections", self.items.len()),
                name,
                None,
            )];
        }

        let mut diags = Vec::new();
        let schema = self.data_frame_schema.as_ref();
        for (idx, item) in self.items.iter().enumerate() {
            let path = Some(if self.is_single() {
                "value".to_string()
            } else {
                format!("selections[{}]", idx)
            });
            match item.problem(schema) {
                Some(ItemProblem::UnknownColumns(columns)) => diags.push(error(
                    "E302",
                    format!("Unknown column(s): {}", columns.join(", ")),
                    name.clone(),
                    path,
                )),
                Some(ItemProblem::IndexOutOfRange { index, columns }) => diags.push(error(
                    "E303",
                    format!("Column index {} out of range for {} column(s)", index, columns),
                    name.clone(),
                    path,
                )),
                None => {}
            }
        }
        if self.excluding() && self.items.is_empty() {
            diags.push(warn(
                "W301",
                "Excluding nothing selects every column".to_string(),
                name,
                None,
            ));
        }
        diags
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn single_items(value: &Value) -> Vec<SelectorItem> {
    create_item(value).into_iter().collect()
}

fn multi_items(value: &Value) -> Vec<SelectorItem> {
    match value.as_array() {
        Some(entries) => entries.iter().filter_map(create_item).collect(),
        None => {
            tracing::debug!(value = %value, "expected a list of selections");
            Vec::new()
        }
    }
}
