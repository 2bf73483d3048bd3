//! Selector items: one concrete selection unit each.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::model::{ColumnType, DataFrameSchema};

/// A single selection inside a selector parameter.
///
/// Items are only built by [`create_item`](super::create_item) and are never
/// patched in place; an edit replaces the whole item.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorItem {
    /// A column referenced by name.
    Column { value: String },
    /// A column referenced by position.
    Index { value: usize },
    /// Several columns referenced by name.
    ColumnList { values: Vec<String> },
    /// An inclusive range of column positions.
    IndexRange(IndexBounds),
    /// Every column whose type is one of `values`.
    TypeList { values: Vec<ColumnType> },
}

impl SelectorItem {
    pub fn column(name: impl Into<String>) -> Self {
        SelectorItem::Column { value: name.into() }
    }

    pub fn index(index: usize) -> Self {
        SelectorItem::Index { value: index }
    }

    pub fn column_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectorItem::ColumnList {
            values: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Inclusive index range. Returns `None` when `lo > hi`.
    pub fn index_range(lo: usize, hi: usize) -> Option<Self> {
        IndexBounds::new(lo, hi).map(SelectorItem::IndexRange)
    }

    pub fn type_list(types: impl IntoIterator<Item = ColumnType>) -> Self {
        SelectorItem::TypeList {
            values: types.into_iter().collect(),
        }
    }

    /// Wire discriminant of this item.
    pub fn kind(&self) -> &'static str {
        match self {
            SelectorItem::Column { .. } => "column",
            SelectorItem::Index { .. } => "index",
            SelectorItem::ColumnList { .. } => "columnList",
            SelectorItem::IndexRange(_) => "indexRange",
            SelectorItem::TypeList { .. } => "typeList",
        }
    }

    /// Serialized wire form. Feeding it back to the factory yields an equal item.
    pub fn to_wire(&self) -> Value {
        match self {
            SelectorItem::Column { value } => serde_json::json!({"type": "column", "value": value}),
            SelectorItem::Index { value } => serde_json::json!({"type": "index", "value": value}),
            SelectorItem::ColumnList { values } => {
                serde_json::json!({"type": "columnList", "values": values})
            }
            SelectorItem::IndexRange(bounds) => {
                serde_json::json!({"type": "indexRange", "values": [bounds.lo(), bounds.hi()]})
            }
            SelectorItem::TypeList { values } => serde_json::json!({
                "type": "typeList",
                "values": values.iter().map(ColumnType::as_str).collect::<Vec<_>>(),
            }),
        }
    }

    /// Check the item against the currently bound data frame schema.
    ///
    /// Without a schema the upstream shape is unknown and every item passes.
    pub fn validate(&self, schema: Option<&DataFrameSchema>) -> bool {
        self.problem(schema).is_none()
    }

    /// Describes why the item does not fit `schema`, if it doesn't.
    pub(crate) fn problem(&self, schema: Option<&DataFrameSchema>) -> Option<ItemProblem> {
        let schema = schema?;
        match self {
            SelectorItem::Column { value } => (!schema.contains(value))
                .then(|| ItemProblem::UnknownColumns(vec![value.clone()])),
            SelectorItem::ColumnList { values } => {
                let missing: Vec<String> = values
                    .iter()
                    .filter(|name| !schema.contains(name))
                    .cloned()
                    .collect();
                (!missing.is_empty()).then_some(ItemProblem::UnknownColumns(missing))
            }
            SelectorItem::Index { value } => (*value >= schema.len()).then_some(
                ItemProblem::IndexOutOfRange {
                    index: *value,
                    columns: schema.len(),
                },
            ),
            SelectorItem::IndexRange(bounds) => (bounds.hi() >= schema.len()).then_some(
                ItemProblem::IndexOutOfRange {
                    index: bounds.hi(),
                    columns: schema.len(),
                },
            ),
            SelectorItem::TypeList { .. } => None,
        }
    }
}

/// Ordered bounds of an [`SelectorItem::IndexRange`], `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexBounds {
    lo: usize,
    hi: usize,
}

impl IndexBounds {
    /// Returns `None` when `lo > hi`.
    pub fn new(lo: usize, hi: usize) -> Option<Self> {
        (lo <= hi).then_some(Self { lo, hi })
    }

    pub fn lo(&self) -> usize {
        self.lo
    }

    pub fn hi(&self) -> usize {
        self.hi
    }
}

impl Serialize for SelectorItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SelectorItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        super::create_item(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized selector item: {}", raw)))
    }
}

/// Reason an item failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ItemProblem {
    UnknownColumns(Vec<String>),
    IndexOutOfRange { index: usize, columns: usize },
}
