//! Decoder from raw selection values to [`SelectorItem`]s.
//!
//! Raw values come from user input or from previously saved wire values. A
//! value is dispatched on its `type` discriminant and the payload is decoded
//! for that variant only. Anything that does not decode yields `None`; callers
//! skip it rather than failing the whole parameter.

use serde_json::{Map, Value};

use super::SelectorItem;
use crate::domain::model::ColumnType;

/// Build the selector item described by `raw`, or `None` if unrecognized.
pub fn create_item(raw: &Value) -> Option<SelectorItem> {
    let item = decode(raw);
    if item.is_none() {
        tracing::debug!(raw = %raw, "dropping unrecognized selector item");
    }
    item
}

fn decode(raw: &Value) -> Option<SelectorItem> {
    let obj = raw.as_object()?;
    match obj.get("type")?.as_str()? {
        "column" => {
            let name = obj.get("value")?.as_str()?;
            Some(SelectorItem::column(name))
        }
        "index" => {
            let index = as_index(obj.get("value")?)?;
            Some(SelectorItem::index(index))
        }
        "columnList" => {
            let names = values(obj)?
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()?;
            Some(SelectorItem::ColumnList { values: names })
        }
        "indexRange" => match values(obj)?.as_slice() {
            [lo, hi] => SelectorItem::index_range(as_index(lo)?, as_index(hi)?),
            _ => None,
        },
        "typeList" => {
            let types = values(obj)?
                .iter()
                .map(|v| v.as_str().and_then(ColumnType::from_wire))
                .collect::<Option<Vec<_>>>()?;
            Some(SelectorItem::TypeList { values: types })
        }
        _ => None,
    }
}

fn values(obj: &Map<String, Value>) -> Option<&Vec<Value>> {
    obj.get("values")?.as_array()
}

fn as_index(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|n| usize::try_from(n).ok())
}
