use std::collections::BTreeMap;

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Number, Value};

/// Bounds of the floats that convert to an `i64` without saturating
const MILLIS_RANGE: std::ops::Range<f64> = -9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0;

/// One item the facility is asking donors for.
///
/// The store assigns `id`, `created_at` and `link`; everything else comes from the admin form
/// and is carried through untouched. Fields this version doesn't know about are kept in
/// `extra` so they survive a load/persist cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct NeedRecord {
    #[getset(get = "pub")]
    id: String,
    #[getset(get = "pub")]
    name: String,
    /// URL or embedded data, never inspected
    #[getset(get = "pub")]
    image: String,
    /// Unix milliseconds
    #[serde(deserialize_with = "whole_millis")]
    #[getset(get_copy = "pub")]
    created_at: i64,
    /// Reserved, always empty
    #[serde(default)]
    #[getset(get = "pub")]
    link: String,
    #[serde(default)]
    #[getset(get = "pub")]
    category: String,
    #[serde(default)]
    #[getset(get = "pub")]
    description: String,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl NeedRecord {
    pub(crate) fn new(id: String, created_at: i64, draft: NeedDraft) -> Self {
        Self {
            id,
            name: draft.name,
            image: draft.image,
            created_at,
            link: String::new(),
            category: draft.category,
            description: draft.description,
            extra: BTreeMap::new(),
        }
    }
}

/// Read a timestamp that may have been written as a float (`1700000000000.0`, `1.7e12`) as long
/// as it is a whole number.
#[allow(clippy::cast_possible_truncation)]
fn whole_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;

    if let Some(millis) = number.as_i64() {
        return Ok(millis);
    }

    number
        .as_f64()
        .filter(|millis| millis.fract() == 0.0 && MILLIS_RANGE.contains(millis))
        .map(|millis| millis as i64)
        .ok_or_else(|| de::Error::custom(format!("invalid timestamp {number}")))
}

/// The admin-supplied part of a [`NeedRecord`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NeedDraft {
    pub name: String,
    pub image: String,
    pub category: String,
    pub description: String,
}

impl NeedDraft {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
