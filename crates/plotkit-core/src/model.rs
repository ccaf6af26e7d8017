//! Layout document model.
//!
//! `AppState` is the whole editable document. It is a plain value: every
//! operation in the designer crate builds a new one instead of mutating the
//! current one in place. Field names serialize in camelCase so state written
//! by the web version of the tool decodes unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Default land width in meters.
pub const DEFAULT_LAND_WIDTH: f64 = 100.0;
/// Default land height in meters.
pub const DEFAULT_LAND_HEIGHT: f64 = 100.0;
/// Default width staged for the next element.
pub const DEFAULT_ELEMENT_WIDTH: f64 = 10.0;
/// Default height staged for the next element.
pub const DEFAULT_ELEMENT_HEIGHT: f64 = 10.0;

fn default_element_width() -> f64 {
    DEFAULT_ELEMENT_WIDTH
}
fn default_element_height() -> f64 {
    DEFAULT_ELEMENT_HEIGHT
}

/// Identifier of a placed element.
///
/// Derived from the creation time in milliseconds, but never equal to an id
/// that already exists, so two elements created in the same millisecond
/// still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Next id not present in `existing`.
    ///
    /// Normally the larger of the current time and `max + 1`. When an
    /// existing id already sits at `u64::MAX`, the smallest unused id is
    /// taken instead.
    pub fn next<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = ElementId>,
    {
        let taken: BTreeSet<u64> = existing.into_iter().map(|id| id.0).collect();
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;

        let Some(&max) = taken.last() else {
            return Self(now);
        };
        match max.checked_add(1) {
            Some(floor) => Self(now.max(floor)),
            None => {
                tracing::warn!("Element id space exhausted above {}, reusing a gap", max);
                let gap = (0..=u64::MAX).find(|candidate| !taken.contains(candidate));
                Self(gap.unwrap_or(now))
            }
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a saved layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(pub String);

impl LayoutId {
    /// Generate a fresh, collision-free id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LayoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rectangle placed on the land.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    /// Older saved states predate element names.
    #[serde(default)]
    pub name: String,
    #[serde(with = "meters")]
    pub width: f64,
    #[serde(with = "meters")]
    pub height: f64,
    /// Top-left corner relative to the land origin. Not clamped.
    #[serde(with = "meters")]
    pub x: f64,
    #[serde(with = "meters")]
    pub y: f64,
}

impl Element {
    /// Creates an element at the land origin.
    pub fn new(id: ElementId, name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id,
            name: name.into(),
            width,
            height,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Center of the element in land coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Named snapshot of a layout, frozen at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLayout {
    pub id: LayoutId,
    pub name: String,
    #[serde(with = "meters")]
    pub land_width: f64,
    #[serde(with = "meters")]
    pub land_height: f64,
    pub elements: Vec<Element>,
}

/// The whole editable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(with = "meters")]
    pub land_width: f64,
    #[serde(with = "meters")]
    pub land_height: f64,
    /// Insertion order doubles as draw order.
    pub elements: Vec<Element>,
    #[serde(default = "default_element_width", with = "meters")]
    pub new_element_width: f64,
    #[serde(default = "default_element_height", with = "meters")]
    pub new_element_height: f64,
    #[serde(default)]
    pub saved_layouts: Vec<SavedLayout>,
    #[serde(default)]
    pub current_layout_id: Option<LayoutId>,
}

impl AppState {
    /// Creates the default document: empty 100x100 land.
    pub fn new() -> Self {
        Self {
            land_width: DEFAULT_LAND_WIDTH,
            land_height: DEFAULT_LAND_HEIGHT,
            elements: Vec::new(),
            new_element_width: DEFAULT_ELEMENT_WIDTH,
            new_element_height: DEFAULT_ELEMENT_HEIGHT,
            saved_layouts: Vec::new(),
            current_layout_id: None,
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn saved_layout(&self, id: &LayoutId) -> Option<&SavedLayout> {
        self.saved_layouts.iter().find(|l| &l.id == id)
    }

    /// The saved layout the live elements were loaded from, if any.
    pub fn current_layout(&self) -> Option<&SavedLayout> {
        self.current_layout_id
            .as_ref()
            .and_then(|id| self.saved_layout(id))
    }

    /// Ids of the live elements, in order.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().map(|e| e.id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lengths in meters.
///
/// Finite values are plain JSON numbers. NaN and the infinities have no JSON
/// number form, so they are written as the strings `"NaN"`, `"Infinity"` and
/// `"-Infinity"`. A `null` (how the web tool stores NaN) reads back as NaN.
mod meters {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(MetersVisitor)
    }

    struct MetersVisitor;

    impl<'de> Visitor<'de> for MetersVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, null, \"NaN\", \"Infinity\" or \"-Infinity\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(f64::NAN)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(f64::NAN)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }
}
