//! Document types for the Mishnah structure dataset.
//!
//! The serialized shape is consumed by existing readers, so field names on
//! the wire keep their historical spelling (`safariaName`,
//! `numberOfMishnayot`) while the Rust side uses descriptive names.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Word prepended to a chapter number to form its Hebrew label.
pub const CHAPTER_LABEL_PREFIX: &str = "פרק";

/// Format the Hebrew label for a chapter number, e.g. `פרק 3`.
pub fn chapter_label(number: u32) -> String {
    format!("{CHAPTER_LABEL_PREFIX} {number}")
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Identifying metadata shared by orders and tractates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// 1-based position within the parent list.
    #[serde(rename = "order")]
    pub sequence_number: u32,
    /// Hebrew name.
    #[serde(rename = "hebrewName")]
    pub local_name: String,
    /// Transliterated name; also the key under which the entry is stored.
    #[serde(rename = "safariaName")]
    pub canonical_name: String,
}

// ---------------------------------------------------------------------------
// Document tree
// ---------------------------------------------------------------------------

/// A single chapter and its mishnah count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Derived label, see [`chapter_label`].
    #[serde(rename = "hebrewName")]
    pub local_label: String,
    /// Number of mishnayot in the chapter.
    #[serde(rename = "numberOfMishnayot")]
    pub unit_count: u32,
}

impl Chapter {
    pub fn new(number: u32, unit_count: u32) -> Self {
        Self {
            local_label: chapter_label(number),
            unit_count,
        }
    }
}

/// A tractate with its chapters keyed by chapter number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tractate {
    pub metadata: Metadata,
    /// Dense 1..N keys. Serialized as JSON string keys (`"1"`, `"2"`, ...).
    pub chapters: IndexMap<u32, Chapter>,
}

impl Tractate {
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.get(&number)
    }

    /// Sum of mishnayot over every chapter.
    pub fn unit_total(&self) -> u32 {
        self.chapters.values().map(|c| c.unit_count).sum()
    }
}

/// A seder (order) with its tractates keyed by canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub metadata: Metadata,
    pub tractates: IndexMap<String, Tractate>,
}

impl Order {
    pub fn tractate(&self, canonical_name: &str) -> Option<&Tractate> {
        self.tractates.get(canonical_name)
    }
}

/// Root of the dataset: orders keyed by canonical name, in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub orders: IndexMap<String, Order>,
}

impl Document {
    pub fn order(&self, canonical_name: &str) -> Option<&Order> {
        self.orders.get(canonical_name)
    }

    /// Iterate every tractate across all orders, in document order.
    pub fn tractates(&self) -> impl Iterator<Item = (&Order, &Tractate)> {
        self.orders
            .values()
            .flat_map(|order| order.tractates.values().map(move |t| (order, t)))
    }
}
