//! Course records consumed by the card components.
//!
//! DESIGN
//! ======
//! These types mirror the course payload served by the catalog API. Every
//! field is optional on the wire so a partially populated record still
//! renders; the card substitutes placeholders and defaults for gaps.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A remote image reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub url: Option<String>,
}

/// Instructor or author of a course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publisher {
    pub name: Option<String>,
    /// Display role, e.g. `"Senior Instructor"`.
    pub role: Option<String>,
    pub avatar: Option<ImageRef>,
}

/// A purchasable course as listed in the catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    /// Catalog identifier, used to build the detail route.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Current price in the catalog's base unit.
    pub price: Option<f64>,
    /// List price shown struck through next to the rating.
    pub estimated_price: Option<f64>,
    pub is_free: bool,
    /// Average rating, usually 0.0 to 5.0.
    pub rating: Option<f64>,
    /// Number of purchases, displayed as the review count.
    pub purchased: Option<u64>,
    pub thumbnail: Option<ImageRef>,
    pub publisher: Option<Publisher>,
}

impl Course {
    /// Raw thumbnail URL, if any.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_ref()?.url.as_deref()
    }

    /// Raw publisher avatar URL, if any.
    pub fn avatar_url(&self) -> Option<&str> {
        self.publisher.as_ref()?.avatar.as_ref()?.url.as_deref()
    }

    pub fn publisher_name(&self) -> Option<&str> {
        self.publisher.as_ref()?.name.as_deref()
    }

    /// Publisher role; empty strings count as absent.
    pub fn publisher_role(&self) -> Option<&str> {
        self.publisher
            .as_ref()?
            .role
            .as_deref()
            .filter(|role| !role.is_empty())
    }
}
