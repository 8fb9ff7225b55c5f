//! Canonical assessment taxonomy.
//!
//! The category and subcategory lists are a versioned contract: radar axes
//! must land in the same position for every client so charts stay visually
//! comparable across reports. The taxonomy is an explicit table passed into
//! the loader and aggregator rather than scattered literals, so tests (and
//! future taxonomy revisions) can swap in an alternate table.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::model::Score;

/// Taxonomy contract version built into this binary.
pub const TAXONOMY_VERSION: &str = "v1";

/// The three fixed assessment categories.
///
/// The set is part of the report contract (one radar chart each); taxonomy
/// files may vary the subcategory axes but not the categories themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Operations,
    Users,
    Devices,
}

impl Category {
    /// All categories in report order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Operations, Self::Users, Self::Devices]
    }

    /// Display name, matching the input JSON keys.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Operations => "Operations",
            Self::Users => "Users",
            Self::Devices => "Devices",
        }
    }

    /// Fixed radar chart file name for this category.
    #[must_use]
    pub const fn chart_file_name(&self) -> &'static str {
        match self {
            Self::Operations => "radar_operations.png",
            Self::Users => "radar_users.png",
            Self::Devices => "radar_devices.png",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Canonical taxonomy: per-category axis lists plus defaulting knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Taxonomy {
    /// Placeholder used when `client_name` is absent or blank.
    pub default_client_name: String,
    /// Neutral score filled into canonical slots missing from the input.
    pub default_score: u8,
    /// Axis lists in fixed chart order.
    pub operations: Vec<String>,
    pub users: Vec<String>,
    pub devices: Vec<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            default_client_name: "Sample Client".to_string(),
            default_score: 0,
            operations: to_owned(&[
                "Backups & Recovery",
                "Patch Management",
                "Monitoring & Alerting",
                "Change Management",
                "Documentation",
                "Vendor Management",
            ]),
            users: to_owned(&[
                "MFA Adoption",
                "Access Reviews",
                "Security Training",
                "Password Hygiene",
                "On/Offboarding",
                "Privileged Access",
            ]),
            devices: to_owned(&[
                "Endpoint Protection",
                "Disk Encryption",
                "OS Compliance",
                "MDM / Policy",
                "Asset Inventory",
                "Local Admin Control",
            ]),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Taxonomy {
    /// Canonical subcategory axes for a category, in chart order.
    #[must_use]
    pub fn subcategories(&self, category: Category) -> &[String] {
        match category {
            Category::Operations => &self.operations,
            Category::Users => &self.users,
            Category::Devices => &self.devices,
        }
    }

    /// Neutral default score as a validated [`Score`].
    #[must_use]
    pub fn default_score(&self) -> Score {
        Score::clamped(i64::from(self.default_score))
    }

    /// Total number of canonical subcategory slots across all categories.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        Category::all()
            .iter()
            .map(|c| self.subcategories(*c).len())
            .sum()
    }

    /// Load an alternate taxonomy table from a JSON file.
    ///
    /// Unknown fields and empty axis lists are rejected: a half-specified
    /// taxonomy would silently change chart geometry.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            ReportError::config(format!("cannot read taxonomy {}: {err}", path.display()))
        })?;
        let taxonomy: Self = serde_json::from_str(&content).map_err(|err| {
            ReportError::config(format!("invalid taxonomy {}: {err}", path.display()))
        })?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Check structural invariants: non-empty axis lists, in-range default
    /// score, no duplicate axes within a category.
    pub fn validate(&self) -> Result<()> {
        if self.default_score > Score::MAX {
            return Err(ReportError::config(format!(
                "default_score {} exceeds maximum {}",
                self.default_score,
                Score::MAX
            )));
        }
        for category in Category::all() {
            let axes = self.subcategories(category);
            if axes.is_empty() {
                return Err(ReportError::config(format!(
                    "category {category} has no subcategories"
                )));
            }
            for (i, axis) in axes.iter().enumerate() {
                if axes[..i].contains(axis) {
                    return Err(ReportError::config(format!(
                        "category {category} lists duplicate subcategory {axis:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}
