//! Canonical report model.
//!
//! [`ReportModel`] is the fully-defaulted representation every downstream
//! stage consumes: constructed once by the loader, immutable afterwards,
//! never persisted back. Insertion order of the assessment maps is
//! significant only for preserving non-canonical extras; chart axis order
//! always comes from the taxonomy.

use indexmap::IndexMap;

use crate::taxonomy::{Category, Taxonomy};

/// A maturity score on the fixed 0-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Maximum value of the maturity scale.
    pub const MAX: u8 = 5;

    /// Clamp an arbitrary integer onto the scale: below 0 becomes 0, above
    /// 5 becomes 5. Deterministic by contract.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX)) as u8)
    }

    /// Raw value in `0..=5`.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Score as a fraction of the scale maximum, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// One entry of the key-findings list. Order is preserved from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Short classification, e.g. "High Risk" or "Quick Win"
    pub label: String,
    /// Free-text description
    pub description: String,
}

impl Finding {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Per-category score maps keyed by subcategory name.
pub type AssessmentMap = IndexMap<String, IndexMap<String, Score>>;

/// The canonical, fully-defaulted report model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportModel {
    /// Client display name, never empty.
    pub client_name: String,
    /// Scores per category. The three canonical categories are always
    /// present with every canonical subcategory slot filled; extra keys
    /// from the input are preserved but excluded from rendering.
    pub assessment: AssessmentMap,
    /// Ordered findings list, possibly empty.
    pub findings: Vec<Finding>,
}

impl ReportModel {
    /// Build the fully-defaulted model used when no input file exists:
    /// placeholder client name, every canonical slot at the taxonomy
    /// default score, no findings.
    #[must_use]
    pub fn defaulted(taxonomy: &Taxonomy) -> Self {
        let mut assessment = AssessmentMap::new();
        for category in Category::all() {
            let scores = taxonomy
                .subcategories(category)
                .iter()
                .map(|name| (name.clone(), taxonomy.default_score()))
                .collect();
            assessment.insert(category.name().to_string(), scores);
        }
        Self {
            client_name: taxonomy.default_client_name.clone(),
            assessment,
            findings: Vec::new(),
        }
    }

    /// Score map for a canonical category.
    ///
    /// The loader guarantees presence, so a missing entry indicates a bug;
    /// callers treat `None` as an empty map rather than panicking.
    #[must_use]
    pub fn category_scores(&self, category: Category) -> Option<&IndexMap<String, Score>> {
        self.assessment.get(category.name())
    }
}
