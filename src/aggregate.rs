//! Category aggregation.
//!
//! Derives the per-category axis vectors consumed by the radar charts.
//! This exists as a separate stage so axis order always follows the
//! canonical taxonomy rather than the insertion order of whatever JSON the
//! client sent: the same subcategory must land on the same chart position
//! for every client.

use crate::model::{ReportModel, Score};
use crate::taxonomy::{Category, Taxonomy};

/// One radar axis: canonical subcategory name plus its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub subcategory: String,
    pub score: Score,
}

/// Ordered axis list for one category, in canonical chart order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVector {
    pub category: Category,
    pub axes: Vec<Axis>,
}

impl CategoryVector {
    /// Mean score across all axes, rounded to two decimals.
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.axes.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.axes.iter().map(|a| f64::from(a.score.value())).sum();
        (sum / self.axes.len() as f64 * 100.0).round() / 100.0
    }
}

/// The three derived vectors, one per fixed category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVectors {
    pub operations: CategoryVector,
    pub users: CategoryVector,
    pub devices: CategoryVector,
}

impl CategoryVectors {
    /// Vectors in report order.
    #[must_use]
    pub fn iter(&self) -> [&CategoryVector; 3] {
        [&self.operations, &self.users, &self.devices]
    }
}

/// Build the per-category axis vectors from a canonical model.
///
/// Pure function of model + taxonomy; no I/O. Only canonical subcategories
/// appear on the chart, in taxonomy order; extra keys the loader preserved
/// are skipped here. A slot missing from the model (impossible after a
/// well-behaved load) falls back to the taxonomy default.
#[must_use]
pub fn aggregate(model: &ReportModel, taxonomy: &Taxonomy) -> CategoryVectors {
    let vector = |category: Category| {
        let scores = model.category_scores(category);
        let axes = taxonomy
            .subcategories(category)
            .iter()
            .map(|name| Axis {
                subcategory: name.clone(),
                score: scores
                    .and_then(|s| s.get(name))
                    .copied()
                    .unwrap_or(taxonomy.default_score()),
            })
            .collect();
        CategoryVector { category, axes }
    };

    CategoryVectors {
        operations: vector(Category::Operations),
        users: vector(Category::Users),
        devices: vector(Category::Devices),
    }
}
