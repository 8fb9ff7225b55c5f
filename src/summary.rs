//! Executive summary derivation.
//!
//! Maps mean category scores onto the five-level maturity ladder shown in
//! the report's executive summary.

use crate::aggregate::CategoryVectors;
use crate::taxonomy::Category;

/// Maturity level for a 0-5 mean score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MaturityLevel {
    /// Below 1.25
    AtRisk,
    /// 1.25 to below 2.25
    Basic,
    /// 2.25 to below 3.25
    Developing,
    /// 3.25 to below 4.25
    Managed,
    /// 4.25 and above
    Optimized,
}

impl MaturityLevel {
    /// Map a mean score onto the ladder.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 4.25 {
            Self::Optimized
        } else if score >= 3.25 {
            Self::Managed
        } else if score >= 2.25 {
            Self::Developing
        } else if score >= 1.25 {
            Self::Basic
        } else {
            Self::AtRisk
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AtRisk => "At Risk",
            Self::Basic => "Basic",
            Self::Developing => "Developing",
            Self::Managed => "Managed",
            Self::Optimized => "Optimized",
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Mean score and maturity level for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub mean: f64,
    pub level: MaturityLevel,
}

/// Overall and per-category maturity summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub overall: f64,
    pub overall_level: MaturityLevel,
    pub categories: [CategorySummary; 3],
}

/// Derive the summary from the aggregated vectors. Pure and deterministic.
#[must_use]
pub fn summarize(vectors: &CategoryVectors) -> ReportSummary {
    let categories: [CategorySummary; 3] = vectors.iter().map(|v| {
        let mean = v.mean_score();
        CategorySummary {
            category: v.category,
            mean,
            level: MaturityLevel::from_score(mean),
        }
    });

    let overall =
        (categories.iter().map(|c| c.mean).sum::<f64>() / 3.0 * 100.0).round() / 100.0;
    ReportSummary {
        overall,
        overall_level: MaturityLevel::from_score(overall),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::model::ReportModel;
    use crate::taxonomy::Taxonomy;

    #[test]
    fn test_maturity_thresholds() {
        assert_eq!(MaturityLevel::from_score(0.0), MaturityLevel::AtRisk);
        assert_eq!(MaturityLevel::from_score(1.24), MaturityLevel::AtRisk);
        assert_eq!(MaturityLevel::from_score(1.25), MaturityLevel::Basic);
        assert_eq!(MaturityLevel::from_score(2.25), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::from_score(3.25), MaturityLevel::Managed);
        assert_eq!(MaturityLevel::from_score(4.25), MaturityLevel::Optimized);
        assert_eq!(MaturityLevel::from_score(5.0), MaturityLevel::Optimized);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(MaturityLevel::AtRisk.name(), "At Risk");
        assert_eq!(MaturityLevel::Optimized.to_string(), "Optimized");
    }

    #[test]
    fn test_defaulted_model_is_at_risk() {
        let taxonomy = Taxonomy::default();
        let vectors = aggregate(&ReportModel::defaulted(&taxonomy), &taxonomy);
        let summary = summarize(&vectors);

        assert!(summary.overall.abs() < f64::EPSILON);
        assert_eq!(summary.overall_level, MaturityLevel::AtRisk);
        assert_eq!(summary.categories.len(), 3);
        assert_eq!(summary.categories[0].category, Category::Operations);
    }

    #[test]
    fn test_overall_is_mean_of_category_means() {
        let taxonomy = Taxonomy {
            default_score: 3,
            ..Taxonomy::default()
        };
        let vectors = aggregate(&ReportModel::defaulted(&taxonomy), &taxonomy);
        let summary = summarize(&vectors);
        assert!((summary.overall - 3.0).abs() < 1e-9);
        assert_eq!(summary.overall_level, MaturityLevel::Developing);
    }
}
