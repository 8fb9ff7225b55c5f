//! Client data loading and validation.
//!
//! Turns arbitrary/partial client JSON into a canonical [`ReportModel`].
//! Two failure shapes are deliberately distinct: an absent input file is a
//! supported, defaulted state (the tool stays runnable with zero
//! configuration), while a present-but-malformed file is a hard
//! [`DataFormat`](crate::ReportError::DataFormat) error naming the exact
//! field path. Silently defaulting malformed data would mask data-entry
//! mistakes that defaulting an absent file does not risk.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{DataFormatKind, ReportError, Result};
use crate::model::{AssessmentMap, Finding, ReportModel, Score};
use crate::taxonomy::{Category, Taxonomy};

/// How the validator treats score values that are not integers.
///
/// Out-of-range integers are always clamped onto the 0-5 scale; this policy
/// only governs non-numeric or fractional values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    /// Reject with a `DataFormat` error naming the field (default).
    #[default]
    Strict,
    /// Coerce to 0 with a warning. Opt-in, for demo data known to be messy.
    Lenient,
}

/// Load a client data file into a canonical, fully-defaulted model.
///
/// Returns the defaulted model when `path` does not exist. All validation
/// happens here, before any rendering work, so a failed run never leaves
/// partial artifacts behind.
pub fn load(path: &Path, taxonomy: &Taxonomy, policy: ScorePolicy) -> Result<ReportModel> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "input file absent; using defaulted model");
        return Ok(ReportModel::defaulted(taxonomy));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ReportError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let root: Value = serde_json::from_str(&content).map_err(|err| {
        ReportError::data_format("$", DataFormatKind::InvalidJson(err.to_string()))
    })?;
    let root = root
        .as_object()
        .ok_or_else(|| ReportError::unexpected_type("$", "a JSON object", &root))?;

    let client_name = parse_client_name(root.get("client_name"), taxonomy)?;
    let assessment = parse_assessment(root.get("assessment"), taxonomy, policy)?;
    let findings = parse_findings(root.get("findings"))?;

    tracing::debug!(
        client = %client_name,
        findings = findings.len(),
        "client data validated"
    );

    Ok(ReportModel {
        client_name,
        assessment,
        findings,
    })
}

fn parse_client_name(value: Option<&Value>, taxonomy: &Taxonomy) -> Result<String> {
    match value {
        None | Some(Value::Null) => Ok(taxonomy.default_client_name.clone()),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(taxonomy.default_client_name.clone())
            } else {
                Ok(trimmed.to_string())
            }
        }
        Some(other) => Err(ReportError::unexpected_type(
            "client_name",
            "a string",
            other,
        )),
    }
}

/// Validate the raw assessment object and align it to the taxonomy.
///
/// Canonical categories come first, each with canonical subcategories in
/// axis order (missing slots filled with the taxonomy default), followed by
/// any extra input keys in their original order. Extras are preserved for
/// forward compatibility but never rendered.
fn parse_assessment(
    value: Option<&Value>,
    taxonomy: &Taxonomy,
    policy: ScorePolicy,
) -> Result<AssessmentMap> {
    let raw = match value {
        None | Some(Value::Null) => serde_json::Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(other) => {
            return Err(ReportError::unexpected_type(
                "assessment",
                "an object of categories",
                other,
            ));
        }
    };

    let mut validated: AssessmentMap = AssessmentMap::new();
    for (category_name, category_value) in &raw {
        let field = format!("assessment.{category_name}");
        let scores = match category_value {
            Value::Object(map) => {
                let mut scores = IndexMap::new();
                for (subcategory, score_value) in map {
                    let score =
                        parse_score(&format!("{field}.{subcategory}"), score_value, policy)?;
                    scores.insert(subcategory.clone(), score);
                }
                scores
            }
            other => {
                return Err(ReportError::unexpected_type(
                    field,
                    "an object of subcategory scores",
                    other,
                ));
            }
        };
        validated.insert(category_name.clone(), scores);
    }

    // Align to the canonical taxonomy: fixed categories in fixed order.
    let mut aligned = AssessmentMap::new();
    for category in Category::all() {
        let input = validated.shift_remove(category.name()).unwrap_or_default();
        let mut scores: IndexMap<String, Score> = taxonomy
            .subcategories(category)
            .iter()
            .map(|name| {
                let score = input.get(name).copied().unwrap_or(taxonomy.default_score());
                (name.clone(), score)
            })
            .collect();
        // Keep non-canonical subcategory keys after the canonical axes.
        for (name, score) in input {
            scores.entry(name).or_insert(score);
        }
        aligned.insert(category.name().to_string(), scores);
    }
    // Keep non-canonical categories after the canonical three.
    for (name, scores) in validated {
        aligned.insert(name, scores);
    }

    Ok(aligned)
}

/// Validate a single score value.
///
/// Integers are clamped onto `0..=5`. Integral floats (`3.0`) are accepted
/// and clamped. Everything else is governed by the [`ScorePolicy`].
fn parse_score(field: &str, value: &Value, policy: ScorePolicy) -> Result<Score> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Ok(Score::clamped(i));
        }
        if n.as_u64().is_some() {
            // Larger than i64::MAX, clamps to the scale maximum anyway.
            return Ok(Score::clamped(i64::MAX));
        }
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.is_finite() {
                return Ok(Score::clamped(f as i64));
            }
        }
    }

    match policy {
        ScorePolicy::Strict => Err(ReportError::invalid_score(field, value)),
        ScorePolicy::Lenient => {
            tracing::warn!(field, value = %value, "coercing invalid score to 0");
            Ok(Score::clamped(0))
        }
    }
}

fn parse_findings(value: Option<&Value>) -> Result<Vec<Finding>> {
    let entries = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(ReportError::unexpected_type(
                "findings",
                "an array of [label, description] pairs",
                other,
            ));
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry.as_array().map(Vec::as_slice) {
            Some([Value::String(label), Value::String(description)]) => {
                Ok(Finding::new(label, description))
            }
            _ => Err(ReportError::malformed_finding(index, entry)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use std::path::PathBuf;

    fn write_input(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("client_data.json");
        std::fs::write(&path, content).expect("write input");
        path
    }

    fn load_str(content: &str) -> Result<ReportModel> {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_input(&dir, content);
        load(&path, &Taxonomy::default(), ScorePolicy::Strict)
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let taxonomy = Taxonomy::default();
        let model = load(
            Path::new("/nonexistent/client_data.json"),
            &taxonomy,
            ScorePolicy::Strict,
        )
        .expect("defaults");

        assert_eq!(model.client_name, "Sample Client");
        assert!(model.findings.is_empty());
        let slots: usize = model.assessment.values().map(IndexMap::len).sum();
        assert_eq!(slots, 18);
        assert!(model
            .assessment
            .values()
            .flat_map(IndexMap::values)
            .all(|s| s.value() == 0));
    }

    #[test]
    fn test_invalid_json_syntax_is_data_format_error() {
        let err = load_str("{ not json").expect_err("syntax error");
        assert!(matches!(
            err,
            ReportError::DataFormat {
                source: DataFormatKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_non_object_root_rejected() {
        let err = load_str("[1, 2, 3]").expect_err("array root");
        assert!(err.to_string().contains("expected a JSON object"), "{err}");
    }

    #[test]
    fn test_blank_client_name_defaults() {
        let model = load_str(r#"{"client_name": "   "}"#).expect("load");
        assert_eq!(model.client_name, "Sample Client");
    }

    #[test]
    fn test_non_string_client_name_rejected() {
        let err = load_str(r#"{"client_name": 42}"#).expect_err("numeric name");
        assert!(err.to_string().contains("client_name"), "{err}");
    }

    #[test]
    fn test_scores_clamped() {
        let model = load_str(
            r#"{"assessment": {"Operations": {"Patch Management": 7, "Documentation": -3}}}"#,
        )
        .expect("load");
        let ops = model.category_scores(Category::Operations).expect("present");
        assert_eq!(ops["Patch Management"].value(), 5);
        assert_eq!(ops["Documentation"].value(), 0);
    }

    #[test]
    fn test_integral_float_accepted() {
        let model =
            load_str(r#"{"assessment": {"Users": {"MFA Adoption": 3.0}}}"#).expect("load");
        let users = model.category_scores(Category::Users).expect("present");
        assert_eq!(users["MFA Adoption"].value(), 3);
    }

    #[test]
    fn test_non_numeric_score_rejected_with_field_path() {
        let err = load_str(r#"{"assessment": {"Operations": {"Patch Management": "high"}}}"#)
            .expect_err("strict policy");
        let display = err.to_string();
        assert!(
            display.contains("assessment.Operations.Patch Management"),
            "should name the field path: {display}"
        );
        assert!(display.contains("expected integer 0-5"), "{display}");
        assert!(display.contains("\"high\""), "{display}");
    }

    #[test]
    fn test_fractional_score_rejected_under_strict() {
        let err = load_str(r#"{"assessment": {"Devices": {"Disk Encryption": 3.7}}}"#)
            .expect_err("fractional");
        assert!(err.to_string().contains("assessment.Devices.Disk Encryption"));
    }

    #[test]
    fn test_lenient_policy_coerces_invalid_to_zero() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_input(
            &dir,
            r#"{"assessment": {"Operations": {"Patch Management": "abc"}}}"#,
        );
        let model = load(&path, &Taxonomy::default(), ScorePolicy::Lenient).expect("lenient");
        let ops = model.category_scores(Category::Operations).expect("present");
        assert_eq!(ops["Patch Management"].value(), 0);
    }

    #[test]
    fn test_missing_canonical_slots_filled() {
        let model = load_str(r#"{"assessment": {"Operations": {"Patch Management": 4}}}"#)
            .expect("load");

        // All three categories present even though only one was provided.
        for category in Category::all() {
            let scores = model.category_scores(category).expect("category present");
            assert_eq!(scores.len(), 6, "category {category}");
        }
        let ops = model.category_scores(Category::Operations).expect("present");
        assert_eq!(ops["Patch Management"].value(), 4);
        assert_eq!(ops["Backups & Recovery"].value(), 0);
    }

    #[test]
    fn test_extra_keys_preserved() {
        let model = load_str(
            r#"{"assessment": {
                "Operations": {"Shadow IT": 1},
                "Facilities": {"Badge Access": 3}
            }}"#,
        )
        .expect("load");

        let ops = model.category_scores(Category::Operations).expect("present");
        assert_eq!(ops["Shadow IT"].value(), 1);
        // Canonical axes still come first.
        assert_eq!(ops.get_index(0).map(|(k, _)| k.as_str()), Some("Backups & Recovery"));
        // Non-canonical category survives after the canonical three.
        assert_eq!(model.assessment.len(), 4);
        assert_eq!(model.assessment["Facilities"]["Badge Access"].value(), 3);
    }

    #[test]
    fn test_extra_keys_keep_input_order() {
        // Extras deliberately in reverse lexicographic order; they must come
        // out in input order, not sorted.
        let model = load_str(
            r#"{"assessment": {
                "Operations": {"Zeta Control": 1, "Alpha Control": 2},
                "Warehouse": {"Forklifts": 3},
                "Archives": {"Microfiche": 4}
            }}"#,
        )
        .expect("load");

        let ops = model.category_scores(Category::Operations).expect("present");
        let extras: Vec<&str> = ops.keys().skip(6).map(String::as_str).collect();
        assert_eq!(extras, ["Zeta Control", "Alpha Control"]);

        let categories: Vec<&str> = model.assessment.keys().skip(3).map(String::as_str).collect();
        assert_eq!(categories, ["Warehouse", "Archives"]);
    }

    #[test]
    fn test_findings_order_preserved() {
        let model = load_str(
            r#"{"findings": [["High Risk", "no backups"], ["Quick Win", "enable MFA"]]}"#,
        )
        .expect("load");
        assert_eq!(model.findings.len(), 2);
        assert_eq!(model.findings[0].label, "High Risk");
        assert_eq!(model.findings[1].description, "enable MFA");
    }

    #[test]
    fn test_malformed_finding_names_index() {
        let err = load_str(r#"{"findings": [["ok", "fine"], ["only-label"]]}"#)
            .expect_err("short entry");
        assert!(err.to_string().contains("findings[1]"), "{err}");
    }

    #[test]
    fn test_finding_with_non_string_member_rejected() {
        let err = load_str(r#"{"findings": [["High Risk", 5]]}"#).expect_err("non-string");
        assert!(err.to_string().contains("findings[0]"), "{err}");
    }

    #[test]
    fn test_unreadable_directory_as_input() {
        let dir = tempfile::tempdir().expect("create temp dir");
        // The path exists but is a directory, so reading fails.
        let err = load(dir.path(), &Taxonomy::default(), ScorePolicy::Strict)
            .expect_err("directory input");
        assert!(matches!(err, ReportError::InputRead { .. }));
    }
}
