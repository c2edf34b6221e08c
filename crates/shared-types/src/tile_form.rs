//! Client-side validation of the admin tile editor.
//!
//! The form keeps every input as a raw string; `validate_tile_form` checks
//! the trimmed values and, when everything passes, builds the payload sent
//! to the admin API. The backend re-validates independently.

use crate::compliance::parse_numeric_value;
use crate::shariah::{
    detail_path_for, ComparisonType, ComplianceMetric, CustomStatus, ShariahTile,
    ShariahTilePayload, TILE_CTA_LABEL, TILE_LOCKED_DESCRIPTION, TILE_LOCKED_TITLE,
};
use crate::slug::{is_valid_slug, slugify};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Field keys of the error map. Row-level errors use `"{key}.{index}"`.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const CATEGORY: &str = "category";
    pub const DESCRIPTION: &str = "description";
    pub const FOOTER_LEFT: &str = "footerLeft";
    pub const FOOTER_RIGHT: &str = "footerRight";
    pub const ANALYST_NOTES: &str = "analystNotes";
    pub const COMPLIANCE_POINTS: &str = "compliancePoints";
    pub const COMPLIANCE_METRICS: &str = "complianceMetrics";

    /// Key of one row of a list field.
    pub fn row(key: &str, index: usize) -> String {
        format!("{key}.{index}")
    }
}

pub const MIN_TITLE_CHARS: usize = 4;
pub const MIN_CATEGORY_CHARS: usize = 2;
pub const MIN_DESCRIPTION_CHARS: usize = 20;
pub const MIN_FOOTER_LEFT_CHARS: usize = 3;
pub const MIN_ANALYST_NOTES_CHARS: usize = 30;

/// Editable metric row. `comparison_type` is empty until one is chosen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricDraft {
    pub criteria: String,
    pub threshold: String,
    pub actual: String,
    pub comparison_type: String,
    pub custom_status: String,
}

impl MetricDraft {
    pub fn from_metric(metric: &ComplianceMetric) -> Self {
        Self {
            criteria: metric.criteria.clone(),
            threshold: metric.threshold.clone(),
            actual: metric.actual.clone(),
            comparison_type: metric.comparison_type.as_str().to_string(),
            custom_status: metric.custom_status.clone().unwrap_or_default(),
        }
    }

    /// Best-effort metric for the live Pass/Fail preview, even when the row
    /// is still incomplete.
    pub fn preview(&self) -> ComplianceMetric {
        let comparison_type =
            ComparisonType::from_form_value(&self.comparison_type).unwrap_or_default();
        let custom_status = match comparison_type {
            ComparisonType::Custom => CustomStatus::parse(&self.custom_status)
                .map(|s| s.as_str().to_string()),
            _ => None,
        };
        ComplianceMetric {
            criteria: self.criteria.trim().to_string(),
            threshold: self.threshold.trim().to_string(),
            actual: self.actual.trim().to_string(),
            comparison_type,
            custom_status,
        }
    }
}

/// Raw state of the admin editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TileForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub footer_left: String,
    pub footer_right: String,
    pub analyst_notes: String,
    pub compliance_points: Vec<String>,
    pub compliance_metrics: Vec<MetricDraft>,
}

impl TileForm {
    /// A blank form with one empty point and one empty metric row.
    pub fn blank() -> Self {
        Self {
            compliance_points: vec![String::new()],
            compliance_metrics: vec![MetricDraft::default()],
            ..Self::default()
        }
    }

    /// Append an empty metric row, with no comparison type selected.
    pub fn add_metric(&mut self) {
        self.compliance_metrics.push(MetricDraft::default());
    }

    pub fn from_tile(tile: &ShariahTile) -> Self {
        Self {
            title: tile.title.clone(),
            category: tile.category.clone(),
            description: tile.description.clone(),
            footer_left: tile.footer_left.clone(),
            footer_right: tile.footer_right.clone(),
            analyst_notes: tile.analyst_notes.clone(),
            compliance_points: tile.compliance_points.clone(),
            compliance_metrics: tile
                .compliance_metrics
                .iter()
                .map(MetricDraft::from_metric)
                .collect(),
        }
    }

    /// Slug the current title would produce.
    pub fn slug(&self) -> String {
        slugify(self.title.trim())
    }
}

/// Field-keyed validation messages.
pub type FieldErrors = HashMap<String, String>;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn has_letter(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}

/// `true` for a strict `YYYY-MM-DD` string naming a real calendar date.
pub fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    shape_ok && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn require_min(
    errors: &mut FieldErrors,
    key: &str,
    label: &str,
    value: &str,
    min: usize,
) -> bool {
    if value.is_empty() {
        errors.insert(key.to_string(), format!("{label} is required."));
        false
    } else if char_len(value) < min {
        errors.insert(
            key.to_string(),
            format!("{label} must be at least {min} characters."),
        );
        false
    } else {
        true
    }
}

fn validate_title(
    errors: &mut FieldErrors,
    title: &str,
    existing: &[ShariahTile],
    editing_id: Option<&str>,
) {
    if !require_min(errors, fields::TITLE, "Title", title, MIN_TITLE_CHARS) {
        return;
    }
    if !has_letter(title) {
        errors.insert(
            fields::TITLE.into(),
            "Title must contain at least one letter.".into(),
        );
        return;
    }
    let slug = slugify(title);
    if slug.is_empty() {
        errors.insert(
            fields::TITLE.into(),
            "Title cannot be converted to a valid slug.".into(),
        );
        return;
    }
    if !is_valid_slug(&slug) {
        errors.insert(
            fields::TITLE.into(),
            "Generated slug may only contain lowercase letters, numbers and hyphens.".into(),
        );
        return;
    }
    let collides = existing
        .iter()
        .any(|tile| tile.slug == slug && Some(tile.id.as_str()) != editing_id);
    if collides {
        errors.insert(
            fields::TITLE.into(),
            format!("Another tile already uses the slug \"{slug}\". Choose a different title."),
        );
    }
}

/// Group-level message for a list field: the row's own message when only one
/// row is invalid, a count otherwise.
fn row_summary(mut invalid: Vec<String>, noun: &str) -> Option<String> {
    match invalid.len() {
        0 => None,
        1 => invalid.pop(),
        n => Some(format!("{n} {noun} need attention.")),
    }
}

fn validate_points(errors: &mut FieldErrors, points: &[String]) {
    if points.is_empty() {
        errors.insert(
            fields::COMPLIANCE_POINTS.into(),
            "Add at least one compliance point.".into(),
        );
        return;
    }
    let mut invalid = Vec::new();
    for (i, point) in points.iter().enumerate() {
        if point.trim().is_empty() {
            let msg = format!("Compliance point {} cannot be blank.", i + 1);
            errors.insert(fields::row(fields::COMPLIANCE_POINTS, i), msg.clone());
            invalid.push(msg);
        }
    }
    if let Some(summary) = row_summary(invalid, "compliance points") {
        errors.insert(fields::COMPLIANCE_POINTS.into(), summary);
    }
}

fn metric_error(index: usize, draft: &MetricDraft) -> Option<String> {
    let n = index + 1;
    if draft.criteria.trim().is_empty() {
        return Some(format!("Metric {n}: criteria is required."));
    }
    if draft.threshold.trim().is_empty() {
        return Some(format!("Metric {n}: threshold is required."));
    }
    if draft.actual.trim().is_empty() {
        return Some(format!("Metric {n}: actual value is required."));
    }
    let comparison = match ComparisonType::from_form_value(&draft.comparison_type) {
        Some(c) => c,
        None => return Some(format!("Metric {n}: choose a comparison type.")),
    };
    if comparison == ComparisonType::Custom {
        if CustomStatus::parse(&draft.custom_status).is_none() {
            return Some(format!(
                "Metric {n}: choose Pass or Fail for a custom comparison."
            ));
        }
    } else if parse_numeric_value(&draft.threshold).is_none()
        || parse_numeric_value(&draft.actual).is_none()
    {
        return Some(format!(
            "Metric {n}: threshold and actual must both contain a number."
        ));
    }
    None
}

fn validate_metrics(errors: &mut FieldErrors, metrics: &[MetricDraft]) {
    if metrics.is_empty() {
        errors.insert(
            fields::COMPLIANCE_METRICS.into(),
            "Add at least one compliance metric.".into(),
        );
        return;
    }
    let mut invalid = Vec::new();
    for (i, draft) in metrics.iter().enumerate() {
        if let Some(msg) = metric_error(i, draft) {
            errors.insert(fields::row(fields::COMPLIANCE_METRICS, i), msg.clone());
            invalid.push(msg);
        }
    }
    if let Some(summary) = row_summary(invalid, "compliance metrics") {
        errors.insert(fields::COMPLIANCE_METRICS.into(), summary);
    }
}

fn build_metric(draft: &MetricDraft) -> ComplianceMetric {
    let comparison_type =
        ComparisonType::from_form_value(&draft.comparison_type).unwrap_or_default();
    let custom_status = match comparison_type {
        ComparisonType::Custom => {
            CustomStatus::parse(&draft.custom_status).map(|s| s.as_str().to_string())
        }
        _ => None,
    };
    ComplianceMetric {
        criteria: draft.criteria.trim().to_string(),
        threshold: draft.threshold.trim().to_string(),
        actual: draft.actual.trim().to_string(),
        comparison_type,
        custom_status,
    }
}

/// Validate the form against the loaded tiles.
///
/// `editing_id` is the id of the tile being edited, which is excluded from
/// the slug collision scan.
pub fn validate_tile_form(
    form: &TileForm,
    existing: &[ShariahTile],
    editing_id: Option<&str>,
) -> Result<ShariahTilePayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = form.title.trim();
    let category = form.category.trim();
    let description = form.description.trim();
    let footer_left = form.footer_left.trim();
    let footer_right = form.footer_right.trim();
    let analyst_notes = form.analyst_notes.trim();

    validate_title(&mut errors, title, existing, editing_id);

    require_min(
        &mut errors,
        fields::CATEGORY,
        "Category",
        category,
        MIN_CATEGORY_CHARS,
    );

    if require_min(
        &mut errors,
        fields::DESCRIPTION,
        "Description",
        description,
        MIN_DESCRIPTION_CHARS,
    ) && !has_letter(description)
    {
        errors.insert(
            fields::DESCRIPTION.into(),
            "Description must contain at least one letter.".into(),
        );
    }

    require_min(
        &mut errors,
        fields::FOOTER_LEFT,
        "Footer text",
        footer_left,
        MIN_FOOTER_LEFT_CHARS,
    );

    if footer_right.is_empty() {
        errors.insert(fields::FOOTER_RIGHT.into(), "Date is required.".into());
    } else if !is_iso_date(footer_right) {
        errors.insert(
            fields::FOOTER_RIGHT.into(),
            "Date must be a valid date in YYYY-MM-DD format.".into(),
        );
    }

    require_min(
        &mut errors,
        fields::ANALYST_NOTES,
        "Analyst notes",
        analyst_notes,
        MIN_ANALYST_NOTES_CHARS,
    );

    validate_points(&mut errors, &form.compliance_points);
    validate_metrics(&mut errors, &form.compliance_metrics);

    if !errors.is_empty() {
        return Err(errors);
    }

    let slug = slugify(title);
    Ok(ShariahTilePayload {
        detail_path: detail_path_for(&slug),
        slug,
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        footer_left: footer_left.to_string(),
        footer_right: footer_right.to_string(),
        analyst_notes: analyst_notes.to_string(),
        compliance_points: form
            .compliance_points
            .iter()
            .map(|p| p.trim().to_string())
            .collect(),
        compliance_metrics: form.compliance_metrics.iter().map(build_metric).collect(),
        cta_label: TILE_CTA_LABEL.to_string(),
        locked_title: TILE_LOCKED_TITLE.to_string(),
        locked_description: TILE_LOCKED_DESCRIPTION.to_string(),
    })
}
