//! Shariah compliance tiles: the content records managed by the admin
//! console and rendered on the public research pages.

use serde::{Deserialize, Serialize};

/// Label on the call-to-action button of every tile.
pub const TILE_CTA_LABEL: &str = "View Analysis";

/// Overlay heading shown over locked tile content.
pub const TILE_LOCKED_TITLE: &str = "Unlock the full Shariah analysis";

/// Overlay body shown over locked tile content.
pub const TILE_LOCKED_DESCRIPTION: &str =
    "Subscribe to see every compliance metric, screening point and analyst note.";

/// Public route of a tile's detail page.
pub fn detail_path_for(slug: &str) -> String {
    format!("/shariah/{slug}")
}

/// How a metric's `actual` value is compared against its `threshold`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonType {
    LessThan,
    GreaterThan,
    Equal,
    /// Pass/fail is set manually through `custom_status`.
    Custom,
    /// Anything the backend stores that this client does not know, or no
    /// type at all. Evaluates as a pass.
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl ComparisonType {
    /// Options offered by the admin form, in display order.
    pub const SELECTABLE: [ComparisonType; 4] = [
        ComparisonType::LessThan,
        ComparisonType::GreaterThan,
        ComparisonType::Equal,
        ComparisonType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonType::LessThan => "less_than",
            ComparisonType::GreaterThan => "greater_than",
            ComparisonType::Equal => "equal",
            ComparisonType::Custom => "custom",
            ComparisonType::Unrecognized => "unrecognized",
        }
    }

    /// Parse a form value. Empty input means "not selected".
    pub fn from_form_value(s: &str) -> Option<Self> {
        match s.trim() {
            "" => None,
            "less_than" => Some(ComparisonType::LessThan),
            "greater_than" => Some(ComparisonType::GreaterThan),
            "equal" => Some(ComparisonType::Equal),
            "custom" => Some(ComparisonType::Custom),
            _ => Some(ComparisonType::Unrecognized),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonType::LessThan => "Less than or equal",
            ComparisonType::GreaterThan => "Greater than or equal",
            ComparisonType::Equal => "Equal",
            ComparisonType::Custom => "Manual pass/fail",
            ComparisonType::Unrecognized => "Unrecognized",
        }
    }
}

/// Manually assigned result for `ComparisonType::Custom` metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CustomStatus {
    Pass,
    Fail,
}

impl CustomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomStatus::Pass => "pass",
            CustomStatus::Fail => "fail",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pass" => Some(CustomStatus::Pass),
            "fail" => Some(CustomStatus::Fail),
            _ => None,
        }
    }
}

/// One row of a tile's compliance metrics table.
///
/// `custom_status` stays a raw string so that the evaluator can match it
/// case-insensitively, whatever the backend stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetric {
    pub criteria: String,
    pub threshold: String,
    pub actual: String,
    #[serde(default)]
    pub comparison_type: ComparisonType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_status: Option<String>,
}

/// A persisted tile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShariahTile {
    #[serde(alias = "_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub footer_left: String,
    pub footer_right: String,
    #[serde(default)]
    pub analyst_notes: String,
    #[serde(default)]
    pub compliance_points: Vec<String>,
    #[serde(default)]
    pub compliance_metrics: Vec<ComplianceMetric>,
    #[serde(default = "default_cta_label")]
    pub cta_label: String,
    #[serde(default)]
    pub detail_path: String,
    #[serde(default = "default_locked_title")]
    pub locked_title: String,
    #[serde(default = "default_locked_description")]
    pub locked_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ShariahTile {
    /// Count of passing metrics, for the summary line on cards.
    pub fn passing_metrics(&self) -> usize {
        self.compliance_metrics
            .iter()
            .filter(|m| crate::compliance::evaluate_metric(m))
            .count()
    }
}

/// Body of admin create/update requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShariahTilePayload {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub footer_left: String,
    pub footer_right: String,
    pub analyst_notes: String,
    pub compliance_points: Vec<String>,
    pub compliance_metrics: Vec<ComplianceMetric>,
    pub cta_label: String,
    pub detail_path: String,
    pub locked_title: String,
    pub locked_description: String,
}

fn default_cta_label() -> String {
    TILE_CTA_LABEL.to_string()
}

fn default_locked_title() -> String {
    TILE_LOCKED_TITLE.to_string()
}

fn default_locked_description() -> String {
    TILE_LOCKED_DESCRIPTION.to_string()
}
