//! Type-safe enumerations for the query editor.
//!
//! Metric types and aggregations travel as lowercase strings on the wire;
//! these enums give them compile-time safety and carry the display tables
//! used to enumerate selectable keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Category of measurement requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Performance,
    Availability,
}

impl MetricType {
    /// All metric types in display order.
    pub const ALL: [MetricType; 2] = [MetricType::Performance, MetricType::Availability];

    /// Returns the wire key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Performance => "performance",
            MetricType::Availability => "availability",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MetricType::Performance => "Performance",
            MetricType::Availability => "Availability",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "performance" => Ok(MetricType::Performance),
            "availability" => Ok(MetricType::Availability),
            _ => Err(ModelError::UnknownMetricType(s.to_string())),
        }
    }
}

/// Statistical reduction applied to raw samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggType {
    Avg,
    Max,
    Min,
    P50,
    P75,
    P90,
    P95,
    P99,
}

impl AggType {
    /// All aggregations in display order.
    pub const ALL: [AggType; 8] = [
        AggType::Avg,
        AggType::Max,
        AggType::Min,
        AggType::P50,
        AggType::P75,
        AggType::P90,
        AggType::P95,
        AggType::P99,
    ];

    /// Returns the wire key.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggType::Avg => "avg",
            AggType::Max => "max",
            AggType::Min => "min",
            AggType::P50 => "p50",
            AggType::P75 => "p75",
            AggType::P90 => "p90",
            AggType::P95 => "p95",
            AggType::P99 => "p99",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            AggType::Avg => "Average",
            AggType::Max => "Max",
            AggType::Min => "Min",
            AggType::P50 => "50th Percentile",
            AggType::P75 => "75th Percentile",
            AggType::P90 => "90th Percentile",
            AggType::P95 => "95th Percentile",
            AggType::P99 => "99th Percentile",
        }
    }
}

impl fmt::Display for AggType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AggType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        AggType::ALL
            .into_iter()
            .find(|agg| agg.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownAggregation(s.to_string()))
    }
}

/// What an execution request means to the transport.
///
/// `Bootstrap` asks for the application/job catalog instead of metrics.
/// It is transient: the synchronizer clears it back to `Normal` on the
/// first pass that sees a loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QueryMode {
    #[serde(rename = "initialAppsJobsFetch")]
    Bootstrap,
    #[default]
    #[serde(rename = "regular")]
    Normal,
}

impl QueryMode {
    pub fn is_normal(&self) -> bool {
        matches!(self, QueryMode::Normal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Bootstrap => "initialAppsJobsFetch",
            QueryMode::Normal => "regular",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator-editable fields of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryField {
    #[serde(rename = "appid")]
    App,
    #[serde(rename = "jobid")]
    Job,
    #[serde(rename = "metricType")]
    MetricType,
    #[serde(rename = "agg")]
    Agg,
    #[serde(rename = "geo")]
    Geo,
    #[serde(rename = "asn")]
    Asn,
}

impl QueryField {
    pub const ALL: [QueryField; 6] = [
        QueryField::App,
        QueryField::Job,
        QueryField::MetricType,
        QueryField::Agg,
        QueryField::Geo,
        QueryField::Asn,
    ];

    /// Returns the wire key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryField::App => "appid",
            QueryField::Job => "jobid",
            QueryField::MetricType => "metricType",
            QueryField::Agg => "agg",
            QueryField::Geo => "geo",
            QueryField::Asn => "asn",
        }
    }

    /// Returns the field label shown next to the selector.
    pub fn label(&self) -> &'static str {
        match self {
            QueryField::App => "App",
            QueryField::Job => "Job",
            QueryField::MetricType => "Metric",
            QueryField::Agg => "Aggregation",
            QueryField::Geo => "Geo",
            QueryField::Asn => "ASN",
        }
    }

    /// Returns true if the field must be set before a query can run.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            QueryField::App | QueryField::Job | QueryField::MetricType | QueryField::Agg
        )
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryField {
    type Err = ModelError;

    /// Accepts the wire key or the field label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "appid" | "app" => Ok(QueryField::App),
            "jobid" | "job" => Ok(QueryField::Job),
            "metrictype" | "metric" => Ok(QueryField::MetricType),
            "agg" | "aggregation" => Ok(QueryField::Agg),
            "geo" => Ok(QueryField::Geo),
            "asn" => Ok(QueryField::Asn),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}
