//! Selectable options for each selector.
//!
//! The widget layer renders these; the synchronizer never reads them.

use pulsar_model::{AggType, Catalog, GeoEntry, MetricType, PulsarQuery};
use serde::Serialize;

/// A label/value pair offered by a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Label formatting for catalog-backed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionLabels {
    /// Append the identifier in parentheses, e.g. `Checkout (svc1)`.
    pub show_ids: bool,
}

impl Default for OptionLabels {
    fn default() -> Self {
        Self { show_ids: true }
    }
}

impl OptionLabels {
    fn format(&self, name: &str, id: &str) -> String {
        if self.show_ids {
            format!("{name} ({id})")
        } else {
            name.to_string()
        }
    }
}

/// Applications in catalog order.
pub fn app_options(catalog: &Catalog, labels: OptionLabels) -> Vec<SelectOption> {
    catalog
        .apps()
        .iter()
        .map(|app| SelectOption::new(labels.format(&app.name, &app.appid), &app.appid))
        .collect()
}

/// Jobs of the selected application; empty when none is selected.
pub fn job_options(
    catalog: &Catalog,
    appid: Option<&str>,
    labels: OptionLabels,
) -> Vec<SelectOption> {
    let Some(app) = appid.and_then(|id| catalog.find_app(id)) else {
        return Vec::new();
    };
    app.jobs()
        .iter()
        .map(|job| SelectOption::new(labels.format(&job.name, &job.jobid), &job.jobid))
        .collect()
}

pub fn metric_options() -> Vec<SelectOption> {
    MetricType::ALL
        .iter()
        .map(|metric| SelectOption::new(metric.label(), metric.as_str()))
        .collect()
}

pub fn agg_options() -> Vec<SelectOption> {
    AggType::ALL
        .iter()
        .map(|agg| SelectOption::new(agg.label(), agg.as_str()))
        .collect()
}

/// Geographies labelled with their flag.
pub fn geo_options(geo: &[GeoEntry]) -> Vec<SelectOption> {
    geo.iter()
        .map(|entry| {
            let flag = entry.flag();
            let label = if flag.is_empty() {
                entry.name.clone()
            } else {
                format!("{flag} {}", entry.name)
            };
            SelectOption::new(label, &entry.code)
        })
        .collect()
}

/// State of the free-text ASN input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsnField {
    pub enabled: bool,
    pub placeholder: &'static str,
    pub value: String,
}

impl AsnField {
    /// ASN is only editable once a geography is chosen.
    pub fn for_query(query: &PulsarQuery) -> Self {
        let enabled = query.geo.is_some();
        Self {
            enabled,
            placeholder: if enabled {
                "Leave blank or use * for all ASNs"
            } else {
                "Select geo first"
            },
            value: query.asn.clone().unwrap_or_default(),
        }
    }
}
