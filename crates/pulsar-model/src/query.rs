//! The persisted query selection.

use serde::{Deserialize, Serialize};

use crate::enums::{AggType, MetricType, QueryField, QueryMode};

/// Query selection record owned by a single panel.
///
/// Every selector is optional; a query only runs once the four required
/// fields are present (see [`PulsarQuery::is_complete`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulsarQuery {
    #[serde(rename = "refId", default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobid: Option<String>,
    #[serde(rename = "metricType", default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agg: Option<AggType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn: Option<String>,
    #[serde(rename = "queryType", default, skip_serializing_if = "QueryMode::is_normal")]
    pub mode: QueryMode,
}

impl PulsarQuery {
    /// True when app, job, metric type, and aggregation are all set.
    pub fn is_complete(&self) -> bool {
        self.appid.is_some()
            && self.jobid.is_some()
            && self.metric_type.is_some()
            && self.agg.is_some()
    }

    /// Required fields that are still unset, in selector order.
    pub fn missing_fields(&self) -> Vec<QueryField> {
        QueryField::ALL
            .into_iter()
            .filter(|field| field.is_required() && !self.is_set(*field))
            .collect()
    }

    pub fn is_set(&self, field: QueryField) -> bool {
        match field {
            QueryField::App => self.appid.is_some(),
            QueryField::Job => self.jobid.is_some(),
            QueryField::MetricType => self.metric_type.is_some(),
            QueryField::Agg => self.agg.is_some(),
            QueryField::Geo => self.geo.is_some(),
            QueryField::Asn => self.asn.is_some(),
        }
    }

    /// Snapshot of the fields whose changes re-run the query.
    pub fn tracked(&self) -> TrackedFields {
        TrackedFields {
            appid: self.appid.clone(),
            jobid: self.jobid.clone(),
            metric_type: self.metric_type,
            agg: self.agg,
            geo: self.geo.clone(),
            asn: self.asn.clone(),
        }
    }
}

/// The six fields the execution trigger watches.
///
/// Mode and `refId` are deliberately excluded: flipping the bootstrap flag
/// never re-runs a query on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TrackedFields {
    pub appid: Option<String>,
    pub jobid: Option<String>,
    pub metric_type: Option<MetricType>,
    pub agg: Option<AggType>,
    pub geo: Option<String>,
    pub asn: Option<String>,
}
