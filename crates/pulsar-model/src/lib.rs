//! Data model for the Pulsar query editor.
//!
//! Holds the persisted query shape, the reference catalog of applications
//! and jobs, the static geography list, and the display tables used to
//! enumerate metric types and aggregations.

pub mod catalog;
pub mod enums;
pub mod error;
pub mod geo;
pub mod query;

pub use catalog::{Catalog, PulsarApp, PulsarJob};
pub use enums::{AggType, MetricType, QueryField, QueryMode};
pub use error::{ModelError, Result};
pub use geo::{GeoEntry, default_geo_list};
pub use query::{PulsarQuery, TrackedFields};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_query_serializes_in_wire_shape() {
        let query = PulsarQuery {
            appid: Some("svc1".to_string()),
            jobid: Some("job1".to_string()),
            metric_type: Some(MetricType::Performance),
            agg: Some(AggType::P95),
            ..PulsarQuery::default()
        };
        let json = serde_json::to_value(&query).expect("serialize query");
        assert_eq!(json["appid"], "svc1");
        assert_eq!(json["metricType"], "performance");
        assert_eq!(json["agg"], "p95");
        assert!(json.get("queryType").is_none());
        assert!(json.get("geo").is_none());
    }
}
