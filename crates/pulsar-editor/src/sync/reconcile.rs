//! Re-validation of a stored selection against fresh reference data.

use pulsar_model::{Catalog, PulsarQuery, QueryMode};
use tracing::debug;

/// Reconciliation rule.
///
/// Runs in fixed order:
/// 1. a standing bootstrap flag is cleared to normal
/// 2. an `appid` missing from the catalog clears both `appid` and `jobid`
/// 3. otherwise a `jobid` missing under the matched app clears `jobid`
///
/// Metric type, aggregation, geo, and ASN are never touched here.
pub fn reconcile(mut query: PulsarQuery, catalog: &Catalog) -> PulsarQuery {
    if query.mode == QueryMode::Bootstrap {
        debug!("catalog loaded, clearing bootstrap mode");
        query.mode = QueryMode::Normal;
    }

    let Some(appid) = query.appid.as_deref() else {
        // A job without an app cannot name anything in the catalog.
        if query.jobid.take().is_some() {
            debug!("jobid cleared: no application selected");
        }
        return query;
    };

    let Some(app) = catalog.find_app(appid) else {
        debug!(appid, "stale appid cleared");
        query.appid = None;
        query.jobid = None;
        return query;
    };

    if let Some(jobid) = query.jobid.as_deref()
        && app.find_job(jobid).is_none()
    {
        debug!(appid, jobid, "stale jobid cleared");
        query.jobid = None;
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsar_model::{AggType, MetricType, PulsarApp};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            PulsarApp::new("svc1", "Checkout").with_job("job1", "Ping"),
            PulsarApp::new("svc2", "Search"),
        ])
    }

    #[test]
    fn test_missing_app_clears_app_and_job() {
        let query = PulsarQuery {
            appid: Some("gone".to_string()),
            jobid: Some("job1".to_string()),
            metric_type: Some(MetricType::Performance),
            ..PulsarQuery::default()
        };
        let out = reconcile(query, &catalog());
        assert!(out.appid.is_none());
        assert!(out.jobid.is_none());
        assert_eq!(out.metric_type, Some(MetricType::Performance));
    }

    #[test]
    fn test_missing_job_clears_only_job() {
        let query = PulsarQuery {
            appid: Some("svc2".to_string()),
            jobid: Some("job1".to_string()),
            agg: Some(AggType::Avg),
            geo: Some("US".to_string()),
            asn: Some("12345".to_string()),
            ..PulsarQuery::default()
        };
        let out = reconcile(query, &catalog());
        assert_eq!(out.appid.as_deref(), Some("svc2"));
        assert!(out.jobid.is_none());
        assert_eq!(out.geo.as_deref(), Some("US"));
        assert_eq!(out.asn.as_deref(), Some("12345"));
    }

    #[test]
    fn test_valid_selection_untouched() {
        let query = PulsarQuery {
            appid: Some("svc1".to_string()),
            jobid: Some("job1".to_string()),
            mode: QueryMode::Bootstrap,
            ..PulsarQuery::default()
        };
        let out = reconcile(query, &catalog());
        assert_eq!(out.jobid.as_deref(), Some("job1"));
        assert_eq!(out.mode, QueryMode::Normal);
    }

    #[test]
    fn test_orphan_job_is_cleared() {
        let query = PulsarQuery {
            jobid: Some("job1".to_string()),
            ..PulsarQuery::default()
        };
        assert!(reconcile(query, &catalog()).jobid.is_none());
    }
}
