//! Tests for pulsar-model wire shapes.

use pulsar_model::{
    AggType, Catalog, MetricType, ModelError, PulsarApp, PulsarQuery, QueryMode,
};

#[test]
fn query_deserializes_from_backend_json() {
    let json = r#"{
        "refId": "A",
        "appid": "svc1",
        "jobid": "job1",
        "metricType": "availability",
        "agg": "p90",
        "geo": "US",
        "asn": "12345"
    }"#;
    let query: PulsarQuery = serde_json::from_str(json).expect("deserialize query");
    assert_eq!(query.ref_id.as_deref(), Some("A"));
    assert_eq!(query.metric_type, Some(MetricType::Availability));
    assert_eq!(query.agg, Some(AggType::P90));
    assert_eq!(query.mode, QueryMode::Normal);
    assert!(query.is_complete());
}

#[test]
fn bootstrap_mode_round_trips_as_query_type() {
    let query = PulsarQuery {
        mode: QueryMode::Bootstrap,
        ..PulsarQuery::default()
    };
    let json = serde_json::to_string(&query).expect("serialize query");
    assert_eq!(json, r#"{"queryType":"initialAppsJobsFetch"}"#);
    let round: PulsarQuery = serde_json::from_str(&json).expect("deserialize query");
    assert_eq!(round.mode, QueryMode::Bootstrap);
}

#[test]
fn regular_query_type_is_normal_mode() {
    let query: PulsarQuery =
        serde_json::from_str(r#"{"queryType":"regular"}"#).expect("deserialize query");
    assert!(query.mode.is_normal());
}

#[test]
fn unknown_aggregation_is_rejected() {
    let result = serde_json::from_str::<PulsarQuery>(r#"{"agg":"median"}"#);
    assert!(result.is_err());
    assert_eq!(
        "median".parse::<AggType>(),
        Err(ModelError::UnknownAggregation("median".to_string()))
    );
}

#[test]
fn catalog_deserializes_with_optional_jobs() {
    let json = r#"[
        {"name": "Checkout", "appid": "svc1", "jobs": [{"name": "Ping", "jobid": "job1"}]},
        {"name": "Search", "appid": "svc2"}
    ]"#;
    let catalog: Catalog = serde_json::from_str(json).expect("deserialize catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find_app("svc1").map(|app| app.jobs().len()), Some(1));
    assert_eq!(catalog.find_app("svc2").map(|app| app.jobs().len()), Some(0));
}

#[test]
fn catalog_serializes_without_empty_jobs_key() {
    let catalog = Catalog::new(vec![PulsarApp::new("svc2", "Search")]);
    let json = serde_json::to_string(&catalog).expect("serialize catalog");
    assert_eq!(json, r#"[{"name":"Search","appid":"svc2"}]"#);
}

#[test]
fn display_tables_cover_every_key() {
    let metric_labels: Vec<_> = MetricType::ALL.iter().map(MetricType::label).collect();
    assert_eq!(metric_labels, vec!["Performance", "Availability"]);
    assert_eq!(AggType::ALL.len(), 8);
    assert_eq!(AggType::ALL[0].label(), "Average");
    assert_eq!(AggType::P99.label(), "99th Percentile");
}
