//! End-to-end editor scenarios.

use pulsar_editor::{
    CatalogMessage, Effect, EditorMessage, MemoryStore, QueryEdit, QueryEditor, Session,
};
use pulsar_model::{AggType, Catalog, MetricType, PulsarApp, PulsarQuery, QueryMode};
use serde_json::json;

fn catalog() -> Catalog {
    Catalog::new(vec![
        PulsarApp::new("svc1", "Checkout").with_job("job1", "Ping"),
        PulsarApp::new("svc2", "Search"),
    ])
}

fn complete_query() -> PulsarQuery {
    PulsarQuery {
        appid: Some("svc1".to_string()),
        jobid: Some("job1".to_string()),
        metric_type: Some(MetricType::Performance),
        agg: Some(AggType::Avg),
        ..PulsarQuery::default()
    }
}

fn loaded_editor(query: PulsarQuery) -> (QueryEditor, Effect) {
    let mut editor = QueryEditor::new(query);
    let effect = editor.update(catalog().into());
    (editor, effect)
}

#[test]
fn empty_catalog_bootstraps_then_settles() {
    let mut editor = QueryEditor::new(PulsarQuery::default());

    assert_eq!(editor.update(EditorMessage::Mounted), Effect::FetchCatalog);
    assert_eq!(editor.query().mode, QueryMode::Bootstrap);

    let single = Catalog::new(vec![PulsarApp::new("svc1", "Checkout").with_job("job1", "Ping")]);
    assert_eq!(editor.update(single.into()), Effect::None);
    assert_eq!(editor.query().mode, QueryMode::Normal);
    assert_eq!(editor.query(), &PulsarQuery::default());
}

#[test]
fn bootstrap_fires_once_per_empty_episode() {
    let mut editor = QueryEditor::new(PulsarQuery::default());
    assert_eq!(editor.update(EditorMessage::Mounted), Effect::FetchCatalog);
    assert_eq!(editor.update(EditorMessage::Mounted), Effect::None);
    assert_eq!(editor.query().mode, QueryMode::Normal);

    // Catalog arrives, then is emptied again: a new episode fetches again.
    editor.update(catalog().into());
    assert_eq!(
        editor.update(Catalog::default().into()),
        Effect::FetchCatalog
    );
}

#[test]
fn bootstrap_leaves_selection_untouched() {
    let mut editor = QueryEditor::new(complete_query());
    assert_eq!(editor.update(EditorMessage::Mounted), Effect::FetchCatalog);
    let expected = PulsarQuery {
        mode: QueryMode::Bootstrap,
        ..complete_query()
    };
    assert_eq!(editor.query(), &expected);
}

#[test]
fn stored_complete_query_runs_once_catalog_arrives() {
    let mut editor = QueryEditor::new(complete_query());
    assert_eq!(editor.update(EditorMessage::Mounted), Effect::FetchCatalog);
    assert_eq!(editor.update(catalog().into()), Effect::RunQuery);
    assert_eq!(editor.query(), &complete_query());
}

#[test]
fn stale_app_is_cleared_without_execution() {
    let query = PulsarQuery {
        appid: Some("svc9".to_string()),
        ..PulsarQuery::default()
    };
    let (editor, effect) = loaded_editor(query);
    assert_eq!(effect, Effect::None);
    assert!(editor.query().appid.is_none());
    assert!(editor.query().jobid.is_none());
}

#[test]
fn complete_query_executes_once() {
    let (mut editor, effect) = loaded_editor(complete_query());
    assert_eq!(effect, Effect::RunQuery);
    assert_eq!(editor.update(EditorMessage::Mounted), Effect::None);
    assert_eq!(editor.update(catalog().into()), Effect::None);
    assert_eq!(editor.update(EditorMessage::Noop), Effect::None);
}

#[test]
fn refinement_changes_rerun_query() {
    let (mut editor, _) = loaded_editor(complete_query());

    let effect = editor.update(QueryEdit::Geo(Some("US".to_string())).into());
    assert_eq!(effect, Effect::RunQuery);

    let effect = editor.update(QueryEdit::Asn(Some("12345".to_string())).into());
    assert_eq!(effect, Effect::RunQuery);

    let effect = editor.update(QueryEdit::Geo(None).into());
    assert_eq!(effect, Effect::RunQuery);
    assert!(editor.query().geo.is_none());
    assert!(editor.query().asn.is_none());
}

#[test]
fn app_change_clears_job_until_new_job_chosen() {
    let (mut editor, _) = loaded_editor(complete_query());

    let effect = editor.update(QueryEdit::App(Some("svc2".to_string())).into());
    assert_eq!(effect, Effect::None);
    assert_eq!(editor.query().appid.as_deref(), Some("svc2"));
    assert!(editor.query().jobid.is_none());

    // svc2 gains a job in the next refresh; choosing it completes the query.
    let refreshed = Catalog::new(vec![
        PulsarApp::new("svc1", "Checkout").with_job("job1", "Ping"),
        PulsarApp::new("svc2", "Search").with_job("job9", "Crawl"),
    ]);
    assert_eq!(editor.update(refreshed.into()), Effect::None);
    let effect = editor.update(QueryEdit::Job(Some("job9".to_string())).into());
    assert_eq!(effect, Effect::RunQuery);
}

#[test]
fn app_reselection_is_a_no_op() {
    let (mut editor, _) = loaded_editor(complete_query());
    let effect = editor.update(QueryEdit::App(Some("svc1".to_string())).into());
    assert_eq!(effect, Effect::None);
    assert_eq!(editor.query(), &complete_query());
}

#[test]
fn job_removed_from_catalog_is_cleared() {
    let (mut editor, _) = loaded_editor(complete_query());
    let shrunk = Catalog::new(vec![PulsarApp::new("svc1", "Checkout")]);
    assert_eq!(editor.update(shrunk.into()), Effect::None);
    assert_eq!(editor.query().appid.as_deref(), Some("svc1"));
    assert!(editor.query().jobid.is_none());
    assert_eq!(editor.query().agg, Some(AggType::Avg));
}

#[test]
fn response_frame_feeds_catalog() {
    let mut editor = QueryEditor::new(complete_query());
    editor.update(EditorMessage::Mounted);
    let frame = json!({
        "series": [{
            "meta": {
                "custom": [
                    {"name": "Checkout", "appid": "svc1", "jobs": [{"name": "Ping", "jobid": "job1"}]}
                ]
            }
        }]
    });
    let effect = editor.update(EditorMessage::Catalog(CatalogMessage::ResponseReceived(frame)));
    assert_eq!(effect, Effect::RunQuery);
    assert_eq!(editor.catalog().len(), 1);
}

#[test]
fn malformed_response_bootstraps() {
    let mut editor = QueryEditor::new(PulsarQuery::default());
    let effect = editor.update(EditorMessage::Catalog(CatalogMessage::ResponseReceived(
        json!({"series": [{"meta": {"custom": "oops"}}]}),
    )));
    assert_eq!(effect, Effect::FetchCatalog);
}

#[test]
fn replaced_query_runs_even_if_identical() {
    let (mut editor, _) = loaded_editor(complete_query());
    let effect = editor.update(EditorMessage::QueryReplaced(complete_query()));
    assert_eq!(effect, Effect::RunQuery);
}

#[test]
fn session_publishes_every_state_and_fires_trigger() {
    let mut executed: Vec<PulsarQuery> = Vec::new();
    {
        let trigger = |query: &PulsarQuery| executed.push(query.clone());
        let mut session = Session::new(
            QueryEditor::new(PulsarQuery::default()),
            trigger,
            MemoryStore::new(),
        );

        session.dispatch(EditorMessage::Mounted);
        session.dispatch(catalog().into());
        session.dispatch(QueryEdit::App(Some("svc1".to_string())).into());
        session.dispatch(QueryEdit::Job(Some("job1".to_string())).into());
        session.dispatch(QueryEdit::MetricType(Some(MetricType::Availability)).into());
        let effect = session.dispatch(QueryEdit::Agg(Some(AggType::P99)).into());
        assert_eq!(effect, Effect::RunQuery);

        let (_, _, store) = session.into_parts();
        assert_eq!(store.history().len(), 6);
        assert_eq!(store.history()[0].mode, QueryMode::Bootstrap);
        assert_eq!(store.latest().map(PulsarQuery::is_complete), Some(true));
    }
    assert_eq!(executed.len(), 2);
    assert_eq!(executed[0].mode, QueryMode::Bootstrap);
    assert_eq!(executed[1].agg, Some(AggType::P99));
}

#[test]
fn options_follow_selection() {
    let (mut editor, _) = loaded_editor(PulsarQuery::default());
    assert_eq!(editor.state.app_options().len(), 2);
    assert!(editor.state.job_options().is_empty());
    assert!(!editor.state.asn_field().enabled);

    editor.update(QueryEdit::App(Some("svc1".to_string())).into());
    assert_eq!(editor.state.job_options()[0].label, "Ping (job1)");

    editor.update(QueryEdit::Geo(Some("DE".to_string())).into());
    assert!(editor.state.asn_field().enabled);
    assert!(!editor.state.geo_options().is_empty());
}

#[test]
fn executed_query_carries_requested_mode() {
    let mut executed: Vec<PulsarQuery> = Vec::new();
    let mut effects = Vec::new();
    {
        let trigger = |query: &PulsarQuery| executed.push(query.clone());
        let mut session = Session::new(
            QueryEditor::new(complete_query()),
            trigger,
            MemoryStore::new(),
        );
        effects.push(session.dispatch(EditorMessage::Mounted));
        effects.push(session.dispatch(catalog().into()));
        effects.push(session.dispatch(EditorMessage::Noop));
    }
    assert_eq!(
        effects,
        vec![Effect::FetchCatalog, Effect::RunQuery, Effect::None]
    );
    let modes: Vec<QueryMode> = executed.iter().map(|query| query.mode).collect();
    let requested: Vec<QueryMode> = effects.iter().filter_map(Effect::mode).collect();
    assert_eq!(modes, requested);
}

#[test]
fn refinement_during_fetch_runs_once_catalog_arrives() {
    let mut editor = QueryEditor::new(complete_query());
    assert_eq!(editor.update(EditorMessage::Mounted), Effect::FetchCatalog);

    // Catalog still pending: the change is held, selection kept.
    let effect = editor.update(QueryEdit::Geo(Some("US".to_string())).into());
    assert_eq!(effect, Effect::None);
    assert_eq!(editor.query().appid.as_deref(), Some("svc1"));
    assert_eq!(editor.query().jobid.as_deref(), Some("job1"));
    assert_eq!(editor.query().geo.as_deref(), Some("US"));

    let effect = editor.update(QueryEdit::Asn(Some("12345".to_string())).into());
    assert_eq!(effect, Effect::None);

    assert_eq!(editor.update(catalog().into()), Effect::RunQuery);
    assert_eq!(editor.query().mode, QueryMode::Normal);
    assert_eq!(editor.query().asn.as_deref(), Some("12345"));
}
