//! Scripted editor sessions.
//!
//! A script is a JSON document with a starting query, an optional geography
//! list, and an ordered list of events:
//!
//! ```json
//! {
//!   "query": { "appid": "svc1" },
//!   "events": [
//!     { "type": "mount" },
//!     { "type": "catalog", "apps": [{ "name": "Checkout", "appid": "svc1" }] },
//!     { "type": "edit", "field": "geo", "value": "US" }
//!   ]
//! }
//! ```

use std::fmt;

use pulsar_editor::{
    CatalogMessage, Effect, EditorMessage, EditorState, MemoryStore, OptionLabels, QueryEdit,
    QueryEditor, Session,
};
use pulsar_model::{Catalog, GeoEntry, PulsarQuery, QueryField};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// A scripted session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub query: PulsarQuery,
    /// Overrides the geography list from settings.
    #[serde(default)]
    pub geo: Option<Vec<GeoEntry>>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Mount,
    Catalog { apps: Catalog },
    Response { frame: Value },
    Edit { field: QueryField, value: Option<String> },
    Replace { query: PulsarQuery },
}

impl ScriptEvent {
    /// Converts the event into an editor message.
    ///
    /// # Errors
    ///
    /// Returns an error if an edit carries an unknown metric type or aggregation.
    pub fn to_message(&self) -> pulsar_model::Result<EditorMessage> {
        Ok(match self {
            ScriptEvent::Mount => EditorMessage::Mounted,
            ScriptEvent::Catalog { apps } => {
                EditorMessage::Catalog(CatalogMessage::Loaded(apps.clone()))
            }
            ScriptEvent::Response { frame } => {
                EditorMessage::Catalog(CatalogMessage::ResponseReceived(frame.clone()))
            }
            ScriptEvent::Edit { field, value } => {
                EditorMessage::Edit(QueryEdit::parse(*field, value.as_deref())?)
            }
            ScriptEvent::Replace { query } => EditorMessage::QueryReplaced(query.clone()),
        })
    }
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptEvent::Mount => write!(f, "mount"),
            ScriptEvent::Catalog { apps } => write!(f, "catalog ({} apps)", apps.len()),
            ScriptEvent::Response { .. } => write!(f, "response"),
            ScriptEvent::Edit { field, value } => match value.as_deref() {
                Some(value) if !value.is_empty() => write!(f, "edit {field}={value}"),
                _ => write!(f, "edit {field}=<clear>"),
            },
            ScriptEvent::Replace { .. } => write!(f, "replace"),
        }
    }
}

/// Outcome of one replayed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: String,
    pub query: PulsarQuery,
    pub effect: Effect,
}

/// Full replay result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    pub steps: Vec<Step>,
    /// Queries handed to the execution collaborator, in order.
    pub executions: Vec<PulsarQuery>,
}

impl Transcript {
    pub fn query_runs(&self) -> usize {
        self.executions.iter().filter(|q| q.mode.is_normal()).count()
    }

    pub fn catalog_fetches(&self) -> usize {
        self.executions.len() - self.query_runs()
    }
}

/// Replays a script through a fresh editor.
///
/// # Errors
///
/// Returns an error on the first event that cannot be turned into a message.
pub fn replay(
    script: &Script,
    geo: Vec<GeoEntry>,
    labels: OptionLabels,
) -> pulsar_model::Result<Transcript> {
    let geo = script.geo.clone().unwrap_or(geo);
    let state = EditorState::new(script.query.clone())
        .with_geo(geo)
        .with_labels(labels);

    let mut executions = Vec::new();
    let mut steps = Vec::with_capacity(script.events.len());
    {
        let trigger = |query: &PulsarQuery| {
            info!(mode = %query.mode, "execution dispatched");
            executions.push(query.clone());
        };
        let mut session = Session::new(QueryEditor::with_state(state), trigger, MemoryStore::new());
        for (index, event) in script.events.iter().enumerate() {
            let effect = session.dispatch(event.to_message()?);
            steps.push(Step {
                index: index + 1,
                event: event.to_string(),
                query: session.editor().query().clone(),
                effect,
            });
        }
    }

    Ok(Transcript { steps, executions })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let edit = ScriptEvent::Edit {
            field: QueryField::Geo,
            value: None,
        };
        assert_eq!(edit.to_string(), "edit geo=<clear>");
        let edit = ScriptEvent::Edit {
            field: QueryField::App,
            value: Some("svc1".to_string()),
        };
        assert_eq!(edit.to_string(), "edit appid=svc1");
    }

    #[test]
    fn test_unknown_aggregation_fails() {
        let event = ScriptEvent::Edit {
            field: QueryField::Agg,
            value: Some("median".to_string()),
        };
        assert!(event.to_message().is_err());
    }
}
