use pulsar_model::{PulsarQuery, QueryMode, TrackedFields};
use tracing::debug;

use crate::effect::Effect;

/// Execution-trigger memory carried between passes.
///
/// The trigger is edge-sensitive: a normal-mode pass only requests a query
/// when one of the six tracked fields differs from the last snapshot, and
/// only if the query is complete at that moment.
#[derive(Debug, Clone, Default)]
pub struct Trigger {
    last_seen: Option<TrackedFields>,
    fetch_requested: bool,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decides the effect of a settled query.
    pub fn evaluate(&mut self, query: &PulsarQuery) -> Effect {
        match query.mode {
            QueryMode::Bootstrap => Effect::FetchCatalog,
            QueryMode::Normal => {
                let tracked = query.tracked();
                if self.last_seen.as_ref() == Some(&tracked) {
                    return Effect::None;
                }
                self.last_seen = Some(tracked);
                if query.is_complete() {
                    debug!(appid = ?query.appid, jobid = ?query.jobid, "query complete, requesting run");
                    Effect::RunQuery
                } else {
                    debug!(missing = ?query.missing_fields(), "query incomplete, not running");
                    Effect::None
                }
            }
        }
    }

    /// Last tracked snapshot seen by a normal-mode pass.
    pub fn last_seen(&self) -> Option<&TrackedFields> {
        self.last_seen.as_ref()
    }

    /// True while a catalog fetch is out for the current empty-catalog episode.
    pub fn fetch_requested(&self) -> bool {
        self.fetch_requested
    }

    pub(crate) fn mark_fetch_requested(&mut self) {
        self.fetch_requested = true;
    }

    /// Ends an empty-catalog episode.
    pub(crate) fn catalog_loaded(&mut self) {
        self.fetch_requested = false;
    }

    /// Forgets the last snapshot so the next normal pass counts as a change.
    pub fn reset(&mut self) {
        self.last_seen = None;
    }
}
