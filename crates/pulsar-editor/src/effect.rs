//! Side effects requested by a synchronization pass.

use pulsar_model::QueryMode;
use serde::Serialize;

/// What the execution collaborator should do after a pass.
///
/// A pass yields exactly one of these; execution requests are
/// fire-and-forget and never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Effect {
    /// Nothing to execute.
    #[default]
    None,
    /// Execute in bootstrap mode: load applications and jobs.
    FetchCatalog,
    /// Execute the metrics query with the current selection.
    RunQuery,
}

impl Effect {
    /// True if the pass requested any execution.
    pub fn is_execute(&self) -> bool {
        !matches!(self, Effect::None)
    }

    /// The mode the transport should read the request in.
    pub fn mode(&self) -> Option<QueryMode> {
        match self {
            Effect::None => None,
            Effect::FetchCatalog => Some(QueryMode::Bootstrap),
            Effect::RunQuery => Some(QueryMode::Normal),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::None => "none",
            Effect::FetchCatalog => "fetch-catalog",
            Effect::RunQuery => "run-query",
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
