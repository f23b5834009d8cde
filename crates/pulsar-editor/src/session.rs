//! Wiring between the editor and its external collaborators.
//!
//! The [`ExecutionTrigger`] performs the request a pass asks for; the
//! [`QueryStore`] receives every settled query as a full-state overwrite.

use pulsar_model::PulsarQuery;
use tracing::debug;

use crate::editor::QueryEditor;
use crate::effect::Effect;
use crate::message::EditorMessage;

/// Side-effecting execution collaborator.
///
/// The query's mode tells the transport what the request means:
/// bootstrap fetches the catalog, normal runs the metrics query.
pub trait ExecutionTrigger {
    fn execute(&mut self, query: &PulsarQuery);
}

impl<F> ExecutionTrigger for F
where
    F: FnMut(&PulsarQuery),
{
    fn execute(&mut self, query: &PulsarQuery) {
        (*self)(query)
    }
}

/// External owner of the persisted query.
pub trait QueryStore {
    fn save(&mut self, query: &PulsarQuery);
}

/// In-memory store that keeps every emitted query.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    history: Vec<PulsarQuery>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[PulsarQuery] {
        &self.history
    }

    pub fn latest(&self) -> Option<&PulsarQuery> {
        self.history.last()
    }
}

impl QueryStore for MemoryStore {
    fn save(&mut self, query: &PulsarQuery) {
        self.history.push(query.clone());
    }
}

/// An editor bound to its collaborators.
pub struct Session<T, S> {
    editor: QueryEditor,
    trigger: T,
    store: S,
}

impl<T, S> Session<T, S>
where
    T: ExecutionTrigger,
    S: QueryStore,
{
    pub fn new(editor: QueryEditor, trigger: T, store: S) -> Self {
        Self {
            editor,
            trigger,
            store,
        }
    }

    /// Runs one message through the editor, publishes the settled query,
    /// then fires the requested execution.
    pub fn dispatch(&mut self, message: EditorMessage) -> Effect {
        let effect = self.editor.update(message);
        let query = self.editor.query();
        self.store.save(query);
        if let Some(mode) = effect.mode() {
            debug!(%mode, %effect, "execution requested");
            self.trigger.execute(query);
        }
        effect
    }

    pub fn editor(&self) -> &QueryEditor {
        &self.editor
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (QueryEditor, T, S) {
        (self.editor, self.trigger, self.store)
    }
}
