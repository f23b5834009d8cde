//! The query editor: dispatches messages to handlers.

use pulsar_model::{Catalog, PulsarQuery};
use tracing::debug;

use crate::effect::Effect;
use crate::handler::{CatalogHandler, EditHandler, MessageHandler};
use crate::message::EditorMessage;
use crate::state::EditorState;

/// One query panel.
///
/// All state changes happen in [`QueryEditor::update`]; everything else is
/// read-only.
#[derive(Debug, Clone, Default)]
pub struct QueryEditor {
    pub state: EditorState,
}

impl QueryEditor {
    pub fn new(query: PulsarQuery) -> Self {
        Self {
            state: EditorState::new(query),
        }
    }

    pub fn with_state(state: EditorState) -> Self {
        Self { state }
    }

    /// Update editor state in response to a message.
    pub fn update(&mut self, message: EditorMessage) -> Effect {
        let effect = match message {
            EditorMessage::Mounted => self.state.synchronize(None),

            EditorMessage::Catalog(catalog_msg) => {
                CatalogHandler.handle(&mut self.state, catalog_msg)
            }

            EditorMessage::Edit(edit) => EditHandler.handle(&mut self.state, edit),

            EditorMessage::QueryReplaced(query) => {
                self.state.replace_query(query);
                self.state.synchronize(None)
            }

            EditorMessage::Noop => Effect::None,
        };
        if effect.is_execute() {
            debug!(%effect, "execution requested");
        }
        effect
    }

    pub fn query(&self) -> &PulsarQuery {
        &self.state.query
    }

    pub fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }
}
