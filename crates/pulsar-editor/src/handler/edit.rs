//! Operator edit handler.

use tracing::debug;

use super::MessageHandler;
use crate::effect::Effect;
use crate::message::QueryEdit;
use crate::state::EditorState;

/// Handler for single-field edits.
pub struct EditHandler;

impl MessageHandler<QueryEdit> for EditHandler {
    fn handle(&self, state: &mut EditorState, edit: QueryEdit) -> Effect {
        debug!(field = %edit.field(), clear = edit.is_clear(), "field edited");
        state.synchronize(Some(edit))
    }
}
