//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and ends
//! by running a synchronization pass, so every message yields exactly one
//! settled state and at most one [`Effect`].
//!
//! ```ignore
//! pub fn update(&mut self, message: EditorMessage) -> Effect {
//!     match message {
//!         EditorMessage::Catalog(msg) => CatalogHandler.handle(&mut self.state, msg),
//!         EditorMessage::Edit(edit) => EditHandler.handle(&mut self.state, edit),
//!         // ...
//!     }
//! }
//! ```

mod catalog;
mod edit;

use crate::effect::Effect;
use crate::state::EditorState;

pub use catalog::CatalogHandler;
pub use edit::EditHandler;

/// Trait for handling editor messages.
pub trait MessageHandler<M> {
    /// Handle a message, mutating state and returning the pass's effect.
    fn handle(&self, state: &mut EditorState, msg: M) -> Effect;
}
