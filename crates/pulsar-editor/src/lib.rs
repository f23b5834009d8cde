//! Query-state synchronizer for the Pulsar query editor.
//!
//! The editor follows the Elm pattern: every operator edit or catalog refresh
//! arrives as an [`EditorMessage`], a handler folds it into [`EditorState`]
//! through the ordered rules in [`sync`], and the pass yields at most one
//! [`Effect`] for the execution collaborator.
//!
//! ```ignore
//! let mut editor = QueryEditor::new(PulsarQuery::default());
//! assert_eq!(editor.update(EditorMessage::Mounted), Effect::FetchCatalog);
//! ```

pub mod catalog;
pub mod editor;
pub mod effect;
pub mod handler;
pub mod message;
pub mod options;
pub mod session;
pub mod state;
pub mod sync;

pub use catalog::catalog_from_response;
pub use editor::QueryEditor;
pub use effect::Effect;
pub use message::{CatalogMessage, EditorMessage, QueryEdit};
pub use options::{AsnField, OptionLabels, SelectOption};
pub use session::{ExecutionTrigger, MemoryStore, QueryStore, Session};
pub use state::EditorState;
pub use sync::{Pass, Trigger, synchronize};
