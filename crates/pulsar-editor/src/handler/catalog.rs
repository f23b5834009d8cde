//! Catalog-changed message handler.

use tracing::info;

use super::MessageHandler;
use crate::catalog::catalog_from_response;
use crate::effect::Effect;
use crate::message::CatalogMessage;
use crate::state::EditorState;

/// Handler for reference-data refreshes.
pub struct CatalogHandler;

impl MessageHandler<CatalogMessage> for CatalogHandler {
    fn handle(&self, state: &mut EditorState, msg: CatalogMessage) -> Effect {
        let catalog = match msg {
            CatalogMessage::Loaded(catalog) => catalog,
            CatalogMessage::ResponseReceived(response) => catalog_from_response(&response),
        };
        info!(
            apps = catalog.len(),
            jobs = catalog.job_count(),
            "catalog refreshed"
        );
        state.catalog = catalog;
        state.synchronize(None)
    }
}
