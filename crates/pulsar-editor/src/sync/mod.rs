//! The synchronization pipeline.
//!
//! A pass is a fold of ordered pure rules over one incoming event:
//!
//! 1. [`edit::apply_edit`] writes the operator's change (if any)
//! 2. [`bootstrap::apply`] requests the catalog while it is empty
//! 3. [`reconcile::reconcile`] drops selections the catalog no longer has
//! 4. [`Trigger::evaluate`] reads the settled query and decides execution
//!
//! Steps 1-3 reach a fixed point before step 4 runs, so a pass emits one
//! coherent query and at most one execution request.

pub mod bootstrap;
pub mod edit;
pub mod reconcile;
mod trigger;

use pulsar_model::{Catalog, PulsarQuery};

use crate::effect::Effect;
use crate::message::QueryEdit;

pub use trigger::Trigger;

/// Result of one synchronization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    /// The settled query to hand back to the owner.
    pub query: PulsarQuery,
    /// Execution request for this pass.
    pub effect: Effect,
}

/// Runs one pass over `query` against `catalog`.
///
/// `trigger` carries the only cross-pass memory: the last tracked-field
/// snapshot and whether a catalog fetch is already out for the current
/// empty-catalog episode.
pub fn synchronize(
    query: PulsarQuery,
    catalog: &Catalog,
    edit: Option<QueryEdit>,
    trigger: &mut Trigger,
) -> Pass {
    let query = match edit {
        Some(edit) => edit::apply_edit(query, edit),
        None => query,
    };

    if catalog.is_empty() {
        let first_request = !trigger.fetch_requested();
        let query = bootstrap::apply(query, first_request);
        // Queries never run against a catalog that has not loaded; the only
        // execution in this state is the bootstrap fetch.
        let effect = if first_request {
            trigger.mark_fetch_requested();
            trigger.evaluate(&query)
        } else {
            Effect::None
        };
        return Pass { query, effect };
    }

    trigger.catalog_loaded();
    let query = reconcile::reconcile(query, catalog);
    let effect = trigger.evaluate(&query);
    Pass { query, effect }
}
