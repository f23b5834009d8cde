//! Initial catalog fetch.

use pulsar_model::{PulsarQuery, QueryMode};
use tracing::{debug, info};

/// Bootstrap rule for a pass that sees an empty catalog.
///
/// On the first pass of an empty-catalog episode the query is switched to
/// [`QueryMode::Bootstrap`] so the transport reads the execution as a
/// catalog fetch. Later passes in the same episode clear a standing
/// bootstrap flag instead of re-requesting. No other field is touched.
pub fn apply(mut query: PulsarQuery, first_request: bool) -> PulsarQuery {
    if first_request {
        info!("catalog empty, requesting applications and jobs");
        query.mode = QueryMode::Bootstrap;
    } else if !query.mode.is_normal() {
        debug!("catalog fetch already pending, clearing bootstrap mode");
        query.mode = QueryMode::Normal;
    }
    query
}
