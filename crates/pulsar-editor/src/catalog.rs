//! Catalog extraction from backend response frames.
//!
//! The bootstrap fetch returns the application list in the custom metadata
//! of the first frame: `series[0].meta.custom`.

use pulsar_model::Catalog;
use serde_json::Value;
use tracing::debug;

const CUSTOM_META_POINTER: &str = "/series/0/meta/custom";

/// Extracts the catalog from a response frame or a bare application array.
///
/// Anything malformed yields an empty catalog, which the synchronizer
/// treats as "not yet loaded".
pub fn catalog_from_response(response: &Value) -> Catalog {
    let apps = match response {
        Value::Array(_) => response,
        _ => match response.pointer(CUSTOM_META_POINTER) {
            Some(apps) => apps,
            None => {
                debug!("response carries no catalog metadata");
                return Catalog::default();
            }
        },
    };

    if !apps.is_array() {
        debug!("catalog metadata is not an array");
        return Catalog::default();
    }

    serde_json::from_value::<Catalog>(apps.clone()).unwrap_or_else(|error| {
        debug!(%error, "malformed catalog metadata treated as empty");
        Catalog::default()
    })
}
