//! Panel-owned editor state.

use pulsar_model::{Catalog, GeoEntry, PulsarQuery, default_geo_list};

use crate::effect::Effect;
use crate::message::QueryEdit;
use crate::options::{self, AsnField, OptionLabels, SelectOption};
use crate::sync::{self, Pass, Trigger};

/// Everything one query panel owns.
///
/// Exclusively owned by its panel and never shared between passes running
/// at the same time.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The current query selection.
    pub query: PulsarQuery,
    /// The latest reference catalog (empty until loaded).
    pub catalog: Catalog,
    /// Static geography list.
    pub geo: Vec<GeoEntry>,
    /// Label formatting for app/job options.
    pub labels: OptionLabels,
    trigger: Trigger,
}

impl EditorState {
    pub fn new(query: PulsarQuery) -> Self {
        Self {
            query,
            catalog: Catalog::default(),
            geo: default_geo_list(),
            labels: OptionLabels::default(),
            trigger: Trigger::new(),
        }
    }

    #[must_use]
    pub fn with_geo(mut self, geo: Vec<GeoEntry>) -> Self {
        self.geo = geo;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: OptionLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Runs one synchronization pass and stores the settled query.
    pub fn synchronize(&mut self, edit: Option<QueryEdit>) -> Effect {
        let query = std::mem::take(&mut self.query);
        let Pass { query, effect } =
            sync::synchronize(query, &self.catalog, edit, &mut self.trigger);
        self.query = query;
        effect
    }

    /// Replaces the query wholesale; the next pass treats it as new.
    pub fn replace_query(&mut self, query: PulsarQuery) {
        self.query = query;
        self.trigger.reset();
    }

    // =========================================================================
    // Selectable options
    // =========================================================================

    pub fn app_options(&self) -> Vec<SelectOption> {
        options::app_options(&self.catalog, self.labels)
    }

    pub fn job_options(&self) -> Vec<SelectOption> {
        options::job_options(&self.catalog, self.query.appid.as_deref(), self.labels)
    }

    pub fn geo_options(&self) -> Vec<SelectOption> {
        options::geo_options(&self.geo)
    }

    pub fn asn_field(&self) -> AsnField {
        AsnField::for_query(&self.query)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(PulsarQuery::default())
    }
}
