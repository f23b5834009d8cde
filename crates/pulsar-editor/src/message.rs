//! Message types for the query editor.
//!
//! Catalog refreshes and operator edits are distinct messages that feed the
//! same synchronization pipeline.

use pulsar_model::{AggType, Catalog, MetricType, PulsarQuery, QueryField};

/// Root message enum for one query panel.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMessage {
    /// The panel was configured; evaluate once with the current inputs.
    Mounted,

    /// Reference data changed.
    Catalog(CatalogMessage),

    /// The operator edited a single field.
    Edit(QueryEdit),

    /// The owner replaced the whole query (e.g. a saved dashboard was loaded).
    QueryReplaced(PulsarQuery),

    /// No operation.
    Noop,
}

/// Catalog-changed events.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogMessage {
    /// A decoded catalog arrived.
    Loaded(Catalog),

    /// A raw backend response frame arrived; the catalog is extracted from it.
    ResponseReceived(serde_json::Value),
}

/// A single-field edit. `None` clears the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEdit {
    App(Option<String>),
    Job(Option<String>),
    MetricType(Option<MetricType>),
    Agg(Option<AggType>),
    Geo(Option<String>),
    Asn(Option<String>),
}

impl QueryEdit {
    /// The field this edit targets.
    pub fn field(&self) -> QueryField {
        match self {
            QueryEdit::App(_) => QueryField::App,
            QueryEdit::Job(_) => QueryField::Job,
            QueryEdit::MetricType(_) => QueryField::MetricType,
            QueryEdit::Agg(_) => QueryField::Agg,
            QueryEdit::Geo(_) => QueryField::Geo,
            QueryEdit::Asn(_) => QueryField::Asn,
        }
    }

    /// True if the edit clears its field.
    pub fn is_clear(&self) -> bool {
        match self {
            QueryEdit::App(v) | QueryEdit::Job(v) | QueryEdit::Geo(v) | QueryEdit::Asn(v) => {
                v.is_none()
            }
            QueryEdit::MetricType(v) => v.is_none(),
            QueryEdit::Agg(v) => v.is_none(),
        }
    }

    /// Builds an edit from a raw selector value.
    ///
    /// An empty string clears the field, same as `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric type or aggregation value is not a known key.
    pub fn parse(field: QueryField, value: Option<&str>) -> pulsar_model::Result<Self> {
        let value = value.filter(|v| !v.is_empty());
        let text = || value.map(str::to_string);
        Ok(match field {
            QueryField::App => QueryEdit::App(text()),
            QueryField::Job => QueryEdit::Job(text()),
            QueryField::MetricType => QueryEdit::MetricType(value.map(str::parse).transpose()?),
            QueryField::Agg => QueryEdit::Agg(value.map(str::parse).transpose()?),
            QueryField::Geo => QueryEdit::Geo(text()),
            QueryField::Asn => QueryEdit::Asn(text()),
        })
    }
}

impl From<QueryEdit> for EditorMessage {
    fn from(edit: QueryEdit) -> Self {
        EditorMessage::Edit(edit)
    }
}

impl From<Catalog> for EditorMessage {
    fn from(catalog: Catalog) -> Self {
        EditorMessage::Catalog(CatalogMessage::Loaded(catalog))
    }
}
