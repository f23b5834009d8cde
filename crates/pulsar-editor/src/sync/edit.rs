//! Single-field edits from the operator.

use pulsar_model::PulsarQuery;
use tracing::debug;

use crate::message::QueryEdit;

/// Field-edit rule.
///
/// Writes the new value, then applies the two cross-field effects:
/// changing the application clears the job, and clearing geo clears ASN.
/// Re-selecting the current application keeps the job, so a redundant
/// change notification cannot wipe a valid selection. ASN input is disabled
/// until a geography is chosen, so setting ASN without geo is ignored.
pub fn apply_edit(mut query: PulsarQuery, edit: QueryEdit) -> PulsarQuery {
    match edit {
        QueryEdit::App(appid) => {
            if appid != query.appid {
                if query.jobid.take().is_some() {
                    debug!(from = ?query.appid, to = ?appid, "application changed, jobid cleared");
                }
                query.appid = appid;
            }
        }
        QueryEdit::Job(jobid) => query.jobid = jobid,
        QueryEdit::MetricType(metric_type) => query.metric_type = metric_type,
        QueryEdit::Agg(agg) => query.agg = agg,
        QueryEdit::Geo(geo) => {
            if geo.is_none() && query.asn.take().is_some() {
                debug!("geo cleared, asn cleared");
            }
            query.geo = geo;
        }
        QueryEdit::Asn(asn) => {
            if asn.is_some() && query.geo.is_none() {
                debug!("asn edit ignored: no geo selected");
            } else {
                query.asn = asn;
            }
        }
    }
    query
}
