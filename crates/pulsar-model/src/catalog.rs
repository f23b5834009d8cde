//! Reference catalog of applications and their jobs.
//!
//! The catalog is supplied fresh by the backend on each refresh and is
//! never mutated by the editor.

use serde::{Deserialize, Serialize};

/// A job belonging to exactly one application.
///
/// `jobid` is unique within its owning application only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulsarJob {
    pub name: String,
    pub jobid: String,
}

impl PulsarJob {
    pub fn new(jobid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            jobid: jobid.into(),
        }
    }
}

/// A monitored application and the jobs it scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulsarApp {
    pub name: String,
    pub appid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<PulsarJob>>,
}

impl PulsarApp {
    pub fn new(appid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            appid: appid.into(),
            jobs: None,
        }
    }

    /// Builder-style helper for appending a job.
    #[must_use]
    pub fn with_job(mut self, jobid: impl Into<String>, name: impl Into<String>) -> Self {
        self.jobs
            .get_or_insert_with(Vec::new)
            .push(PulsarJob::new(jobid, name));
        self
    }

    /// Jobs of this application; empty when the backend sent none.
    pub fn jobs(&self) -> &[PulsarJob] {
        self.jobs.as_deref().unwrap_or(&[])
    }

    pub fn find_job(&self, jobid: &str) -> Option<&PulsarJob> {
        self.jobs().iter().find(|job| job.jobid == jobid)
    }
}

/// Ordered list of available applications.
///
/// An empty catalog means "not yet loaded".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    apps: Vec<PulsarApp>,
}

impl Catalog {
    pub fn new(apps: Vec<PulsarApp>) -> Self {
        Self { apps }
    }

    pub fn apps(&self) -> &[PulsarApp] {
        &self.apps
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn find_app(&self, appid: &str) -> Option<&PulsarApp> {
        self.apps.iter().find(|app| app.appid == appid)
    }

    /// Looks up a job scoped to the given application.
    pub fn find_job(&self, appid: &str, jobid: &str) -> Option<&PulsarJob> {
        self.find_app(appid).and_then(|app| app.find_job(jobid))
    }

    /// Total number of jobs across all applications.
    pub fn job_count(&self) -> usize {
        self.apps.iter().map(|app| app.jobs().len()).sum()
    }
}

impl From<Vec<PulsarApp>> for Catalog {
    fn from(apps: Vec<PulsarApp>) -> Self {
        Self::new(apps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_lookup_is_scoped_to_app() {
        let catalog = Catalog::new(vec![
            PulsarApp::new("svc1", "Service One").with_job("job1", "Ingest"),
            PulsarApp::new("svc2", "Service Two").with_job("job2", "Export"),
        ]);
        assert!(catalog.find_job("svc1", "job1").is_some());
        assert!(catalog.find_job("svc1", "job2").is_none());
        assert!(catalog.find_job("svc3", "job1").is_none());
        assert_eq!(catalog.job_count(), 2);
    }

    #[test]
    fn test_app_without_jobs() {
        let app = PulsarApp::new("svc2", "Service Two");
        assert!(app.jobs().is_empty());
        assert!(app.find_job("job1").is_none());
    }
}
