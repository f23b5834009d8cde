use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pulsar_editor::{Effect, EditorState, QueryEditor, catalog_from_response, options};
use pulsar_model::{Catalog, PulsarQuery};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::cli::{OptionsArgs, ReconcileArgs, ReplayArgs};
use crate::summary::{print_options, print_reconcile, print_transcript};
use pulsar_cli::script::{Script, replay};
use pulsar_cli::settings::{OutputFormat, Settings};

pub fn run_replay(args: &ReplayArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let script: Script = read_json(&args.script)?;
    info!(
        events = script.events.len(),
        path = %args.script.display(),
        "replaying script"
    );
    let transcript = replay(&script, settings.geo_list(), settings.labels())
        .with_context(|| format!("invalid event in {}", args.script.display()))?;
    match format {
        OutputFormat::Table => print_transcript(&transcript),
        OutputFormat::Json => {
            for step in &transcript.steps {
                println!("{}", serde_json::to_string(step)?);
            }
        }
    }
    Ok(())
}

/// Selectable options for one catalog.
#[derive(Debug, Serialize)]
pub struct OptionsReport {
    pub apps: Vec<options::SelectOption>,
    pub jobs: Vec<options::SelectOption>,
    pub metrics: Vec<options::SelectOption>,
    pub aggregations: Vec<options::SelectOption>,
    pub geo: Vec<options::SelectOption>,
}

pub fn run_options(args: &OptionsArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let catalog = read_catalog(&args.catalog)?;
    let labels = settings.labels();
    if let Some(appid) = args.app.as_deref()
        && catalog.find_app(appid).is_none()
    {
        warn!(appid, "application not in catalog, no jobs listed");
    }
    let report = OptionsReport {
        apps: options::app_options(&catalog, labels),
        jobs: options::job_options(&catalog, args.app.as_deref(), labels),
        metrics: options::metric_options(),
        aggregations: options::agg_options(),
        geo: options::geo_options(&settings.geo_list()),
    };
    match format {
        OutputFormat::Table => print_options(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Result of a single reconciliation pass.
#[derive(Debug, Serialize)]
pub struct ReconcileReport {
    pub before: PulsarQuery,
    pub after: PulsarQuery,
    pub effect: Effect,
}

pub fn run_reconcile(
    args: &ReconcileArgs,
    settings: &Settings,
    format: OutputFormat,
) -> Result<()> {
    let before: PulsarQuery = read_json(&args.query)?;
    let catalog = read_catalog(&args.catalog)?;
    let state = EditorState::new(before.clone())
        .with_geo(settings.geo_list())
        .with_labels(settings.labels());
    let mut editor = QueryEditor::with_state(state);
    let effect = editor.update(catalog.into());
    let report = ReconcileReport {
        before,
        after: editor.query().clone(),
        effect,
    };
    match format {
        OutputFormat::Table => print_reconcile(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_catalog(path: &Path) -> Result<Catalog> {
    let response: Value = read_json(path)?;
    let catalog = catalog_from_response(&response);
    if catalog.is_empty() {
        warn!(path = %path.display(), "catalog is empty or malformed");
    }
    Ok(catalog)
}
