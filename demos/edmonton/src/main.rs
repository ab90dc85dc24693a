//! edmonton — evaluate one repositioning policy on the Edmonton fixture.
//!
//! ```text
//! edmonton [run.json]
//! ```
//!
//! Without arguments the reference setup is used: 16 ambulances, 17
//! stations, three replications of 35 synthetic days.  A run file may
//! override any field of [`RunFile`]; missing fields keep their defaults.
//!
//! ```json
//! { "policy": [6, 13, 1, 10], "threshold": 4,
//!   "config": { "seed": 7, "iterations": 10 },
//!   "replications_csv": "output/replications.csv" }
//! ```
//!
//! The averaged metrics are printed to stdout as JSON.  Set `RUST_LOG=debug`
//! for per-replication summaries.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use ems_core::{AmbulanceId, SimConfig, SimTime, StationId};
use ems_events::CallEvent;
use ems_metrics::{MetricsCsvWriter, PolicyRequest, aggregate, evaluate_replications, run_replication};
use ems_policy::Response;
use ems_scenario::{CallSource, EdmontonArea, RecordedCalls, SyntheticCalls};
use ems_sim::RunObserver;

// ── Run file ──────────────────────────────────────────────────────────────────

const REFERENCE_POLICY: [u32; 17] = [6, 13, 1, 10, 16, 3, 9, 12, 15, 2, 5, 8, 11, 14, 17, 4, 7];

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunFile {
    policy:           Vec<u32>,
    threshold:        usize,
    ambulances:       usize,
    stations:         usize,
    config:           SimConfig,
    synthetic:        SyntheticCalls,
    /// Replay these calls instead of generating synthetic ones.
    calls_csv:        Option<PathBuf>,
    /// Write per-replication metrics here.
    replications_csv: Option<PathBuf>,
}

impl Default for RunFile {
    fn default() -> Self {
        Self {
            policy:           REFERENCE_POLICY.to_vec(),
            threshold:        4,
            ambulances:       EdmontonArea::MAX_AMBULANCES,
            stations:         EdmontonArea::MAX_STATIONS,
            config:           SimConfig::default(),
            synthetic:        SyntheticCalls::default(),
            calls_csv:        None,
            replications_csv: None,
        }
    }
}

fn load_run_file() -> Result<RunFile> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(RunFile::default());
    };
    let file = File::open(&path).with_context(|| format!("opening run file {path}"))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing run file {path}"))
}

// ── Daily load observer ───────────────────────────────────────────────────────

/// Per-day dispatch, loss and reposition counts for one replication.
#[derive(Default)]
struct DailyLoad {
    days: Vec<[u64; 3]>,
}

impl DailyLoad {
    fn day(&mut self, t: SimTime) -> &mut [u64; 3] {
        let d = t.day_index() as usize;
        if self.days.len() <= d {
            self.days.resize(d + 1, [0; 3]);
        }
        &mut self.days[d]
    }
}

impl RunObserver for DailyLoad {
    fn on_dispatch(&mut self, call: &CallEvent, _response: &Response, _measured: bool) {
        self.day(call.time)[0] += 1;
    }

    fn on_call_lost(&mut self, call: &CallEvent, _measured: bool) {
        self.day(call.time)[1] += 1;
    }

    fn on_reposition(&mut self, at: SimTime, _ambulance: AmbulanceId, _station: StationId) {
        self.day(at)[2] += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let run = load_run_file()?;
    let request = PolicyRequest {
        policy:     run.policy.clone(),
        threshold:  run.threshold,
        ambulances: run.ambulances,
        stations:   run.stations,
    };

    let calls: Box<dyn CallSource> = match &run.calls_csv {
        Some(path) => {
            let recorded = RecordedCalls::from_csv(path)
                .with_context(|| format!("loading calls from {}", path.display()))?;
            tracing::info!(calls = recorded.len(), path = %path.display(), "replaying recorded calls");
            Box::new(recorded)
        }
        None => Box::new(run.synthetic.clone()),
    };

    // 1. Evaluate.
    let t0 = Instant::now();
    let replications = evaluate_replications(&request, &EdmontonArea, calls.as_ref(), &run.config)?;
    let metrics = aggregate(&replications);
    tracing::info!(
        replications = replications.len(),
        elapsed_s = t0.elapsed().as_secs_f64(),
        "evaluation complete",
    );

    if let Some(path) = &run.replications_csv {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let mut writer = MetricsCsvWriter::new(path)?;
        writer.write_all(&replications)?;
        writer.finish()?;
        tracing::info!(path = %path.display(), "wrote replication metrics");
    }

    // 2. Replay replication 0 with a daily-load observer for the log.
    if tracing::enabled!(tracing::Level::DEBUG) {
        let mut load = DailyLoad::default();
        run_replication(0, &request, &EdmontonArea, calls.as_ref(), &run.config, &mut load)?;
        for (day, [dispatched, lost, moved]) in load.days.iter().enumerate() {
            tracing::debug!(day, dispatched, lost, repositions = moved, "daily load");
        }
    }

    // 3. Report.
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
