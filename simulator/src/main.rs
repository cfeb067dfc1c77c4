use anyhow::Context;
use clap::Parser;
use fmcwcore::prelude::RadarConfig;
use generator::profile::build_capture;
use log::info;
use std::fs;
use std::path::PathBuf;
use workflow::config::{load_device_config, WorkflowConfig};
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline FMCW interferometry workflow driver")]
struct Args {
    /// Device configuration JSON (capture tooling layout)
    #[arg(long)]
    device_config: Option<PathBuf>,
    /// Workflow config YAML (sequencer knobs, scenario, workers)
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Override the scenario's frame count
    #[arg(long)]
    frames: Option<usize>,
    /// Override the worker count
    #[arg(long)]
    workers: Option<usize>,
    /// Write the output series as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

fn default_radar_config() -> RadarConfig {
    RadarConfig {
        sample_rate_hz: 1_000_000.0,
        start_frequency_hz: 58.5e9,
        end_frequency_hz: 62.5e9,
        samples_per_chirp: 64,
        chirps_per_frame: 32,
        antenna_count: 3,
        antenna_spacing_m: 2.5e-3,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let radar = if let Some(path) = args.device_config {
        load_device_config(path)?
    } else {
        default_radar_config()
    };

    let mut workflow = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    };
    if let Some(frames) = args.frames {
        workflow.scenario.frames = frames;
    }
    if let Some(workers) = args.workers {
        workflow.workers = workers;
    }

    info!("maximum range: {:.2} m", radar.maximum_range_m());
    info!("range FFT length: {}", radar.range_fft_len());
    info!("wavelength: {:.4e} m", radar.wavelength_m());

    let capture = build_capture(&radar, &workflow.scenario)?;
    let runner = Runner::new(radar, workflow);
    let summary = runner.execute(&capture)?;

    println!(
        "Processed {} frames -> gate passes {}, clamped angles {}",
        summary.series.len(),
        summary.gate_passes,
        summary.clamped_angles
    );

    if let Some(path) = args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&summary.series)
            .context("serializing output series")?;
        fs::write(&path, json)
            .with_context(|| format!("writing output series to {}", path.display()))?;
    }

    Ok(())
}
