//! smoldyn-demo — convert a Smoldyn `listmols` trajectory into a
//! `.simularium` file.
//!
//! ```text
//! smoldyn-demo [LISTMOLS_TXT [CONFIG_JSON [OUTPUT_PATH]]]
//! ```
//!
//! With no arguments the embedded two-species sample and config are used and
//! the result lands in `output/smoldyn-demo/sample.simularium`.  Set
//! `RUST_LOG=debug` to see each filter step.

use std::fs::File;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use trj_convert::{SmoldynConfig, SmoldynConverter, TrajectoryConverter};
use trj_filter::{Filter, MultiplyTimeFilter, TranslateFilter};
use trj_output::{JsonWriter, OutputWriter};

// ── Embedded sample ───────────────────────────────────────────────────────────

const SAMPLE_LISTMOLS: &str = "\
0.0 4
red(solution) 12.5 40.1 33.0 1
red(solution) 60.2 18.7 71.4 2
green(solution) 44.0 52.3 10.9 3
green(front) 50.0 50.0 0.0 4
0.01 4
red(solution) 13.1 39.6 33.8 1
red(solution) 59.4 19.9 70.2 2
green(solution) 44.9 51.7 11.5 3
green(front) 50.0 50.0 0.0 4
0.02 3
red(solution) 13.9 38.8 34.1 1
green(solution) 45.2 51.1 12.6 3
green(front) 50.0 50.0 0.0 4
";

const SAMPLE_CONFIG: &str = r##"{
    "meta_data": {
        "box_size": [100.0, 100.0, 100.0],
        "scale_factor": 0.1,
        "trajectory_title": "Smoldyn sample"
    },
    "display_data": {
        "red(solution)":   { "name": "red",   "display_type": "SPHERE", "radius": 3.0, "color": "#d71f5f" },
        "green(solution)": { "name": "green", "display_type": "SPHERE", "radius": 2.0, "color": "#2fb344" },
        "green(front)":    { "name": "green", "display_type": "SPHERE", "radius": 2.0, "color": "#2fb344" }
    },
    "time_units":    { "name": "s" },
    "spatial_units": { "name": "µm" }
}"##;

const DEFAULT_OUTPUT: &str = "output/smoldyn-demo/sample";

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let config_path = args.next().map(PathBuf::from);
    let output = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    // 1. Config.
    let config: SmoldynConfig = match &config_path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        None => serde_json::from_str(SAMPLE_CONFIG).context("parsing embedded config")?,
    };
    info!(
        species = config.display_data.len(),
        scale_factor = config.meta_data.scale_factor,
        "config loaded"
    );

    // 2. Read and convert.
    let t0 = Instant::now();
    let source = match &input {
        Some(path) => SmoldynConverter::from_path(path, config)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SmoldynConverter::from_reader(Cursor::new(SAMPLE_LISTMOLS), config)?,
    };
    let converter = TrajectoryConverter::from_source(&source)?;
    let data = converter.data();

    // 3. Centre the box on the origin and report time in milliseconds.
    let half_box = data.meta_data.box_size.map(|edge| -edge / 2.0);
    let centre = TranslateFilter::all(half_box);
    let to_ms = MultiplyTimeFilter::new(1000.0);
    let filters: [&dyn Filter; 2] = [&centre, &to_ms];

    // 4. Write.
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let mut writer = JsonWriter::create(&output)?;
    converter.write_filtered(&filters, &mut writer)?;
    writer.finish()?;

    // 5. Summary.
    println!("Converted in {:.3} s", t0.elapsed().as_secs_f64());
    println!("  frames      : {}", data.agent_data.total_steps());
    println!("  max agents  : {}", data.agent_data.max_agents());
    println!("  agents      : {}", data.agent_data.total_agents());
    println!("  output      : {}.simularium", output.display());

    Ok(())
}
