use planetsim::{bench_gravity, bench_step};
use planetsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "planetsim", about = "Planet dynamics with collision merging")]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless the path exists as given
    #[arg(short, default_value = "sun_earth.yaml")]
    file_name: String,

    /// Write the recorded trajectories as YAML
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the timing harness instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_step()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    let trajectories = scenario.run()?;

    for (id, track) in trajectories.iter() {
        info!(
            "{} `{}`: {} samples{}",
            id,
            track.name,
            track.samples.len(),
            track.merged_into.map(|m| format!(", merged into {m}")).unwrap_or_default()
        );
    }

    if let Some(path) = args.output {
        let file = File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
        serde_yaml::to_writer(file, &trajectories)?;
        info!("trajectories written to {}", path.display());
    }

    Ok(())
}
