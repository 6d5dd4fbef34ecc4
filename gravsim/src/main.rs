use gravsim::{bench_step, LoadedScenario, Runner, Scenario, ScenarioConfig, Simulation};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Direct n-body gravity simulator")]
struct Args {
    /// Scenario file name, looked up in the crate's `scenarios/` directory
    /// unless it is an existing path
    #[arg(short, long, default_value = "sun_earth.yaml")]
    file_name: String,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<usize>,

    /// Override the scenario's step size (s)
    #[arg(long)]
    dt: Option<f64>,

    /// Time the step function over a range of body counts and exit
    #[arg(long)]
    bench: bool,

    /// Drive the simulation frame by frame instead of in one batch
    #[arg(long)]
    realtime: bool,

    /// Frames per second for --realtime
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Frame budget for --realtime, the scenario's step count when omitted
    #[arg(long)]
    frames: Option<usize>,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(&args.file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name)
    };

    let mut cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    if let Some(steps) = args.steps {
        cfg.parameters.steps = steps;
    }
    if let Some(dt) = args.dt {
        cfg.parameters.dt = dt;
    }
    Ok(cfg)
}

fn frame_interval(fps: f64) -> Result<Duration> {
    if fps <= 0.0 || !fps.is_finite() {
        bail!("--fps must be a positive number, got {fps}");
    }
    Ok(Duration::from_secs_f64(1.0 / fps))
}

// energy is a diagnostic only, coincident bodies still step fine
fn energy_or_warn<const D: usize>(simulation: &Simulation<D>, label: &str) -> Option<f64> {
    match simulation.total_energy() {
        Ok(energy) => Some(energy),
        Err(err) => {
            warn!("{label} energy unavailable: {err}");
            None
        }
    }
}

fn advance<const D: usize>(scenario: Scenario<D>, args: &Args) -> Result<Simulation<D>> {
    let Scenario { simulation, steps } = scenario;
    let e0 = energy_or_warn(&simulation, "initial");

    let simulation = if args.realtime {
        let interval = frame_interval(args.fps)?;
        let mut runner = Runner::new(simulation);
        runner.run(interval, args.frames.unwrap_or(steps), |state| {
            info!("t = {:.0} s, {} bodies", state.time, state.bodies.len());
            ControlFlow::Continue(())
        })?;
        runner.into_simulation()
    } else {
        let mut simulation = simulation;
        simulation.simulate(steps)?;
        simulation
    };

    report(&simulation, e0);
    Ok(simulation)
}

fn run<const D: usize>(scenario: Scenario<D>, args: &Args) -> Result<()> {
    let simulation = advance(scenario, args)?;
    println!("{}", serde_yaml::to_string(&simulation.state())?);
    Ok(())
}

fn report<const D: usize>(simulation: &Simulation<D>, e0: Option<f64>) {
    if let (Some(e0), Some(e1)) = (e0, energy_or_warn(simulation, "final")) {
        let drift = if e0 != 0.0 { (e1 - e0).abs() / e0.abs() } else { 0.0 };
        info!(
            "t = {:.0} s, energy {:e} -> {:e} J (drift {:.4}%)",
            simulation.time(),
            e0,
            e1,
            drift * 100.0
        );
    }

    for pair in simulation.collisions() {
        warn!("collision: `{}` and `{}` at {:e} m", pair.first, pair.second, pair.separation);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let cfg = load_scenario(&args)?;
    match LoadedScenario::build(&cfg)? {
        LoadedScenario::TwoD(scenario) => run(scenario, &args),
        LoadedScenario::ThreeD(scenario) => run(scenario, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gravsim::{BodyId, Scenario2D};

    const COINCIDENT: &str = "
engine:
  dimension: 2d
parameters:
  G: 1.0
  dt: 0.01
  steps: 3
bodies:
  - id: a
    name: A
    mass: 1.0
  - id: b
    name: B
    mass: 1.0
  - id: c
    name: C
    mass: 1.0
    position: [1.0, 0.0]
";

    fn coincident_scenario() -> Scenario2D {
        let cfg = ScenarioConfig::from_yaml_str(COINCIDENT).unwrap();
        Scenario::build_scenario(&cfg).unwrap()
    }

    #[test]
    fn frames_flag_sets_realtime_budget() {
        let args = Args::try_parse_from(["gravsim", "--realtime", "--fps", "1000", "--frames", "2"]).unwrap();
        assert_eq!(args.frames, Some(2));

        let sim = advance(coincident_scenario(), &args).unwrap();
        assert_eq!(sim.time(), 0.02);
        assert!(!sim.is_running());
    }

    #[test]
    fn frames_default_to_scenario_steps() {
        let args = Args::try_parse_from(["gravsim", "--realtime", "--fps", "1000"]).unwrap();
        assert!(args.frames.is_none());

        let sim = advance(coincident_scenario(), &args).unwrap();
        assert!((sim.time() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn coincident_bodies_still_run() {
        let args = Args::try_parse_from(["gravsim"]).unwrap();
        let sim = advance(coincident_scenario(), &args).unwrap();

        assert!((sim.time() - 0.03).abs() < 1e-12);
        assert!(sim.total_energy().is_err());
        assert!(energy_or_warn(&sim, "final").is_none());
        // a and b pull on each other with zero force and move together toward c
        let a = sim.body(&BodyId::from("a")).unwrap();
        let b = sim.body(&BodyId::from("b")).unwrap();
        assert_eq!(a.position, b.position);
        assert!(a.position.x > 0.0);
    }

    #[test]
    fn non_positive_fps_is_rejected() {
        for fps in [0.0, -5.0, f64::NAN] {
            assert!(frame_interval(fps).is_err(), "fps {fps} accepted");
        }
        assert_eq!(frame_interval(4.0).unwrap(), Duration::from_millis(250));

        let args = Args::try_parse_from(["gravsim", "--realtime", "--fps", "0"]).unwrap();
        assert!(advance(coincident_scenario(), &args).is_err());
    }
}
