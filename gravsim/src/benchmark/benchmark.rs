use std::time::Instant;

use log::warn;

use crate::simulation::engine::Simulation3;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body3, NVec3};

/// Helper to build a deterministic 3D system of size `n`
fn make_simulation3(n: usize) -> Simulation3 {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec3::new(
                (i_f * 0.37).sin() * 5.0e11,
                (i_f * 0.13).cos() * 5.0e11,
                (i_f * 0.07).sin() * 5.0e11,
            );
            Body3::new(format!("b{i}"), format!("body {i}"), 1.0e24).with_position(x)
        })
        .collect();

    Simulation3::new(bodies, Parameters::default())
}

/// Time `Simulation3::step` for a range of n
/// Prints csv, paste it straight into a spreadsheet to graph
pub fn bench_step() {
    println!("N,step_ms");

    for n in [25, 50, 100, 200, 400, 800] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 200 { 20 } else { 3 };
        let mut sim = make_simulation3(n);

        // Warm-up one step
        if let Err(err) = sim.step() {
            warn!("benchmark step failed for n = {n}: {err}");
            continue;
        }

        let t0 = Instant::now();
        if let Err(err) = sim.simulate(steps) {
            warn!("benchmark run failed for n = {n}: {err}");
            continue;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
