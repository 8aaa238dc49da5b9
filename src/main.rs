//! Headless demo driver
//!
//! Plays the role of the animation engine: owns the tick loop, calls
//! the kernel once per fixed timestep, and dumps the sampled paths as
//! JSON for plotting. The kernel itself never sees any of this.

use glam::DVec2;
use serde::Serialize;

use orbit_kernel::consts::{DEFAULT_BASE_RATE, SIM_DT};
use orbit_kernel::{Ellipse, KernelResult, OrbitState};

/// Seconds of animation to simulate
const DEMO_DURATION: f64 = 20.0;
/// Keep every Nth tick in the JSON output
const SAMPLE_STRIDE: usize = 12;

#[derive(Serialize)]
struct DemoOutput {
    ellipse: Ellipse,
    foci: (DVec2, DVec2),
    /// Sampled positions per body, one inner vec per body
    paths: Vec<Vec<DVec2>>,
    /// Swept-area polygon for the first body's opening stretch
    swept_boundary: Vec<DVec2>,
}

fn run() -> KernelResult<DemoOutput> {
    // The video's construction: a circle folded onto an eccentric point
    let ellipse = Ellipse::from_circle(DVec2::ZERO, 10.0, DVec2::new(6.0, 2.0))?;
    let (f1, f2) = ellipse.foci();
    log::info!(
        "ellipse: a={:.3} b={:.3} c={:.3}, foci {f1} / {f2}",
        ellipse.semi_major(),
        ellipse.semi_minor(),
        ellipse.linear_eccentricity(),
    );

    // Two bodies sharing the one ellipse, one per focus
    let mut bodies = vec![
        OrbitState::new(f1, DEFAULT_BASE_RATE)?,
        OrbitState::new(f2, DEFAULT_BASE_RATE)?.with_proportion(0.5),
    ];

    let ticks = (DEMO_DURATION / SIM_DT) as usize;
    let mut paths: Vec<Vec<DVec2>> = vec![Vec::new(); bodies.len()];
    let start = bodies[0].proportion();

    for tick in 0..ticks {
        for (body, path) in bodies.iter_mut().zip(paths.iter_mut()) {
            match body.advance(&ellipse, SIM_DT) {
                Ok(pos) => {
                    if tick % SAMPLE_STRIDE == 0 {
                        path.push(pos);
                    }
                }
                // skip-the-tick policy: log and let the next tick retry
                Err(err) => log::warn!("tick {tick}: {err}"),
            }
        }
    }
    log::info!(
        "simulated {ticks} ticks, body 0 ended at proportion {:.4}",
        bodies[0].proportion()
    );

    let swept_boundary =
        ellipse.swept_area_boundary(start, bodies[0].proportion(), bodies[0].focus());

    Ok(DemoOutput {
        foci: ellipse.foci(),
        ellipse,
        paths,
        swept_boundary,
    })
}

fn main() {
    env_logger::init();
    match run() {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        Err(err) => {
            log::error!("demo failed: {err}");
            std::process::exit(1);
        }
    }
}
