use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::collisions::resolve_collisions;
use crate::simulation::forces::{AccelSet, Acceleration, PlanetGravity, PlanetGravityPar};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build `n` well separated bodies
/// Radii are small enough that nothing collides at t = 0
fn make_bodies(n: usize) -> SimResult<Vec<Body>> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec3::new(
                (i_f * 0.37).sin() * 5.0e3 + i_f,
                (i_f * 0.13).cos() * 5.0e3,
                (i_f * 0.07).sin() * 5.0e3,
            );
            Body::new(format!("b{i}"), 1.0e-3, 1.0e9, x, NVec3::zeros())
        })
        .collect()
}

/// Time one serial and one rayon force evaluation per system size
pub fn bench_gravity() -> SimResult<()> {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let g = crate::simulation::constants::G;

    let direct = PlanetGravity { g };
    let par = PlanetGravityPar { g };

    for n in ns {
        let bodies = make_bodies(n)?;
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        direct.acceleration(&bodies, &mut out)?;
        par.acceleration(&bodies, &mut out)?;

        let t0 = Instant::now();
        direct.acceleration(&bodies, &mut out)?;
        let dt_direct = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        par.acceleration(&bodies, &mut out)?;
        let dt_par = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s, rayon = {:8.6} s", dt_direct, dt_par);
    }
    Ok(())
}

/// Full step cost (accelerations + integration + collision scan), CSV on stdout
pub fn bench_step() -> SimResult<()> {
    let steps = 3;
    let dt = 60.0;
    let forces = AccelSet::new().with(PlanetGravity {
        g: crate::simulation::constants::G,
    });

    println!("N,step_ms");

    for n in (100..=1600).step_by(100) {
        let mut sys = System::new(make_bodies(n)?);

        let t0 = Instant::now();
        for _ in 0..steps {
            semi_implicit_euler(&mut sys, &forces, dt)?;
            sys.bodies = resolve_collisions(&sys.bodies)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}
