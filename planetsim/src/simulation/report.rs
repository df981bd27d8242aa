//! Console reporting of the body collection between steps

use log::info;

use super::states::Body;

/// Log name, position, velocity and acceleration of every body
pub fn report(bodies: &[Body], iteration: usize, years: f64) {
    info!("After iteration {} ({:.6} years):", iteration, years);
    for b in bodies {
        let (x, v, a) = (b.position, b.velocity, b.acceleration());
        info!("   Planet {} ({}):", b.name, b.id());
        info!("      * position:     ({:.2}, {:.2}, {:.2})", x.x, x.y, x.z);
        info!("      * velocity:     ({:.3}, {:.3}, {:.3})", v.x, v.y, v.z);
        info!("      * acceleration: ({:.4}, {:.4}, {:.4})", a.x, a.y, a.z);
    }
}
