// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Two boxes: a long one spinning in place and a smaller one orbiting it.
//! Every frame the pair is tested for intersection and state changes are logged.

use anyhow::{ensure, Result};
use clap::Parser;
use orthos_core::math::TAU;
use orthos_core::{Obb, Quaternion, Ternion};

/// Radius of the orbit followed by the second box's centre.
const ORBIT_RADIUS: f64 = 75.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Spinning and orbiting boxes, tested with SAT every frame")]
struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Rotation step per frame, in radians.
    #[arg(long, default_value_t = 0.01)]
    step: f64,
}

/// Running totals for the final report.
#[derive(Debug, Default)]
struct Summary {
    frames: u32,
    in_contact: u32,
    transitions: u32,
}

struct Scene {
    central: Obb,
    orbiter: Obb,
    spin: Quaternion,
    step: f64,
}

impl Scene {
    fn new(step: f64) -> Self {
        let central = Obb::from_centre_and_extent(Ternion::ZERO, Ternion::new(100.0, 30.0, 45.0), None);
        let orbiter = Obb::from_corners(Ternion::ZERO, Ternion::new(69.0, 27.0, 30.0), None);
        Self {
            central,
            orbiter,
            spin: Quaternion::euler(step, 2.0 * step, 3.0 * step),
            step,
        }
    }

    /// Advances to `frame` and returns whether the boxes intersect.
    fn advance(&mut self, frame: u32) -> bool {
        let phase = (f64::from(frame) * self.step) % TAU;
        let position = Ternion::new(ORBIT_RADIUS * phase.cos(), 0.0, ORBIT_RADIUS * phase.sin());

        self.central = self.central.rotate(self.spin);
        self.orbiter = self.orbiter.centred(position).rotate(self.spin.conjugate());
        self.central.intersects(&self.orbiter)
    }
}

/// Runs the scene for `frames` frames, logging every contact change.
fn simulate(frames: u32, step: f64) -> Summary {
    let mut scene = Scene::new(step);
    let mut summary = Summary::default();
    let mut touching = scene.central.intersects(&scene.orbiter);
    log::info!("frame 0: boxes start {}", if touching { "intersecting" } else { "apart" });

    for frame in 1..=frames {
        let now = scene.advance(frame);
        summary.frames += 1;
        if now {
            summary.in_contact += 1;
        }
        if now != touching {
            summary.transitions += 1;
            log::info!(
                "frame {frame}: boxes {} (central centre {}, orbiter centre {})",
                if now { "collide" } else { "separate" },
                scene.central.centre(),
                scene.orbiter.centre()
            );
            touching = now;
        }
        log::trace!("frame {frame}: central {}", scene.central);
    }
    summary
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    ensure!(args.step.is_finite(), "--step must be a finite number of radians");

    let summary = simulate(args.frames, args.step);
    println!(
        "{} frames simulated, {} in contact, {} transitions",
        summary.frames, summary.in_contact, summary.transitions
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_makes_and_breaks_contact() {
        let summary = simulate(600, 0.01);
        assert_eq!(summary.frames, 600);
        assert!(summary.in_contact > 0 && summary.in_contact < 600, "{summary:?}");
        assert!(summary.transitions >= 2, "{summary:?}");
    }

    #[test]
    fn test_orbit_passes_the_long_axis() {
        let mut scene = Scene::new(0.0);
        assert!(scene.advance(1));
        scene.orbiter = scene.orbiter.centred(Ternion::new(0.0, 0.0, ORBIT_RADIUS));
        assert!(!scene.central.intersects(&scene.orbiter));
    }
}
