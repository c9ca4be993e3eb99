extern crate nalgebra as na;

use broadphase2d::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::time::Instant;

const STATIC_COUNT: usize = 500;
const DYNAMIC_COUNT: usize = 2500;
const WARMUP_TICKS: usize = 30;
const MEASURED_TICKS: usize = 600;
const DT: Real = 1.0 / 60.0;
const SEED: u64 = 42;

fn world_extent() -> WorldExtent {
    WorldExtent::new(-16.0, 16.0, -9.0, 9.0)
}

fn random_shape(rng: &mut Pcg64, extent: &WorldExtent, min_scale: Real, max_scale: Real) -> Shape {
    // Velocity uniform over a disk of radius 2.
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let speed = 2.0 * rng.gen_range(0.0f32..1.0).sqrt();

    ShapeBuilder::new(rng.gen_range(min_scale..max_scale))
        .translation(
            rng.gen_range(extent.min_x..extent.max_x),
            rng.gen_range(extent.min_y..extent.max_y),
        )
        .rotation(rng.gen_range(0.0..360.0))
        .linvel(angle.cos() * speed, angle.sin() * speed)
        .angvel(rng.gen_range(-90.0..90.0))
        .build()
}

fn spawn_population(rng: &mut Pcg64, extent: &WorldExtent) -> ShapeSet {
    let mut shapes = ShapeSet::new();

    // Large static obstacles, then the small moving population.
    for _ in 0..STATIC_COUNT {
        shapes.insert_static(random_shape(rng, extent, 0.3, 0.8));
    }
    for _ in 0..DYNAMIC_COUNT {
        shapes.insert_dynamic(random_shape(rng, extent, 0.1, 0.4));
    }

    shapes
}

fn integrate(shapes: &mut [Shape], extent: &WorldExtent, dt: Real) {
    for shape in shapes {
        shape.position += shape.velocity * dt;
        shape.rotation += shape.angular_speed * dt;

        // Bounce off the extent edges.
        let half = shape.scale * 0.5;
        if shape.position.x < extent.min_x + half || shape.position.x > extent.max_x - half {
            shape.velocity.x = -shape.velocity.x;
        }
        if shape.position.y < extent.min_y + half || shape.position.y > extent.max_y - half {
            shape.velocity.y = -shape.velocity.y;
        }
    }
}

pub fn main() {
    let extent = world_extent();
    let strategies = [
        ("Uniform grid", BroadPhaseStrategy::UniformGrid),
        ("Spatial hash", BroadPhaseStrategy::SpatialHash),
        ("Sweep and prune", BroadPhaseStrategy::SweepAndPrune),
    ];

    println!(
        "Benchmarking {} static + {} dynamic shapes, {} ticks per strategy",
        STATIC_COUNT, DYNAMIC_COUNT, MEASURED_TICKS
    );

    for (name, strategy) in strategies {
        // Re-seed per strategy so every detector sees the same trajectory.
        let mut rng = Pcg64::seed_from_u64(SEED);
        let mut shapes = spawn_population(&mut rng, &extent);
        let mut dynamics = shapes.dynamic_shapes().to_vec();

        let mut pipeline = CollisionPipeline::new(
            DetectionParameters {
                cell_size: 1.5,
                strategy,
            },
            extent,
        );
        pipeline.counters.enable();

        for _ in 0..WARMUP_TICKS {
            integrate(&mut dynamics, &extent, DT);
            shapes.set_dynamic_snapshot(dynamics.clone());
            pipeline.step(DT, extent, &shapes);
        }

        let mut pairs = 0;
        let start = Instant::now();

        for _ in 0..MEASURED_TICKS {
            integrate(&mut dynamics, &extent, DT);
            shapes.set_dynamic_snapshot(dynamics.clone());
            pairs = pipeline.step(DT, extent, &shapes);
        }

        let elapsed = start.elapsed();
        let avg_ms = elapsed.as_secs_f64() * 1000.0 / MEASURED_TICKS as f64;

        println!(
            "{:>16}: {:.3} ms/tick on average ({:.3} ms in detection on the last tick), {} pairs",
            name,
            avg_ms,
            pipeline.counters.detection_time(),
            pairs
        );
    }
}
