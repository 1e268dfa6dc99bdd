// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use quire_world::{
    Canvas, CanvasWorld, Direction, ImageResource, LayerConfig, LayerSettings, Scaling,
    WorldOptions,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn dimension(&mut self) -> f64 {
        f64::from(1_000 + self.next_u32() % 6_000)
    }
}

/// A sequence of `len` canvases with two image resources each.
fn build_sequence(len: usize, seed: u64) -> Vec<Canvas> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|i| {
            Canvas::new(format!("canvas/{i}"), rng.dimension(), rng.dimension())
                .with_image_resource(ImageResource::new(format!("image/{i}/base")))
                .with_image_resource(ImageResource::new(format!("image/{i}/overlay")))
        })
        .collect()
}

fn build_layers(canvases: &[Canvas]) -> LayerConfig {
    canvases
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let settings = LayerSettings::new()
                .with_opacity(0.5)
                .with_visibility(i % 3 != 0)
                .with_index(1);
            (c.id.clone(), c.image_resources[1].id.clone(), settings)
        })
        .collect()
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas_world/lookup");

    // Viewers usually hold one or two canvases; continuous scroll can hold the
    // whole sequence.
    for len in [2usize, 64, 1_024] {
        let canvases = build_sequence(len, 0x5eed);
        let layers = build_layers(&canvases);
        let last_canvas = canvases[len - 1].id.clone();
        let last_overlay = canvases[len - 1].image_resources[1].id.clone();
        group.throughput(Throughput::Elements(len as u64));

        for direction in [Direction::LeftToRight, Direction::RightToLeft] {
            let world = CanvasWorld::with_layers(&canvases, &layers, direction);

            group.bench_with_input(
                BenchmarkId::new(format!("world_bounds/{direction}"), len),
                &world,
                |b, world| b.iter(|| black_box(world.world_bounds())),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("offset_by_canvas/{direction}"), len),
                &world,
                |b, world| b.iter(|| black_box(world.offset_by_canvas(&last_canvas))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("canvas_to_world/{direction}"), len),
                &world,
                |b, world| {
                    b.iter(|| black_box(world.canvas_to_world_coordinates(last_overlay.as_str())));
                },
            );
        }

        let world = CanvasWorld::with_layers(&canvases, &layers, Direction::LeftToRight);
        group.bench_with_input(BenchmarkId::new("layer_opacity", len), &world, |b, world| {
            b.iter(|| black_box(world.layer_opacity_of_image_resource(&last_overlay)));
        });
    }

    group.finish();
}

fn bench_scaled_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas_world/scaled");

    for len in [2usize, 64, 1_024] {
        let canvases = build_sequence(len, 0xfeed);
        let options = WorldOptions::default().with_scaling(Scaling::ToMinHeight);
        let world = CanvasWorld::with_options(&canvases, None, options);
        let probe = Point::new(world.world_bounds().width() * 0.75, 10.0);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("placements", len), &world, |b, world| {
            b.iter(|| black_box(world.placements()));
        });
        group.bench_with_input(BenchmarkId::new("hit_test", len), &world, |b, world| {
            b.iter(|| black_box(world.canvas_at_world_point(probe)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookups, bench_scaled_layout);
criterion_main!(benches);
