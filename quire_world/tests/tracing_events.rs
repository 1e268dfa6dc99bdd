// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `DEBUG` events emitted for lookups that fail to resolve.

#![cfg(feature = "tracing")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use quire_world::{Canvas, CanvasWorld, Direction, ImageResource, LayerConfig, LayerSettings};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Counts `DEBUG` events targeted at `quire_world`.
struct EventCounter(Arc<AtomicUsize>);

impl Subscriber for EventCounter {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let meta = event.metadata();
        if meta.target() == "quire_world" && *meta.level() == Level::DEBUG {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn count_events(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    tracing::subscriber::with_default(EventCounter(Arc::clone(&count)), f);
    count.load(Ordering::SeqCst)
}

#[test]
fn misses_are_reported_and_hits_are_quiet() {
    let canvases = [Canvas::new("page", 10.0, 10.0)
        .with_image_resource(ImageResource::new("configured"))
        .with_image_resource(ImageResource::new("unconfigured"))];
    let mut layers = LayerConfig::new();
    layers.insert("page", "configured", LayerSettings::new().with_opacity(0.5));
    let world = CanvasWorld::with_layers(&canvases, &layers, Direction::LeftToRight);

    let hits = count_events(|| {
        assert!(world.canvas_to_world_coordinates("page").is_some());
        assert_eq!(world.layer_opacity_of_image_resource("configured"), 0.5);
    });
    assert_eq!(hits, 0);

    let misses = count_events(|| {
        assert_eq!(world.canvas_to_world_coordinates("missing"), None);
        assert_eq!(world.offset_by_canvas("missing"), None);
        assert_eq!(world.layer_opacity_of_image_resource("unconfigured"), 1.0);
    });
    assert_eq!(misses, 3);
}
