// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quire World: canvas-to-world layout for multi-canvas IIIF sequences.
//!
//! A IIIF viewer showing more than one canvas at a time (a book opening, a
//! photo strip) needs one coordinate space spanning all of them. This crate
//! computes that space and converts between it and each canvas' own
//! coordinates:
//!
//! - [`CanvasWorld::world_bounds`] sizes the composite world.
//! - [`CanvasWorld::canvas_to_world_coordinates`] and
//!   [`CanvasWorld::offset_by_canvas`] place a canvas (or its tiles and
//!   annotations) in the world.
//! - [`CanvasWorld::index_of_target`] finds a canvas in the sequence.
//! - [`CanvasWorld::layer_opacity_of_image_resource`] and
//!   [`CanvasWorld::layer_index_of_image_resource`] resolve per-layer
//!   compositing from a [`LayerConfig`].
//!
//! It does **not** parse manifests, fetch tiles, or render. Callers build
//! [`Canvas`] descriptors from their manifest library of choice and feed the
//! results into their renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use quire_world::{Canvas, CanvasWorld, Direction, LayerConfig, ImageResource, LayerSettings};
//!
//! let canvases = [
//!     Canvas::new("p1", 600.0, 800.0).with_image_resource(ImageResource::new("img1")),
//!     Canvas::new("p2", 500.0, 700.0).with_image_resource(ImageResource::new("img2")),
//! ];
//! let mut layers = LayerConfig::new();
//! layers.insert("p2", "img2", LayerSettings::new().with_opacity(0.5));
//!
//! let world = CanvasWorld::with_layers(&canvases, &layers, Direction::LeftToRight);
//! assert_eq!(world.world_bounds(), Rect::new(0.0, 0.0, 1100.0, 800.0));
//! assert_eq!(
//!     world.canvas_to_world_coordinates("img2"),
//!     Some(Rect::new(600.0, 0.0, 1100.0, 700.0)),
//! );
//! assert_eq!(world.layer_opacity_of_image_resource("img2"), 0.5);
//!
//! // Right-to-left reading order puts the last page first.
//! let rtl = CanvasWorld::with_layers(&canvases, &layers, Direction::RightToLeft);
//! assert_eq!(rtl.offset_by_canvas("p2").map(|v| v.x), Some(0.0));
//! assert_eq!(rtl.index_of_target("p2"), Some(1));
//! ```
//!
//! ## Layout rules
//!
//! - Canvases are placed side by side along X with no gap.
//! - Every band starts at `y = 0`; shorter canvases are top-aligned.
//! - [`Direction::RightToLeft`] reverses the placement order only; indices
//!   keep referring to the sequence as supplied.
//! - [`Scaling::ToMinHeight`] normalizes every canvas to the shortest
//!   canvas' height, the way some viewers present double-page spreads.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for descriptors, layer settings, and
//!   options.
//! - `tracing`: `DEBUG` events for lookups that fail to resolve.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod fragment;
mod layers;
mod options;
mod target;
mod trace;
mod world;

pub use canvas::{Canvas, ImageResource};
pub use fragment::{Fragment, FragmentError};
pub use layers::{LayerConfig, LayerSettings};
pub use options::{Direction, ParseDirectionError, Scaling, WorldOptions};
pub use target::CanvasTarget;
pub use world::{CanvasPlacement, CanvasWorld, to_xywh};
