// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Affine, Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::layers::{LayerConfig, LayerSettings};
use crate::options::{Direction, Scaling, WorldOptions};
use crate::target::CanvasTarget;
use crate::trace::debug_miss;

/// Converts a world rectangle to the `[x, y, width, height]` form used by
/// IIIF viewers.
#[must_use]
pub fn to_xywh(rect: Rect) -> [f64; 4] {
    [rect.x0, rect.y0, rect.width(), rect.height()]
}

/// One canvas' band in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasPlacement<'a> {
    /// Position of the canvas in the world's sequence.
    pub index: usize,
    /// The canvas itself.
    pub canvas: &'a Canvas,
    /// World-space rectangle the canvas occupies.
    pub rect: Rect,
}

/// A composite coordinate space over a sequence of canvases.
///
/// Canvases are laid side by side along X with no gap, top-aligned at
/// `y = 0`, in sequence order or reversed for [`Direction::RightToLeft`].
/// The world origin is the top-left corner of the first band in layout order.
///
/// Canvases keep their intrinsic size by default. To get the figures of
/// viewers that normalize a spread to its shortest page (for example a
/// 6501x4421 and 2848x4288 pair giving `[0, 0, 9153, 4288]`), construct with
/// [`Scaling::ToMinHeight`] via [`with_options`](Self::with_options).
///
/// `CanvasWorld` borrows its canvases and layer configuration and never
/// changes them; every method is a pure read, linear in the number of
/// canvases. Construct a new world to change any input.
///
/// Lookups that cannot be resolved return `None` rather than panicking.
#[derive(Clone, Copy, Debug)]
pub struct CanvasWorld<'a> {
    canvases: &'a [Canvas],
    layers: Option<&'a LayerConfig>,
    options: WorldOptions,
}

impl<'a> CanvasWorld<'a> {
    /// Creates a left-to-right world with no layer configuration.
    #[must_use]
    pub fn new(canvases: &'a [Canvas]) -> Self {
        Self::with_options(canvases, None, WorldOptions::default())
    }

    /// Creates a world with layer configuration and a layout direction.
    #[must_use]
    pub fn with_layers(
        canvases: &'a [Canvas],
        layers: &'a LayerConfig,
        direction: Direction,
    ) -> Self {
        Self::with_options(canvases, Some(layers), WorldOptions::new(direction))
    }

    /// Creates a world with full control over its options.
    #[must_use]
    pub fn with_options(
        canvases: &'a [Canvas],
        layers: Option<&'a LayerConfig>,
        options: WorldOptions,
    ) -> Self {
        Self {
            canvases,
            layers,
            options,
        }
    }

    /// The canvas sequence, in construction order.
    #[must_use]
    pub fn canvases(&self) -> &'a [Canvas] {
        self.canvases
    }

    /// The layer configuration, if one was supplied.
    #[must_use]
    pub fn layers(&self) -> Option<&'a LayerConfig> {
        self.layers
    }

    /// The layout direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    /// The height normalization policy.
    #[must_use]
    pub fn scaling(&self) -> Scaling {
        self.options.scaling
    }

    /// Number of canvases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.canvases.len()
    }

    /// Returns `true` if the world holds no canvases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }

    /// Canvas ids in construction order.
    pub fn canvas_ids(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.canvases.iter().map(|c| c.id.as_str())
    }

    /// Returns `true` if every canvas has positive width and height.
    #[must_use]
    pub fn has_dimensions(&self) -> bool {
        self.canvases.iter().all(Canvas::has_dimensions)
    }

    /// Bounding rectangle of the whole world.
    ///
    /// Always anchored at the origin. With [`Scaling::Intrinsic`] it is as wide
    /// as the sum of canvas widths and as tall as the tallest canvas; an empty
    /// world has zero size.
    #[must_use]
    pub fn world_bounds(&self) -> Rect {
        let reference = self.reference_height();
        let mut size = Size::ZERO;
        for canvas in self.canvases {
            let band = self.band_size(canvas, reference);
            size.width += band.width;
            size.height = size.height.max(band.height);
        }
        Rect::from_origin_size(Point::ORIGIN, size)
    }

    /// World rectangle of the referenced canvas.
    ///
    /// The rectangle has the canvas' own (possibly scaled) size, `y = 0`, and
    /// `x` equal to the summed widths of the canvases placed before it. See
    /// [`CanvasTarget`] for how targets resolve.
    #[must_use]
    pub fn canvas_to_world_coordinates<'t>(
        &self,
        target: impl Into<CanvasTarget<'t>>,
    ) -> Option<Rect> {
        let index = self.resolve(target.into())?;
        Some(self.band_rect(index, self.reference_height()))
    }

    /// World-space translation of the canvas with `canvas_id`.
    ///
    /// Matches the origin of [`canvas_to_world_coordinates`](Self::canvas_to_world_coordinates)
    /// for the same canvas.
    #[must_use]
    pub fn offset_by_canvas(&self, canvas_id: &str) -> Option<Vec2> {
        let index = self.resolve(CanvasTarget::Canvas(canvas_id))?;
        Some(Vec2::new(self.offset_x(index, self.reference_height()), 0.0))
    }

    /// Position of the canvas with `canvas_id` in construction order.
    ///
    /// The layout direction does not affect the result.
    #[must_use]
    pub fn index_of_target(&self, canvas_id: &str) -> Option<usize> {
        self.canvases.iter().position(|c| c.id == canvas_id)
    }

    /// Canvas bands in layout order.
    #[must_use]
    pub fn placements(&self) -> SmallVec<[CanvasPlacement<'a>; 2]> {
        let reference = self.reference_height();
        let mut out = SmallVec::with_capacity(self.canvases.len());
        let mut x = 0.0;
        let mut place = |index: usize, canvas: &'a Canvas| {
            let size = self.band_size(canvas, reference);
            out.push(CanvasPlacement {
                index,
                canvas,
                rect: Rect::from_origin_size((x, 0.0), size),
            });
            x += size.width;
        };
        match self.options.direction {
            Direction::LeftToRight => self
                .canvases
                .iter()
                .enumerate()
                .for_each(|(i, c)| place(i, c)),
            Direction::RightToLeft => self
                .canvases
                .iter()
                .enumerate()
                .rev()
                .for_each(|(i, c)| place(i, c)),
        }
        out
    }

    /// The canvas whose band contains `point`.
    ///
    /// Bands are half-open on their right and bottom edges.
    #[must_use]
    pub fn canvas_at_world_point(&self, point: Point) -> Option<CanvasPlacement<'a>> {
        self.placements()
            .into_iter()
            .find(|p| p.rect.contains(point))
    }

    /// Transform from the referenced canvas' local space into world space.
    #[must_use]
    pub fn canvas_transform<'t>(&self, target: impl Into<CanvasTarget<'t>>) -> Option<Affine> {
        let index = self.resolve(target.into())?;
        Some(self.transform_of(index))
    }

    /// Maps a canvas-local point into world space.
    #[must_use]
    pub fn canvas_point_to_world<'t>(
        &self,
        target: impl Into<CanvasTarget<'t>>,
        point: Point,
    ) -> Option<Point> {
        Some(self.canvas_transform(target)? * point)
    }

    /// Maps a canvas-local region into world space.
    #[must_use]
    pub fn canvas_rect_to_world<'t>(
        &self,
        target: impl Into<CanvasTarget<'t>>,
        rect: Rect,
    ) -> Option<Rect> {
        Some(self.canvas_transform(target)?.transform_rect_bbox(rect))
    }

    /// Maps a world point into the referenced canvas' local space.
    ///
    /// The point need not lie inside the canvas. Returns `None` if the canvas
    /// collapses to zero width or height in world space.
    #[must_use]
    pub fn world_point_to_canvas<'t>(
        &self,
        target: impl Into<CanvasTarget<'t>>,
        point: Point,
    ) -> Option<Point> {
        let transform = self.canvas_transform(target)?;
        if transform.determinant() == 0.0 {
            return None;
        }
        Some(transform.inverse() * point)
    }

    /// World rectangle painted by the image resource with `resource_id`.
    ///
    /// A resource with an `xywh` fragment covers that region of its canvas;
    /// otherwise it covers the whole canvas band.
    #[must_use]
    pub fn content_resource_to_world_coordinates(&self, resource_id: &str) -> Option<Rect> {
        let index = self.resolve(CanvasTarget::Resource(resource_id))?;
        let fragment = self.canvases[index]
            .image_resource(resource_id)
            .and_then(|r| r.fragment);
        match fragment {
            Some(fragment) => Some(self.transform_of(index).transform_rect_bbox(fragment.rect())),
            None => Some(self.band_rect(index, self.reference_height())),
        }
    }

    /// Layer settings configured for the image resource with `resource_id`.
    #[must_use]
    pub fn layer_settings_of_image_resource(&self, resource_id: &str) -> Option<&'a LayerSettings> {
        let layers = self.layers?;
        let canvas = self
            .canvases
            .iter()
            .find(|c| c.contains_image_resource(resource_id))?;
        let settings = layers.get(&canvas.id, resource_id);
        if settings.is_none() {
            debug_miss!(canvas = %canvas.id, resource = resource_id, "no layer settings");
        }
        settings
    }

    /// Compositing opacity of an image resource.
    ///
    /// `0` if its layer is hidden, the configured opacity if one is set, and
    /// `1` otherwise (including when the resource or its canvas is unknown).
    #[must_use]
    pub fn layer_opacity_of_image_resource(&self, resource_id: &str) -> f64 {
        self.layer_settings_of_image_resource(resource_id)
            .map_or(1.0, LayerSettings::effective_opacity)
    }

    /// Configured stacking index of an image resource.
    ///
    /// The raw configured value is returned; `None` means the renderer should
    /// use the natural order of the canvas' image resources.
    #[must_use]
    pub fn layer_index_of_image_resource(&self, resource_id: &str) -> Option<i64> {
        self.layer_settings_of_image_resource(resource_id)?.index
    }

    /// Whether an image resource should be drawn at all. Defaults to `true`.
    #[must_use]
    pub fn layer_visibility_of_image_resource(&self, resource_id: &str) -> bool {
        self.layer_settings_of_image_resource(resource_id)
            .is_none_or(LayerSettings::is_visible)
    }

    fn resolve(&self, target: CanvasTarget<'_>) -> Option<usize> {
        let by_resource = |id: &str| {
            self.canvases
                .iter()
                .position(|c| c.contains_image_resource(id))
        };
        let found = match target {
            CanvasTarget::Index(i) => (i < self.canvases.len()).then_some(i),
            CanvasTarget::Id(id) => by_resource(id).or_else(|| self.index_of_target(id)),
            CanvasTarget::Resource(id) => by_resource(id),
            CanvasTarget::Canvas(id) => self.index_of_target(id),
        };
        if found.is_none() {
            debug_miss!(?target, canvases = self.canvases.len(), "unresolved canvas target");
        }
        found
    }

    /// Height every band is scaled to under [`Scaling::ToMinHeight`].
    fn reference_height(&self) -> f64 {
        match self.options.scaling {
            Scaling::Intrinsic => 0.0,
            Scaling::ToMinHeight => self
                .canvases
                .iter()
                .map(|c| c.height)
                .reduce(f64::min)
                .unwrap_or(0.0),
        }
    }

    fn band_size(&self, canvas: &Canvas, reference_height: f64) -> Size {
        match self.options.scaling {
            Scaling::Intrinsic => canvas.size(),
            Scaling::ToMinHeight => {
                // Multiply before dividing so canvases already at the
                // reference height keep their exact width.
                let width = if canvas.height > 0.0 {
                    (reference_height * canvas.width / canvas.height).floor()
                } else {
                    0.0
                };
                Size::new(width, reference_height)
            }
        }
    }

    /// Summed band widths of the canvases laid out before `index`.
    fn offset_x(&self, index: usize, reference_height: f64) -> f64 {
        let preceding = match self.options.direction {
            Direction::LeftToRight => &self.canvases[..index],
            Direction::RightToLeft => &self.canvases[index + 1..],
        };
        preceding
            .iter()
            .map(|c| self.band_size(c, reference_height).width)
            .sum()
    }

    fn band_rect(&self, index: usize, reference_height: f64) -> Rect {
        let x = self.offset_x(index, reference_height);
        let size = self.band_size(&self.canvases[index], reference_height);
        Rect::from_origin_size((x, 0.0), size)
    }

    fn transform_of(&self, index: usize) -> Affine {
        let canvas = &self.canvases[index];
        let band = self.band_rect(index, self.reference_height());
        let scale = |world: f64, local: f64| if local > 0.0 { world / local } else { 1.0 };
        Affine::translate(band.origin().to_vec2())
            * Affine::scale_non_uniform(
                scale(band.width(), canvas.width),
                scale(band.height(), canvas.height),
            )
    }
}
