// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::canvas::{Canvas, ImageResource};

/// A reference to one canvas of a [`CanvasWorld`](crate::CanvasWorld).
///
/// Callers hold different handles depending on where they come from: a
/// sequence position from navigation, an image-resource id from a tile
/// source, or a canvas id from an annotation. Resolution rules:
///
/// - [`Index`](Self::Index) is a position in the world's canvas sequence
///   (construction order, independent of [`Direction`](crate::Direction)).
/// - [`Id`](Self::Id) is tried as an image-resource id first and as a canvas
///   id second.
/// - [`Resource`](Self::Resource) and [`Canvas`](Self::Canvas) only match
///   their own kind of id.
///
/// When several canvases match, the first in sequence order wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CanvasTarget<'t> {
    /// Position in the canvas sequence.
    Index(usize),
    /// Image-resource id or canvas id.
    Id(&'t str),
    /// Image-resource id.
    Resource(&'t str),
    /// Canvas id.
    Canvas(&'t str),
}

impl From<usize> for CanvasTarget<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'t> From<&'t str> for CanvasTarget<'t> {
    fn from(id: &'t str) -> Self {
        Self::Id(id)
    }
}

impl<'t> From<&'t ImageResource> for CanvasTarget<'t> {
    fn from(resource: &'t ImageResource) -> Self {
        Self::Resource(&resource.id)
    }
}

impl<'t> From<&'t Canvas> for CanvasTarget<'t> {
    fn from(canvas: &'t Canvas) -> Self {
        Self::Canvas(&canvas.id)
    }
}
