// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas and image-resource descriptors.
//!
//! These are plain data handed over by an upstream manifest parser. Nothing in
//! this crate validates them: zero-sized canvases or duplicate identifiers are
//! laid out with whatever the arithmetic produces.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::fragment::Fragment;

/// One image-bearing page of a IIIF sequence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    /// Canvas identifier, unique within a sequence.
    pub id: String,
    /// Intrinsic width in canvas-local units.
    pub width: f64,
    /// Intrinsic height in canvas-local units.
    pub height: f64,
    /// Image resources painted onto this canvas, bottom-most first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_resources: Vec<ImageResource>,
}

impl Canvas {
    /// Creates a canvas with no image resources.
    #[must_use]
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            image_resources: Vec::new(),
        }
    }

    /// Appends an image resource and returns the canvas.
    #[must_use]
    pub fn with_image_resource(mut self, resource: ImageResource) -> Self {
        self.image_resources.push(resource);
        self
    }

    /// Intrinsic size of the canvas.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The canvas' own coordinate space, `[0, 0, width, height]`.
    #[must_use]
    pub fn local_bounds(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.size())
    }

    /// Returns `true` if both dimensions are strictly positive.
    #[must_use]
    pub fn has_dimensions(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Width over height, or `None` for a canvas without a positive height.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.height > 0.0).then(|| self.width / self.height)
    }

    /// Looks up an image resource by its identifier.
    #[must_use]
    pub fn image_resource(&self, resource_id: &str) -> Option<&ImageResource> {
        self.image_resources.iter().find(|r| r.id == resource_id)
    }

    /// Returns `true` if an image resource with `resource_id` paints onto this canvas.
    #[must_use]
    pub fn contains_image_resource(&self, resource_id: &str) -> bool {
        self.image_resource(resource_id).is_some()
    }
}

/// An image-service-backed layer of a [`Canvas`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageResource {
    /// Image service base URI; the key used for layer configuration.
    pub id: String,
    /// Region of the canvas the image paints onto, if not the whole canvas.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub fragment: Option<Fragment>,
}

impl ImageResource {
    /// Creates a resource covering its whole canvas.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fragment: None,
        }
    }

    /// Restricts the resource to a region of its canvas.
    #[must_use]
    pub fn with_fragment(mut self, fragment: Fragment) -> Self {
        self.fragment = Some(fragment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, ImageResource};
    use crate::Fragment;

    #[test]
    fn dimensions_and_aspect_ratio() {
        let canvas = Canvas::new("c", 200.0, 100.0);
        assert!(canvas.has_dimensions());
        assert_eq!(canvas.aspect_ratio(), Some(2.0));

        let flat = Canvas::new("flat", 200.0, 0.0);
        assert!(!flat.has_dimensions());
        assert_eq!(flat.aspect_ratio(), None);
    }

    #[test]
    fn image_resource_lookup_by_id() {
        let canvas = Canvas::new("c", 10.0, 10.0)
            .with_image_resource(ImageResource::new("a"))
            .with_image_resource(
                ImageResource::new("b").with_fragment(Fragment::from_xywh(1.0, 2.0, 3.0, 4.0)),
            );

        assert!(canvas.contains_image_resource("a"));
        assert!(!canvas.contains_image_resource("z"));
        let b = canvas.image_resource("b").unwrap();
        assert_eq!(
            b.fragment.map(|f| f.rect().width()),
            Some(3.0),
            "fragment survives the builder"
        );
    }
}
