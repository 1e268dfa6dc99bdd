// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-image-resource layer configuration.

use alloc::string::String;

use hashbrown::HashMap;

/// Visibility, opacity, and stacking overrides for one image resource.
///
/// Every field is optional; an absent field means "use the default"
/// (visible, fully opaque, natural stacking order).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayerSettings {
    /// `Some(false)` hides the layer regardless of `opacity`.
    pub visibility: Option<bool>,
    /// Compositing opacity, nominally in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Explicit stacking key, interpreted by the renderer.
    pub index: Option<i64>,
}

impl LayerSettings {
    /// Settings with every field unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visibility: None,
            opacity: None,
            index: None,
        }
    }

    /// Sets `visibility`.
    #[must_use]
    pub const fn with_visibility(mut self, visible: bool) -> Self {
        self.visibility = Some(visible);
        self
    }

    /// Sets `opacity`.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets `index`.
    #[must_use]
    pub const fn with_index(mut self, index: i64) -> Self {
        self.index = Some(index);
        self
    }

    /// Returns `false` only when visibility is explicitly turned off.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility != Some(false)
    }

    /// Opacity to composite with: `0` when hidden, else the configured
    /// opacity, else `1`.
    #[must_use]
    pub fn effective_opacity(&self) -> f64 {
        if self.is_visible() {
            self.opacity.unwrap_or(1.0)
        } else {
            0.0
        }
    }
}

/// Layer settings keyed by canvas identifier, then image-resource identifier.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LayerConfig {
    canvases: HashMap<String, HashMap<String, LayerSettings>>,
}

impl LayerConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no canvas has any layer settings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canvases.values().all(HashMap::is_empty)
    }

    /// Sets the settings for one image resource of one canvas, returning the
    /// previous settings if there were any.
    pub fn insert(
        &mut self,
        canvas_id: impl Into<String>,
        resource_id: impl Into<String>,
        settings: LayerSettings,
    ) -> Option<LayerSettings> {
        self.canvases
            .entry(canvas_id.into())
            .or_default()
            .insert(resource_id.into(), settings)
    }

    /// Looks up the settings for an image resource of a canvas.
    #[must_use]
    pub fn get(&self, canvas_id: &str, resource_id: &str) -> Option<&LayerSettings> {
        self.canvases.get(canvas_id)?.get(resource_id)
    }

    /// Iterates the configured image resources of one canvas, in no
    /// particular order.
    pub fn canvas_layers<'s>(
        &'s self,
        canvas_id: &str,
    ) -> impl Iterator<Item = (&'s str, &'s LayerSettings)> + 's {
        self.canvases
            .get(canvas_id)
            .into_iter()
            .flat_map(|layers| layers.iter().map(|(id, s)| (id.as_str(), s)))
    }
}

impl<C, R> FromIterator<(C, R, LayerSettings)> for LayerConfig
where
    C: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, R, LayerSettings)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (canvas_id, resource_id, settings) in iter {
            config.insert(canvas_id, resource_id, settings);
        }
        config
    }
}
