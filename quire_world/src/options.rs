// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Order in which canvases are laid out along the world X axis.
///
/// The keywords match the IIIF `viewingDirection` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[non_exhaustive]
pub enum Direction {
    /// Canvases are placed in sequence order, first canvas at the world origin.
    #[default]
    LeftToRight,
    /// Canvases are placed in reverse sequence order, last canvas at the world
    /// origin. The sequence itself keeps its order.
    RightToLeft,
}

impl Direction {
    /// The IIIF keyword for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left-to-right" => Ok(Self::LeftToRight),
            "right-to-left" => Ok(Self::RightToLeft),
            _ => Err(ParseDirectionError),
        }
    }
}

/// Error returned when a string is not a supported direction keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected \"left-to-right\" or \"right-to-left\"")
    }
}

impl core::error::Error for ParseDirectionError {}

/// How canvases of differing heights share the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Scaling {
    /// Canvases keep their intrinsic size. The world is as wide as the sum of
    /// canvas widths and as tall as the tallest canvas; shorter canvases are
    /// top-aligned.
    #[default]
    Intrinsic,
    /// Every canvas is scaled to the height of the shortest canvas, keeping
    /// its aspect ratio, with the scaled width rounded down.
    ToMinHeight,
}

/// Construction-time configuration of a [`CanvasWorld`](crate::CanvasWorld).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldOptions {
    /// Layout direction.
    pub direction: Direction,
    /// Height normalization policy.
    pub scaling: Scaling,
}

impl WorldOptions {
    /// Options with the given direction and intrinsic scaling.
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            scaling: Scaling::Intrinsic,
        }
    }

    /// Replaces the scaling policy.
    #[must_use]
    pub const fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }
}
