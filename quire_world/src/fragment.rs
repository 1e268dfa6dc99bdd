// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `xywh` media fragments.
//!
//! Image annotations may target only part of a canvas, written as a W3C media
//! fragment on the target URI, e.g. `https://example.org/canvas/1#xywh=0,0,300,200`.
//! Only the spatial dimension in pixel units is understood.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};

/// A rectangular region of a canvas, in canvas-local units.
///
/// Origin and extent are stored as written so that a parsed fragment formats
/// back to the same `xywh` values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    origin: Point,
    size: Size,
}

impl Fragment {
    /// Creates a fragment from a canvas-local rectangle.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        let rect = rect.abs();
        Self {
            origin: rect.origin(),
            size: rect.size(),
        }
    }

    /// Creates a fragment from origin and extent.
    #[must_use]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Top-left corner of the region.
    #[must_use]
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Extent of the region.
    #[must_use]
    pub fn size(self) -> Size {
        self.size
    }

    /// The region as a canvas-local rectangle.
    #[must_use]
    pub fn rect(self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Parses a fragment.
    ///
    /// Accepts `xywh=x,y,w,h`, `#xywh=x,y,w,h`, `xywh=pixel:x,y,w,h`, and a
    /// bare `x,y,w,h`. Percent units are rejected.
    pub fn parse(s: &str) -> Result<Self, FragmentError> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        let s = s.strip_prefix("xywh=").unwrap_or(s);
        if s.starts_with("percent:") {
            return Err(FragmentError::UnsupportedUnit);
        }
        let s = s.strip_prefix("pixel:").unwrap_or(s);

        let mut values = [0.0; 4];
        let mut count = 0;
        for part in s.split(',') {
            if count == values.len() {
                return Err(FragmentError::WrongArity(count + 1));
            }
            values[count] = match part.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => return Err(FragmentError::InvalidNumber(count)),
            };
            count += 1;
        }
        if count != values.len() {
            return Err(FragmentError::WrongArity(count));
        }

        let [x, y, w, h] = values;
        if w < 0.0 || h < 0.0 {
            return Err(FragmentError::NegativeExtent);
        }
        Ok(Self::from_xywh(x, y, w, h))
    }

    /// Extracts the fragment from an annotation target URI.
    ///
    /// The URI fragment may hold several `&`-separated keys, e.g.
    /// `#t=0&xywh=1,2,3,4`. Returns `Ok(None)` when there is no `xywh` key,
    /// meaning the annotation covers the whole canvas.
    pub fn from_target(target: &str) -> Result<Option<Self>, FragmentError> {
        let Some((_, fragment)) = target.split_once('#') else {
            return Ok(None);
        };
        fragment
            .split('&')
            .find_map(|key| key.strip_prefix("xywh="))
            .map(Self::parse)
            .transpose()
    }
}

impl FromStr for Fragment {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (o, s) = (self.origin, self.size);
        write!(f, "xywh={},{},{},{}", o.x, o.y, s.width, s.height)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fragment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fragment {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <alloc::string::String as serde::Deserialize<'de>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error returned when a fragment string cannot be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentError {
    /// The fragment did not contain exactly four values; holds the count seen.
    WrongArity(usize),
    /// The value at this position is not a finite number.
    InvalidNumber(usize),
    /// Width or height is negative.
    NegativeExtent,
    /// The fragment uses `percent:` units.
    UnsupportedUnit,
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArity(n) => write!(f, "expected 4 comma-separated values, found {n}"),
            Self::InvalidNumber(i) => write!(f, "value {i} is not a finite number"),
            Self::NegativeExtent => f.write_str("fragment width and height must not be negative"),
            Self::UnsupportedUnit => f.write_str("percent fragments are not supported"),
        }
    }
}

impl core::error::Error for FragmentError {}
