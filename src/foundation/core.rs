use std::cmp::Ordering;

use crate::foundation::error::{WardrobeError, WardrobeResult};

pub use kurbo::{Point, Vec2};

/// Pixel dimensions of the composition surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 500,
            height: 600,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> WardrobeResult<Self> {
        if width == 0 || height == 0 {
            return Err(WardrobeError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Suggested position plus a uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Placement {
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Expand into a layer transform with no rotation.
    pub fn to_transform(self) -> Transform {
        Transform {
            position: self.position(),
            scale: Vec2::new(self.scale, self.scale),
            rotation_deg: 0.0,
        }
    }
}

/// Per-layer transform as edited by the user.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    pub position: Point,
    pub scale: Vec2, // (1, 1) unless edited
    pub rotation_deg: f64, // kept in [0, 360)
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            scale: Vec2::new(1.0, 1.0),
            rotation_deg: 0.0,
        }
    }
}

impl Transform {
    /// Copy with the rotation folded into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Self {
            rotation_deg: normalize_degrees(self.rotation_deg),
            ..self
        }
    }
}

pub fn normalize_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let d = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if d >= 360.0 { 0.0 } else { d }
}

/// Draw-order rank. Fractional values sit between integer bands.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ZIndex(pub f64);

impl ZIndex {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering, usable as a sort key.
    pub fn total_cmp(self, other: Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::fmt::Display for ZIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
