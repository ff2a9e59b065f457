//! Window geometry in physical and logical pixel space.

use serde::{Deserialize, Serialize};

/// A window or monitor rectangle in physical device pixels.
///
/// Edges follow the native convention: `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from an origin and a size. Edges saturate at the
    /// `i32` range.
    pub fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left.saturating_add(width), top.saturating_add(height))
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Convert to logical bounds by dividing every coordinate by `ratio`.
    pub fn to_logical(&self, ratio: f64) -> Bounds {
        Bounds {
            x: f64::from(self.left) / ratio,
            y: f64::from(self.top) / ratio,
            width: f64::from(self.width()) / ratio,
            height: f64::from(self.height()) / ratio,
        }
    }
}

/// Window bounds in logical (device-independent) pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
