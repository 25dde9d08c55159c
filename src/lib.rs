//! Integer circle geometry and midpoint rasterization.
//!
//! A [`Circle`] is defined by an integer center and a non-negative integer
//! radius; [`raster::Rasterize`] converts it into the ordered, duplicate-free
//! [`raster::PixelSet`] of its boundary coordinates. The [`query`] module is
//! the read-only surface a host calls into.

use std::ops::Add;

use thiserror::Error;

pub mod query;
pub mod raster;

pub use query::{get_circle, get_circle_pixels, init, CircleQueries};
pub use raster::{PixelSet, Rasterize};

/// A discrete raster coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel(pub i64, pub i64);

impl Pixel {
    pub fn x(&self) -> i64 {
        self.0
    }

    pub fn y(&self) -> i64 {
        self.1
    }

    /// Translates by `v`, same as the `Add` impl but more explicit.
    pub fn translate(&self, v: Pixel) -> Pixel {
        *self + v
    }
}

impl Add for Pixel {
    type Output = Pixel;

    fn add(self, rhs: Pixel) -> Self::Output {
        Pixel(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl From<(i64, i64)> for Pixel {
    fn from(p: (i64, i64)) -> Self {
        Pixel(p.0, p.1)
    }
}

impl From<Pixel> for (i64, i64) {
    fn from(p: Pixel) -> Self {
        (p.0, p.1)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("radius must be non-negative, got {0}")]
    InvalidRadius(i64),
}

/// Circle with an integer center and a non-negative integer radius.
/// Immutable once constructed; a radius of zero denotes a single-point
/// circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "ser::CircleRepr", try_from = "ser::CircleRepr")
)]
pub struct Circle {
    center: Pixel,
    radius: i64,
}

impl Circle {
    /// Circle exposed by the default host-facing queries.
    pub const DEFAULT: Circle = Circle {
        center: Pixel(0, 0),
        radius: 5,
    };

    /// Creates a circle. A negative radius is the only rejected input.
    pub fn new(center: Pixel, radius: i64) -> Result<Self, GeometryError> {
        if radius < 0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Pixel {
        self.center
    }

    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Inclusive min/max corners of the rasterized boundary.
    pub fn bounding_box(&self) -> (Pixel, Pixel) {
        let Pixel(cx, cy) = self.center;
        let r = self.radius;
        (Pixel(cx - r, cy - r), Pixel(cx + r, cy + r))
    }
}

#[cfg(feature = "serialize")]
mod ser {
    use serde::{Deserialize, Serialize};

    use super::{Circle, GeometryError};

    /// Wire shape of [`Circle`]; deserialization re-validates the radius.
    #[derive(Serialize, Deserialize)]
    #[serde(rename = "Circle")]
    pub(crate) struct CircleRepr {
        center: super::Pixel,
        radius: i64,
    }

    impl From<Circle> for CircleRepr {
        fn from(circle: Circle) -> Self {
            Self {
                center: circle.center,
                radius: circle.radius,
            }
        }
    }

    impl TryFrom<CircleRepr> for Circle {
        type Error = GeometryError;

        fn try_from(repr: CircleRepr) -> Result<Self, Self::Error> {
            Circle::new(repr.center, repr.radius)
        }
    }
}
