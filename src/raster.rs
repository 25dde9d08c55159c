//! Conversion of circles into their discrete boundary pixels.
//!
//! The rasterizer walks one octant with the integer midpoint algorithm and
//! mirrors each step into the other seven, so the cost is proportional to the
//! radius rather than to the bounding box area.

use std::collections::HashSet;

use crate::{Circle, Pixel};

/// Ordered, duplicate-free sequence of boundary pixels.
///
/// Produced fresh per rasterization call; derived from exactly one shape and
/// holds no reference back to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Pixel>", into = "Vec<Pixel>")
)]
pub struct PixelSet {
    pixels: Vec<Pixel>,
}

impl PixelSet {
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn contains(&self, pixel: Pixel) -> bool {
        self.pixels.contains(&pixel)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pixel> {
        self.pixels.iter()
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn into_vec(self) -> Vec<Pixel> {
        self.pixels
    }
}

/// Collects pixels keeping the first occurrence of each coordinate.
impl FromIterator<Pixel> for PixelSet {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seen = HashSet::new();
        let mut pixels = Vec::with_capacity(iter.size_hint().0);
        for pixel in iter {
            if seen.insert(pixel) {
                pixels.push(pixel);
            }
        }
        Self { pixels }
    }
}

impl From<Vec<Pixel>> for PixelSet {
    fn from(pixels: Vec<Pixel>) -> Self {
        pixels.into_iter().collect()
    }
}

impl From<PixelSet> for Vec<Pixel> {
    fn from(set: PixelSet) -> Self {
        set.pixels
    }
}

impl IntoIterator for PixelSet {
    type Item = Pixel;
    type IntoIter = std::vec::IntoIter<Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelSet {
    type Item = &'a Pixel;
    type IntoIter = std::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

/// A shape that can be reduced to the set of pixels on its boundary.
pub trait Rasterize {
    fn rasterize(&self) -> PixelSet;
}

/// The eight reflections of an octant point about the center, emitted
/// counter-clockwise starting from the east axis.
fn reflections(center: Pixel, major: i64, minor: i64) -> [Pixel; 8] {
    let Pixel(cx, cy) = center;
    [
        Pixel(cx + major, cy + minor),
        Pixel(cx + minor, cy + major),
        Pixel(cx - minor, cy + major),
        Pixel(cx - major, cy + minor),
        Pixel(cx - major, cy - minor),
        Pixel(cx - minor, cy - major),
        Pixel(cx + minor, cy - major),
        Pixel(cx + major, cy - minor),
    ]
}

/// Integer midpoint circle algorithm.
///
/// The primary octant `0 <= minor <= major` is walked from `(radius, 0)`
/// toward the 45° diagonal; the decision parameter tracks the algebraic
/// circle equation at the midpoint between the two candidate pixels, so
/// every emitted pixel is within one unit of the true radius. Points that
/// coincide after mirroring (on the axes, on the diagonal, and for radii
/// 0 and 1) are kept once, first occurrence winning.
impl Rasterize for Circle {
    fn rasterize(&self) -> PixelSet {
        let center = self.center();
        let mut major = self.radius();
        let mut minor = 0;
        let mut p = 1 - major;

        let mut points = Vec::new();
        while minor <= major {
            points.extend_from_slice(&reflections(center, major, minor));
            minor += 1;
            if p < 0 {
                p += 2 * minor + 1;
            } else {
                major -= 1;
                p += 2 * minor + 1 - 2 * major;
            }
        }

        points.into_iter().collect()
    }
}
