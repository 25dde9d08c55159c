//! Read-only entry points exposed to an embedding host.
//!
//! The host contract is two zero-argument queries over a fixed circle plus a
//! one-time initialization hook. The fixed circle is carried as immutable
//! configuration on [`CircleQueries`] rather than as process-wide state.

use std::sync::Once;

use crate::raster::{PixelSet, Rasterize};
use crate::Circle;

static INIT: Once = Once::new();

/// One-time setup hook for hosts that expect an explicit start entry point.
///
/// Infallible and idempotent; the queries are already safe to call without
/// it. Kept as the attachment point for host-side concerns such as panic
/// hook registration.
pub fn init() {
    INIT.call_once(|| {});
}

/// Query surface over a fixed circle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleQueries {
    circle: Circle,
}

impl CircleQueries {
    pub fn new(circle: Circle) -> Self {
        Self { circle }
    }

    /// The configured circle descriptor.
    pub fn get_circle(&self) -> Circle {
        self.circle
    }

    /// Boundary pixels of the configured circle, computed fresh per call.
    /// Identical inputs yield identically ordered output.
    pub fn get_circle_pixels(&self) -> PixelSet {
        self.circle.rasterize()
    }
}

impl Default for CircleQueries {
    fn default() -> Self {
        Self::new(Circle::DEFAULT)
    }
}

/// Circle descriptor of the default configuration.
pub fn get_circle() -> Circle {
    CircleQueries::default().get_circle()
}

/// Boundary pixels of the default configuration.
pub fn get_circle_pixels() -> PixelSet {
    CircleQueries::default().get_circle_pixels()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Pixel;

    #[test]
    fn test_default_circle() {
        let circle = get_circle();
        assert_eq!(circle.center(), Pixel(0, 0));
        assert_eq!(circle.radius(), 5);
        assert_eq!(circle, Circle::DEFAULT);
    }

    #[test]
    fn test_pixels_are_idempotent() {
        assert_eq!(
            get_circle_pixels().into_vec(),
            get_circle_pixels().into_vec()
        );
    }

    #[test]
    fn test_configured_circle_is_passed_through() {
        let circle = Circle::new(Pixel(4, -1), 2).unwrap();
        let queries = CircleQueries::new(circle);
        assert_eq!(queries.get_circle(), circle);

        let pixels = queries.get_circle_pixels();
        assert!(pixels.contains(Pixel(6, -1)));
        assert!(pixels.contains(Pixel(4, 1)));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert_eq!(get_circle(), Circle::DEFAULT);
    }
}
