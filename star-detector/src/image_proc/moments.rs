//! Polygon area and first-order moments
//!
//! Contours are treated as closed polygons through pixel centers. Area and
//! moments come from Green's theorem applied edge by edge, which is exact
//! for polygons and independent of vertex winding once normalized.

use imageproc::point::Point;

/// Raw spatial moments of a closed polygon up to first order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Zeroth moment (enclosed area)
    pub m00: f64,
    /// First moment about the y axis (Σ x dA)
    pub m10: f64,
    /// First moment about the x axis (Σ y dA)
    pub m01: f64,
}

impl Moments {
    /// Area-weighted centroid `(cx, cy)`, or `None` for a zero-area polygon
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }
}

/// Enclosed area of a closed polygon using the shoelace formula
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let twice_area: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            f64::from(a.x) * f64::from(b.y) - f64::from(b.x) * f64::from(a.y)
        })
        .sum();

    (twice_area * 0.5).abs()
}

/// Compute area moments of a closed polygon
///
/// For each edge (x₀,y₀)→(x₁,y₁) with cross term d = x₀y₁ − x₁y₀:
///
/// * m00 = ½ Σ d
/// * m10 = ⅙ Σ d (x₀ + x₁)
/// * m01 = ⅙ Σ d (y₀ + y₁)
///
/// Moments are sign-normalized so `m00` is never negative regardless of
/// whether the contour was traced clockwise or counter-clockwise.
pub fn polygon_moments(points: &[Point<i32>]) -> Moments {
    let n = points.len();
    if n < 3 {
        return Moments {
            m00: 0.0,
            m10: 0.0,
            m01: 0.0,
        };
    }

    let mut a00 = 0.0;
    let mut a10 = 0.0;
    let mut a01 = 0.0;

    for i in 0..n {
        let (x0, y0) = (f64::from(points[i].x), f64::from(points[i].y));
        let next = points[(i + 1) % n];
        let (x1, y1) = (f64::from(next.x), f64::from(next.y));

        let d = x0 * y1 - x1 * y0;
        a00 += d;
        a10 += d * (x0 + x1);
        a01 += d * (y0 + y1);
    }

    let sign = if a00 < 0.0 { -1.0 } else { 1.0 };

    Moments {
        m00: sign * a00 / 2.0,
        m10: sign * a10 / 6.0,
        m01: sign * a01 / 6.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x0: i32, y0: i32, side: i32) -> Vec<Point<i32>> {
        vec![
            Point::new(x0, y0),
            Point::new(x0, y0 + side),
            Point::new(x0 + side, y0 + side),
            Point::new(x0 + side, y0),
        ]
    }

    #[test]
    fn test_square_area_and_centroid() {
        let poly = square(8, 8, 4);

        assert_relative_eq!(contour_area(&poly), 16.0);

        let m = polygon_moments(&poly);
        assert_relative_eq!(m.m00, 16.0);
        let (cx, cy) = m.centroid().unwrap();
        assert_relative_eq!(cx, 10.0, epsilon = 1e-12);
        assert_relative_eq!(cy, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_winding_does_not_change_results() {
        let ccw = square(2, 30, 6);
        let mut cw = ccw.clone();
        cw.reverse();

        assert_relative_eq!(contour_area(&ccw), contour_area(&cw));
        assert_eq!(polygon_moments(&ccw), polygon_moments(&cw));
    }

    #[test]
    fn test_triangle_centroid() {
        let tri = vec![Point::new(0, 0), Point::new(6, 0), Point::new(0, 9)];

        assert_relative_eq!(contour_area(&tri), 27.0);
        let (cx, cy) = polygon_moments(&tri).centroid().unwrap();
        assert_relative_eq!(cx, 2.0, epsilon = 1e-12);
        assert_relative_eq!(cy, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_polygons_have_no_centroid() {
        let point = vec![Point::new(5, 5)];
        assert_eq!(contour_area(&point), 0.0);
        assert!(polygon_moments(&point).centroid().is_none());

        let line = vec![Point::new(0, 0), Point::new(4, 0), Point::new(8, 0)];
        assert_eq!(contour_area(&line), 0.0);
        assert!(polygon_moments(&line).centroid().is_none());
    }
}
