//! External contour extraction for binarized frames
//!
//! Border following is delegated to `imageproc`, which implements the
//! Suzuki-Abe algorithm and reports the full border hierarchy. Only the
//! outermost borders are kept: hole borders and any blob nested inside a
//! hole are dropped, so each connected foreground region yields exactly one
//! polygon.
//!
//! The mask is traced inside a one pixel zero border so that regions touching
//! the frame edge are still reported as outer borders; everything outside the
//! frame counts as background.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;
use log::trace;

/// Extract the outermost contours of all foreground regions
///
/// Each returned contour is a closed polygon with redundant collinear
/// vertices removed (see [`simplify_chain`]). Contours are returned in
/// discovery order, which is a raster scan of the image from the top-left.
///
/// # Arguments
///
/// * `mask` - Binary image where any non-zero pixel is foreground
pub fn external_contours(mask: &GrayImage) -> Vec<Vec<Point<i32>>> {
    let padded = pad_with_background(mask);
    let all = find_contours::<i32>(&padded);
    let total = all.len();

    let external: Vec<Vec<Point<i32>>> = all
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| {
            let unpadded: Vec<Point<i32>> = c
                .points
                .iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect();
            simplify_chain(&unpadded)
        })
        .collect();

    trace!(
        "Kept {} external contours out of {} traced borders",
        external.len(),
        total
    );

    external
}

/// Copy the mask into a frame one pixel larger on every side
fn pad_with_background(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut padded = GrayImage::new(width + 2, height + 2);
    image::imageops::replace(&mut padded, mask, 1, 1);
    padded
}

/// Drop vertices that lie in the middle of a straight run
///
/// A vertex is redundant when the step arriving at it and the step leaving
/// it point the same way, so only the end points of horizontal, vertical and
/// diagonal segments survive. The chain is treated as closed. Removing these
/// vertices leaves the enclosed area and moments of the polygon unchanged.
pub fn simplify_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            !is_straight_through(prev, curr, next)
        })
        .map(|i| points[i])
        .collect();

    // Closed chains always turn; keep degenerate input as-is
    if kept.is_empty() {
        points.to_vec()
    } else {
        kept
    }
}

fn is_straight_through(prev: Point<i32>, curr: Point<i32>, next: Point<i32>) -> bool {
    let (ax, ay) = (i64::from(curr.x - prev.x), i64::from(curr.y - prev.y));
    let (bx, by) = (i64::from(next.x - curr.x), i64::from(next.y - curr.y));
    let cross = ax * by - ay * bx;
    let dot = ax * bx + ay * by;
    cross == 0 && dot > 0
}
