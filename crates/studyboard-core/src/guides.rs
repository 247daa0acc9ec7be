//! Alignment guides for the drag-and-drop planning canvas.
//!
//! While an item is dragged or resized, the canvas shows thin guide lines
//! wherever one of its edges or its center nearly lines up with an edge or
//! the center of another item.
//!
//! # Algorithm
//!
//! For every sibling, independently, five pairs are compared per axis
//! (shown for the vertical axis; the horizontal axis uses `y`, `bottom`
//! and `center_y` the same way):
//!
//! | Moving item  | Sibling      |
//! |--------------|--------------|
//! | `x`          | `x`          |
//! | `right`      | `right`      |
//! | `x`          | `right`      |
//! | `right`      | `x`          |
//! | `center_x`   | `center_x`   |
//!
//! A pair whose distance is `<= threshold` contributes the **sibling's**
//! coordinate. The cross pairs (left against right and right against left)
//! detect items that touch edge to edge. The union across siblings is
//! deduplicated by exact equality only; `threshold` plays no part in
//! deduplication.
//!
//! # Preconditions
//!
//! Widths and heights are expected to be non-negative and every coordinate
//! finite. Other input is accepted but the resulting guides are unspecified.

use serde::{Deserialize, Serialize};

use crate::models::{GuideSet, Rect};

/// `(moving, sibling)` coordinate pairs compared on the vertical axis.
fn vertical_pairs(current: &Rect, sibling: &Rect) -> [(f64, f64); 5] {
    [
        (current.x, sibling.x),
        (current.right(), sibling.right()),
        (current.x, sibling.right()),
        (current.right(), sibling.x),
        (current.center_x(), sibling.center_x()),
    ]
}

/// `(moving, sibling)` coordinate pairs compared on the horizontal axis.
fn horizontal_pairs(current: &Rect, sibling: &Rect) -> [(f64, f64); 5] {
    [
        (current.y, sibling.y),
        (current.bottom(), sibling.bottom()),
        (current.y, sibling.bottom()),
        (current.bottom(), sibling.y),
        (current.center_y(), sibling.center_y()),
    ]
}

/// Compute the guide lines to show for `current` against `others`.
///
/// Guides sit on the siblings' coordinates, not on the moving item's, so
/// swapping the roles of two rectangles generally changes the result.
pub fn compute_guides(current: &Rect, others: &[Rect], threshold: f64) -> GuideSet {
    let mut guides = GuideSet::default();

    for sibling in others {
        for (moving, target) in vertical_pairs(current, sibling) {
            if (moving - target).abs() <= threshold {
                guides.add_vertical(target);
            }
        }
        for (moving, target) in horizontal_pairs(current, sibling) {
            if (moving - target).abs() <= threshold {
                guides.add_horizontal(target);
            }
        }
    }

    tracing::trace!(
        siblings = others.len(),
        vertical = guides.vertical.len(),
        horizontal = guides.horizontal.len(),
        "computed alignment guides"
    );

    guides
}

/// Suggested translation that would snap the moving item onto its guides.
///
/// `None` on an axis means nothing on that axis is within threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Snap {
    pub dx: Option<f64>,
    pub dy: Option<f64>,
}

impl Snap {
    /// Translate `rect` by the suggested offsets; size is unchanged.
    pub fn apply(&self, rect: &Rect) -> Rect {
        Rect {
            x: rect.x + self.dx.unwrap_or(0.0),
            y: rect.y + self.dy.unwrap_or(0.0),
            ..*rect
        }
    }
}

/// Compute the smallest translation per axis that lands one of the
/// aligned pairs from [`compute_guides`] exactly on its sibling.
///
/// Ties keep the first candidate, with siblings visited in input order
/// and pairs in the order listed in the module docs.
pub fn compute_snap(current: &Rect, others: &[Rect], threshold: f64) -> Snap {
    let mut snap = Snap::default();

    for sibling in others {
        for (moving, target) in vertical_pairs(current, sibling) {
            nearer(&mut snap.dx, target - moving, threshold);
        }
        for (moving, target) in horizontal_pairs(current, sibling) {
            nearer(&mut snap.dy, target - moving, threshold);
        }
    }

    snap
}

fn nearer(best: &mut Option<f64>, delta: f64, threshold: f64) {
    if delta.abs() > threshold {
        return;
    }
    match *best {
        Some(current) if current.abs() <= delta.abs() => {}
        _ => *best = Some(delta),
    }
}
