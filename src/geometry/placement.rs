//! Placement of a floating bubble next to an anchor on screen.

use crate::log::debug;
use crate::types::{Rect, Size};

use super::bound;
use super::style::ArrowDirection;

/// Where a floating bubble goes and which way its arrow points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub rect: Rect,
    /// Points back at the anchor
    pub direction: ArrowDirection,
}

/// Place a bubble of `bubble` size beside `anchor`, fully inside `screen`.
///
/// Candidates sit left of, right of, above and below the anchor, centered on
/// it along the other axis and shifted back onto the screen where needed. A
/// candidate that still does not fit is dropped. The one whose center is
/// nearest the anchor center wins; on a tie the earlier candidate in the order
/// left, right, above, below is kept.
pub fn place_near_anchor(anchor: &Rect, bubble: Size, screen: &Rect) -> Option<Placement> {
    let center = anchor.center();
    let left = bound(screen.left, center.x - bubble.w / 2.0, screen.right - bubble.w);
    let top = bound(screen.top, center.y - bubble.h / 2.0, screen.bottom - bubble.h);

    let candidates = [
        (anchor.left - bubble.w, top, ArrowDirection::Right),
        (anchor.right, top, ArrowDirection::Left),
        (left, anchor.top - bubble.h, ArrowDirection::Down),
        (left, anchor.bottom, ArrowDirection::Up),
    ];

    let mut best: Option<(f64, Placement)> = None;
    for (x, y, direction) in candidates {
        let rect = Rect::new(x, y, x + bubble.w, y + bubble.h);
        if !screen.contains_rect(&rect) {
            continue;
        }
        let distance = rect.center().distance_squared(center);
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, Placement { rect, direction }));
        }
    }

    match best {
        Some((_, placement)) => {
            debug!(rect = %placement.rect, direction = %placement.direction, "placed bubble");
            Some(placement)
        }
        None => {
            debug!(%anchor, w = bubble.w, h = bubble.h, "no room for bubble near anchor");
            None
        }
    }
}
