//! Integer geometry: interval overlap, axis-aligned rectangles, square ranges

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Indicates if two closed intervals `[a1, b1]` and `[a2, b2]` are overlapping
///
/// True iff `a1 <= a2 < b1 <= b2` or `a2 <= a1 < b2 <= b1`. Intervals that only
/// touch at an end are not overlapping, and neither is an interval strictly
/// nested inside the other.
pub fn intervals_overlap(a1: i64, b1: i64, a2: i64, b2: i64) -> bool {
    (a1 <= a2 && a2 < b1 && b1 <= b2) || (a2 <= a1 && a1 < b2 && b2 <= b1)
}

/// Edge handling for range containment tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Points on the edge are inside
    #[default]
    Closed,
    /// Points on the edge are outside
    Open,
}

/// Axis-aligned rectangle `[x_min, x_max] x [y_min, y_max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl Rect {
    pub fn new(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Rectangle centered at `center` with the given half extents
    pub fn centered(center: Point, half_width: i64, half_height: i64) -> Self {
        Self {
            x_min: center.x - half_width,
            x_max: center.x + half_width,
            y_min: center.y - half_height,
            y_max: center.y + half_height,
        }
    }

    /// Square of side `2 * radius` centered at `center`
    pub fn square(center: Point, radius: i64) -> Self {
        Self::centered(center, radius, radius)
    }

    /// Two rectangles overlap iff both their x and y intervals overlap
    /// in the sense of [`intervals_overlap`]
    pub fn overlaps(&self, other: &Rect) -> bool {
        intervals_overlap(self.x_min, self.x_max, other.x_min, other.x_max)
            && intervals_overlap(self.y_min, self.y_max, other.y_min, other.y_max)
    }

    /// Corners in the order bottom-left, bottom-right, top-right, top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_min, self.y_max),
        ]
    }

    pub fn contains(&self, p: Point, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Closed => {
                self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
            }
            Boundary::Open => {
                self.x_min < p.x && p.x < self.x_max && self.y_min < p.y && p.y < self.y_max
            }
        }
    }

    /// Smallest rectangle enclosing both
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Smallest rectangle enclosing every rectangle of `rects`, `None` if empty
    pub fn enclosing<I: IntoIterator<Item = Rect>>(rects: I) -> Option<Rect> {
        rects.into_iter().reduce(|acc, r| acc.union(&r))
    }
}
