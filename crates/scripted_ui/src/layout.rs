//! Geometry and area distribution.
//!
//! Every container answers two questions: how big do my children want to be
//! (`get_size`, bottom-up) and which rectangle does each child get
//! (`distribute`, top-down). The helpers here implement the second half.

use std::ops::{Add, Mul, Sub};

/// A point or extent in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The origin / zero extent.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// A position that no rectangle contains.
    ///
    /// Dispatch substitutes it for the real pointer when a clipping ancestor
    /// hides the pointer from its children.
    pub const NOWHERE: Self = Self {
        x: f32::NEG_INFINITY,
        y: f32::NEG_INFINITY,
    };

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from position and size.
    #[must_use]
    pub const fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Extent of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns true if `other` lies entirely inside this rectangle.
    #[must_use]
    pub fn encloses(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if two rectangles intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::new(x, y, right - x, bottom - y))
    }

    /// Clamps this rectangle into `bounds`; the part outside is cut off and a
    /// rectangle entirely outside collapses to zero size on the nearest edge.
    #[must_use]
    pub fn clamped_to(&self, bounds: &Self) -> Self {
        let x = self.x.clamp(bounds.x, bounds.right());
        let y = self.y.clamp(bounds.y, bounds.bottom());
        let right = self.right().clamp(x, bounds.right());
        let bottom = self.bottom().clamp(y, bounds.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// Expands the rectangle by the given amount on all sides.
    #[must_use]
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Shrinks the rectangle by the given amount on all sides, never below
    /// zero size.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        let inner = self.expand(-amount);
        Self::new(inner.x, inner.y, inner.width.max(0.0), inner.height.max(0.0))
    }

    /// Removes `amount` from one side only.
    #[must_use]
    pub fn shrink_side(&self, side: Side, amount: f32) -> Self {
        let amount = match side {
            Side::Left | Side::Right => amount.min(self.width),
            Side::Top | Side::Bottom => amount.min(self.height),
        };
        match side {
            Side::Top => Self::new(self.x, self.y + amount, self.width, self.height - amount),
            Side::Bottom => Self::new(self.x, self.y, self.width, self.height - amount),
            Side::Left => Self::new(self.x + amount, self.y, self.width - amount, self.height),
            Side::Right => Self::new(self.x, self.y, self.width - amount, self.height),
        }
    }
}

/// Main axis of a list-like container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Horizontal (left to right).
    Horizontal,
    /// Vertical (top to bottom).
    #[default]
    Vertical,
}

/// One side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl Side {
    /// Parses a side from its source-format name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TOP" => Some(Self::Top),
            "BOTTOM" => Some(Self::Bottom),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Named anchor for placing a single child inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Centered at preferred size.
    Middle,
    /// Top-left corner at preferred size.
    TopLeft,
    /// Top-right corner at preferred size.
    TopRight,
    /// Bottom-left corner at preferred size.
    BottomLeft,
    /// Bottom-right corner at preferred size.
    BottomRight,
    /// Centered on the top edge.
    TopCenter,
    /// Centered on the bottom edge.
    BottomCenter,
    /// Centered on the left edge.
    LeftCenter,
    /// Centered on the right edge.
    RightCenter,
    /// Full width along the top edge.
    TopStretched,
    /// Full width along the bottom edge.
    BottomStretched,
    /// Full height along the left edge.
    LeftStretched,
    /// Full height along the right edge.
    RightStretched,
    /// Full width, vertically centered.
    MiddleStretchedX,
    /// Full height, horizontally centered.
    MiddleStretchedY,
    /// Uniformly scaled to the largest size that fits both dimensions, centered.
    Fit,
    /// Uniformly scaled to the container's width, vertically centered.
    FitWidth,
}

impl Placement {
    /// Parses a placement from its source-format name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "MIDDLE" => Self::Middle,
            "TOP_LEFT" => Self::TopLeft,
            "TOP_RIGHT" => Self::TopRight,
            "BOTTOM_LEFT" => Self::BottomLeft,
            "BOTTOM_RIGHT" => Self::BottomRight,
            "TOP_CENTER" => Self::TopCenter,
            "BOTTOM_CENTER" => Self::BottomCenter,
            "LEFT_CENTER" => Self::LeftCenter,
            "RIGHT_CENTER" => Self::RightCenter,
            "TOP_STRETCHED" => Self::TopStretched,
            "BOTTOM_STRETCHED" => Self::BottomStretched,
            "LEFT_STRETCHED" => Self::LeftStretched,
            "RIGHT_STRETCHED" => Self::RightStretched,
            "MIDDLE_STRETCHED_X" => Self::MiddleStretchedX,
            "MIDDLE_STRETCHED_Y" => Self::MiddleStretchedY,
            "FIT" => Self::Fit,
            "FIT_WIDTH" => Self::FitWidth,
            _ => return None,
        })
    }

    /// Computes the child's rectangle inside `area` given its preferred size.
    #[must_use]
    pub fn place(self, area: Rect, size: Vec2) -> Rect {
        let center = area.center();
        let centered_x = center.x - size.x * 0.5;
        let centered_y = center.y - size.y * 0.5;
        match self {
            Self::Middle => Rect::new(centered_x, centered_y, size.x, size.y),
            Self::TopLeft => Rect::new(area.x, area.y, size.x, size.y),
            Self::TopRight => Rect::new(area.right() - size.x, area.y, size.x, size.y),
            Self::BottomLeft => Rect::new(area.x, area.bottom() - size.y, size.x, size.y),
            Self::BottomRight => {
                Rect::new(area.right() - size.x, area.bottom() - size.y, size.x, size.y)
            }
            Self::TopCenter => Rect::new(centered_x, area.y, size.x, size.y),
            Self::BottomCenter => Rect::new(centered_x, area.bottom() - size.y, size.x, size.y),
            Self::LeftCenter => Rect::new(area.x, centered_y, size.x, size.y),
            Self::RightCenter => Rect::new(area.right() - size.x, centered_y, size.x, size.y),
            Self::TopStretched => Rect::new(area.x, area.y, area.width, size.y),
            Self::BottomStretched => Rect::new(area.x, area.bottom() - size.y, area.width, size.y),
            Self::LeftStretched => Rect::new(area.x, area.y, size.x, area.height),
            Self::RightStretched => Rect::new(area.right() - size.x, area.y, size.x, area.height),
            Self::MiddleStretchedX => Rect::new(area.x, centered_y, area.width, size.y),
            Self::MiddleStretchedY => Rect::new(centered_x, area.y, size.x, area.height),
            Self::Fit => {
                if size.x <= 0.0 || size.y <= 0.0 {
                    return Rect::new(center.x, center.y, 0.0, 0.0);
                }
                let scale = (area.width / size.x).min(area.height / size.y);
                let scaled = size * scale;
                Rect::new(center.x - scaled.x * 0.5, center.y - scaled.y * 0.5, scaled.x, scaled.y)
            }
            Self::FitWidth => {
                if size.x <= 0.0 {
                    return Rect::new(area.x, center.y, area.width, 0.0);
                }
                let height = size.y * area.width / size.x;
                Rect::new(area.x, center.y - height * 0.5, area.width, height)
            }
        }
    }
}

/// A span along one axis: `(start, length)`.
pub type Span = (f32, f32);

/// Distributes `extent` starting at `start` among children with the given
/// preferred extents.
///
/// Every child except `stretched` receives exactly its preferred extent; the
/// stretched child absorbs whatever is left (never less than zero). Spans are
/// laid out in order and clamped to the container, so they never overlap and
/// never leave `[start, start + extent]`.
#[must_use]
pub fn distribute(start: f32, extent: f32, preferred: &[f32], stretched: Option<usize>) -> Vec<Span> {
    let fixed: f32 = preferred
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != stretched)
        .map(|(_, len)| *len)
        .sum();
    let end = start + extent.max(0.0);
    let mut pos = start;
    preferred
        .iter()
        .enumerate()
        .map(|(i, len)| {
            let want = if Some(i) == stretched {
                (extent - fixed).max(0.0)
            } else {
                len.max(0.0)
            };
            let from = pos.min(end);
            let to = (pos + want).min(end);
            pos += want;
            (from, to - from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 30.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 80.0)));
        assert!(!rect.contains(Vec2::NOWHERE));
    }

    #[test]
    fn test_stretch_takes_leftover() {
        let spans = distribute(0.0, 100.0, &[20.0, 30.0, 25.0], Some(1));
        assert_eq!(spans, vec![(0.0, 20.0), (20.0, 55.0), (75.0, 25.0)]);
    }

    #[test]
    fn test_stretch_clamped_when_overfull() {
        let spans = distribute(0.0, 40.0, &[30.0, 10.0, 25.0], Some(1));
        assert_eq!(spans[1].1, 0.0);
        for (from, len) in &spans {
            assert!(*from >= 0.0 && from + len <= 40.0);
        }
        // consecutive, never overlapping
        for pair in spans.windows(2) {
            assert!(pair[0].0 + pair[0].1 <= pair[1].0);
        }
    }

    #[test]
    fn test_no_stretch_packs_from_start() {
        let spans = distribute(10.0, 100.0, &[5.0, 5.0], None);
        assert_eq!(spans, vec![(10.0, 5.0), (15.0, 5.0)]);
    }

    #[test]
    fn test_placement_corners() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let size = Vec2::new(10.0, 20.0);

        assert_eq!(Placement::BottomRight.place(area, size), Rect::new(90.0, 30.0, 10.0, 20.0));
        assert_eq!(Placement::Middle.place(area, size), Rect::new(45.0, 15.0, 10.0, 20.0));
        assert_eq!(Placement::TopStretched.place(area, size), Rect::new(0.0, 0.0, 100.0, 20.0));
    }

    #[test]
    fn test_fit_scales_uniformly() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let fitted = Placement::Fit.place(area, Vec2::new(20.0, 20.0));
        assert_eq!(fitted, Rect::new(25.0, 0.0, 50.0, 50.0));

        let wide = Placement::FitWidth.place(area, Vec2::new(50.0, 10.0));
        assert_eq!(wide, Rect::new(0.0, 15.0, 100.0, 20.0));
    }

    #[test]
    fn test_clamped_to() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let r = Rect::new(5.0, 5.0, 10.0, 10.0).clamped_to(&bounds);
        assert_eq!(r, Rect::new(5.0, 5.0, 5.0, 5.0));
        assert!(bounds.encloses(&Rect::new(20.0, 0.0, 3.0, 3.0).clamped_to(&bounds)));
    }
}
