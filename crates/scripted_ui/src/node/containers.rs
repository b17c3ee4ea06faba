//! Multi-child containers.

use super::{composite_element, Composite, Node, Slot, CONTAINER_PLACEHOLDER};
use crate::context::Context;
use crate::data::UiData;
use crate::layout::{distribute, Direction, Rect, Vec2};

/// Overlapping children sharing one area, drawn in order.
///
/// A bare `{ ... }` block in the source is a chain.
#[derive(Debug, Default)]
pub struct Chain {
    /// Children, bottom first.
    pub elems: Vec<Node>,
}

impl Chain {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.elems
            .iter()
            .fold(Vec2::ZERO, |acc, elem| acc.max(elem.get_size(data, ctx)))
    }
}

impl Composite for Chain {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        self.elems.iter().map(|elem| Slot::child(elem, data, area)).collect()
    }
}

/// Lays children out along an axis. Each child gets its preferred extent
/// except the stretched one, which absorbs the rest. The cross axis fills the
/// container.
fn stacked_slots<'a>(
    elems: &'a [Node],
    stretched: Option<usize>,
    direction: Direction,
    data: &'a UiData,
    ctx: &Context<'_>,
    area: Rect,
) -> Vec<Slot<'a>> {
    let preferred: Vec<f32> = elems
        .iter()
        .map(|elem| {
            let size = elem.get_size(data, ctx);
            match direction {
                Direction::Horizontal => size.x,
                Direction::Vertical => size.y,
            }
        })
        .collect();
    let spans = match direction {
        Direction::Horizontal => distribute(area.x, area.width, &preferred, stretched),
        Direction::Vertical => distribute(area.y, area.height, &preferred, stretched),
    };
    elems
        .iter()
        .zip(spans)
        .map(|(elem, (start, len))| {
            let child = match direction {
                Direction::Horizontal => Rect::new(start, area.y, len, area.height),
                Direction::Vertical => Rect::new(area.x, start, area.width, len),
            };
            Slot::child(elem, data, child)
        })
        .collect()
}

fn stacked_size(elems: &[Node], direction: Direction, data: &UiData, ctx: &Context<'_>) -> Vec2 {
    elems.iter().fold(Vec2::ZERO, |acc, elem| {
        let size = elem.get_size(data, ctx);
        match direction {
            Direction::Horizontal => Vec2::new(acc.x + size.x, acc.y.max(size.y)),
            Direction::Vertical => Vec2::new(acc.x.max(size.x), acc.y + size.y),
        }
    })
}

/// Children stacked top to bottom.
#[derive(Debug, Default)]
pub struct Vertical {
    /// Children, top first.
    pub elems: Vec<Node>,
    /// Child taking the leftover height.
    pub stretched: Option<usize>,
}

impl Vertical {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        stacked_size(&self.elems, Direction::Vertical, data, ctx)
    }
}

impl Composite for Vertical {
    fn slots<'a>(&'a self, data: &'a UiData, ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        stacked_slots(&self.elems, self.stretched, Direction::Vertical, data, ctx, area)
    }
}

/// Children side by side, left to right.
#[derive(Debug, Default)]
pub struct Horizontal {
    /// Children, leftmost first.
    pub elems: Vec<Node>,
    /// Child taking the leftover width.
    pub stretched: Option<usize>,
}

impl Horizontal {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        stacked_size(&self.elems, Direction::Horizontal, data, ctx)
    }
}

impl Composite for Horizontal {
    fn slots<'a>(&'a self, data: &'a UiData, ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        stacked_slots(&self.elems, self.stretched, Direction::Horizontal, data, ctx, area)
    }
}

/// How a [`List`] arranges its instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListDirection {
    /// One per row, full width.
    Vertical,
    /// One per column, full height.
    Horizontal,
    /// Left to right, starting a new row when the next instance would pass
    /// `max_width`.
    HorizontalWrap {
        /// Row width limit.
        max_width: f32,
    },
}

/// Instantiates its child once per element of the bound list.
///
/// Nodes inside the child keep their focus, tooltip and slider state only
/// while the list length stays the same; a longer or shorter list renumbers
/// every counted node visited after it.
#[derive(Debug)]
pub struct List {
    /// Arrangement.
    pub direction: ListDirection,
    /// Node instantiated per element.
    pub elem: Box<Node>,
}

impl List {
    /// Areas of every instance relative to `origin`, plus the total extent.
    fn arrange(&self, elems: &[UiData], ctx: &Context<'_>, origin: Vec2, cross: Option<f32>) -> (Vec<Rect>, Vec2) {
        let mut rects = Vec::with_capacity(elems.len());
        let mut total = Vec2::ZERO;
        match self.direction {
            ListDirection::Vertical => {
                for elem in elems {
                    let size = self.elem.get_size(elem, ctx);
                    let width = cross.unwrap_or(size.x);
                    rects.push(Rect::new(origin.x, origin.y + total.y, width, size.y));
                    total = Vec2::new(total.x.max(size.x), total.y + size.y);
                }
            }
            ListDirection::Horizontal => {
                for elem in elems {
                    let size = self.elem.get_size(elem, ctx);
                    let height = cross.unwrap_or(size.y);
                    rects.push(Rect::new(origin.x + total.x, origin.y, size.x, height));
                    total = Vec2::new(total.x + size.x, total.y.max(size.y));
                }
            }
            ListDirection::HorizontalWrap { max_width } => {
                let mut cursor = Vec2::ZERO;
                let mut row_height: f32 = 0.0;
                for elem in elems {
                    let size = self.elem.get_size(elem, ctx);
                    if cursor.x > 0.0 && cursor.x + size.x > max_width {
                        cursor = Vec2::new(0.0, cursor.y + row_height);
                        row_height = 0.0;
                    }
                    rects.push(Rect::from_pos_size(origin + cursor, size));
                    cursor.x += size.x;
                    row_height = row_height.max(size.y);
                    total.x = total.x.max(cursor.x);
                }
                total.y = cursor.y + row_height;
            }
        }
        (rects, total)
    }

    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        match data.as_list() {
            Ok(elems) => self.arrange(elems, ctx, Vec2::ZERO, None).1,
            Err(_) => CONTAINER_PLACEHOLDER,
        }
    }
}

impl Composite for List {
    fn slots<'a>(&'a self, data: &'a UiData, ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        let elems = match data.as_list() {
            Ok(elems) => elems,
            Err(error) => return vec![Slot::Placeholder { error, area }],
        };
        let cross = match self.direction {
            ListDirection::Vertical => Some(area.width),
            ListDirection::Horizontal => Some(area.height),
            ListDirection::HorizontalWrap { .. } => None,
        };
        let (rects, _) = self.arrange(elems, ctx, area.top_left(), cross);
        elems
            .iter()
            .zip(rects)
            .map(|(elem, rect)| Slot::child(&self.elem, elem, rect.clamped_to(&area)))
            .collect()
    }
}

composite_element!(Chain, Vertical, Horizontal, List);
