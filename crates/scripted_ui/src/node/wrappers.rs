//! Single-child wrappers that change the child's area or reported size.

use super::{composite_element, key_slots, pointer_slots, render_slots, wheel_slots, Composite, Element, Node, Slot};
use crate::action::Action;
use crate::context::Context;
use crate::data::UiData;
use crate::input::{ButtonKind, KeyEvent, WheelEvent};
use crate::layout::{Placement, Rect, Side, Vec2};

/// Insets its child by the same amount on every side.
#[derive(Debug)]
pub struct Margins {
    /// Inset on each side.
    pub width: f32,
    /// Wrapped node.
    pub inside: Box<Node>,
}

impl Margins {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.inside.get_size(data, ctx) + Vec2::new(self.width, self.width) * 2.0
    }
}

impl Composite for Margins {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        vec![Slot::child(&self.inside, data, area.shrink(self.width))]
    }
}

/// Insets its child on one side.
#[derive(Debug)]
pub struct Margin {
    /// Side to inset.
    pub side: Side,
    /// Inset.
    pub width: f32,
    /// Wrapped node.
    pub elem: Box<Node>,
}

impl Margin {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        let size = self.elem.get_size(data, ctx);
        match self.side {
            Side::Left | Side::Right => size + Vec2::new(self.width, 0.0),
            Side::Top | Side::Bottom => size + Vec2::new(0.0, self.width),
        }
    }
}

impl Composite for Margin {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        vec![Slot::child(&self.elem, data, area.shrink_side(self.side, self.width))]
    }
}

/// Places its child at a named anchor, at the child's preferred size.
#[derive(Debug)]
pub struct Position {
    /// Anchor.
    pub position: Placement,
    /// Wrapped node.
    pub elem: Box<Node>,
    /// Cut the child's area back to this node's area, and hide the pointer
    /// from the child while it is outside.
    pub clip: bool,
}

impl Position {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.elem.get_size(data, ctx)
    }
}

impl Composite for Position {
    fn slots<'a>(&'a self, data: &'a UiData, ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        let placed = self.position.place(area, self.elem.get_size(data, ctx));
        let placed = if self.clip { placed.clamped_to(&area) } else { placed };
        vec![Slot::child(&self.elem, data, placed)]
    }
}

impl Element for Position {
    fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.size(data, ctx)
    }

    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        let slots = self.slots(data, ctx, area);
        if self.clip {
            ctx.with_pointer_within(area, |ctx| render_slots(slots, ctx));
        } else {
            render_slots(slots, ctx);
        }
    }

    fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        let pos = if self.clip && !area.contains(pos) { Vec2::NOWHERE } else { pos };
        let slots = self.slots(data, ctx, area);
        pointer_slots(slots, ctx, kind, pos)
    }

    fn on_key(&self, data: &UiData, ctx: &mut Context<'_>, key: &KeyEvent, area: Rect) -> Option<Action> {
        let slots = self.slots(data, ctx, area);
        if self.clip {
            ctx.with_pointer_within(area, |ctx| key_slots(slots, ctx, key))
        } else {
            key_slots(slots, ctx, key)
        }
    }

    fn on_wheel(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, wheel: &WheelEvent) -> Option<Action> {
        let mut wheel = *wheel;
        if self.clip && !area.contains(wheel.pos) {
            wheel.pos = Vec2::NOWHERE;
        }
        let slots = self.slots(data, ctx, area);
        wheel_slots(slots, ctx, &wheel)
    }
}

/// Overrides the child's preferred width.
#[derive(Debug)]
pub struct Width {
    /// Reported width.
    pub value: f32,
    /// Wrapped node.
    pub elem: Box<Node>,
}

impl Width {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        Vec2::new(self.value, self.elem.get_size(data, ctx).y)
    }
}

impl Composite for Width {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        vec![Slot::child(&self.elem, data, area)]
    }
}

/// Overrides the child's preferred height.
#[derive(Debug)]
pub struct Height {
    /// Reported height.
    pub value: f32,
    /// Wrapped node.
    pub elem: Box<Node>,
}

impl Height {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        Vec2::new(self.elem.get_size(data, ctx).x, self.value)
    }
}

impl Composite for Height {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        vec![Slot::child(&self.elem, data, area)]
    }
}

/// Caps the child's width.
#[derive(Debug)]
pub struct MaxWidth {
    /// Largest width.
    pub value: f32,
    /// Wrapped node.
    pub elem: Box<Node>,
}

impl MaxWidth {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        let size = self.elem.get_size(data, ctx);
        Vec2::new(size.x.min(self.value), size.y)
    }
}

impl Composite for MaxWidth {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        let area = Rect::new(area.x, area.y, area.width.min(self.value), area.height);
        vec![Slot::child(&self.elem, data, area)]
    }
}

/// Caps the child's height.
#[derive(Debug)]
pub struct MaxHeight {
    /// Largest height.
    pub value: f32,
    /// Wrapped node.
    pub elem: Box<Node>,
}

impl MaxHeight {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        let size = self.elem.get_size(data, ctx);
        Vec2::new(size.x, size.y.min(self.value))
    }
}

impl Composite for MaxHeight {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        let area = Rect::new(area.x, area.y, area.width, area.height.min(self.value));
        vec![Slot::child(&self.elem, data, area)]
    }
}

composite_element!(Margins, Margin, Width, Height, MaxWidth, MaxHeight);
