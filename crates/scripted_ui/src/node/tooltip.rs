//! Delayed hover overlay.

use std::time::Duration;

use super::{Element, Node};
use crate::action::{merge, Action};
use crate::context::Context;
use crate::data::UiData;
use crate::input::{ButtonKind, KeyEvent, WheelEvent};
use crate::layout::{Rect, Vec2};

/// Shows `tooltip` in the top layer once the pointer has rested over `elem`
/// for the delay.
///
/// Leaving the area forgets the timer; coming back waits the full delay again.
///
/// The overlay is drawn but never receives events, so it must not contain
/// tooltips, focusable nodes or sliders: those would be counted while
/// rendering only, renumbering every counted node visited after it.
#[derive(Debug)]
pub struct Tooltip {
    /// Overlay content, bound to the same data as `elem`.
    pub tooltip: Box<Node>,
    /// Wrapped node.
    pub elem: Box<Node>,
    /// Hover delay; the configured delay when absent.
    pub delay: Option<Duration>,
}

impl Tooltip {
    fn delay(&self, ctx: &Context<'_>) -> Duration {
        self.delay.unwrap_or_else(|| ctx.config.tooltip_delay())
    }

    fn visible(id: usize, ctx: &Context<'_>, area: Rect) -> bool {
        area.contains(ctx.pointer)
            && ctx
                .state
                .tooltip_timeouts
                .get(&id)
                .is_some_and(|timeout| ctx.now >= *timeout)
    }
}

/// Anchors an overlay of `size` below `area`, keeping it on `screen`.
///
/// The overlay flips above the area when it would run off the bottom and is
/// shifted left when it would run off the right.
fn overlay_bounds(area: Rect, size: Vec2, screen: Vec2) -> Rect {
    let mut x = area.x;
    let mut y = area.bottom();
    if x + size.x > screen.x {
        x = screen.x - size.x;
    }
    if y + size.y > screen.y {
        y = area.y - size.y;
    }
    Rect::new(x.max(0.0), y.max(0.0), size.x, size.y)
}

impl Element for Tooltip {
    fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.elem.get_size(data, ctx)
    }

    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        let id = ctx.next_tooltip();
        self.elem.render(data, ctx, area);
        if !Self::visible(id, ctx, area) {
            return;
        }
        let size = self.tooltip.get_size(data, ctx);
        let bounds = overlay_bounds(area, size, ctx.renderer.screen_size());
        ctx.renderer.push_top_layer();
        self.tooltip.render(data, ctx, bounds);
        ctx.renderer.pop_top_layer();
    }

    fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        let id = ctx.next_tooltip();
        let inner = self.elem.on_pointer(data, ctx, kind, area, pos);
        if kind != ButtonKind::Moved {
            return inner;
        }
        let armed = ctx.state.tooltip_timeouts.contains_key(&id);
        let own = if area.contains(pos) && !armed {
            let timeout = ctx.now + self.delay(ctx);
            Some(Action::update(move |state| {
                state.tooltip_timeouts.entry(id).or_insert(timeout);
            }))
        } else if !area.contains(pos) && armed {
            Some(Action::update(move |state| {
                state.tooltip_timeouts.remove(&id);
            }))
        } else {
            None
        };
        merge(inner, own, kind.propagation())
    }

    fn on_key(&self, data: &UiData, ctx: &mut Context<'_>, key: &KeyEvent, area: Rect) -> Option<Action> {
        self.elem.on_key(data, ctx, key, area)
    }

    fn on_wheel(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, wheel: &WheelEvent) -> Option<Action> {
        self.elem.on_wheel(data, ctx, area, wheel)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::super::{Fill, Label};
    use super::*;
    use crate::render::RenderCommand;
    use crate::style::{Color, Font};

    fn tooltip() -> Tooltip {
        Tooltip {
            tooltip: Box::new(Node::from(Label {
                text: "tip".to_owned(),
                size: Some(10.0),
                color: Color::WHITE,
                font: Font::Text,
            })),
            elem: Box::new(Node::from(Fill { color: Color::GRAY })),
            delay: Some(Duration::from_millis(300)),
        }
    }

    const AREA: Rect = Rect::new(10.0, 10.0, 50.0, 20.0);

    fn hover(fixture: &mut Fixture, node: &Tooltip, at_ms: u64, x: f32, y: f32) {
        fixture.clock.set_millis(at_ms);
        fixture.point(x, y);
        let mut ctx = fixture.ctx();
        let action = node.on_pointer(&UiData::default(), &mut ctx, ButtonKind::Moved, AREA, Vec2::new(x, y));
        drop(ctx);
        fixture.run(action);
    }

    fn shown_at(fixture: &mut Fixture, node: &Tooltip, at_ms: u64) -> bool {
        fixture.clock.set_millis(at_ms);
        fixture.renderer.begin_frame();
        let mut ctx = fixture.ctx();
        node.render(&UiData::default(), &mut ctx, AREA);
        drop(ctx);
        !fixture.renderer.overlay().is_empty()
    }

    #[test]
    fn test_shows_after_delay() {
        let mut fixture = Fixture::new();
        let node = tooltip();
        hover(&mut fixture, &node, 0, 20.0, 15.0);

        assert!(!shown_at(&mut fixture, &node, 299));
        assert!(shown_at(&mut fixture, &node, 300));
        assert_eq!(
            fixture.renderer.overlay(),
            [RenderCommand::Text {
                text: "tip".to_owned(),
                pos: Vec2::new(10.0, 30.0),
                style: crate::style::TextStyle {
                    font: Font::Text,
                    size: 10.0,
                    color: Color::WHITE,
                },
            }]
        );
    }

    #[test]
    fn test_moving_within_keeps_timer() {
        let mut fixture = Fixture::new();
        let node = tooltip();
        hover(&mut fixture, &node, 0, 20.0, 15.0);
        hover(&mut fixture, &node, 200, 40.0, 15.0);

        assert_eq!(fixture.state.tooltip_timeouts.get(&0), Some(&Duration::from_millis(300)));
    }

    #[test]
    fn test_leaving_restarts_delay() {
        let mut fixture = Fixture::new();
        let node = tooltip();
        hover(&mut fixture, &node, 0, 20.0, 15.0);
        hover(&mut fixture, &node, 400, 200.0, 200.0);
        assert!(fixture.state.tooltip_timeouts.is_empty());

        hover(&mut fixture, &node, 500, 20.0, 15.0);
        assert!(!shown_at(&mut fixture, &node, 700));
        assert!(shown_at(&mut fixture, &node, 800));
    }

    #[test]
    fn test_overlay_stays_on_screen() {
        let screen = Vec2::new(400.0, 300.0);
        let size = Vec2::new(100.0, 40.0);

        assert_eq!(
            overlay_bounds(Rect::new(10.0, 10.0, 50.0, 20.0), size, screen),
            Rect::new(10.0, 30.0, 100.0, 40.0)
        );
        assert_eq!(
            overlay_bounds(Rect::new(350.0, 270.0, 50.0, 20.0), size, screen),
            Rect::new(300.0, 230.0, 100.0, 40.0)
        );
    }
}
