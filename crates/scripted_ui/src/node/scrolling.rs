//! Scroll viewports, their scrollbars and value sliders.
//!
//! A [`Scrollable`] owns one scroll group. Its scrollbar child is visited with
//! that group in effect, so [`Scroller`] and [`ScrollButton`] nodes inside the
//! scrollbar drive the right [`ScrollPosition`](crate::ScrollPosition) without
//! naming it.
//!
//! Scroll offsets ease over time. Slider positions do not: a slider follows the
//! pointer directly.

use super::{Element, Node};
use crate::action::{merge, Action};
use crate::context::Context;
use crate::data::UiData;
use crate::input::{ButtonKind, KeyEvent, Propagation, WheelEvent};
use crate::layout::{Rect, Vec2};
use crate::state::{ScrollGrab, SliderState};

/// Clips a tall child to its area and scrolls it vertically.
///
/// The scrollbar is laid out at the right edge, at its preferred width, and
/// only exists while the child overflows.
#[derive(Debug)]
pub struct Scrollable {
    /// Scrollbar content, usually a [`Scroller`] between two [`ScrollButton`]s.
    pub scrollbar: Box<Node>,
    /// Scrolled content.
    pub elem: Box<Node>,
    /// Scroll group holding the offset.
    pub group: usize,
}

/// Child and scrollbar areas of an overflowing [`Scrollable`].
struct Overflow {
    viewport: Rect,
    content: Rect,
    bar: Rect,
}

impl Scrollable {
    #[allow(clippy::cast_possible_truncation)]
    fn overflow(&self, data: &UiData, ctx: &Context<'_>, area: Rect) -> Option<Overflow> {
        let height = self.elem.get_size(data, ctx).y;
        if height <= area.height {
            return None;
        }
        let bar_width = self.scrollbar.get_size(data, ctx).x.min(area.width);
        let offset = ctx.state.scroll_offset(self.group, ctx.now) as f32;
        let viewport = Rect::new(area.x, area.y, area.width - bar_width, area.height);
        Some(Overflow {
            viewport,
            content: Rect::new(area.x, area.y - offset, viewport.width, height),
            bar: Rect::new(viewport.right(), area.y, bar_width, area.height),
        })
    }

    /// Moves the target offset so `focused` ends up inside `viewport`.
    fn reveal(&self, ctx: &mut Context<'_>, focused: Rect, viewport: Rect) {
        let shift = if focused.y < viewport.y {
            focused.y - viewport.y
        } else if focused.bottom() > viewport.bottom() {
            (focused.bottom() - viewport.bottom()).min(focused.y - viewport.y)
        } else {
            return;
        };
        let now = ctx.now;
        let position = ctx.state.scroll_position(self.group);
        let target = position.get(now) + f64::from(shift);
        tracing::trace!(group = self.group, target, "revealing focused node");
        position.set(target, now);
    }

    fn wheel_action(&self, ctx: &Context<'_>, amount: f32, jump: bool) -> Action {
        let group = self.group;
        let now = ctx.now;
        let amount = f64::from(amount);
        Action::update(move |state| {
            let position = state.scroll_position(group);
            if jump {
                let value = position.get(now) + amount;
                position.reset(value);
            } else {
                position.add(amount, now);
            }
        })
    }
}

impl Element for Scrollable {
    fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.elem.get_size(data, ctx)
    }

    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        let height = self.elem.get_size(data, ctx).y;
        let max = f64::from((height - area.height).max(0.0));
        ctx.state
            .scroll_position(self.group)
            .set_bounds(0.0, max, f64::from(area.y));

        let Some(layout) = self.overflow(data, ctx, area) else {
            self.elem.render(data, ctx, area);
            return;
        };

        let outer_focus = ctx.take_focused_area();
        ctx.renderer.push_clip(layout.viewport);
        ctx.with_pointer_within(layout.viewport, |ctx| self.elem.render(data, ctx, layout.content));
        ctx.renderer.pop_clip();
        match ctx.take_focused_area() {
            Some(focused) => {
                if ctx.state.reveal_focus {
                    self.reveal(ctx, focused, layout.viewport);
                }
                ctx.set_focused_area(focused);
            }
            None => {
                if let Some(outer) = outer_focus {
                    ctx.set_focused_area(outer);
                }
            }
        }

        ctx.with_scroll_group(self.group, |ctx| self.scrollbar.render(data, ctx, layout.bar));
    }

    fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        let Some(layout) = self.overflow(data, ctx, area) else {
            return self.elem.on_pointer(data, ctx, kind, area, pos);
        };
        let step = ctx.config.wheel_step;
        let own = match kind {
            ButtonKind::WheelUp if area.contains(pos) => Some(self.wheel_action(ctx, -step, false)),
            ButtonKind::WheelDown if area.contains(pos) => Some(self.wheel_action(ctx, step, false)),
            _ => None,
        };
        let masked = if layout.viewport.contains(pos) { pos } else { Vec2::NOWHERE };
        let inner = self.elem.on_pointer(data, ctx, kind, layout.content, masked);
        let bar = ctx.with_scroll_group(self.group, |ctx| {
            self.scrollbar.on_pointer(data, ctx, kind, layout.bar, pos)
        });
        let propagation = kind.propagation();
        merge(merge(own, inner, propagation), bar, propagation)
    }

    fn on_key(&self, data: &UiData, ctx: &mut Context<'_>, key: &KeyEvent, area: Rect) -> Option<Action> {
        let action = match self.overflow(data, ctx, area) {
            Some(layout) => {
                let inner = ctx.with_pointer_within(layout.viewport, |ctx| {
                    self.elem.on_key(data, ctx, key, layout.content)
                });
                let bar = ctx.with_scroll_group(self.group, |ctx| self.scrollbar.on_key(data, ctx, key, layout.bar));
                merge(inner, bar, Propagation::Exclusive)
            }
            None => self.elem.on_key(data, ctx, key, area),
        };
        action.map(|action| action.then(Action::update(|state| state.reveal_focus = true)))
    }

    fn on_wheel(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, wheel: &WheelEvent) -> Option<Action> {
        let Some(layout) = self.overflow(data, ctx, area) else {
            return self.elem.on_wheel(data, ctx, area, wheel);
        };
        let own = if area.contains(wheel.pos) && wheel.delta.y != 0.0 {
            // a fast stream of wheel events (trackpad) jumps instead of easing
            let jump = wheel.dt < ctx.config.scroll_ease();
            Some(self.wheel_action(ctx, -wheel.delta.y * ctx.config.wheel_step, jump))
        } else {
            None
        };
        let mut masked = *wheel;
        if !layout.viewport.contains(wheel.pos) {
            masked.pos = Vec2::NOWHERE;
        }
        let inner = self.elem.on_wheel(data, ctx, layout.content, &masked);
        let bar = ctx.with_scroll_group(self.group, |ctx| self.scrollbar.on_wheel(data, ctx, layout.bar, wheel));
        merge(merge(own, inner, Propagation::Exclusive), bar, Propagation::Exclusive)
    }
}

/// Ratio of the track at which a thumb of `extent` would start at `start`.
fn track_ratio(track_start: f32, track_len: f32, extent: f32, start: f32) -> f64 {
    let room = track_len - extent;
    if room <= 0.0 || !start.is_finite() {
        return 0.0;
    }
    f64::from(((start - track_start) / room).clamp(0.0, 1.0))
}

/// Scrollbar thumb. Its child is drawn at the position matching the scroll
/// ratio of the enclosing scrollbar's group.
#[derive(Debug)]
pub struct Scroller {
    /// Thumb content; its preferred height is the thumb height.
    pub slider: Box<Node>,
}

impl Scroller {
    #[allow(clippy::cast_possible_truncation)]
    fn thumb(&self, data: &UiData, ctx: &Context<'_>, area: Rect) -> Rect {
        let height = self.slider.get_size(data, ctx).y.min(area.height);
        let ratio = ctx.state.scroll_ratio(ctx.scroll_group(), ctx.now) as f32;
        Rect::new(area.x, area.y + ratio * (area.height - height), area.width, height)
    }
}

impl Element for Scroller {
    fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.slider.get_size(data, ctx)
    }

    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        let thumb = self.thumb(data, ctx, area);
        self.slider.render(data, ctx, thumb);
    }

    fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        let group = ctx.scroll_group();
        let now = ctx.now;
        let thumb = self.thumb(data, ctx, area);
        match kind {
            ButtonKind::PrimaryPress if area.contains(pos) => {
                let grab = if thumb.contains(pos) {
                    ScrollGrab {
                        group,
                        offset: pos.y - thumb.y,
                    }
                } else {
                    ScrollGrab {
                        group,
                        offset: thumb.height / 2.0,
                    }
                };
                let jump = (!thumb.contains(pos)).then(|| track_ratio(area.y, area.height, thumb.height, pos.y - grab.offset));
                Some(Action::update(move |state| {
                    if let Some(ratio) = jump {
                        state.scroll_position(group).set_ratio(ratio, now);
                    }
                    state.scroll_button_held = Some(grab);
                }))
            }
            ButtonKind::Moved => {
                let grab = ctx.state.scroll_button_held.filter(|grab| grab.group == group)?;
                if !pos.y.is_finite() {
                    return None;
                }
                let ratio = track_ratio(area.y, area.height, thumb.height, pos.y - grab.offset);
                Some(Action::update(move |state| state.scroll_position(group).set_ratio(ratio, now)))
            }
            ButtonKind::Release => ctx
                .state
                .scroll_button_held
                .is_some_and(|grab| grab.group == group)
                .then(|| Action::update(|state| state.scroll_button_held = None)),
            _ => None,
        }
    }
}

/// Scrolls the enclosing scrollbar's group by a fixed step when pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollButton {
    /// Steps per press; negative scrolls towards the start.
    pub direction: f32,
}

impl Element for ScrollButton {
    fn on_pointer(
        &self,
        _data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        if kind != ButtonKind::PrimaryPress || !area.contains(pos) {
            return None;
        }
        let group = ctx.scroll_group();
        let now = ctx.now;
        let amount = f64::from(self.direction * ctx.config.scroll_button_step);
        Some(Action::update(move |state| state.scroll_position(group).add(amount, now)))
    }
}

/// Horizontal value slider bound to a slider callback.
///
/// In continuous mode every intermediate position is reported while dragging;
/// otherwise the position is reported once, on release.
#[derive(Debug)]
pub struct Slider {
    /// Thumb content; its preferred width is the thumb width.
    pub slider: Box<Node>,
    /// Report while dragging instead of on release.
    pub continuous: bool,
}

impl Slider {
    fn current(data: &UiData, ctx: &Context<'_>, id: usize) -> SliderState {
        let initial = data.as_callback().map_or(0.0, |callback| callback.initial_ratio());
        ctx.state.slider(id, initial)
    }

    fn thumb_width(&self, data: &UiData, ctx: &Context<'_>, area: Rect) -> f32 {
        self.slider.get_size(data, ctx).x.min(area.width)
    }

    fn ratio_at(area: Rect, width: f32, x: f32) -> f64 {
        track_ratio(area.x, area.width, width, x - width / 2.0)
    }

    /// Stores the slider state and, when `report` is set, tells the callback.
    fn update(&self, data: &UiData, id: usize, slider: SliderState, report: bool) -> Action {
        let callback = data.expect_callback("Slider").clone();
        Action::new(move |state, _| {
            state.slider_states.insert(id, slider);
            report && callback.invoke_ratio(slider.ratio, state)
        })
    }
}

impl Element for Slider {
    fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.slider.get_size(data, ctx)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        let id = ctx.next_slider();
        let ratio = Self::current(data, ctx, id).ratio as f32;
        let width = self.thumb_width(data, ctx, area);
        let thumb = Rect::new(area.x + ratio * (area.width - width), area.y, width, area.height);
        self.slider.render(data, ctx, thumb);
    }

    fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        let id = ctx.next_slider();
        let current = Self::current(data, ctx, id);
        let width = self.thumb_width(data, ctx, area);
        match kind {
            ButtonKind::PrimaryPress if area.contains(pos) => {
                let slider = SliderState {
                    ratio: Self::ratio_at(area, width, pos.x),
                    dragging: true,
                };
                Some(self.update(data, id, slider, self.continuous))
            }
            ButtonKind::Moved if current.dragging && pos.x.is_finite() => {
                let slider = SliderState {
                    ratio: Self::ratio_at(area, width, pos.x),
                    dragging: true,
                };
                Some(self.update(data, id, slider, self.continuous))
            }
            ButtonKind::Release if current.dragging => {
                let slider = SliderState {
                    dragging: false,
                    ..current
                };
                Some(self.update(data, id, slider, !self.continuous))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::super::testing::Fixture;
    use super::super::{Button, Fill, Height, Width};
    use super::*;
    use crate::data::Callback;
    use crate::render::RenderCommand;
    use crate::style::Color;

    fn block(width: f32, height: f32, color: Color) -> Node {
        Node::from(Width {
            value: width,
            elem: Box::new(Node::from(Height {
                value: height,
                elem: Box::new(Node::from(Fill { color })),
            })),
        })
    }

    fn scrollable(content: Node, scrollbar: Node) -> Scrollable {
        Scrollable {
            scrollbar: Box::new(scrollbar),
            elem: Box::new(content),
            group: 0,
        }
    }

    const AREA: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn render(fixture: &mut Fixture, node: &Scrollable, data: &UiData) {
        fixture.renderer.begin_frame();
        let mut ctx = fixture.ctx();
        node.render(data, &mut ctx, AREA);
    }

    #[test]
    fn test_fitting_content_has_no_scrollbar() {
        let mut fixture = Fixture::new();
        let node = scrollable(block(80.0, 50.0, Color::RED), block(10.0, 0.0, Color::BLUE));
        render(&mut fixture, &node, &UiData::default());

        assert_eq!(
            fixture.renderer.commands(),
            [RenderCommand::Rect {
                bounds: AREA,
                color: Color::RED
            }]
        );
    }

    #[test]
    fn test_overflow_clips_and_offsets() {
        let mut fixture = Fixture::new();
        let node = scrollable(block(80.0, 300.0, Color::RED), block(10.0, 0.0, Color::BLUE));
        render(&mut fixture, &node, &UiData::default());

        assert_eq!(
            fixture.renderer.commands(),
            [
                RenderCommand::PushClip {
                    bounds: Rect::new(0.0, 0.0, 90.0, 100.0)
                },
                RenderCommand::Rect {
                    bounds: Rect::new(0.0, 0.0, 90.0, 300.0),
                    color: Color::RED
                },
                RenderCommand::PopClip,
                RenderCommand::Rect {
                    bounds: Rect::new(90.0, 0.0, 10.0, 100.0),
                    color: Color::BLUE
                },
            ]
        );

        fixture.state.scroll_position(0).reset(500.0);
        render(&mut fixture, &node, &UiData::default());
        assert_eq!(
            fixture.renderer.commands()[1],
            RenderCommand::Rect {
                bounds: Rect::new(0.0, -200.0, 90.0, 300.0),
                color: Color::RED
            }
        );
    }

    #[test]
    fn test_wheel_eases_or_jumps() {
        let mut fixture = Fixture::new();
        let node = scrollable(block(80.0, 300.0, Color::RED), block(10.0, 0.0, Color::BLUE));
        render(&mut fixture, &node, &UiData::default());

        let slow = WheelEvent {
            pos: Vec2::new(50.0, 50.0),
            delta: Vec2::new(0.0, -1.0),
            dt: Duration::from_secs(1),
        };
        let mut ctx = fixture.ctx();
        let action = node.on_wheel(&UiData::default(), &mut ctx, AREA, &slow);
        drop(ctx);
        assert!(!fixture.run(action));
        assert_eq!(fixture.state.scroll_offset(0, Duration::from_millis(100)), 40.0);

        let fast = WheelEvent {
            dt: Duration::from_millis(5),
            ..slow
        };
        fixture.clock.set_millis(100);
        let mut ctx = fixture.ctx();
        let action = node.on_wheel(&UiData::default(), &mut ctx, AREA, &fast);
        drop(ctx);
        fixture.run(action);
        assert_eq!(fixture.state.scroll_offset(0, Duration::from_millis(100)), 80.0);

        // outside the area nothing scrolls
        let away = WheelEvent {
            pos: Vec2::new(150.0, 50.0),
            ..fast
        };
        let mut ctx = fixture.ctx();
        assert!(node.on_wheel(&UiData::default(), &mut ctx, AREA, &away).is_none());
    }

    #[test]
    fn test_wheel_buttons_scroll() {
        let mut fixture = Fixture::new();
        let node = scrollable(block(80.0, 300.0, Color::RED), block(10.0, 0.0, Color::BLUE));
        render(&mut fixture, &node, &UiData::default());

        let mut ctx = fixture.ctx();
        let action = node.on_pointer(&UiData::default(), &mut ctx, ButtonKind::WheelDown, AREA, Vec2::new(5.0, 5.0));
        drop(ctx);
        fixture.run(action);
        assert_eq!(fixture.state.scroll_offset(0, Duration::from_secs(1)), 40.0);
    }

    #[test]
    fn test_hidden_content_cannot_be_clicked() {
        let mut fixture = Fixture::new();
        let content = Node::from(Height {
            value: 300.0,
            elem: Box::new(Node::from(Button { sound: None })),
        });
        let node = scrollable(content, block(10.0, 0.0, Color::BLUE));
        let data = UiData::from(Callback::new(|| true));
        render(&mut fixture, &node, &data);

        let mut ctx = fixture.ctx();
        let below = node.on_pointer(&data, &mut ctx, ButtonKind::PrimaryPress, AREA, Vec2::new(50.0, 150.0));
        assert!(below.is_none());
        let visible = node.on_pointer(&data, &mut ctx, ButtonKind::PrimaryPress, AREA, Vec2::new(50.0, 50.0));
        drop(ctx);
        assert!(fixture.run(visible));
    }

    #[test]
    fn test_scroller_drag() {
        let mut fixture = Fixture::new();
        let scrollbar = Node::from(Scroller {
            slider: Box::new(block(10.0, 20.0, Color::BLUE)),
        });
        let node = scrollable(block(80.0, 300.0, Color::RED), scrollbar);
        render(&mut fixture, &node, &UiData::default());
        let later = Duration::from_secs(1);

        // press on the track centers the thumb on the pointer
        let mut ctx = fixture.ctx();
        let press = node.on_pointer(&UiData::default(), &mut ctx, ButtonKind::PrimaryPress, AREA, Vec2::new(95.0, 90.0));
        drop(ctx);
        fixture.run(press);
        assert_eq!(fixture.state.scroll_offset(0, later), 200.0);
        assert_eq!(fixture.state.scroll_button_held, Some(ScrollGrab { group: 0, offset: 10.0 }));

        let mut ctx = fixture.ctx();
        let drag = node.on_pointer(&UiData::default(), &mut ctx, ButtonKind::Moved, AREA, Vec2::new(0.0, 50.0));
        drop(ctx);
        fixture.run(drag);
        assert_eq!(fixture.state.scroll_offset(0, later), 100.0);

        let mut ctx = fixture.ctx();
        let release = node.on_pointer(&UiData::default(), &mut ctx, ButtonKind::Release, AREA, Vec2::new(0.0, 50.0));
        drop(ctx);
        fixture.run(release);
        assert!(fixture.state.scroll_button_held.is_none());
    }

    #[test]
    fn test_scroll_button_steps() {
        let mut fixture = Fixture::new();
        let button = ScrollButton { direction: -1.0 };
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);
        fixture.state.scroll_position(0).reset(100.0);

        let mut ctx = fixture.ctx();
        assert!(button.on_pointer(&UiData::default(), &mut ctx, ButtonKind::PrimaryPress, area, Vec2::new(20.0, 5.0)).is_none());
        let action = button.on_pointer(&UiData::default(), &mut ctx, ButtonKind::PrimaryPress, area, Vec2::new(5.0, 5.0));
        drop(ctx);
        fixture.run(action);
        assert_eq!(fixture.state.scroll_offset(0, Duration::from_secs(1)), 60.0);
    }

    fn recording_slider(initial: f64) -> (UiData, Rc<Cell<Option<f64>>>) {
        let reported = Rc::new(Cell::new(None));
        let sink = Rc::clone(&reported);
        let data = UiData::from(Callback::slider(initial, move |ratio| {
            sink.set(Some(ratio));
            false
        }));
        (data, reported)
    }

    fn slide(fixture: &mut Fixture, node: &Slider, data: &UiData, kind: ButtonKind, x: f32) {
        let mut ctx = fixture.ctx();
        let action = node.on_pointer(data, &mut ctx, kind, Rect::new(0.0, 0.0, 110.0, 10.0), Vec2::new(x, 5.0));
        drop(ctx);
        fixture.run(action);
    }

    #[test]
    fn test_slider_renders_initial_ratio() {
        let mut fixture = Fixture::new();
        let node = Slider {
            slider: Box::new(block(10.0, 10.0, Color::WHITE)),
            continuous: true,
        };
        let (data, _) = recording_slider(0.5);
        let mut ctx = fixture.ctx();
        node.render(&data, &mut ctx, Rect::new(0.0, 0.0, 110.0, 10.0));
        drop(ctx);

        assert_eq!(
            fixture.renderer.commands(),
            [RenderCommand::Rect {
                bounds: Rect::new(50.0, 0.0, 10.0, 10.0),
                color: Color::WHITE
            }]
        );
    }

    #[test]
    fn test_continuous_slider_reports_while_dragging() {
        let mut fixture = Fixture::new();
        let node = Slider {
            slider: Box::new(block(10.0, 10.0, Color::WHITE)),
            continuous: true,
        };
        let (data, reported) = recording_slider(0.0);

        slide(&mut fixture, &node, &data, ButtonKind::PrimaryPress, 80.0);
        assert_eq!(reported.get(), Some(0.75));
        slide(&mut fixture, &node, &data, ButtonKind::Moved, 30.0);
        assert_eq!(reported.get(), Some(0.25));
        slide(&mut fixture, &node, &data, ButtonKind::Release, 30.0);
        assert!(!fixture.state.slider(0, 0.0).dragging);

        // not dragging any more: moves are ignored
        slide(&mut fixture, &node, &data, ButtonKind::Moved, 80.0);
        assert_eq!(fixture.state.slider(0, 0.0).ratio, 0.25);
    }

    #[test]
    fn test_commit_slider_reports_on_release() {
        let mut fixture = Fixture::new();
        let node = Slider {
            slider: Box::new(block(10.0, 10.0, Color::WHITE)),
            continuous: false,
        };
        let (data, reported) = recording_slider(0.0);

        slide(&mut fixture, &node, &data, ButtonKind::PrimaryPress, 80.0);
        slide(&mut fixture, &node, &data, ButtonKind::Moved, 30.0);
        assert_eq!(reported.get(), None);
        slide(&mut fixture, &node, &data, ButtonKind::Release, 200.0);
        assert_eq!(reported.get(), Some(0.25));
    }

    #[test]
    #[should_panic(expected = "Slider expects a callback")]
    fn test_slider_on_label_is_fatal() {
        let mut fixture = Fixture::new();
        let node = Slider {
            slider: Box::new(block(10.0, 10.0, Color::WHITE)),
            continuous: true,
        };
        slide(&mut fixture, &node, &UiData::label("volume"), ButtonKind::PrimaryPress, 10.0);
    }
}
