//! Nodes that react to the pointer and the keyboard.
//!
//! Focusable nodes are numbered by the `elem` structural counter; the
//! persistent state remembers the number of the focused one. An unfocused
//! node neither draws nor forwards events to its child, so counted nodes
//! inside it only exist while it is focused.

use super::{fire, Element, Node};
use crate::action::{merge, Action};
use crate::context::Context;
use crate::data::UiData;
use crate::input::{ButtonKind, KeyEvent, Propagation, WheelEvent};
use crate::layout::{Rect, Vec2};

/// Fires the bound callback on a primary press inside its area.
///
/// Binding anything but a callback is a contract violation and panics when
/// the button is pressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    /// Sound played on press; the configured click sound when absent.
    pub sound: Option<String>,
}

impl Element for Button {
    fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        if kind != ButtonKind::PrimaryPress || !area.contains(pos) {
            return None;
        }
        let callback = data.expect_callback("Button");
        let sound = self.sound.as_deref().or(ctx.config.click_sound.as_deref());
        Some(fire(callback, ctx, sound))
    }
}

/// Focus change caused by the pointer moving over or off a focusable node.
fn hover(elem: usize, ctx: &Context<'_>, kind: ButtonKind, area: Rect, pos: Vec2) -> Option<Action> {
    if kind != ButtonKind::Moved {
        return None;
    }
    if area.contains(pos) {
        // claimed on every move so the last visited of overlapping nodes keeps focus
        Some(Action::update(move |state| state.highlighted = Some(elem)))
    } else if ctx.state.is_highlighted(elem) {
        // another focusable may have claimed focus earlier in the same action
        Some(Action::update(move |state| {
            if state.highlighted == Some(elem) {
                state.highlighted = None;
            }
        }))
    } else {
        None
    }
}

fn focus_render(elem: &Node, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
    let id = ctx.next_elem();
    if ctx.state.is_highlighted(id) {
        ctx.set_focused_area(area);
        elem.render(data, ctx, area);
    }
}

fn focus_pointer(
    elem: &Node,
    data: &UiData,
    ctx: &mut Context<'_>,
    kind: ButtonKind,
    area: Rect,
    pos: Vec2,
) -> Option<Action> {
    let id = ctx.next_elem();
    let own = hover(id, ctx, kind, area, pos);
    let inner = if ctx.state.is_highlighted(id) {
        elem.on_pointer(data, ctx, kind, area, pos)
    } else {
        None
    };
    merge(own, inner, kind.propagation())
}

/// Shows its child only while it holds keyboard focus. Hovering takes focus.
#[derive(Debug)]
pub struct Focusable {
    /// Content shown while focused.
    pub elem: Box<Node>,
}

impl Element for Focusable {
    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        focus_render(&self.elem, data, ctx, area);
    }

    fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        focus_pointer(&self.elem, data, ctx, kind, area, pos)
    }

    fn on_key(&self, data: &UiData, ctx: &mut Context<'_>, key: &KeyEvent, area: Rect) -> Option<Action> {
        let id = ctx.next_elem();
        if ctx.state.is_highlighted(id) {
            self.elem.on_key(data, ctx, key, area)
        } else {
            None
        }
    }

    fn on_wheel(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, wheel: &WheelEvent) -> Option<Action> {
        let id = ctx.next_elem();
        if ctx.state.is_highlighted(id) {
            self.elem.on_wheel(data, ctx, area, wheel)
        } else {
            None
        }
    }
}

/// A [`Focusable`] that also applies key bindings while focused.
///
/// The bound record maps key names (`ENTER`, `LEFT`, ...) to callbacks; the
/// whole record is passed on to the child.
#[derive(Debug)]
pub struct FocusableKeys {
    /// Content shown while focused.
    pub elem: Box<Node>,
}

impl Element for FocusableKeys {
    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        focus_render(&self.elem, data, ctx, area);
    }

    fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        focus_pointer(&self.elem, data, ctx, kind, area, pos)
    }

    fn on_key(&self, data: &UiData, ctx: &mut Context<'_>, key: &KeyEvent, area: Rect) -> Option<Action> {
        let id = ctx.next_elem();
        if !ctx.state.is_highlighted(id) {
            return None;
        }
        let binding = match data.as_record() {
            Ok(bindings) => bindings.get(key.key.name()),
            Err(error) => {
                tracing::trace!(%error, "FocusableKeys without bindings");
                None
            }
        };
        let own = binding.map(|binding| fire(binding.expect_callback("FocusableKeys"), &*ctx, None));
        let inner = self.elem.on_key(data, ctx, key, area);
        merge(own, inner, Propagation::Exclusive)
    }

    fn on_wheel(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, wheel: &WheelEvent) -> Option<Action> {
        let id = ctx.next_elem();
        if ctx.state.is_highlighted(id) {
            self.elem.on_wheel(data, ctx, area, wheel)
        } else {
            None
        }
    }
}

/// Shows its child only while the pointer is over it.
///
/// Pointer and wheel events are tested against their own position, which
/// enclosing clippers hide outside their viewport. Drawing and keys use the
/// pointer sampled for the pass, hidden the same way.
#[derive(Debug)]
pub struct MouseOver {
    /// Hover content.
    pub elem: Box<Node>,
}

impl Element for MouseOver {
    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        if area.contains(ctx.pointer) {
            self.elem.render(data, ctx, area);
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
        if area.contains(pos) {
            self.elem.on_pointer(data, ctx, kind, area, pos)
        } else {
            None
        }
    }

    fn on_key(&self, data: &UiData, ctx: &mut Context<'_>, key: &KeyEvent, area: Rect) -> Option<Action> {
        if area.contains(ctx.pointer) {
            self.elem.on_key(data, ctx, key, area)
        } else {
            None
        }
    }

    fn on_wheel(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, wheel: &WheelEvent) -> Option<Action> {
        if area.contains(wheel.pos) {
            self.elem.on_wheel(data, ctx, area, wheel)
        } else {
            None
        }
    }
}

/// Fires the bound callback when a fixed key is pressed.
#[derive(Debug)]
pub struct KeyHandler {
    /// Trigger.
    pub key: KeyEvent,
    /// Wrapped node, bound to the same data.
    pub elem: Box<Node>,
}

/// Fires the bound callback when a key mapped to an action name is pressed.
#[derive(Debug)]
pub struct KeybindingHandler {
    /// Action name looked up in the keybinding map.
    pub binding: String,
    /// Wrapped node, bound to the same data.
    pub elem: Box<Node>,
}

macro_rules! key_wrapper {
    ($ty:ident, $name:literal, |$node:ident, $ctx:ident, $key:ident| $matches:expr) => {
        impl Element for $ty {
            fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
                self.elem.get_size(data, ctx)
            }

            fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
                self.elem.render(data, ctx, area);
            }

            fn on_pointer(
                &self,
                data: &UiData,
                ctx: &mut Context<'_>,
                kind: ButtonKind,
                area: Rect,
                pos: Vec2,
            ) -> Option<Action> {
                self.elem.on_pointer(data, ctx, kind, area, pos)
            }

            fn on_key(&self, data: &UiData, ctx: &mut Context<'_>, key: &KeyEvent, area: Rect) -> Option<Action> {
                let inner = self.elem.on_key(data, ctx, key, area);
                let triggered = {
                    let ($node, $ctx, $key) = (self, &*ctx, key);
                    $matches
                };
                let own = triggered.then(|| fire(data.expect_callback($name), &*ctx, None));
                merge(inner, own, Propagation::Exclusive)
            }

            fn on_wheel(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, wheel: &WheelEvent) -> Option<Action> {
                self.elem.on_wheel(data, ctx, area, wheel)
            }
        }
    };
}

key_wrapper!(KeyHandler, "KeyHandler", |node, _ctx, key| node.key == *key);
key_wrapper!(KeybindingHandler, "KeybindingHandler", |node, ctx, key| ctx
    .keybindings
    .matches(&node.binding, key));

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::super::{Chain, Fill, Text};
    use super::*;
    use crate::data::Callback;
    use crate::input::Key;
    use crate::style::{Color, Font};
    use std::cell::Cell;
    use std::rc::Rc;

    fn focusable() -> Node {
        Node::from(Focusable {
            elem: Box::new(Node::from(Fill { color: Color::YELLOW })),
        })
    }

    fn counter() -> (Rc<Cell<u32>>, UiData) {
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        let data = UiData::callback(move || {
            sink.set(sink.get() + 1);
            false
        });
        (hits, data)
    }

    #[test]
    fn test_button_fires_on_press_inside() {
        let mut fixture = Fixture::new();
        let (hits, data) = counter();
        let button = Button::default();
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);

        let mut ctx = fixture.ctx();
        let miss = button.on_pointer(&data, &mut ctx, ButtonKind::PrimaryPress, area, Vec2::new(20.0, 5.0));
        let moved = button.on_pointer(&data, &mut ctx, ButtonKind::Moved, area, Vec2::new(5.0, 5.0));
        let hit = button.on_pointer(&data, &mut ctx, ButtonKind::PrimaryPress, area, Vec2::new(5.0, 5.0));
        drop(ctx);

        assert!(miss.is_none() && moved.is_none());
        // nothing runs until the host runs the action
        assert_eq!(hits.get(), 0);
        fixture.run(hit);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    #[should_panic(expected = "Button expects a callback")]
    fn test_button_on_label_is_fatal() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let _ = Button::default().on_pointer(
            &UiData::label("x"),
            &mut ctx,
            ButtonKind::PrimaryPress,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Vec2::new(1.0, 1.0),
        );
    }

    #[test]
    fn test_hover_moves_focus_between_siblings() {
        let mut fixture = Fixture::new();
        let node = Chain {
            elems: vec![focusable(), focusable()],
        };
        // both cover the same area; pointer over it claims the later one too
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut ctx = fixture.ctx();
        let action = node.on_pointer(&UiData::default(), &mut ctx, ButtonKind::Moved, area, Vec2::new(1.0, 1.0));
        drop(ctx);
        fixture.run(action);
        assert_eq!(fixture.state.highlighted, Some(1));

        let mut ctx = fixture.ctx();
        let action = node.on_pointer(&UiData::default(), &mut ctx, ButtonKind::Moved, area, Vec2::new(50.0, 1.0));
        drop(ctx);
        fixture.run(action);
        assert_eq!(fixture.state.highlighted, None);
    }

    #[test]
    fn test_overlapping_focus_is_stable_under_repeated_moves() {
        let mut fixture = Fixture::new();
        fixture.state.highlighted = Some(1);
        let node = Chain {
            elems: vec![focusable(), focusable()],
        };
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);
        for _ in 0..4 {
            let mut ctx = fixture.ctx();
            let action = node.on_pointer(&UiData::default(), &mut ctx, ButtonKind::Moved, area, Vec2::new(5.0, 5.0));
            drop(ctx);
            fixture.run(action);
            assert_eq!(fixture.state.highlighted, Some(1));
        }
    }

    #[test]
    fn test_only_focused_renders() {
        let mut fixture = Fixture::new();
        fixture.state.highlighted = Some(1);
        let node = Chain {
            elems: vec![focusable(), focusable(), focusable()],
        };
        let mut ctx = fixture.ctx();
        node.render(&UiData::default(), &mut ctx, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(ctx.counters().elem, 3);
        drop(ctx);

        assert_eq!(fixture.renderer.commands().len(), 1);
    }

    #[test]
    fn test_focusable_keys_apply_only_when_focused() {
        let mut fixture = Fixture::new();
        let (hits, callback) = counter();
        let node = FocusableKeys {
            elem: Box::new(Node::from(Chain::default())),
        };
        let data = UiData::record([("ENTER", callback)]);
        let enter = KeyEvent::new(Key::Enter);
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);

        let mut ctx = fixture.ctx();
        assert!(node.on_key(&data, &mut ctx, &enter, area).is_none());
        drop(ctx);

        fixture.state.highlighted = Some(0);
        let mut ctx = fixture.ctx();
        let action = node.on_key(&data, &mut ctx, &enter, area);
        let other = node.on_key(&data, &mut ctx, &KeyEvent::new(Key::Space), area);
        drop(ctx);
        assert!(other.is_none());
        fixture.run(action);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_mouse_over_uses_pointer() {
        let mut fixture = Fixture::new();
        let node = MouseOver {
            elem: Box::new(Node::from(Fill { color: Color::GRAY })),
        };
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);

        let mut ctx = fixture.ctx();
        node.render(&UiData::default(), &mut ctx, area);
        drop(ctx);
        assert!(fixture.renderer.commands().is_empty());

        fixture.point(5.0, 5.0);
        let mut ctx = fixture.ctx();
        node.render(&UiData::default(), &mut ctx, area);
        drop(ctx);
        assert_eq!(fixture.renderer.commands().len(), 1);
    }

    #[test]
    fn test_mouse_over_uses_event_position() {
        let mut fixture = Fixture::new();
        let (hits, data) = counter();
        let node = MouseOver {
            elem: Box::new(Node::from(Button::default())),
        };
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);

        // the sampled pointer is over the node, the event is not
        fixture.point(5.0, 5.0);
        let mut ctx = fixture.ctx();
        let hidden = node.on_pointer(&data, &mut ctx, ButtonKind::PrimaryPress, area, Vec2::NOWHERE);
        let hit = node.on_pointer(&data, &mut ctx, ButtonKind::PrimaryPress, area, Vec2::new(5.0, 5.0));
        drop(ctx);

        assert!(hidden.is_none());
        fixture.run(hit);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_key_handlers() {
        let mut fixture = Fixture::new();
        fixture.keys.bind("MENU_BACK", KeyEvent::new(Key::Escape));
        let (hits, data) = counter();
        let text = || {
            Box::new(Node::from(Text {
                size: None,
                color: Color::WHITE,
                font: Font::Text,
            }))
        };
        let fixed = KeyHandler {
            key: KeyEvent::new(Key::Enter),
            elem: text(),
        };
        let bound = KeybindingHandler {
            binding: "MENU_BACK".to_owned(),
            elem: text(),
        };
        let area = Rect::new(0.0, 0.0, 10.0, 10.0);

        let mut ctx = fixture.ctx();
        let a = fixed.on_key(&data, &mut ctx, &KeyEvent::new(Key::Enter), area);
        let b = bound.on_key(&data, &mut ctx, &KeyEvent::new(Key::Escape), area);
        let c = bound.on_key(&data, &mut ctx, &KeyEvent::new(Key::Enter), area);
        drop(ctx);

        assert!(c.is_none());
        fixture.run(a);
        fixture.run(b);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_highlight_builtin_through_key_handler() {
        let mut fixture = Fixture::new();
        fixture.state.focusable_count = 2;
        let node = KeyHandler {
            key: KeyEvent::new(Key::Down),
            elem: Box::new(Node::from(Chain::default())),
        };
        let data = UiData::from(Callback::builtin(crate::data::Builtin::HighlightNext));
        let mut ctx = fixture.ctx();
        let action = node.on_key(&data, &mut ctx, &KeyEvent::new(Key::Down), Rect::ZERO);
        drop(ctx);

        fixture.run(action);
        assert_eq!(fixture.state.highlighted, Some(0));
    }
}
