//! The node catalog.
//!
//! Every node kind is a plain struct implementing [`Element`]; [`Node`] is the
//! closed set of kinds the declarative source can name. A node is immutable
//! once built. What it shows and how it reacts depends only on the
//! [`UiData`] bound to it, the persistent [`UiState`](crate::UiState) and the
//! pass [`Context`].
//!
//! ## Protocol
//!
//! ```text
//!   get_size   bottom-up   preferred footprint, no side effects
//!   render     top-down    draws into an area the parent decided
//!   on_*       top-down    returns an Action instead of acting
//! ```
//!
//! Containers share one implementation of the protocol: they describe their
//! children as [`Slot`]s (child node, bound data, area) and the helpers in this
//! module render or dispatch over those slots in traversal order.

use std::borrow::Cow;

use crate::action::{merge, Action};
use crate::context::Context;
use crate::data::{Builtin, Callback, UiData};
use crate::error::DataMismatch;
use crate::input::{ButtonKind, KeyEvent, Propagation, UiEvent, WheelEvent};
use crate::layout::{Rect, Vec2};
use crate::style::{Color, TextStyle};

mod containers;
mod interactive;
mod primitives;
mod routing;
mod scrolling;
mod tooltip;
mod wrappers;

pub use containers::{Chain, Horizontal, List, ListDirection, Vertical};
pub use interactive::{Button, Focusable, FocusableKeys, KeyHandler, KeybindingHandler, MouseOver};
pub use primitives::{Fill, Frame, Icons, Label, Paragraph, Text, Texture};
pub use routing::{If, IfNot, Using};
pub use scrolling::{ScrollButton, Scrollable, Scroller, Slider};
pub use tooltip::Tooltip;
pub use wrappers::{Height, Margin, Margins, MaxHeight, MaxWidth, Position, Width};

/// Size of the placeholder drawn for a record or list mismatch.
pub(crate) const CONTAINER_PLACEHOLDER: Vec2 = Vec2::new(100.0, 20.0);

/// Size of the placeholder drawn for a label mismatch.
pub(crate) const LABEL_PLACEHOLDER: Vec2 = Vec2::new(50.0, 20.0);

/// The render/size/event contract. Every operation defaults to nothing.
pub(crate) trait Element {
    /// Preferred footprint for `data`.
    fn get_size(&self, _data: &UiData, _ctx: &Context<'_>) -> Vec2 {
        Vec2::ZERO
    }

    /// Draws into `area`.
    fn render(&self, _data: &UiData, _ctx: &mut Context<'_>, _area: Rect) {}

    /// Reacts to a pointer button or movement.
    fn on_pointer(
        &self,
        _data: &UiData,
        _ctx: &mut Context<'_>,
        _kind: ButtonKind,
        _area: Rect,
        _pos: Vec2,
    ) -> Option<Action> {
        None
    }

    /// Reacts to a key press.
    fn on_key(&self, _data: &UiData, _ctx: &mut Context<'_>, _key: &KeyEvent, _area: Rect) -> Option<Action> {
        None
    }

    /// Reacts to the scroll wheel.
    fn on_wheel(&self, _data: &UiData, _ctx: &mut Context<'_>, _area: Rect, _wheel: &WheelEvent) -> Option<Action> {
        None
    }
}

macro_rules! nodes {
    ($($variant:ident => $tag:literal,)*) => {
        /// One node of a UI tree.
        #[derive(Debug)]
        pub enum Node {
            $(
                #[doc = concat!("`", $tag, "`")]
                $variant($variant),
            )*
        }

        impl Node {
            /// Name of the node kind in declarative source.
            #[must_use]
            pub const fn tag(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $tag,)*
                }
            }

            fn element(&self) -> &dyn Element {
                match self {
                    $(Self::$variant(node) => node,)*
                }
            }
        }

        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

nodes! {
    Texture => "Texture",
    Fill => "Fill",
    Frame => "Frame",
    Text => "Text",
    Label => "Label",
    Paragraph => "Paragraph",
    Icons => "Icons",
    Margins => "Margins",
    Margin => "Margin",
    Position => "Position",
    Width => "Width",
    Height => "Height",
    MaxWidth => "MaxWidth",
    MaxHeight => "MaxHeight",
    Chain => "Chain",
    Vertical => "Vertical",
    Horizontal => "Horizontal",
    List => "List",
    Using => "Using",
    If => "If",
    IfNot => "IfNot",
    Button => "Button",
    Focusable => "Focusable",
    FocusableKeys => "FocusableKeys",
    MouseOver => "MouseOver",
    KeyHandler => "KeyHandler",
    KeybindingHandler => "KeybindingHandler",
    Scrollable => "Scrollable",
    Scroller => "Scroller",
    ScrollButton => "ScrollButton",
    Slider => "Slider",
    Tooltip => "Tooltip",
}

impl Node {
    /// Preferred footprint of this node for `data`.
    #[must_use]
    pub fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        self.element().get_size(data, ctx)
    }

    /// Draws this node into `area`.
    pub fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        self.element().render(data, ctx, area);
    }

    /// Asks this node about a pointer event.
    pub fn on_pointer(
        &self,
        data: &UiData,
        ctx: &mut Context<'_>,
        kind: ButtonKind,
        area: Rect,
        pos: Vec2,
    ) -> Option<Action> {
        self.element().on_pointer(data, ctx, kind, area, pos)
    }

    /// Asks this node about a key press.
    pub fn on_key(&self, data: &UiData, ctx: &mut Context<'_>, key: &KeyEvent, area: Rect) -> Option<Action> {
        self.element().on_key(data, ctx, key, area)
    }

    /// Asks this node about a scroll-wheel event.
    pub fn on_wheel(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, wheel: &WheelEvent) -> Option<Action> {
        self.element().on_wheel(data, ctx, area, wheel)
    }

    /// Routes any event to the matching handler.
    pub fn on_event(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect, event: &UiEvent) -> Option<Action> {
        match event {
            UiEvent::Pointer { kind, pos } => self.on_pointer(data, ctx, *kind, area, *pos),
            UiEvent::Key(key) => self.on_key(data, ctx, key, area),
            UiEvent::Wheel(wheel) => self.on_wheel(data, ctx, area, wheel),
        }
    }

    /// Number of nodes in this subtree, this one included.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(|child| child.count()).sum::<usize>()
    }

    /// Direct children in traversal order.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Texture(_)
            | Self::Fill(_)
            | Self::Frame(_)
            | Self::Text(_)
            | Self::Label(_)
            | Self::Paragraph(_)
            | Self::Icons(_)
            | Self::Button(_)
            | Self::ScrollButton(_) => Vec::new(),
            Self::Margins(node) => vec![&*node.inside],
            Self::Margin(node) => vec![&*node.elem],
            Self::Position(node) => vec![&*node.elem],
            Self::Width(node) => vec![&*node.elem],
            Self::Height(node) => vec![&*node.elem],
            Self::MaxWidth(node) => vec![&*node.elem],
            Self::MaxHeight(node) => vec![&*node.elem],
            Self::Chain(node) => node.elems.iter().collect(),
            Self::Vertical(node) => node.elems.iter().collect(),
            Self::Horizontal(node) => node.elems.iter().collect(),
            Self::List(node) => vec![&*node.elem],
            Self::Using(node) => vec![&*node.elem],
            Self::If(node) => vec![&*node.elem],
            Self::IfNot(node) => vec![&*node.elem],
            Self::Focusable(node) => vec![&*node.elem],
            Self::FocusableKeys(node) => vec![&*node.elem],
            Self::MouseOver(node) => vec![&*node.elem],
            Self::KeyHandler(node) => vec![&*node.elem],
            Self::KeybindingHandler(node) => vec![&*node.elem],
            Self::Scrollable(node) => vec![&*node.elem, &*node.scrollbar],
            Self::Scroller(node) => vec![&*node.slider],
            Self::Slider(node) => vec![&*node.slider],
            Self::Tooltip(node) => vec![&*node.elem, &*node.tooltip],
        }
    }
}

/// One child of a container, as laid out for a particular pass.
pub(crate) enum Slot<'a> {
    /// A child node with its bound data and area.
    Child {
        node: &'a Node,
        data: Cow<'a, UiData>,
        area: Rect,
    },
    /// Drawn in place of children the data could not produce.
    Placeholder { error: DataMismatch, area: Rect },
}

impl<'a> Slot<'a> {
    pub(crate) fn child(node: &'a Node, data: &'a UiData, area: Rect) -> Self {
        Self::Child {
            node,
            data: Cow::Borrowed(data),
            area,
        }
    }
}

/// Containers that delegate the whole protocol to their children.
pub(crate) trait Composite {
    /// Children of this pass, in traversal order.
    fn slots<'a>(&'a self, data: &'a UiData, ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>>;
}

/// Implements [`Element`] for a [`Composite`] with an inherent `size` method.
macro_rules! composite_element {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::node::Element for $ty {
            fn get_size(&self, data: &$crate::data::UiData, ctx: &$crate::context::Context<'_>) -> $crate::layout::Vec2 {
                self.size(data, ctx)
            }

            fn render(&self, data: &$crate::data::UiData, ctx: &mut $crate::context::Context<'_>, area: $crate::layout::Rect) {
                let slots = $crate::node::Composite::slots(self, data, ctx, area);
                $crate::node::render_slots(slots, ctx);
            }

            fn on_pointer(
                &self,
                data: &$crate::data::UiData,
                ctx: &mut $crate::context::Context<'_>,
                kind: $crate::input::ButtonKind,
                area: $crate::layout::Rect,
                pos: $crate::layout::Vec2,
            ) -> Option<$crate::action::Action> {
                let slots = $crate::node::Composite::slots(self, data, ctx, area);
                $crate::node::pointer_slots(slots, ctx, kind, pos)
            }

            fn on_key(
                &self,
                data: &$crate::data::UiData,
                ctx: &mut $crate::context::Context<'_>,
                key: &$crate::input::KeyEvent,
                area: $crate::layout::Rect,
            ) -> Option<$crate::action::Action> {
                let slots = $crate::node::Composite::slots(self, data, ctx, area);
                $crate::node::key_slots(slots, ctx, key)
            }

            fn on_wheel(
                &self,
                data: &$crate::data::UiData,
                ctx: &mut $crate::context::Context<'_>,
                area: $crate::layout::Rect,
                wheel: &$crate::input::WheelEvent,
            ) -> Option<$crate::action::Action> {
                let slots = $crate::node::Composite::slots(self, data, ctx, area);
                $crate::node::wheel_slots(slots, ctx, wheel)
            }
        }
    )*};
}
pub(crate) use composite_element;

/// Action firing `callback`. Focus movement plays the navigation sound
/// instead of `sound`.
pub(crate) fn fire(callback: &Callback, ctx: &Context<'_>, sound: Option<&str>) -> Action {
    let sound = match callback.as_builtin() {
        Some(Builtin::HighlightNext | Builtin::HighlightPrevious) => ctx.config.navigate_sound.as_deref(),
        _ => sound,
    };
    Action::invoke(callback, sound)
}

/// Draws the red "not a ..." text for a data mismatch.
pub(crate) fn draw_mismatch(ctx: &mut Context<'_>, error: DataMismatch, pos: Vec2) {
    tracing::trace!(expected = %error.expected, found = %error.found, "data mismatch");
    let style = TextStyle::new(ctx.config.text_size, Color::RED);
    ctx.renderer.draw_text(&error.to_string(), pos, style);
}

pub(crate) fn render_slots(slots: Vec<Slot<'_>>, ctx: &mut Context<'_>) {
    for slot in slots {
        match slot {
            Slot::Child { node, data, area } => node.render(&data, ctx, area),
            Slot::Placeholder { error, area } => draw_mismatch(ctx, error, area.top_left()),
        }
    }
}

pub(crate) fn pointer_slots(
    slots: Vec<Slot<'_>>,
    ctx: &mut Context<'_>,
    kind: ButtonKind,
    pos: Vec2,
) -> Option<Action> {
    let mut result = None;
    for slot in slots {
        if let Slot::Child { node, data, area } = slot {
            let action = node.on_pointer(&data, ctx, kind, area, pos);
            result = merge(result, action, kind.propagation());
        }
    }
    result
}

pub(crate) fn key_slots(slots: Vec<Slot<'_>>, ctx: &mut Context<'_>, key: &KeyEvent) -> Option<Action> {
    let mut result = None;
    for slot in slots {
        if let Slot::Child { node, data, area } = slot {
            let action = node.on_key(&data, ctx, key, area);
            result = merge(result, action, Propagation::Exclusive);
        }
    }
    result
}

pub(crate) fn wheel_slots(slots: Vec<Slot<'_>>, ctx: &mut Context<'_>, wheel: &WheelEvent) -> Option<Action> {
    let mut result = None;
    for slot in slots {
        if let Slot::Child { node, data, area } = slot {
            let action = node.on_wheel(&data, ctx, area, wheel);
            result = merge(result, action, Propagation::Exclusive);
        }
    }
    result
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fixture owning everything a [`Context`] borrows.

    use crate::action::Action;
    use crate::capability::{KeybindingTable, ManualClock, NoSound};
    use crate::config::UiConfig;
    use crate::context::Context;
    use crate::layout::Vec2;
    use crate::render::CommandRenderer;
    use crate::state::UiState;

    pub(crate) struct Fixture {
        pub renderer: CommandRenderer,
        pub state: UiState,
        pub keys: KeybindingTable,
        pub config: UiConfig,
        pub clock: ManualClock,
    }

    impl Fixture {
        pub(crate) fn new() -> Self {
            Self {
                renderer: CommandRenderer::new(400.0, 300.0),
                state: UiState::new(),
                keys: KeybindingTable::new(),
                config: UiConfig::default(),
                clock: ManualClock::default(),
            }
        }

        pub(crate) fn ctx(&mut self) -> Context<'_> {
            Context::new(&mut self.renderer, &mut self.state, &self.keys, &self.config, &self.clock)
        }

        pub(crate) fn point(&mut self, x: f32, y: f32) {
            self.renderer.set_pointer(Vec2::new(x, y));
        }

        pub(crate) fn run(&mut self, action: Option<Action>) -> bool {
            action.is_some_and(|action| action.run(&mut self.state, &mut NoSound))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Fixture;
    use super::*;

    #[test]
    fn test_tags_and_counts() {
        let node = Node::from(Chain {
            elems: vec![Node::from(Fill { color: Color::RED }), Node::from(Fill { color: Color::BLUE })],
        });
        assert_eq!(node.tag(), "Chain");
        assert_eq!(node.count(), 3);
    }

    #[test]
    fn test_placeholder_slot_draws_red_text() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let error = UiData::label("x").as_list().unwrap_err();
        render_slots(
            vec![Slot::Placeholder {
                error,
                area: Rect::new(3.0, 4.0, 10.0, 10.0),
            }],
            &mut ctx,
        );
        drop(ctx);

        assert_eq!(fixture.renderer.texts(), vec!["not a list"]);
    }
}
