//! Per-frame entry points.
//!
//! ```text
//!   every frame      render(root, data, ctx, screen)
//!   every event      dispatch(root, data, ctx, event) -> Option<Action>
//!                    action.run(state, sound)
//! ```
//!
//! Both entry points restart the structural counters, so the same tree visited
//! with the same data numbers its focusable, tooltip and slider nodes the same
//! way in either pass.

use crate::action::Action;
use crate::capability::{Clock, KeybindingTable, SoundPlayer};
use crate::config::UiConfig;
use crate::context::Context;
use crate::data::UiData;
use crate::error::ConfigResult;
use crate::input::UiEvent;
use crate::layout::Rect;
use crate::node::Node;
use crate::render::Renderer;
use crate::state::UiState;

/// Draws `node` into `area` as one full pass.
///
/// Afterwards the state knows how many focusable nodes exist, and any pending
/// request to reveal the focused node has been served.
pub fn render(node: &Node, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
    ctx.begin_pass();
    node.render(data, ctx, area);
    ctx.state.focusable_count = ctx.counters().elem;
    ctx.state.reveal_focus = false;
}

/// Asks the tree laid out over the whole screen about `event`.
///
/// Nothing changes until the returned action is run.
#[must_use]
pub fn dispatch(node: &Node, data: &UiData, ctx: &mut Context<'_>, event: &UiEvent) -> Option<Action> {
    let area = ctx.screen();
    dispatch_in(node, data, ctx, area, event)
}

/// Like [`dispatch`], for a tree laid out over `area`.
#[must_use]
pub fn dispatch_in(
    node: &Node,
    data: &UiData,
    ctx: &mut Context<'_>,
    area: Rect,
    event: &UiEvent,
) -> Option<Action> {
    ctx.begin_pass();
    let action = node.on_event(data, ctx, area, event);
    tracing::trace!(?event, handled = action.is_some(), "dispatched event");
    action
}

/// A built screen together with the configuration it runs under.
///
/// The caller keeps the [`UiState`] (one per shown screen) and the host
/// capabilities; this type creates a [`Context`] for each pass.
#[derive(Debug)]
pub struct ScriptedUi {
    root: Node,
    config: UiConfig,
    keybindings: KeybindingTable,
}

impl ScriptedUi {
    /// Wraps a tree, building the keybinding table from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`](crate::ConfigError::UnknownKey) if
    /// a keybinding names a key that does not exist.
    pub fn new(root: Node, config: UiConfig) -> ConfigResult<Self> {
        let keybindings = config.keybinding_table()?;
        Ok(Self {
            root,
            config,
            keybindings,
        })
    }

    /// Root of the tree.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Fresh state for showing this screen, easing scrolls as configured.
    #[must_use]
    pub fn new_state(&self) -> UiState {
        UiState::with_scroll_ease(self.config.scroll_ease())
    }

    /// Draws the screen over the renderer's whole surface.
    pub fn render(&self, data: &UiData, state: &mut UiState, renderer: &mut dyn Renderer, clock: &dyn Clock) {
        let mut ctx = Context::new(renderer, state, &self.keybindings, &self.config, clock);
        let screen = ctx.screen();
        render(&self.root, data, &mut ctx, screen);
    }

    /// Dispatches `event` and runs the resulting action.
    ///
    /// Returns true when the screen asked to close.
    pub fn handle_event(
        &self,
        data: &UiData,
        state: &mut UiState,
        renderer: &mut dyn Renderer,
        clock: &dyn Clock,
        sound: &mut dyn SoundPlayer,
        event: &UiEvent,
    ) -> bool {
        let action = {
            let mut ctx = Context::new(renderer, state, &self.keybindings, &self.config, clock);
            dispatch(&self.root, data, &mut ctx, event)
        };
        action.is_some_and(|action| action.run(state, sound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{ManualClock, NoSound};
    use crate::input::{ButtonKind, Key, KeyEvent};
    use crate::layout::Vec2;
    use crate::parser::build_tree;
    use crate::render::CommandRenderer;
    use std::time::Duration;

    fn press(x: f32, y: f32) -> UiEvent {
        UiEvent::Pointer {
            kind: ButtonKind::PrimaryPress,
            pos: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_render_counts_focusables() {
        let ui = ScriptedUi::new(
            build_tree("Vertical { Focusable(Fill(RED)) Focusable(Fill(BLUE)) Focusable(Fill(GREEN)) }").unwrap(),
            UiConfig::default(),
        )
        .unwrap();
        let mut state = ui.new_state();
        state.reveal_focus = true;
        let mut renderer = CommandRenderer::new(300.0, 200.0);

        ui.render(&UiData::default(), &mut state, &mut renderer, &ManualClock::default());

        assert_eq!(state.focusable_count(), 3);
        assert!(!state.reveal_focus);
    }

    #[test]
    fn test_exit_button_closes() {
        let ui = ScriptedUi::new(build_tree("Using(EXIT) { Button }").unwrap(), UiConfig::default()).unwrap();
        let mut state = ui.new_state();
        let mut renderer = CommandRenderer::new(300.0, 200.0);
        let clock = ManualClock::default();

        let closes = ui.handle_event(
            &UiData::default(),
            &mut state,
            &mut renderer,
            &clock,
            &mut NoSound,
            &press(5.0, 5.0),
        );
        assert!(closes);
    }

    #[test]
    fn test_dispatch_changes_nothing_until_run() {
        let node = build_tree("Focusable(Fill(RED))").unwrap();
        let mut renderer = CommandRenderer::new(300.0, 200.0);
        let mut state = UiState::new();
        let keys = KeybindingTable::new();
        let config = UiConfig::default();
        let clock = ManualClock::default();
        let moved = UiEvent::Pointer {
            kind: ButtonKind::Moved,
            pos: Vec2::new(10.0, 10.0),
        };

        let mut ctx = Context::new(&mut renderer, &mut state, &keys, &config, &clock);
        let first = dispatch(&node, &UiData::default(), &mut ctx, &moved);
        let second = dispatch(&node, &UiData::default(), &mut ctx, &moved);
        drop(ctx);

        assert!(first.is_some() && second.is_some());
        assert_eq!(state.highlighted, None);
        first.unwrap().run(&mut state, &mut NoSound);
        assert_eq!(state.highlighted, Some(0));
    }

    #[test]
    fn test_dispatch_in_uses_given_area() {
        let node = build_tree("Using(EXIT) { Button }").unwrap();
        let mut renderer = CommandRenderer::new(300.0, 200.0);
        let mut state = UiState::new();
        let keys = KeybindingTable::new();
        let config = UiConfig::default();
        let clock = ManualClock::default();
        let mut ctx = Context::new(&mut renderer, &mut state, &keys, &config, &clock);
        let area = Rect::new(100.0, 100.0, 50.0, 20.0);

        assert!(dispatch_in(&node, &UiData::default(), &mut ctx, area, &press(5.0, 5.0)).is_none());
        assert!(dispatch_in(&node, &UiData::default(), &mut ctx, area, &press(120.0, 110.0)).is_some());
    }

    #[test]
    fn test_configured_keybindings_reach_handlers() {
        let config = UiConfig::from_toml("[keybindings]\nMENU_BACK = [\"ESCAPE\"]").unwrap();
        let ui = ScriptedUi::new(
            build_tree("Using(EXIT) { KeybindingHandler(MENU_BACK, Fill(BLACK)) }").unwrap(),
            config,
        )
        .unwrap();
        let mut state = ui.new_state();
        let mut renderer = CommandRenderer::new(300.0, 200.0);
        let clock = ManualClock::default();
        let escape = UiEvent::Key(KeyEvent::new(Key::Escape));

        assert!(ui.handle_event(&UiData::default(), &mut state, &mut renderer, &clock, &mut NoSound, &escape));
    }

    #[test]
    fn test_new_state_uses_configured_ease() {
        let config = UiConfig::from_toml("scroll_ease_ms = 0").unwrap();
        let ui = ScriptedUi::new(build_tree("Fill(RED)").unwrap(), config).unwrap();
        let mut state = ui.new_state();
        state.scroll_position(0).set_bounds(0.0, 100.0, 0.0);
        state.scroll_position(0).set(50.0, Duration::ZERO);

        assert_eq!(state.scroll_offset(0, Duration::ZERO), 50.0);
    }
}
