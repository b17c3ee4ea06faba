//! Per-pass traversal context.

use std::time::Duration;

use crate::capability::{Clock, KeybindingMap};
use crate::config::UiConfig;
use crate::layout::{Rect, Vec2};
use crate::render::Renderer;
use crate::state::UiState;

/// Structural counters of one pass.
///
/// Each family numbers its nodes in traversal order, starting at zero every
/// pass. Render and dispatch visit nodes in the same order, so the Nth slider
/// seen while rendering is the Nth slider seen while dispatching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Focusable nodes.
    pub elem: usize,
    /// Tooltip wrappers.
    pub tooltip: usize,
    /// Sliders.
    pub slider: usize,
}

/// Everything a node can reach while it is being measured, drawn or asked
/// about an event.
pub struct Context<'a> {
    /// Drawing and measuring.
    pub renderer: &'a mut dyn Renderer,
    /// Cross-frame state of the screen.
    pub state: &'a mut UiState,
    /// Abstract action name → key lookup.
    pub keybindings: &'a dyn KeybindingMap,
    /// Engine tunables.
    pub config: &'a UiConfig,
    /// Clock reading taken when the pass began.
    pub now: Duration,
    /// Pointer position taken when the pass began.
    pub pointer: Vec2,
    counters: Counters,
    scroll_group: usize,
    focused_area: Option<Rect>,
}

impl<'a> Context<'a> {
    /// Starts a pass, sampling the clock and the pointer once.
    #[must_use]
    pub fn new(
        renderer: &'a mut dyn Renderer,
        state: &'a mut UiState,
        keybindings: &'a dyn KeybindingMap,
        config: &'a UiConfig,
        clock: &dyn Clock,
    ) -> Self {
        let pointer = renderer.pointer_pos();
        Self {
            renderer,
            state,
            keybindings,
            config,
            now: clock.now(),
            pointer,
            counters: Counters::default(),
            scroll_group: 0,
            focused_area: None,
        }
    }

    /// Resets the structural counters for a new traversal of the tree.
    pub fn begin_pass(&mut self) {
        self.counters = Counters::default();
        self.scroll_group = 0;
        self.focused_area = None;
    }

    /// Counters reached so far in this pass.
    #[must_use]
    pub const fn counters(&self) -> Counters {
        self.counters
    }

    pub(crate) fn next_elem(&mut self) -> usize {
        let id = self.counters.elem;
        self.counters.elem += 1;
        id
    }

    pub(crate) fn next_tooltip(&mut self) -> usize {
        let id = self.counters.tooltip;
        self.counters.tooltip += 1;
        id
    }

    pub(crate) fn next_slider(&mut self) -> usize {
        let id = self.counters.slider;
        self.counters.slider += 1;
        id
    }

    /// Scroll group of the innermost scrollable whose scrollbar is being visited.
    pub(crate) const fn scroll_group(&self) -> usize {
        self.scroll_group
    }

    /// Runs `visit` with the scrollbar's scroll group in effect.
    pub(crate) fn with_scroll_group<R>(&mut self, group: usize, visit: impl FnOnce(&mut Self) -> R) -> R {
        let outer = std::mem::replace(&mut self.scroll_group, group);
        let result = visit(self);
        self.scroll_group = outer;
        result
    }

    /// Runs `visit` with the pointer hidden unless it lies inside `bounds`.
    pub(crate) fn with_pointer_within<R>(&mut self, bounds: Rect, visit: impl FnOnce(&mut Self) -> R) -> R {
        let outer = self.pointer;
        if !bounds.contains(outer) {
            self.pointer = Vec2::NOWHERE;
        }
        let result = visit(self);
        self.pointer = outer;
        result
    }

    pub(crate) fn set_focused_area(&mut self, area: Rect) {
        self.focused_area = Some(area);
    }

    pub(crate) fn take_focused_area(&mut self) -> Option<Rect> {
        self.focused_area.take()
    }

    /// Screen rectangle covering the whole drawable surface.
    #[must_use]
    pub fn screen(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.renderer.screen_size())
    }
}
