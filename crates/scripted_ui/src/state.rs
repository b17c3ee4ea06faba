//! Per-screen persistent state.
//!
//! Everything that must outlive a single frame lives here: scroll offsets,
//! keyboard focus, tooltip timers and slider positions. The call site owns one
//! [`UiState`] for as long as a screen is shown and drops it when the screen
//! closes.
//!
//! Focus, tooltip and slider entries are keyed by *structural counters*: the
//! Nth focusable (tooltip, slider) node visited in a pass gets key N. Keys are
//! only meaningful while the tree shape stays the same between the frame that
//! wrote an entry and the frame that reads it. Conditional subtrees (`If`,
//! `IfNot`, `MouseOver`, unfocused `Focusable` children, `List` lengths) shift
//! the keys of every counted node visited after them when they change.

use std::collections::HashMap;
use std::time::Duration;

use crate::data::{Builtin, Callback, UiData};
use crate::scroll::ScrollPosition;

/// Position and drag status of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderState {
    /// Position in `0..=1`.
    pub ratio: f64,
    /// True between press and release on the slider.
    pub dragging: bool,
}

/// A scrollbar thumb held by the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGrab {
    /// Scroll group the scrollbar drives.
    pub group: usize,
    /// Distance from the thumb's top edge to the point grabbed.
    pub offset: f32,
}

/// Cross-frame memory of one screen.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Scroll offset per scroll group.
    pub scroll_positions: HashMap<usize, ScrollPosition>,
    /// Structural counter of the keyboard-focused node.
    pub highlighted: Option<usize>,
    /// Tooltip counter → time at which the tooltip shows.
    pub tooltip_timeouts: HashMap<usize, Duration>,
    /// Slider counter → slider state.
    pub slider_states: HashMap<usize, SliderState>,
    /// Scrollbar thumb being dragged.
    pub scroll_button_held: Option<ScrollGrab>,
    /// Focusable nodes seen by the last render.
    pub(crate) focusable_count: usize,
    /// Scrollables should bring the focused node into view on next render.
    pub(crate) reveal_focus: bool,
    scroll_ease: Duration,
}

impl UiState {
    /// Fresh state using the default scroll ease window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scroll_ease(ScrollPosition::DEFAULT_EASE)
    }

    /// Fresh state whose scroll positions ease over `ease`.
    #[must_use]
    pub fn with_scroll_ease(ease: Duration) -> Self {
        Self {
            scroll_positions: HashMap::new(),
            highlighted: None,
            tooltip_timeouts: HashMap::new(),
            slider_states: HashMap::new(),
            scroll_button_held: None,
            focusable_count: 0,
            reveal_focus: false,
            scroll_ease: ease,
        }
    }

    /// Pseudo-data the tree can bind without the caller supplying it:
    /// `EXIT`, `HIGHLIGHT_NEXT` and `HIGHLIGHT_PREVIOUS`.
    #[must_use]
    pub fn pseudo_data(name: &str) -> Option<UiData> {
        Builtin::from_name(name).map(|builtin| UiData::Callback(Callback::builtin(builtin)))
    }

    /// Scroll position of a group, created at zero on first use.
    pub fn scroll_position(&mut self, group: usize) -> &mut ScrollPosition {
        let ease = self.scroll_ease;
        self.scroll_positions
            .entry(group)
            .or_insert_with(|| ScrollPosition::new(ease))
    }

    /// Scroll offset of a group at `now`; zero for a group never scrolled.
    #[must_use]
    pub fn scroll_offset(&self, group: usize, now: Duration) -> f64 {
        self.scroll_positions.get(&group).map_or(0.0, |pos| pos.get(now))
    }

    /// Scroll ratio of a group at `now`; zero before bounds are known.
    #[must_use]
    pub fn scroll_ratio(&self, group: usize, now: Duration) -> f64 {
        self.scroll_positions
            .get(&group)
            .map_or(0.0, |pos| pos.get_ratio(now))
    }

    /// Number of focusable nodes the last render visited.
    #[must_use]
    pub const fn focusable_count(&self) -> usize {
        self.focusable_count
    }

    /// True if the focusable node with counter `elem` holds keyboard focus.
    #[must_use]
    pub fn is_highlighted(&self, elem: usize) -> bool {
        self.highlighted == Some(elem)
    }

    /// Slider state, falling back to `initial` for a slider never touched.
    #[must_use]
    pub fn slider(&self, slider: usize, initial: f64) -> SliderState {
        self.slider_states.get(&slider).copied().unwrap_or(SliderState {
            ratio: initial,
            dragging: false,
        })
    }

    /// Moves focus to the next focusable node, stopping at the last one.
    pub fn highlight_next(&mut self) {
        let Some(last) = self.focusable_count.checked_sub(1) else {
            self.highlighted = None;
            return;
        };
        self.highlighted = Some(self.highlighted.map_or(0, |elem| (elem + 1).min(last)));
    }

    /// Moves focus to the previous focusable node, stopping at the first one.
    pub fn highlight_previous(&mut self) {
        let Some(last) = self.focusable_count.checked_sub(1) else {
            self.highlighted = None;
            return;
        };
        self.highlighted = Some(self.highlighted.map_or(last, |elem| elem.min(last).saturating_sub(1)));
    }

    /// Runs an engine-provided callback. Returns true when the screen should
    /// close.
    pub(crate) fn apply_builtin(&mut self, builtin: Builtin) -> bool {
        match builtin {
            Builtin::Exit => return true,
            Builtin::HighlightNext => self.highlight_next(),
            Builtin::HighlightPrevious => self.highlight_previous(),
        }
        self.reveal_focus = true;
        false
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_navigation_clamps() {
        let mut state = UiState::new();
        state.focusable_count = 3;

        state.highlight_next();
        assert_eq!(state.highlighted, Some(0));
        state.highlight_next();
        state.highlight_next();
        state.highlight_next();
        assert_eq!(state.highlighted, Some(2));

        state.highlight_previous();
        assert_eq!(state.highlighted, Some(1));
        state.highlighted = None;
        state.highlight_previous();
        assert_eq!(state.highlighted, Some(2));
    }

    #[test]
    fn test_highlight_without_focusables() {
        let mut state = UiState::new();
        state.highlighted = Some(4);
        state.highlight_next();
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_exit_pseudo_data_closes() {
        let mut state = UiState::new();
        let exit = UiState::pseudo_data("EXIT").unwrap();
        assert!(exit.as_callback().unwrap().invoke(&mut state));
        assert!(UiState::pseudo_data("NOT_A_HANDLE").is_none());
    }

    #[test]
    fn test_unscrolled_group_reads_zero() {
        let state = UiState::new();
        assert_eq!(state.scroll_offset(3, Duration::from_secs(1)), 0.0);
        assert_eq!(state.scroll_ratio(3, Duration::from_secs(1)), 0.0);
    }
}
