//! Deferred actions produced by event dispatch.
//!
//! A dispatch pass never changes anything. Nodes that react to an event return
//! an [`Action`], containers combine the actions of their children, and the
//! host runs the single surviving action once the whole tree has been visited.

use std::fmt;

use crate::capability::SoundPlayer;
use crate::data::Callback;
use crate::input::Propagation;
use crate::state::UiState;

type ActionFn = Box<dyn FnOnce(&mut UiState, &mut dyn SoundPlayer) -> bool>;

/// Work to run after a dispatch pass. Returns true to close the screen.
pub struct Action(ActionFn);

impl Action {
    /// Wraps a closure.
    #[must_use]
    pub fn new(fun: impl FnOnce(&mut UiState, &mut dyn SoundPlayer) -> bool + 'static) -> Self {
        Self(Box::new(fun))
    }

    /// An action that only touches persistent state and never closes the screen.
    #[must_use]
    pub fn update(fun: impl FnOnce(&mut UiState) + 'static) -> Self {
        Self::new(move |state, _| {
            fun(state);
            false
        })
    }

    /// Plays `sound` (if any), then invokes `callback`.
    #[must_use]
    pub fn invoke(callback: &Callback, sound: Option<&str>) -> Self {
        let callback = callback.clone();
        let sound = sound.map(str::to_owned);
        Self::new(move |state, player| {
            if let Some(id) = &sound {
                player.play(id);
            }
            callback.invoke(state)
        })
    }

    /// Runs `self`, then `next`. The screen closes if either asks to.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::new(move |state, sound| {
            let close = self.run(state, sound);
            next.run(state, sound) || close
        })
    }

    /// Runs the action.
    pub fn run(self, state: &mut UiState, sound: &mut dyn SoundPlayer) -> bool {
        (self.0)(state, sound)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Combines the result of an earlier-visited node with a later-visited one.
///
/// Later-visited nodes are drawn on top, so under [`Propagation::Exclusive`]
/// their action replaces the earlier one.
#[must_use]
pub fn merge(earlier: Option<Action>, later: Option<Action>, propagation: Propagation) -> Option<Action> {
    match (earlier, later) {
        (Some(first), Some(second)) => Some(match propagation {
            Propagation::Cumulative => first.then(second),
            Propagation::Exclusive => second,
        }),
        (first, second) => second.or(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::NoSound;

    fn push(tag: usize) -> Action {
        Action::update(move |state| state.highlighted = Some(state.highlighted.unwrap_or(0) * 10 + tag))
    }

    #[test]
    fn test_then_runs_in_order() {
        let mut state = UiState::new();
        let closes = push(1).then(push(2)).run(&mut state, &mut NoSound);

        assert!(!closes);
        assert_eq!(state.highlighted, Some(12));
    }

    #[test]
    fn test_then_keeps_close_request() {
        let mut state = UiState::new();
        let action = Action::new(|_, _| true).then(push(1));
        assert!(action.run(&mut state, &mut NoSound));
    }

    #[test]
    fn test_exclusive_merge_keeps_later() {
        let mut state = UiState::new();
        let action = merge(Some(push(1)), Some(push(2)), Propagation::Exclusive).unwrap();
        action.run(&mut state, &mut NoSound);
        assert_eq!(state.highlighted, Some(2));

        assert!(merge(None, None, Propagation::Cumulative).is_none());
        assert!(merge(Some(push(3)), None, Propagation::Exclusive).is_some());
    }

    #[test]
    fn test_invoke_plays_sound_first() {
        struct Recorder(Vec<String>);
        impl SoundPlayer for Recorder {
            fn play(&mut self, id: &str) {
                self.0.push(id.to_owned());
            }
        }

        let mut recorder = Recorder(Vec::new());
        let mut state = UiState::new();
        let closes = Action::invoke(&Callback::new(|| true), Some("CLICK")).run(&mut state, &mut recorder);

        assert!(closes);
        assert_eq!(recorder.0, vec!["CLICK"]);
    }
}
