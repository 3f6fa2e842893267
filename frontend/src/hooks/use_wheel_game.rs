use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::thread_rng;
use shared::config::WheelConfig;
use shared::shared_wheel_game::WheelGame;
use yew::prelude::*;

pub enum WheelAction {
    Spin,
    Resolve,
    Reset,
}

/// Reducer wrapper around the shared game state. Actions that the game
/// ignores (spin while spinning, reset while spinning, resolve while idle)
/// hand back the same `Rc`, so the component does not re-render.
#[derive(Clone, PartialEq)]
pub struct WheelState {
    pub game: Rc<WheelGame>,
}

impl WheelState {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            game: Rc::new(WheelGame::new(config, &mut thread_rng())),
        }
    }
}

impl Reducible for WheelState {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut game = (*self.game).clone();
        let changed = match action {
            WheelAction::Spin => game.spin(&mut thread_rng()).is_some(),
            WheelAction::Resolve => game.complete_spin().is_some(),
            WheelAction::Reset => game.reset(&mut thread_rng()),
        };

        if changed {
            Rc::new(Self { game: Rc::new(game) })
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseWheelGameHandle {
    pub game: Rc<WheelGame>,
    pub spin: Callback<MouseEvent>,
    pub reset: Callback<MouseEvent>,
}

#[hook]
pub fn use_wheel_game(config: WheelConfig) -> UseWheelGameHandle {
    let state = use_reducer(move || WheelState::new(config));
    let spinning = state.game.spinning;
    let duration = state.game.config.spin_duration_ms;

    // One resolution timer per entry into the spinning state. Dropping the
    // handle on unmount cancels a resolution that has not fired yet.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(spinning, move |spinning| {
            let timeout = spinning.then(|| {
                Timeout::new(duration, move || dispatcher.dispatch(WheelAction::Resolve))
            });
            move || drop(timeout)
        });
    }

    let spin = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WheelAction::Spin))
    };

    let reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WheelAction::Reset))
    };

    UseWheelGameHandle {
        game: state.game.clone(),
        spin,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spinning_state() -> Rc<WheelState> {
        let state = Rc::new(WheelState::new(WheelConfig::default()));
        state.reduce(WheelAction::Spin)
    }

    #[test]
    fn test_spin_enters_spinning_state() {
        let state = spinning_state();
        assert!(state.game.spinning);
        assert!(state.game.selected.is_some());
        assert!(state.game.result.is_none());
    }

    #[test]
    fn test_second_spin_keeps_same_state() {
        let state = spinning_state();
        let again = state.clone().reduce(WheelAction::Spin);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn test_resolve_reports_result() {
        let state = spinning_state().reduce(WheelAction::Resolve);
        assert!(!state.game.spinning);
        let expected = state.game.outcome().map(|outcome| outcome.message());
        assert_eq!(state.game.result, expected);
    }

    #[test]
    fn test_reset_ignored_while_spinning() {
        let state = spinning_state();
        let after = state.clone().reduce(WheelAction::Reset);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn test_reset_clears_after_resolution() {
        let state = spinning_state()
            .reduce(WheelAction::Resolve)
            .reduce(WheelAction::Reset);
        assert!(state.game.selected.is_none());
        assert!(state.game.result.is_none());
        assert_eq!(state.game.wheel.len(), 12);
    }

    #[test]
    fn test_resolve_while_idle_keeps_same_state() {
        let state = Rc::new(WheelState::new(WheelConfig::default()));
        let after = state.clone().reduce(WheelAction::Resolve);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
