use log::{debug, warn};
use yew::prelude::*;

use crate::animation::clock::IntervalClock;
use crate::animation::sequence::{SequenceMode, SequencePlayer, SequenceState};

/// Runs a sequence player for as long as the calling component is mounted and
/// re-renders the component on every tick.
///
/// Nothing runs while `enabled` is false. Flipping it to true starts a fresh
/// run; flipping it back stops the current one.
///
/// Before the first tick (or if the configuration is rejected) the returned
/// state has `cursor == 0`, which components render as their "not started" view.
#[hook]
pub fn use_sequence<T>(
    steps: &'static [T],
    interval_ms: u32,
    mode: SequenceMode,
    enabled: bool,
) -> SequenceState
where
    T: Clone + 'static,
{
    let state = use_state(|| SequenceState::idle(steps.len(), mode));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |&(interval_ms, mode, enabled)| {
                let player = enabled.then(|| {
                    let state = state.clone();
                    SequencePlayer::start(steps.to_vec(), interval_ms, mode, &IntervalClock, move |emission| {
                        debug!("Sequence emitted step {}", emission.index);
                        state.set(emission.state);
                    })
                });
                let player = match player {
                    Some(Ok(player)) => {
                        state.set(player.current_state());
                        Some(player)
                    }
                    Some(Err(err)) => {
                        warn!("Sequence not started: {}", err);
                        None
                    }
                    None => None,
                };

                move || {
                    if let Some(player) = player {
                        player.stop();
                    }
                }
            },
            (interval_ms, mode, enabled),
        );
    }

    *state
}
