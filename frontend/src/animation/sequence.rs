use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;

use crate::animation::clock::{Clock, Ticker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceMode {
    /// Reveal every step once, then stop.
    OneShot,
    /// Wrap back to the first step forever.
    Looping,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("sequence needs at least one step")]
    EmptySteps,
    #[error("tick interval must be positive, got {0}ms")]
    InvalidInterval(u32),
}

/// Read-only snapshot handed to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceState {
    pub cursor: usize,
    pub len: usize,
    pub mode: SequenceMode,
    pub running: bool,
}

impl SequenceState {
    /// State shown before a player has been started.
    pub fn idle(len: usize, mode: SequenceMode) -> Self {
        Self {
            cursor: 0,
            len,
            mode,
            running: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.mode == SequenceMode::OneShot && self.cursor == self.len
    }
}

/// One step delivered to the renderer on a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Emission<T> {
    pub index: usize,
    pub step: T,
    pub state: SequenceState,
}

/// Cursor over a fixed list of steps. Only `advance` and `halt` mutate it.
#[derive(Debug)]
pub struct Sequence<T> {
    steps: Vec<T>,
    cursor: usize,
    mode: SequenceMode,
    halted: bool,
}

impl<T> Sequence<T> {
    pub fn new(steps: Vec<T>, mode: SequenceMode) -> Result<Self, SequenceError> {
        if steps.is_empty() {
            return Err(SequenceError::EmptySteps);
        }
        Ok(Self {
            steps,
            cursor: 0,
            mode,
            halted: false,
        })
    }

    /// Handles one tick: returns the step to emit, if any, and moves the cursor.
    pub fn advance(&mut self) -> Option<(usize, &T)> {
        if self.halted {
            return None;
        }
        let index = self.cursor;
        match self.mode {
            SequenceMode::OneShot => {
                if index >= self.steps.len() {
                    return None;
                }
                self.cursor += 1;
            }
            SequenceMode::Looping => {
                self.cursor = (index + 1) % self.steps.len();
            }
        }
        Some((index, &self.steps[index]))
    }

    /// Freezes the cursor. Later ticks are ignored.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    pub fn state(&self) -> SequenceState {
        let finished = self.mode == SequenceMode::OneShot && self.cursor == self.steps.len();
        SequenceState {
            cursor: self.cursor,
            len: self.steps.len(),
            mode: self.mode,
            running: !self.halted && !finished,
        }
    }
}

/// Drives a [`Sequence`] from a [`Clock`] and pushes every emitted step to a
/// callback. Dropping the player stops it.
pub struct SequencePlayer<T, K: Ticker> {
    sequence: Rc<RefCell<Sequence<T>>>,
    ticker: Rc<RefCell<Option<K>>>,
}

impl<T, K> SequencePlayer<T, K>
where
    T: Clone + 'static,
    K: Ticker + 'static,
{
    pub fn start<C, F>(
        steps: Vec<T>,
        interval_ms: u32,
        mode: SequenceMode,
        clock: &C,
        mut on_step: F,
    ) -> Result<Self, SequenceError>
    where
        C: Clock<Ticker = K>,
        F: FnMut(Emission<T>) + 'static,
    {
        if interval_ms == 0 {
            return Err(SequenceError::InvalidInterval(interval_ms));
        }
        let sequence = Rc::new(RefCell::new(Sequence::new(steps, mode)?));
        let ticker: Rc<RefCell<Option<K>>> = Rc::new(RefCell::new(None));

        let on_tick = {
            let sequence = Rc::clone(&sequence);
            let ticker = Rc::clone(&ticker);
            move || {
                let (emitted, state) = {
                    let mut sequence = sequence.borrow_mut();
                    let emitted = sequence.advance().map(|(index, step)| (index, step.clone()));
                    (emitted, sequence.state())
                };
                if !state.running {
                    if let Some(mut ticker) = ticker.borrow_mut().take() {
                        ticker.cancel();
                    }
                    if state.is_complete() {
                        debug!("Sequence of {} steps complete", state.len);
                    }
                }
                if let Some((index, step)) = emitted {
                    on_step(Emission { index, step, state });
                }
            }
        };

        *ticker.borrow_mut() = Some(clock.every(interval_ms, Box::new(on_tick)));
        info!(
            "Started {:?} sequence of {} steps every {}ms",
            mode,
            sequence.borrow().steps().len(),
            interval_ms
        );

        Ok(Self { sequence, ticker })
    }
}

impl<T, K: Ticker> SequencePlayer<T, K> {
    /// Cancels pending ticks. Safe to call any number of times.
    pub fn stop(&self) {
        self.sequence.borrow_mut().halt();
        if let Some(mut ticker) = self.ticker.borrow_mut().take() {
            ticker.cancel();
            debug!("Sequence stopped");
        }
    }

    pub fn current_state(&self) -> SequenceState {
        self.sequence.borrow().state()
    }
}

impl<T, K: Ticker> Drop for SequencePlayer<T, K> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::clock::{ManualClock, ManualTicker};
    use pretty_assertions::assert_eq;

    type Recorded<T> = Rc<RefCell<Vec<Emission<T>>>>;

    fn start_recording<T: Clone + 'static>(
        steps: Vec<T>,
        interval_ms: u32,
        mode: SequenceMode,
        clock: &ManualClock,
    ) -> (SequencePlayer<T, ManualTicker>, Recorded<T>) {
        let recorded: Recorded<T> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&recorded);
        let player = SequencePlayer::start(steps, interval_ms, mode, clock, move |emission| {
            sink.borrow_mut().push(emission)
        })
        .expect("valid configuration");
        (player, recorded)
    }

    fn emitted_steps<T: Clone>(recorded: &Recorded<T>) -> Vec<T> {
        recorded.borrow().iter().map(|e| e.step.clone()).collect()
    }

    #[test]
    fn one_shot_reveals_each_step_then_completes() {
        let clock = ManualClock::new();
        let (player, recorded) =
            start_recording(vec!["A", "B", "C"], 800, SequenceMode::OneShot, &clock);

        assert_eq!(player.current_state().cursor, 0);
        assert!(player.current_state().running);

        clock.advance(800);
        assert_eq!(emitted_steps(&recorded), vec!["A"]);
        assert_eq!(player.current_state().cursor, 1);

        clock.advance(1_600);
        assert_eq!(emitted_steps(&recorded), vec!["A", "B", "C"]);
        let state = player.current_state();
        assert_eq!(state.cursor, 3);
        assert!(state.is_complete());
        assert!(!state.running);

        clock.advance(800);
        assert_eq!(recorded.borrow().len(), 3);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn one_shot_cursor_never_exceeds_step_count() {
        for len in 1..=6 {
            let clock = ManualClock::new();
            let steps: Vec<usize> = (0..len).collect();
            let (player, recorded) = start_recording(steps.clone(), 10, SequenceMode::OneShot, &clock);

            for tick in 1..=len {
                clock.advance(10);
                assert_eq!(player.current_state().cursor, tick);
            }
            assert!(player.current_state().is_complete());

            clock.advance(10 * 5);
            assert_eq!(player.current_state().cursor, len);
            assert_eq!(emitted_steps(&recorded), steps);
        }
    }

    #[test]
    fn looping_cursor_wraps_modulo_len() {
        let clock = ManualClock::new();
        let (player, _) = start_recording(vec![0, 1, 2, 3], 2_500, SequenceMode::Looping, &clock);

        for k in 1..=13 {
            clock.advance(2_500);
            let state = player.current_state();
            assert_eq!(state.cursor, k % 4);
            assert!(!state.is_complete());
            assert!(state.running);
        }
    }

    #[test]
    fn looping_emits_stages_in_order_and_wraps() {
        let clock = ManualClock::new();
        let stages = vec!["stage0", "stage1", "stage2", "stage3"];
        let (player, recorded) = start_recording(stages, 2_500, SequenceMode::Looping, &clock);

        clock.advance(5 * 2_500);

        assert_eq!(
            emitted_steps(&recorded),
            vec!["stage0", "stage1", "stage2", "stage3", "stage0"]
        );
        assert_eq!(player.current_state().cursor, 1);
        let indices: Vec<usize> = recorded.borrow().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn emission_carries_state_after_the_tick() {
        let clock = ManualClock::new();
        let (_player, recorded) = start_recording(vec!['x', 'y'], 5, SequenceMode::OneShot, &clock);

        clock.advance(10);

        let recorded = recorded.borrow();
        assert_eq!(recorded[0].state.cursor, 1);
        assert!(recorded[0].state.running);
        assert_eq!(recorded[1].state.cursor, 2);
        assert!(recorded[1].state.is_complete());
    }

    #[test]
    fn stop_twice_matches_stop_once() {
        let clock = ManualClock::new();
        let (once, _) = start_recording(vec![1, 2, 3], 100, SequenceMode::Looping, &clock);
        let (twice, _) = start_recording(vec![1, 2, 3], 100, SequenceMode::Looping, &clock);

        clock.advance(200);
        once.stop();
        twice.stop();
        twice.stop();

        assert_eq!(once.current_state(), twice.current_state());
        assert!(!twice.current_state().running);
    }

    #[test]
    fn no_mutation_after_stop() {
        let clock = ManualClock::new();
        let (player, recorded) =
            start_recording(vec!["a", "b", "c", "d"], 100, SequenceMode::Looping, &clock);

        clock.advance(100);
        player.stop();
        let frozen = player.current_state();

        clock.advance(10_000);

        assert_eq!(player.current_state(), frozen);
        assert_eq!(recorded.borrow().len(), 1);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn halted_sequence_ignores_late_ticks() {
        let mut sequence = Sequence::new(vec![1, 2], SequenceMode::Looping).unwrap();
        assert_eq!(sequence.advance(), Some((0, &1)));
        sequence.halt();

        assert_eq!(sequence.advance(), None);
        assert_eq!(sequence.state().cursor, 1);
        assert!(!sequence.state().running);
    }

    #[test]
    fn stop_from_inside_the_callback_takes_effect_immediately() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<SequencePlayer<u8, ManualTicker>>>> = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let player = {
            let slot = Rc::clone(&slot);
            let seen = Rc::clone(&seen);
            SequencePlayer::start(vec![1u8, 2, 3], 50, SequenceMode::Looping, &clock, move |e| {
                seen.borrow_mut().push(e.step);
                if e.step == 2 {
                    if let Some(player) = slot.borrow().as_ref() {
                        player.stop();
                    }
                }
            })
            .unwrap()
        };
        *slot.borrow_mut() = Some(player);

        clock.advance(500);

        assert_eq!(*seen.borrow(), vec![1, 2]);
        let state = slot.borrow().as_ref().map(|p| p.current_state()).unwrap();
        assert_eq!(state.cursor, 2);
        assert!(!state.running);
    }

    #[test]
    fn dropping_the_player_cancels_its_ticker() {
        let clock = ManualClock::new();
        let (player, recorded) = start_recording(vec![1, 2, 3], 100, SequenceMode::Looping, &clock);

        clock.advance(100);
        drop(player);
        clock.advance(1_000);

        assert_eq!(recorded.borrow().len(), 1);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn independent_players_share_nothing() {
        let clock = ManualClock::new();
        let (boot, _) = start_recording(vec!["l1", "l2"], 800, SequenceMode::OneShot, &clock);
        let (flow, _) = start_recording(vec![0, 1, 2, 3], 400, SequenceMode::Looping, &clock);

        clock.advance(800);
        flow.stop();
        clock.advance(800);

        assert!(boot.current_state().is_complete());
        assert_eq!(flow.current_state().cursor, 2);
    }

    #[test]
    fn empty_steps_are_rejected() {
        let clock = ManualClock::new();
        let result = SequencePlayer::start(Vec::<&str>::new(), 1_000, SequenceMode::OneShot, &clock, |_| {});

        assert_eq!(result.err(), Some(SequenceError::EmptySteps));
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let clock = ManualClock::new();
        let result = SequencePlayer::start(vec!["a"], 0, SequenceMode::Looping, &clock, |_| {});

        assert_eq!(result.err(), Some(SequenceError::InvalidInterval(0)));
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn idle_state_is_not_complete() {
        let idle = SequenceState::idle(3, SequenceMode::OneShot);
        assert_eq!(idle.cursor, 0);
        assert!(!idle.running);
        assert!(!idle.is_complete());
    }
}
