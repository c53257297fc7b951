use gloo_timers::callback::{Interval, Timeout};

/// A running periodic timer. Cancelling stops any further `on_tick` calls.
pub trait Ticker {
    fn cancel(&mut self);
}

/// Source of periodic ticks. Ticks are delivered one at a time, in time order.
pub trait Clock {
    type Ticker: Ticker;

    fn every(&self, interval_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Ticker;
}

/// Browser clock backed by `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalClock;

pub struct IntervalTicker {
    interval: Option<Interval>,
}

impl Clock for IntervalClock {
    type Ticker = IntervalTicker;

    fn every(&self, interval_ms: u32, on_tick: Box<dyn FnMut()>) -> IntervalTicker {
        IntervalTicker {
            interval: Some(Interval::new(interval_ms, on_tick)),
        }
    }
}

impl Ticker for IntervalTicker {
    fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            // The interval may be cancelled from inside its own callback, so the
            // JS closure is released on the next turn of the event loop.
            let closure = interval.cancel();
            Timeout::new(0, move || drop(closure)).forget();
        }
    }
}

#[cfg(test)]
pub use manual::{ManualClock, ManualTicker};

#[cfg(test)]
mod manual {
    use super::{Clock, Ticker};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Timer {
        interval_ms: u64,
        next_due: u64,
        cancelled: Rc<Cell<bool>>,
        on_tick: Option<Box<dyn FnMut()>>,
    }

    #[derive(Default)]
    struct ManualState {
        now_ms: u64,
        timers: Vec<Timer>,
    }

    /// Virtual clock for tests. Time only moves when `advance` is called.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        state: Rc<RefCell<ManualState>>,
    }

    pub struct ManualTicker {
        cancelled: Rc<Cell<bool>>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now_ms(&self) -> u64 {
            self.state.borrow().now_ms
        }

        pub fn active_timers(&self) -> usize {
            self.state
                .borrow()
                .timers
                .iter()
                .filter(|timer| !timer.cancelled.get())
                .count()
        }

        /// Moves virtual time forward, firing every due timer in order.
        pub fn advance(&self, ms: u64) {
            let target = self.now_ms() + ms;
            while let Some(index) = self.next_due(target) {
                let mut on_tick = {
                    let mut state = self.state.borrow_mut();
                    let due = state.timers[index].next_due;
                    state.now_ms = due;
                    state.timers[index].on_tick.take()
                };
                if let Some(callback) = on_tick.as_mut() {
                    callback();
                }
                let mut state = self.state.borrow_mut();
                let timer = &mut state.timers[index];
                timer.on_tick = on_tick;
                timer.next_due += timer.interval_ms;
            }
            self.state.borrow_mut().now_ms = target;
        }

        fn next_due(&self, target: u64) -> Option<usize> {
            self.state
                .borrow()
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| !timer.cancelled.get() && timer.next_due <= target)
                .min_by_key(|(index, timer)| (timer.next_due, *index))
                .map(|(index, _)| index)
        }
    }

    impl Clock for ManualClock {
        type Ticker = ManualTicker;

        fn every(&self, interval_ms: u32, on_tick: Box<dyn FnMut()>) -> ManualTicker {
            let cancelled = Rc::new(Cell::new(false));
            let mut state = self.state.borrow_mut();
            let next_due = state.now_ms + u64::from(interval_ms);
            state.timers.push(Timer {
                interval_ms: u64::from(interval_ms),
                next_due,
                cancelled: Rc::clone(&cancelled),
                on_tick: Some(on_tick),
            });
            ManualTicker { cancelled }
        }
    }

    impl Ticker for ManualTicker {
        fn cancel(&mut self) {
            self.cancelled.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn manual_clock_fires_due_timers_in_time_order() {
        let clock = ManualClock::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&fired);
        let _slow = clock.every(300, Box::new(move || log.borrow_mut().push("slow")));
        let log = Rc::clone(&fired);
        let _fast = clock.every(200, Box::new(move || log.borrow_mut().push("fast")));

        clock.advance(600);

        assert_eq!(*fired.borrow(), vec!["fast", "slow", "fast", "slow", "fast"]);
        assert_eq!(clock.now_ms(), 600);
    }

    #[test]
    fn cancelled_ticker_never_fires_again() {
        let clock = ManualClock::new();
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let mut ticker = clock.every(100, Box::new(move || *counter.borrow_mut() += 1));
        clock.advance(250);
        ticker.cancel();
        clock.advance(1_000);

        assert_eq!(*count.borrow(), 2);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn partial_advance_keeps_remaining_time() {
        let clock = ManualClock::new();
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let _ticker = clock.every(800, Box::new(move || *counter.borrow_mut() += 1));
        clock.advance(500);
        assert_eq!(*count.borrow(), 0);
        clock.advance(300);
        assert_eq!(*count.borrow(), 1);
    }
}
