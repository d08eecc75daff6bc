//! Fixed-interval frame clock standing in for the game's frame callback.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

use rezwatch_core::TickSubscription;

/// Stop flag with interruptible waits, shared with the Ctrl+C handler.
pub struct StopSignal {
    stopped: Mutex<bool>,
    condvar: Condvar,
}

impl StopSignal {
    pub fn new() -> Self {
        Self {
            stopped: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    pub fn stop(&self) {
        if let Ok(mut stopped) = self.stopped.lock() {
            *stopped = true;
        }
        self.condvar.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        // Poisoned mutex counts as stopped
        self.stopped.lock().map(|stopped| *stopped).unwrap_or(true)
    }

    /// Wait up to `timeout`. Returns `true` once stopped.
    pub fn wait(&self, timeout: Duration) -> bool {
        let Ok(guard) = self.stopped.lock() else {
            return true;
        };
        match self
            .condvar
            .wait_timeout_while(guard, timeout, |stopped| !*stopped)
        {
            Ok((stopped, _)) => *stopped,
            Err(_) => true,
        }
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivers one tick per interval to whoever holds its subscription.
///
/// Ticks run on the calling thread, one at a time.
pub struct FrameClock {
    interval: Duration,
    subscribed: Rc<Cell<bool>>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            subscribed: Rc::new(Cell::new(false)),
        }
    }

    pub fn subscription(&self) -> ClockSubscription {
        ClockSubscription {
            subscribed: Rc::clone(&self.subscribed),
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed.get()
    }

    /// Tick until `stop` fires or `on_tick` returns `false`.
    ///
    /// Frames pass without a tick while nothing is subscribed.
    pub fn run(&self, stop: &StopSignal, mut on_tick: impl FnMut() -> bool) {
        while !stop.wait(self.interval) {
            if self.subscribed.get() && !on_tick() {
                break;
            }
        }
    }
}

/// [`TickSubscription`] handed to the watcher
pub struct ClockSubscription {
    subscribed: Rc<Cell<bool>>,
}

impl TickSubscription for ClockSubscription {
    fn subscribe(&mut self) {
        self.subscribed.set(true);
    }

    fn unsubscribe(&mut self) {
        self.subscribed.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_stop_signal_wait_timeout() {
        let signal = StopSignal::new();
        let start = Instant::now();

        assert!(!signal.wait(Duration::from_millis(20)));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_stop_signal_interrupts_wait() {
        let signal = Arc::new(StopSignal::new());
        let signal_clone = Arc::clone(&signal);

        let handle = thread::spawn(move || {
            let start = Instant::now();
            (signal_clone.wait(Duration::from_secs(10)), start.elapsed())
        });

        thread::sleep(Duration::from_millis(50));
        signal.stop();

        let (stopped, elapsed) = handle.join().unwrap();
        assert!(stopped);
        assert!(elapsed < Duration::from_secs(1));
        assert!(signal.is_stopped());
    }

    #[test]
    fn test_subscription_toggles_clock() {
        let clock = FrameClock::new(Duration::from_millis(1));
        let mut subscription = clock.subscription();

        assert!(!clock.is_subscribed());
        subscription.subscribe();
        assert!(clock.is_subscribed());
        subscription.unsubscribe();
        assert!(!clock.is_subscribed());
    }

    #[test]
    fn test_run_until_callback_declines() {
        let clock = FrameClock::new(Duration::from_millis(1));
        clock.subscription().subscribe();
        let stop = StopSignal::new();

        let mut ticks = 0;
        clock.run(&stop, || {
            ticks += 1;
            ticks < 3
        });

        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_no_ticks_while_unsubscribed() {
        let clock = FrameClock::new(Duration::from_millis(1));
        let stop = Arc::new(StopSignal::new());
        let stop_clone = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            stop_clone.stop();
        });

        let mut ticks = 0;
        clock.run(&stop, || {
            ticks += 1;
            true
        });
        handle.join().unwrap();

        assert_eq!(ticks, 0);
    }

    #[test]
    fn test_stopped_clock_never_ticks() {
        let clock = FrameClock::new(Duration::from_millis(1));
        clock.subscription().subscribe();
        let stop = StopSignal::new();
        stop.stop();

        let mut ticks = 0;
        clock.run(&stop, || {
            ticks += 1;
            true
        });

        assert_eq!(ticks, 0);
    }
}
