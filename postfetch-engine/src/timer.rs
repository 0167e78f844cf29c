use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::trace;

pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Schedules a callback to run once after a delay. No cancellation handle is
/// handed out.
pub trait Timer {
    fn schedule(&self, delay: Duration, callback: Callback);
}

impl<T: Timer + ?Sized> Timer for &T {
    fn schedule(&self, delay: Duration, callback: Callback) {
        (**self).schedule(delay, callback)
    }
}

impl<T: Timer + ?Sized> Timer for Arc<T> {
    fn schedule(&self, delay: Duration, callback: Callback) {
        (**self).schedule(delay, callback)
    }
}

/// Run `f` once, `milliseconds` from now, on `timer`.
pub fn delay<T, F>(timer: &T, milliseconds: u64, f: F)
where
    T: Timer + ?Sized,
    F: FnOnce() + Send + 'static,
{
    timer.schedule(Duration::from_millis(milliseconds), Box::new(f));
}

struct Entry {
    due: Duration,
    seq: u64,
    callback: Callback,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry>,
}

/// A [`Timer`] driven by hand. Time only moves on [`ManualTimer::advance`].
#[derive(Default)]
pub struct ManualTimer {
    clock: Mutex<Clock>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    fn clock(&self) -> MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.clock().now
    }

    /// Number of callbacks that have not fired yet.
    pub fn pending(&self) -> usize {
        self.clock().entries.len()
    }

    /// Moves the clock forward by `by`, firing every callback that comes due
    /// on the way, earliest first. Returns how many fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock().now + by;
        let mut fired = 0;
        loop {
            let next = {
                let mut clock = self.clock();
                let due = clock
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.seq))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let entry = clock.entries.swap_remove(i);
                        clock.now = entry.due;
                        Some(entry)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            // The lock is released here so callbacks may schedule more work.
            let Some(entry) = next else { break };
            trace!(due = ?entry.due, seq = entry.seq, "firing timer callback");
            (entry.callback)();
            fired += 1;
        }
        fired
    }

    /// Fires everything still pending, however far out.
    pub fn run_all(&self) -> usize {
        let mut fired = 0;
        loop {
            let last = {
                let clock = self.clock();
                match clock.entries.iter().map(|e| e.due).max() {
                    Some(due) => due.saturating_sub(clock.now),
                    None => break,
                }
            };
            fired += self.advance(last);
        }
        fired
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, callback: Callback) {
        let mut clock = self.clock();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        trace!(?due, seq, "scheduling timer callback");
        clock.entries.push(Entry { due, seq, callback });
    }
}

impl fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock();
        f.debug_struct("ManualTimer")
            .field("now", &clock.now)
            .field("pending", &clock.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Callback) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log2 = log.clone();
        let make = move |tag: &'static str| -> Callback {
            let log = log2.clone();
            Box::new(move || log.lock().unwrap().push(tag))
        };
        (log, make)
    }

    #[test]
    fn fires_in_due_order() {
        let timer = ManualTimer::new();
        let (log, cb) = recorder();
        timer.schedule(Duration::from_millis(30), cb("c"));
        timer.schedule(Duration::from_millis(10), cb("a"));
        timer.schedule(Duration::from_millis(20), cb("b"));

        assert_eq!(timer.advance(Duration::from_millis(25)), 2);
        assert_eq!(*log.lock().unwrap(), vec!["a", "b"]);
        assert_eq!(timer.pending(), 1);
        assert_eq!(timer.now(), Duration::from_millis(25));
    }

    #[test]
    fn ties_keep_registration_order() {
        let timer = ManualTimer::new();
        let (log, cb) = recorder();
        timer.schedule(Duration::from_millis(5), cb("first"));
        timer.schedule(Duration::from_millis(5), cb("second"));
        timer.schedule(Duration::from_millis(5), cb("third"));
        timer.advance(Duration::from_millis(5));
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn nested_schedule_inside_window_fires() {
        let timer = Arc::new(ManualTimer::new());
        let (log, cb) = recorder();
        let inner = cb("inner");
        let t = timer.clone();
        timer.schedule(
            Duration::from_millis(10),
            Box::new(move || t.schedule(Duration::from_millis(10), inner)),
        );
        assert_eq!(timer.advance(Duration::from_millis(20)), 2);
        assert_eq!(*log.lock().unwrap(), vec!["inner"]);
    }

    #[test]
    fn run_all_drains_queue() {
        let timer = ManualTimer::new();
        let (log, cb) = recorder();
        timer.schedule(Duration::from_secs(60), cb("late"));
        timer.schedule(Duration::from_millis(1), cb("early"));
        assert_eq!(timer.run_all(), 2);
        assert_eq!(timer.pending(), 0);
        assert_eq!(timer.now(), Duration::from_secs(60));
        assert_eq!(*log.lock().unwrap(), vec!["early", "late"]);
    }

    #[test]
    fn zero_delay_fires_on_zero_advance() {
        let timer = ManualTimer::new();
        let (log, cb) = recorder();
        timer.schedule(Duration::ZERO, cb("now"));
        assert!(log.lock().unwrap().is_empty());
        timer.advance(Duration::ZERO);
        assert_eq!(*log.lock().unwrap(), vec!["now"]);
    }
}
