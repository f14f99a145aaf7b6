//! Timer values and a deterministic scheduler for driving them in tests.
//!
//! The controller never sleeps. It hands out `ScheduledTimer`s; the page
//! view turns each one into a spawned sleep that dispatches the event back,
//! while tests feed them to `ManualScheduler` and fast-forward.

use std::collections::BTreeMap;

use super::toast::ToastId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    ToastFade(ToastId),
    ToastRemove(ToastId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub delay_ms: u64,
    pub event: TimerEvent,
}

impl ScheduledTimer {
    pub fn after(delay_ms: u64, event: TimerEvent) -> Self {
        Self { delay_ms, event }
    }
}

/// Virtual clock with a queue of pending timers. Timers due at the same
/// instant fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    seq: u64,
    pending: BTreeMap<(u64, u64), TimerEvent>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, timer: ScheduledTimer) {
        let due = self.now_ms.saturating_add(timer.delay_ms);
        self.pending.insert((due, self.seq), timer.event);
        self.seq += 1;
    }

    /// Moves the clock forward by `ms`, firing every timer that falls due on
    /// the way. Timers returned by `fire` are scheduled relative to the
    /// instant their parent fired, so chains resolve within one call.
    pub fn advance<F>(&mut self, ms: u64, mut fire: F)
    where
        F: FnMut(TimerEvent) -> Vec<ScheduledTimer>,
    {
        let target = self.now_ms.saturating_add(ms);
        while let Some((&(due, seq), _)) = self.pending.first_key_value() {
            if due > target {
                break;
            }
            let Some(event) = self.pending.remove(&(due, seq)) else {
                break;
            };
            self.now_ms = due;
            for timer in fire(event) {
                self.schedule(timer);
            }
        }
        self.now_ms = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_due_timers() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ScheduledTimer::after(100, TimerEvent::ToastFade(1)));
        scheduler.schedule(ScheduledTimer::after(300, TimerEvent::ToastFade(2)));

        let mut fired = Vec::new();
        scheduler.advance(150, |event| {
            fired.push(event);
            Vec::new()
        });

        assert_eq!(fired, vec![TimerEvent::ToastFade(1)]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.now_ms(), 150);
    }

    #[test]
    fn chained_timers_resolve_from_parent_instant() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ScheduledTimer::after(2_500, TimerEvent::ToastFade(7)));

        let mut fired = Vec::new();
        scheduler.advance(2_800, |event| {
            fired.push(event);
            match event {
                TimerEvent::ToastFade(id) => {
                    vec![ScheduledTimer::after(300, TimerEvent::ToastRemove(id))]
                }
                TimerEvent::ToastRemove(_) => Vec::new(),
            }
        });

        assert_eq!(
            fired,
            vec![TimerEvent::ToastFade(7), TimerEvent::ToastRemove(7)]
        );
        assert_eq!(scheduler.pending(), 0);
    }
}
