//! Transient notifications. Each toast is visible, then fading, then gone;
//! the phases advance only through `TimerEvent`s.

use super::scheduler::{ScheduledTimer, TimerEvent};

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "toast--info",
            Severity::Success => "toast--success",
            Severity::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn css_class(&self) -> String {
        let animation = match self.phase {
            ToastPhase::Visible => "animate-fadeIn",
            ToastPhase::Fading => "animate-fadeOut",
        };
        format!("toast {} {animation}", self.severity.css_class())
    }
}

#[derive(Debug)]
pub struct ToastNotifier {
    next_id: ToastId,
    toasts: Vec<Toast>,
    visible_ms: u64,
    fade_ms: u64,
}

impl ToastNotifier {
    pub fn new(visible_ms: u64, fade_ms: u64) -> Self {
        Self {
            next_id: 1,
            toasts: Vec::new(),
            visible_ms,
            fade_ms,
        }
    }

    /// Stacks a new toast and returns the timer that starts its fade.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> ScheduledTimer {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Visible,
        });
        ScheduledTimer::after(self.visible_ms, TimerEvent::ToastFade(id))
    }

    /// Advances one toast. Fading hands back the removal timer; timers for
    /// toasts that no longer exist are ignored.
    pub fn on_timer(&mut self, event: TimerEvent) -> Option<ScheduledTimer> {
        match event {
            TimerEvent::ToastFade(id) => {
                let toast = self.toasts.iter_mut().find(|t| t.id == id)?;
                toast.phase = ToastPhase::Fading;
                Some(ScheduledTimer::after(self.fade_ms, TimerEvent::ToastRemove(id)))
            }
            TimerEvent::ToastRemove(id) => {
                self.toasts.retain(|t| t.id != id);
                None
            }
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> ToastNotifier {
        ToastNotifier::new(2_500, 300)
    }

    #[test]
    fn show_schedules_fade_after_visible_time() {
        let mut toasts = notifier();
        let timer = toasts.show("Tersimpan", Severity::Success);
        assert_eq!(timer.delay_ms, 2_500);
        assert_eq!(toasts.toasts()[0].phase, ToastPhase::Visible);
    }

    #[test]
    fn fade_then_remove() {
        let mut toasts = notifier();
        let fade = toasts.show("Halo", Severity::Info);

        let remove = toasts.on_timer(fade.event).unwrap();
        assert_eq!(remove.delay_ms, 300);
        assert_eq!(toasts.toasts()[0].phase, ToastPhase::Fading);
        assert!(toasts.toasts()[0].css_class().contains("animate-fadeOut"));

        assert!(toasts.on_timer(remove.event).is_none());
        assert!(toasts.toasts().is_empty());
    }

    #[test]
    fn concurrent_toasts_stack_independently() {
        let mut toasts = notifier();
        let first = toasts.show("Satu", Severity::Info);
        toasts.show("Satu", Severity::Info);
        toasts.show("Gagal", Severity::Error);
        assert_eq!(toasts.toasts().len(), 3);

        let remove = toasts.on_timer(first.event).unwrap();
        toasts.on_timer(remove.event);
        let left: Vec<_> = toasts.toasts().iter().map(|t| t.id).collect();
        assert_eq!(left, vec![2, 3]);
    }

    #[test]
    fn stale_timers_are_ignored() {
        let mut toasts = notifier();
        assert!(toasts.on_timer(TimerEvent::ToastFade(42)).is_none());
        assert!(toasts.on_timer(TimerEvent::ToastRemove(42)).is_none());
    }
}
