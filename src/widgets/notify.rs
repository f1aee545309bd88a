//! Single-slot toast notifications.

use crate::timer::{Scheduler, TaskId};
use crate::widgets::Controller;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "#6366f1",
            Severity::Success => "#16a34a",
            Severity::Error => "#b91c1c",
        }
    }
}

/// A message some widget wants surfaced as a toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Info }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotifyMsg {
    Show(Notice),
    Dismiss(u64),
}

pub struct Notifier {
    current: Option<Toast>,
    timer: Option<TaskId>,
    next_id: u64,
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            current: None,
            timer: None,
            next_id: 0,
            timeout_ms,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Replaces whatever is showing. There is no queue.
    pub fn show(&mut self, notice: Notice, timers: &mut dyn Scheduler<NotifyMsg>) -> u64 {
        if let Some(old) = self.timer.take() {
            timers.cancel(old);
        }
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Showing {:?} notification: {}", notice.severity, notice.message);
        self.current = Some(Toast { id, notice });
        self.timer = Some(timers.after(self.timeout_ms, NotifyMsg::Dismiss(id)));
        id
    }

    /// Stale ids (a toast that was already replaced) are ignored.
    pub fn dismiss(&mut self, id: u64, timers: &mut dyn Scheduler<NotifyMsg>) -> bool {
        if self.current.as_ref().map(|t| t.id) != Some(id) {
            return false;
        }
        self.current = None;
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
        true
    }
}

impl Controller for Notifier {
    type Msg = NotifyMsg;

    fn update(&mut self, msg: NotifyMsg, timers: &mut dyn Scheduler<NotifyMsg>) -> bool {
        match msg {
            NotifyMsg::Show(notice) => {
                self.show(notice, timers);
                true
            }
            NotifyMsg::Dismiss(id) => self.dismiss(id, timers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;

    fn run(n: &mut Notifier, timers: &mut VirtualScheduler<NotifyMsg>, ms: u64) {
        timers.advance_with(ms, |msg, t| {
            n.update(msg, t);
        });
    }

    #[test]
    fn severity_defaults_to_info_colors() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Notice::info("a").severity.color(), "#6366f1");
        assert_eq!(Notice::success("b").severity.color(), "#16a34a");
        assert_eq!(Notice::error("c").severity.color(), "#b91c1c");
    }

    #[test]
    fn auto_dismisses_after_timeout() {
        let mut n = Notifier::new(4000);
        let mut timers = VirtualScheduler::<NotifyMsg>::new();
        n.update(NotifyMsg::Show(Notice::info("hello")), &mut timers);

        run(&mut n, &mut timers, 3999);
        assert!(n.current().is_some());
        run(&mut n, &mut timers, 1);
        assert!(n.current().is_none());
    }

    #[test]
    fn new_toast_replaces_the_visible_one() {
        let mut n = Notifier::new(4000);
        let mut timers = VirtualScheduler::<NotifyMsg>::new();
        n.update(NotifyMsg::Show(Notice::info("first")), &mut timers);
        run(&mut n, &mut timers, 3000);
        n.update(NotifyMsg::Show(Notice::error("second")), &mut timers);

        assert_eq!(n.current().map(|t| t.notice.message.as_str()), Some("second"));
        assert_eq!(timers.pending(), 1);

        // The first toast's deadline passes without touching the second.
        run(&mut n, &mut timers, 1500);
        assert_eq!(n.current().map(|t| t.notice.severity), Some(Severity::Error));
        run(&mut n, &mut timers, 2500);
        assert!(n.current().is_none());
    }

    #[test]
    fn explicit_close_cancels_the_timer() {
        let mut n = Notifier::new(4000);
        let mut timers = VirtualScheduler::<NotifyMsg>::new();
        let id = n.show(Notice::success("sent"), &mut timers);

        assert!(n.update(NotifyMsg::Dismiss(id), &mut timers));
        assert!(n.current().is_none());
        assert_eq!(timers.pending(), 0);
        assert!(!n.update(NotifyMsg::Dismiss(id), &mut timers));
    }
}
