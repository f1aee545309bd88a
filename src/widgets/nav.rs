use crate::timer::Scheduler;
use crate::widgets::Controller;

#[derive(Clone, Debug, PartialEq)]
pub enum NavMsg {
    Toggle,
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Controller for NavMenu {
    type Msg = NavMsg;

    fn update(&mut self, msg: NavMsg, _timers: &mut dyn Scheduler<NavMsg>) -> bool {
        let next = match msg {
            NavMsg::Toggle => !self.open,
            NavMsg::Close => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;

    #[test]
    fn toggle_flips_and_close_is_idempotent() {
        let mut nav = NavMenu::default();
        let mut timers = VirtualScheduler::<NavMsg>::new();

        assert!(nav.update(NavMsg::Toggle, &mut timers));
        assert!(nav.is_open());
        assert!(nav.update(NavMsg::Close, &mut timers));
        assert!(!nav.is_open());
        assert!(!nav.update(NavMsg::Close, &mut timers));
        assert!(nav.update(NavMsg::Toggle, &mut timers));
        assert!(nav.update(NavMsg::Toggle, &mut timers));
        assert!(!nav.is_open());
    }
}
