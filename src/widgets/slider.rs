use crate::timer::{Scheduler, TaskId};
use crate::widgets::{wrap_index, Controller};

#[derive(Clone, Debug, PartialEq)]
pub enum SliderMsg {
    /// Show the first slide and begin auto-advancing.
    Start,
    /// Auto-advance firing.
    Tick,
    /// Dot click.
    Show(isize),
    /// Arrow click, `-1` or `+1`.
    Step(isize),
    /// Pointer entered (`true`) or left (`false`) the slider.
    Hover(bool),
}

/// Auto-advancing carousel. Every manual navigation restarts the
/// auto-advance interval; hovering suspends it.
#[derive(Debug)]
pub struct Slider {
    index: usize,
    len: usize,
    interval_ms: u32,
    timer: Option<TaskId>,
}

impl Slider {
    pub fn new(len: usize, interval_ms: u32) -> Self {
        Self {
            index: 0,
            len,
            interval_ms,
            timer: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_dot_active(&self, dot: usize) -> bool {
        self.len > 0 && dot == self.index
    }

    /// CSS transform for the slide strip.
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }

    pub fn go_to(&mut self, i: isize) -> bool {
        if self.len == 0 {
            return false;
        }
        self.index = wrap_index(i, self.len);
        log::debug!("Slider moved to slide {}", self.index);
        true
    }

    pub fn stop(&mut self, timers: &mut dyn Scheduler<SliderMsg>) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
        }
    }

    /// (Re)arm the auto-advance interval. Any previous interval is cancelled
    /// first so there is never more than one.
    pub fn start(&mut self, timers: &mut dyn Scheduler<SliderMsg>) {
        self.stop(timers);
        if self.len == 0 {
            return;
        }
        self.timer = Some(timers.every(self.interval_ms, SliderMsg::Tick));
    }
}

impl Controller for Slider {
    type Msg = SliderMsg;

    fn update(&mut self, msg: SliderMsg, timers: &mut dyn Scheduler<SliderMsg>) -> bool {
        match msg {
            SliderMsg::Start => {
                let moved = self.go_to(0);
                self.start(timers);
                moved
            }
            SliderMsg::Tick => self.go_to(self.index as isize + 1),
            SliderMsg::Show(i) => {
                let moved = self.go_to(i);
                self.start(timers);
                moved
            }
            SliderMsg::Step(delta) => {
                let moved = self.go_to(self.index as isize + delta);
                self.start(timers);
                moved
            }
            SliderMsg::Hover(true) => {
                self.stop(timers);
                false
            }
            SliderMsg::Hover(false) => {
                self.start(timers);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;
    use proptest::prelude::*;

    fn started(len: usize) -> (Slider, VirtualScheduler<SliderMsg>) {
        let mut slider = Slider::new(len, 5000);
        let mut timers = VirtualScheduler::<SliderMsg>::new();
        slider.update(SliderMsg::Start, &mut timers);
        (slider, timers)
    }

    fn run(slider: &mut Slider, timers: &mut VirtualScheduler<SliderMsg>, ms: u64) {
        timers.advance_with(ms, |msg, t| {
            slider.update(msg, t);
        });
    }

    #[test]
    fn auto_advances_every_interval_and_wraps() {
        let (mut slider, mut timers) = started(3);
        assert_eq!(slider.index(), 0);

        run(&mut slider, &mut timers, 5000);
        assert_eq!(slider.index(), 1);
        run(&mut slider, &mut timers, 10_000);
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.transform(), "translateX(-0%)");
    }

    #[test]
    fn manual_navigation_restarts_the_interval() {
        let (mut slider, mut timers) = started(4);

        run(&mut slider, &mut timers, 4000);
        slider.update(SliderMsg::Step(1), &mut timers);
        assert_eq!(slider.index(), 1);

        // The original deadline at 5000 no longer applies.
        run(&mut slider, &mut timers, 4999);
        assert_eq!(slider.index(), 1);
        run(&mut slider, &mut timers, 1);
        assert_eq!(slider.index(), 2);
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn previous_arrow_from_first_slide_wraps_to_last() {
        let (mut slider, mut timers) = started(5);
        slider.update(SliderMsg::Step(-1), &mut timers);
        assert_eq!(slider.index(), 4);
        assert_eq!(slider.transform(), "translateX(-400%)");
    }

    #[test]
    fn hovering_suspends_and_leaving_resumes() {
        let (mut slider, mut timers) = started(3);

        slider.update(SliderMsg::Hover(true), &mut timers);
        assert_eq!(timers.pending(), 0);
        run(&mut slider, &mut timers, 60_000);
        assert_eq!(slider.index(), 0);

        slider.update(SliderMsg::Hover(false), &mut timers);
        slider.update(SliderMsg::Hover(false), &mut timers);
        assert_eq!(timers.pending(), 1);
        run(&mut slider, &mut timers, 5000);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn empty_slider_never_arms_a_timer() {
        let (slider, timers) = started(0);
        assert_eq!(timers.pending(), 0);
        assert!(!slider.is_dot_active(0));
    }

    proptest! {
        #[test]
        fn dot_click_selects_wrapped_index(len in 1usize..32, target in -500isize..500) {
            let (mut slider, mut timers) = started(len);
            slider.update(SliderMsg::Show(target), &mut timers);

            let n = len as isize;
            let expected = (((target % n) + n) % n) as usize;
            prop_assert_eq!(slider.index(), expected);

            let active: Vec<usize> = (0..len).filter(|d| slider.is_dot_active(*d)).collect();
            prop_assert_eq!(active, vec![expected]);
            prop_assert_eq!(timers.pending(), 1);
        }
    }
}
