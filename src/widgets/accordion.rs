use crate::timer::Scheduler;
use crate::widgets::Controller;

#[derive(Clone, Debug, PartialEq)]
pub enum AccordionMsg {
    Toggle(usize),
}

/// Single-open list of collapsible items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }

    /// Clicking the open item closes it; clicking any other item closes the
    /// previous one and opens the clicked one.
    pub fn toggle(&mut self, item: usize) {
        let was_open = self.open.take() == Some(item);
        if !was_open {
            self.open = Some(item);
        }
        log::debug!("FAQ item {} -> open item {:?}", item, self.open);
    }
}

impl Controller for Accordion {
    type Msg = AccordionMsg;

    fn update(&mut self, msg: AccordionMsg, _timers: &mut dyn Scheduler<AccordionMsg>) -> bool {
        match msg {
            AccordionMsg::Toggle(item) => self.toggle(item),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(acc: &Accordion, items: usize) -> usize {
        (0..items).filter(|i| acc.is_open(*i)).count()
    }

    #[test]
    fn starts_with_everything_closed() {
        let acc = Accordion::new();
        assert_eq!(open_count(&acc, 5), 0);
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let mut acc = Accordion::new();
        acc.toggle(2);
        acc.toggle(2);
        assert_eq!(open_count(&acc, 5), 0);
    }

    #[test]
    fn clicking_another_item_moves_the_open_slot() {
        let mut acc = Accordion::new();
        acc.toggle(1);
        acc.toggle(3);
        assert!(acc.is_open(3));
        assert!(!acc.is_open(1));
        assert_eq!(open_count(&acc, 5), 1);
    }
}
