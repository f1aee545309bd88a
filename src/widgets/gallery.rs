use crate::timer::Scheduler;
use crate::widgets::Controller;

pub const ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn parse(tag: &str) -> Self {
        if tag == ALL {
            Filter::All
        } else {
            Filter::Category(tag.to_string())
        }
    }

    pub fn shows(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(target) => target == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FilterMsg {
    Select(usize),
}

/// Radio-like row of filter buttons over the gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterBar {
    filters: Vec<Filter>,
    active: Option<usize>,
}

impl FilterBar {
    /// The `all` control, if any, starts out active.
    pub fn new<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        let filters: Vec<Filter> = tags.into_iter().map(Filter::parse).collect();
        let active = filters.iter().position(|f| *f == Filter::All);
        Self { filters, active }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_active(&self, control: usize) -> bool {
        self.active == Some(control)
    }

    pub fn select(&mut self, control: usize) -> bool {
        if control >= self.filters.len() {
            return false;
        }
        self.active = Some(control);
        log::debug!("Gallery filter set to {:?}", self.filters[control]);
        true
    }

    pub fn current(&self) -> Filter {
        self.active
            .and_then(|i| self.filters.get(i).cloned())
            .unwrap_or(Filter::All)
    }

    /// Visibility of each item, by category. Depends only on the active
    /// control, never on what was shown before.
    pub fn visibility<'a>(&self, categories: impl IntoIterator<Item = &'a str>) -> Vec<bool> {
        let filter = self.current();
        categories.into_iter().map(|c| filter.shows(c)).collect()
    }
}

impl Controller for FilterBar {
    type Msg = FilterMsg;

    fn update(&mut self, msg: FilterMsg, _timers: &mut dyn Scheduler<FilterMsg>) -> bool {
        match msg {
            FilterMsg::Select(control) => self.select(control),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [&str; 5] = ["events", "projects", "events", "workshops", "projects"];

    fn bar() -> FilterBar {
        FilterBar::new(["all", "events", "projects", "workshops"])
    }

    #[test]
    fn all_shows_every_item() {
        let mut bar = bar();
        bar.select(2);
        bar.select(0);
        assert_eq!(bar.visibility(ITEMS), vec![true; 5]);
    }

    #[test]
    fn category_shows_only_matching_items() {
        let mut bar = bar();
        bar.select(1);
        assert_eq!(bar.visibility(ITEMS), vec![true, false, true, false, false]);
        bar.select(2);
        assert_eq!(bar.visibility(ITEMS), vec![false, true, false, false, true]);
    }

    #[test]
    fn exactly_one_control_is_active() {
        let mut bar = bar();
        assert!(bar.is_active(0));
        bar.select(3);
        let active: Vec<usize> = (0..4).filter(|i| bar.is_active(*i)).collect();
        assert_eq!(active, vec![3]);
        assert!(!bar.select(9));
        assert!(bar.is_active(3));
    }

    #[test]
    fn unknown_category_hides_everything() {
        let mut bar = FilterBar::new(["robots"]);
        assert_eq!(bar.visibility(ITEMS), vec![true; 5]);
        bar.select(0);
        assert_eq!(bar.visibility(ITEMS), vec![false; 5]);
    }
}
