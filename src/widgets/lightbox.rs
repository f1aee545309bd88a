use crate::timer::Scheduler;
use crate::widgets::{wrap_index, Controller};

#[derive(Clone, Debug, PartialEq)]
pub enum LightboxMsg {
    Open(isize),
    Close,
    Step(isize),
    /// `KeyboardEvent.key` of a document keydown.
    Key(String),
    /// Click on the overlay; `on_backdrop` is true when the target was the
    /// overlay itself rather than its content.
    Backdrop { on_backdrop: bool },
}

/// Modal viewer over the gallery items.
#[derive(Clone, Debug, PartialEq)]
pub struct Lightbox {
    len: usize,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Opening while already open just moves to the wrapped index.
    pub fn open(&mut self, i: isize) -> bool {
        if self.len == 0 {
            return false;
        }
        self.current = wrap_index(i, self.len);
        self.open = true;
        log::debug!("Lightbox showing item {}", self.current);
        true
    }

    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    pub fn step(&mut self, delta: isize) -> bool {
        if !self.open {
            return false;
        }
        self.open(self.current as isize + delta)
    }

    pub fn key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowRight" => self.step(1),
            "ArrowLeft" => self.step(-1),
            _ => false,
        }
    }
}

impl Controller for Lightbox {
    type Msg = LightboxMsg;

    fn update(&mut self, msg: LightboxMsg, _timers: &mut dyn Scheduler<LightboxMsg>) -> bool {
        match msg {
            LightboxMsg::Open(i) => self.open(i),
            LightboxMsg::Close => self.close(),
            LightboxMsg::Step(delta) => self.step(delta),
            LightboxMsg::Key(key) => self.key(&key),
            LightboxMsg::Backdrop { on_backdrop } => on_backdrop && self.close(),
        }
    }
}

/// What the lightbox shows for one gallery item.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub emoji: String,
    pub text: String,
}

impl Caption {
    pub fn for_item(emoji: &str, title: &str, subtitle: &str, fallback_emoji: &str) -> Self {
        let emoji = if emoji.is_empty() { fallback_emoji } else { emoji };
        let text = if title.is_empty() {
            subtitle.to_string()
        } else {
            format!("{} – {}", title, subtitle)
        };
        Self {
            emoji: emoji.to_string(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;
    use proptest::prelude::*;

    fn send(lightbox: &mut Lightbox, msg: LightboxMsg) -> bool {
        lightbox.update(msg, &mut VirtualScheduler::<LightboxMsg>::new())
    }

    #[test]
    fn navigation_is_ignored_while_closed() {
        let mut lb = Lightbox::new(4);
        assert!(!send(&mut lb, LightboxMsg::Step(1)));
        assert!(!send(&mut lb, LightboxMsg::Key("ArrowRight".into())));
        assert!(!send(&mut lb, LightboxMsg::Key("Escape".into())));
        assert!(!send(&mut lb, LightboxMsg::Backdrop { on_backdrop: true }));
        assert!(!lb.is_open());
        assert_eq!(lb.current(), 0);
    }

    #[test]
    fn keys_navigate_and_escape_closes() {
        let mut lb = Lightbox::new(3);
        send(&mut lb, LightboxMsg::Open(2));
        send(&mut lb, LightboxMsg::Key("ArrowRight".into()));
        assert_eq!(lb.current(), 0);
        send(&mut lb, LightboxMsg::Key("ArrowLeft".into()));
        assert_eq!(lb.current(), 2);
        assert!(!send(&mut lb, LightboxMsg::Key("Enter".into())));
        send(&mut lb, LightboxMsg::Key("Escape".into()));
        assert!(!lb.is_open());
    }

    #[test]
    fn only_clicks_on_the_backdrop_itself_close() {
        let mut lb = Lightbox::new(2);
        send(&mut lb, LightboxMsg::Open(0));
        assert!(!send(&mut lb, LightboxMsg::Backdrop { on_backdrop: false }));
        assert!(lb.is_open());
        assert!(send(&mut lb, LightboxMsg::Backdrop { on_backdrop: true }));
        assert!(!lb.is_open());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lb = Lightbox::new(0);
        assert!(!send(&mut lb, LightboxMsg::Open(0)));
        assert!(!lb.is_open());
    }

    #[test]
    fn caption_joins_title_and_subtitle() {
        let c = Caption::for_item("🤖", "Robotics Night", "Spring 2024", "📷");
        assert_eq!(c.emoji, "🤖");
        assert_eq!(c.text, "Robotics Night – Spring 2024");

        let c = Caption::for_item("", "", "Just a subtitle", "📷");
        assert_eq!(c.emoji, "📷");
        assert_eq!(c.text, "Just a subtitle");
    }

    #[test]
    fn only_empty_emoji_falls_back() {
        assert_eq!(Caption::for_item(" ", "t", "s", "📷").emoji, " ");
    }

    proptest! {
        #[test]
        fn open_wraps_like_the_slider(len in 1usize..32, target in -500isize..500) {
            let mut lb = Lightbox::new(len);
            prop_assert!(send(&mut lb, LightboxMsg::Open(target)));
            prop_assert!(lb.is_open());
            let n = len as isize;
            prop_assert_eq!(lb.current() as isize, ((target % n) + n) % n);
        }
    }
}
