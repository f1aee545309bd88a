use crate::widgets::notify::Notice;

pub fn video_notice() -> Notice {
    Notice::info("Video playback coming soon (demo).")
}

pub fn membership_notice(title: Option<&str>, fallback_title: &str) -> Notice {
    let title = title.filter(|t| !t.is_empty()).unwrap_or(fallback_title);
    Notice::info(format!("{} signup coming soon (demo).", title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::notify::Severity;

    #[test]
    fn membership_uses_card_title() {
        let n = membership_notice(Some("Student"), "Membership");
        assert_eq!(n.message, "Student signup coming soon (demo).");
        assert_eq!(n.severity, Severity::Info);
    }

    #[test]
    fn membership_falls_back_when_title_missing() {
        assert_eq!(
            membership_notice(None, "Membership").message,
            "Membership signup coming soon (demo)."
        );
        assert_eq!(
            membership_notice(Some(""), "Plan").message,
            "Plan signup coming soon (demo)."
        );
    }

    #[test]
    fn blank_title_is_used_as_is() {
        assert_eq!(
            membership_notice(Some(" "), "Plan").message,
            "  signup coming soon (demo)."
        );
    }
}
