/// Literals the interactive widgets depend on. Pages that use different
/// markup conventions (another placeholder option, another fallback icon)
/// only need a different `SiteConfig`.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub theme_storage_key: &'static str,
    pub slide_interval_ms: u32,
    pub toast_timeout_ms: u32,
    pub submit_delay_ms: u32,
    pub lightbox_fallback_emoji: &'static str,
    pub membership_fallback_title: &'static str,
    /// Value carried by the unselected `<option>` of the subject select.
    pub subject_placeholder_value: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "techClubTheme",
            slide_interval_ms: 5000,
            toast_timeout_ms: 4000,
            submit_delay_ms: 1200,
            lightbox_fallback_emoji: "📷",
            membership_fallback_title: "Membership",
            subject_placeholder_value: "",
        }
    }
}

pub fn site() -> SiteConfig {
    SiteConfig::default()
}

/// Debug builds let controller transitions through; release builds stop at `info`.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(debug_assertions)]
pub fn log_active() {
    log::debug!("Site config: {:?}", site());
}

#[cfg(not(debug_assertions))]
pub fn log_active() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_builds_log_transitions() {
        assert_eq!(log_level() >= log::Level::Debug, cfg!(debug_assertions));
        assert!(log_level() >= log::Level::Info);
    }
}
