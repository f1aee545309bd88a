//! Site copy, embedded at build time.

use serde::Deserialize;

use crate::error::SiteError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SiteContent {
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Slide {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub cta: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GalleryItem {
    pub category: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Membership {
    #[serde(default)]
    pub title: Option<String>,
    pub price: String,
    #[serde(default)]
    pub perks: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Video {
    pub title: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unparsable content leaves every section empty, so the widgets
    /// render nothing instead of failing.
    pub fn load() -> Self {
        Self::parse(SITE_JSON).unwrap_or_else(|e| {
            log::error!("{}", e);
            Self::default()
        })
    }

    /// Distinct gallery categories in first-seen order, behind `all`.
    pub fn filter_tags(&self) -> Vec<&str> {
        let mut tags = vec![crate::widgets::gallery::ALL];
        for item in &self.gallery {
            if !tags.contains(&item.category.as_str()) {
                tags.push(&item.category);
            }
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::parse(SITE_JSON).unwrap();
        assert!(!content.slides.is_empty());
        assert!(!content.gallery.is_empty());
        assert!(!content.faq.is_empty());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let content = SiteContent::parse(r#"{ "slides": [] }"#).unwrap();
        assert_eq!(content, SiteContent::default());
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(matches!(SiteContent::parse("{"), Err(SiteError::Content(_))));
    }

    #[test]
    fn filter_tags_are_unique_and_start_with_all() {
        let content = SiteContent::parse(SITE_JSON).unwrap();
        assert_eq!(content.filter_tags(), vec!["all", "events", "projects", "workshops"]);
    }
}
