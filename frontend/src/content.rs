use serde::Deserialize;

use crate::config;
use crate::error::SiteError;

const CONTENT_JSON: &str = include_str!("../content.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub hero: Hero,
    pub about: About,
    pub services: Vec<Service>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub gallery: Vec<Artwork>,
    pub experience: Experience,
    pub testimonials: Vec<Testimonial>,
    pub stickers: Vec<Sticker>,
    pub socials: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Hero {
    pub headline: String,
    pub highlight: String,
    pub tagline: String,
    pub portrait_focused: String,
    pub portrait_smiling: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct About {
    pub name: String,
    pub role: String,
    pub origin: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Highlight {
    pub icon: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A logo shown by image URL. `src` is relative to the asset root unless
/// it is already absolute.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct LogoImage {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl LogoImage {
    pub fn url(&self) -> String {
        resolve_asset(&self.src)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Skills {
    pub design_tools: Vec<LogoImage>,
    pub dev_tech: Vec<LogoImage>,
    pub dev_tools: Vec<LogoImage>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub tools: Vec<String>,
    pub image: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Artwork {
    pub title: String,
    pub image: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Experience {
    /// Downloadable resume, if one is published.
    #[serde(default)]
    pub resume: Option<String>,
    pub education: Vec<Milestone>,
    pub work: Vec<Milestone>,
}

/// One entry on the education or work timeline.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Milestone {
    pub title: String,
    pub place: String,
    pub period: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub image: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Sticker {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

pub fn resolve_asset(src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:") {
        src.to_string()
    } else {
        config::asset_url(src)
    }
}

pub fn parse(json: &str) -> Result<SiteContent, SiteError> {
    Ok(serde_json::from_str(json)?)
}

/// Site copy embedded at build time.
pub fn load() -> Result<SiteContent, SiteError> {
    parse(CONTENT_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = load().unwrap();
        assert_eq!(content.skills.design_tools.len(), 12);
        assert_eq!(content.skills.dev_tech.len(), 19);
        assert_eq!(content.skills.dev_tools.len(), 9);
        assert_eq!(content.testimonials.len(), 3);
        assert!(!content.services.is_empty());
    }

    #[test]
    fn gallery_and_timeline_are_present() {
        let content = load().unwrap();
        assert_eq!(content.gallery.len(), 8);
        assert!(content.gallery.iter().all(|art| !art.image.is_empty()));
        assert_eq!(content.experience.education.len(), 2);
        assert_eq!(content.experience.work.len(), 3);
        assert_eq!(content.experience.work[0].place, "MVP Visuals");
        assert_eq!(content.experience.resume, None);
    }

    #[test]
    fn relative_sources_resolve_under_assets() {
        let logo = LogoImage {
            src: "logos/dev/html.svg".into(),
            alt: "HTML".into(),
            href: None,
            title: None,
        };
        assert_eq!(logo.url(), "/assets/logos/dev/html.svg");
        assert_eq!(
            resolve_asset("https://images.pexels.com/x.jpeg"),
            "https://images.pexels.com/x.jpeg"
        );
    }

    #[test]
    fn malformed_content_is_an_error() {
        match parse("{\"hero\": 3}") {
            Err(SiteError::Content(_)) => {}
            other => panic!("expected content error, got {:?}", other),
        }
    }
}
