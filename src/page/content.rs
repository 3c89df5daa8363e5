use std::fs;
use std::path::Path;
use serde::Deserialize;
use tracing::info;
use crate::error::ConfigError;

const DEFAULT_PAGE: &str = include_str!("../../assets/page.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Features,
    Stats,
    Testimonials,
    Newsletter,
    Footer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageContent {
    pub site: Site,
    pub hero: Hero,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub features: Vec<Feature>,
    pub stats: Stats,
    pub testimonials: Testimonials,
    pub newsletter: Newsletter,
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: SectionId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub heading: String,
    #[serde(default)]
    pub counters: Vec<StatCounter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatCounter {
    pub label: String,
    pub target: u32,
    #[serde(default)]
    pub initial: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonials {
    pub heading: String,
    #[serde(default)]
    pub slides: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Newsletter {
    pub heading: String,
    pub body: String,
    pub placeholder: String,
    pub button: String,
    pub success: String,
    pub invalid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub text: String,
}

impl PageContent {
    // --- Load from a file, or the page bundled with the binary ---
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let content = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!(path = %path.display(), "Loading page content");
                Self::parse(&text)?
            }
            None => {
                info!("Loading bundled page content");
                Self::parse(DEFAULT_PAGE)?
            }
        };
        Ok(content)
    }

    // Slide and counter faults are raised by the engines built from the content
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
