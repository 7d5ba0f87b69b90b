//! CMS-fed marketing content: hero banners and site navigation.

use serde::{Deserialize, Serialize};

/// Domain entity - hero banner for the landing page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeroBanner {
    pub heading: String,
    pub subheading: String,
    pub image_url: String,
    pub cta_label: String,
    pub cta_href: String,
}

impl HeroBanner {
    pub fn has_cta(&self) -> bool {
        !self.cta_label.is_empty() && !self.cta_href.is_empty()
    }
}

/// Domain entity - one entry in the site navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { label: label.into(), href: href.into() }
    }
}

/// Navigation shown until the CMS responds (or when it cannot).
pub fn fallback_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Shop", "/collections/featured"),
        NavLink::new("Our Story", "/pages/our-story"),
    ]
}
