//! Static Site Content
//!
//! Everything the page renders is defined here as `'static` data. Icons are
//! Remix Icon class names; gradients are pairs of CSS colours.

mod faq;
mod offerings;
mod site;

pub use faq::FAQ_ENTRIES;
pub use offerings::{AGENTIA_FEATURES, AGENTIA_HIGHLIGHTS, PRICING_PLANS, SERVICES, STEPS};
pub use site::{
    ABOUT_STATS, CONTACT_INFO, FOOTER_GROUPS, HERO, NAV_ITEMS, PAGE_META, SLIDES, SOCIAL_LINKS,
};

use serde::Serialize;

/// Two-stop background gradient
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// Inline `background` value
    pub fn css(&self) -> String {
        format!("linear-gradient(to bottom right, {}, {})", self.from, self.to)
    }
}

/// Icon + title + blurb card (services, features, steps)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    /// Monthly price in whole US dollars
    pub price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub gradient: Gradient,
    pub popular: bool,
}

impl PricingPlan {
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub link: &'static str,
}

/// Navbar entry pointing at a section anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Element id targeted by the anchor (`"#faq"` -> `"faq"`)
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub number: u32,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// Image carousel slide
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    pub kicker: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub cta: &'static str,
    pub video_url: &'static str,
    pub poster_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub company: &'static str,
}

/// Copyright line shown in the footer's bottom bar
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PAGE_META.company)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = PRICING_PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Pro Agent");
    }

    #[test]
    fn test_nav_items_point_at_anchors() {
        for item in NAV_ITEMS {
            assert!(item.href.starts_with('#'), "{} is not an anchor", item.name);
            assert_eq!(item.section_id(), item.name.to_lowercase());
        }
    }

    #[test]
    fn test_content_sets_populated() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(STEPS.len(), 4);
        assert_eq!(FAQ_ENTRIES.len(), 5);
        assert_eq!(CONTACT_INFO.len(), 3);
        assert!(PRICING_PLANS.iter().all(|p| !p.features.is_empty()));
    }

    #[test]
    fn test_gradient_css() {
        let g = Gradient::new("#FF6B6B", "#4ECDC4");
        assert_eq!(g.css(), "linear-gradient(to bottom right, #FF6B6B, #4ECDC4)");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 Agentia World. All rights reserved.");
    }
}
