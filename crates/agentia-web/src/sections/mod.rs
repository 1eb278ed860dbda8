//! Page Sections
//!
//! One component per block of the home page, top to bottom.

mod about;
mod agentia_world;
mod contact;
mod faq;
mod hero;
mod how_it_works;
mod pricing;
mod services;

pub use about::AboutSection;
pub use agentia_world::AgentiaWorldSection;
pub use contact::ContactSection;
pub use faq::FaqSection;
pub use hero::HeroSection;
pub use how_it_works::HowItWorksSection;
pub use pricing::PricingSection;
pub use services::ServicesSection;
