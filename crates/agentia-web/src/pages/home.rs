//! Home Page
//!
//! The whole site: sections stacked in order, each wrapped in the anchor the
//! navbar links to.

use leptos::prelude::*;

use crate::components::{ChatWidget, Footer, Navbar};
use crate::sections::{
    AboutSection, AgentiaWorldSection, ContactSection, FaqSection, HeroSection,
    HowItWorksSection, PricingSection, ServicesSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <Navbar />
            <div id="home">
                <HeroSection />
            </div>
            <div id="about">
                <AboutSection />
            </div>
            <div id="services">
                <ServicesSection />
            </div>
            <div id="agentia-world">
                <AgentiaWorldSection />
            </div>
            <div id="pricing">
                <PricingSection />
            </div>
            <div id="how-it-works">
                <HowItWorksSection />
            </div>
            <div id="faq">
                <FaqSection />
            </div>
            <div id="contact">
                <ContactSection />
            </div>
            <Footer />
            <ChatWidget />
        </main>
    }
}
