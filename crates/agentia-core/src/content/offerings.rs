//! Services, Agentia World features, pricing tiers and process steps.

use super::{Card, Gradient, PricingPlan};

const CORAL_TEAL: Gradient = Gradient::new("#FF6B6B", "#4ECDC4");
const MINT_OCEAN: Gradient = Gradient::new("#A8E6CF", "#3D84A8");
const SUN_CORAL: Gradient = Gradient::new("#FFD93D", "#FF6B6B");
const INDIGO_SLATE: Gradient = Gradient::new("#6C63FF", "#3F3D56");
const TEAL_SLATE: Gradient = Gradient::new("#4ECDC4", "#556270");
const CORAL_SLATE: Gradient = Gradient::new("#FF6B6B", "#556270");

pub static SERVICES: &[Card] = &[
    Card {
        icon: "ri-code-line",
        title: "Website Development",
        description: "Custom website development with modern technologies like Next.js, React, and Tailwind CSS. Creating responsive and dynamic web experiences.",
        gradient: CORAL_TEAL,
    },
    Card {
        icon: "ri-robot-2-line",
        title: "AI Integration",
        description: "Seamlessly integrate AI chatbots and interactive features into your website to enhance user engagement and support.",
        gradient: MINT_OCEAN,
    },
    Card {
        icon: "ri-bar-chart-2-line",
        title: "UI/UX Design",
        description: "Create stunning user interfaces with modern design trends, animations, and smooth user experiences using Framer Motion and GSAP.",
        gradient: SUN_CORAL,
    },
    Card {
        icon: "ri-database-2-line",
        title: "Performance Optimization",
        description: "Optimize your website for speed and performance, ensuring fast load times and smooth animations across all devices.",
        gradient: INDIGO_SLATE,
    },
    Card {
        icon: "ri-shield-keyhole-line",
        title: "API Integration",
        description: "Connect your website with various APIs and third-party services to add powerful functionality and real-time data.",
        gradient: TEAL_SLATE,
    },
    Card {
        icon: "ri-glasses-line",
        title: "Responsive Design",
        description: "Ensure your website looks and functions perfectly across all devices - from mobile phones to large desktop screens.",
        gradient: CORAL_SLATE,
    },
];

pub static AGENTIA_FEATURES: &[Card] = &[
    Card {
        icon: "ri-ai-generate",
        title: "Autonomous Agents",
        description: "Our AI agents operate independently, making decisions and performing tasks with minimal human intervention.",
        gradient: CORAL_TEAL,
    },
    Card {
        icon: "ri-brain-line",
        title: "Advanced Learning",
        description: "Agents continuously learn and adapt through reinforcement learning and real-world interactions.",
        gradient: INDIGO_SLATE,
    },
    Card {
        icon: "ri-team-line",
        title: "Multi-Agent Collaboration",
        description: "Agents work together in teams, sharing information and coordinating actions to achieve complex goals.",
        gradient: MINT_OCEAN,
    },
    Card {
        icon: "ri-flow-chart",
        title: "Dynamic Environments",
        description: "Our agents operate in adaptable virtual environments that simulate real-world scenarios.",
        gradient: SUN_CORAL,
    },
];

/// "Why Agentia World" bullet list
pub static AGENTIA_HIGHLIGHTS: &[&str] = &[
    "Advanced AI agents working in harmony",
    "Real-time learning and adaptation",
    "Secure and controlled environment",
];

pub static PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic Agent",
        price: 49,
        description: "Perfect for exploring AI agent capabilities",
        features: &[
            "Single AI Agent Deployment",
            "Basic Learning Capabilities",
            "Standard Environment Access",
            "8 Hours Monthly Runtime",
            "Email Support",
            "Basic Analytics Dashboard",
        ],
        gradient: CORAL_TEAL,
        popular: false,
    },
    PricingPlan {
        name: "Pro Agent",
        price: 149,
        description: "Ideal for businesses seeking advanced AI solutions",
        features: &[
            "Multi-Agent System (Up to 5)",
            "Advanced Learning Algorithms",
            "Custom Environment Creation",
            "40 Hours Monthly Runtime",
            "Priority Support 24/7",
            "Advanced Analytics & Reporting",
        ],
        gradient: INDIGO_SLATE,
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: 499,
        description: "Full-scale AI agent ecosystem for large organizations",
        features: &[
            "Unlimited Agent Deployment",
            "Custom Learning Models",
            "Multiple Environment Support",
            "Unlimited Runtime",
            "Dedicated Support Team",
            "Enterprise Analytics Suite",
        ],
        gradient: TEAL_SLATE,
        popular: false,
    },
];

pub static STEPS: &[Card] = &[
    Card {
        icon: "ri-lightbulb-line",
        title: "Discovery",
        description: "We analyze your needs and develop a comprehensive project strategy.",
        gradient: CORAL_TEAL,
    },
    Card {
        icon: "ri-code-box-line",
        title: "Development",
        description: "Our team brings your vision to life using cutting-edge technologies.",
        gradient: INDIGO_SLATE,
    },
    Card {
        icon: "ri-checkbox-circle-line",
        title: "Testing",
        description: "Rigorous quality assurance to ensure perfect functionality.",
        gradient: MINT_OCEAN,
    },
    Card {
        icon: "ri-rocket-line",
        title: "Launch",
        description: "Deployment and continuous support for your success.",
        gradient: SUN_CORAL,
    },
];
