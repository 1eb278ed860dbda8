//! Page-level copy: navigation, hero, about, contact rows, footer.

use super::{ContactInfo, HeroCopy, LinkGroup, NavItem, PageMeta, Slide, SocialLink, Stat};

pub static PAGE_META: PageMeta = PageMeta {
    title: "Agentia World | Next-Gen AI Solutions",
    description: "Step into the future with Agentia World - Experience cutting-edge AI solutions and innovative digital experiences.",
    company: "Agentia World",
};

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Pricing", href: "#pricing" },
    NavItem { name: "Services", href: "#services" },
    NavItem { name: "FAQ", href: "#faq" },
    NavItem { name: "Contact", href: "#contact" },
];

pub static HERO: HeroCopy = HeroCopy {
    kicker: "Welcome to",
    title: "Agentia World",
    tagline: "Step into the future of digital experiences where innovation meets imagination.",
    cta: "Explore Now",
    video_url: "https://v1.pinimg.com/videos/iht/720p/5a/91/b0/5a91b06c21259963d0b7d9e80e8d288a.mp4",
    poster_url: "https://images.pexels.com/photos/2387793/pexels-photo-2387793.jpeg",
};

pub static ABOUT_STATS: &[Stat] = &[
    Stat { number: 100, label: "Projects Completed", icon: "🚀" },
    Stat { number: 50, label: "AI Solutions Deployed", icon: "🤖" },
    Stat { number: 25, label: "Team Members", icon: "👥" },
    Stat { number: 95, label: "Client Satisfaction", icon: "⭐" },
];

pub static SLIDES: &[Slide] = &[
    Slide {
        url: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg",
        title: "AI Innovation Lab",
        description: "Where future technologies come to life",
    },
    Slide {
        url: "https://images.pexels.com/photos/8386434/pexels-photo-8386434.jpeg",
        title: "Digital Transformation",
        description: "Reshaping the digital landscape",
    },
    Slide {
        url: "https://images.pexels.com/photos/8386422/pexels-photo-8386422.jpeg",
        title: "Future Solutions",
        description: "Building tomorrow's technology today",
    },
];

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "ri-mail-line",
        title: "Email Us",
        content: "yesshuzaifa@gmail.com",
        link: "mailto:yesshuzaifa@gmail.com",
    },
    ContactInfo {
        icon: "ri-phone-line",
        title: "Call Us",
        content: "+92 (346) 203-7714",
        link: "tel:+03462037714",
    },
    ContactInfo {
        icon: "ri-map-pin-line",
        title: "Visit Us",
        content: "GIAIC Street, Karachi City, TC 12345",
        link: "#",
    },
];

pub static FOOTER_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Company",
        links: &["About", "Careers", "Contact", "Press"],
    },
    LinkGroup {
        title: "Resources",
        links: &["Blog", "Newsletter", "Events", "Help Center"],
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "ri-twitter-x-fill", label: "X", href: "#" },
    SocialLink { icon: "ri-github-fill", label: "GitHub", href: "#" },
    SocialLink { icon: "ri-linkedin-box-fill", label: "LinkedIn", href: "#" },
    SocialLink { icon: "ri-discord-fill", label: "Discord", href: "#" },
];
