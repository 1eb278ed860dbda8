use super::FaqEntry;

pub static FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is Agentia World?",
        answer: "Agentia World is a cutting-edge AI technology company specializing in developing advanced artificial intelligence solutions for businesses and individuals.",
    },
    FaqEntry {
        question: "What services do you offer?",
        answer: "We offer AI-powered solutions including chatbots, data analysis, machine learning models, and custom AI development tailored to your specific needs.",
    },
    FaqEntry {
        question: "How can AI benefit my business?",
        answer: "AI can automate tasks, provide insights from data, improve customer service, and enhance decision-making processes, leading to increased efficiency and growth.",
    },
    FaqEntry {
        question: "Is my data secure with your AI solutions?",
        answer: "Yes, we prioritize data security and privacy. All our AI solutions comply with industry standards and regulations for data protection.",
    },
    FaqEntry {
        question: "Do you offer custom AI solutions?",
        answer: "Yes, we work closely with clients to develop customized AI solutions that address their specific challenges and requirements.",
    },
];
