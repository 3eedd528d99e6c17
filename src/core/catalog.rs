//! Built-in quiz content: the question set and the resource catalog.
//!
//! Both are static and trusted. Tags used by question options must be tags that
//! at least one resource carries, otherwise the option can never raise a score.

use crate::models::{Question, Resource};

/// The ordered quiz questions
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "learning-style",
            "How do you like to learn?",
            &[
                ("Watching videos and diagrams", "visual"),
                ("Reading in depth", "reading"),
                ("Building and installing things", "hands-on"),
            ],
        ),
        Question::new(
            "goal",
            "What brings you to renewable energy?",
            &[
                ("Starting a clean-energy career", "career"),
                ("Powering my own home", "home"),
                ("Understanding energy policy", "policy"),
            ],
        ),
        Question::new(
            "technology",
            "Which technology interests you most?",
            &[
                ("Solar", "solar"),
                ("Wind", "wind"),
                ("Batteries and storage", "storage"),
            ],
        ),
        Question::new(
            "budget",
            "How much would you spend on learning?",
            &[
                ("Free resources only", "free"),
                ("Happy to pay for quality", "paid"),
            ],
        ),
    ]
}

/// The recommendable resources, in display order for ties
pub fn default_catalog() -> Vec<Resource> {
    vec![
        Resource::new(
            "NREL Solar Research Basics",
            "https://www.nrel.gov/research/re-solar.html",
            &["solar", "reading", "home", "free"],
            "Free",
        ),
        Resource::new(
            "Solar Energy International Training",
            "https://www.solarenergy.org/",
            &["solar", "career", "hands-on", "paid"],
            "$$",
        ),
        Resource::new(
            "Coursera Renewable Energy Courses",
            "https://www.coursera.org/courses?query=renewable%20energy",
            &["visual", "career", "solar", "wind", "paid"],
            "$",
        ),
        Resource::new(
            "IRENA Publications",
            "https://www.irena.org/publications",
            &["policy", "reading", "free"],
            "Free",
        ),
        Resource::new(
            "Windustry Community Wind Guides",
            "https://www.windustry.org/",
            &["wind", "home", "reading", "free"],
            "Free",
        ),
        Resource::new(
            "Global Wind Organisation Training",
            "https://www.globalwindsafety.org/",
            &["wind", "career", "hands-on", "paid"],
            "$$$",
        ),
        Resource::new(
            "Energy Saver Home Guides",
            "https://www.energy.gov/energysaver",
            &["home", "reading", "hands-on", "free"],
            "Free",
        ),
        Resource::new(
            "Battery University",
            "https://batteryuniversity.com/",
            &["storage", "reading", "free"],
            "Free",
        ),
        Resource::new(
            "Undecided with Matt Ferrell",
            "https://www.youtube.com/@UndecidedMF",
            &["visual", "home", "solar", "storage", "free"],
            "Free",
        ),
        Resource::new(
            "IEA Policies Database",
            "https://www.iea.org/policies",
            &["policy", "reading", "free"],
            "Free",
        ),
        Resource::new(
            "edX Energy Storage Courses",
            "https://www.edx.org/learn/energy-storage",
            &["storage", "visual", "career", "paid"],
            "$",
        ),
    ]
}
