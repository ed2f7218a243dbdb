//! Built-in data standing in for server responses.
//!
//! The six job trials, the skill vocabulary offered in TryPath and the
//! placeholder suggestions CareerLens shows after an upload.

use crate::types::{Catalog, JobTrial, Suggestion, TrialStatus};

/// Skills the user can pick from, in display order
pub const SKILL_VOCABULARY: [&str; 15] = [
    "React",
    "JavaScript",
    "Python",
    "Data Analysis",
    "UX Design",
    "Marketing",
    "Content Writing",
    "Project Management",
    "UI Design",
    "Node.js",
    "SQL",
    "Machine Learning",
    "SEO",
    "Agile",
    "Communication",
];

fn tags(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

/// The built-in trials in listing order
pub fn builtin_trials() -> Vec<JobTrial> {
    vec![
        JobTrial {
            id: "1".to_string(),
            title: "Frontend Developer Intern".to_string(),
            company: "TechCorp".to_string(),
            duration: "3 months".to_string(),
            description: "Work on React applications and collaborate with design teams to build user interfaces."
                .to_string(),
            skills: tags(&["React", "JavaScript", "CSS"]),
            category: "Technology".to_string(),
            status: TrialStatus::Available,
        },
        JobTrial {
            id: "2".to_string(),
            title: "Marketing Analyst".to_string(),
            company: "GrowthInc".to_string(),
            duration: "2 months".to_string(),
            description: "Analyze campaign performance and create data visualizations for marketing strategies."
                .to_string(),
            skills: tags(&["Analytics", "Data Visualization", "Marketing"]),
            category: "Marketing".to_string(),
            status: TrialStatus::InProgress,
        },
        JobTrial {
            id: "3".to_string(),
            title: "UX Research Assistant".to_string(),
            company: "DesignStudio".to_string(),
            duration: "1 month".to_string(),
            description: "Conduct user interviews and help with usability testing for new products."
                .to_string(),
            skills: tags(&["User Research", "UX Design", "Interviewing"]),
            category: "Design".to_string(),
            status: TrialStatus::Available,
        },
        JobTrial {
            id: "4".to_string(),
            title: "Content Writer".to_string(),
            company: "MediaGroup".to_string(),
            duration: "4 weeks".to_string(),
            description: "Create blog posts and social media content for tech products."
                .to_string(),
            skills: tags(&["Writing", "Content Creation", "SEO"]),
            category: "Content".to_string(),
            status: TrialStatus::Completed,
        },
        JobTrial {
            id: "5".to_string(),
            title: "Data Science Apprentice".to_string(),
            company: "DataSystems".to_string(),
            duration: "6 weeks".to_string(),
            description: "Learn data analysis techniques and work on real-world datasets."
                .to_string(),
            skills: tags(&["Python", "Data Analysis", "Statistics"]),
            category: "Technology".to_string(),
            status: TrialStatus::Available,
        },
        JobTrial {
            id: "6".to_string(),
            title: "Product Management Associate".to_string(),
            company: "InnovateCo".to_string(),
            duration: "8 weeks".to_string(),
            description: "Support product managers in roadmap planning and feature prioritization."
                .to_string(),
            skills: tags(&["Product Strategy", "Agile", "Communication"]),
            category: "Business".to_string(),
            status: TrialStatus::Available,
        },
    ]
}

/// Suggestions shown after any upload. No analysis produces them.
pub fn placeholder_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            id: "1".to_string(),
            category: "Keywords".to_string(),
            title: "Add industry-specific keywords".to_string(),
            description: "Your resume is missing keywords relevant to software engineering roles.".to_string(),
            original: "Worked on web applications".to_string(),
            improved: "Developed scalable web applications using React and Node.js".to_string(),
        },
        Suggestion {
            id: "2".to_string(),
            category: "Structure".to_string(),
            title: "Improve bullet point structure".to_string(),
            description: "Use action verbs and quantify achievements for better impact.".to_string(),
            original: "Responsible for maintaining company website".to_string(),
            improved: "Maintained company website, improving load times by 40%".to_string(),
        },
        Suggestion {
            id: "3".to_string(),
            category: "Impact".to_string(),
            title: "Quantify achievements".to_string(),
            description: "Add metrics to demonstrate the impact of your work.".to_string(),
            original: "Led a team of developers".to_string(),
            improved: "Led a team of 5 developers to deliver projects 20% ahead of schedule".to_string(),
        },
    ]
}

impl Catalog {
    /// The built-in six-trial catalog
    pub fn builtin() -> Self {
        Self {
            trials: builtin_trials(),
        }
    }
}
