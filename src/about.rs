#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AboutView {
    #[default]
    Professional,
    Personal,
}

impl AboutView {
    pub const ALL: [AboutView; 2] = [AboutView::Professional, AboutView::Personal];

    pub fn label(self) -> &'static str {
        match self {
            AboutView::Professional => "Professional",
            AboutView::Personal => "Personal",
        }
    }

    pub fn journey(self) -> &'static [Card] {
        match self {
            AboutView::Professional => &PROFESSIONAL_JOURNEY,
            AboutView::Personal => &PERSONAL_JOURNEY,
        }
    }
}

/// Icon, heading, blurb and chips for one about/skills card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub chips: &'static [&'static str],
}

pub const PROFESSIONAL_JOURNEY: [Card; 3] = [
    Card {
        icon: "🎖️",
        title: "Service & Leadership",
        description: "Former Army Ranger and First Responder, bringing tactical precision and crisis management skills to software development.",
        chips: &["Army Ranger", "Firefighter", "EMT"],
    },
    Card {
        icon: "🔄",
        title: "Professional Evolution",
        description: "Diverse career path demonstrating adaptability and quick learning across multiple industries.",
        chips: &["Licensed Insurance Agent", "Plumber", "Business Analyst"],
    },
    Card {
        icon: "📊",
        title: "Problem Solving",
        description: "Combining analytical thinking from business analysis with technical expertise in software engineering.",
        chips: &["Business Analysis", "Data Analytics", "Full Stack Development"],
    },
];

pub const PERSONAL_JOURNEY: [Card; 3] = [
    Card {
        icon: "🥋",
        title: "Martial Arts",
        description: "Dedicated Jiu Jitsu practitioner, applying discipline and continuous learning from the mat to technology.",
        chips: &["Problem Solving", "Discipline", "Continuous Learning"],
    },
    Card {
        icon: "👪",
        title: "Family First",
        description: "Dedicated family man who believes in maintaining a healthy work-life balance.",
        chips: &["Work-Life Balance", "Values", "Stability"],
    },
    Card {
        icon: "🍳",
        title: "Creative Pursuits",
        description: "Amateur chef and motorcycle enthusiast, bringing creativity and attention to detail to every project.",
        chips: &["Creativity", "Precision", "Adventure"],
    },
];

pub const SKILLS: [Card; 3] = [
    Card {
        icon: "🖥️",
        title: "Frontend Development",
        description: "Creating responsive and intuitive user interfaces using modern frameworks and libraries.",
        chips: &["React", "TypeScript", "Material UI", "Tailwind CSS"],
    },
    Card {
        icon: "⚙️",
        title: "Backend Development",
        description: "Building robust and scalable server-side applications and APIs.",
        chips: &["Node.js", "Python", "RESTful APIs", "GraphQL"],
    },
    Card {
        icon: "🗄️",
        title: "Database & DevOps",
        description: "Managing databases and implementing efficient deployment strategies.",
        chips: &["PostgreSQL", "MongoDB", "Docker", "AWS"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_are_distinct() {
        assert_eq!(AboutView::default(), AboutView::Professional);
        let labels: Vec<_> = AboutView::ALL.iter().map(|view| view.label()).collect();
        assert_eq!(labels, ["Professional", "Personal"]);
    }

    #[test]
    fn test_journeys_differ() {
        assert_eq!(AboutView::Professional.journey()[0].title, "Service & Leadership");
        assert_eq!(AboutView::Personal.journey()[0].title, "Martial Arts");
        for view in AboutView::ALL {
            assert_eq!(view.journey().len(), 3);
        }
    }
}
