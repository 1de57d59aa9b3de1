//! All of the page's content lives here as compile-time constants.
//! Nothing in the app mutates these; components take what they need
//! at composition time.

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub github: &'static str,
}

pub const OWNER_NAME: &str = "Ananya Gupta";
pub const HERO_TAGLINE: &str = "I build things for the web.";
pub const HERO_BLURB: &str =
    "I'm a software engineer specializing in building exceptional digital experiences.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hello! I'm a passionate software developer with a keen interest in creating beautiful and functional web applications. I enjoy solving complex problems and learning new technologies.",
    "When I'm not coding, you can find me exploring new technologies, contributing to open-source projects, or sharing knowledge with the developer community.",
];

pub const PROFILE_IMAGE_URL: &str = "https://images.unsplash.com/photo-1531811682571-fceb15034971?q=80&w=1470&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Elegance Boutique",
        description: "A sophisticated e-commerce platform for a boutique fashion store, featuring a modern shopping experience.",
        github: "https://github.com/ananyaxgupta/Elegance_Boutique",
    },
    Project {
        title: "Clothing Website",
        description: "A responsive clothing retail website with an intuitive user interface and seamless shopping experience.",
        github: "https://github.com/ananyaxgupta/Clothing-Website",
    },
    Project {
        title: "Clarify",
        description: "An innovative web application focused on providing clear and concise information delivery.",
        github: "https://github.com/ananyaxgupta/clarify",
    },
    Project {
        title: "Portfolio Website",
        description: "A modern, interactive portfolio website with scroll-triggered reveal animations.",
        github: "https://github.com/ananyaxgupta/portfolio",
    },
];

pub const SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "HTML5",
    "CSS3",
    "Git",
    "AWS",
];

pub const CONTACT_BLURB: &str =
    "I'm currently looking for new opportunities. Whether you have a question or just want to say hi, I'll try my best to get back to you!";
pub const CONTACT_EMAIL: &str = "ananyax2004@gmail.com";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/ananyaxgupta";
pub const LINKEDIN_PROFILE_URL: &str = "https://linkedin.com/in/ananyagupta";

/// Anchor identifiers for the revealed sections, in page order. The nav
/// links and the section ids are both derived from this list.
pub const SECTION_ANCHORS: &[(&str, &str)] = &[
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_links_somewhere() {
        assert_eq!(PROJECTS.len(), 4);
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(
                project.github.starts_with("https://"),
                "project {} has a bad link: {}",
                project.title,
                project.github
            );
        }
    }

    #[test]
    fn project_titles_are_distinct() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn skills_are_distinct_and_nonempty() {
        assert!(!SKILLS.is_empty());
        for (i, a) in SKILLS.iter().enumerate() {
            for b in &SKILLS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn section_anchors_are_distinct() {
        for (i, (a, _)) in SECTION_ANCHORS.iter().enumerate() {
            for (b, _) in &SECTION_ANCHORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
