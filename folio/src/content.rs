//! Static portfolio copy rendered by the section panels.

/// A showcased project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Project {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) url: &'static str,
}

/// A contact channel with the label shown next to its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContactLink {
    pub(crate) kind: ContactKind,
    pub(crate) label: &'static str,
    pub(crate) url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContactKind {
    Email,
    GitHub,
    LinkedIn,
}

impl ContactKind {
    /// Short glyph rendered in place of a brand icon.
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            ContactKind::Email => "@",
            ContactKind::GitHub => "gh",
            ContactKind::LinkedIn => "in",
        }
    }
}

pub(crate) const OWNER_NAME: &str = "Aaron Grant";
pub(crate) const TAGLINE: &str = "Co-Founder of Magnara.AI";
pub(crate) const BIO: &str = "Founder and full-stack engineer crafting calm, \
    immersive user experiences. I love turning complex problems into modular \
    systems that work together effortlessly; integrating precision, \
    performance, and purpose into every interaction.";

pub(crate) const PROJECTS_HEADING: &str = "Projects";
pub(crate) const PROJECTS: [Project; 4] = [
    Project {
        title: "Magnara.AI",
        description: "AI-powered legal automation platform for immigration \
            law firms featuring workflow automation, document management, \
            AI-driven intake processing, and case tracking with role-based \
            access control.",
        url: "https://www.magnara.ai",
    },
    Project {
        title: "DataPilot",
        description: "Enterprise-grade analytics platform with AI-powered \
            insights, automated trend detection, pattern recognition, and \
            data transformation capabilities supporting CSV, Excel, and JSON \
            formats.",
        url: "https://github.com/aaronjager2000/datapilot",
    },
    Project {
        title: "Competence Collective",
        description: "Professional services website built with modern web \
            technologies, featuring responsive design and optimized user \
            experience for client engagement and business showcase.",
        url: "https://www.competencecollective.com",
    },
    Project {
        title: "Apex Ecom",
        description: "Click funnel website built with Next.js and modern web \
            technologies.",
        url: "https://apexecom.vercel.app",
    },
];

pub(crate) const INFO_HEADING: &str = "Philosophy & Approach";
pub(crate) const PHILOSOPHY: [&str; 2] = [
    "I believe the best digital experiences are invisible. They anticipate \
     needs, remove friction, and leave users feeling effortlessly empowered.",
    "My approach combines precision engineering with thoughtful design. I \
     build modular, scalable systems that integrate AI, modern web \
     frameworks, and performance optimization.",
];
pub(crate) const TOOLS_HEADING: &str = "TOOLS & TECHNOLOGIES";
pub(crate) const TOOLS: [&str; 10] = [
    "React",
    "Next.js",
    "Tailwind CSS",
    "Framer Motion",
    "Express / FastAPI",
    "GraphQL",
    "Prisma / MongoDB",
    "LangChain",
    "OpenAI",
    "Vercel / AWS",
];

pub(crate) const CONTACT_HEADING: &str = "Let's Connect";
pub(crate) const CONTACT_BLURB: &str = "Available for freelance & \
    collaborations. Let's create something exceptional.";
pub(crate) const CONTACTS: [ContactLink; 3] = [
    ContactLink {
        kind: ContactKind::Email,
        label: "aarongrantse@gmail.com",
        url: "mailto:aarongrantse@gmail.com",
    },
    ContactLink {
        kind: ContactKind::GitHub,
        label: "aaronjager2000",
        url: "https://github.com/aaronjager2000",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "@aarongrant",
        url: "https://www.linkedin.com/in/aarongrant/",
    },
];

#[cfg(test)]
mod tests {
    use super::{CONTACTS, PROJECTS};
    use crate::services::validate_link;

    #[test]
    fn given_bundled_links_when_validated_then_every_link_is_openable() {
        let urls = PROJECTS
            .iter()
            .map(|project| project.url)
            .chain(CONTACTS.iter().map(|contact| contact.url));

        for url in urls {
            assert!(validate_link(url).is_ok(), "rejected {url}");
        }
    }
}
