//! Static copy and asset references for the landing page.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Industry {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseStudy {
    pub client: &'static str,
    pub campaign: &'static str,
    pub audience: &'static str,
    pub outcome: &'static str,
    pub link: &'static str,
    pub image: &'static str,
}

pub const HERO_VIDEO: &str = "/heroBg.mp4";

pub const PROBLEM_STATEMENTS: [&str; 3] = [
    "Your product is strong.",
    "Your market exists.",
    "Access is the bottleneck.",
];

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Strategic Access",
        description: "We bypass gatekeepers to place your value proposition directly in front of decision-makers.",
        icon: "◎",
    },
    Pillar {
        title: "Meeting Generation",
        description: "Consistent flow of qualified opportunities. We focus on intent, not just volume.",
        icon: "◍",
    },
    Pillar {
        title: "Growth Enablement",
        description: "Providing the insights and data infrastructure needed to scale your outbound revenue engine.",
        icon: "↗",
    },
];

pub const PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep {
        number: "1",
        title: "Business Understanding",
        description: "We deep dive into your ICP, value proposition, and market positioning.",
    },
    ProcessStep {
        number: "2",
        title: "Market Mapping",
        description: "Identifying high-probability targets using proprietary data enrichment.",
    },
    ProcessStep {
        number: "3",
        title: "Outreach & Qualification",
        description: "Multi-channel orchestration to start conversations, not just send emails.",
    },
    ProcessStep {
        number: "4",
        title: "Meetings",
        description: "Booking qualified meetings directly into your sales team's calendar.",
    },
    ProcessStep {
        number: "5",
        title: "Scale & Refine",
        description: "Continuous feedback loops to optimize conversion rates and deal quality.",
    },
];

pub const INDUSTRIES: [Industry; 4] = [
    Industry {
        name: "SaaS & Tech",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=2070&auto=format&fit=crop",
    },
    Industry {
        name: "Real Estate",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070&auto=format&fit=crop",
    },
    Industry {
        name: "Manufacturing",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=2070&auto=format&fit=crop",
    },
    Industry {
        name: "FinTech",
        image: "https://images.unsplash.com/photo-1556741533-974f8e62a92d?q=80&w=2940&auto=format&fit=crop",
    },
];

pub const CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        client: "VCraft",
        campaign: "Meeting Generation",
        audience: "Head Channel Sales",
        outcome: "50 Meetings",
        link: "https://www.haptaq.com/files/Vcraft.pdf",
        image: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?q=80&w=2940&auto=format&fit=crop",
    },
    CaseStudy {
        client: "Indeed",
        campaign: "Nomination Generation",
        audience: "Talent Acquisition Head",
        outcome: "250 Nominations",
        link: "https://www.haptaq.com/files/indeed.pdf",
        image: "https://images.unsplash.com/photo-1565728744382-61accd4aa148?q=80&w=2946&auto=format&fit=crop",
    },
    CaseStudy {
        client: "Google",
        campaign: "One On One Meetings",
        audience: "MSME Owners",
        outcome: "100 Meetings",
        link: "https://www.haptaq.com/files/google.pdf",
        image: "https://images.unsplash.com/photo-1591970669426-0143eb662b78?q=80&w=2942&auto=format&fit=crop",
    },
    CaseStudy {
        client: "Times Group",
        campaign: "Audience Generation",
        audience: "Legal Heads",
        outcome: "250 Attendees",
        link: "https://www.haptaq.com/files/toi.pdf",
        image: "https://images.unsplash.com/photo-1752159684779-0639174cdfac?q=80&w=2942&auto=format&fit=crop",
    },
];

pub const TRUSTED_BY: [&str; 7] = [
    "Acme Corp",
    "GlobalTech",
    "Nebula Inc",
    "Stark Ind",
    "Wayne Ent",
    "Cyberdyne",
    "Massive Dynamic",
];

pub const POSITIONING: [&str; 3] = [
    "Haptaq is not a lead factory.",
    "Not an agency.",
    "We operate as a strategic growth partner.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PROCESS_STEP_COUNT;
    use crate::motion::scroll::StepBreakpoints;

    #[test]
    fn one_panel_per_step() {
        assert_eq!(PROCESS_STEPS.len(), PROCESS_STEP_COUNT);
        assert_eq!(StepBreakpoints::even(PROCESS_STEP_COUNT).step_count(), PROCESS_STEPS.len());
    }

    #[test]
    fn steps_are_numbered_in_order() {
        for (index, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.number, (index + 1).to_string());
        }
    }
}
