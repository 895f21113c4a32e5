//! The hub's page content. Compiled in, never mutated.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HubContent {
    pub hero: Hero,
    pub about_global: AboutGlobal,
    pub about_quetta: AboutQuetta,
    pub leadership_timeline: &'static [Leader],
    pub charter: Charter,
    pub impact_areas: &'static [ImpactArea],
    pub projects: &'static [Project],
    pub international: &'static [Engagement],
    pub collaborations: &'static [&'static str],
    pub engagements: &'static [&'static str],
    pub socials: Socials,
    pub vision: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hero {
    pub title: &'static str,
    pub subheading: &'static str,
    pub tagline: &'static str,
    pub primary_btn: &'static str,
    pub secondary_btn: &'static str,
    pub secondary_link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    /// Display form, e.g. `"15,000+"`. The counter animates the digits.
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AboutGlobal {
    pub title: &'static str,
    pub description: &'static str,
    pub stats: &'static [Stat],
    pub details: &'static [&'static str],
    pub leadership: &'static [&'static str],
    pub governance: &'static str,
    pub gatherings: &'static [&'static str],
    pub learn_more_link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipTier {
    pub kind: &'static str,
    pub count: Option<u32>,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elections {
    pub desc: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AboutQuetta {
    pub founded: &'static str,
    pub founding_curator: &'static str,
    pub mission: &'static [&'static str],
    pub membership: &'static [MembershipTier],
    pub elections: Elections,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leader {
    pub years: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charter {
    pub desc: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Users,
    BookOpen,
    Heart,
    Package,
    Globe,
    Gavel,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::BookOpen => "📖",
            Icon::Heart => "❤",
            Icon::Package => "📦",
            Icon::Globe => "🌐",
            Icon::Gavel => "⚖",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactArea {
    pub title: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub stats: &'static [&'static str],
    pub desc: &'static str,
    pub leads: &'static str,
}

impl Project {
    pub fn image_url(&self) -> String {
        format!("https://picsum.photos/seed/project-{}/800/400", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engagement {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Socials {
    pub forum: &'static str,
    pub linktree: &'static str,
    pub linkedin: &'static str,
    pub instagram: &'static str,
    pub facebook: &'static str,
    pub x: &'static str,
    pub tiktok: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Quetta Hub", href: "#quetta" },
    NavLink { name: "Leadership", href: "#leadership" },
    NavLink { name: "Impact", href: "#impact" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const HERO_IMAGE: &str = "https://picsum.photos/seed/quetta-landscape/1920/1080?blur=2";
pub const SPOTLIGHT_IMAGE: &str = "https://picsum.photos/seed/curator-spotlight/800/1000";
pub const LOCATION: &str = "Quetta, Balochistan, Pakistan";

pub static HUB_CONTENT: HubContent = HubContent {
    hero: Hero {
        title: "Global Shapers Community – Quetta Hub",
        subheading: "Official Hub of the Global Shapers Community in Balochistan, Pakistan",
        tagline: "Locally Rooted. Globally Connected. Youth-Led. Impact-Driven.",
        primary_btn: "Explore Our Impact",
        secondary_btn: "Visit Global Shapers Platform",
        secondary_link: "https://www.globalshapers.org/",
    },
    about_global: AboutGlobal {
        title: "About Global Shapers Community",
        description: "A youth-led initiative of the World Economic Forum founded in 2011 under the vision of Klaus Schwab. The largest youth network driving local impact with global connections.",
        stats: &[
            Stat { label: "Members", value: "15,000+" },
            Stat { label: "Hubs", value: "500+" },
            Stat { label: "Countries", value: "160+" },
        ],
        details: &[
            "Members are aged 18–30, becoming alumni after 30.",
            "Each hub has a minimum of 20 and maximum of 50 members.",
            "Operates under a binding global charter.",
            "Must initiate at least one impact project annually.",
        ],
        leadership: &["Curator", "Vice Curator", "Impact Officer"],
        governance: "Community Champions → Community Directors (Geneva HQ) → Head of Global Shapers Community (Natalie Pierce)",
        gatherings: &[
            "Annual Summit – Geneva",
            "World Economic Forum Annual Meeting – Davos",
            "Annual Meeting of the New Champions – China",
        ],
        learn_more_link: "https://www.globalshapers.org/",
    },
    about_quetta: AboutQuetta {
        founded: "2022",
        founding_curator: "Jahangir Khan Bazai",
        mission: &[
            "Civic engagement",
            "Policy dialogue",
            "Climate action",
            "Digital inclusion",
            "Social impact",
        ],
        membership: &[
            MembershipTier {
                kind: "Permanent Members",
                count: Some(23),
                desc: "Voting rights & governance authority",
            },
            MembershipTier {
                kind: "Probationary Members",
                count: Some(46),
                desc: "Performance-based membership",
            },
            MembershipTier {
                kind: "Borderline Members",
                count: None,
                desc: "Promotion/demotion system",
            },
        ],
        elections: Elections {
            desc: "Democratic election system with terms from 1 July to 30 June.",
            details: &[
                "Elections held in January",
                "Tenure: 1 July – 30 June",
                "Maximum 2 non-consecutive terms",
            ],
        },
    },
    leadership_timeline: &[
        Leader { years: "2022–2023", name: "Jahangir Khan Bazai", role: "Founding Curator" },
        Leader { years: "2023–2024", name: "Saira Batool", role: "Curator" },
        Leader { years: "2024–2025", name: "Fatima", role: "Curator" },
        Leader { years: "2025–2026", name: "Mumtaz Alam", role: "Curator (Currently Serving)" },
    ],
    charter: Charter {
        desc: "Quetta Hub adopted its own internal governance charter approved by majority vote and reviewed by Community Director.",
        link: "https://drive.google.com/file/d/1mWIdfP5G78SQw10m1gp7WPgIAuJKIPX1/view?usp=drivesdk",
    },
    impact_areas: &[
        ImpactArea { title: "Creating Inclusive Communities", icon: Icon::Users },
        ImpactArea { title: "Reskilling for the Future", icon: Icon::BookOpen },
        ImpactArea { title: "Improving Health and Wellbeing", icon: Icon::Heart },
        ImpactArea { title: "Delivering Basic Needs", icon: Icon::Package },
        ImpactArea { title: "Protecting the Planet", icon: Icon::Globe },
        ImpactArea { title: "Strengthening Civic Engagement", icon: Icon::Gavel },
    ],
    projects: &[
        Project {
            id: 1,
            title: "Blue & Green Quetta",
            subtitle: "U.S. Consulate Funded",
            stats: &["300+ participants", "1,000+ trees planted"],
            desc: "Mega plantation drive with multi-department coordination.",
            leads: "Jahangir Bazai, Zainab Gohar, Saira Batool, Mumtaz Alam, Asfar Yar",
        },
        Project {
            id: 2,
            title: "Aurat Ki Parwaan",
            subtitle: "Women Empowerment",
            stats: &["Legal Awareness Session"],
            desc: "Session on Women's Rights in Nikkahnama with Advocate Maira Sohbat.",
            leads: "Quetta Hub Team",
        },
        Project {
            id: 3,
            title: "Balochistan's First Youth Policy",
            subtitle: "Policy Advocacy",
            stats: &["200+ youth voices", "3 bills drafted", "1 bill passed"],
            desc: "Major policy initiative with Chief Guest Hamza Shafqaat, Commissioner Quetta Division.",
            leads: "Quetta Hub Policy Team",
        },
        Project {
            id: 4,
            title: "Quetta Green Horizon Initiative",
            subtitle: "Environmental Action",
            stats: &["30+ trees planted", "Peace Walk"],
            desc: "Plantation drive and peace walk at Civil Defense Office, Samungli Road.",
            leads: "Quetta Hub Environmental Team",
        },
        Project {
            id: 5,
            title: "Digital Baithak (2025–26)",
            subtitle: "Digital Transformation",
            stats: &["100+ youth trained", "2-day immersive camp"],
            desc: "Training on AI awareness, cybersecurity, and startups.",
            leads: "Quetta Hub Digital Team",
        },
    ],
    international: &[
        Engagement {
            title: "Global Shapers Annual Summit 2025 – Geneva",
            desc: "500+ leaders, workshops at WEF offices",
        },
        Engagement {
            title: "Cross-Hub Collaboration – Kuala Lumpur",
            desc: "ASEAN 2025 dialogue",
        },
        Engagement {
            title: "MOU with Mountain View Tech Park",
            desc: "Innovation & youth entrepreneurship",
        },
    ],
    collaborations: &[
        "Quetta Book Cafe",
        "Mountain View Tech Park",
        "Balochistan Youth Affairs",
        "General Assembly Balochistan",
        "Hope Society Pakistan",
        "Balochistan Youth Resource Centre",
    ],
    engagements: &[
        "Global Shapers Annual Summit – Geneva",
        "World Economic Forum Annual Meeting – Davos",
        "Annual Meeting of the New Champions – China",
        "Shape Pakistan",
        "Shape South Asia",
        "Cross-Hub Meetings",
        "Hub Retreats",
        "Monthly Meetings",
    ],
    socials: Socials {
        forum: "https://initiatives.weforum.org/quetta-hub/members",
        linktree: "https://linktr.ee/globalshaperscommunityquetta?utm_source=qr_code",
        linkedin: "https://www.linkedin.com/company/global-shapers-community-quetta/",
        instagram: "https://www.instagram.com/quettahub_shapers",
        facebook: "https://www.facebook.com/share/1AewdLjycj/?mibextid=wwXIfr",
        x: "https://x.com/global_shapers",
        tiktok: "https://www.tiktok.com/@global.shapers.qu",
        email: "quettahubshapers@gmail.com",
    },
    vision: "The Global Shapers Community – Quetta Hub stands as a structured, democratic, youth-driven institution working at the intersection of climate action, governance reform, digital transformation, and civic empowerment in Balochistan — locally rooted, globally connected.",
};

/// First character of a partner name, used as its badge.
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// The leader currently in office (last timeline entry).
pub fn current_leader() -> Option<&'static Leader> {
    HUB_CONTENT.leadership_timeline.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_has_expected_shape() {
        assert_eq!(HUB_CONTENT.impact_areas.len(), 6);
        assert_eq!(HUB_CONTENT.projects.len(), 5);
        assert_eq!(HUB_CONTENT.leadership_timeline.len(), 4);
        assert_eq!(HUB_CONTENT.about_global.stats.len(), 3);
        assert_eq!(HUB_CONTENT.collaborations.len(), 6);
    }

    #[test]
    fn project_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = HUB_CONTENT.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            HUB_CONTENT.projects[0].image_url(),
            "https://picsum.photos/seed/project-1/800/400"
        );
    }

    #[test]
    fn current_leader_is_last_timeline_entry() {
        let leader = current_leader().unwrap();
        assert_eq!(leader.name, "Mumtaz Alam");
        assert_eq!(leader.years, "2025–2026");
    }

    #[test]
    fn initial_handles_empty_names() {
        assert_eq!(initial("Quetta Book Cafe"), "Q");
        assert_eq!(initial(""), "");
    }
}
