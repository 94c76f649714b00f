//! Path ↔ page mapping for signal-based navigation

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Registrants,
    Matches,
    Messages,
    Gallery,
    PlayerMonth,
    Profile,
}

impl DashboardSection {
    pub fn all() -> [DashboardSection; 6] {
        [
            DashboardSection::Registrants,
            DashboardSection::Matches,
            DashboardSection::Messages,
            DashboardSection::Gallery,
            DashboardSection::PlayerMonth,
            DashboardSection::Profile,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DashboardSection::Registrants => "registrants",
            DashboardSection::Matches => "matches",
            DashboardSection::Messages => "messages",
            DashboardSection::Gallery => "gallery",
            DashboardSection::PlayerMonth => "player-of-the-month",
            DashboardSection::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardSection::Registrants => "Registrants & payments",
            DashboardSection::Matches => "Matches",
            DashboardSection::Messages => "Messages",
            DashboardSection::Gallery => "Gallery",
            DashboardSection::PlayerMonth => "Player of the month",
            DashboardSection::Profile => "My profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardSection::Registrants => "users",
            DashboardSection::Matches => "calendar",
            DashboardSection::Messages => "mail",
            DashboardSection::Gallery => "image",
            DashboardSection::PlayerMonth => "star",
            DashboardSection::Profile => "user",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Programs,
    Contact,
    Register,
    Payment,
    StaffLogin,
    Dashboard(DashboardSection),
    NotFound,
}

impl Page {
    /// Resolve a location pathname. Trailing slashes and case are ignored.
    pub fn from_path(path: &str) -> Self {
        let lowered = path.to_ascii_lowercase();
        let segments: Vec<&str> = lowered.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["home"] => Page::Home,
            ["programs"] => Page::Programs,
            ["contact"] => Page::Contact,
            ["register"] => Page::Register,
            ["payment"] => Page::Payment,
            ["login"] | ["dashboard", "login"] => Page::StaffLogin,
            ["dashboard"] => Page::Dashboard(DashboardSection::Registrants),
            ["dashboard", slug] => DashboardSection::from_slug(slug)
                .map(Page::Dashboard)
                .unwrap_or(Page::NotFound),
            _ => Page::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Programs => "/programs".to_string(),
            Page::Contact => "/contact".to_string(),
            Page::Register => "/register".to_string(),
            Page::Payment => "/payment".to_string(),
            Page::StaffLogin => "/login".to_string(),
            Page::Dashboard(section) => format!("/dashboard/{}", section.slug()),
            Page::NotFound => "/not-found".to_string(),
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, Page::Dashboard(_))
    }
}
