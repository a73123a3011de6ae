//! Static system announcements shown beside the statistics.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    /// `YYYY-MM-DD`
    pub date: &'static str,
    pub priority: Priority,
}

pub const ANNOUNCEMENTS: [Announcement; 3] = [
    Announcement {
        id: 1,
        title: "Zama FHE Integration Complete",
        content: "Successfully integrated Zama FHE for encrypted cheat detection processing",
        date: "2025-09-15",
        priority: Priority::High,
    },
    Announcement {
        id: 2,
        title: "New Detection Algorithm",
        content: "Added new pattern recognition for speed hacks using FHE computations",
        date: "2025-09-20",
        priority: Priority::Medium,
    },
    Announcement {
        id: 3,
        title: "SDK v2.1 Released",
        content: "Latest version includes improved performance and additional detection types",
        date: "2025-10-05",
        priority: Priority::Low,
    },
];
