//! Mock content shown in each building's detail panel.
//!
//! Content is looked up by entity id through an explicit provider table.
//! Ids without a provider get [`PanelContent::ComingSoon`].

/// Accent used for a highlighted figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Blue,
    Purple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    pub label: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Assistant,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage {
    pub from: Speaker,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleItem {
    pub time: &'static str,
    pub task: &'static str,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reminder {
    pub title: &'static str,
    pub due: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Busy,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub task: &'static str,
    pub presence: Presence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub label: &'static str,
    pub on: bool,
}

/// Body of a detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent {
    Dashboard {
        stats: &'static [Stat],
        meter: Meter,
    },
    Chat {
        messages: &'static [ChatMessage],
        placeholder: &'static str,
    },
    Timeline {
        items: &'static [ScheduleItem],
    },
    Reminders {
        items: &'static [Reminder],
    },
    Analytics {
        stats: &'static [Stat],
        weekly: [u8; 7],
    },
    Collaboration {
        members: &'static [TeamMember],
        action: &'static str,
    },
    Settings {
        toggles: &'static [Toggle],
        voices: &'static [&'static str],
    },
    ComingSoon,
}

impl PanelContent {
    /// Header glyph for the panel.
    pub fn glyph(&self) -> char {
        match self {
            PanelContent::Dashboard { .. } | PanelContent::Analytics { .. } => '▥',
            PanelContent::Chat { .. } => '✉',
            PanelContent::Timeline { .. } => '◷',
            PanelContent::Reminders { .. } => '♪',
            PanelContent::Collaboration { .. } => '☺',
            PanelContent::Settings { .. } => '⚙',
            PanelContent::ComingSoon => '⚡',
        }
    }
}

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn dashboard() -> PanelContent {
    PanelContent::Dashboard {
        stats: &[
            Stat {
                value: "24",
                label: "Active Tasks",
                tone: Tone::Red,
            },
            Stat {
                value: "87%",
                label: "Efficiency",
                tone: Tone::Blue,
            },
        ],
        meter: Meter {
            label: "Neural Processing",
            percent: 98,
        },
    }
}

fn chat() -> PanelContent {
    PanelContent::Chat {
        messages: &[
            ChatMessage {
                from: Speaker::Assistant,
                text: "Hello! I'm your AI assistant. How can I help you optimize your productivity today?",
            },
            ChatMessage {
                from: Speaker::User,
                text: "Show me my task analytics",
            },
        ],
        placeholder: "Type your message...",
    }
}

fn timeline() -> PanelContent {
    PanelContent::Timeline {
        items: &[
            ScheduleItem {
                time: "09:00",
                task: "Team standup meeting",
                status: TaskStatus::Completed,
            },
            ScheduleItem {
                time: "10:30",
                task: "Review project proposals",
                status: TaskStatus::Completed,
            },
            ScheduleItem {
                time: "14:00",
                task: "Client presentation",
                status: TaskStatus::Active,
            },
            ScheduleItem {
                time: "16:00",
                task: "Code review session",
                status: TaskStatus::Pending,
            },
        ],
    }
}

fn reminders() -> PanelContent {
    PanelContent::Reminders {
        items: &[
            Reminder {
                title: "Project deadline approaching",
                due: "2 hours",
                priority: Priority::High,
            },
            Reminder {
                title: "Weekly team sync",
                due: "Tomorrow 9:00 AM",
                priority: Priority::Medium,
            },
            Reminder {
                title: "Update portfolio",
                due: "This weekend",
                priority: Priority::Low,
            },
        ],
    }
}

fn analytics() -> PanelContent {
    PanelContent::Analytics {
        stats: &[
            Stat {
                value: "156",
                label: "Tasks Completed",
                tone: Tone::Red,
            },
            Stat {
                value: "89%",
                label: "Success Rate",
                tone: Tone::Blue,
            },
            Stat {
                value: "7.2h",
                label: "Avg Daily Focus",
                tone: Tone::Purple,
            },
        ],
        weekly: [65, 78, 82, 90, 85, 92, 88],
    }
}

fn collaboration() -> PanelContent {
    PanelContent::Collaboration {
        members: &[
            TeamMember {
                name: "Alex Chen",
                task: "UI Design Review",
                presence: Presence::Online,
            },
            TeamMember {
                name: "Sarah Kim",
                task: "Backend Integration",
                presence: Presence::Busy,
            },
            TeamMember {
                name: "Mike Johnson",
                task: "Testing Phase",
                presence: Presence::Away,
            },
        ],
        action: "Start Team Session",
    }
}

fn settings() -> PanelContent {
    PanelContent::Settings {
        toggles: &[
            Toggle {
                label: "Dark Mode",
                on: true,
            },
            Toggle {
                label: "Notifications",
                on: true,
            },
            Toggle {
                label: "Auto-save",
                on: false,
            },
        ],
        voices: &["Neural Voice Alpha", "Quantum Voice Beta", "Cyber Voice Gamma"],
    }
}

/// Entity id to content provider.
const PROVIDERS: &[(&str, fn() -> PanelContent)] = &[
    ("dashboard", dashboard),
    ("ai-chat", chat),
    ("timeline", timeline),
    ("reminders", reminders),
    ("analytics", analytics),
    ("collaboration", collaboration),
    ("settings", settings),
];

/// Content for an entity's detail panel.
pub fn content_for(id: &str) -> PanelContent {
    PROVIDERS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, provider)| provider())
        .unwrap_or(PanelContent::ComingSoon)
}

#[cfg(test)]
mod tests {
    use memomate_core::Catalog;

    use super::*;

    #[test]
    fn test_every_catalog_entity_has_content() {
        let catalog = Catalog::memomate().unwrap();
        for entity in catalog.entities() {
            assert_ne!(
                content_for(&entity.id),
                PanelContent::ComingSoon,
                "{} has no content",
                entity.id
            );
        }
    }

    #[test]
    fn test_unknown_id_falls_back() {
        assert_eq!(content_for("nonexistent-id"), PanelContent::ComingSoon);
        assert_eq!(content_for(""), PanelContent::ComingSoon);
        assert_eq!(PanelContent::ComingSoon.glyph(), '⚡');
    }

    #[test]
    fn test_timeline_has_one_active_item() {
        let PanelContent::Timeline { items } = content_for("timeline") else {
            panic!("timeline content expected");
        };
        assert_eq!(items.len(), 4);
        assert_eq!(
            items.iter().filter(|i| i.status == TaskStatus::Active).count(),
            1
        );
    }
}
