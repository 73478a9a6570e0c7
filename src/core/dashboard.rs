//! Read-only content of the admin dashboard: stats cards, activity feed,
//! top chats and the summary gauges. Nothing here changes after startup.

use serde::{Deserialize, Serialize};

/// Month-over-month change shown under a stats card value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub value: f32,
    pub is_positive: bool,
}

impl Trend {
    pub fn label(&self) -> String {
        let arrow = if self.is_positive { "↑" } else { "↓" };
        format!("{} {}% за месяц", arrow, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsCard {
    pub title: String,
    pub value: String,
    pub icon: String,
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    User,
    Message,
    Channel,
    Warning,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::User => "UserPlus",
            ActivityKind::Message => "MessageCircle",
            ActivityKind::Channel => "Radio",
            ActivityKind::Warning => "AlertTriangle",
        }
    }

    /// Single-cell marker used in the terminal feed.
    pub fn marker(&self) -> &'static str {
        match self {
            ActivityKind::User => "+",
            ActivityKind::Message => "✉",
            ActivityKind::Channel => "◉",
            ActivityKind::Warning => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub user: String,
    pub action: String,
    pub time: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopChat {
    pub name: String,
    pub messages: u32,
    pub members: u32,
}

/// Bottom-row card with a headline number and a fill bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    /// Bar fill, clamped to 0..=100 when rendered.
    pub percent: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub stats: Vec<StatsCard>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub top_chats: Vec<TopChat>,
    #[serde(default)]
    pub summaries: Vec<SummaryCard>,
}

impl Dashboard {
    /// Top chats with their 1-based rank, in listed order.
    pub fn ranked_top_chats(&self) -> impl Iterator<Item = (usize, &TopChat)> {
        self.top_chats.iter().enumerate().map(|(i, c)| (i + 1, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_label_shows_direction() {
        let up = Trend { value: 12.5, is_positive: true };
        let down = Trend { value: 2.1, is_positive: false };
        assert_eq!(up.label(), "↑ 12.5% за месяц");
        assert_eq!(down.label(), "↓ 2.1% за месяц");
    }

    #[test]
    fn ranks_start_at_one() {
        let dashboard = Dashboard {
            top_chats: vec![
                TopChat { name: "a".into(), messages: 10, members: 1 },
                TopChat { name: "b".into(), messages: 5, members: 2 },
            ],
            ..Default::default()
        };
        let ranks: Vec<(usize, &str)> = dashboard
            .ranked_top_chats()
            .map(|(rank, chat)| (rank, chat.name.as_str()))
            .collect();
        assert_eq!(ranks, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn activity_markers_are_distinct() {
        let kinds = [ActivityKind::User, ActivityKind::Message, ActivityKind::Channel, ActivityKind::Warning];
        let mut markers: Vec<&str> = kinds.iter().map(|k| k.marker()).collect();
        markers.dedup();
        assert_eq!(markers.len(), 4);
    }
}
