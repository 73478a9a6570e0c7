//! # Dashboard Page
//!
//! ```text
//! ┌ stats ┐┌ stats ┐┌ stats ┐┌ stats ┐
//! ┌ Последняя активность ──┐┌ Топ чатов ──┐
//! │ ✉ Александр Петров ... ││ 1 Рабочий .. │
//! └────────────────────────┘└──────────────┘
//! ┌ summary ┐┌ summary ┐┌ summary ┐        gauges
//! ```
//!
//! Read-only: everything comes from `Dashboard`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, List, ListItem, Paragraph};

use crate::core::dashboard::{ActivityKind, Dashboard, SummaryCard};
use crate::tui::component::Component;
use crate::tui::components::admin::stats_card::{CARD_HEIGHT, StatsCardView};

const SUMMARY_HEIGHT: u16 = 5;

pub struct DashboardPage<'a> {
    pub dashboard: &'a Dashboard,
}

fn panel(title: &str) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title))
}

fn kind_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::User => Color::Green,
        ActivityKind::Message => Color::Blue,
        ActivityKind::Channel => Color::Magenta,
        ActivityKind::Warning => Color::Red,
    }
}

fn equal_columns(n: usize) -> Layout {
    Layout::horizontal(vec![Constraint::Ratio(1, n.max(1) as u32); n.max(1)])
}

impl<'a> DashboardPage<'a> {
    fn render_activity(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .dashboard
            .activities
            .iter()
            .map(|a| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!(" {} ", a.kind.marker()),
                            Style::default().fg(kind_color(a.kind)),
                        ),
                        Span::styled(a.user.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" "),
                        Span::raw(a.action.as_str()),
                    ]),
                    Line::styled(format!("   {}", a.time), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).block(panel("Последняя активность")), area);
    }

    fn render_top_chats(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .dashboard
            .ranked_top_chats()
            .map(|(rank, chat)| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!(" {} ", rank), Style::default().fg(Color::Cyan)),
                        Span::styled(chat.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::styled(
                        format!("   {} сообщений · {} участников", chat.messages, chat.members),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).block(panel("Топ чатов по активности")), area);
    }

    fn render_summary(frame: &mut Frame, area: Rect, summary: &SummaryCard) {
        let block = panel(&summary.title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [value_area, caption_area, bar_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                summary.value.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            value_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                summary.caption.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            caption_area,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
                .percent(summary.percent.min(100)),
            bar_area,
        );
    }
}

impl<'a> Component for DashboardPage<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [stats_area, middle_area, summary_area] = Layout::vertical([
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(SUMMARY_HEIGHT),
        ])
        .areas(area);

        let stats = &self.dashboard.stats;
        for (card, card_area) in stats.iter().zip(equal_columns(stats.len()).split(stats_area).iter()) {
            StatsCardView { card }.render(frame, *card_area);
        }

        let [activity_area, top_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(middle_area);
        self.render_activity(frame, activity_area);
        self.render_top_chats(frame, top_area);

        let summaries = &self.dashboard.summaries;
        for (summary, summary_rect) in summaries
            .iter()
            .zip(equal_columns(summaries.len()).split(summary_area).iter())
        {
            Self::render_summary(frame, *summary_rect, summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::SeedData;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(dashboard: &Dashboard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
        terminal
            .draw(|f| DashboardPage { dashboard }.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_builtin_dashboard_renders_every_section() {
        let seed = SeedData::builtin();
        let text = screen(&seed.dashboard);
        assert!(text.contains("12,845"));
        assert!(text.contains("↑ 12.5% за месяц"));
        assert!(text.contains("Последняя активность"));
        assert!(text.contains("зарегистрировалась"));
        assert!(text.contains("Топ чатов по активности"));
        assert!(text.contains("1254 сообщений"));
        assert!(text.contains("Онлайн сейчас"));
        assert!(text.contains("65%"));
    }

    #[test]
    fn test_empty_dashboard_renders_frames_only() {
        let text = screen(&Dashboard::default());
        assert!(text.contains("Последняя активность"));
        assert!(!text.contains("за месяц"));
    }
}
