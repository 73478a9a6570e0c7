use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState};

use crate::core::admin::AdminPage;
use crate::tui::component::Component;

/// Left-hand list of admin sections. Sections without a page are dimmed.
pub struct AdminNav {
    pub page: AdminPage,
    pub focused: bool,
}

impl AdminNav {
    /// Section under a click inside the nav's `area` (one row per entry).
    pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<AdminPage> {
        if !area.contains(Position::new(column, row)) || row == area.y {
            return None;
        }
        AdminPage::ALL.get((row - area.y - 1) as usize).copied()
    }
}

impl Component for AdminNav {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = AdminPage::ALL
            .iter()
            .map(|page| {
                let style = if page.has_page() {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Line::from(Span::styled(format!(" {}", page.label()), style)))
            })
            .collect();

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Админ-панель ");

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶");

        let mut state = ListState::default().with_selected(Some(self.page.index()));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
