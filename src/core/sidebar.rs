//! # Chat Sidebar
//!
//! Search box, tab strip and hamburger menu above the chat list. Only the
//! search text affects what is listed; tabs and menu are presentational.

use crate::core::chat::{Chat, ChatRegistry};
use crate::core::filter::SearchQuery;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarTab {
    #[default]
    Chats,
    Contacts,
    Channels,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 3] = [SidebarTab::Chats, SidebarTab::Contacts, SidebarTab::Channels];

    pub fn label(&self) -> &'static str {
        match self {
            SidebarTab::Chats => "Чаты",
            SidebarTab::Contacts => "Контакты",
            SidebarTab::Channels => "Каналы",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SidebarTab::Chats => 0,
            SidebarTab::Contacts => 1,
            SidebarTab::Channels => 2,
        }
    }

    pub fn next(&self) -> SidebarTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Entries of the hamburger menu, in display order.
pub const MENU_ITEMS: &[&str] = &["Профиль", "Контакты", "Настройки", "Ночной режим", "Каналы"];

#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    query: SearchQuery,
    pub active_tab: SidebarTab,
    pub menu_open: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query.set(query);
    }

    /// Chats whose name contains the query, in registry order.
    pub fn filter<'a>(&self, registry: &'a ChatRegistry) -> Vec<&'a Chat> {
        registry
            .chats()
            .iter()
            .filter(|chat| self.query.matches(&chat.name))
            .collect()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::SeedData;

    fn registry() -> ChatRegistry {
        ChatRegistry::new(SeedData::builtin().chats)
    }

    fn ids(chats: &[&Chat]) -> Vec<u32> {
        chats.iter().map(|c| c.id).collect()
    }

    #[test]
    fn empty_query_lists_registry_in_order() {
        let registry = registry();
        let sidebar = SidebarState::new();
        let all: Vec<u32> = registry.chats().iter().map(|c| c.id).collect();
        assert_eq!(ids(&sidebar.filter(&registry)), all);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let registry = registry();
        let mut lower = SidebarState::new();
        lower.set_query("чат");
        let mut upper = SidebarState::new();
        upper.set_query("ЧАТ");
        assert_eq!(ids(&lower.filter(&registry)), ids(&upper.filter(&registry)));
        assert_eq!(ids(&lower.filter(&registry)), vec![3]);
    }

    #[test]
    fn filter_matches_names_only() {
        let registry = registry();
        let mut sidebar = SidebarState::new();
        // "Анна" only appears in chat 8's last message preview
        sidebar.set_query("анна");
        assert!(sidebar.filter(&registry).is_empty());
    }

    #[test]
    fn filter_preserves_order() {
        let registry = registry();
        let mut sidebar = SidebarState::new();
        sidebar.set_query("о");
        let found = ids(&sidebar.filter(&registry));
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
        assert!(found.len() > 1);
    }

    #[test]
    fn filter_does_not_touch_registry() {
        let registry = registry();
        let mut sidebar = SidebarState::new();
        sidebar.set_query("zzz");
        assert!(sidebar.filter(&registry).is_empty());
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn tabs_cycle() {
        assert_eq!(SidebarTab::Chats.next(), SidebarTab::Contacts);
        assert_eq!(SidebarTab::Channels.next(), SidebarTab::Chats);
    }

    #[test]
    fn menu_toggles() {
        let mut sidebar = SidebarState::new();
        sidebar.toggle_menu();
        assert!(sidebar.menu_open);
        sidebar.toggle_menu();
        assert!(!sidebar.menu_open);
    }
}
