use crate::theme::Theme;

/// Bottom navigation destinations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavItem {
    #[default]
    Chat,
    History,
    Explore,
    Profile,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Chat,
        NavItem::History,
        NavItem::Explore,
        NavItem::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Chat => "Chat",
            NavItem::History => "History",
            NavItem::Explore => "Explore",
            NavItem::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Chat => "💬",
            NavItem::History => "🕘",
            NavItem::Explore => "🧭",
            NavItem::Profile => "👤",
        }
    }
}

/// Page-level view flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_hidden: bool,
    pub theme: Theme,
    pub active_nav: NavItem,
}

impl LayoutState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_hidden = !self.sidebar_hidden;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Exactly one item is active at a time
    pub fn activate(&mut self, item: NavItem) {
        self.active_nav = item;
    }

    pub fn is_active(&self, item: NavItem) -> bool {
        self.active_nav == item
    }
}
