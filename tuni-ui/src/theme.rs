use crate::interop::set_body_class;

const THEME_KEY: &str = "theme-preference";
const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub fn apply_theme_to_document(theme: Theme) {
    set_body_class(DARK_MODE_CLASS, theme.is_dark());
}

pub fn get_cached_theme_preference() -> Option<Theme> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
        .and_then(|theme| Theme::parse(&theme))
}

pub fn set_cached_theme_preference(theme: Theme) {
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return;
    };

    if storage.set_item(THEME_KEY, theme.as_str()).is_err() {
        dioxus_logger::tracing::warn!("Failed to cache theme preference");
    }
}
