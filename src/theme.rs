// Light/dark theme, the particle style each implies, and the persisted
// preference.

use crate::color::Color;

pub const STORAGE_KEY: &str = "theme";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    /// Anything other than `"dark"` is treated as light.
    pub fn parse(name: &str) -> Theme {
        match name {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn style(self) -> &'static ThemeStyle {
        match self {
            Theme::Light => &ThemeStyle::LIGHT,
            Theme::Dark => &ThemeStyle::DARK,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeStyle {
    pub particle_count: usize,
    pub palette: [Color; 2],
    // half-open [min, max)
    pub opacity: (f64, f64),
    pub link_opacity: f64,
}

impl ThemeStyle {
    pub const DARK: ThemeStyle = ThemeStyle {
        particle_count: 80,
        palette: [Color::from_u32(0x08FDD8), Color::from_u32(0xB400FF)],
        opacity: (0.2, 0.7),
        link_opacity: 0.2,
    };

    pub const LIGHT: ThemeStyle = ThemeStyle {
        particle_count: 50,
        palette: [Color::from_u32(0xe85d75), Color::from_u32(0xf5a623)],
        opacity: (0.1, 0.4),
        link_opacity: 0.1,
    };
}

pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub struct ThemePreference<St> {
    store: St,
}

impl<St: ThemeStore> ThemePreference<St> {
    pub fn new(store: St) -> Self {
        ThemePreference { store }
    }

    pub fn load(&self) -> Theme {
        self.store
            .get(STORAGE_KEY)
            .map(|name| Theme::parse(&name))
            .unwrap_or_default()
    }

    pub fn save(&mut self, theme: Theme) {
        self.store.set(STORAGE_KEY, theme.as_str());
    }
}

/// Picks the `src` a `.theme-image` should show, or `None` to leave it alone.
pub fn image_source<'a>(theme: Theme, light: Option<&'a str>, dark: Option<&'a str>) -> Option<&'a str> {
    match (theme, dark) {
        (Theme::Dark, Some(dark)) => Some(dark),
        _ => light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl ThemeStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_owned(), value.to_owned());
        }
    }

    #[test]
    fn unknown_names_fall_back_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("Dark"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_round_trips_names() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        for theme in [Theme::Light, Theme::Dark].iter() {
            assert_eq!(Theme::parse(theme.as_str()), *theme);
        }
    }

    #[test]
    fn styles_match_theme_density() {
        assert_eq!(Theme::Dark.style().particle_count, 80);
        assert_eq!(Theme::Light.style().particle_count, 50);
        assert_eq!(Theme::Dark.style().link_opacity, 0.2);
        assert_eq!(Theme::Light.style().link_opacity, 0.1);
    }

    #[test]
    fn preference_defaults_to_light() {
        let prefs = ThemePreference::new(MemoryStore::default());
        assert_eq!(prefs.load(), Theme::Light);
    }

    #[test]
    fn preference_persists_under_fixed_key() {
        let mut prefs = ThemePreference::new(MemoryStore::default());
        prefs.save(Theme::Dark);
        assert_eq!(prefs.load(), Theme::Dark);
        assert_eq!(prefs.store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn garbage_in_store_loads_as_light() {
        let mut store = MemoryStore::default();
        store.set("theme", "sepia");
        assert_eq!(ThemePreference::new(store).load(), Theme::Light);
    }

    #[test]
    fn dark_image_falls_back_to_light_source() {
        assert_eq!(image_source(Theme::Dark, Some("l.png"), Some("d.png")), Some("d.png"));
        assert_eq!(image_source(Theme::Dark, Some("l.png"), None), Some("l.png"));
        assert_eq!(image_source(Theme::Light, Some("l.png"), Some("d.png")), Some("l.png"));
        assert_eq!(image_source(Theme::Light, None, Some("d.png")), None);
    }
}
