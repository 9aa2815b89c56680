use anyhow::bail;
use anyhow::Result;
use once_cell::sync::Lazy;
use syntect::highlighting::Theme;
use syntect::highlighting::ThemeSet;

static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

pub struct Themes {}

impl Themes {
    pub fn list() -> Vec<String> {
        let mut themes = THEME_SET
            .themes
            .keys()
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        themes.sort();

        return themes;
    }

    pub fn get(theme_name: &str) -> Result<Theme> {
        if let Some(theme) = THEME_SET.themes.get(theme_name) {
            return Ok(theme.clone());
        }

        bail!(format!("Theme {theme_name} does not exist"));
    }
}
