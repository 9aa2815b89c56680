use std::path::Path;

use once_cell::sync::Lazy;
use syntect::parsing::SyntaxReference;
use syntect::parsing::SyntaxSet;

pub static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

pub struct Syntaxes {}

impl Syntaxes {
    /// Syntax for a file, by extension, falling back to plain text.
    pub fn for_path(filepath: &str) -> &'static SyntaxReference {
        let extension = Path::new(filepath)
            .extension()
            .map(|ext| return ext.to_string_lossy().to_string())
            .unwrap_or_default();

        return SYNTAX_SET
            .find_syntax_by_extension(&extension)
            .unwrap_or_else(|| return SYNTAX_SET.find_syntax_plain_text());
    }

    pub fn translate_colour(colour: syntect::highlighting::Color) -> Option<ratatui::style::Color> {
        if colour.a == 0 {
            return None;
        }

        return Some(ratatui::style::Color::Rgb(colour.r, colour.g, colour.b));
    }
}
