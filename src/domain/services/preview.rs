#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;

use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::Theme;

use super::Syntaxes;
use super::SYNTAX_SET;
use crate::domain::models::language_from_path;
use crate::domain::models::GeneratedTest;

pub fn preview_title(test: &GeneratedTest) -> String {
    return format!("{} ({})", test.filepath, language_from_path(&test.filepath));
}

/// Syntax highlighted, line numbered rendering of a generated test.
pub fn preview_lines(test: &GeneratedTest, theme: &Theme) -> Vec<Line<'static>> {
    let mut highlight = HighlightLines::new(Syntaxes::for_path(&test.filepath), theme);
    let width = test.content.lines().count().to_string().len();

    return test
        .content
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:>width$} ", idx + 1),
                Style::default().fg(ratatui::style::Color::DarkGray),
            )];

            // Multi-line constructs only highlight correctly with the newline
            // kept on each line.
            let line_nl = format!("{line}\n");
            match highlight.highlight_line(&line_nl, &SYNTAX_SET) {
                Ok(segments) => {
                    for (style, content) in segments {
                        let text = content.trim_end_matches('\n').to_string();
                        if text.is_empty() {
                            continue;
                        }
                        spans.push(Span::styled(
                            text,
                            Style {
                                fg: Syntaxes::translate_colour(style.foreground),
                                ..Style::default()
                            },
                        ));
                    }
                }
                Err(err) => {
                    tracing::warn!(error = ?err, "failed to highlight line");
                    spans.push(Span::raw(line.to_string()));
                }
            }

            return Line::from(spans);
        })
        .collect();
}
