#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

pub const MASK_CHAR: char = '\u{2022}';

/// A single line input with a label. Masked fields hide their content.
pub struct Field<'a> {
    pub label: &'static str,
    pub masked: bool,
    focused: bool,
    textarea: TextArea<'a>,
}

impl<'a> Field<'a> {
    pub fn new(label: &'static str) -> Field<'a> {
        let mut field = Field {
            label,
            masked: false,
            focused: false,
            textarea: TextArea::default(),
        };
        field.style(false);
        return field;
    }

    pub fn masked(label: &'static str) -> Field<'a> {
        let mut field = Field::new(label);
        field.masked = true;
        return field;
    }

    pub fn with_value(mut self, value: &str) -> Field<'a> {
        self.set_value(value);
        return self;
    }

    fn style(&mut self, focused: bool) {
        self.focused = focused;
        let border_type = if focused {
            BorderType::Double
        } else {
            BorderType::Plain
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .title(self.label)
                .padding(Padding::new(1, 1, 0, 0)),
        );
        self.textarea.set_cursor_line_style(Style::default());

        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);
    }

    pub fn value(&self) -> String {
        return self.textarea.lines().join(" ");
    }

    pub fn set_value(&mut self, value: &str) {
        self.textarea = TextArea::new(vec![value.replace('\n', " ")]);
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.style(self.focused);
    }

    pub fn is_focused(&self) -> bool {
        return self.focused;
    }

    /// What the field shows on screen.
    pub fn display(&self) -> String {
        if self.masked {
            return MASK_CHAR.to_string().repeat(self.value().chars().count());
        }

        return self.value();
    }

    pub fn textarea(&self) -> &TextArea<'a> {
        return &self.textarea;
    }
}

/// Ordered fields with one focused at a time.
pub struct Form<'a> {
    pub fields: Vec<Field<'a>>,
    focus: usize,
}

impl<'a> Form<'a> {
    pub fn new(fields: Vec<Field<'a>>) -> Form<'a> {
        let mut form = Form { fields, focus: 0 };
        form.restyle();
        return form;
    }

    fn restyle(&mut self) {
        let focus = self.focus;
        for (idx, field) in self.fields.iter_mut().enumerate() {
            field.style(idx == focus);
        }
    }

    pub fn focus(&self) -> usize {
        return self.focus;
    }

    pub fn focused(&self) -> Option<&Field<'a>> {
        return self.fields.get(self.focus);
    }

    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
        self.restyle();
    }

    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        self.restyle();
    }

    /// Forwards a key press to the focused field. Line breaks are ignored,
    /// every field is a single line.
    pub fn input(&mut self, input: Input) -> bool {
        if matches!(input.key, Key::Enter)
            || matches!(input.key, Key::Char('m') if input.ctrl)
        {
            return false;
        }

        return match self.fields.get_mut(self.focus) {
            Some(field) => field.textarea.input(input),
            None => false,
        };
    }

    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            let text = text.replace(['\r', '\n'], " ");
            field.textarea.insert_str(&text);
        }
    }

    pub fn value(&self, label: &str) -> String {
        return self
            .fields
            .iter()
            .find(|field| return field.label == label)
            .map(|field| return field.value())
            .unwrap_or_default();
    }

    pub fn set_value(&mut self, label: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|field| return field.label == label) {
            field.set_value(value);
        }
    }
}
