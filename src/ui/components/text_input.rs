use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::styles::Styles;

/// A labeled single-line input field.
///
/// Password fields render as bullets until revealed; read-only fields show
/// a fixed value and never take the cursor.
#[derive(Debug, Clone)]
pub struct TextInput {
    label: String,
    placeholder: String,
    value: String,
    cursor: usize,
    masked: bool,
    revealed: bool,
    read_only: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            value: String::new(),
            cursor: 0,
            masked: false,
            revealed: false,
            read_only: false,
        }
    }

    /// Render the value as bullets until revealed
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Fixed display value, no editing
    pub fn read_only(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.read_only = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        if !self.read_only {
            self.value.clear();
            self.cursor = 0;
        }
    }

    /// Toggle password visibility. No effect on unmasked fields.
    pub fn toggle_reveal(&mut self) {
        if self.masked {
            self.revealed = !self.revealed;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.read_only {
            return;
        }
        self.value.insert(self.byte_index(), c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.read_only || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.value.remove(index);
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Byte offset of the char-based cursor
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn display_value(&self) -> String {
        if self.masked && !self.revealed {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Render as two lines: label, then the value on an input-colored row
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, styles: &Styles) {
        if area.height < 2 {
            return;
        }
        let label_area = Rect::new(area.x, area.y, area.width, 1);
        let input_area = Rect::new(area.x, area.y + 1, area.width, 1);

        let label_style = if focused { styles.title } else { styles.label };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(&self.label, label_style))),
            label_area,
        );

        let row_style = if focused {
            styles.input_focused
        } else {
            styles.input_text
        };
        let (content, content_style) = if self.value.is_empty() && !focused {
            (self.placeholder.clone(), styles.input_placeholder)
        } else {
            (self.display_value(), row_style)
        };
        let input = Paragraph::new(Line::from(Span::styled(format!(" {content}"), content_style)))
            .style(row_style);
        frame.render_widget(input, input_area);

        if focused && !self.read_only {
            frame.set_cursor_position((input_area.x + 1 + self.cursor as u16, input_area.y));
        }
    }
}
