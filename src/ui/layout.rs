use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculated layout regions for the app
#[derive(Clone)]
pub struct AppLayout {
    pub content: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from terminal area
    pub fn calculate(area: Rect) -> Self {
        // Vertical split: content | status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Content area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            content: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Helper to create a centered rect for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Center a fixed-width column inside an area, the way the screens lay out
/// their forms. Falls back to the full width on narrow terminals.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    let margin = (area.width - max_width) / 2;
    Rect::new(area.x + margin, area.y, max_width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column_width() {
        let area = Rect::new(0, 0, 100, 30);
        let col = centered_column(area, 48);
        assert_eq!(col.width, 48);
        assert_eq!(col.x, 26);
    }

    #[test]
    fn test_centered_column_narrow_terminal() {
        let area = Rect::new(0, 0, 40, 30);
        let col = centered_column(area, 48);
        assert_eq!(col, area);
    }
}
