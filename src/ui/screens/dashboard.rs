//! Live monitor dashboard
//!
//! Mirrors the remote status document. The screen never does its own
//! counting: every update replaces the snapshot wholesale, and the derived
//! occupancy figure is computed at render time.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::remote::CounterSnapshot;
use crate::ui::components::LinkStatus;
use crate::ui::layout::centered_column;
use crate::ui::styles::Styles;

pub struct DashboardScreen {
    snapshot: Option<CounterSnapshot>,
    last_update: Option<DateTime<Local>>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            last_update: None,
        }
    }

    /// Replace the displayed counters with the latest remote snapshot
    pub fn apply_snapshot(&mut self, snapshot: CounterSnapshot, at: DateTime<Local>) {
        self.snapshot = Some(snapshot);
        self.last_update = Some(at);
    }

    /// Forget stale data when a fresh subscription starts
    pub fn reset(&mut self) {
        self.snapshot = None;
        self.last_update = None;
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Option<CounterSnapshot> {
        self.snapshot
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, styles: &Styles, link: &LinkStatus) {
        // Title block top-left; the transition circle shrinks into this
        let title_area = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 2);
        let title = Paragraph::new(vec![
            Line::from(Span::styled("AI TRACK CAR", styles.title)),
            Line::from(Span::styled("Live Monitor", styles.label)),
        ]);
        frame.render_widget(title, title_area);

        let column = centered_column(area, 66);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Room for the title block
                Constraint::Length(5), // Counter tiles
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Occupancy gauge
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Last update / link state
                Constraint::Min(0),
            ])
            .split(column);

        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[1]);

        let (entries, exits, inside) = match self.snapshot {
            Some(s) => (
                s.entries.to_string(),
                s.exits.to_string(),
                s.inside.to_string(),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        self.render_tile(frame, tiles[0], "ENTRIES", &entries, styles.success_text, styles);
        self.render_tile(frame, tiles[1], "EXITS", &exits, styles.warning_text, styles);
        self.render_tile(frame, tiles[2], "INSIDE", &inside, styles.title, styles);

        // Occupancy: share of entered vehicles still inside, derived here
        let snapshot = self.snapshot.unwrap_or_default();
        let ratio = snapshot.occupancy_ratio();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.border_unfocused)
                    .title(" Occupancy "),
            )
            .gauge_style(styles.title)
            .ratio(ratio)
            .label(format!("{:.0}%", ratio * 100.0));
        frame.render_widget(gauge, rows[3]);

        let footer = match link {
            LinkStatus::Lost => Line::from(Span::styled(
                "Connection lost. Press [r] to reconnect.",
                styles.error_text,
            )),
            _ => match self.last_update {
                Some(at) => Line::from(vec![
                    Span::styled("Last update ", styles.label),
                    Span::styled(at.format("%H:%M:%S").to_string(), styles.normal_text),
                ]),
                None => Line::from(Span::styled("Waiting for data...", styles.muted_text)),
            },
        };
        frame.render_widget(Paragraph::new(footer).centered(), rows[5]);
    }

    fn render_tile(
        &self,
        frame: &mut Frame,
        area: Rect,
        name: &str,
        value: &str,
        value_style: ratatui::style::Style,
        styles: &Styles,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border_unfocused)
            .title(format!(" {name} "));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(value.to_string(), value_style))).centered(),
            rows[1],
        );
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_replaced_wholesale() {
        let mut screen = DashboardScreen::new();
        screen.apply_snapshot(
            CounterSnapshot {
                entries: 5,
                exits: 2,
                inside: 3,
            },
            Local::now(),
        );
        screen.apply_snapshot(
            CounterSnapshot {
                entries: 7,
                exits: 2,
                inside: 5,
            },
            Local::now(),
        );

        // Only the latest snapshot shows; nothing accumulates
        assert_eq!(
            screen.snapshot(),
            Some(CounterSnapshot {
                entries: 7,
                exits: 2,
                inside: 5
            })
        );
    }

    #[test]
    fn test_reset_forgets_stale_data() {
        let mut screen = DashboardScreen::new();
        screen.apply_snapshot(
            CounterSnapshot {
                entries: 1,
                exits: 0,
                inside: 1,
            },
            Local::now(),
        );
        screen.reset();
        assert_eq!(screen.snapshot(), None);
    }
}
