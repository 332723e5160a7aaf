//! Transition overlay rendering
//!
//! Paints the sequencer's circle over the finished frame by writing cells
//! directly; everything inside the circle becomes a solid block of the
//! transition color. Vertical distances are doubled because terminal cells
//! are roughly twice as tall as they are wide.

use ratatui::Frame;

use crate::transition::CircleOverlay;

/// Paint the circle over the whole frame. Must be the last thing rendered.
pub fn render_transition_overlay(frame: &mut Frame, circle: &CircleOverlay) {
    if circle.radius <= 0.0 {
        return;
    }

    let area = frame.area();
    let cx = f64::from(circle.center.0);
    let cy = f64::from(circle.center.1);
    let r_squared = circle.radius * circle.radius;

    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let dx = f64::from(x) - cx;
            let dy = (f64::from(y) - cy) * 2.0;
            if dx * dx + dy * dy <= r_squared {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ');
                    cell.set_bg(circle.color);
                }
            }
        }
    }
}
