use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub input_box: Rect,
    pub results: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        input_box: chunks[0],
        results: chunks[1],
        status_bar: chunks[2],
    }
}
