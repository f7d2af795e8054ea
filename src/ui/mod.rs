mod input_box;
mod layout;
pub mod results;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    input_box::render(frame, app_layout.input_box, state);
    results::render(frame, app_layout.results, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
