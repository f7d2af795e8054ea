use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "❯ ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Word ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let prompt_width = UnicodeWidthStr::width(PROMPT);
    let field_width = (inner.width as usize).saturating_sub(prompt_width);
    let (shown, cursor_col) = state.input.visible_window(field_width);

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(shown, Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    // Columns are display widths; clamp inside the box before narrowing
    let offset = prompt_width.saturating_add(cursor_col);
    let max_offset = (inner.width as usize).saturating_sub(1);
    let cursor_x = inner.x.saturating_add(offset.min(max_offset) as u16);
    frame.set_cursor_position((cursor_x, inner.y));
}
