use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::results;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_LINES: u16 = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::LookupFinished {
            request_id,
            word,
            outcome,
        } => {
            if !state.finish_lookup(request_id, outcome) {
                tracing::debug!(request_id, word = %word, "discarding superseded lookup result");
            } else if let Some(msg) = state.lookup.error_message() {
                tracing::info!(request_id, word = %word, shown = msg, "lookup error shown");
            }
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the spinner animates
            if state.lookup.is_loading() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

/// Validate the current query and, if it is usable, start a lookup for it.
///
/// An empty query fails locally with the validation message and never enters
/// the loading state.
pub fn fetch_definition(state: &mut AppState) -> Vec<Action> {
    let word = state.input.query().to_string();
    if word.is_empty() {
        state.fail_validation();
        return vec![];
    }
    let request_id = state.begin_lookup(word.clone());
    vec![Action::Lookup { request_id, word }]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Paste(text) => {
            for c in text.chars().filter(|c| !c.is_control()) {
                state.input.insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return vec![Action::Quit],
            KeyCode::Char('a') => state.input.move_home(),
            KeyCode::Char('e') => state.input.move_end(),
            KeyCode::Char('u') => state.input.clear(),
            KeyCode::Char('w') => state.input.delete_word_back(),
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Enter => return fetch_definition(state),
        KeyCode::Char(c) => state.input.insert_char(c),
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1, max_scroll(state)),
        KeyCode::PageUp => state.scroll_up(PAGE_LINES),
        KeyCode::PageDown => state.scroll_down(PAGE_LINES, max_scroll(state)),
        _ => {}
    }
    vec![]
}

/// Furthest scroll that still leaves the last result line at the top.
fn max_scroll(state: &AppState) -> u16 {
    let lines = results::result_lines(state).len().saturating_sub(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}
