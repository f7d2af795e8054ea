//! The definitions pane: a pure function of the lookup state.

use crate::app::state::{AppState, LookupState};
use crate::dictionary::model::DictionaryEntry;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Definitions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let paragraph = Paragraph::new(result_lines(state))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.results_scroll, 0));
    frame.render_widget(paragraph, area);
}

pub fn result_lines(state: &AppState) -> Vec<Line<'static>> {
    match &state.lookup {
        LookupState::Idle => vec![Line::from(Span::styled(
            "Type a word and press Enter.",
            Theme::hint(),
        ))],
        LookupState::Loading { word, .. } => {
            let frame = SPINNER[(state.tick_count as usize) % SPINNER.len()];
            vec![Line::from(vec![
                Span::styled(format!("{} ", frame), Theme::spinner()),
                Span::styled(format!("Looking up \"{}\"…", word), Theme::hint()),
            ])]
        }
        LookupState::Error(msg) => vec![Line::from(Span::styled(
            msg.clone(),
            Theme::error_message(),
        ))],
        LookupState::Success(_) => {
            let mut lines = Vec::new();
            for (i, entry) in state.visible_entries().iter().enumerate() {
                if i > 0 {
                    lines.push(Line::from(""));
                }
                lines.extend(entry_lines(entry));
            }
            lines
        }
    }
}

/// Headword, then per part of speech a heading and its numbered definitions.
pub fn entry_lines(entry: &DictionaryEntry) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut header = vec![Span::styled(entry.word.clone(), Theme::headword())];
    if let Some(phonetic) = entry.phonetic.as_deref().filter(|p| !p.is_empty()) {
        header.push(Span::raw("  "));
        header.push(Span::styled(phonetic.to_string(), Theme::phonetic()));
    }
    lines.push(Line::from(header));

    for meaning in &entry.meanings {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            meaning.part_of_speech.clone(),
            Theme::part_of_speech(),
        )));
        for (n, def) in meaning.definitions.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("{}. {}", n + 1, def.definition),
                Theme::definition(),
            )));
            if let Some(example) = &def.example {
                lines.push(Line::from(Span::styled(
                    format!("Example: \"{}\"", example),
                    Theme::example(),
                )));
            }
        }
    }
    lines
}
