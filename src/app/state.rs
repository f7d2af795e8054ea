use crate::app::event::RequestId;
use crate::config::AppConfig;
use crate::dictionary::error::LookupError;
use crate::dictionary::model::DictionaryEntry;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Everything the screen shows about the current lookup. Exactly one variant
/// holds at a time, so a spinner and an error can never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
        word: String,
    },
    Success(Vec<DictionaryEntry>),
    Error(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LookupState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        match self {
            LookupState::Success(entries) => entries,
            _ => &[],
        }
    }
}

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// The slice of text to show in a field `width` columns wide, scrolled so
    /// the cursor stays on screen, and the cursor's column within that slice.
    pub fn visible_window(&self, width: usize) -> (&str, usize) {
        if width == 0 {
            return ("", 0);
        }

        // Drop leading chars until the cursor fits, keeping one column for it
        let mut start = 0;
        let mut cursor_col = UnicodeWidthStr::width(&self.text[..self.cursor]);
        for (i, c) in self.text[..self.cursor].char_indices() {
            if cursor_col < width {
                break;
            }
            cursor_col -= c.width().unwrap_or(0);
            start = i + c.len_utf8();
        }

        let mut end = self.text.len();
        let mut used = 0;
        for (i, c) in self.text[start..].char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                end = start + i;
                break;
            }
            used += w;
        }

        (&self.text[start..end], cursor_col)
    }

    /// The query as it would be submitted.
    pub fn query(&self) -> &str {
        self.text.trim()
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub input: InputState,
    pub lookup: LookupState,
    pub results_scroll: u16,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    next_request_id: RequestId,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            input: InputState::new(),
            lookup: LookupState::Idle,
            results_scroll: 0,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            next_request_id: 1,
        }
    }

    /// Enter the loading state for `word` and return the id the eventual
    /// response must carry to be accepted.
    pub fn begin_lookup(&mut self, word: String) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.lookup = LookupState::Loading { request_id, word };
        self.results_scroll = 0;
        self.dirty = true;
        request_id
    }

    pub fn fail_validation(&mut self) {
        self.lookup = LookupState::Error(LookupError::EmptyQuery.user_message());
        self.results_scroll = 0;
        self.dirty = true;
    }

    /// Apply a finished lookup. Returns `false` when the response belongs to
    /// a request that has since been superseded, leaving state untouched.
    pub fn finish_lookup(
        &mut self,
        request_id: RequestId,
        outcome: Result<Vec<DictionaryEntry>, LookupError>,
    ) -> bool {
        match &self.lookup {
            LookupState::Loading { request_id: current, .. } if *current == request_id => {}
            _ => return false,
        }

        self.lookup = match outcome {
            Ok(entries) => LookupState::Success(entries),
            Err(e) => LookupState::Error(e.user_message()),
        };
        self.results_scroll = 0;
        self.dirty = true;
        true
    }

    /// Entries the results pane renders: the first one, or every one when
    /// `ui.show_all_entries` is set.
    pub fn visible_entries(&self) -> &[DictionaryEntry] {
        let entries = self.lookup.entries();
        if self.config.ui.show_all_entries {
            entries
        } else {
            &entries[..entries.len().min(1)]
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }

    /// Scroll towards the end, never past `max`.
    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        self.results_scroll = self.results_scroll.saturating_add(lines).min(max);
    }

    pub fn status_line(&self) -> String {
        match &self.lookup {
            LookupState::Idle => "Ready".to_string(),
            LookupState::Loading { word, .. } => format!("Looking up \"{}\"", word),
            LookupState::Success(entries) => match entries.len() {
                0 => "No entries".to_string(),
                1 => "1 entry".to_string(),
                n if self.config.ui.show_all_entries => format!("{} entries", n),
                n => format!("Showing 1 of {} entries", n),
            },
            LookupState::Error(_) => "Lookup failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::error::{NETWORK_ERROR_MESSAGE, VALIDATION_MESSAGE};

    fn entry(word: &str) -> DictionaryEntry {
        DictionaryEntry {
            word: word.to_string(),
            phonetic: None,
            meanings: vec![],
        }
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hélo");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "élo");
        input.move_right();
        assert_eq!(input.cursor, 'é'.len_utf8());
        input.move_end();
        input.insert_char(' ');
        input.insert_char('x');
        input.delete_word_back();
        assert_eq!(input.text, "élo ");
        assert_eq!(input.query(), "élo");
        input.clear();
        assert_eq!(input.text, "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_visible_window_short_text() {
        let mut input = InputState::new();
        for c in "hello".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.visible_window(20), ("hello", 5));
        input.move_home();
        assert_eq!(input.visible_window(20), ("hello", 0));
        assert_eq!(input.visible_window(0), ("", 0));
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        let mut input = InputState::new();
        let text: String = ('a'..='z').cycle().take(80).collect();
        for c in text.chars() {
            input.insert_char(c);
        }

        // Cursor at the end: the tail is shown with room for the cursor
        let (shown, col) = input.visible_window(30);
        assert_eq!(shown, &text[51..]);
        assert_eq!(col, 29);

        // Back at the start the window scrolls back too
        input.move_home();
        let (shown, col) = input.visible_window(30);
        assert_eq!(shown, &text[..30]);
        assert_eq!(col, 0);
    }

    #[test]
    fn test_visible_window_wide_chars() {
        let mut input = InputState::new();
        for c in "日本語の辞書".chars() {
            input.insert_char(c);
        }
        let (shown, col) = input.visible_window(5);
        assert!(UnicodeWidthStr::width(shown) <= 5);
        assert!(col < 5);
        assert!(shown.ends_with('書'));
    }

    #[test]
    fn test_scroll_down_is_bounded() {
        let mut state = AppState::new(AppConfig::default());
        state.scroll_down(10, 4);
        assert_eq!(state.results_scroll, 4);
        state.scroll_down(1, 4);
        assert_eq!(state.results_scroll, 4);
        state.scroll_up(3);
        assert_eq!(state.results_scroll, 1);
        state.scroll_up(3);
        assert_eq!(state.results_scroll, 0);
    }

    #[test]
    fn test_request_ids_increase() {
        let mut state = AppState::new(AppConfig::default());
        let a = state.begin_lookup("one".into());
        let b = state.begin_lookup("two".into());
        assert!(b > a);
        assert_eq!(
            state.lookup,
            LookupState::Loading {
                request_id: b,
                word: "two".into()
            }
        );
    }

    #[test]
    fn test_finish_lookup_applies_latest_only() {
        let mut state = AppState::new(AppConfig::default());
        let stale = state.begin_lookup("first".into());
        let latest = state.begin_lookup("second".into());

        assert!(!state.finish_lookup(stale, Ok(vec![entry("first")])));
        assert!(state.lookup.is_loading());

        assert!(state.finish_lookup(latest, Ok(vec![entry("second")])));
        assert_eq!(state.lookup.entries()[0].word, "second");

        // A late reply for an already-settled request is ignored too.
        assert!(!state.finish_lookup(latest, Err(LookupError::Transport("late".into()))));
        assert_eq!(state.lookup.entries()[0].word, "second");
    }

    #[test]
    fn test_failed_lookup_clears_prior_result() {
        let mut state = AppState::new(AppConfig::default());
        let id = state.begin_lookup("hello".into());
        state.finish_lookup(id, Ok(vec![entry("hello")]));

        let id = state.begin_lookup("hello".into());
        assert!(state.lookup.entries().is_empty());
        state.finish_lookup(id, Err(LookupError::Transport("offline".into())));

        assert!(!state.lookup.is_loading());
        assert!(state.lookup.entries().is_empty());
        assert_eq!(state.lookup.error_message(), Some(NETWORK_ERROR_MESSAGE));
    }

    #[test]
    fn test_validation_failure() {
        let mut state = AppState::new(AppConfig::default());
        state.fail_validation();
        assert_eq!(state.lookup.error_message(), Some(VALIDATION_MESSAGE));
        assert!(!state.lookup.is_loading());
    }

    #[test]
    fn test_visible_entries_first_only_by_default() {
        let mut state = AppState::new(AppConfig::default());
        let id = state.begin_lookup("bank".into());
        state.finish_lookup(id, Ok(vec![entry("bank"), entry("bank")]));
        assert_eq!(state.visible_entries().len(), 1);
        assert_eq!(state.status_line(), "Showing 1 of 2 entries");

        state.config.ui.show_all_entries = true;
        assert_eq!(state.visible_entries().len(), 2);
        assert_eq!(state.status_line(), "2 entries");
    }

    #[test]
    fn test_visible_entries_empty_success() {
        let mut state = AppState::new(AppConfig::default());
        let id = state.begin_lookup("void".into());
        state.finish_lookup(id, Ok(vec![]));
        assert!(state.visible_entries().is_empty());
        assert_eq!(state.status_line(), "No entries");
    }
}
