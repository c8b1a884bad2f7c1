use crate::net::geocode::LocationSuggestion;
use crate::search::text_edit;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

/// What a key or pointer interaction did to the search control.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Ignored,
    /// The query text changed; the host should (re)schedule a lookup.
    QueryChanged,
    /// Highlight, cursor or visibility changed; re-render only.
    Changed,
    /// A city was committed; the host owns the downstream weather fetch.
    Committed(String),
}

/// The suggestion dropdown's state machine.
///
/// Two states: Idle (list hidden) and Showing (list visible with a
/// highlight in `[-1, n-1]`, where `None` stands for -1). The highlight
/// clamps at the last index going down, deselects going up past zero,
/// and resets whenever the list is replaced.
#[derive(Debug, Default)]
pub struct SearchController {
    query: String,
    cursor: usize,
    suggestions: Vec<LocationSuggestion>,
    highlight: Option<usize>,
    visible: bool,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn suggestions(&self) -> &[LocationSuggestion] {
        &self.suggestions
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn is_showing(&self) -> bool {
        self.visible
    }

    /// Replace the list wholesale. Non-empty results open the dropdown;
    /// empty results close it. Either way the highlight resets.
    pub fn apply_suggestions(&mut self, suggestions: Vec<LocationSuggestion>) {
        self.visible = !suggestions.is_empty();
        self.suggestions = suggestions;
        self.highlight = None;
    }

    /// Drop the list without committing (query shrank, Esc, focus lost).
    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.highlight = None;
        self.visible = false;
    }

    pub fn on_key(&mut self, key: KeyEvent) -> SearchOutcome {
        if key.modifiers != KeyModifiers::NONE && key.modifiers != KeyModifiers::SHIFT {
            return SearchOutcome::Ignored;
        }

        match key.code {
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return SearchOutcome::Ignored;
                }
                text_edit::insert_char(&mut self.query, &mut self.cursor, ch);
                SearchOutcome::QueryChanged
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.query, &mut self.cursor) {
                    SearchOutcome::QueryChanged
                } else {
                    SearchOutcome::Ignored
                }
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.query, &mut self.cursor) {
                    SearchOutcome::QueryChanged
                } else {
                    SearchOutcome::Ignored
                }
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.query) {
                    SearchOutcome::Changed
                } else {
                    SearchOutcome::Ignored
                }
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.query) {
                    SearchOutcome::Changed
                } else {
                    SearchOutcome::Ignored
                }
            }
            KeyCode::Home => {
                if self.cursor == 0 {
                    return SearchOutcome::Ignored;
                }
                self.cursor = 0;
                SearchOutcome::Changed
            }
            KeyCode::End => {
                let end = text_edit::char_count(&self.query);
                if self.cursor == end {
                    return SearchOutcome::Ignored;
                }
                self.cursor = end;
                SearchOutcome::Changed
            }
            KeyCode::Down => self.highlight_down(),
            KeyCode::Up => self.highlight_up(),
            KeyCode::Enter => self.commit_on_enter(),
            KeyCode::Esc => {
                if !self.visible {
                    return SearchOutcome::Ignored;
                }
                self.clear_suggestions();
                SearchOutcome::Changed
            }
            _ => SearchOutcome::Ignored,
        }
    }

    /// Pointer hover over row `index`.
    pub fn hover(&mut self, index: usize) -> SearchOutcome {
        if !self.visible || index >= self.suggestions.len() {
            return SearchOutcome::Ignored;
        }
        if self.highlight == Some(index) {
            return SearchOutcome::Ignored;
        }
        self.highlight = Some(index);
        SearchOutcome::Changed
    }

    /// Pointer click on row `index` commits it regardless of highlight.
    pub fn click(&mut self, index: usize) -> SearchOutcome {
        if !self.visible || index >= self.suggestions.len() {
            return SearchOutcome::Ignored;
        }
        let city = self.suggestions[index].name.clone();
        self.commit(city)
    }

    /// Focus left the control's interactive region: same as Esc.
    pub fn focus_lost(&mut self) -> SearchOutcome {
        if !self.visible {
            return SearchOutcome::Ignored;
        }
        self.clear_suggestions();
        SearchOutcome::Changed
    }

    fn highlight_down(&mut self) -> SearchOutcome {
        if !self.visible || self.suggestions.is_empty() {
            return SearchOutcome::Ignored;
        }
        let next = match self.highlight {
            None => 0,
            Some(index) if index + 1 < self.suggestions.len() => index + 1,
            // Clamped at the last row, no wraparound.
            Some(_) => return SearchOutcome::Ignored,
        };
        self.highlight = Some(next);
        SearchOutcome::Changed
    }

    fn highlight_up(&mut self) -> SearchOutcome {
        if !self.visible {
            return SearchOutcome::Ignored;
        }
        match self.highlight {
            // Stepping above the first row deselects rather than clamping.
            Some(0) => {
                self.highlight = None;
                SearchOutcome::Changed
            }
            Some(index) => {
                self.highlight = Some(index - 1);
                SearchOutcome::Changed
            }
            None => SearchOutcome::Ignored,
        }
    }

    fn commit_on_enter(&mut self) -> SearchOutcome {
        if self.visible {
            if let Some(index) = self.highlight {
                if let Some(suggestion) = self.suggestions.get(index) {
                    // Bare name on purpose: the qualified label is display
                    // only and the weather API resolves plain city names.
                    let city = suggestion.name.clone();
                    return self.commit(city);
                }
            }
        }

        let typed = self.query.trim().to_string();
        if typed.is_empty() {
            return SearchOutcome::Ignored;
        }
        self.commit(typed)
    }

    fn commit(&mut self, city: String) -> SearchOutcome {
        self.query.clear();
        self.cursor = 0;
        self.clear_suggestions();
        SearchOutcome::Committed(city)
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchController, SearchOutcome};
    use crate::net::geocode::LocationSuggestion;
    use crate::terminal::{KeyCode, KeyEvent};

    fn suggestion(name: &str) -> LocationSuggestion {
        LocationSuggestion {
            name: name.to_string(),
            country: "GB".to_string(),
            state: None,
            lat: 0.0,
            lon: 0.0,
        }
    }

    fn type_text(controller: &mut SearchController, text: &str) {
        for ch in text.chars() {
            assert_eq!(
                controller.on_key(KeyEvent::plain(KeyCode::Char(ch))),
                SearchOutcome::QueryChanged
            );
        }
    }

    fn press(controller: &mut SearchController, code: KeyCode) -> SearchOutcome {
        controller.on_key(KeyEvent::plain(code))
    }

    #[test]
    fn non_empty_results_open_the_dropdown_with_no_highlight() {
        let mut controller = SearchController::new();
        type_text(&mut controller, "Lon");
        controller.apply_suggestions(vec![suggestion("London")]);

        assert!(controller.is_showing());
        assert_eq!(controller.highlight(), None);
        assert_eq!(controller.suggestions().len(), 1);
    }

    #[test]
    fn empty_results_close_the_dropdown() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(vec![suggestion("London")]);
        controller.apply_suggestions(Vec::new());
        assert!(!controller.is_showing());
        assert_eq!(controller.highlight(), None);
    }

    #[test]
    fn down_clamps_at_the_last_row() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(vec![suggestion("A"), suggestion("B")]);

        assert_eq!(press(&mut controller, KeyCode::Down), SearchOutcome::Changed);
        assert_eq!(controller.highlight(), Some(0));
        assert_eq!(press(&mut controller, KeyCode::Down), SearchOutcome::Changed);
        assert_eq!(controller.highlight(), Some(1));
        // No wraparound.
        assert_eq!(press(&mut controller, KeyCode::Down), SearchOutcome::Ignored);
        assert_eq!(controller.highlight(), Some(1));
    }

    #[test]
    fn up_deselects_below_zero_and_stays_deselected() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(vec![suggestion("A"), suggestion("B")]);

        press(&mut controller, KeyCode::Down);
        assert_eq!(press(&mut controller, KeyCode::Up), SearchOutcome::Changed);
        assert_eq!(controller.highlight(), None);
        assert_eq!(press(&mut controller, KeyCode::Up), SearchOutcome::Ignored);
        assert_eq!(controller.highlight(), None);
    }

    #[test]
    fn highlight_stays_in_range_across_replacements() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(vec![
            suggestion("A"),
            suggestion("B"),
            suggestion("C"),
        ]);
        press(&mut controller, KeyCode::Down);
        press(&mut controller, KeyCode::Down);
        press(&mut controller, KeyCode::Down);
        assert_eq!(controller.highlight(), Some(2));

        controller.apply_suggestions(vec![suggestion("X")]);
        assert_eq!(controller.highlight(), None);
        press(&mut controller, KeyCode::Down);
        assert_eq!(controller.highlight(), Some(0));
    }

    #[test]
    fn arrow_down_then_enter_commits_the_bare_name_and_resets() {
        let mut controller = SearchController::new();
        type_text(&mut controller, "Lon");
        controller.apply_suggestions(vec![LocationSuggestion {
            state: Some("England".to_string()),
            ..suggestion("London")
        }]);

        press(&mut controller, KeyCode::Down);
        let outcome = press(&mut controller, KeyCode::Enter);
        assert_eq!(outcome, SearchOutcome::Committed("London".to_string()));
        assert_eq!(controller.query(), "");
        assert!(!controller.is_showing());
        assert!(controller.suggestions().is_empty());
    }

    #[test]
    fn enter_without_highlight_commits_the_raw_query() {
        let mut controller = SearchController::new();
        type_text(&mut controller, "Atlantis");
        controller.apply_suggestions(Vec::new());

        let outcome = press(&mut controller, KeyCode::Enter);
        assert_eq!(outcome, SearchOutcome::Committed("Atlantis".to_string()));
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn enter_trims_the_raw_query_and_ignores_blank_input() {
        let mut controller = SearchController::new();
        type_text(&mut controller, "  Oslo ");
        assert_eq!(
            press(&mut controller, KeyCode::Enter),
            SearchOutcome::Committed("Oslo".to_string())
        );
        assert_eq!(press(&mut controller, KeyCode::Enter), SearchOutcome::Ignored);
    }

    #[test]
    fn click_commits_regardless_of_highlight() {
        let mut controller = SearchController::new();
        type_text(&mut controller, "Lon");
        controller.apply_suggestions(vec![suggestion("London"), suggestion("Londrina")]);
        assert_eq!(controller.highlight(), None);

        assert_eq!(
            controller.click(1),
            SearchOutcome::Committed("Londrina".to_string())
        );
        assert!(!controller.is_showing());
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn hover_moves_the_highlight() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(vec![suggestion("A"), suggestion("B")]);
        assert_eq!(controller.hover(1), SearchOutcome::Changed);
        assert_eq!(controller.highlight(), Some(1));
        assert_eq!(controller.hover(1), SearchOutcome::Ignored);
        assert_eq!(controller.hover(5), SearchOutcome::Ignored);
    }

    #[test]
    fn escape_and_focus_loss_dismiss_without_committing() {
        let mut controller = SearchController::new();
        type_text(&mut controller, "Lon");
        controller.apply_suggestions(vec![suggestion("London")]);

        assert_eq!(press(&mut controller, KeyCode::Esc), SearchOutcome::Changed);
        assert!(!controller.is_showing());
        // Query text survives a dismissal.
        assert_eq!(controller.query(), "Lon");

        controller.apply_suggestions(vec![suggestion("London")]);
        assert_eq!(controller.focus_lost(), SearchOutcome::Changed);
        assert!(!controller.is_showing());
        assert_eq!(controller.focus_lost(), SearchOutcome::Ignored);
    }
}
