//! Application state and view model computation.
//!
//! [`AppState`] is what the plugin keeps between events: at most one open
//! [`Screen`] plus the theme. A screen pairs a selection controller with the
//! purely presentational bits the controller does not care about (cursor row,
//! input mode, title, originating pipe).
//!
//! # Example
//!
//! ```rust
//! use zselect::app::AppState;
//! use zselect::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::{InputMode, SearchFocus};
use super::picker::Picker;
use crate::domain::{Choice, Result, SelectionMode, SelectionRequest};
use crate::selection::filter::match_range;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};

/// Width reserved in front of each title for the checkmark column.
const CHECK_COLUMN_WIDTH: usize = 4;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The selection screen currently presented, if any.
    pub screen: Option<Screen>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

/// One presented selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Selection controller owning items, query and selection.
    pub picker: Picker,

    /// Header title.
    pub title: String,

    /// Name of the CLI pipe that opened the screen, if any.
    pub pipe: Option<String>,

    /// Zero-based cursor row within the visible items.
    pub cursor: usize,

    pub input_mode: InputMode,
}

impl AppState {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self {
            screen: None,
            theme,
        }
    }

    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let Some(screen) = &self.screen else {
            return UIViewModel {
                display_items: vec![],
                cursor_index: 0,
                header: HeaderInfo {
                    title: " zselect ".to_string(),
                },
                footer: FooterInfo {
                    keybindings: String::new(),
                },
                empty_state: Some(EmptyState {
                    message: "Waiting for a selection request".to_string(),
                    subtitle: "zellij pipe --name select -- '<request json>'".to_string(),
                }),
                search_bar: None,
            };
        };

        screen.compute_viewmodel(rows, cols)
    }
}

impl Screen {
    /// Presents a new screen for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request items are not unique by id.
    pub fn open(request: &SelectionRequest, pipe: Option<String>) -> Result<Self> {
        Ok(Self {
            picker: Picker::from_request(request)?,
            title: request.display_title().to_string(),
            pipe,
            cursor: 0,
            input_mode: InputMode::Normal,
        })
    }

    /// Item under the cursor.
    #[must_use]
    pub fn cursor_item(&self) -> Option<&Choice> {
        self.picker.visible_items().get(self.cursor)
    }

    /// Moves the cursor down, wrapping to the top. No-op on an empty list.
    pub fn move_cursor_down(&mut self) {
        let len = self.picker.visible_items().len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom. No-op on an empty list.
    pub fn move_cursor_up(&mut self) {
        let len = self.picker.visible_items().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Keeps the cursor inside the visible list after the view changed.
    pub fn clamp_cursor(&mut self) {
        let len = self.picker.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let snapshot = self.picker.snapshot();
        let header = self.compute_header(snapshot.selected_count);
        let footer = self.compute_footer();
        let search_bar = self.compute_search_bar();

        if snapshot.items.is_empty() {
            let empty_state = if snapshot.search_text.is_empty() {
                EmptyState {
                    message: "No items".to_string(),
                    subtitle: "Esc: close".to_string(),
                }
            } else {
                EmptyState {
                    message: "No matches".to_string(),
                    subtitle: format!("Nothing matches \"{}\"", snapshot.search_text),
                }
            };

            return UIViewModel {
                display_items: vec![],
                cursor_index: 0,
                header,
                footer,
                empty_state: Some(empty_state),
                search_bar,
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);
        let total = snapshot.items.len();

        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total);
        if visible_end - visible_start < available_rows && total >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let max_title_width = cols.saturating_sub(CHECK_COLUMN_WIDTH + 1);
        let highlight = self.input_mode.is_search() && !snapshot.search_text.is_empty();

        let display_items = snapshot.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, row)| {
                let title = truncate_title(&row.item.title, max_title_width);
                let highlight_ranges = if highlight {
                    match_range(&title, snapshot.search_text)
                        .into_iter()
                        .collect()
                } else {
                    vec![]
                };

                DisplayItem {
                    title,
                    is_checked: row.is_selected,
                    is_cursor: visible_start + relative_idx == self.cursor,
                    highlight_ranges,
                }
            })
            .collect();

        UIViewModel {
            display_items,
            cursor_index: self.cursor.saturating_sub(visible_start),
            header,
            footer,
            empty_state: None,
            search_bar,
        }
    }

    fn compute_header(&self, selected_count: usize) -> HeaderInfo {
        let title = match self.picker.mode() {
            SelectionMode::Single => format!(" {} ", self.title),
            SelectionMode::Multi => format!(" {} ({selected_count} selected) ", self.title),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let mut keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "Esc: exit search  Enter: results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "Esc: exit search  /: edit query  j/k: navigate  Space: toggle".to_string()
            }
            InputMode::Normal => "j/k: navigate  Space: toggle  /: search  Esc: cancel".to_string(),
        };

        if self.input_mode == InputMode::Normal {
            if let Some(all_selected) = self.picker.is_all_selected() {
                let label = if all_selected { "deselect all" } else { "select all" };
                keybindings.push_str(&format!("  a: {label}"));
            }
        }

        if !self.input_mode.is_typing() && self.picker.can_confirm() {
            keybindings.push_str("  Enter: done");
        }

        FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.picker.search_text().to_string(),
                is_focused: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    /// Rows left for the list after header, borders, footer and search bar.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
        }
    }
}

fn truncate_title(title: &str, max_width: usize) -> String {
    if title.chars().count() <= max_width {
        return title.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let mut truncated: String = title.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_request(mode: SelectionMode) -> SelectionRequest {
        SelectionRequest {
            mode,
            title: None,
            items: ["Apple", "Banana", "Cherry", "Date", "Elderberry"]
                .iter()
                .enumerate()
                .map(|(i, title)| Choice::new((i + 1).to_string(), *title))
                .collect(),
            selected: vec![],
        }
    }

    fn state_with(mode: SelectionMode) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.screen = Some(Screen::open(&fruit_request(mode), None).unwrap());
        state
    }

    #[test]
    fn idle_state_shows_waiting_message() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("Waiting for a selection request".to_string())
        );
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = state_with(SelectionMode::Single);
        let screen = state.screen.as_mut().unwrap();

        screen.move_cursor_up();
        assert_eq!(screen.cursor, 4);
        screen.move_cursor_down();
        assert_eq!(screen.cursor, 0);
    }

    #[test]
    fn window_follows_cursor() {
        let mut state = state_with(SelectionMode::Multi);
        state.screen.as_mut().unwrap().cursor = 4;

        // 6 rows of chrome leave two list rows
        let vm = state.compute_viewmodel(8, 80);

        assert_eq!(vm.display_items.len(), 2);
        assert_eq!(vm.display_items[1].title, "Elderberry");
        assert!(vm.display_items[1].is_cursor);
        assert_eq!(vm.cursor_index, 1);
    }

    #[test]
    fn multi_header_counts_selection_and_footer_offers_bulk_toggle() {
        let mut request = fruit_request(SelectionMode::Multi);
        request.selected = vec!["2".into()];
        let mut state = AppState::new(Theme::default());
        state.screen = Some(Screen::open(&request, None).unwrap());

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.header.title, " Select Items (1 selected) ");
        assert!(vm.footer.keybindings.contains("a: select all"));
        assert!(vm.footer.keybindings.contains("Enter: done"));
        assert!(vm.display_items[1].is_checked);
    }

    #[test]
    fn single_footer_hides_confirm_until_selected() {
        let state = state_with(SelectionMode::Single);
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.header.title, " Select Item ");
        assert!(!vm.footer.keybindings.contains("Enter: done"));
        assert!(!vm.footer.keybindings.contains("a: "));
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(truncate_title("Elderberry", 8), "Elder...");
        assert_eq!(truncate_title("Fig", 8), "Fig");
    }
}
