//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use zselect::app::AppState;
//! use zselect::ui::{render_frame, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let frame = render_frame(&state, 24, 80);
//! assert!(frame.contains("Waiting for a selection request"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane per render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_frame(state, rows, cols));
}

/// Renders one frame into a string of ANSI-styled output.
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut out = String::new();
    render_viewmodel(&mut out, &viewmodel, &state.theme, rows, cols);
    out
}

/// Chooses the layout: empty state, search mode or normal mode.
fn render_viewmodel(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_mode(out, vm, empty, theme, cols, rows);
        return;
    }

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(out, vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(out, vm, theme, cols, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::domain::SelectionRequest;

    fn opened(json: &str) -> AppState {
        let mut state = AppState::new(Theme::default());
        let request = SelectionRequest::from_json(json).unwrap();
        handle_event(&mut state, &Event::Open { request, pipe: None }).unwrap();
        state
    }

    #[test]
    fn multi_frame_shows_title_rows_and_hints() {
        let state = opened(
            r#"{"mode":"multi","title":"Pick fruit","items":[
                {"id":"1","title":"Apple"},{"id":"2","title":"Banana"}
            ],"selected":["2"]}"#,
        );

        let frame = render_frame(&state, 24, 80);

        assert!(frame.contains(" Pick fruit (1 selected) "));
        assert!(frame.contains("Apple"));
        assert!(frame.contains("Banana"));
        assert_eq!(frame.matches('✓').count(), 1);
        assert!(frame.contains("Enter: done"));
    }

    #[test]
    fn no_matches_keeps_search_bar_visible() {
        let mut state = opened(r#"{"mode":"single","items":[{"id":"1","title":"Apple"}]}"#);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();

        let frame = render_frame(&state, 24, 80);

        assert!(frame.contains(" Search: z_"));
        assert!(frame.contains("No matches"));
        assert!(!frame.contains("Apple"));
    }
}
