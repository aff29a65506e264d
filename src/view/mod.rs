//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared string and layout helpers
//! - `search_bar`: Banner and query input
//! - `results`: Result count and episode cards
//! - `overlays`: Error banner, loading indicator, help popup

mod utils;
mod search_bar;
mod results;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::model::{Focus, SearchBarState, UiState, ViewState};
use utils::truncate_string;

const ERROR_HEIGHT: u16 = 3;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, view_state: &ViewState, bar: &SearchBarState, ui_state: &UiState) {
        let is_loading = view_state.is_loading();
        let error = view_state.error();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(search_bar::height(bar)),
                Constraint::Length(if error.is_some() { ERROR_HEIGHT } else { 0 }),
                Constraint::Min(0),    // Results / loader
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        search_bar::render_search_bar(
            frame,
            chunks[0],
            bar,
            is_loading,
            ui_state.focus == Focus::SearchBar,
        );

        if let Some(message) = error {
            overlays::render_error_banner(frame, chunks[1], message);
        }

        if is_loading {
            overlays::render_loader(frame, chunks[2]);
        } else {
            results::render_results(
                frame,
                chunks[2],
                &view_state.results,
                ui_state.selected,
                ui_state.focus == Focus::Results,
            );
        }

        let hints = match ui_state.focus {
            Focus::SearchBar => " Enter search · Tab results · Ctrl+C quit",
            Focus::Results => " ↑/↓ select · Enter play · E all episodes · / search · H help · Q quit",
        };
        frame.render_widget(
            Paragraph::new(truncate_string(hints, chunks[3].width as usize))
                .style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::{Outcome, ResultRecord, SearchPhase, SEARCH_FAILED_MESSAGE};
    use super::utils::test_support::buffer_text;

    fn draw(view_state: &ViewState, ui_state: &UiState) -> String {
        draw_sized(view_state, ui_state, 80, 30)
    }

    fn draw_sized(view_state: &ViewState, ui_state: &UiState, width: u16, height: u16) -> String {
        let bar = SearchBarState {
            query: "strategy".to_string(),
            is_expanded: false,
        };
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| AppView::render(f, view_state, &bar, ui_state))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn with_results() -> Vec<ResultRecord> {
        vec![ResultRecord {
            title: Some("Kept Episode".to_string()),
            ..Default::default()
        }]
    }

    #[test]
    fn loading_replaces_results_with_loader() {
        let state = ViewState {
            results: with_results(),
            phase: SearchPhase::Loading { generation: 1 },
        };
        let text = draw(&state, &UiState::default());
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Kept Episode"));
    }

    #[test]
    fn failure_shows_banner_above_retained_results() {
        let state = ViewState {
            results: with_results(),
            phase: SearchPhase::Settled(Outcome::Failure(SEARCH_FAILED_MESSAGE.to_string())),
        };
        let text = draw(&state, &UiState::default());
        assert!(text.contains(SEARCH_FAILED_MESSAGE));
        assert!(text.contains("Kept Episode"));
        assert!(text.find(SEARCH_FAILED_MESSAGE) < text.find("Kept Episode"));
    }

    #[test]
    fn idle_has_no_results_header() {
        let text = draw(&ViewState::default(), &UiState::default());
        assert!(!text.contains("results found"));
        assert!(!text.contains("Error"));
    }

    #[test]
    fn help_popup_is_drawn_on_top() {
        let ui_state = UiState {
            show_help_popup: true,
            ..Default::default()
        };
        let text = draw(&ViewState::default(), &ui_state);
        assert!(text.contains("Help (H or Esc to close)"));
    }

    #[test]
    fn hints_end_in_ellipsis_on_narrow_terminals() {
        let ui_state = UiState {
            focus: Focus::Results,
            ..Default::default()
        };
        let text = draw_sized(&ViewState::default(), &ui_state, 30, 20);
        let hints = text.lines().last().unwrap();
        assert!(hints.starts_with(" ↑/↓ select"));
        assert!(hints.ends_with("..."));
    }
}
