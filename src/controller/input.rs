//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Focus;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        // Ctrl+C / Ctrl+Q quit from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Help popup swallows everything but its close keys
        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            model.toggle_focus().await;
            return Ok(());
        }

        match model.get_ui_state().await.focus {
            Focus::SearchBar => match key.code {
                KeyCode::Enter => {
                    if let Some(query) = model.submit_search().await {
                        // the request settles on its own task
                        let _ = self.handle_search(query).await;
                    }
                }
                KeyCode::Esc => model.clear_search().await,
                KeyCode::Backspace => model.backspace_search().await,
                // chords like Ctrl+A or Alt+B are not text
                KeyCode::Char(c)
                    if key.modifiers == KeyModifiers::NONE
                        || key.modifiers == KeyModifiers::SHIFT =>
                {
                    model.append_to_search(c).await
                }
                _ => {}
            },
            Focus::Results => match key.code {
                KeyCode::Up | KeyCode::Char('k') => model.move_selection_up().await,
                KeyCode::Down | KeyCode::Char('j') => model.move_selection_down().await,
                KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
                    self.play_selected().await;
                }
                KeyCode::Char('/') => model.set_focus(Focus::SearchBar).await,
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    if !model.is_loading().await {
                        let _ = self.browse_episodes().await;
                    }
                }
                KeyCode::Char('h') | KeyCode::Char('H') => model.show_help_popup().await,
                KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
                _ => {}
            },
        }
        Ok(())
    }
}
