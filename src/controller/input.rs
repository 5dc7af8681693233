//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, PAGE_JUMP};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Errors behave like a toast: Esc dismisses, other keys keep working
        if key.code == KeyCode::Esc && model.has_error().await {
            model.clear_error().await;
            return Ok(());
        }

        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        if model.is_viewer_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                    model.close_viewer().await;
                    Ok(())
                }
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    let url = model.get_ui_state().await.viewer.map(|v| v.url);
                    drop(model);
                    if let Some(url) = url {
                        self.share_url(url).await;
                    }
                    Ok(())
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    model.set_should_quit(true).await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    model.cycle_section().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    let query = ui_state.search_query.clone();
                    drop(model);
                    self.perform_search(&query).await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.update_search_query(String::new()).await;
                    model.set_active_section(ActiveSection::Results).await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    model.append_to_search(c).await;
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                model.cycle_section().await;
            }
            KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Char('S') => {
                model.set_active_section(ActiveSection::Search).await;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                drop(model);
                self.move_up(1).await;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                drop(model);
                self.move_down(1).await;
            }
            KeyCode::PageUp => {
                drop(model);
                self.move_up(PAGE_JUMP).await;
            }
            KeyCode::PageDown => {
                drop(model);
                self.move_down(PAGE_JUMP).await;
            }
            KeyCode::Home => {
                drop(model);
                self.move_up(usize::MAX).await;
            }
            KeyCode::Enter => {
                drop(model);
                self.open_selected().await;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                drop(model);
                self.share_selected().await;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                drop(model);
                self.show_trending().await;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                drop(model);
                self.request_refresh().await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
