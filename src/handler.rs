use anyhow::{anyhow, Result};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode, Screen};
use crate::gemini;
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub async fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key)?,
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => {
            app.tick();
            app.poll_link().await;
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global quit that works in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_link_editing(app, key),
    }

    Ok(())
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Model picker popup swallows input while open
    if app.show_model_picker {
        match key.code {
            KeyCode::Esc => app.show_model_picker = false,
            KeyCode::Char('j') | KeyCode::Down => app.model_picker_nav_down(),
            KeyCode::Char('k') | KeyCode::Up => app.model_picker_nav_up(),
            KeyCode::Enter => app.select_model(),
            _ => {}
        }
        return;
    }

    // Keys shared by every screen
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_screen();
            return;
        }
        KeyCode::BackTab => {
            app.prev_screen();
            return;
        }
        KeyCode::Char('L') => {
            app.toggle_language();
            return;
        }
        KeyCode::Char('1') => {
            app.screen = Screen::Home;
            return;
        }
        KeyCode::Char('2') => {
            app.screen = Screen::About;
            return;
        }
        KeyCode::Char('3') => {
            app.screen = Screen::Works;
            return;
        }
        KeyCode::Char('4') => {
            app.screen = Screen::Link;
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Home => handle_home_normal(app, key),
        Screen::About => handle_about_normal(app, key),
        Screen::Works => handle_works_normal(app, key),
        Screen::Link => handle_link_normal(app, key),
    }
}

fn handle_home_normal(app: &mut App, key: KeyEvent) {
    // The hero CTA: drop down into the about section
    if let KeyCode::Enter | KeyCode::Char('j') | KeyCode::Down = key.code {
        app.screen = Screen::About;
    }
}

fn handle_about_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.about_scroll = app.about_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.about_scroll = app.about_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.about_scroll = 0,
        _ => {}
    }
}

fn handle_works_normal(app: &mut App, key: KeyEvent) {
    if app.show_project_modal {
        match key.code {
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Backspace => {
                app.show_project_modal = false;
                app.modal_scroll = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                app.modal_scroll = app.modal_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.modal_scroll = app.modal_scroll.saturating_sub(1);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.works_nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.works_nav_up(),
        KeyCode::Char('g') => app.works_state.select(Some(0)),
        KeyCode::Char('G') => {
            let last = app.projects.len().saturating_sub(1);
            app.works_state.select(Some(last));
        }
        KeyCode::Enter | KeyCode::Char('l') => {
            if app.selected_project().is_some() {
                app.show_project_modal = true;
                app.modal_scroll = 0;
            }
        }
        _ => {}
    }
}

fn handle_link_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Enter => {
            app.input_mode = InputMode::Editing;
            app.link.cursor = app.link.input.chars().count();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.link_scroll = app.link_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.link_scroll = app.link_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.link_scroll = 0,
        KeyCode::Char('G') => app.scroll_link_to_bottom(),
        KeyCode::Char('M') => app.open_model_picker(),
        KeyCode::Esc => app.screen = Screen::Home,
        _ => {}
    }
}

fn handle_link_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => submit_query(app),
        KeyCode::Backspace => {
            if app.link.cursor > 0 {
                app.link.cursor -= 1;
                let byte_pos = char_to_byte_index(&app.link.input, app.link.cursor);
                app.link.input.remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            let char_count = app.link.input.chars().count();
            if app.link.cursor < char_count {
                let byte_pos = char_to_byte_index(&app.link.input, app.link.cursor);
                app.link.input.remove(byte_pos);
            }
        }
        KeyCode::Left => {
            app.link.cursor = app.link.cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            let char_count = app.link.input.chars().count();
            app.link.cursor = (app.link.cursor + 1).min(char_count);
        }
        KeyCode::Home => {
            app.link.cursor = 0;
        }
        KeyCode::End => {
            app.link.cursor = app.link.input.chars().count();
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(&app.link.input, app.link.cursor);
            app.link.input.insert(byte_pos, c);
            app.link.cursor += 1;
        }
        _ => {}
    }
}

/// Start a submit cycle. The session guard refuses empty input and
/// double-submits; on acceptance the request runs in a background task
/// whose handle `App::poll_link` collects. Requests are bounded by
/// `gemini::REQUEST_TIMEOUT` so a hung call cannot wedge the session.
fn submit_query(app: &mut App) {
    if !app.link.submit() {
        return;
    }

    app.scroll_link_to_bottom();

    let contents = app.link.history();
    let model = app.selected_model.clone();

    match app.gemini.clone() {
        Some(client) => {
            app.link_task = Some(tokio::spawn(async move {
                match tokio::time::timeout(
                    gemini::REQUEST_TIMEOUT,
                    client.generate(&model, contents),
                )
                .await
                {
                    Ok(result) => result,
                    Err(_) => Err(anyhow!(
                        "request timed out after {:?}",
                        gemini::REQUEST_TIMEOUT
                    )),
                }
            }));
        }
        None => {
            // No key: run the same completion path so the cycle still
            // appends its error message and returns to Idle.
            app.link_task = Some(tokio::spawn(async move {
                Err(anyhow!("GEMINI_API_KEY not configured"))
            }));
        }
    }
}

/// Check if a point is within a rectangle
fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            // Feed the grid's pointer target in normalized coordinates.
            if let Some(frame) = app.frame_area {
                if frame.width > 0 && frame.height > 0 {
                    let nx = (x.saturating_sub(frame.x)) as f64 / frame.width as f64;
                    let ny = (y.saturating_sub(frame.y)) as f64 / frame.height as f64;
                    app.grid.set_pointer_target(nx, ny);
                }
            }
            app.hovered_project = hovered_work(app, x, y);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.screen == Screen::Works && !app.show_project_modal {
                if let Some(idx) = hovered_work(app, x, y) {
                    app.works_state.select(Some(idx));
                    app.show_project_modal = true;
                    app.modal_scroll = 0;
                }
            }
        }
        MouseEventKind::ScrollDown => match app.screen {
            Screen::Home => {}
            Screen::About => app.about_scroll = app.about_scroll.saturating_add(3),
            Screen::Works => {
                if app.show_project_modal {
                    app.modal_scroll = app.modal_scroll.saturating_add(1);
                } else {
                    app.works_nav_down();
                }
            }
            Screen::Link => app.link_scroll = app.link_scroll.saturating_add(3),
        },
        MouseEventKind::ScrollUp => match app.screen {
            Screen::Home => {}
            Screen::About => app.about_scroll = app.about_scroll.saturating_sub(3),
            Screen::Works => {
                if app.show_project_modal {
                    app.modal_scroll = app.modal_scroll.saturating_sub(1);
                } else {
                    app.works_nav_up();
                }
            }
            Screen::Link => app.link_scroll = app.link_scroll.saturating_sub(3),
        },
        _ => {}
    }
}

/// Project row under the cursor, if the cursor is inside the works list.
fn hovered_work(app: &App, x: u16, y: u16) -> Option<usize> {
    if app.screen != Screen::Works || app.show_project_modal {
        return None;
    }
    let area = app.works_area?;
    if !point_in_rect(x, y, area) {
        return None;
    }
    // Skip the top border, then offset into the visible window.
    let row = y.checked_sub(area.y + 1)? as usize;
    if row >= area.height.saturating_sub(2) as usize {
        return None;
    }
    let idx = app.works_state.offset() + row / 2; // two rows per entry
    (idx < app.projects.len()).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Language;

    fn test_app() -> App {
        App::new(&Config::new(), Some(Language::En), None)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn submit_cycle_without_api_key_appends_error_and_returns_idle() {
        let mut app = test_app();
        app.gemini = None;
        app.screen = Screen::Link;
        app.input_mode = InputMode::Editing;
        app.link.input = "hello".to_string();
        app.link.cursor = 5;

        handle_event(&mut app, AppEvent::Key(key(KeyCode::Enter)))
            .await
            .unwrap();
        assert!(app.link.is_awaiting());
        assert_eq!(app.link.messages().len(), 2);

        // The error task resolves almost immediately; ticks collect it.
        for _ in 0..50 {
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
            handle_event(&mut app, AppEvent::Tick).await.unwrap();
            if !app.link.is_awaiting() {
                break;
            }
        }

        let log = app.link.messages();
        assert_eq!(log.len(), 3);
        assert_eq!(log[1].text, "hello");
        assert_eq!(log[2].text, crate::link::LINK_ERROR);
        assert!(!app.link.is_awaiting());
    }

    #[tokio::test]
    async fn enter_on_empty_input_is_a_no_op() {
        let mut app = test_app();
        app.screen = Screen::Link;
        app.input_mode = InputMode::Editing;

        handle_event(&mut app, AppEvent::Key(key(KeyCode::Enter)))
            .await
            .unwrap();
        assert_eq!(app.link.messages().len(), 1);
        assert!(!app.link.is_awaiting());
        assert!(app.link_task.is_none());
    }

    #[tokio::test]
    async fn editing_keeps_cursor_on_char_boundaries() {
        let mut app = test_app();
        app.screen = Screen::Link;
        app.input_mode = InputMode::Editing;

        for c in "olá".chars() {
            handle_event(&mut app, AppEvent::Key(key(KeyCode::Char(c))))
                .await
                .unwrap();
        }
        assert_eq!(app.link.input, "olá");
        assert_eq!(app.link.cursor, 3);

        handle_event(&mut app, AppEvent::Key(key(KeyCode::Backspace)))
            .await
            .unwrap();
        assert_eq!(app.link.input, "ol");
        assert_eq!(app.link.cursor, 2);
    }

    #[tokio::test]
    async fn tab_cycles_screens_in_normal_mode() {
        let mut app = test_app();
        handle_event(&mut app, AppEvent::Key(key(KeyCode::Tab)))
            .await
            .unwrap();
        assert_eq!(app.screen, Screen::About);
        handle_event(&mut app, AppEvent::Key(key(KeyCode::BackTab)))
            .await
            .unwrap();
        assert_eq!(app.screen, Screen::Home);
    }
}
