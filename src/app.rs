use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::content::{self, Language, Project};
use crate::gemini::{self, GeminiClient};
use crate::grid::GridWave;
use crate::link::ChatSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    About,
    Works,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub lang: Language,

    // Home: animated background
    pub grid: GridWave,
    frame_count: u64,

    // About
    pub about_scroll: u16,

    // Works
    pub projects: Vec<Project>,
    pub works_state: ListState,
    pub show_project_modal: bool,
    pub modal_scroll: u16,
    pub hovered_project: Option<usize>,

    // Neural Link (chat)
    pub link: ChatSession,
    pub link_task: Option<JoinHandle<Result<String>>>,
    pub link_scroll: u16,
    pub link_chat_height: u16, // Height of chat area for scroll calculations
    pub link_chat_width: u16,  // Width of chat area for wrap calculations

    // Model picker state
    pub show_model_picker: bool,
    pub available_models: Vec<String>,
    pub model_picker_state: ListState,

    // Remote service
    pub gemini: Option<GeminiClient>,
    pub selected_model: String,

    // Pane areas for mouse hit-testing (updated during render)
    pub frame_area: Option<Rect>,
    pub works_area: Option<Rect>,
    pub chat_area: Option<Rect>,
}

impl App {
    pub fn new(config: &Config, lang: Option<Language>, model: Option<String>) -> Self {
        let lang = lang
            .or_else(|| config.language.as_deref().and_then(Language::from_str))
            .unwrap_or(Language::En);

        // Env var wins over the config file.
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| config.api_key.clone());
        let gemini = api_key.as_deref().map(GeminiClient::new);

        let selected_model = model
            .or_else(|| config.default_model.clone())
            .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string());

        let mut works_state = ListState::default();
        works_state.select(Some(0));

        Self {
            should_quit: false,
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            lang,

            grid: GridWave::new(),
            frame_count: 0,

            about_scroll: 0,

            projects: content::projects(),
            works_state,
            show_project_modal: false,
            modal_scroll: 0,
            hovered_project: None,

            link: ChatSession::new(),
            link_task: None,
            link_scroll: 0,
            link_chat_height: 0,
            link_chat_width: 0,

            show_model_picker: false,
            available_models: Vec::new(),
            model_picker_state: ListState::default(),

            gemini,
            selected_model,

            frame_area: None,
            works_area: None,
            chat_area: None,
        }
    }

    /// Advance one animation frame (called on every Tick event).
    pub fn tick(&mut self) {
        self.grid.advance();
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    /// 0-2 for the thinking-ellipsis animation, stepping every 8 frames.
    pub fn thinking_frame(&self) -> usize {
        (self.frame_count as usize / 8) % 3
    }

    pub fn next_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Home => Screen::About,
            Screen::About => Screen::Works,
            Screen::Works => Screen::Link,
            Screen::Link => Screen::Home,
        };
    }

    pub fn prev_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Home => Screen::Link,
            Screen::About => Screen::Home,
            Screen::Works => Screen::About,
            Screen::Link => Screen::Works,
        };
    }

    pub fn toggle_language(&mut self) {
        self.lang = self.lang.toggled();
        let _ = Config::save_language(self.lang.as_str());
    }

    // Works navigation
    pub fn selected_project(&self) -> Option<&Project> {
        self.works_state.selected().and_then(|i| self.projects.get(i))
    }

    pub fn works_nav_down(&mut self) {
        let len = self.projects.len();
        if len > 0 {
            let i = self.works_state.selected().unwrap_or(0);
            self.works_state.select(Some((i + 1).min(len - 1)));
        }
    }

    pub fn works_nav_up(&mut self) {
        let i = self.works_state.selected().unwrap_or(0);
        self.works_state.select(Some(i.saturating_sub(1)));
    }

    /// Pick up the completed response task, if any. The session resolves
    /// with the task's result; a panicked task counts as a failure.
    pub async fn poll_link(&mut self) {
        let finished = self
            .link_task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }

        if let Some(task) = self.link_task.take() {
            let result = match task.await {
                Ok(result) => result,
                Err(err) => Err(anyhow::anyhow!("response task failed: {err}")),
            };
            self.link.resolve(result);
            self.scroll_link_to_bottom();
        }
    }

    /// Scroll the chat so the most recent message is visible.
    pub fn scroll_link_to_bottom(&mut self) {
        // Use actual chat width for wrap calculation, default to 50 if not set
        let wrap_width = if self.link_chat_width > 0 {
            self.link_chat_width as usize
        } else {
            50
        };

        let mut total_lines: u16 = 0;

        for msg in self.link.messages() {
            total_lines += 1; // Role line
            for line in msg.text.lines() {
                // Character count, not byte length, for UTF-8 content
                let char_count = line.chars().count();
                if char_count == 0 {
                    total_lines += 1;
                } else {
                    total_lines += ((char_count / wrap_width) + 1) as u16;
                }
            }
            total_lines += 1; // Blank line after message
        }

        if self.link.is_awaiting() {
            total_lines += 2; // Role line + "PROCESSING DATA..."
        }

        let visible_height = if self.link_chat_height > 0 {
            self.link_chat_height
        } else {
            20
        };

        if total_lines > visible_height {
            self.link_scroll = total_lines.saturating_sub(visible_height);
        }
    }

    // Model picker
    pub fn open_model_picker(&mut self) {
        self.available_models = GeminiClient::list_models();
        let current_idx = self
            .available_models
            .iter()
            .position(|m| m == &self.selected_model)
            .unwrap_or(0);
        self.model_picker_state.select(Some(current_idx));
        self.show_model_picker = true;
    }

    pub fn model_picker_nav_down(&mut self) {
        let len = self.available_models.len();
        if len > 0 {
            let i = self.model_picker_state.selected().unwrap_or(0);
            self.model_picker_state.select(Some((i + 1).min(len - 1)));
        }
    }

    pub fn model_picker_nav_up(&mut self) {
        let i = self.model_picker_state.selected().unwrap_or(0);
        self.model_picker_state.select(Some(i.saturating_sub(1)));
    }

    pub fn select_model(&mut self) {
        if let Some(i) = self.model_picker_state.selected() {
            if let Some(model) = self.available_models.get(i) {
                self.selected_model = model.clone();
                self.show_model_picker = false;
                let _ = Config::save_default_model(&self.selected_model);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(&Config::new(), Some(Language::En), None)
    }

    #[test]
    fn screens_cycle_in_both_directions() {
        let mut app = test_app();
        let order = [Screen::About, Screen::Works, Screen::Link, Screen::Home];
        for expected in order {
            app.next_screen();
            assert_eq!(app.screen, expected);
        }
        app.prev_screen();
        assert_eq!(app.screen, Screen::Link);
    }

    #[test]
    fn works_navigation_stays_in_bounds() {
        let mut app = test_app();
        let last = app.projects.len() - 1;
        for _ in 0..20 {
            app.works_nav_down();
        }
        assert_eq!(app.works_state.selected(), Some(last));
        for _ in 0..20 {
            app.works_nav_up();
        }
        assert_eq!(app.works_state.selected(), Some(0));
    }

    #[test]
    fn thinking_frame_cycles_through_three_states() {
        let mut app = test_app();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..48 {
            seen.insert(app.thinking_frame());
            app.tick();
        }
        assert_eq!(seen.len(), 3);
    }
}
