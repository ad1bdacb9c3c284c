//! Application state types and the fetch controller.
//!
//! Defines the enums and structs that model the TUI state, the modal error
//! dialog, and the glue that runs employee fetches on worker threads and
//! applies their outcomes (re-exported event loop as `run`).
//!
pub mod update;

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use ratatui::style::Color;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::{Payload, normalize};
use crate::view::{LOAD_ERROR_TEXT, ViewEvent, ViewState, reduce};

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Modal,
}

/// Modal dialog states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState {
    /// Error dialog for a failed search; one dismissal action closes it.
    Error { message: String },
}

impl ModalState {
    /// Map an HTTP status to the dialog shown for a failed search.
    /// Status 0 stands for a failure with no HTTP status at all.
    pub fn for_status(status: u16) -> Self {
        let message = match status {
            404 => "No matching employee was found.".to_string(),
            500 => "A server error occurred. Please contact the administrator.".to_string(),
            other => format!("An error occurred. Status: {other}"),
        };
        ModalState::Error { message }
    }
}

/// What caused a fetch: the startup list load or a user search action.
///
/// Failed searches open the error dialog; a failed startup load only sets
/// the status line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequestOrigin {
    PageLoad,
    Search,
}

/// Result of one fetch, posted back from its worker thread.
pub struct FetchOutcome {
    pub generation: u64,
    pub origin: RequestOrigin,
    pub result: Result<Payload, ApiError>,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub danger: Color,
}

impl Theme {
    /// Catppuccin Mocha defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            title: Color::Rgb(0xcb, 0xa6, 0xf7),
            border: Color::Rgb(0x58, 0x5b, 0x70),
            header_bg: Color::Rgb(0x31, 0x32, 0x44),
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf),
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a),
            danger: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }

    /// Load a theme from a simple key=value file. Unknown or missing keys
    /// fall back to `mocha`.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();
        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let Some(color) = Self::parse_color(val.trim()) else {
                continue;
            };
            match key.trim() {
                "text" => theme.text = color,
                "title" => theme.title = color,
                "border" => theme.border = color,
                "header_bg" => theme.header_bg = color,
                "header_fg" => theme.header_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "highlight_fg" => theme.highlight_fg = color,
                "highlight_bg" => theme.highlight_bg = color,
                "danger" => theme.danger = color,
                _ => {}
            }
        }
        Some(theme)
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB") or the special name
    /// "reset".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(&lower);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }

    /// Persist the theme in key=value format. Only hex colors and "reset"
    /// are representable in theme files.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
                _ => "reset".to_string(),
            }
        }
        let mut buf = String::from("# hr-directory theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");
        for (key, color) in [
            ("text", self.text),
            ("title", self.title),
            ("border", self.border),
            ("header_bg", self.header_bg),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight_fg", self.highlight_fg),
            ("highlight_bg", self.highlight_bg),
            ("danger", self.danger),
        ] {
            buf.push_str(&format!("{} = {}\n", key, color_to_str(color)));
        }
        std::fs::write(path, buf)
    }

    /// Ensure a config file exists; if missing, write one with the default
    /// theme and return it. On parse errors, return `mocha`.
    pub fn load_or_init(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let theme = Self::mocha();
        let _ = theme.write_file(path);
        theme
    }
}

pub struct AppState {
    pub view: ViewState,
    pub input_mode: InputMode,
    pub search_input: String,
    pub selected_index: usize,
    pub rows_per_page: usize,
    pub theme: Theme,
    pub modal: Option<ModalState>,
    client: Arc<ApiClient>,
    generation: u64,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
}

impl AppState {
    pub fn new(client: ApiClient, theme: Theme) -> Self {
        let (outcome_tx, outcome_rx) = channel();
        Self {
            view: ViewState::default(),
            input_mode: InputMode::Normal,
            search_input: String::new(),
            selected_index: 0,
            rows_per_page: 10,
            theme,
            modal: None,
            client: Arc::new(client),
            generation: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Kick off the unfiltered list load that runs at startup.
    pub fn load_on_start(&mut self) {
        self.begin_fetch(RequestOrigin::PageLoad);
    }

    /// Run the search for the current input. An empty input reloads the
    /// full list; both the search key in normal mode and Enter in the
    /// search input land here.
    pub fn submit_search(&mut self) {
        self.begin_fetch(RequestOrigin::Search);
    }

    fn begin_fetch(&mut self, origin: RequestOrigin) {
        let query = self.search_input.trim().to_string();
        self.generation += 1;
        let generation = self.generation;
        self.view = reduce(std::mem::take(&mut self.view), ViewEvent::FetchStarted);

        let wants_lookup = origin == RequestOrigin::Search && !query.is_empty();
        tracing::debug!(generation, ?origin, query = %query, "starting employee fetch");
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        std::thread::spawn(move || {
            let result = if wants_lookup {
                client.fetch_one(&query)
            } else {
                client.fetch_list().map(Payload::Many)
            };
            // The receiver may be gone during shutdown; nothing to do then.
            let _ = tx.send(FetchOutcome {
                generation,
                origin,
                result,
            });
        });
    }

    /// Apply every fetch outcome that arrived since the last tick.
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Apply one fetch outcome. Outcomes of superseded requests are
    /// discarded so only the latest request updates the view.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.generation {
            tracing::debug!(generation = outcome.generation, "discarding stale response");
            return;
        }
        match outcome.result {
            Ok(payload) => {
                let rows = normalize(payload);
                tracing::debug!(rows = rows.len(), "employee fetch succeeded");
                self.view = reduce(std::mem::take(&mut self.view), ViewEvent::RowsLoaded(rows));
                self.selected_index = 0;
            }
            Err(err) => {
                let status = err.status_code();
                tracing::warn!(status, error = %err, "employee fetch failed");
                if outcome.origin == RequestOrigin::Search {
                    self.modal = Some(ModalState::for_status(status));
                    self.input_mode = InputMode::Modal;
                }
                self.view = reduce(
                    std::mem::take(&mut self.view),
                    ViewEvent::FetchFailed(LOAD_ERROR_TEXT.to_string()),
                );
            }
        }
    }

    /// Close the modal dialog and return to normal key handling.
    pub fn dismiss_modal(&mut self) {
        self.modal = None;
        self.input_mode = InputMode::Normal;
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
