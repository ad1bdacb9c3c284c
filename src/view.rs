//! View state and its reducer.
//!
//! Outside of a running fetch, exactly one of the status line and the table
//! carries information. [`reduce`] is a pure
//! function from the previous state and an event to the next state, so the
//! whole fetch → render flow is testable without a terminal; `ui` only
//! applies the resulting [`ViewState`] to the frame.

use crate::model::EmployeeRecord;

/// Status text while a request is running.
pub const LOADING_TEXT: &str = "Loading data...";
/// Status text for an empty result set.
pub const NO_DATA_TEXT: &str = "No data found.";
/// Status text for any failed load; the detail goes to the log.
pub const LOAD_ERROR_TEXT: &str = "Error loading employees. Check console.";

/// Content of the status line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusLine {
    #[default]
    Hidden,
    Loading,
    NoData,
    Error(String),
}

impl StatusLine {
    /// Visible text, `None` when the line is hidden.
    pub fn text(&self) -> Option<&str> {
        match self {
            StatusLine::Hidden => None,
            StatusLine::Loading => Some(LOADING_TEXT),
            StatusLine::NoData => Some(NO_DATA_TEXT),
            StatusLine::Error(text) => Some(text),
        }
    }
}

/// What the listing screen currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub status: StatusLine,
    pub table_visible: bool,
    pub rows: Vec<EmployeeRecord>,
}

/// State transitions of the fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A request started; show the loading text, leave the table as-is.
    FetchStarted,
    /// A request succeeded with the normalized row set.
    RowsLoaded(Vec<EmployeeRecord>),
    /// A request failed; only the status line changes.
    FetchFailed(String),
}

/// Apply one event to the view state.
pub fn reduce(state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::FetchStarted => ViewState {
            status: StatusLine::Loading,
            ..state
        },
        ViewEvent::RowsLoaded(rows) if rows.is_empty() => ViewState {
            status: StatusLine::NoData,
            table_visible: false,
            rows: Vec::new(),
        },
        ViewEvent::RowsLoaded(rows) => ViewState {
            status: StatusLine::Hidden,
            table_visible: true,
            rows,
        },
        ViewEvent::FetchFailed(message) => ViewState {
            status: StatusLine::Error(message),
            ..state
        },
    }
}
