//! A controlled pagination strip for ratatui applications.
//!
//! The widget shows previous/next arrows, a typed page-number field with an
//! "out of N" indicator and an optional items-per-page selector. It follows
//! a strict controlled-component contract: the page position and the applied
//! items-per-page count are inputs owned by the caller, and interactions
//! emit [`PaginationEvent`] notifications instead of mutating those inputs.
//! The caller applies a change by writing the new values back, which is also
//! what moves the display.
//!
//! ```
//! use tui_pagination::{Pagination, PaginationEvent};
//! use tokio::sync::mpsc;
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let mut pager = Pagination::new()
//!     .with_page_number(2)
//!     .with_max_page_number(5)
//!     .with_event_sender(tx);
//!
//! pager.request_next_page();
//! if let Ok(PaginationEvent::PageChange { page }) = rx.try_recv() {
//!     pager.set_page_number(page);
//! }
//! assert_eq!(pager.page_number(), 3);
//! ```

pub mod component;
pub mod config;
pub mod direction;
pub mod events;
pub mod localize;
pub mod state;
pub mod theme;
pub mod validate;
pub mod widget;

pub use component::{Component, ComponentState};
pub use config::PaginationConfig;
pub use direction::{DirectionalityProvider, TextDirection};
pub use events::PaginationEvent;
pub use localize::{StaticTranslator, Translator};
pub use state::PageState;
pub use theme::{Styles, Theme};
pub use validate::{is_valid_page_input, validate_page_input, PageInputRejection};
pub use widget::{FocusZone, Pagination, Segment, SegmentKind};

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

pub type Backend = CrosstermBackend<io::Stdout>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
