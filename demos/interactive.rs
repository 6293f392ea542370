//! Interactive demo driving the pagination strip against a synthetic list.
//!
//! The demo owns the authoritative state (item total, items per page and
//! current page) and feeds it into the widget, which is how the controlled
//! contract is meant to be used: notifications come out, the host decides,
//! and the host writes the values back.
//!
//! Tab/BackTab cycle the controls, Enter or Space activates an arrow,
//! digits and Backspace edit the page field, Up/Down move the per-page
//! selector, and clicks work everywhere. Press q to quit.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tui_pagination::{
    init_terminal, restore_terminal, Backend, Component, Frame, Pagination, PaginationConfig,
    PaginationEvent, TextDirection, Theme,
};

#[derive(Parser)]
#[command(
    name = "interactive",
    about = "Drive the pagination strip against a synthetic item list"
)]
struct Args {
    /// Total number of items behind the pager
    #[arg(long, default_value_t = 200)]
    items: usize,

    /// Items shown per page
    #[arg(long, default_value_t = 20)]
    per_page: usize,

    /// Mirror the strip for right-to-left locales
    #[arg(long)]
    rtl: bool,

    /// Use the light theme
    #[arg(long)]
    light: bool,
}

/// The authoritative state the widget is a view of.
struct Host {
    total_items: usize,
    per_page: usize,
    page: usize,
}

impl Host {
    fn new(total_items: usize, per_page: usize) -> Self {
        let mut host = Self {
            total_items,
            per_page: per_page.max(1),
            page: 0,
        };
        if host.max_page() > 0 {
            host.page = 1;
        }
        host
    }

    fn max_page(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            (self.total_items + self.per_page - 1) / self.per_page
        }
    }

    /// Decide whether a requested change is acceptable and apply it.
    fn apply(&mut self, notification: PaginationEvent) {
        match notification {
            PaginationEvent::PageChange { page } => {
                if page >= 1 && page <= self.max_page() {
                    info!("moving to page {}", page);
                    self.page = page;
                }
            }
            PaginationEvent::ItemCountChange { item_count } => {
                if item_count >= 1 {
                    info!("showing {} items per page", item_count);
                    self.per_page = item_count;
                    let max = self.max_page();
                    self.page = self.page.min(max);
                    if max > 0 && self.page == 0 {
                        self.page = 1;
                    }
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let mut host = Host::new(args.items, args.per_page);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let direction = if args.rtl {
        TextDirection::RightToLeft
    } else {
        TextDirection::LeftToRight
    };
    let theme = if args.light { Theme::light() } else { Theme::dark() };

    let mut pager = Pagination::new()
        .with_page_number(host.page)
        .with_max_page_number(host.max_page())
        .with_config(PaginationConfig {
            show_item_count_select: true,
            item_count_options: vec![10, 20, 30, 40],
            selected_count_option: Some(host.per_page),
        })
        .with_directionality(direction)
        .with_event_sender(tx);
    pager.set_focus(true);

    let mut terminal = init_terminal()?;
    let result = run(&mut terminal, &mut pager, &mut host, &mut rx, &theme).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run(
    terminal: &mut Terminal<Backend>,
    pager: &mut Pagination,
    host: &mut Host,
    rx: &mut mpsc::UnboundedReceiver<PaginationEvent>,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, pager, host, theme))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('q') {
                        return Ok(());
                    }
                    pager.handle_key(key)?;
                }
                Event::Mouse(mouse) => {
                    pager.handle_mouse(mouse)?;
                }
                _ => {}
            }
        }

        // Drain notifications and write the decided state back. This
        // round-trip is the only thing that moves the display.
        while let Ok(notification) = rx.try_recv() {
            host.apply(notification);
            pager.set_page_number(host.page);
            pager.set_max_page_number(host.max_page());
            pager.set_selected_count_option(Some(host.per_page));
        }
    }
}

fn draw(frame: &mut Frame, pager: &mut Pagination, host: &Host, theme: &Theme) {
    let area = frame.size();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let styles = theme.styles();

    let (start, end) = if host.total_items == 0 || host.page == 0 {
        (0, 0)
    } else {
        let start = (host.page - 1) * host.per_page + 1;
        let end = (host.page * host.per_page).min(host.total_items);
        (start, end)
    };
    let summary = format!("Items {}-{} of {}", start, end, host.total_items);
    frame.render_widget(
        Paragraph::new(summary).style(styles.base),
        Rect::new(area.x, area.y, area.width, 1),
    );

    if area.height > 1 {
        pager.render(frame, Rect::new(area.x, area.y + 1, area.width, 1), theme);
    }

    if area.height > 2 {
        let help = format!(
            "Tab cycles, Enter/Space activates, digits edit, q quits ({} / {})",
            pager.previous_page_label(),
            pager.next_page_label()
        );
        frame.render_widget(
            Paragraph::new(help).style(styles.max_indicator),
            Rect::new(area.x, area.y + 2, area.width, 1),
        );
    }
}

fn init_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tui_pagination=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
