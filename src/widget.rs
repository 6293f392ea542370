//! The pagination control.
//!
//! [`Pagination`] renders a single-line strip of controls: a previous-page
//! arrow, a typed page-number field with an "out of N" indicator, a
//! next-page arrow and an optional items-per-page selector.
//!
//! The widget is strictly controlled. `page_number`, `max_page_number` and
//! `selected_count_option` are caller-supplied inputs; every interaction
//! only emits a [`PaginationEvent`] describing the requested change, and
//! the displayed values move when the caller writes the new values back.
//! Transient interaction state (the typed buffer, the focused zone, the
//! selector highlight) is never promoted to those inputs.

use crate::component::{Component, ComponentState};
use crate::config::PaginationConfig;
use crate::direction::{DirectionalityProvider, TextDirection};
use crate::events::PaginationEvent;
use crate::localize::{
    StaticTranslator, Translator, KEY_ITEMS_PER_PAGE_OPTION, KEY_NEXT_PAGE,
    KEY_PAGE_MAX_INDICATOR, KEY_PAGE_NUMBER_LABEL, KEY_PREVIOUS_PAGE,
};
use crate::state::PageState;
use crate::theme::{Styles, Theme};
use crate::validate::validate_page_input;
use crate::Frame;
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

/// Interactive zones of the strip, in logical (reading-independent) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusZone {
    PrevArrow,
    PageInput,
    NextArrow,
    CountSelect,
}

/// Rendered parts of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    PrevArrow,
    PageField,
    MaxIndicator,
    NextArrow,
    CountSelect,
}

/// One rendered part: its role, display text and resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
    pub style: Style,
}

/// Controlled pagination strip.
pub struct Pagination {
    /// Caller-supplied page position.
    page: PageState,

    /// Selector configuration, including the caller-applied count.
    config: PaginationConfig,

    /// Transient text in the page-number field.
    input: String,

    /// Which zone keyboard input is directed at.
    focus_zone: FocusZone,

    /// Transient highlight in the count selector. `None` means the
    /// highlight tracks the caller-applied count.
    select_cursor: Option<usize>,

    /// Label overrides for the arrows.
    previous_page_text: Option<String>,
    next_page_text: Option<String>,

    translator: Box<dyn Translator>,
    directionality: Box<dyn DirectionalityProvider>,

    /// Where notifications go.
    event_sender: Option<mpsc::UnboundedSender<PaginationEvent>>,

    state: ComponentState,
}

impl Pagination {
    /// Create a pagination strip showing page 1 of 1.
    pub fn new() -> Self {
        Self {
            page: PageState::default(),
            config: PaginationConfig::default(),
            input: PageState::default().page_number.to_string(),
            focus_zone: FocusZone::PrevArrow,
            select_cursor: None,
            previous_page_text: None,
            next_page_text: None,
            translator: Box::new(StaticTranslator::new()),
            directionality: Box::new(TextDirection::LeftToRight),
            event_sender: None,
            state: ComponentState::new(),
        }
    }

    /// Set the displayed page number.
    pub fn with_page_number(mut self, page_number: usize) -> Self {
        self.set_page_number(page_number);
        self
    }

    /// Set the displayed page count.
    pub fn with_max_page_number(mut self, max_page_number: usize) -> Self {
        self.set_max_page_number(max_page_number);
        self
    }

    /// Set the selector configuration.
    pub fn with_config(mut self, config: PaginationConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Set event sender for change notifications.
    pub fn with_event_sender(mut self, sender: mpsc::UnboundedSender<PaginationEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    /// Replace the label translator.
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Replace the reading-direction source.
    pub fn with_directionality(
        mut self,
        directionality: impl DirectionalityProvider + 'static,
    ) -> Self {
        self.directionality = Box::new(directionality);
        self
    }

    /// Override the previous-page arrow label.
    pub fn with_previous_page_text(mut self, text: impl Into<String>) -> Self {
        self.previous_page_text = Some(text.into());
        self
    }

    /// Override the next-page arrow label.
    pub fn with_next_page_text(mut self, text: impl Into<String>) -> Self {
        self.next_page_text = Some(text.into());
        self
    }

    /// Write back a new page number. Also resets the typed buffer to it.
    pub fn set_page_number(&mut self, page_number: usize) {
        self.page.page_number = page_number;
        self.input = page_number.to_string();
    }

    /// Write back a new page count.
    pub fn set_max_page_number(&mut self, max_page_number: usize) {
        self.page.max_page_number = max_page_number;
    }

    /// Replace the selector configuration. Drops the transient highlight.
    pub fn set_config(&mut self, config: PaginationConfig) {
        self.config = config;
        self.select_cursor = None;
    }

    /// Write back a new applied items-per-page count.
    pub fn set_selected_count_option(&mut self, count: Option<usize>) {
        self.config.selected_count_option = count;
        self.select_cursor = None;
    }

    /// Replace the typed buffer wholesale. This is how hosts route pasted
    /// text into the field; submission rules apply unchanged.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Get the displayed page number
    pub fn page_number(&self) -> usize {
        self.page.page_number
    }

    /// Get the displayed page count
    pub fn max_page_number(&self) -> usize {
        self.page.max_page_number
    }

    /// Get the page position as a value
    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Get the transient text in the page field
    pub fn input_text(&self) -> &str {
        &self.input
    }

    /// Get the selector configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Get the zone keyboard input is directed at
    pub fn focus_zone(&self) -> FocusZone {
        self.focus_zone
    }

    /// Whether the previous-page arrow accepts activation
    pub fn can_go_to_previous_page(&self) -> bool {
        self.page.can_go_to_previous_page()
    }

    /// Whether the next-page arrow accepts activation
    pub fn can_go_to_next_page(&self) -> bool {
        self.page.can_go_to_next_page()
    }

    /// Label describing the previous-page arrow.
    pub fn previous_page_label(&self) -> String {
        match &self.previous_page_text {
            Some(text) => text.clone(),
            None => self.translator.localize(KEY_PREVIOUS_PAGE, &[]),
        }
    }

    /// Label describing the next-page arrow.
    pub fn next_page_label(&self) -> String {
        match &self.next_page_text {
            Some(text) => text.clone(),
            None => self.translator.localize(KEY_NEXT_PAGE, &[]),
        }
    }

    /// Label describing the page-number field.
    pub fn page_field_label(&self) -> String {
        self.translator.localize(KEY_PAGE_NUMBER_LABEL, &[])
    }

    /// Ask for the page before the displayed one.
    ///
    /// Intents are deliberately unguarded: callers driving the widget
    /// programmatically get the notification even when the matching arrow
    /// is disabled. Interaction paths check enablement before calling.
    pub fn request_previous_page(&mut self) {
        let target = self.page.previous_page_target();
        debug!("requesting previous page {}", target);
        self.emit(PaginationEvent::PageChange { page: target });
    }

    /// Ask for the page after the displayed one.
    pub fn request_next_page(&mut self) {
        let target = self.page.next_page_target();
        debug!("requesting next page {}", target);
        self.emit(PaginationEvent::PageChange { page: target });
    }

    /// Submit whatever is in the page field.
    ///
    /// Valid input emits a page-change notification and leaves the buffer
    /// as typed. Invalid input emits nothing and reverts the buffer to the
    /// displayed page number. Returns whether a notification went out.
    pub fn submit_page_input(&mut self) -> bool {
        match validate_page_input(&self.input, self.page.page_number, self.page.max_page_number) {
            Ok(target) => {
                debug!("page input '{}' accepted, requesting page {}", self.input, target);
                self.emit(PaginationEvent::PageChange { page: target });
                true
            }
            Err(reason) => {
                debug!(
                    "page input '{}' rejected ({}), reverting to {}",
                    self.input, reason, self.page.page_number
                );
                self.input = self.page.page_number.to_string();
                false
            }
        }
    }

    /// Discard the typed buffer and show the displayed page number again.
    pub fn revert_page_input(&mut self) {
        self.input = self.page.page_number.to_string();
    }

    /// Ask for a new items-per-page count from raw text.
    ///
    /// Any finite numeric value is forwarded without checking it against
    /// the option list; non-numeric text is dropped with no notification.
    pub fn request_item_count_change(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                let item_count = value as usize;
                debug!("requesting item count {}", item_count);
                self.emit(PaginationEvent::ItemCountChange { item_count });
                true
            }
            _ => {
                debug!("item count input '{}' is not numeric, ignoring", raw);
                false
            }
        }
    }

    /// Handle keyboard input. Returns whether the key was consumed.
    ///
    /// Tab and BackTab cycle the focus zone; moving the zone off the page
    /// field submits the pending buffer, mirroring a blur. Within a zone,
    /// keys that do not apply fall through unconsumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if !self.state.is_visible || !self.state.is_enabled {
            return Ok(false);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next_zone();
                return Ok(true);
            }
            KeyCode::BackTab => {
                self.focus_previous_zone();
                return Ok(true);
            }
            _ => {}
        }

        match self.focus_zone {
            FocusZone::PrevArrow => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if self.page.can_go_to_previous_page() {
                        self.request_previous_page();
                    }
                    Ok(true)
                }
                _ => Ok(false),
            },
            FocusZone::NextArrow => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if self.page.can_go_to_next_page() {
                        self.request_next_page();
                    }
                    Ok(true)
                }
                _ => Ok(false),
            },
            FocusZone::PageInput => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.input.push(c);
                    trace!("page buffer is now '{}'", self.input);
                    Ok(true)
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    trace!("page buffer is now '{}'", self.input);
                    Ok(true)
                }
                KeyCode::Enter => {
                    self.submit_page_input();
                    Ok(true)
                }
                KeyCode::Esc => {
                    self.revert_page_input();
                    Ok(true)
                }
                _ => Ok(false),
            },
            FocusZone::CountSelect => {
                if !self.count_select_shown() {
                    return Ok(false);
                }
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.select_previous_option();
                        Ok(true)
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.select_next_option();
                        Ok(true)
                    }
                    _ => Ok(false),
                }
            }
        }
    }

    /// Handle mouse input. Returns whether the click was consumed.
    ///
    /// Coordinates are screen-absolute and tested against the area the
    /// widget last rendered into. A click lands in document order: first
    /// any pending page input submits (the blur), then focus moves, then
    /// an arrow activates if its state allows. One click can therefore
    /// emit two notifications.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Result<bool> {
        if !self.state.is_visible || !self.state.is_enabled {
            return Ok(false);
        }
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(false);
        }

        let hit = self
            .layout_zones(self.state.size)
            .into_iter()
            .find(|(kind, rect)| {
                *kind != SegmentKind::MaxIndicator && rect_contains(*rect, event.column, event.row)
            })
            .map(|(kind, _)| kind);

        match hit {
            Some(SegmentKind::PrevArrow) => {
                self.set_zone(FocusZone::PrevArrow);
                if self.page.can_go_to_previous_page() {
                    self.request_previous_page();
                }
                Ok(true)
            }
            Some(SegmentKind::NextArrow) => {
                self.set_zone(FocusZone::NextArrow);
                if self.page.can_go_to_next_page() {
                    self.request_next_page();
                }
                Ok(true)
            }
            Some(SegmentKind::PageField) => {
                self.set_zone(FocusZone::PageInput);
                Ok(true)
            }
            Some(SegmentKind::CountSelect) => {
                self.set_zone(FocusZone::CountSelect);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// The rendered parts in visual order, with styles resolved against
    /// `theme`. This is the single source of truth behind both drawing
    /// and hit-testing.
    pub fn segments(&self, theme: &Theme) -> Vec<Segment> {
        let styles = theme.styles();
        self.segment_texts()
            .into_iter()
            .map(|(kind, text)| Segment {
                kind,
                style: self.segment_style(kind, &styles),
                text,
            })
            .collect()
    }

    /// Where each part lands inside `area`, in visual order. Parts are one
    /// column apart and clip at the right edge of the area.
    pub fn layout_zones(&self, area: Rect) -> Vec<(SegmentKind, Rect)> {
        let texts = self.segment_texts();
        let mut zones = Vec::with_capacity(texts.len());
        let height = area.height.min(1);
        let end = area.x.saturating_add(area.width);
        let mut x = area.x;

        for (kind, text) in texts {
            if x >= end {
                break;
            }
            let width = (text.width() as u16).min(end - x);
            zones.push((kind, Rect::new(x, area.y, width, height)));
            x = x.saturating_add(width).saturating_add(1);
        }
        zones
    }

    fn count_select_shown(&self) -> bool {
        self.config.show_item_count_select && !self.config.item_count_options.is_empty()
    }

    /// The highlighted option index, defaulting to the applied count and
    /// clamped into the option list.
    fn effective_select_index(&self) -> Option<usize> {
        if self.config.item_count_options.is_empty() {
            return None;
        }
        let applied = self.config.selected_index().unwrap_or(0);
        let index = self.select_cursor.unwrap_or(applied);
        Some(index.min(self.config.item_count_options.len() - 1))
    }

    fn select_previous_option(&mut self) {
        if let Some(index) = self.effective_select_index() {
            if index > 0 {
                self.move_select_cursor(index - 1);
            }
        }
    }

    fn select_next_option(&mut self) {
        if let Some(index) = self.effective_select_index() {
            if index + 1 < self.config.item_count_options.len() {
                self.move_select_cursor(index + 1);
            }
        }
    }

    fn move_select_cursor(&mut self, index: usize) {
        if let Some(&item_count) = self.config.item_count_options.get(index) {
            self.select_cursor = Some(index);
            debug!("items-per-page highlight moved to {}", item_count);
            self.emit(PaginationEvent::ItemCountChange { item_count });
        }
    }

    fn zones(&self) -> Vec<FocusZone> {
        let mut zones = vec![FocusZone::PrevArrow, FocusZone::PageInput, FocusZone::NextArrow];
        if self.count_select_shown() {
            zones.push(FocusZone::CountSelect);
        }
        zones
    }

    fn focus_next_zone(&mut self) {
        let zones = self.zones();
        let current = zones.iter().position(|z| *z == self.focus_zone).unwrap_or(0);
        self.set_zone(zones[(current + 1) % zones.len()]);
    }

    fn focus_previous_zone(&mut self) {
        let zones = self.zones();
        let current = zones.iter().position(|z| *z == self.focus_zone).unwrap_or(0);
        self.set_zone(zones[(current + zones.len() - 1) % zones.len()]);
    }

    /// Move the focus zone. Leaving the page field submits its buffer.
    fn set_zone(&mut self, zone: FocusZone) {
        if self.focus_zone == FocusZone::PageInput && zone != FocusZone::PageInput {
            debug!("focus left the page field, submitting pending input");
            self.submit_page_input();
        }
        self.focus_zone = zone;
    }

    fn emit(&self, event: PaginationEvent) {
        if let Some(ref sender) = self.event_sender {
            let _ = sender.send(event);
        }
    }

    /// Display texts in visual order. Right-to-left direction reverses the
    /// strip and swaps the arrow glyphs so each arrow still points toward
    /// the page it requests.
    fn segment_texts(&self) -> Vec<(SegmentKind, String)> {
        let mirrored = self.directionality.direction().mirrored();
        let (prev_glyph, next_glyph) = if mirrored { ("\u{25b6}", "\u{25c0}") } else { ("\u{25c0}", "\u{25b6}") };

        let mut texts = vec![
            (SegmentKind::PrevArrow, prev_glyph.to_string()),
            (SegmentKind::PageField, format!("[ {} ]", self.input)),
            (
                SegmentKind::MaxIndicator,
                self.translator.localize(
                    KEY_PAGE_MAX_INDICATOR,
                    &[("max", self.page.max_page_number.to_string())],
                ),
            ),
            (SegmentKind::NextArrow, next_glyph.to_string()),
        ];

        if self.count_select_shown() {
            if let Some(index) = self.effective_select_index() {
                if let Some(count) = self.config.item_count_options.get(index) {
                    let label = self
                        .translator
                        .localize(KEY_ITEMS_PER_PAGE_OPTION, &[("count", count.to_string())]);
                    texts.push((SegmentKind::CountSelect, format!("\u{27e8} {} \u{27e9}", label)));
                }
            }
        }

        if mirrored {
            texts.reverse();
        }
        texts
    }

    fn segment_style(&self, kind: SegmentKind, styles: &Styles) -> Style {
        if !self.state.is_enabled {
            return styles.arrow_disabled;
        }
        let focused = self.state.has_focus;

        match kind {
            SegmentKind::PrevArrow => {
                if !self.page.can_go_to_previous_page() {
                    styles.arrow_disabled
                } else if focused && self.focus_zone == FocusZone::PrevArrow {
                    styles.arrow_focused
                } else {
                    styles.arrow_enabled
                }
            }
            SegmentKind::NextArrow => {
                if !self.page.can_go_to_next_page() {
                    styles.arrow_disabled
                } else if focused && self.focus_zone == FocusZone::NextArrow {
                    styles.arrow_focused
                } else {
                    styles.arrow_enabled
                }
            }
            SegmentKind::PageField => {
                if focused && self.focus_zone == FocusZone::PageInput {
                    styles.page_field_focused
                } else {
                    styles.page_field
                }
            }
            SegmentKind::MaxIndicator => styles.max_indicator,
            SegmentKind::CountSelect => {
                let pending =
                    self.select_cursor.is_some() && self.select_cursor != self.config.selected_index();
                if pending {
                    styles.count_select_highlight
                } else if focused && self.focus_zone == FocusZone::CountSelect {
                    styles.count_select_focused
                } else {
                    styles.count_select
                }
            }
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[async_trait]
impl Component for Pagination {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        self.handle_key(event)?;
        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        self.handle_mouse(event)?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.state.size = area;
        if !self.state.is_visible || area.width == 0 || area.height == 0 {
            return;
        }

        let mut spans: Vec<Span> = Vec::new();
        for (i, segment) in self.segments(theme).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(segment.text, segment.style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        if self.state.has_focus && !focus && self.focus_zone == FocusZone::PageInput {
            debug!("widget blurred while the page field was active");
            self.submit_page_input();
        }
        self.state.has_focus = focus;
    }

    fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.is_visible = visible;
    }

    fn is_enabled(&self) -> bool {
        self.state.is_enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.state.is_enabled = enabled;
    }
}
