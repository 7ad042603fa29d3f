//! Application shell: several comboboxes sharing one country list.
//!
//! The shell owns the document event hub and routes terminal input:
//! pointer presses and navigation keys go through the hub so every open
//! combobox sees them; text editing goes to the focused combobox only.

use std::cell::RefCell;
use std::rc::Rc;

use combobox_components::prelude::*;
use combobox_core::style;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::config::AppConfig;
use crate::error::AppError;

/// Rows per instance: label, input, gap.
const INSTANCE_HEIGHT: u16 = 3;
/// First instance row, below the title.
const INSTANCES_TOP: u16 = 2;
/// Status line plus key hints.
const FOOTER_HEIGHT: u16 = 2;

/// Last emitted selection of each instance, by instance index.
#[derive(Debug, Clone, Default)]
pub struct InstanceSelections {
    inner: Rc<RefCell<Vec<Vec<String>>>>,
}

impl InstanceSelections {
    /// One empty selection per instance.
    pub fn new(count: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(vec![Vec::new(); count])),
        }
    }

    /// Store the selection emitted by instance `index`.
    pub fn record(&self, index: usize, selection: Vec<String>) {
        let mut inner = self.inner.borrow_mut();
        if index >= inner.len() {
            inner.resize(index + 1, Vec::new());
        }
        tracing::info!(index, ?selection, "instance selection changed");
        inner[index] = selection;
    }

    /// Selection of instance `index` (empty if nothing was recorded).
    pub fn get(&self, index: usize) -> Vec<String> {
        self.inner.borrow().get(index).cloned().unwrap_or_default()
    }

    /// Every instance's selection.
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.inner.borrow().clone()
    }
}

/// Progress of the country fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(usize),
    Failed(String),
}

/// Owns the comboboxes, focus and recorded selections.
pub struct AppShell {
    events: DocumentEvents,
    instances: Vec<MountedCombobox>,
    focus: FocusManager,
    selections: InstanceSelections,
    colors: ColorScheme,
    load_state: LoadState,
    should_quit: bool,
}

impl AppShell {
    /// One mounted combobox per configured instance, all empty until
    /// [`set_countries`](Self::set_countries). The first instance has focus.
    pub fn new(config: &AppConfig) -> Self {
        let events = DocumentEvents::new();
        let selections = InstanceSelections::new(config.instances.len());
        let colors = config.ui.theme.color_scheme();

        let instances: Vec<MountedCombobox> = config
            .instances
            .iter()
            .enumerate()
            .map(|(index, instance)| {
                let sink = selections.clone();
                Combobox::new(Vec::<String>::new())
                    .with_label(&instance.label)
                    .with_placeholder(&instance.placeholder)
                    .searchable(instance.searchable)
                    .with_disabled(instance.disabled.iter().cloned())
                    .with_display_limit(config.ui.display_limit)
                    .with_max_visible(config.ui.max_visible)
                    .with_colors(colors)
                    .on_change(move |selection| sink.record(index, selection))
                    .mount(&events)
            })
            .collect();

        if let Some(first) = instances.first() {
            first.borrow_mut().set_focus(true);
        }

        Self {
            focus: FocusManager::new(instances.len()),
            events,
            instances,
            selections,
            colors,
            load_state: LoadState::Loading,
            should_quit: false,
        }
    }

    /// Give every instance the fetched names.
    pub fn set_countries(&mut self, names: Vec<String>) {
        tracing::info!(count = names.len(), "countries loaded");
        for instance in &self.instances {
            instance.borrow_mut().set_option_list(names.iter().cloned());
        }
        self.load_state = LoadState::Ready(names.len());
    }

    /// Record a failed fetch. The instances keep their empty lists.
    pub fn countries_failed(&mut self, error: &AppError) {
        tracing::warn!(%error, "failed to load countries");
        self.load_state = LoadState::Failed(error.to_string());
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selections(&self) -> &InstanceSelections {
        &self.selections
    }

    /// Index of the focused instance.
    pub fn focused(&self) -> usize {
        self.focus.current()
    }

    pub fn instance(&self, index: usize) -> Option<&MountedCombobox> {
        self.instances.get(index)
    }

    /// `(label, selection)` for every instance, for the exit summary.
    pub fn summary(&self) -> Vec<(String, Vec<String>)> {
        let mut selections = self.selections.snapshot().into_iter();
        self.instances
            .iter()
            .map(|instance| {
                let label = instance.borrow().label().unwrap_or_default().to_string();
                (label, selections.next().unwrap_or_default())
            })
            .collect()
    }

    fn focused_instance(&self) -> Option<&MountedCombobox> {
        self.instances.get(self.focus.current())
    }

    fn any_open(&self) -> bool {
        self.instances.iter().any(|instance| instance.borrow().is_open())
    }

    fn focused_searchable(&self) -> bool {
        self.focused_instance()
            .is_some_and(|instance| instance.borrow().is_searchable())
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Route one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.move_focus(FocusDirection::Forward);
                return;
            }
            KeyCode::BackTab => {
                self.move_focus(FocusDirection::Backward);
                return;
            }
            KeyCode::Char('q') if !self.any_open() && !self.focused_searchable() => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if Combobox::is_search_key(&key) {
            if let Some(instance) = self.focused_instance() {
                instance.borrow_mut().handle_key(key);
            }
            return;
        }

        if self.events.dispatch(DocumentEvent::KeyDown(key)) {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Down => {
                if let Some(instance) = self.focused_instance() {
                    instance.borrow_mut().open_dropdown();
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        self.events.dispatch(DocumentEvent::PointerDown(position));

        let Some(index) = self.instance_at(position) else {
            return;
        };
        self.focus_instance(index);
        let result = self.instances[index].borrow_mut().handle_click(position);
        tracing::trace!(index, ?result, "click routed to instance");
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Some(instance) = self.focused_instance() {
            instance.borrow_mut().handle_paste(text);
        }
    }

    /// Topmost instance whose last rendered region contains `position`.
    fn instance_at(&self, position: Position) -> Option<usize> {
        let open = self
            .instances
            .iter()
            .position(|instance| {
                let widget = instance.borrow();
                widget.is_open() && widget.bounds().contains(position)
            });
        open.or_else(|| {
            self.instances
                .iter()
                .position(|instance| instance.borrow().bounds().contains(position))
        })
    }

    fn move_focus(&mut self, direction: FocusDirection) {
        if let Some(change) = self.focus.move_focus(direction) {
            self.apply_focus_change(change);
            if let Some(instance) = self.instances.get(change.to) {
                instance.borrow_mut().open_dropdown();
            }
        }
    }

    fn focus_instance(&mut self, index: usize) {
        if let Some(change) = self.focus.set(index) {
            self.apply_focus_change(change);
        }
    }

    fn apply_focus_change(&mut self, change: FocusChange) {
        tracing::debug!(from = change.from, to = change.to, "focus moved");
        if let Some(instance) = self.instances.get(change.from) {
            instance.borrow_mut().set_focus(false);
        }
        if let Some(instance) = self.instances.get(change.to) {
            instance.borrow_mut().set_focus(true);
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Apply deferred scrolling after a completed draw. Returns true if any
    /// viewport moved and another draw is needed.
    pub fn settle(&mut self) -> bool {
        let mut moved = false;
        for instance in &self.instances {
            moved |= instance.borrow_mut().settle();
        }
        moved
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        buf.set_string(
            area.x + 1,
            area.y,
            "Country picker",
            Style::default()
                .fg(self.colors.accent)
                .add_modifier(Modifier::BOLD),
        );

        let (status, status_style) = match &self.load_state {
            LoadState::Loading => ("Loading countries…".to_string(), Style::default().fg(style::INFO)),
            LoadState::Ready(count) => (
                format!("{count} countries"),
                Style::default().fg(self.colors.text_dim),
            ),
            LoadState::Failed(reason) => (format!("Failed: {reason}"), style::error()),
        };
        let width = status.chars().count() as u16;
        let x = area.right().saturating_sub(width + 1).max(area.x + 16);
        buf.set_stringn(x, area.y, &status, area.right().saturating_sub(x) as usize, status_style);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let Some(focused) = self.focused_instance() else {
            return;
        };
        let widget = focused.borrow();

        let status_area = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(status_area, Style::default().bg(style::SURFACE_2));
        let tooltip = widget.tooltip_text();
        let (text, text_style) = if tooltip.is_empty() {
            (
                "Nothing selected".to_string(),
                Style::default().fg(self.colors.text_muted),
            )
        } else {
            (
                format!("Selected: {tooltip}"),
                Style::default().fg(self.colors.text),
            )
        };
        buf.set_stringn(
            area.x + 1,
            area.y,
            &text,
            area.width.saturating_sub(2) as usize,
            text_style.bg(style::SURFACE_2),
        );

        let mut hints = KeyHintsBar::from_tuples(&widget.key_hints())
            .hint("Tab", "Next field")
            .colors(self.colors);
        if !widget.is_open() {
            hints = if widget.is_searchable() {
                hints.hint("Esc", "Quit")
            } else {
                hints.hint("q", "Quit")
            };
        }
        hints.render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    }
}

impl Widget for &AppShell {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < INSTANCES_TOP + INSTANCE_HEIGHT + FOOTER_HEIGHT {
            for instance in &self.instances {
                instance.borrow().clear_layout();
            }
            return;
        }
        self.render_title(Rect::new(area.x, area.y, area.width, 1), buf);

        let footer_top = area.bottom() - FOOTER_HEIGHT;
        let mut slots = Vec::with_capacity(self.instances.len());
        for (index, instance) in self.instances.iter().enumerate() {
            let label_y = area.y + INSTANCES_TOP + index as u16 * INSTANCE_HEIGHT;
            let widget = instance.borrow();
            if label_y + 1 >= footer_top {
                widget.clear_layout();
                continue;
            }
            let label_style = if self.focus.is_focused(index) {
                style::label().fg(self.colors.accent)
            } else {
                style::label()
            };
            buf.set_stringn(
                area.x + 2,
                label_y,
                widget.label().unwrap_or_default(),
                area.width.saturating_sub(4) as usize,
                label_style,
            );
            let input_y = label_y + 1;
            let slot = Rect::new(
                area.x + 2,
                input_y,
                area.width.saturating_sub(4),
                footer_top - input_y,
            );
            slots.push((index, slot, widget.is_open()));
        }

        // Open popups overlay the instances below them.
        slots.sort_by_key(|&(_, _, open)| open);
        for (index, slot, _) in slots {
            Component::render(&*self.instances[index].borrow(), slot, buf);
        }

        self.render_footer(
            Rect::new(area.x, footer_top, area.width, FOOTER_HEIGHT),
            buf,
        );
    }
}
