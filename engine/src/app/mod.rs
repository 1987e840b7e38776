//! View model driven by the TUI.
//!
//! `App` owns the single [`ContactStore`] and the view-only state around it
//! (focused field, list cursor, open alert, status line). Screens read from
//! it and call its commands; it forwards those to the store and folds the
//! store's change events back into view state.

use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use contacts_types::{
    Contact, ContactIndex, FormField, Route, ValidationAlert,
    ui::{DraftInput, ModalEffect, UiOptions},
};

use crate::navigation::RouteStack;
use crate::store::{ContactStore, StoreEvent};

const ALERT_SHAKE_DURATION: Duration = Duration::from_millis(360);
const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug)]
struct StatusMessage {
    text: String,
    shown_at: Instant,
}

#[derive(Debug)]
struct ViewState {
    focused_field: FormField,
    list_cursor: usize,
    alert: Option<ValidationAlert>,
    modal_effect: Option<ModalEffect>,
    status: Option<StatusMessage>,
    last_frame: Instant,
    frame_elapsed: Duration,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            focused_field: FormField::default(),
            list_cursor: 0,
            alert: None,
            modal_effect: None,
            status: None,
            last_frame: Instant::now(),
            frame_elapsed: Duration::ZERO,
        }
    }
}

#[derive(Debug)]
pub struct App {
    store: ContactStore<RouteStack>,
    events: Receiver<StoreEvent>,
    view: ViewState,
    ui_options: UiOptions,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions, start: Route) -> Self {
        let mut store = ContactStore::new(RouteStack::new(start));
        let (tx, events) = mpsc::channel();
        store.subscribe(move |event| {
            // The receiver lives as long as the App that owns the store.
            let _ = tx.send(event.clone());
        });
        tracing::debug!(?start, "App initialized");

        Self {
            store,
            events,
            view: ViewState::default(),
            ui_options,
            should_quit: false,
        }
    }

    // ========================================================================
    // State access
    // ========================================================================

    #[must_use]
    pub fn store(&self) -> &ContactStore<RouteStack> {
        &self.store
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.store.navigator().current()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.store.navigator().can_go_back()
    }

    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    #[must_use]
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.store.selected()
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &DraftInput {
        self.store.form().field(field)
    }

    #[must_use]
    pub fn focused_field(&self) -> FormField {
        self.view.focused_field
    }

    #[must_use]
    pub fn list_cursor(&self) -> usize {
        self.view.list_cursor
    }

    #[must_use]
    pub fn alert(&self) -> Option<&ValidationAlert> {
        self.view.alert.as_ref()
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.view.status.as_ref().map(|status| status.text.as_str())
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Frame timing and effects
    // ========================================================================

    /// Advance per-frame state: timing, status expiry, pending store events.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.view.frame_elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;

        if self
            .view
            .status
            .as_ref()
            .is_some_and(|status| now.duration_since(status.shown_at) >= STATUS_TTL)
        {
            self.view.status = None;
        }

        self.drain_store_events();
    }

    #[must_use]
    pub fn frame_elapsed(&self) -> Duration {
        self.view.frame_elapsed
    }

    pub fn modal_effect_mut(&mut self) -> Option<&mut ModalEffect> {
        self.view.modal_effect.as_mut()
    }

    pub fn clear_modal_effect(&mut self) {
        self.view.modal_effect = None;
    }

    // ========================================================================
    // Add screen
    // ========================================================================

    pub fn focus_next_field(&mut self) {
        self.view.focused_field = self.view.focused_field.next();
    }

    pub fn focus_prev_field(&mut self) {
        self.view.focused_field = self.view.focused_field.prev();
    }

    /// Apply an edit to the focused scratch field.
    pub fn edit_focused<R>(&mut self, edit: impl FnOnce(&mut DraftInput) -> R) -> R {
        let result = self.store.edit_field(self.view.focused_field, edit);
        self.drain_store_events();
        result
    }

    pub fn save_contact(&mut self) {
        // Rejections also arrive as a ValidationFailed event, which opens the alert.
        if let Err(err) = self.store.save_contact() {
            tracing::debug!("Save kept the draft: {err}");
        }
        self.drain_store_events();
    }

    pub fn go_to_add_contact(&mut self) {
        self.store.go_to_add_contact();
        self.drain_store_events();
    }

    // ========================================================================
    // List and detail screens
    // ========================================================================

    pub fn list_move_up(&mut self) {
        self.view.list_cursor = self.view.list_cursor.saturating_sub(1);
    }

    pub fn list_move_down(&mut self) {
        let last = self.store.contacts().len().saturating_sub(1);
        self.view.list_cursor = (self.view.list_cursor + 1).min(last);
    }

    pub fn select_at_cursor(&mut self) {
        if self.store.contacts().is_empty() {
            return;
        }
        let index = ContactIndex::new(self.view.list_cursor);
        if let Err(err) = self.store.select_contact(index) {
            self.set_status(err.to_string());
        }
        self.drain_store_events();
    }

    pub fn go_to_contacts_list(&mut self) {
        self.store.go_to_contacts_list();
    }

    pub fn go_back(&mut self) {
        self.store.go_back();
    }

    // ========================================================================
    // Alert
    // ========================================================================

    pub fn dismiss_alert(&mut self) {
        self.view.alert = None;
        self.view.modal_effect = None;
    }

    // ========================================================================
    // Store events
    // ========================================================================

    fn drain_store_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply_store_event(event);
        }
    }

    fn apply_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::ContactAdded { index } => {
                self.view.list_cursor = index.value();
                let name = self
                    .store
                    .contact(index)
                    .map(|contact| contact.name().to_string())
                    .unwrap_or_default();
                self.set_status(format!("Saved {name}"));
            }
            StoreEvent::FormCleared => {
                self.view.focused_field = FormField::Name;
            }
            StoreEvent::SelectionChanged { index } => {
                self.view.list_cursor = index.value();
            }
            StoreEvent::ValidationFailed(alert) => {
                self.view.alert = Some(alert);
                self.view.modal_effect = if self.ui_options.reduced_motion {
                    None
                } else {
                    Some(ModalEffect::shake(ALERT_SHAKE_DURATION))
                };
            }
            StoreEvent::FieldChanged(_) => {}
        }
    }

    fn set_status(&mut self, text: String) {
        self.view.status = Some(StatusMessage {
            text,
            shown_at: Instant::now(),
        });
    }
}
