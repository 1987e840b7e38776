//! The contact store: draft form, saved contacts, and the current selection.
//!
//! One store exists per process. Screens receive it by reference and call
//! its operations; the store mutates its state, publishes a [`StoreEvent`]
//! for every change, and then asks its [`Navigator`] to move.

use std::fmt;

use thiserror::Error;

use contacts_types::{
    Contact, ContactForm, ContactIndex, FormField, NavRequest, Route, SubscriptionId,
    ValidationAlert, ui::DraftInput,
};

use crate::navigation::Navigator;

/// A change to store state, delivered to subscribers synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    FieldChanged(FormField),
    FormCleared,
    ContactAdded { index: ContactIndex },
    SelectionChanged { index: ContactIndex },
    ValidationFailed(ValidationAlert),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("contact name is empty")]
    EmptyName,
}

impl SaveError {
    /// The alert the presentation layer should show for this error.
    #[must_use]
    pub const fn alert(self) -> ValidationAlert {
        match self {
            SaveError::EmptyName => ValidationAlert::empty_name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no contact at index {index} (store holds {len})")]
    UnknownContact { index: ContactIndex, len: usize },
}

type Observer = Box<dyn FnMut(&StoreEvent) + Send>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn publish(&mut self, event: &StoreEvent) {
        for (_, observer) in &mut self.entries {
            observer(event);
        }
    }
}

pub struct ContactStore<N> {
    form: ContactForm,
    contacts: Vec<Contact>,
    selected: Option<ContactIndex>,
    navigator: N,
    observers: Observers,
}

impl<N: fmt::Debug> fmt::Debug for ContactStore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("form", &self.form)
            .field("contacts", &self.contacts)
            .field("selected", &self.selected)
            .field("navigator", &self.navigator)
            .field("observers", &self.observers.entries.len())
            .finish()
    }
}

impl<N: Navigator> ContactStore<N> {
    #[must_use]
    pub fn new(navigator: N) -> Self {
        Self {
            form: ContactForm::default(),
            contacts: Vec::new(),
            selected: None,
            navigator,
            observers: Observers::default(),
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    #[must_use]
    pub fn contact(&self, index: ContactIndex) -> Option<&Contact> {
        self.contacts.get(index.value())
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Contact> {
        self.selected.and_then(|index| self.contact(index))
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<ContactIndex> {
        self.selected
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register an observer. It is called for every later change, before the
    /// mutating call returns.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&StoreEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ========================================================================
    // Draft editing
    // ========================================================================

    /// Edit one scratch field in place.
    ///
    /// Subscribers are told only when the text changed; cursor movement is
    /// not a change.
    pub fn edit_field<R>(
        &mut self,
        field: FormField,
        edit: impl FnOnce(&mut DraftInput) -> R,
    ) -> R {
        let draft = self.form.field_mut(field);
        let before = draft.text().to_owned();
        let result = edit(draft);
        if draft.text() != before {
            self.observers.publish(&StoreEvent::FieldChanged(field));
        }
        result
    }

    pub fn set_field(&mut self, field: FormField, text: impl Into<String>) {
        let text = text.into();
        self.edit_field(field, |draft| draft.set_text(text));
    }

    pub(crate) fn clear_form(&mut self) {
        self.form.clear();
        self.observers.publish(&StoreEvent::FormCleared);
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Save the draft as a new contact and show the list.
    ///
    /// With an empty or whitespace-only name nothing changes: the draft is
    /// kept, subscribers get [`StoreEvent::ValidationFailed`], and no
    /// navigation happens.
    pub fn save_contact(&mut self) -> Result<ContactIndex, SaveError> {
        let contact = match self.form.to_contact() {
            Ok(contact) => contact,
            Err(_) => {
                let err = SaveError::EmptyName;
                tracing::debug!("Save rejected: {err}");
                self.observers.publish(&StoreEvent::ValidationFailed(err.alert()));
                return Err(err);
            }
        };

        let index = ContactIndex::new(self.contacts.len());
        self.contacts.push(contact);
        self.observers.publish(&StoreEvent::ContactAdded { index });
        self.clear_form();
        tracing::info!(%index, total = self.contacts.len(), "Saved contact");

        self.navigator.navigate(NavRequest::Reset(Route::ContactList));
        Ok(index)
    }

    /// Select a saved contact and open its detail screen.
    ///
    /// An index past the end is rejected without touching state or
    /// navigating.
    pub fn select_contact(&mut self, index: ContactIndex) -> Result<(), SelectError> {
        if index.value() >= self.contacts.len() {
            let err = SelectError::UnknownContact {
                index,
                len: self.contacts.len(),
            };
            tracing::warn!("Ignoring selection: {err}");
            return Err(err);
        }

        self.selected = Some(index);
        self.observers.publish(&StoreEvent::SelectionChanged { index });
        self.navigator.navigate(NavRequest::Push(Route::ContactDetail));
        Ok(())
    }

    /// Discard the draft and open an empty add form.
    pub fn go_to_add_contact(&mut self) {
        self.clear_form();
        self.navigator.navigate(NavRequest::Reset(Route::AddContact));
    }

    pub fn go_to_contacts_list(&mut self) {
        self.navigator.navigate(NavRequest::Reset(Route::ContactList));
    }

    pub fn go_back(&mut self) {
        self.navigator.navigate(NavRequest::Back);
    }
}
