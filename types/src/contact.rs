//! Contact records and the draft form they are built from.

use crate::ui::DraftInput;
use crate::{EmptyStringError, NonEmptyStaticStr, NonEmptyString};

/// A saved contact.
///
/// Built once from a [`ContactForm`] and never edited afterwards. Only the
/// name is required; the other attributes may be empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: NonEmptyString,
    email: String,
    phone_number: String,
    description: String,
}

impl Contact {
    #[must_use]
    pub fn new(
        name: NonEmptyString,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name,
            email: email.into(),
            phone_number: phone_number.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attribute text for a form field, so views can iterate fields uniformly.
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => self.name(),
            FormField::Email => self.email(),
            FormField::PhoneNumber => self.phone_number(),
            FormField::Description => self.description(),
        }
    }
}

/// One of the four inputs on the add-contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    PhoneNumber,
    Description,
}

impl FormField {
    pub const ALL: [Self; 4] = [
        Self::Name,
        Self::Email,
        Self::PhoneNumber,
        Self::Description,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone",
            Self::Description => "Description",
        }
    }

    /// Next field in tab order, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::PhoneNumber,
            Self::PhoneNumber => Self::Description,
            Self::Description => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Email => Self::Name,
            Self::PhoneNumber => Self::Email,
            Self::Description => Self::PhoneNumber,
        }
    }
}

/// Scratch fields bound to the add-contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: DraftInput,
    email: DraftInput,
    phone_number: DraftInput,
    description: DraftInput,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, field: FormField) -> &DraftInput {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::PhoneNumber => &self.phone_number,
            FormField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut DraftInput {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::Description => &mut self.description,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.text()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.text()
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        self.phone_number.text()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.text()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| self.field(*field).text().is_empty())
    }

    /// Copy the current draft into a new record.
    ///
    /// Fails when the name is empty or whitespace-only. The form itself is
    /// left untouched either way.
    pub fn to_contact(&self) -> Result<Contact, EmptyStringError> {
        let name = NonEmptyString::new(self.name())?;
        Ok(Contact::new(
            name,
            self.email(),
            self.phone_number(),
            self.description(),
        ))
    }

    pub fn clear(&mut self) {
        for field in FormField::ALL {
            self.field_mut(field).clear();
        }
    }
}

const VALIDATION_TITLE: NonEmptyStaticStr = NonEmptyStaticStr::new("Validation Error");
const EMPTY_NAME_MESSAGE: NonEmptyStaticStr =
    NonEmptyStaticStr::new("Please enter a contact name.");
const DISMISS_LABEL: NonEmptyStaticStr = NonEmptyStaticStr::new("OK");

/// User-facing alert raised when a save is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationAlert {
    title: NonEmptyStaticStr,
    message: NonEmptyStaticStr,
    dismiss: NonEmptyStaticStr,
}

impl ValidationAlert {
    #[must_use]
    pub const fn empty_name() -> Self {
        Self {
            title: VALIDATION_TITLE,
            message: EMPTY_NAME_MESSAGE,
            dismiss: DISMISS_LABEL,
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title.as_str()
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message.as_str()
    }

    #[must_use]
    pub const fn dismiss_label(&self) -> &'static str {
        self.dismiss.as_str()
    }
}
