//! Screen identifiers and navigation requests.

/// The three screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    AddContact,
    #[default]
    ContactList,
    ContactDetail,
}

impl Route {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AddContact => "Add Contact",
            Self::ContactList => "Contacts",
            Self::ContactDetail => "Contact Details",
        }
    }

    /// Parse a screen name as written in config or the environment.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "add" | "add-contact" | "new" => Some(Self::AddContact),
            "list" | "contacts" | "contact-list" => Some(Self::ContactList),
            _ => None,
        }
    }
}

/// A navigation instruction issued by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Absolute: replace the whole stack with this screen.
    Reset(Route),
    /// Relative: push this screen on top of the current one.
    Push(Route),
    /// Relative: pop one level.
    Back,
}
