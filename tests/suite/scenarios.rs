//! End-to-end store scenarios driven through the public API.

use contacts_engine::{
    ContactIndex, ContactStore, FormField, NavRequest, Navigator, Route, RouteStack, SaveError,
    StoreEvent,
};
use std::sync::{Arc, Mutex};

fn fill(store: &mut ContactStore<RouteStack>, fields: [&str; 4]) {
    for (field, value) in FormField::ALL.into_iter().zip(fields) {
        store.set_field(field, value);
    }
}

fn form_values(store: &ContactStore<RouteStack>) -> [String; 4] {
    FormField::ALL.map(|field| store.form().field(field).text().to_string())
}

#[test]
fn scenario_save_alice() {
    let mut store = ContactStore::new(RouteStack::new(Route::AddContact));
    fill(&mut store, ["Alice", "a@x.com", "555-1111", "friend"]);

    store.save_contact().unwrap();

    assert_eq!(store.contacts().len(), 1);
    let alice = &store.contacts()[0];
    assert_eq!(
        [
            alice.name(),
            alice.email(),
            alice.phone_number(),
            alice.description()
        ],
        ["Alice", "a@x.com", "555-1111", "friend"]
    );
    assert_eq!(form_values(&store), ["", "", "", ""].map(String::from));
    assert_eq!(store.navigator().routes(), &[Route::ContactList]);
}

#[test]
fn scenario_whitespace_name_after_alice() {
    let mut store = ContactStore::new(RouteStack::new(Route::AddContact));
    fill(&mut store, ["Alice", "a@x.com", "555-1111", "friend"]);
    store.save_contact().unwrap();

    let alerts = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&alerts);
    store.subscribe(move |event| {
        if let StoreEvent::ValidationFailed(alert) = event {
            sink.lock().unwrap().push(*alert);
        }
    });

    store.go_to_add_contact();
    store.set_field(FormField::Name, "   ");
    assert_eq!(store.save_contact(), Err(SaveError::EmptyName));

    assert_eq!(store.contacts().len(), 1);
    assert_eq!(store.form().name(), "   ");
    assert_eq!(store.navigator().current(), Route::AddContact);
    let alerts = alerts.lock().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title(), "Validation Error");
    assert_eq!(alerts[0].message(), "Please enter a contact name.");
    assert_eq!(alerts[0].dismiss_label(), "OK");
}

#[test]
fn scenario_bob_then_carol_select_second() {
    let mut store = ContactStore::new(RouteStack::default());
    fill(&mut store, ["Bob", "bob@x.com", "555-2222", ""]);
    store.save_contact().unwrap();
    fill(&mut store, ["Carol", "carol@x.com", "555-3333", "neighbor"]);
    store.save_contact().unwrap();

    let names: Vec<&str> = store.contacts().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Bob", "Carol"]);

    store.select_contact(ContactIndex::new(1)).unwrap();
    assert_eq!(store.selected(), Some(&store.contacts()[1]));
    assert_eq!(
        store.navigator().routes(),
        &[Route::ContactList, Route::ContactDetail]
    );

    store.go_back();
    assert_eq!(store.navigator().current(), Route::ContactList);
    assert_eq!(store.selected().map(|c| c.name()), Some("Carol"));
}

/// A navigator owned outside the store, shared through a handle.
#[derive(Clone, Default)]
struct SharedLog(Arc<Mutex<Vec<NavRequest>>>);

impl Navigator for SharedLog {
    fn navigate(&mut self, request: NavRequest) {
        self.0.lock().unwrap().push(request);
    }
}

#[test]
fn custom_navigator_receives_every_request_in_order() {
    let log = SharedLog::default();
    let mut store = ContactStore::new(log.clone());

    store.go_to_add_contact();
    store.set_field(FormField::Name, "Dana");
    store.save_contact().unwrap();
    store.select_contact(ContactIndex::new(0)).unwrap();
    store.go_back();
    store.go_to_contacts_list();

    assert_eq!(
        *log.0.lock().unwrap(),
        vec![
            NavRequest::Reset(Route::AddContact),
            NavRequest::Reset(Route::ContactList),
            NavRequest::Push(Route::ContactDetail),
            NavRequest::Back,
            NavRequest::Reset(Route::ContactList),
        ]
    );
}
