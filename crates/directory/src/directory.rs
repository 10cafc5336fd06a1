//! ContactDirectory: keyed contact store
//!
//! ## Design
//!
//! The directory owns the exclusive mapping `id -> Contact` plus the ID
//! generator and the last-added identifier. All three sit behind a single
//! `parking_lot::RwLock`, so every check-then-act sequence below runs under
//! one write guard:
//!
//! - add with caller-supplied id: duplicate check, then construct, then insert
//! - add with generated id: generate, then construct, then insert
//! - update: lookup, then replacement construction, then overwrite
//! - delete: lookup, then remove
//!
//! Concurrent callers therefore see at most one winner for a given key, and
//! `NotFound`/`DuplicateKey` are never reported on stale reads.
//!
//! ## Lookup vs dereference
//!
//! [`ContactDirectory::get`] returns `None` for an unknown id. The per-field
//! accessors ([`ContactDirectory::first_name`] and friends) dereference the
//! lookup and fail with `NotFound` instead.
//!
//! ## Contacts are values
//!
//! Stored contacts are immutable. Every read hands out a clone and every
//! update stores a freshly validated replacement under the same key.

use crate::config::DirectoryConfig;
use crate::id_gen::IdGenerator;
use contactbook_core::{Contact, ContactUpdate, Error, Field, Limits, NewContact, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::io::Write;
use tracing::{debug, info, warn};

#[derive(Debug)]
struct DirectoryState {
    contacts: FxHashMap<String, Contact>,
    id_gen: IdGenerator,
    last_added: Option<String>,
}

impl DirectoryState {
    fn store(&mut self, contact: Contact) {
        self.last_added = Some(contact.id().to_string());
        self.contacts.insert(contact.id().to_string(), contact);
    }
}

/// In-memory contact directory
///
/// # Example
///
/// ```
/// use contactbook_directory::ContactDirectory;
/// use contactbook_core::ContactUpdate;
///
/// let directory = ContactDirectory::new();
/// directory
///     .add_with_id("99", "Lennry", "Balthazor", "4325559275", "333 Happy Place")
///     .unwrap();
///
/// directory
///     .update("99", ContactUpdate::new().address("UPDATED"))
///     .unwrap();
/// assert_eq!(directory.address("99").unwrap(), "UPDATED");
/// assert_eq!(directory.first_name("99").unwrap(), "Lennry");
/// ```
#[derive(Debug)]
pub struct ContactDirectory {
    limits: Limits,
    state: RwLock<DirectoryState>,
}

impl ContactDirectory {
    /// Empty directory with default configuration
    pub fn new() -> Self {
        Self::from_valid_config(DirectoryConfig::default())
    }

    /// Empty directory with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: DirectoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DirectoryConfig) -> Self {
        Self {
            limits: config.limits,
            state: RwLock::new(DirectoryState {
                contacts: FxHashMap::default(),
                id_gen: IdGenerator::starting_at(config.first_generated_id),
                last_added: None,
            }),
        }
    }

    // ========== Creation ==========

    /// Produce an identifier not currently used as a key
    ///
    /// The counter persists across calls; candidates already in use are skipped.
    /// Once the counter outgrows the identifier limit the search restarts from 1.
    ///
    /// # Errors
    ///
    /// `IdsExhausted` if every identifier within the limit is taken.
    pub fn generate_unique_id(&self) -> Result<String> {
        let mut state = self.state.write();
        self.next_generated_id(&mut state)
    }

    fn next_generated_id(&self, state: &mut DirectoryState) -> Result<String> {
        let limit = self.limits.max_short_field;
        let DirectoryState {
            contacts, id_gen, ..
        } = state;
        id_gen
            .next_free_within(limit, |candidate| contacts.contains_key(candidate))
            .ok_or_else(|| {
                warn!(target: "contactbook::directory", limit, "No free generated id within limit");
                Error::IdsExhausted { limit }
            })
    }

    /// Build a validated contact with this directory's limits, without storing it
    pub fn create_contact(
        &self,
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Contact> {
        NewContact::new()
            .id(id)
            .first_name(first_name)
            .last_name(last_name)
            .phone_number(phone_number)
            .address(address)
            .build(&self.limits)
    }

    /// Add a contact under a generated identifier
    ///
    /// # Errors
    ///
    /// Validation errors from contact construction, or `IdsExhausted` if no
    /// identifier within the limit is free. The map is unchanged on failure.
    pub fn add(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Contact> {
        self.add_new(
            NewContact::new()
                .first_name(first_name)
                .last_name(last_name)
                .phone_number(phone_number)
                .address(address),
        )
    }

    /// Add a contact under a caller-supplied identifier
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if `id` is already present; this is checked before any
    /// field validation runs. Otherwise validation errors from construction.
    pub fn add_with_id(
        &self,
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Contact> {
        self.add_new(
            NewContact::new()
                .id(id)
                .first_name(first_name)
                .last_name(last_name)
                .phone_number(phone_number)
                .address(address),
        )
    }

    /// Add a contact from possibly-incomplete input
    ///
    /// An absent identifier is generated. A present identifier is checked for
    /// duplicates before the remaining fields are validated.
    pub fn add_new(&self, input: NewContact) -> Result<Contact> {
        let mut state = self.state.write();

        if let Some(id) = &input.id {
            if state.contacts.contains_key(id) {
                warn!(target: "contactbook::directory", id = %id, "Rejected duplicate contact id");
                return Err(Error::duplicate_key(id.as_str()));
            }
        }

        let input = if input.id.is_some() {
            input
        } else {
            let id = self.next_generated_id(&mut state)?;
            input.id(id)
        };

        let contact = input.build(&self.limits).map_err(|e| {
            warn!(target: "contactbook::directory", error = %e, "Rejected invalid contact");
            e
        })?;

        state.store(contact.clone());
        info!(target: "contactbook::directory", id = %contact.id(), "Contact added");
        Ok(contact)
    }

    /// Store an already-built contact under its own identifier
    ///
    /// The contact is re-validated against this directory's limits.
    pub fn insert(&self, contact: Contact) -> Result<()> {
        let mut state = self.state.write();
        if state.contacts.contains_key(contact.id()) {
            warn!(target: "contactbook::directory", id = %contact.id(), "Rejected duplicate contact id");
            return Err(Error::duplicate_key(contact.id()));
        }
        let contact = contact.replace_with_limits(ContactUpdate::new(), &self.limits)?;
        info!(target: "contactbook::directory", id = %contact.id(), "Contact inserted");
        state.store(contact);
        Ok(())
    }

    // ========== Lookup ==========

    /// Contact stored under `id`, or `None`
    pub fn get(&self, id: &str) -> Option<Contact> {
        let found = self.state.read().contacts.get(id).cloned();
        debug!(target: "contactbook::directory", id = %id, found = found.is_some(), "Contact lookup");
        found
    }

    /// True if `id` is a key
    pub fn contains(&self, id: &str) -> bool {
        self.state.read().contacts.contains_key(id)
    }

    /// Value of `field` for the contact under `id`
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` is not present.
    pub fn field(&self, id: &str, field: Field) -> Result<String> {
        let state = self.state.read();
        state
            .contacts
            .get(id)
            .map(|c| c.get(field).to_string())
            .ok_or_else(|| Error::not_found(id))
    }

    /// Identifier of the contact under `id`; fails with `NotFound` if absent
    pub fn contact_id(&self, id: &str) -> Result<String> {
        self.field(id, Field::ContactId)
    }

    /// First name of the contact under `id`; fails with `NotFound` if absent
    pub fn first_name(&self, id: &str) -> Result<String> {
        self.field(id, Field::FirstName)
    }

    /// Last name of the contact under `id`; fails with `NotFound` if absent
    pub fn last_name(&self, id: &str) -> Result<String> {
        self.field(id, Field::LastName)
    }

    /// Phone number of the contact under `id`; fails with `NotFound` if absent
    pub fn phone_number(&self, id: &str) -> Result<String> {
        self.field(id, Field::PhoneNumber)
    }

    /// Address of the contact under `id`; fails with `NotFound` if absent
    pub fn address(&self, id: &str) -> Result<String> {
        self.field(id, Field::Address)
    }

    /// Identifier of the most recently added contact
    ///
    /// Cleared when that contact is deleted.
    pub fn last_added_id(&self) -> Option<String> {
        self.state.read().last_added.clone()
    }

    // ========== Update ==========

    /// Replace the contact under `id` with `update` applied
    ///
    /// Fields absent from `update` are carried forward. An empty update still
    /// rebuilds and stores the contact.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` is not present, otherwise validation errors from
    /// replacement construction. The stored contact is unchanged on failure.
    pub fn update(&self, id: &str, update: ContactUpdate) -> Result<Contact> {
        let mut state = self.state.write();
        let existing = state.contacts.get(id).ok_or_else(|| {
            warn!(target: "contactbook::directory", id = %id, "Update of unknown contact");
            Error::not_found(id)
        })?;

        if update.is_empty() {
            debug!(target: "contactbook::directory", id = %id, "Empty update, rebuilding contact unchanged");
        }
        let replacement = existing.replace_with_limits(update, &self.limits).map_err(|e| {
            warn!(target: "contactbook::directory", id = %id, error = %e, "Rejected invalid update");
            e
        })?;
        state.contacts.insert(id.to_string(), replacement.clone());
        info!(target: "contactbook::directory", id = %id, "Contact updated");
        Ok(replacement)
    }

    /// Replace only the first name of the contact under `id`
    pub fn update_first_name(&self, id: &str, value: impl Into<String>) -> Result<Contact> {
        self.update(id, ContactUpdate::new().first_name(value))
    }

    /// Replace only the last name of the contact under `id`
    pub fn update_last_name(&self, id: &str, value: impl Into<String>) -> Result<Contact> {
        self.update(id, ContactUpdate::new().last_name(value))
    }

    /// Replace only the phone number of the contact under `id`
    pub fn update_phone_number(&self, id: &str, value: impl Into<String>) -> Result<Contact> {
        self.update(id, ContactUpdate::new().phone_number(value))
    }

    /// Replace only the address of the contact under `id`
    pub fn update_address(&self, id: &str, value: impl Into<String>) -> Result<Contact> {
        self.update(id, ContactUpdate::new().address(value))
    }

    // ========== Delete ==========

    /// Remove the contact under `id` and return it
    ///
    /// Not idempotent: deleting the same id twice fails the second time.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` is not present.
    pub fn delete(&self, id: &str) -> Result<Contact> {
        let mut state = self.state.write();
        let removed = state.contacts.remove(id).ok_or_else(|| {
            warn!(target: "contactbook::directory", id = %id, "Delete of unknown contact");
            Error::not_found(id)
        })?;
        if state.last_added.as_deref() == Some(id) {
            state.last_added = None;
        }
        info!(target: "contactbook::directory", id = %id, "Contact deleted");
        Ok(removed)
    }

    // ========== Enumeration ==========

    /// Number of stored contacts
    pub fn len(&self) -> usize {
        self.state.read().contacts.len()
    }

    /// True if no contacts are stored
    pub fn is_empty(&self) -> bool {
        self.state.read().contacts.is_empty()
    }

    /// All identifiers, in unspecified order
    pub fn ids(&self) -> Vec<String> {
        self.state.read().contacts.keys().cloned().collect()
    }

    /// Snapshot of all `(id, contact)` pairs, in unspecified order
    pub fn list(&self) -> Vec<(String, Contact)> {
        self.state
            .read()
            .contacts
            .iter()
            .map(|(id, c)| (id.clone(), c.clone()))
            .collect()
    }

    // ========== Display ==========

    /// Write the field dump of the contact under `id` to `out`
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` is not present, `Io` if the sink fails.
    pub fn display_values<W: Write + ?Sized>(&self, id: &str, out: &mut W) -> Result<()> {
        let contact = self.get(id).ok_or_else(|| Error::not_found(id))?;
        contact.display_values(out)?;
        Ok(())
    }

    /// Write every stored contact to `out`
    ///
    /// Works from a snapshot; the lock is not held while writing.
    pub fn print_all_contacts<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for (id, contact) in self.list() {
            writeln!(out, "\nRetrieved Contact from Index {}:", id)?;
            contact.display_values(out)?;
            writeln!(out, "\n")?;
        }
        Ok(())
    }
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}
