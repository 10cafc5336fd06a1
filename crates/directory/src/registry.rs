//! Process-wide directory instance
//!
//! Explicitly constructed directories are the primary API. This accessor
//! exists for callers that want one shared instance per process; it is
//! created with default configuration on first use and never torn down.

use once_cell::sync::Lazy;

use crate::directory::ContactDirectory;

static GLOBAL_DIRECTORY: Lazy<ContactDirectory> = Lazy::new(ContactDirectory::new);

impl ContactDirectory {
    /// The shared process-wide directory
    pub fn global() -> &'static ContactDirectory {
        &GLOBAL_DIRECTORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_same_instance() {
        let a = ContactDirectory::global();
        let b = ContactDirectory::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_global_state_is_shared() {
        // Unique id so parallel tests using the global instance don't collide
        let id = "reg-shared";
        ContactDirectory::global()
            .add_with_id(id, "A", "B", "C", "D")
            .unwrap();
        assert!(ContactDirectory::global().contains(id));
        ContactDirectory::global().delete(id).unwrap();
    }
}
