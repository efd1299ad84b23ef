//! The permission catalog.
//!
//! The catalog is the read-only registry of every capability key that
//! can be delegated to a subuser, grouped by category. Effective
//! identifiers are formed as `category.key` (e.g. `control.start`,
//! `file.read-content`).
//!
//! The catalog is loaded once per process and never mutated at
//! runtime. Every identifier referenced anywhere else in the system —
//! stored grants, delegation requests — must exist here; an identifier
//! outside the catalog in stored data is a data-integrity fault (see
//! [`crate::resolver`]).

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Categories that are granted implicitly and never presented for
/// selection when editing a subuser. `websocket.connect` comes along
/// with any other grant on the same server.
const IMPLICIT_CATEGORIES: &[&str] = &["websocket"];

/// A single assignable capability key within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionKey {
    /// Key suffix; the effective identifier is `category.suffix`.
    pub suffix: String,
    /// Human description shown in the delegation UI.
    pub description: String,
}

/// A named group of capability keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCategory {
    /// Category name; the first segment of every identifier it owns.
    pub name: String,
    /// Human description of the category as a whole.
    pub description: String,
    /// Keys in canonical presentation order.
    pub keys: Vec<PermissionKey>,
}

impl PermissionCategory {
    /// Creates an empty category.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            keys: Vec::new(),
        }
    }

    /// Appends a key, preserving insertion order.
    #[must_use]
    pub fn key(mut self, suffix: impl Into<String>, description: impl Into<String>) -> Self {
        self.keys.push(PermissionKey {
            suffix: suffix.into(),
            description: description.into(),
        });
        self
    }

    /// Returns the effective identifiers of this category, in order.
    pub fn identifiers(&self) -> impl Iterator<Item = String> + '_ {
        self.keys
            .iter()
            .map(move |key| format!("{}.{}", self.name, key.suffix))
    }
}

/// Ordered, read-only registry of every assignable capability key.
///
/// Ordering is significant for presentation only (categories in
/// canonical order, keys in canonical order within a category), but it
/// must be deterministic so that resolved permission lists are
/// reproducible.
///
/// # Example
///
/// ```
/// use moray_auth::PermissionCatalog;
///
/// let catalog = PermissionCatalog::builtin();
/// assert!(catalog.contains("control.start"));
/// assert!(!catalog.contains("control.explode"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCatalog {
    categories: Vec<PermissionCategory>,
}

impl PermissionCatalog {
    /// Creates a catalog from categories in presentation order.
    #[must_use]
    pub fn new(categories: Vec<PermissionCategory>) -> Self {
        Self { categories }
    }

    /// Returns the process-wide builtin catalog.
    ///
    /// Constructed on first access and shared for the process
    /// lifetime.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<PermissionCatalog> = OnceLock::new();
        BUILTIN.get_or_init(Self::build_builtin)
    }

    /// Returns the categories in canonical order.
    #[must_use]
    pub fn categories(&self) -> &[PermissionCategory] {
        &self.categories
    }

    /// Looks up a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&PermissionCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Returns every effective identifier in catalog order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(PermissionCategory::identifiers)
            .collect()
    }

    /// Returns the identifiers presented for selection when editing a
    /// subuser.
    ///
    /// Identical to [`identifiers`](Self::identifiers) minus the
    /// implicit categories: `websocket.connect` is granted as a side
    /// effect of holding any other key and is never offered as a
    /// checkbox.
    #[must_use]
    pub fn selectable_identifiers(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| !IMPLICIT_CATEGORIES.contains(&c.name.as_str()))
            .flat_map(PermissionCategory::identifiers)
            .collect()
    }

    /// Returns `true` if `identifier` names a key in this catalog.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        let Some((category, suffix)) = identifier.split_once('.') else {
            return false;
        };
        self.category(category)
            .is_some_and(|c| c.keys.iter().any(|k| k.suffix == suffix))
    }

    fn build_builtin() -> Self {
        Self::new(vec![
            PermissionCategory::new(
                "websocket",
                "Live console socket access, granted implicitly with any other key.",
            )
            .key("connect", "Connect to the server's websocket stream."),
            PermissionCategory::new("control", "Power state and console interaction.")
                .key("console", "Send commands to the server console.")
                .key("start", "Start the server when it is stopped.")
                .key("stop", "Stop the server when it is running.")
                .key("restart", "Restart the server, starting it if offline."),
            PermissionCategory::new("user", "Management of other subusers on the server.")
                .key("create", "Invite new subusers to the server.")
                .key("read", "View subusers and their assigned permissions.")
                .key("update", "Modify the permissions of existing subusers.")
                .key("delete", "Remove subusers from the server."),
            PermissionCategory::new("file", "Filesystem access over the panel and SFTP.")
                .key("create", "Create new files and directories.")
                .key("read", "List directory contents.")
                .key("read-content", "View the contents of files.")
                .key("update", "Edit existing files.")
                .key("delete", "Delete files and directories.")
                .key("archive", "Create and extract file archives.")
                .key("sftp", "Connect to the server over SFTP."),
            PermissionCategory::new("backup", "Server backup management.")
                .key("create", "Create new backups.")
                .key("read", "View existing backups.")
                .key("delete", "Delete backups.")
                .key("download", "Download backup archives.")
                .key("restore", "Restore the server from a backup."),
            PermissionCategory::new("allocation", "Network allocation management.")
                .key("read", "View the allocations assigned to the server.")
                .key("create", "Assign additional allocations.")
                .key("update", "Change the primary allocation and notes.")
                .key("delete", "Remove allocations from the server."),
            PermissionCategory::new("startup", "Startup command and variable management.")
                .key("read", "View startup variables.")
                .key("update", "Modify startup variables.")
                .key("docker-image", "Change the image the server runs under."),
            PermissionCategory::new("database", "Server database management.")
                .key("create", "Create new databases.")
                .key("read", "View existing databases.")
                .key("update", "Rotate database credentials.")
                .key("delete", "Delete databases.")
                .key("view-password", "Reveal database passwords."),
            PermissionCategory::new("schedule", "Task schedule management.")
                .key("create", "Create new schedules.")
                .key("read", "View schedules and their tasks.")
                .key("update", "Modify schedules and their tasks.")
                .key("delete", "Delete schedules."),
            PermissionCategory::new("settings", "Server settings management.")
                .key("rename", "Rename the server.")
                .key("reinstall", "Trigger a reinstall of the server."),
        ])
    }
}
