//! Identity resolution for hosting modules.

use std::any::TypeId;
use std::fmt;

/// Identity used when neither the host nor this crate has a usable name.
pub const UNKNOWN_IDENTITY: &str = "{unknown logbridge}";

/// Name of this crate, if it was known at compile time.
pub const OWN_MODULE_NAME: Option<&str> = option_env!("CARGO_PKG_NAME");

// Longer prefixes first: `&mut ` must win over `&`.
const INDIRECTIONS: [&str; 5] = ["&mut ", "&", "*const ", "*mut ", "dyn "];

/// A module that hosts loggers, such as a plugin.
pub trait HostModule {
    /// Declared name of the module, if it can be determined.
    fn module_name(&self) -> Option<String>;
}

/// [`HostModule`] with an explicit, possibly unknown, name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleName(Option<String>);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// A module whose name cannot be determined.
    pub fn unknown() -> Self {
        Self(None)
    }

    /// The crate that defines `T`, taken from the first path segment of its
    /// type name.
    ///
    /// References, raw pointers and `dyn` are looked through, so `&Plugin`
    /// names the same crate as `Plugin`. Generic wrappers are not: `Arc<Plugin>`
    /// names the crate that defines `Arc`.
    ///
    /// ```
    /// use logbridge::provider::{HostModule, ModuleName};
    ///
    /// struct Plugin;
    /// assert!(ModuleName::of::<Plugin>().module_name().is_some());
    /// assert_eq!(ModuleName::of::<&Plugin>(), ModuleName::of::<Plugin>());
    /// assert_eq!(ModuleName::of::<u32>().module_name(), None);
    /// ```
    pub fn of<T: ?Sized>() -> Self {
        let mut name = std::any::type_name::<T>();
        while let Some(rest) = INDIRECTIONS.iter().find_map(|p| name.strip_prefix(p)) {
            name = rest;
        }
        Self(name.split_once("::").map(|(krate, _)| krate.to_string()))
    }
}

impl HostModule for ModuleName {
    fn module_name(&self) -> Option<String> {
        self.0.clone()
    }
}

impl HostModule for str {
    fn module_name(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl HostModule for String {
    fn module_name(&self) -> Option<String> {
        Some(self.clone())
    }
}

/// Pick the first usable name: the host's, then `own`, then
/// [`UNKNOWN_IDENTITY`]. Blank names are unusable.
pub fn resolve_identity(host: Option<&str>, own: Option<&str>) -> String {
    [host, own]
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty())
        .unwrap_or(UNKNOWN_IDENTITY)
        .to_string()
}

/// Runtime handle to a type's name, for deriving logger categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeName {
    name: &'static str,
    id: TypeId,
}

impl TypeName {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Category for loggers of this type: the fully qualified name, or the
    /// type id's debug form when the name is empty.
    pub fn category(&self) -> String {
        if self.name.is_empty() {
            format!("{:?}", self.id)
        } else {
            self.name.to_string()
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.category())
    }
}
