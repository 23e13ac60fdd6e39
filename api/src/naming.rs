//! Identifiers and generic names.
//!
//! Every identified object carries at least one [`Identifier`]; richer
//! implementations also expose hierarchical [`GenericName`]s whose
//! internal consistency (depth, head, tip, parsed parts) is checked by
//! the naming validator.

/// A reference to an object in some registry or namespace.
///
/// The code is the only mandatory attribute. The code space, version
/// and authority qualify the code when the same code is reused across
/// registries.
pub trait Identifier {
    /// Alphanumeric value identifying an instance in the namespace.
    fn code(&self) -> &str;

    /// Name or identifier of the namespace the code is valid in.
    fn code_space(&self) -> Option<&str> {
        None
    }

    /// Version of the namespace, when the code space is versioned.
    fn version(&self) -> Option<&str> {
        None
    }

    /// Name of the authority that defines the code space.
    fn authority(&self) -> Option<&str> {
        None
    }
}

/// A hierarchical name made of one or more parts.
///
/// A generic name of depth 1 is a local name; deeper names qualify a
/// tip by the scopes it is registered under. The parts reported by
/// [`parsed_names`](GenericName::parsed_names) are ordered from the
/// outermost scope to the tip.
pub trait GenericName {
    /// Name of the scope this name is local to, if any.
    fn scope(&self) -> Option<String> {
        None
    }

    /// All parts of this name, outermost scope first.
    fn parsed_names(&self) -> Vec<String>;

    /// Number of parts in this name. Must equal the length of
    /// [`parsed_names`](GenericName::parsed_names).
    fn depth(&self) -> usize;

    /// The first part of this name.
    fn head(&self) -> Option<String>;

    /// The last part of this name.
    fn tip(&self) -> Option<String>;

    /// The complete name as a single string, parts joined by the
    /// implementation's separator.
    fn to_full_path(&self) -> String;
}
