//! Id generator port.

use crate::domain::foundation::PrefixedId;

/// Produces unique resource ids of the form `<prefix>_<8 digits>`.
///
/// A single counter is shared across all prefixes.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, prefix: &str) -> String;
}

/// Generates a typed id using the type's own prefix.
pub fn next_id<I: PrefixedId>(ids: &dyn IdGenerator) -> I {
    I::from(ids.next_id(I::PREFIX))
}
