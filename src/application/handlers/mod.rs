//! Command and query handlers, grouped by area.

pub mod admin;
pub mod catalog;
pub mod subscription;

#[cfg(test)]
pub(crate) mod test_support;
