//! Domain layer - pure billing rules with no I/O.

pub mod billing;
pub mod catalog;
pub mod foundation;
pub mod notification;
pub mod subscription;
pub mod transaction;
