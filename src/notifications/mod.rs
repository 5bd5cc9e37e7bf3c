//! Notification inbox: a fixed list of notifications with tab filtering and
//! per-item read state.

pub mod center;
pub mod model;

pub use center::NotificationCenter;
pub use model::{Category, Filter, Notification};
