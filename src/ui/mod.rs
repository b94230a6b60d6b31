//! UI components for the registration dashboard.
//!
//! `layout` turns view state into screen content; the other modules paint it.

pub mod dashboard;
pub mod layout;
pub mod palette;
pub mod tile;

pub use dashboard::{DashboardAction, HeaderInfo};
pub use layout::Screen;
pub use palette::Palette;
