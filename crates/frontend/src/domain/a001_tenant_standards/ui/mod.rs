pub mod actions;
pub mod details;
pub mod list;
pub mod page;

pub use page::StandardsPage;
