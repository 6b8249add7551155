// Handler modules
pub mod list;
pub mod scale;

// Re-export all handler functions
pub use list::handle_list;
pub use scale::handle_scale;
