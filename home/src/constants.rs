//! Fixed configuration values for the home screen.

/// Page size for the todo list. The server paginates with the same value.
pub const ITEMS_PER_PAGE: u32 = 10;
