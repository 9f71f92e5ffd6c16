//! Project records and the loader that fetches them.

/// Load state, fetch tickets, and user-facing failure messages.
pub mod loader;
/// Wire model of the projects API.
pub mod model;
/// Project sources (HTTP and static).
pub mod source;
