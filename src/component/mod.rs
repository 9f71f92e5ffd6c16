//! The showcase component and its render output.

/// Loader + marquee composition.
pub mod recent_projects;
/// Render output types.
pub mod view;
