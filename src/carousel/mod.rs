//! Seamless-loop carousel: track model, clone sizing, and the marquee lifecycle.

/// Marquee lifecycle (init, hover, tick, teardown).
pub mod marquee;
/// Clone-sizing loop and loop geometry.
pub mod sizing;
/// Original and clone nodes.
pub mod track;
