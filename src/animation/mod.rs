/// Tween scheduler keyed by target.
pub mod timeline;
/// Single scalar tween with pause/resume and repeat.
pub mod tween;
