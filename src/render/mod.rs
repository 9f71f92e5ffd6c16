/// Single-line text rendering of the marquee.
pub mod strip;
