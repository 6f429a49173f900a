pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod tilt;
pub mod typing;
