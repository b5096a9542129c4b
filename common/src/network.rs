pub mod ipv4;
pub mod range;
pub mod target;
