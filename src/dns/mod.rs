//! Reverse DNS lookups via DNS-over-HTTPS

pub mod reverse;

pub use reverse::{ptr_name, DohClient};
