//! System utilities module

mod dependencies;

pub use dependencies::check_dependencies;
