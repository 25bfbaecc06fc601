pub mod config;
pub mod discover;
pub mod report;
pub mod runner;

pub use config::*;
pub use discover::*;
pub use report::*;
pub use runner::*;
