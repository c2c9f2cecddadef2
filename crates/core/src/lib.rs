pub mod config;
pub mod error;
pub mod posting;

pub use config::Config;
pub use error::*;
pub use posting::*;
