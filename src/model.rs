mod config;
mod entities;
mod settings;

pub use self::config::*;
pub use self::entities::*;
pub use self::settings::*;
