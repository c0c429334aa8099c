// HTTP routes
pub mod drivers;
pub mod health;

pub use drivers::*;
pub use health::*;
