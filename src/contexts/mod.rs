// Context modules for application state management
pub mod error;
pub mod issues;

pub use error::*;
pub use issues::*;
