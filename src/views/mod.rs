//! The views module contains the components for all Layouts and Routes for our app.

mod issues;
pub use issues::Issues;

mod navbar;
pub use navbar::Navbar;

mod summary;
pub use summary::Summary;
