pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod modules;
pub mod services;

pub use infrastructure::config;
pub use infrastructure::storage;
pub use modules::import;
pub use modules::integrations::google_books;
