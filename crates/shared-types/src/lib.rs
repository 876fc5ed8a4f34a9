pub mod error;
pub mod config;
pub mod identity;
pub mod requests;

// Static catalog shown by the dashboard pages
pub mod catalog;
pub mod mock_data;

pub use config::*;
pub use error::*;
pub use identity::*;
pub use requests::*;

pub use catalog::*;
