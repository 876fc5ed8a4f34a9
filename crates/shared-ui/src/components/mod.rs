// Containers and layout
pub mod card;
pub mod data_table;
pub mod page_header;
pub mod search_bar;
pub mod stat_card;

// Form controls
pub mod button;
pub mod form_select;
pub mod input;

// Indicators
pub mod badge;
pub mod meter;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use meter::*;
pub use page_header::*;
pub use search_bar::*;
pub use stat_card::*;
