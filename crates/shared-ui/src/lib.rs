//! Styled building blocks shared by every page of the Loop Music dashboard.
//!
//! Each component lives in its own directory next to its stylesheet and
//! pulls that stylesheet in with `asset!` when it renders.

pub mod components;

pub use components::*;
