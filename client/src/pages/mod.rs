//! Page components, one per route.

pub mod questions;
pub mod sign_in;
pub mod sign_up;
pub mod wall;
