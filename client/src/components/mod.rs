//! Reusable UI components.

pub mod answer_card;
pub mod nav_bar;
pub mod question_card;
pub mod user_info;
