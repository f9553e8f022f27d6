//! Reusable view components.

pub mod project_card;
pub mod status_banner;
