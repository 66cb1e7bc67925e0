// Static job listing with substring search and competition filter.

pub mod handlers;
pub mod listing;
