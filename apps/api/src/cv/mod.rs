// Printable CV document rendering.

pub mod handlers;
pub mod template;
