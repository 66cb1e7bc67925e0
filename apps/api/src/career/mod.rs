// Career planning: rule table, cascade classifier, and the remote-or-fallback
// planner behind POST /api/career-plan.

pub mod classifier;
pub mod handlers;
pub mod models;
pub mod planner;
pub mod prompts;
pub mod rules;
