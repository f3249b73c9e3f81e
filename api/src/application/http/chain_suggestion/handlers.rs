pub mod generate_suggestions;
pub mod get_suggestion_history;
pub mod record_feedback;
