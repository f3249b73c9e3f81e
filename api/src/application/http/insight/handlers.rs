pub mod dismiss_insight;
pub mod generate_weekly_insights;
pub mod get_weekly_insights;
