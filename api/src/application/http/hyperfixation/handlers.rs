pub mod end_hyperfixation;
pub mod get_active_hyperfixations;
pub mod get_hyperfixation_history;
pub mod record_hyperfixation;
