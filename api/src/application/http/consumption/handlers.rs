pub mod get_frequencies;
pub mod record_consumption;
