pub mod get_variety_report;
