pub mod create_rotation_schedule;
pub mod delete_rotation_schedule;
pub mod get_rotation_schedule;
pub mod get_rotation_schedules;
pub mod update_rotation_schedule;
