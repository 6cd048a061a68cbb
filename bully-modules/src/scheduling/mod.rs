pub mod fixed_delay_scheduler;
pub mod randomized_delay_scheduler;
