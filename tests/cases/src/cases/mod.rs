pub mod all_dead;
pub mod dead_set_sweep;
pub mod heartbeat_recovery;
pub mod randomized_delays;
pub mod single_process;
pub mod winner;
