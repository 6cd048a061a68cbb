#[macro_use]
extern crate log;
extern crate chrono;
extern crate env_logger;

use chrono::prelude::{DateTime, Local};
use std::io::Write;

extern crate cases;

fn init_logger() {
    env_logger::builder()
        .format(|buf, record| {
            let now: DateTime<Local> = Local::now();
            let now_str = now.format("%H:%M:%S.%3f").to_string();
            writeln!(buf, "{:5}: {} - {}", record.level(), now_str, record.args())
        })
        .init();
}

fn main() {
    init_logger();

    info!("Election cases started");

    cases::cases::winner::run();
    cases::cases::single_process::run();
    cases::cases::all_dead::run();
    cases::cases::randomized_delays::run();
    cases::cases::heartbeat_recovery::run();
    cases::cases::dead_set_sweep::run();

    info!("Election cases completed");
}
