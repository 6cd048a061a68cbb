#[macro_use]
extern crate log;
extern crate bully;
extern crate bully_modules;
extern crate chrono;
extern crate env_logger;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::prelude::{DateTime, Local};

use bully::{ConfigurationError, EventReporter, ProcessSetConfiguration, SessionSettings, MAX_PROCESSES};
use bully_modules::RandomizedDelayScheduler;

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let now: DateTime<Local> = Local::now();
            writeln!(buf, "{:5}: {} - {}", record.level(), now.format("%H:%M:%S.%3f"), record.args())
        })
        .init();
}

/// Whitespace separated answers from stdin, read line by line as prompts are answered.
struct Prompter<R: BufRead> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Prompter<R> {
    fn new(input: R) -> Prompter<R> {
        Prompter {
            input,
            pending: Vec::new(),
        }
    }

    fn ask<T>(&mut self, prompt: &str) -> Result<T, Box<dyn Error>>
    where
        T: FromStr,
        T::Err: Error + 'static,
    {
        print!("{}", prompt);
        io::stdout().flush()?;

        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(From::from("unexpected end of input"));
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }

        let token = self.pending.pop().unwrap_or_default();
        Ok(token.parse::<T>()?)
    }
}

fn read_configuration<R: BufRead>(
    prompter: &mut Prompter<R>,
) -> Result<(ProcessSetConfiguration, bool), Box<dyn Error>> {
    let count: usize = prompter.ask(&format!("Enter number of processes (max {}): ", MAX_PROCESSES))?;
    if count == 0 {
        return Err(From::from(ConfigurationError::EmptyProcessSet));
    }
    if count > MAX_PROCESSES {
        return Err(From::from(ConfigurationError::TooManyProcesses(count, MAX_PROCESSES)));
    }

    println!("Enter process IDs in ascending order:");
    let mut process_ids = Vec::with_capacity(count);
    for i in 0..count {
        process_ids.push(prompter.ask(&format!("Process {} ID: ", i + 1))?);
    }

    let initiator_id = prompter.ask("Enter initiator process ID: ")?;

    let dead_count: usize = prompter.ask("Enter number of dead processes: ")?;
    if dead_count > count {
        return Err(From::from(format!(
            "{} dead processes requested, only {} processes exist",
            dead_count, count
        )));
    }
    let mut dead_ids = Vec::with_capacity(dead_count);
    for i in 0..dead_count {
        dead_ids.push(prompter.ask(&format!("Dead Process {} ID: ", i + 1))?);
    }

    let answer: String = prompter.ask("Simulate coordinator failure after election? (y/n): ")?;
    let simulate_coordinator_failure = answer.eq_ignore_ascii_case("y");

    Ok((
        ProcessSetConfiguration::new(process_ids, initiator_id, dead_ids),
        simulate_coordinator_failure,
    ))
}

fn main() {
    init_logger();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());

    let (config, simulate_coordinator_failure) = match read_configuration(&mut prompter) {
        Ok(input) => input,
        Err(err) => {
            error!("Invalid input: {}", err);
            process::exit(1);
        }
    };

    println!();
    // A recovery needs up to two heartbeat cycles to be detected.
    let settings = SessionSettings {
        observation_window: if simulate_coordinator_failure {
            Duration::from_secs(4)
        } else {
            Duration::from_secs(2)
        },
        simulate_coordinator_failure,
    };

    let session_result = bully::run_session(
        &config,
        Arc::new(RandomizedDelayScheduler::default()),
        settings,
        EventReporter::silent(),
    );

    match session_result {
        Ok(result) => {
            println!();
            print!("{}", result);
        }
        Err(err) => {
            error!("Configuration rejected: {}", err);
            process::exit(1);
        }
    }
}
