use colored::Colorize;
use std::fmt::Display;

pub enum Log {
    Info,
    Warning,
    Error,
}

pub fn log(kind: Log, msg: impl Display) {
    let hms = chrono::Local::now().format("%H:%M:%S").to_string().dimmed();

    let name = match kind {
        Log::Info => "I".green(),
        Log::Warning => "W".yellow(),
        Log::Error => "E".red(),
    }
    .bold();

    println!("{name} {hms} {msg}");
}
