use std::process;
use log::{error, LevelFilter};

use oilpatch::utils::logger::Logger;
use oilpatch::commands::{build_cli, CommandFactory, OilpatchCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file = matches.get_one::<String>("log-file")
        .cloned()
        .unwrap_or_else(|| "oilpatch.log".to_string());

    if matches.get_flag("console-only") {
        Logger::init_console_logger(level);
    } else if let Err(e) = Logger::init_global_logger(&log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    // Run summaries go to the report file when one is requested
    let logger = match matches.get_one::<String>("report") {
        Some(report) => match Logger::new(report) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error creating report file: {}", e);
                process::exit(1);
            }
        },
        None => Logger::console(level),
    };

    let factory = OilpatchCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
