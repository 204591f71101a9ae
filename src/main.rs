// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod aggregate;
mod cli;
mod config;
mod download;
mod error;
mod handler;
mod merge;
mod publish;
mod ranking;
mod report;
mod runner;
mod scoresheet;
mod timing;
mod types;
mod ui;

use std::io::Read;
use std::path::Path;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if let Some(ref payload) = args.payload {
        std::process::exit(run_payload(payload, &args));
    }

    // Load events before anything touches the network
    let events = match config::load_events(&args.config_dir, &args.label()) {
        Ok(events) => events,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let request = base_request(&args, events);
    match runner::run_standings(&request) {
        Ok(summary) => ui::status(&summary.message()),
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Run settings shared by the config-file and payload entry points
fn base_request(args: &cli::CliArgs, events: Vec<types::EventSource>) -> runner::RunRequest {
    runner::RunRequest {
        label: args.label(),
        events,
        output_dir: args.output_dir.clone(),
        parallel: args.parallel,
        render: args.render_options(),
        credentials: args.credentials(),
        upload: !args.no_upload,
    }
}

/// Handle `--payload`, print the JSON response and return the exit code
fn run_payload(path: &Path, args: &cli::CliArgs) -> i32 {
    let response = match read_payload(path) {
        Ok(payload) => {
            let mut base = base_request(args, Vec::new());
            base.render.title = args.title.clone().unwrap_or_default();
            handler::handle_invocation(&payload, &base)
        }
        Err(message) => handler::InvocationResponse { status_code: 400, body: message },
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => ui::print_error(&format!("Failed to serialize response: {}", e)),
    }

    if response.status_code == 200 { 0 } else { 1 }
}

fn read_payload(path: &Path) -> Result<serde_json::Value, String> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(|e| format!("Failed to read payload from stdin: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read payload {}: {}", path.display(), e))?
    };
    serde_json::from_str(&text).map_err(|e| format!("Malformed payload: {}", e))
}
