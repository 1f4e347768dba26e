use std::env;
use std::fs;
use std::process;

use pubmark::codegen::DeclGenerator;
use pubmark::config::{Config, HostVersion};
use pubmark::error::ErrorFormatter;
use pubmark::expand::Expander;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut host_version: Option<HostVersion> = None;
    let mut emit_json = false;
    let mut input_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--host-version" => {
                i += 1;
                let value = match args.get(i) {
                    Some(value) => value,
                    None => {
                        eprintln!("--host-version requires a value, e.g. --host-version 1.11");
                        process::exit(1);
                    }
                };
                host_version = match HostVersion::parse(value) {
                    Some(version) => Some(version),
                    None => {
                        eprintln!("invalid host version '{}', expected major.minor", value);
                        process::exit(1);
                    }
                };
            }
            "--emit-json" => emit_json = true,
            arg => {
                if input_file.is_some() {
                    eprintln!("Usage: {} [--host-version X.Y] [--emit-json] <input>", args[0]);
                    process::exit(1);
                }
                input_file = Some(arg.to_string());
            }
        }
        i += 1;
    }

    let input_file = match input_file {
        Some(file) => file,
        None => {
            eprintln!("Usage: {} [--host-version X.Y] [--emit-json] <input>", args[0]);
            process::exit(1);
        }
    };

    let source = match fs::read_to_string(&input_file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", input_file, err);
            process::exit(1);
        }
    };

    let mut config = Config::default();
    if let Some(version) = host_version {
        config.host_version = version;
    }

    let expander = Expander::new(config);
    let (declarations, errors) = expander.expand_unit(&source);

    if errors.has_errors() {
        for error in errors.errors() {
            eprintln!(
                "{}\n",
                ErrorFormatter::new(error, &source)
                    .with_filename(&input_file)
                    .format()
            );
        }
        eprintln!("{} error(s)", errors.error_count());
        process::exit(1);
    }

    if emit_json {
        match serde_json::to_string_pretty(&declarations) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error serializing declarations: {}", err);
                process::exit(1);
            }
        }
    } else {
        let mut codegen = DeclGenerator::new();
        print!("{}", codegen.generate(&declarations));
    }
}
