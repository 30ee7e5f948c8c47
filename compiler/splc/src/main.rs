//! The `spl` command-line runner.

use splc::commands::{lex_file, parse_file, parse_run_options, run_file};

fn main() {
    splc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => match parse_run_options(&args[2..]) {
            Ok(options) => run_file(&options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: spl run <file.spl> [--input=<style>] [--output=<style>]");
                std::process::exit(1);
            }
        },
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: spl parse <file.spl>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: spl lex <file.spl>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("spl {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare play file runs with default settings.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("spl"))
            {
                match parse_run_options(&args[1..]) {
                    Ok(options) => run_file(&options),
                    Err(msg) => {
                        eprintln!("error: {msg}");
                        std::process::exit(1);
                    }
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("SPL interpreter");
    println!();
    println!("Usage: spl <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.spl>       Perform a play");
    println!("  parse <file.spl>     Parse and display the play outline");
    println!("  lex <file.spl>       Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --input=<style>      Input: basic (default), reader, interactive");
    println!("  --output=<style>     Output: basic (default), verbose, debug");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter, e.g. spl_eval=debug");
    println!("  SPL_TRACE_TREE       Show logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  spl run hello.spl");
    println!("  spl run primes.spl --input=interactive");
    println!("  spl run hello.spl --output=debug");
    println!("  spl parse hello.spl");
}
