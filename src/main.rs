use std::env::args_os;

use algo_demo::{run, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let operation = cli_parser.parse(args_os());
    match run(&operation) {
        Ok(report) => println!("{}", report),
        Err(e) => eprintln!("Operation failed because of: {}", e),
    }
}
