use clap::{Arg, ArgAction, Command};
use radix_poly::document;
use radix_poly::{ErrorPolicy, SolverConfig};
use std::process;

fn main() {
    env_logger::init();

    let matches = Command::new("radix-poly")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate an arbitrary-base polynomial at each point listed in a JSON document")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Input JSON document")
                .default_value("input.json"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .short('c')
                .action(ArgAction::SetTrue)
                .help("Print compact JSON instead of pretty-printed"),
        )
        .arg(
            Arg::new("skip-invalid")
                .long("skip-invalid")
                .action(ArgAction::SetTrue)
                .help("Leave invalid evaluation points out instead of failing"),
        )
        .arg(
            Arg::new("max-degree")
                .long("max-degree")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Reject polynomials above this degree"),
        )
        .get_matches();

    let mut config = SolverConfig::default();
    if let Some(path) = matches.get_one::<String>("input") {
        config.input_path = path.clone();
    }
    config.pretty = !matches.get_flag("compact");
    if matches.get_flag("skip-invalid") {
        config.error_policy = ErrorPolicy::SkipPoint;
    }
    if let Some(&max) = matches.get_one::<usize>("max-degree") {
        config.max_degree = max;
    }

    match document::run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
