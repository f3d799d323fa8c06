use outbreak_estimator::EstimatorConfig;
use outbreak_runner::{load_config, load_input, load_input_from_reader, render, run};

fn print_help() {
    eprintln!(
        r#"Outbreak Runner - projects outbreak impact from reported observations

USAGE:
    outbreak-runner [OPTIONS]

OPTIONS:
    --input <PATH>      Read the estimation request from a JSON file (default: stdin)
    --config <PATH>     Load estimator configuration from a JSON file
    --compact           Print single-line JSON
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Estimate a request file with default rates
    outbreak-runner --input request.json

    # Pipe a request, fail on zero-day periods
    echo '{{...}}' | outbreak-runner --config strict.json
"#
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut input_path: Option<String> = None;
    let mut compact = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--input" | "-i" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --input requires a path argument");
                    std::process::exit(1);
                }
                input_path = Some(args[i].clone());
            }
            "--compact" => compact = true,
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        log::info!("Loading configuration from: {}", path);
        load_config(&path)?
    } else {
        log::info!("Using default configuration");
        EstimatorConfig::default()
    };

    let input = if let Some(path) = input_path {
        log::info!("Reading request from: {}", path);
        load_input(&path)?
    } else {
        log::info!("Reading request from stdin");
        load_input_from_reader(std::io::stdin().lock())?
    };

    log::info!(
        "Estimating {} ({} reported cases over {} {})",
        input.region.name,
        input.reported_cases,
        input.time_to_elapse,
        input.period_type
    );

    let result = run(&input, config)?;
    println!("{}", render(&result, compact)?);

    Ok(())
}
