use chromatic::brute::BruteForceConfig;
use chromatic::graph::{EdgeThreshold, Graph};
use chromatic::rng::PrngKind;
use chromatic::solver::Algorithm;
use chromatic::ColoringError;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::process::ExitCode;
use std::time::Duration;

fn make_parser() -> Command {
    Command::new("chromatic")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Chromatic number of a seeded random graph, exact or greedy")
        .arg(
            Arg::new("vertices")
                .value_name("VERTICES")
                .help("Number of vertices")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .value_name("SEED")
                .help("Seed for the edge weights")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("threshold")
                .value_name("THRESHOLD")
                .help("Edge threshold in [0, 100); an edge exists where the weight exceeds it")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Coloring engine")
                .default_value("brute-force")
                .value_parser(
                    PossibleValuesParser::new(["brute-force", "greedy"])
                        .try_map(|s| s.parse::<Algorithm>()),
                ),
        )
        .arg(
            Arg::new("prng")
                .long("prng")
                .help("Weight generator")
                .default_value("xorshift")
                .value_parser(
                    PossibleValuesParser::new(["xorshift", "java"])
                        .try_map(|s| s.parse::<PrngKind>()),
                ),
        )
        .arg(
            Arg::new("parallel")
                .short('p')
                .long("parallel")
                .help("Split the brute-force search across threads")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("workers")
                .short('w')
                .long("workers")
                .value_name("N")
                .help("Worker threads for --parallel (default: all cores)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout-ms")
                .value_name("MS")
                .help("Abort the brute-force search after this many milliseconds")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("show-coloring")
                .long("show-coloring")
                .help("Also print the coloring, one symbol per vertex")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-graph")
                .long("show-graph")
                .help("Also print the weight matrix")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter("CHROMATIC_LOG")
        .write_style("CHROMATIC_LOG_STYLE");
    env_logger::init_from_env(env);

    let matches = make_parser().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> chromatic::Result<()> {
    let vertices = required::<usize>(matches, "vertices")?;
    let seed = required::<i64>(matches, "seed")?;
    let threshold = EdgeThreshold::new(required::<i64>(matches, "threshold")?)?;
    let algorithm = required::<Algorithm>(matches, "algorithm")?;
    let prng = required::<PrngKind>(matches, "prng")?;

    let config = BruteForceConfig {
        parallel: matches.get_flag("parallel"),
        workers: matches.get_one::<usize>("workers").copied(),
        deadline: matches
            .get_one::<u64>("timeout")
            .map(|&ms| Duration::from_millis(ms)),
        ..BruteForceConfig::default()
    };
    log::debug!("options: n={vertices} seed={seed} threshold={threshold} algorithm={algorithm} prng={prng} {config:?}");

    let graph = Graph::generate_with(vertices, seed, prng)?;
    if matches.get_flag("show-graph") {
        print!("{graph}");
    }

    let solution = algorithm.run_with(&graph, threshold, &config)?;
    println!("Chromatic Color: {}", solution.chromatic_number);
    println!("time: {}", solution.elapsed.as_millis());
    if matches.get_flag("show-coloring") {
        println!("coloring: {}", solution.coloring);
    }
    Ok(())
}

/// Reads an argument that is required or has a default, so clap always supplies it.
fn required<T>(matches: &ArgMatches, id: &str) -> chromatic::Result<T>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| ColoringError::InvalidArgument(format!("missing argument {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_is_well_formed() {
        make_parser().debug_assert();
    }

    #[test]
    fn parses_positional_triple() {
        let m = make_parser()
            .try_get_matches_from(["chromatic", "4", "-42", "50"])
            .unwrap();
        assert_eq!(m.get_one::<usize>("vertices"), Some(&4));
        assert_eq!(m.get_one::<i64>("seed"), Some(&-42));
        assert_eq!(m.get_one::<i64>("threshold"), Some(&50));
        assert_eq!(m.get_one::<Algorithm>("algorithm"), Some(&Algorithm::BruteForce));
        assert_eq!(m.get_one::<PrngKind>("prng"), Some(&PrngKind::XorShift));
    }

    #[test]
    fn rejects_missing_or_malformed_arguments() {
        assert!(make_parser().try_get_matches_from(["chromatic", "4", "1"]).is_err());
        assert!(make_parser()
            .try_get_matches_from(["chromatic", "four", "1", "50"])
            .is_err());
        assert!(make_parser()
            .try_get_matches_from(["chromatic", "4", "1", "50", "--algorithm", "annealing"])
            .is_err());
    }

    #[test]
    fn out_of_range_threshold_is_a_core_error() {
        let m = make_parser()
            .try_get_matches_from(["chromatic", "4", "1", "100"])
            .unwrap();
        assert!(matches!(
            run(&m),
            Err(ColoringError::InvalidArgument(_))
        ));
    }

    #[test]
    fn absent_argument_is_reported_not_defaulted() {
        let m = make_parser()
            .try_get_matches_from(["chromatic", "4", "1", "50"])
            .unwrap();
        assert_eq!(required::<usize>(&m, "vertices").unwrap(), 4);
        assert!(matches!(
            required::<u64>(&m, "timeout"),
            Err(ColoringError::InvalidArgument(_))
        ));
    }

    #[test]
    fn options_map_onto_config() {
        let m = make_parser()
            .try_get_matches_from([
                "chromatic", "5", "7", "30", "-a", "greedy", "--prng", "java", "-p", "-w", "2",
                "--timeout-ms", "250",
            ])
            .unwrap();
        assert_eq!(required::<Algorithm>(&m, "algorithm").unwrap(), Algorithm::Greedy);
        assert_eq!(required::<PrngKind>(&m, "prng").unwrap(), PrngKind::JavaLcg);
        assert!(m.get_flag("parallel"));
        assert_eq!(m.get_one::<usize>("workers"), Some(&2));
        assert!(run(&m).is_ok());
    }
}
