#[cfg(test)]
#[path = "../../tests/unit/commands/route_test.rs"]
mod route_test;

use super::*;
use lpg_cli::extensions::format::{RouteResponse, read_route_request};
use lpg_cli::extensions::import::import_route_request;
use lpg_core::utils::Timer;

pub const FORMAT_ARG_NAME: &str = "FORMAT";
pub const INPUT_ARG_NAME: &str = "INPUT";
pub const GREEDY_ARG_NAME: &str = "greedy";

pub fn get_route_app() -> Command {
    Command::new("route")
        .about("Sequences delivery stops into a route starting from the depot")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input format")
                .required(true)
                .value_parser(["json", "csv"])
                .index(1),
        )
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets input file with delivery stops").required(true).index(2))
        .arg(
            Arg::new(GREEDY_ARG_NAME)
                .help("Skips 2-opt improvement and returns nearest neighbor route")
                .long(GREEDY_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(config_arg())
        .arg(out_result_arg())
        .arg(log_arg())
}

pub fn run_route(matches: &ArgMatches) -> GenericResult<()> {
    let timer = Timer::start();
    let environment = get_environment(matches.get_flag(LOG_ARG_NAME), None);
    let config = get_config(matches)?;

    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("input format is not specified")?;
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("input file is not specified")?;
    let input = BufReader::new(open_file(input_path, "input")?);

    let request = match input_format.as_str() {
        "json" => read_route_request(input)?,
        format => import_route_request(format, input)?,
    };

    let depot = match &request.depot {
        Some(depot) => depot.to_location().map_err(|err| format!("depot: {err}"))?,
        None => config.get_depot()?,
    };
    let stops = request.get_stops()?;

    let sequencer = RouteSequencer::new(config.create_routing_config()?, environment.clone());
    let route = if matches.get_flag(GREEDY_ARG_NAME) {
        sequencer.sequence_greedy(&depot, stops.as_slice())
    } else {
        sequencer.sequence(&depot, stops.as_slice())
    };

    write_result(matches, &RouteResponse::from(&route))?;

    (environment.logger)(&format!("route of {} stops is written in {}ms", stops.len(), timer.elapsed_millis()));

    Ok(())
}
