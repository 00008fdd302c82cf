#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use lpg_cli::extensions::import::import_route_request;

pub const FORMAT_ARG_NAME: &str = "FORMAT";
pub const INPUT_ARG_NAME: &str = "input-file";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Provides the way to import delivery stops from various formats into a route request")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser(["csv"])
                .index(1),
        )
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input file which contains delivery stops")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true),
        )
        .arg(out_result_arg())
}

pub fn run_import(matches: &ArgMatches) -> GenericResult<()> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("input format is not specified")?;
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("input file is not specified")?;

    let request = import_route_request(input_format, BufReader::new(open_file(input_path, "input")?))
        .map_err(|err| format!("cannot import route request: '{err}'"))?;

    write_result(matches, &request)
}
