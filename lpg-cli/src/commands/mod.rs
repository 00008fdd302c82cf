use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod import;
pub mod quote;
pub mod route;
pub mod track;

use lpg_cli::extensions::config::{Config, read_config};
use lpg_cli::extensions::format::write_json;
use lpg_core::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;

pub const CONFIG_ARG_NAME: &str = "config";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const LOG_ARG_NAME: &str = "log";
pub const SEED_ARG_NAME: &str = "seed";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get float value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get integer value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Parses a coordinate specified as `LAT,LNG`.
fn parse_coordinate(value: &str, arg_desc: &str) -> GenericResult<Coordinate> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| GenericError::from(format!("cannot parse {arg_desc}: expected 'LAT,LNG', got '{value}'")))?;

    let parse = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|err| GenericError::from(format!("cannot parse {arg_desc}: '{err}'")))
    };

    let coordinate = Coordinate::new(parse(lat)?, parse(lng)?);
    coordinate.validate()?;

    Ok(coordinate)
}

fn get_config(matches: &ArgMatches) -> GenericResult<Config> {
    matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}

fn get_environment(is_logging: bool, seed: Option<u64>) -> Arc<Environment> {
    let random: Arc<dyn Random + Send + Sync> = match seed {
        Some(seed) => Arc::new(RepeatableRandom::new(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let logger: InfoLogger = if is_logging {
        Arc::new(|msg: &str| eprintln!("{msg}"))
    } else {
        Arc::new(|_: &str| {})
    };

    Arc::new(Environment::new(random, logger))
}

fn write_result<T: Serialize>(matches: &ArgMatches, value: &T) -> GenericResult<()> {
    let out_result = matches
        .get_one::<String>(OUT_RESULT_ARG_NAME)
        .map(|path| create_file(path, "out result"))
        .transpose()?;

    write_json(create_write_buffer(out_result), value)
}

fn config_arg() -> Arg {
    Arg::new(CONFIG_ARG_NAME)
        .help("Specifies path to the config file with depot, routing and tariff settings")
        .short('c')
        .long(CONFIG_ARG_NAME)
        .required(false)
}

fn out_result_arg() -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help("Specifies path to file for result output")
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
        .required(false)
}

fn log_arg() -> Arg {
    Arg::new(LOG_ARG_NAME)
        .help("Specifies whether progress information is written to stderr")
        .long(LOG_ARG_NAME)
        .action(ArgAction::SetTrue)
}
