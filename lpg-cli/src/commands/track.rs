#[cfg(test)]
#[path = "../../tests/unit/commands/track_test.rs"]
mod track_test;

use super::*;
use lpg_cli::extensions::format::ArrivalResponse;

pub const FROM_ARG_NAME: &str = "from";
pub const TO_ARG_NAME: &str = "to";

pub fn get_track_app() -> Command {
    Command::new("track")
        .about("Estimates distance and arrival time from the driver's position to the customer")
        .arg(
            Arg::new(FROM_ARG_NAME)
                .help("Driver's current position as LAT,LNG")
                .long(FROM_ARG_NAME)
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(TO_ARG_NAME)
                .help("Customer's position as LAT,LNG")
                .long(TO_ARG_NAME)
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(config_arg())
        .arg(out_result_arg())
}

pub fn run_track(matches: &ArgMatches) -> GenericResult<()> {
    let config = get_config(matches)?;

    let driver = matches.get_one::<String>(FROM_ARG_NAME).ok_or("driver position is not specified")?;
    let customer = matches.get_one::<String>(TO_ARG_NAME).ok_or("customer position is not specified")?;

    let arrival = estimate_arrival(
        &parse_coordinate(driver, "driver position")?,
        &parse_coordinate(customer, "customer position")?,
        &config.create_routing_config()?,
    );

    write_result(matches, &ArrivalResponse::from(&arrival))
}
