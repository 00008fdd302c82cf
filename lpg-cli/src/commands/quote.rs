#[cfg(test)]
#[path = "../../tests/unit/commands/quote_test.rs"]
mod quote_test;

use super::*;
use lpg_cli::extensions::format::*;
use lpg_cli::extensions::import::read_csv_orders;
use lpg_core::algorithms::geometry::get_haversine_distance;
use lpg_core::models::OrderDraft;
use lpg_core::utils::Timer;

pub const SIZE_ARG_NAME: &str = "SIZE";
pub const LAT_ARG_NAME: &str = "lat";
pub const LNG_ARG_NAME: &str = "lng";
pub const ORDERS_ARG_NAME: &str = "orders";
pub const AT_ARG_NAME: &str = "at";
pub const DEMAND_ARG_NAME: &str = "demand";

pub fn get_quote_app() -> Command {
    Command::new("quote")
        .about("Calculates an itemized delivery price for a single order or a batch of orders")
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Specifies cylinder size, e.g. 13KG")
                .required_unless_present(ORDERS_ARG_NAME)
                .index(1),
        )
        .arg(
            Arg::new(LAT_ARG_NAME)
                .help("Customer's latitude")
                .long(LAT_ARG_NAME)
                .required_unless_present(ORDERS_ARG_NAME)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(LNG_ARG_NAME)
                .help("Customer's longitude")
                .long(LNG_ARG_NAME)
                .required_unless_present(ORDERS_ARG_NAME)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(ORDERS_ARG_NAME)
                .help("Specifies path to csv file with orders: ID,SIZE,LAT,LNG")
                .long(ORDERS_ARG_NAME)
                .conflicts_with_all([SIZE_ARG_NAME, LAT_ARG_NAME, LNG_ARG_NAME]),
        )
        .arg(
            Arg::new(AT_ARG_NAME)
                .help("Specifies delivery date time in RFC3339 format, current time is used if omitted")
                .long(AT_ARG_NAME),
        )
        .arg(
            Arg::new(DEMAND_ARG_NAME)
                .help("Specifies known demand level in [0, 100], configured estimator is used if omitted")
                .long(DEMAND_ARG_NAME),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed used by demand estimator")
                .long(SEED_ARG_NAME),
        )
        .arg(config_arg())
        .arg(out_result_arg())
        .arg(log_arg())
}

pub fn run_quote(matches: &ArgMatches) -> GenericResult<()> {
    let timer = Timer::start();
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")?;
    let environment = get_environment(matches.get_flag(LOG_ARG_NAME), seed);
    let config = get_config(matches)?;

    let time = match matches.get_one::<String>(AT_ARG_NAME) {
        Some(at) => parse_delivery_time(at)?,
        None => get_current_delivery_time(),
    };

    let estimator: Box<dyn DemandEstimator + Send + Sync> =
        match parse_float_value::<f64>(matches, DEMAND_ARG_NAME, "demand level")? {
            Some(level) => Box::new(FixedDemand::new(level)),
            None => config.create_demand_estimator(environment.random.clone())?,
        };

    let calculator = PriceCalculator::new(config.create_tariff()?);
    let depot = config.get_depot()?;

    if let Some(orders_path) = matches.get_one::<String>(ORDERS_ARG_NAME) {
        let orders = read_csv_orders(BufReader::new(open_file(orders_path, "orders")?))?;
        let response = quote_orders(&calculator, &orders, &depot, time, estimator.as_ref());

        (environment.logger)(&format!(
            "quoted {} of {} orders in {}ms",
            response.quotes.len(),
            orders.len(),
            timer.elapsed_millis()
        ));

        return write_result(matches, &response);
    }

    let cylinder_size = matches.get_one::<String>(SIZE_ARG_NAME).ok_or("cylinder size is not specified")?;
    let lat = parse_float_value::<f64>(matches, LAT_ARG_NAME, "customer latitude")?;
    let lng = parse_float_value::<f64>(matches, LNG_ARG_NAME, "customer longitude")?;
    let customer = match (lat, lng) {
        (Some(lat), Some(lng)) => Coordinate::new(lat, lng),
        _ => return Err("customer location is not specified".into()),
    };
    customer.validate()?;

    let depot = depot.coordinate();
    let quote = calculator.quote_order(cylinder_size, &customer, &depot, time, estimator.as_ref())?;
    let distance = get_haversine_distance(&depot, &customer);

    (environment.logger)(&format!("quoted {cylinder_size} order in {}ms", timer.elapsed_millis()));

    write_result(matches, &QuoteResponse::new(None, cylinder_size, distance, &quote))
}

fn quote_orders(
    calculator: &PriceCalculator,
    orders: &[OrderDraft],
    depot: &Location,
    time: DeliveryTime,
    estimator: &dyn DemandEstimator,
) -> BatchQuoteResponse {
    let results = calculator.quote_many(orders, depot, time, estimator);

    orders.iter().zip(results).fold(
        BatchQuoteResponse { quotes: vec![], errors: vec![] },
        |mut response, (order, result)| {
            match result {
                Ok(quote) => response.quotes.push(QuoteResponse::new(
                    Some(order.id.clone()),
                    order.cylinder_size.as_str(),
                    depot.distance_to(&order.location),
                    &quote,
                )),
                Err(err) => response.errors.push(OrderError { order_id: order.id.clone(), reason: err.to_string() }),
            }

            response
        },
    )
}
