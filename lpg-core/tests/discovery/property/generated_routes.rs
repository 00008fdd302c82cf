use crate::helpers::models::test_depot;
use crate::helpers::utils::create_test_environment;
use crate::models::common::Location;
use crate::solver::{RouteSequencer, RoutingConfig};
use proptest::prelude::*;

prop_compose! {
    fn generate_stop()
    (
     lat in -1.45..-1.15_f64,
     lng in 36.65..37.0_f64,
     id in 0..1000_u32
    ) -> Location {
        Location::new_stop(lat, lng, format!("stop {id}"), format!("order{id}"))
    }
}

fn generate_stops(size: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec(generate_stop(), size)
}

fn create_sequencer() -> RouteSequencer {
    RouteSequencer::new(RoutingConfig::default(), create_test_environment())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]
    #[test]
    fn can_produce_valid_route(stops in generate_stops(0..32)) {
        let depot = test_depot();

        let route = create_sequencer().sequence(&depot, stops.as_slice());

        prop_assert_eq!(route.stops.len(), stops.len() + 1);
        prop_assert_eq!(&route.stops[0], &depot);
        prop_assert!(route.total_distance_km >= 0.);

        let mut visit_order = route.visit_order.clone();
        visit_order.sort_unstable();
        prop_assert_eq!(visit_order, (0..stops.len()).collect::<Vec<_>>());

        route.visit_order.iter().zip(route.deliveries().iter()).for_each(|(&idx, stop)| {
            assert_eq!(&stops[idx], stop);
        });
    }

    #[test]
    fn can_improve_greedy_route(stops in generate_stops(1..32)) {
        let depot = test_depot();
        let sequencer = create_sequencer();

        let greedy = sequencer.sequence_greedy(&depot, stops.as_slice());
        let improved = sequencer.sequence(&depot, stops.as_slice());

        prop_assert!(improved.total_distance_km <= greedy.total_distance_km + 1E-9);
        prop_assert!(improved.estimated_minutes <= greedy.estimated_minutes);
        prop_assert!(improved.estimated_fuel_cost <= greedy.estimated_fuel_cost);
    }

    #[test]
    fn can_sequence_deterministically(stops in generate_stops(0..16)) {
        let depot = test_depot();

        let first = create_sequencer().sequence(&depot, stops.as_slice());
        let second = create_sequencer().sequence(&depot, stops.as_slice());

        prop_assert_eq!(first, second);
    }
}
