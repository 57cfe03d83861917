use eco_routing::classify::{classify, RoadType};
use eco_routing::constructive::{
    farthest_insertion, hull_insertion, latitude_zigzag, nearest_insertion, nearest_neighbor,
    perimeter_first, BypassCorridor, Landmark,
};
use eco_routing::distance::DistanceMatrix;
use eco_routing::geometry::{convex_hull, hull_contains};
use eco_routing::local_search::two_opt_improve;
use eco_routing::models::{Route, Stop};
use proptest::prelude::*;

fn stop_strategy() -> impl Strategy<Value = Stop> {
    (-60.0f64..60.0, -170.0f64..170.0)
        .prop_map(|(lat, lon)| Stop::new(lat, lon).expect("in range"))
}

fn city_stop_strategy() -> impl Strategy<Value = Stop> {
    (12.8f64..13.1, 77.5f64..77.8).prop_map(|(lat, lon)| Stop::new(lat, lon).expect("in range"))
}

fn assert_permutation(order: &[usize], n: usize) -> Result<(), TestCaseError> {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    Ok(())
}

proptest! {
    #[test]
    fn constructors_return_permutations(stops in prop::collection::vec(stop_strategy(), 0..14)) {
        let dm = DistanceMatrix::from_stops(&stops);
        let n = stops.len();
        assert_permutation(&nearest_neighbor(&dm), n)?;
        assert_permutation(&farthest_insertion(&dm), n)?;
        assert_permutation(&nearest_insertion(&dm), n)?;
        assert_permutation(&hull_insertion(&stops, &dm), n)?;
        assert_permutation(&perimeter_first(&stops), n)?;
        assert_permutation(&latitude_zigzag(&stops), n)?;
    }

    #[test]
    fn hull_insertion_handles_duplicates(
        base in prop::collection::vec(city_stop_strategy(), 1..6),
        copies in 1usize..3,
    ) {
        let stops: Vec<Stop> = base.iter().cycle().take(base.len() * (copies + 1)).copied().collect();
        let dm = DistanceMatrix::from_stops(&stops);
        let order = hull_insertion(&stops, &dm);
        assert_permutation(&order, stops.len())?;
        prop_assert!(Route::from_order(&stops, &order).is_permutation_of(&stops));
    }

    #[test]
    fn reversal_preserves_length(stops in prop::collection::vec(stop_strategy(), 0..20)) {
        let route = Route::new(stops);
        let forward = route.total_distance();
        let backward = route.reversed().total_distance();
        prop_assert!((forward - backward).abs() <= 1e-9 * forward.max(1.0));
    }

    #[test]
    fn two_opt_never_lengthens(stops in prop::collection::vec(city_stop_strategy(), 0..12)) {
        let dm = DistanceMatrix::from_stops(&stops);
        let order: Vec<usize> = (0..stops.len()).collect();
        let before = dm.path_length(&order);
        let (improved, after) = two_opt_improve(&order, &dm);
        prop_assert!(after <= before);
        prop_assert!((dm.path_length(&improved) - after).abs() < 1e-9);
        assert_permutation(&improved, stops.len())?;
        if !stops.is_empty() {
            prop_assert_eq!(improved[0], 0);
        }
    }

    #[test]
    fn hull_contains_every_stop(stops in prop::collection::vec(city_stop_strategy(), 1..30)) {
        let hull = convex_hull(&stops);
        for stop in &stops {
            prop_assert!(hull_contains(&hull, stop));
        }
    }

    #[test]
    fn hull_vertices_come_from_input(stops in prop::collection::vec(city_stop_strategy(), 0..30)) {
        for vertex in convex_hull(&stops) {
            prop_assert!(stops.contains(&vertex));
        }
    }

    #[test]
    fn bypass_is_permutation(stops in prop::collection::vec(city_stop_strategy(), 0..12)) {
        let corridor = BypassCorridor::new(
            Landmark::new("south", 12.8456, 77.6603),
            Landmark::new("north", 13.0358, 77.5970),
        )
        .with_tolerance(0.05);
        assert_permutation(&corridor.order(&stops), stops.len())?;
    }

    #[test]
    fn classify_is_deterministic(
        avg in 0.0f64..40.0,
        max in 0.0f64..60.0,
        spread in 0.0f64..0.2,
        turns in 0.0f64..5.0,
        total in 0.0f64..100.0,
    ) {
        let label = classify(avg, max, spread, turns, total);
        prop_assert_eq!(label, classify(avg, max, spread, turns, total));
        prop_assert!(RoadType::CLASSIFIED.contains(&label));
        prop_assert_ne!(label, RoadType::Unknown);
    }
}
