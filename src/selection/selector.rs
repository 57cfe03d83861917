//! Greenest/shortest route selection.

use rand::RngCore;

use super::candidates::{generate_candidates, CandidatePlan, Heuristic};
use crate::config::RoutingConfig;
use crate::distance::{DistanceMatrix, DistanceProvider, Haversine};
use crate::emission::{EmissionOracle, EmissionScorer};
use crate::error::RoutingError;
use crate::evaluation::RouteEvaluator;
use crate::models::{
    EvaluatedRoute, OptimizeRequest, SelectionResult, Stop, ValidatedRequest, VehicleProfile,
};
use crate::traffic::{HotspotTraffic, TrafficProvider};

/// Picks the lowest-emission route and the shortest route among candidates.
///
/// Candidates are built on a haversine matrix, measured with the distance
/// provider (haversine unless replaced), classified and scored. Two running
/// minima track adjusted emissions and distance independently; a candidate
/// replaces the current minimum only when strictly lower, so ties go to the
/// earlier candidate.
///
/// # Examples
///
/// ```
/// use eco_routing::config::RoutingConfig;
/// use eco_routing::models::{Stop, VehicleProfile};
/// use eco_routing::selection::RouteSelector;
///
/// let config = RoutingConfig::default();
/// let selector = RouteSelector::new(&config);
/// let stops = vec![
///     Stop::new(37.7749, -122.4194).unwrap(),
///     Stop::new(37.7849, -122.4094).unwrap(),
///     Stop::new(37.7649, -122.4294).unwrap(),
///     Stop::new(37.7849, -122.4394).unwrap(),
/// ];
/// let result = selector.select(&stops, VehicleProfile::default(), true, None);
/// assert_eq!(result.best.route.len(), 4);
/// assert!(result.shortest.distance() <= result.best.distance());
/// assert!(result.comparison.emissions_savings >= 0.0);
/// ```
pub struct RouteSelector<'a> {
    config: &'a RoutingConfig,
    plan: CandidatePlan,
    distance: &'a dyn DistanceProvider,
    oracle: Option<&'a dyn EmissionOracle>,
    traffic: Option<(TrafficSource<'a>, u8)>,
}

enum TrafficSource<'a> {
    External(&'a dyn TrafficProvider),
    Configured(HotspotTraffic),
}

impl TrafficSource<'_> {
    fn provider(&self) -> &dyn TrafficProvider {
        match self {
            Self::External(provider) => *provider,
            Self::Configured(hotspots) => hotspots,
        }
    }
}

impl<'a> RouteSelector<'a> {
    /// A selector with the default plan, haversine distances, the analytic
    /// policy and no traffic provider.
    pub fn new(config: &'a RoutingConfig) -> Self {
        Self {
            config,
            plan: CandidatePlan::default(),
            distance: &Haversine,
            oracle: None,
            traffic: None,
        }
    }

    /// Replaces the candidate plan.
    pub fn with_plan(mut self, plan: CandidatePlan) -> Self {
        self.plan = plan;
        self
    }

    /// Measures finished routes with `distance`.
    pub fn with_distance_provider(mut self, distance: &'a dyn DistanceProvider) -> Self {
        self.distance = distance;
        self
    }

    /// Scores through `oracle`, falling back to the analytic policy.
    pub fn with_oracle(mut self, oracle: &'a dyn EmissionOracle) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Consults `provider` at `hour` for every candidate route: its speed
    /// estimate feeds the oracle and, when the request names no regime, its
    /// traffic level picks the regime.
    pub fn with_traffic(mut self, provider: &'a dyn TrafficProvider, hour: u8) -> Self {
        self.traffic = Some((TrafficSource::External(provider), hour));
        self
    }

    /// Like [`with_traffic`](Self::with_traffic), using a [`HotspotTraffic`]
    /// built from the configuration's `traffic` table.
    pub fn with_hotspot_traffic(mut self, hour: u8) -> Self {
        let hotspots = HotspotTraffic::new(self.config.traffic.clone());
        self.traffic = Some((TrafficSource::Configured(hotspots), hour));
        self
    }

    /// Validates `request` and selects over its stops.
    ///
    /// # Errors
    ///
    /// Returns the [`RoutingError`] of the first malformed stop. No
    /// candidate is built in that case.
    pub fn optimize(
        &self,
        request: &OptimizeRequest,
        rng: Option<&mut dyn RngCore>,
    ) -> Result<SelectionResult, RoutingError> {
        let validated = request.validate()?;
        Ok(self.select_validated(&validated, rng))
    }

    /// Selects over a validated request.
    pub fn select_validated(
        &self,
        request: &ValidatedRequest,
        rng: Option<&mut dyn RngCore>,
    ) -> SelectionResult {
        self.select(&request.stops, request.profile, request.traffic_specified, rng)
    }

    /// Builds, evaluates and ranks every candidate for `stops`.
    ///
    /// `traffic_specified` says whether `profile.traffic` came from the
    /// caller; if not and a traffic provider is set, each candidate's
    /// traffic level picks its regime. `rng` feeds the plan's shuffles.
    pub fn select(
        &self,
        stops: &[Stop],
        profile: VehicleProfile,
        traffic_specified: bool,
        rng: Option<&mut dyn RngCore>,
    ) -> SelectionResult {
        let scorer = match self.oracle {
            Some(oracle) => {
                EmissionScorer::with_oracle(&self.config.emission, &self.config.oracle, oracle)
            }
            None => EmissionScorer::analytic(&self.config.emission),
        };
        let mut evaluator = RouteEvaluator::new(stops, self.distance, scorer, profile);
        if let Some((source, hour)) = &self.traffic {
            evaluator = evaluator.with_traffic(source.provider(), *hour, traffic_specified);
        }

        let matrix = DistanceMatrix::from_stops(stops);
        let candidates =
            generate_candidates(stops, &matrix, &self.plan, self.config.bypass.as_ref(), rng);

        let mut evaluated = candidates
            .iter()
            .map(|c| evaluator.evaluate(c.heuristic, c.polished, &c.order));
        let first = evaluated.next().unwrap_or_else(|| {
            let identity: Vec<usize> = (0..stops.len()).collect();
            evaluator.evaluate(Heuristic::NearestNeighbor, false, &identity)
        });

        let mut count = 1;
        let mut best = first.clone();
        let mut shortest = first;
        for candidate in evaluated {
            count += 1;
            track_minima(candidate, &mut best, &mut shortest);
        }

        let result = SelectionResult::new(best, shortest, count);
        log::info!(
            "selected {} ({:.2} km, {:.3} kg) over shortest {} ({:.2} km, {:.3} kg) from {count} candidates",
            result.best.heuristic,
            result.best.distance(),
            result.best.adjusted_emissions(),
            result.shortest.heuristic,
            result.shortest.distance(),
            result.shortest.adjusted_emissions(),
        );
        result
    }
}

fn track_minima(candidate: EvaluatedRoute, best: &mut EvaluatedRoute, shortest: &mut EvaluatedRoute) {
    let greener = candidate.adjusted_emissions() < best.adjusted_emissions();
    let shorter = candidate.distance() < shortest.distance();
    match (greener, shorter) {
        (true, true) => {
            *best = candidate.clone();
            *shortest = candidate;
        }
        (true, false) => *best = candidate,
        (false, true) => *shortest = candidate,
        (false, false) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::RoadType;
    use crate::constructive::{BypassCorridor, Landmark};
    use crate::error::OracleError;
    use crate::models::{FuelType, Route, TrafficRegime, VehicleType};
    use crate::traffic::TrafficAnalysis;
    use std::cell::RefCell;

    fn sf() -> Vec<Stop> {
        vec![
            Stop::new(37.7749, -122.4194).expect("valid"),
            Stop::new(37.7849, -122.4094).expect("valid"),
            Stop::new(37.7649, -122.4294).expect("valid"),
            Stop::new(37.7849, -122.4394).expect("valid"),
        ]
    }

    /// Fixed level; remembers every route and hour it is asked about.
    struct RecordingTraffic {
        level: f64,
        calls: RefCell<Vec<(Vec<Stop>, u8)>>,
    }

    impl RecordingTraffic {
        fn new(level: f64) -> Self {
            Self {
                level,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TrafficProvider for RecordingTraffic {
        fn analyze(&self, route: &[Stop], hour: u8) -> TrafficAnalysis {
            self.calls.borrow_mut().push((route.to_vec(), hour));
            TrafficAnalysis {
                traffic_level: self.level,
                estimated_speed_kmh: 22.0,
                route_type_label: "city".to_string(),
            }
        }
    }

    struct Offline;

    impl EmissionOracle for Offline {
        fn predict(&self, _features: &[f64; 8]) -> Result<f64, OracleError> {
            Err(OracleError::Unavailable {
                reason: "offline".to_string(),
            })
        }
    }

    #[test]
    fn test_empty_input_zero_result() {
        let config = RoutingConfig::default();
        let result = RouteSelector::new(&config).select(&[], VehicleProfile::default(), true, None);
        assert!(result.best.route.is_empty());
        assert_eq!(result.best.distance(), 0.0);
        assert_eq!(result.best.adjusted_emissions(), 0.0);
        assert!(!result.comparison.is_different_route);
    }

    #[test]
    fn test_single_stop() {
        let config = RoutingConfig::default();
        let s = vec![sf()[0]];
        let result = RouteSelector::new(&config).select(&s, VehicleProfile::default(), true, None);
        assert_eq!(result.best.route.stops(), &s[..]);
        assert_eq!(result.best.input_positions, vec![1]);
        assert_eq!(result.best.metrics.classification, RoadType::Unknown);
    }

    #[test]
    fn test_shortest_never_longer_than_nearest_neighbor() {
        let config = RoutingConfig::default();
        let stops = sf();
        let result = RouteSelector::new(&config).select(&stops, VehicleProfile::default(), true, None);
        assert_eq!(result.candidates_evaluated, 5);
        let dm = DistanceMatrix::from_stops(&stops);
        let nn = crate::constructive::nearest_neighbor(&dm);
        assert!(result.shortest.distance() <= dm.path_length(&nn) + 1e-9);
        assert!(result.best.adjusted_emissions() <= result.shortest.adjusted_emissions());
    }

    #[test]
    fn test_track_minima_keeps_first_on_tie() {
        let config = RoutingConfig::default();
        let stops = sf();
        let scorer = EmissionScorer::analytic(&config.emission);
        let evaluator = RouteEvaluator::new(&stops, &Haversine, scorer, VehicleProfile::default());
        let first = evaluator.evaluate(Heuristic::NearestNeighbor, false, &[0, 1, 2, 3]);
        let mut tied = first.clone();
        tied.heuristic = Heuristic::Reversed;
        let mut best = first.clone();
        let mut shortest = first;
        track_minima(tied, &mut best, &mut shortest);
        assert_eq!(best.heuristic, Heuristic::NearestNeighbor);
        assert_eq!(shortest.heuristic, Heuristic::NearestNeighbor);
    }

    #[test]
    fn test_track_minima_splits_winners() {
        let config = RoutingConfig::default();
        let stops = sf();
        let scorer = EmissionScorer::analytic(&config.emission);
        let evaluator = RouteEvaluator::new(&stops, &Haversine, scorer, VehicleProfile::default());
        let first = evaluator.evaluate(Heuristic::NearestNeighbor, false, &[0, 1, 2, 3]);
        let mut greener = first.clone();
        greener.heuristic = Heuristic::HullInsertion;
        greener.score.adjusted_emissions /= 2.0;
        greener.metrics.total_distance += 1.0;
        let mut best = first.clone();
        let mut shortest = first;
        track_minima(greener, &mut best, &mut shortest);
        assert_eq!(best.heuristic, Heuristic::HullInsertion);
        assert_eq!(shortest.heuristic, Heuristic::NearestNeighbor);
    }

    #[test]
    fn test_bypass_candidate_included() {
        let config = RoutingConfig {
            bypass: Some(BypassCorridor::new(
                Landmark::new("a", 37.7849, -122.4394),
                Landmark::new("b", 37.7649, -122.4294),
            )),
            ..RoutingConfig::default()
        };
        let result = RouteSelector::new(&config).select(&sf(), VehicleProfile::default(), true, None);
        assert_eq!(result.candidates_evaluated, 6);
    }

    #[test]
    fn test_traffic_analyzed_once_per_candidate() {
        let config = RoutingConfig::default();
        let stops = sf();
        let traffic = RecordingTraffic::new(0.5);
        let result = RouteSelector::new(&config)
            .with_traffic(&traffic, 18)
            .select(&stops, VehicleProfile::default(), true, None);

        let matrix = DistanceMatrix::from_stops(&stops);
        let expected: Vec<Vec<Stop>> =
            generate_candidates(&stops, &matrix, &CandidatePlan::default(), None, None)
                .iter()
                .map(|c| Route::from_order(&stops, &c.order).stops().to_vec())
                .collect();

        let calls = traffic.calls.borrow();
        assert_eq!(calls.len(), result.candidates_evaluated);
        assert_eq!(calls.len(), expected.len());
        for ((route, hour), candidate) in calls.iter().zip(&expected) {
            assert_eq!(route, candidate);
            assert_eq!(*hour, 18);
        }
    }

    #[test]
    fn test_traffic_sets_regime_when_unspecified() {
        let config = RoutingConfig::default();
        let traffic = RecordingTraffic::new(0.9);
        let selector = RouteSelector::new(&config).with_traffic(&traffic, 18);
        let heavy = VehicleProfile::default().with_traffic(TrafficRegime::Heavy);
        let expected = RouteSelector::new(&config).select(&sf(), heavy, true, None);

        let derived = selector.select(&sf(), VehicleProfile::default(), false, None);
        assert_eq!(derived, expected);

        let kept = selector.select(&sf(), VehicleProfile::default(), true, None);
        assert!(kept.best.adjusted_emissions() < expected.best.adjusted_emissions());
    }

    #[test]
    fn test_configured_hotspots_drive_regime() {
        let config = RoutingConfig::from_json_str(
            r#"{"traffic": {"hotspots": [
                {"name": "Downtown", "lat": 37.7749, "lon": -122.4194, "radius_km": 5.0, "level": 0.6}
            ]}}"#,
        )
        .expect("valid config");
        let heavy = VehicleProfile::default().with_traffic(TrafficRegime::Heavy);
        let expected = RouteSelector::new(&config).select(&sf(), heavy, true, None);

        // 0.6 at 18:00 scales to 0.9, which is heavy traffic.
        let rush = RouteSelector::new(&config)
            .with_hotspot_traffic(18)
            .select(&sf(), VehicleProfile::default(), false, None);
        assert_eq!(rush, expected);

        // 0.6 at 03:00 scales to 0.36, which is moderate.
        let night = RouteSelector::new(&config)
            .with_hotspot_traffic(3)
            .select(&sf(), VehicleProfile::default(), false, None);
        assert!(night.best.adjusted_emissions() < expected.best.adjusted_emissions());
    }

    #[test]
    fn test_offline_oracle_matches_analytic() {
        let config = RoutingConfig::default();
        let profile = VehicleProfile::new(VehicleType::Bus, FuelType::Diesel, TrafficRegime::Heavy);
        let analytic = RouteSelector::new(&config).select(&sf(), profile, true, None);
        let oracle = Offline;
        let fallback = RouteSelector::new(&config)
            .with_oracle(&oracle)
            .select(&sf(), profile, true, None);
        assert_eq!(analytic, fallback);
    }

    #[test]
    fn test_optimize_rejects_bad_stop() {
        let config = RoutingConfig::default();
        let request: OptimizeRequest =
            serde_json::from_str(r#"{"stops": [{"lat": 1.0, "lon": 2.0}, {"lat": 1.0}]}"#)
                .expect("valid json");
        let err = RouteSelector::new(&config)
            .optimize(&request, None)
            .expect_err("missing lon");
        assert_eq!(
            err,
            RoutingError::MissingCoordinate {
                index: 1,
                field: "lon"
            }
        );
    }
}
