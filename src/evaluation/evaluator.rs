//! Candidate evaluator: distance, classification and emission score.

use crate::classify::RouteMetrics;
use crate::distance::DistanceProvider;
use crate::emission::EmissionScorer;
use crate::models::{EvaluatedRoute, Route, Stop, TrafficRegime, VehicleProfile};
use crate::selection::Heuristic;
use crate::traffic::TrafficProvider;

/// Evaluates visiting orders over a fixed stop set and parameter set.
///
/// Distance comes from the configured [`DistanceProvider`]; segment
/// features and turn counts are always measured with haversine.
///
/// # Examples
///
/// ```
/// use eco_routing::distance::Haversine;
/// use eco_routing::emission::{EmissionScorer, EmissionTables};
/// use eco_routing::evaluation::RouteEvaluator;
/// use eco_routing::models::{Stop, VehicleProfile};
/// use eco_routing::selection::Heuristic;
///
/// let stops = vec![
///     Stop::new(37.7749, -122.4194).unwrap(),
///     Stop::new(37.7849, -122.4094).unwrap(),
/// ];
/// let tables = EmissionTables::default();
/// let evaluator = RouteEvaluator::new(
///     &stops,
///     &Haversine,
///     EmissionScorer::analytic(&tables),
///     VehicleProfile::default(),
/// );
/// let eval = evaluator.evaluate(Heuristic::Reversed, false, &[1, 0]);
/// assert_eq!(eval.input_positions, vec![2, 1]);
/// assert!(eval.distance() > 1.0);
/// ```
pub struct RouteEvaluator<'a> {
    stops: &'a [Stop],
    distance: &'a dyn DistanceProvider,
    scorer: EmissionScorer<'a>,
    profile: VehicleProfile,
    traffic: Option<RouteTraffic<'a>>,
}

/// Traffic provider consulted for every evaluated route.
#[derive(Clone, Copy)]
struct RouteTraffic<'a> {
    provider: &'a dyn TrafficProvider,
    hour: u8,
    regime_specified: bool,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for `stops` scored under `profile`.
    pub fn new(
        stops: &'a [Stop],
        distance: &'a dyn DistanceProvider,
        scorer: EmissionScorer<'a>,
        profile: VehicleProfile,
    ) -> Self {
        Self {
            stops,
            distance,
            scorer,
            profile,
            traffic: None,
        }
    }

    /// Analyzes each evaluated route with `provider` at `hour`.
    ///
    /// The route's estimated speed feeds the oracle features. Unless
    /// `regime_specified`, the route's traffic level also picks the regime.
    pub fn with_traffic(
        mut self,
        provider: &'a dyn TrafficProvider,
        hour: u8,
        regime_specified: bool,
    ) -> Self {
        self.traffic = Some(RouteTraffic {
            provider,
            hour,
            regime_specified,
        });
        self
    }

    /// Materializes `order`, measures it, classifies it and scores it.
    ///
    /// # Panics
    ///
    /// Panics if `order` holds a position outside the stop set.
    pub fn evaluate(&self, heuristic: Heuristic, polished: bool, order: &[usize]) -> EvaluatedRoute {
        let route = Route::from_order(self.stops, order);
        let total_distance = self.distance.path_km(route.stops());
        let metrics = RouteMetrics::analyze(route.stops(), total_distance);
        let (profile, speed_kmh) = self.conditions(route.stops());
        let score = self
            .scorer
            .score(total_distance, metrics.classification, &profile, speed_kmh);
        let input_positions = route.input_positions(self.stops);

        log::debug!(
            "{heuristic}{}: positions {input_positions:?}, {total_distance:.3} km, {}, raw {:.3} kg, adjusted {:.3} kg",
            if polished { "+2opt" } else { "" },
            metrics.classification,
            score.raw_emissions,
            score.adjusted_emissions,
        );

        EvaluatedRoute {
            heuristic,
            polished,
            route,
            metrics,
            score,
            input_positions,
        }
    }

    /// Profile and speed override for one route.
    fn conditions(&self, route: &[Stop]) -> (VehicleProfile, Option<f64>) {
        let Some(traffic) = self.traffic else {
            return (self.profile, None);
        };
        let analysis = traffic.provider.analyze(route, traffic.hour);
        let profile = if traffic.regime_specified {
            self.profile
        } else {
            let regime = TrafficRegime::from_level(analysis.traffic_level);
            log::debug!(
                "traffic level {:.2} maps to {regime:?}",
                analysis.traffic_level
            );
            self.profile.with_traffic(regime)
        };
        (profile, Some(analysis.estimated_speed_kmh))
    }
}
