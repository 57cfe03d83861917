//! Candidate generation in a fixed, observable order.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::constructive::{
    farthest_insertion, hull_insertion, latitude_zigzag, nearest_insertion, nearest_neighbor,
    perimeter_first, reversed, shuffled, BypassCorridor,
};
use crate::distance::DistanceMatrix;
use crate::local_search::two_opt_improve;
use crate::models::Stop;

/// The constructor behind a candidate route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    NearestNeighbor,
    /// Nearest neighbor followed by 2-opt.
    NearestNeighborTwoOpt,
    HullInsertion,
    FarthestInsertion,
    NearestInsertion,
    Bypass,
    PerimeterFirst,
    LatitudeZigzag,
    /// Input order, reversed.
    Reversed,
    /// The `draw`-th seeded shuffle, counting from 1.
    Shuffled { draw: usize },
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NearestNeighbor => f.write_str("nearest_neighbor"),
            Self::NearestNeighborTwoOpt => f.write_str("nearest_neighbor_2opt"),
            Self::HullInsertion => f.write_str("hull_insertion"),
            Self::FarthestInsertion => f.write_str("farthest_insertion"),
            Self::NearestInsertion => f.write_str("nearest_insertion"),
            Self::Bypass => f.write_str("bypass"),
            Self::PerimeterFirst => f.write_str("perimeter_first"),
            Self::LatitudeZigzag => f.write_str("latitude_zigzag"),
            Self::Reversed => f.write_str("reversed"),
            Self::Shuffled { draw } => write!(f, "shuffle_{draw}"),
        }
    }
}

/// Which optional candidates to add after the default set.
///
/// The default plan is fully deterministic: no variants and no shuffles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidatePlan {
    pub perimeter_first: bool,
    pub latitude_zigzag: bool,
    pub reversed: bool,
    /// Number of shuffles drawn from the caller's RNG.
    pub shuffles: usize,
    /// Run 2-opt over every candidate that is not already 2-opt optimal.
    pub polish: bool,
}

impl CandidatePlan {
    /// A plan with every optional variant, `shuffles` shuffles and polishing.
    pub fn exhaustive(shuffles: usize) -> Self {
        Self {
            perimeter_first: true,
            latitude_zigzag: true,
            reversed: true,
            shuffles,
            polish: true,
        }
    }
}

/// A visiting order tagged with the constructor that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub heuristic: Heuristic,
    pub polished: bool,
    /// Positions into the stop slice.
    pub order: Vec<usize>,
}

impl Candidate {
    fn new(heuristic: Heuristic, order: Vec<usize>) -> Self {
        Self {
            heuristic,
            polished: false,
            order,
        }
    }
}

/// Builds every candidate for `stops`, in evaluation order.
///
/// The default set is nearest neighbor, nearest neighbor with 2-opt, hull
/// insertion, farthest insertion, nearest insertion and, when `bypass` is
/// given, the bypass order. Plan variants follow in the order perimeter
/// first, latitude zigzag, reversed, shuffles. Shuffles are skipped without
/// an RNG.
///
/// # Examples
///
/// ```
/// use eco_routing::distance::DistanceMatrix;
/// use eco_routing::models::Stop;
/// use eco_routing::selection::{generate_candidates, CandidatePlan, Heuristic};
///
/// let stops = vec![
///     Stop::new(0.0, 0.0).unwrap(),
///     Stop::new(0.0, 1.0).unwrap(),
///     Stop::new(1.0, 0.5).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// let candidates = generate_candidates(&stops, &dm, &CandidatePlan::default(), None, None);
/// assert_eq!(candidates.len(), 5);
/// assert_eq!(candidates[0].heuristic, Heuristic::NearestNeighbor);
/// ```
pub fn generate_candidates(
    stops: &[Stop],
    distances: &DistanceMatrix,
    plan: &CandidatePlan,
    bypass: Option<&BypassCorridor>,
    rng: Option<&mut dyn RngCore>,
) -> Vec<Candidate> {
    let n = stops.len();
    let nn = nearest_neighbor(distances);
    let (nn_two_opt, _) = two_opt_improve(&nn, distances);

    let mut candidates = vec![
        Candidate::new(Heuristic::NearestNeighbor, nn),
        Candidate::new(Heuristic::NearestNeighborTwoOpt, nn_two_opt),
        Candidate::new(Heuristic::HullInsertion, hull_insertion(stops, distances)),
        Candidate::new(Heuristic::FarthestInsertion, farthest_insertion(distances)),
        Candidate::new(Heuristic::NearestInsertion, nearest_insertion(distances)),
    ];

    if let Some(corridor) = bypass {
        candidates.push(Candidate::new(Heuristic::Bypass, corridor.order(stops)));
    }
    if plan.perimeter_first {
        candidates.push(Candidate::new(Heuristic::PerimeterFirst, perimeter_first(stops)));
    }
    if plan.latitude_zigzag {
        candidates.push(Candidate::new(Heuristic::LatitudeZigzag, latitude_zigzag(stops)));
    }
    if plan.reversed {
        candidates.push(Candidate::new(Heuristic::Reversed, reversed(n)));
    }
    match rng {
        Some(rng) => {
            for draw in 1..=plan.shuffles {
                let order = shuffled(n, &mut *rng);
                candidates.push(Candidate::new(Heuristic::Shuffled { draw }, order));
            }
        }
        None if plan.shuffles > 0 => {
            log::debug!("no RNG supplied, skipping {} shuffles", plan.shuffles);
        }
        None => {}
    }

    if plan.polish {
        for candidate in &mut candidates {
            if candidate.heuristic == Heuristic::NearestNeighborTwoOpt {
                continue;
            }
            let (order, _) = two_opt_improve(&candidate.order, distances);
            candidate.order = order;
            candidate.polished = true;
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::Landmark;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stops() -> Vec<Stop> {
        vec![
            Stop::new(12.97, 77.59).expect("valid"),
            Stop::new(12.93, 77.62).expect("valid"),
            Stop::new(13.03, 77.60).expect("valid"),
            Stop::new(12.85, 77.66).expect("valid"),
            Stop::new(12.99, 77.71).expect("valid"),
        ]
    }

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_default_order() {
        let s = stops();
        let dm = DistanceMatrix::from_stops(&s);
        let heuristics: Vec<Heuristic> =
            generate_candidates(&s, &dm, &CandidatePlan::default(), None, None)
                .into_iter()
                .map(|c| c.heuristic)
                .collect();
        assert_eq!(
            heuristics,
            vec![
                Heuristic::NearestNeighbor,
                Heuristic::NearestNeighborTwoOpt,
                Heuristic::HullInsertion,
                Heuristic::FarthestInsertion,
                Heuristic::NearestInsertion,
            ]
        );
    }

    #[test]
    fn test_bypass_appended_after_defaults() {
        let s = stops();
        let dm = DistanceMatrix::from_stops(&s);
        let corridor = BypassCorridor::new(
            Landmark::new("south", 12.85, 77.66),
            Landmark::new("north", 13.03, 77.60),
        );
        let c = generate_candidates(&s, &dm, &CandidatePlan::default(), Some(&corridor), None);
        assert_eq!(c.len(), 6);
        assert_eq!(c[5].heuristic, Heuristic::Bypass);
        assert_eq!(c[5].order, vec![3, 2, 0, 1, 4]);
    }

    #[test]
    fn test_exhaustive_plan_all_permutations() {
        let s = stops();
        let dm = DistanceMatrix::from_stops(&s);
        let mut rng = StdRng::seed_from_u64(7);
        let c = generate_candidates(&s, &dm, &CandidatePlan::exhaustive(3), None, Some(&mut rng));
        assert_eq!(c.len(), 5 + 3 + 3);
        assert_eq!(c[10].heuristic, Heuristic::Shuffled { draw: 3 });
        for candidate in &c {
            assert!(is_permutation(&candidate.order, s.len()), "{}", candidate.heuristic);
        }
        assert!(c
            .iter()
            .filter(|c| c.heuristic != Heuristic::NearestNeighborTwoOpt)
            .all(|c| c.polished));
    }

    #[test]
    fn test_shuffles_reproducible_with_seed() {
        let s = stops();
        let dm = DistanceMatrix::from_stops(&s);
        let plan = CandidatePlan {
            shuffles: 4,
            ..CandidatePlan::default()
        };
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = generate_candidates(&s, &dm, &plan, None, Some(&mut a));
        let second = generate_candidates(&s, &dm, &plan, None, Some(&mut b));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffles_skipped_without_rng() {
        let s = stops();
        let dm = DistanceMatrix::from_stops(&s);
        let plan = CandidatePlan {
            shuffles: 4,
            ..CandidatePlan::default()
        };
        assert_eq!(generate_candidates(&s, &dm, &plan, None, None).len(), 5);
    }

    #[test]
    fn test_empty_stops() {
        let dm = DistanceMatrix::from_stops(&[]);
        let c = generate_candidates(&[], &dm, &CandidatePlan::exhaustive(2), None, None);
        assert!(c.iter().all(|c| c.order.is_empty()));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Heuristic::NearestNeighborTwoOpt.to_string(), "nearest_neighbor_2opt");
        assert_eq!(Heuristic::Shuffled { draw: 2 }.to_string(), "shuffle_2");
    }
}
