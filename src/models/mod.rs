//! Domain model types for emissions-aware route selection.
//!
//! Stops and routes, the vehicle/fuel/traffic parameters a route is scored
//! under, the incoming request with its validation, and the selection result.

mod request;
mod route;
mod solution;
mod stop;
mod vehicle;

pub use request::{parse_stops, OptimizeRequest, ValidatedRequest};
pub use route::Route;
pub use solution::{EvaluatedRoute, RouteComparison, SelectionResult};
pub use stop::Stop;
pub use vehicle::{FuelType, TrafficRegime, VehicleProfile, VehicleType};
