//! Human-readable route summaries.

use std::fmt;

use serde::Serialize;

use crate::routing::RoutePlan;

/// Presentation form of a route plan: the arrow-joined path, the distance in
/// miles, and the time the search took.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub route: String,
    pub total_distance_miles: f64,
    pub elapsed_seconds: f64,
    pub hops: usize,
}

impl RouteSummary {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            route: plan.steps.join(" -> "),
            total_distance_miles: plan.total_distance,
            elapsed_seconds: plan.elapsed.as_secs_f64(),
            hops: plan.hop_count(),
        }
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route: {}", self.route)?;
        writeln!(f, "Total distance: {:.2} miles", self.total_distance_miles)?;
        write!(f, "Elapsed time: {:.4} seconds", self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::routing::RouteAlgorithm;

    use super::*;

    #[test]
    fn summary_formats_route_distance_and_time() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::AStar,
            start: "Anthony".to_string(),
            goal: "Harper".to_string(),
            steps: vec![
                "Anthony".to_string(),
                "Attica".to_string(),
                "Harper".to_string(),
            ],
            total_distance: 26.3271,
            elapsed: Duration::from_micros(1300),
        };

        let rendered = RouteSummary::from_plan(&plan).to_string();
        assert!(rendered.contains("Route: Anthony -> Attica -> Harper"));
        assert!(rendered.contains("Total distance: 26.33 miles"));
        assert!(rendered.contains("Elapsed time: 0.0013 seconds"));
    }
}
