//! Range-constrained fuel-stop selection.
//!
//! Greedy "cheapest reachable" strategy over the gas-station problem: from
//! the current position, look at every candidate within one tank of range
//! and fill up at the cheapest one. Locally optimal per window; not
//! guaranteed globally optimal in all price configurations. That tradeoff is
//! deliberate and load-bearing — callers and tests depend on this exact
//! behavior.

use crate::{CandidateStop, CoreError, FuelPlan, FuelStop};

/// Tank range assumed when the caller does not configure one, in miles.
pub const DEFAULT_MAX_RANGE_MILES: f64 = 500.0;

/// Fuel economy assumed when the caller does not configure one, in miles
/// per gallon.
pub const DEFAULT_MPG: f64 = 10.0;

/// Round to two decimal places, for money and mile-marker display values.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Selects a minimum-cost sequence of refueling stops.
///
/// `stops` must be the matcher's output: sorted ascending by
/// `distance_from_start`. The vehicle starts with a full tank, so the first
/// window opens at mile 0 and extends `max_range` miles; no stop is planned
/// for the final leg once the remaining distance fits in one tank. Price
/// ties within a window go to the candidate encountered first in iteration
/// order (an accepted non-determinism when input order varies).
///
/// # Errors
///
/// - [`CoreError::InvalidInput`] if distance, range, or mpg is not positive.
/// - [`CoreError::RouteInfeasible`] when no candidate falls inside the
///   current reachable window; carries the mile-marker (rounded) past which
///   the route cannot continue.
pub fn optimize_fuel_stops(
    stops: &[CandidateStop],
    total_distance: f64,
    max_range: f64,
    mpg: f64,
) -> Result<FuelPlan, CoreError> {
    if total_distance <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "total distance must be positive, got {total_distance}"
        )));
    }
    if max_range <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "max range must be positive, got {max_range}"
        )));
    }
    if mpg <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "fuel economy must be positive, got {mpg}"
        )));
    }

    let mut plan = FuelPlan::default();
    let mut current_pos = 0.0_f64;

    while current_pos + max_range < total_distance {
        // Reachable window: strictly past the current position, within one
        // tank. First-encountered wins on price ties.
        let mut cheapest: Option<&CandidateStop> = None;
        for stop in stops {
            if stop.distance_from_start <= current_pos
                || stop.distance_from_start > current_pos + max_range
            {
                continue;
            }
            if cheapest.is_none_or(|best| stop.price < best.price) {
                cheapest = Some(stop);
            }
        }

        let Some(chosen) = cheapest else {
            return Err(CoreError::RouteInfeasible {
                mile_marker: current_pos.round(),
            });
        };

        let distance_driven = chosen.distance_from_start - current_pos;
        let gallons_needed = distance_driven / mpg;
        let cost_at_stop = gallons_needed * chosen.price;
        plan.total_cost += cost_at_stop;

        plan.stops.push(FuelStop {
            station_name: chosen.name.clone(),
            location: format!("{}, {}", chosen.city, chosen.state),
            gallons_purchased: round2(gallons_needed),
            price_per_gallon: chosen.price,
            cost_at_stop: round2(cost_at_stop),
            mile_marker: round2(chosen.distance_from_start),
        });

        // Tank is full again at the chosen station.
        current_pos = chosen.distance_from_start;
    }

    Ok(plan)
}
