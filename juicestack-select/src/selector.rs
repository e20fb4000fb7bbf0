//! Stock-weighted random flavor selection.

use std::collections::HashMap;

use juicestack_model::{Carton, Flavor, FlavorId};
use rand::Rng;

/// Picks one flavor at random, weighted by total remaining stock.
///
/// A flavor is eligible when all of the following hold:
/// - `exclude_from_random` is false,
/// - its id differs from `exclude` (when given; used by callers to
///   avoid suggesting the same flavor twice in a row),
/// - the sum of `quantity` over its cartons is greater than zero.
///
/// Each eligible flavor is chosen with probability equal to its stock
/// divided by the total eligible stock. Cartons whose `flavor_id`
/// matches no entry in `flavors` contribute no drawable weight.
///
/// Returns `None` when no flavor is eligible — a normal outcome, not
/// an error. O(|cartons| + |flavors|).
pub fn select_random_flavor<'a, R: Rng>(
    flavors: &'a [Flavor],
    cartons: &[Carton],
    exclude: Option<&FlavorId>,
    rng: &mut R,
) -> Option<&'a Flavor> {
    let mut stock: HashMap<&FlavorId, u64> = HashMap::new();
    for carton in cartons {
        *stock.entry(&carton.flavor_id).or_insert(0) += u64::from(carton.quantity);
    }

    // Eligible flavors keep their original relative order so that the
    // weighted walk (and its boundary fallback) is deterministic.
    let eligible: Vec<(&Flavor, f64)> = flavors
        .iter()
        .filter(|flavor| !flavor.exclude_from_random)
        .filter(|flavor| exclude != Some(&flavor.id))
        .filter_map(|flavor| {
            let weight = stock.get(&flavor.id).copied().unwrap_or(0);
            (weight > 0).then_some((flavor, weight as f64))
        })
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let total_weight: f64 = eligible.iter().map(|(_, weight)| weight).sum();
    let roll = rng.gen_range(0.0..total_weight);
    walk_weighted(&eligible, roll)
}

/// Walks the eligible flavors subtracting weights from `roll`; the
/// first flavor at which the running value reaches zero or below wins.
///
/// If the walk completes without the condition firing (possible only
/// through floating-point rounding at the interval boundary), the last
/// eligible flavor is returned. That fallback is a deliberate policy:
/// it keeps the draw total and deterministic instead of re-rolling.
pub(crate) fn walk_weighted<'a>(eligible: &[(&'a Flavor, f64)], roll: f64) -> Option<&'a Flavor> {
    let mut remaining = roll;
    let mut last = None;
    for (flavor, weight) in eligible {
        last = Some(*flavor);
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(flavor);
        }
    }
    last
}
