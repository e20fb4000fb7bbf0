//! Deterministic carton priority ranking.

use std::cmp::Ordering;

use juicestack_model::{Carton, FlavorId};

/// The depletion ordering between two cartons, strongest rule first:
///
/// 1. open cartons before closed ones (finish opened packaging first),
/// 2. lower quantity before higher (drain the smallest carton to free
///    its storage slot sooner),
/// 3. higher `location.height` before lower (the top of a stack is the
///    most accessible).
///
/// The `stack` coordinate never participates; cartons equal on all
/// three levels are left to a stable sort's original order.
#[must_use]
pub fn priority_order(a: &Carton, b: &Carton) -> Ordering {
    b.is_open
        .cmp(&a.is_open)
        .then_with(|| a.quantity.cmp(&b.quantity))
        .then_with(|| b.location.height.cmp(&a.location.height))
}

/// Picks the carton of `flavor_id` that should be depleted next.
///
/// Returns `None` when no carton carries that flavor — a normal
/// outcome, not an error. Deterministic: identical input always yields
/// the identical carton.
pub fn select_priority_carton<'a>(
    cartons: &'a [Carton],
    flavor_id: &FlavorId,
) -> Option<&'a Carton> {
    let mut candidates: Vec<&Carton> = cartons
        .iter()
        .filter(|carton| &carton.flavor_id == flavor_id)
        .collect();

    // sort_by is stable, so full ties keep their original order.
    candidates.sort_by(|a, b| priority_order(a, b));
    candidates.first().copied()
}
