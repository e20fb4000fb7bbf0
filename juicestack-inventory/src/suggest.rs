//! The "what should I drink next" flow.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use juicestack_model::{Carton, Flavor, FlavorId};
use juicestack_select::{select_priority_carton, select_random_flavor};
use juicestack_storage::KvStore;

use crate::inventory::Inventory;

/// A complete suggestion: the drawn flavor and the specific carton to
/// take from. Applying the decrement is a separate step
/// ([`Inventory::take_from_carton`]); no state changes here.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub flavor: Flavor,
    pub carton: Carton,
}

/// Why no suggestion could be made. These are routine data states, not
/// faults; each carries a distinct user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuggestFailure {
    #[error("no flavors are set up yet")]
    NoFlavors,

    #[error("every flavor is currently excluded from random selection")]
    AllFlavorsExcluded,

    #[error("no cartons are recorded")]
    NoCartons,

    #[error("all cartons are empty")]
    OutOfStock,
}

impl<S: KvStore> Inventory<S> {
    /// Draws a stock-weighted random flavor and the carton to open for
    /// it. Pass the previous suggestion's flavor id as `exclude` to
    /// avoid an immediate repeat.
    pub fn suggest<R: Rng>(
        &self,
        exclude: Option<&FlavorId>,
        rng: &mut R,
    ) -> Result<Suggestion, SuggestFailure> {
        let Some(flavor) = select_random_flavor(self.flavors(), self.cartons(), exclude, rng)
        else {
            return Err(self.diagnose(exclude));
        };

        let Some(carton) = select_priority_carton(self.cartons(), &flavor.id) else {
            // Unreachable while eligibility requires stock > 0, which
            // requires at least one carton; kept as a diagnosis rather
            // than a panic.
            warn!(flavor = %flavor.id, "selected flavor has no carton");
            return Err(SuggestFailure::OutOfStock);
        };

        debug!(flavor = %flavor.id, carton = %carton.id, "suggestion made");
        Ok(Suggestion {
            flavor: flavor.clone(),
            carton: carton.clone(),
        })
    }

    /// Maps an empty draw onto the most specific cause, in the order a
    /// user would want to hear about it.
    fn diagnose(&self, exclude: Option<&FlavorId>) -> SuggestFailure {
        if self.flavors().is_empty() {
            return SuggestFailure::NoFlavors;
        }
        let all_excluded = self
            .flavors()
            .iter()
            .all(|f| f.exclude_from_random || Some(&f.id) == exclude);
        if all_excluded {
            return SuggestFailure::AllFlavorsExcluded;
        }
        if self.cartons().is_empty() {
            return SuggestFailure::NoCartons;
        }
        SuggestFailure::OutOfStock
    }
}
