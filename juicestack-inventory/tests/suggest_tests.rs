use juicestack_inventory::{Inventory, SuggestFailure};
use juicestack_model::{Carton, CartonId, Flavor, FlavorId, Location};
use juicestack_storage::MemoryStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn flavor(id: &str) -> Flavor {
    Flavor {
        id: FlavorId::from_raw(id),
        name: id.to_string(),
        exclude_from_random: false,
    }
}

fn carton(id: &str, flavor_id: &str, quantity: u32, open: bool, height: u32) -> Carton {
    Carton {
        id: CartonId::from_raw(id),
        flavor_id: FlavorId::from_raw(flavor_id),
        quantity,
        location: Location::new(0, height),
        is_open: open,
    }
}

fn inventory() -> Inventory<MemoryStore> {
    Inventory::open(MemoryStore::new()).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// ── Happy path ──────────────────────────────────────────────────

#[test]
fn suggestion_pairs_flavor_with_its_priority_carton() {
    let mut inv = inventory();
    inv.add_flavor(flavor("cherry")).unwrap();
    inv.add_carton(carton("sealed", "cherry", 9, false, 3)).unwrap();
    inv.add_carton(carton("opened", "cherry", 9, true, 0)).unwrap();

    let s = inv.suggest(None, &mut rng()).unwrap();
    assert_eq!(s.flavor.id, FlavorId::from_raw("cherry"));
    // The open carton outranks the sealed one.
    assert_eq!(s.carton.id, CartonId::from_raw("opened"));
}

#[test]
fn suggest_then_take_decrements_the_suggested_carton() {
    let mut inv = inventory();
    inv.add_flavor(flavor("cherry")).unwrap();
    inv.add_carton(carton("c1", "cherry", 2, false, 0)).unwrap();

    let s = inv.suggest(None, &mut rng()).unwrap();
    let after = inv.take_from_carton(&s.carton.id).unwrap();
    assert_eq!(after.quantity, 1);
    assert!(after.is_open);
}

#[test]
fn exclude_previous_flavor_avoids_repeat() {
    let mut inv = inventory();
    inv.add_flavor(flavor("cherry")).unwrap();
    inv.add_flavor(flavor("mango")).unwrap();
    inv.add_carton(carton("c1", "cherry", 10, false, 0)).unwrap();
    inv.add_carton(carton("m1", "mango", 10, false, 0)).unwrap();

    let previous = FlavorId::from_raw("cherry");
    let mut rng = rng();
    for _ in 0..50 {
        let s = inv.suggest(Some(&previous), &mut rng).unwrap();
        assert_eq!(s.flavor.id, FlavorId::from_raw("mango"));
    }
}

#[test]
fn suggest_does_not_mutate_inventory() {
    let mut inv = inventory();
    inv.add_flavor(flavor("cherry")).unwrap();
    inv.add_carton(carton("c1", "cherry", 5, false, 0)).unwrap();

    let _ = inv.suggest(None, &mut rng()).unwrap();
    assert_eq!(inv.carton(&CartonId::from_raw("c1")).unwrap().quantity, 5);
    assert!(!inv.carton(&CartonId::from_raw("c1")).unwrap().is_open);
}

// ── Failure causes, most specific first ─────────────────────────

#[test]
fn no_flavors_at_all() {
    let inv = inventory();
    assert_eq!(inv.suggest(None, &mut rng()), Err(SuggestFailure::NoFlavors));
}

#[test]
fn all_flavors_excluded_by_flag() {
    let mut inv = inventory();
    let mut f = flavor("cherry");
    f.exclude_from_random = true;
    inv.add_flavor(f).unwrap();
    inv.add_carton(carton("c1", "cherry", 10, false, 0)).unwrap();

    assert_eq!(
        inv.suggest(None, &mut rng()),
        Err(SuggestFailure::AllFlavorsExcluded)
    );
}

#[test]
fn all_flavors_excluded_counting_the_parameter() {
    let mut inv = inventory();
    inv.add_flavor(flavor("only")).unwrap();
    inv.add_carton(carton("c1", "only", 10, false, 0)).unwrap();

    let previous = FlavorId::from_raw("only");
    assert_eq!(
        inv.suggest(Some(&previous), &mut rng()),
        Err(SuggestFailure::AllFlavorsExcluded)
    );
}

#[test]
fn no_cartons_recorded() {
    let mut inv = inventory();
    inv.add_flavor(flavor("cherry")).unwrap();

    assert_eq!(inv.suggest(None, &mut rng()), Err(SuggestFailure::NoCartons));
}

#[test]
fn all_cartons_empty() {
    let mut inv = inventory();
    inv.add_flavor(flavor("cherry")).unwrap();
    inv.add_carton(carton("c1", "cherry", 0, true, 0)).unwrap();
    inv.add_carton(carton("c2", "cherry", 0, false, 1)).unwrap();

    assert_eq!(inv.suggest(None, &mut rng()), Err(SuggestFailure::OutOfStock));
}

#[test]
fn cartons_of_deleted_flavors_do_not_count_as_stock() {
    let mut inv = inventory();
    inv.add_flavor(flavor("cherry")).unwrap();
    inv.add_carton(carton("ghost", "deleted", 50, false, 0)).unwrap();

    assert_eq!(inv.suggest(None, &mut rng()), Err(SuggestFailure::OutOfStock));
}

#[test]
fn failure_messages_are_distinct() {
    let messages = [
        SuggestFailure::NoFlavors.to_string(),
        SuggestFailure::AllFlavorsExcluded.to_string(),
        SuggestFailure::NoCartons.to_string(),
        SuggestFailure::OutOfStock.to_string(),
    ];
    let unique: std::collections::HashSet<_> = messages.iter().collect();
    assert_eq!(unique.len(), messages.len());
}

#[test]
fn failure_is_stable_across_rng_seeds() {
    let mut inv = inventory();
    inv.add_flavor(flavor("cherry")).unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(inv.suggest(None, &mut rng), Err(SuggestFailure::NoCartons));
    }
}
