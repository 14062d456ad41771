//! Predicate/filter equivalence tests
//!
//! The tenant scope resolver renders one ownership rule set as two views: a
//! single-entity predicate and a declarative collection filter. These tests
//! hold the two views to exact agreement, first over an exhaustive fixture
//! grid covering every rule branch, then property-based over arbitrary
//! attribute combinations, under both scope policies.

use clinic_authz::{
    ActorContext, ActorId, ClinicId, EntityOwnership, Role, ScopeConfig, TenantScope,
};
use proptest::prelude::*;
use uuid::Uuid;

fn actor_id(n: u128) -> ActorId {
    ActorId::from_uuid(Uuid::from_u128(n))
}

fn clinic_id(n: u128) -> ClinicId {
    ClinicId::from_uuid(Uuid::from_u128(n))
}

fn scope(strict: bool) -> TenantScope {
    TenantScope::new(&ScopeConfig {
        strict_clinic_attribution: strict,
    })
}

/// Every role, including the dynamic-input catch-all
fn all_roles() -> [Role; 6] {
    [
        Role::Administrator,
        Role::Clinician,
        Role::Hygienist,
        Role::FrontDesk,
        Role::ExternalPractitioner,
        Role::Unknown,
    ]
}

fn id_choices() -> [Option<ActorId>; 3] {
    [None, Some(actor_id(1)), Some(actor_id(2))]
}

fn clinic_choices() -> [Option<ClinicId>; 3] {
    [None, Some(clinic_id(1)), Some(clinic_id(2))]
}

/// Exhaustive cross product of actor and entity attribute fixtures
fn fixture_universe() -> (Vec<ActorContext>, Vec<EntityOwnership>) {
    let mut actors = Vec::new();
    for role in all_roles() {
        for external in [false, true] {
            for actor_clinic in clinic_choices() {
                actors.push(ActorContext::new(actor_id(1), role, external, actor_clinic));
            }
        }
    }

    let mut entities = Vec::new();
    for owner in id_choices() {
        for created_by_external in [false, true] {
            for entity_clinic in clinic_choices() {
                entities.push(EntityOwnership::new(owner, created_by_external, entity_clinic));
            }
        }
    }

    (actors, entities)
}

#[test]
fn test_filter_and_predicate_agree_on_every_fixture() {
    let (actors, entities) = fixture_universe();

    for strict in [false, true] {
        let resolver = scope(strict);
        for actor in &actors {
            let filter = resolver.scope_filter(actor);
            for entity in &entities {
                assert_eq!(
                    resolver.can_access(actor, entity),
                    filter.matches(entity),
                    "views diverged: strict={} actor={:?} entity={:?} filter={:?}",
                    strict,
                    actor,
                    entity,
                    filter
                );
            }
        }
    }
}

#[test]
fn test_filtered_collection_equals_predicate_selection() {
    // List-style check: applying the filter to an entity universe must
    // select exactly the ids the predicate approves, in both directions.
    let (actors, entities) = fixture_universe();
    let universe: Vec<(usize, &EntityOwnership)> = entities.iter().enumerate().collect();

    for strict in [false, true] {
        let resolver = scope(strict);
        for actor in &actors {
            let filter = resolver.scope_filter(actor);

            let filtered: Vec<usize> = universe
                .iter()
                .filter(|(_, entity)| filter.matches(entity))
                .map(|(id, _)| *id)
                .collect();
            let predicate_approved: Vec<usize> = universe
                .iter()
                .filter(|(_, entity)| resolver.can_access(actor, entity))
                .map(|(id, _)| *id)
                .collect();

            assert_eq!(filtered, predicate_approved);
        }
    }
}

#[test]
fn test_external_practitioners_are_disjoint_tenants() {
    let resolver = scope(false);
    let practitioner_a = ActorContext::new(actor_id(1), Role::ExternalPractitioner, true, None);
    let practitioner_b = ActorContext::new(actor_id(2), Role::ExternalPractitioner, true, None);

    let (_, entities) = fixture_universe();
    for entity in &entities {
        // No entity is visible to both independent practices.
        assert!(
            !(resolver.can_access(&practitioner_a, entity)
                && resolver.can_access(&practitioner_b, entity)),
            "entity visible across independent tenants: {:?}",
            entity
        );
    }
}

#[test]
fn test_no_staff_actor_ever_sees_external_entities() {
    let (actors, entities) = fixture_universe();

    for strict in [false, true] {
        let resolver = scope(strict);
        for actor in actors.iter().filter(|actor| !actor.is_external()) {
            for entity in entities.iter().filter(|entity| entity.created_by_external) {
                assert!(!resolver.can_access(actor, entity));
                assert!(!resolver.scope_filter(actor).matches(entity));
            }
        }
    }
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Administrator),
        Just(Role::Clinician),
        Just(Role::Hygienist),
        Just(Role::FrontDesk),
        Just(Role::ExternalPractitioner),
        Just(Role::Unknown),
    ]
}

/// Small id pool so owner/actor and clinic collisions actually occur
fn actor_id_strategy() -> impl Strategy<Value = ActorId> {
    (0u128..4).prop_map(actor_id)
}

fn clinic_strategy() -> impl Strategy<Value = Option<ClinicId>> {
    proptest::option::of((0u128..3).prop_map(clinic_id))
}

proptest! {
    #[test]
    fn prop_filter_matches_predicate(
        role in role_strategy(),
        external in any::<bool>(),
        acting_id in actor_id_strategy(),
        actor_clinic in clinic_strategy(),
        owner in proptest::option::of(actor_id_strategy()),
        created_by_external in any::<bool>(),
        entity_clinic in clinic_strategy(),
        strict in any::<bool>(),
    ) {
        let resolver = scope(strict);
        let actor = ActorContext::new(acting_id, role, external, actor_clinic);
        let entity = EntityOwnership::new(owner, created_by_external, entity_clinic);

        prop_assert_eq!(
            resolver.can_access(&actor, &entity),
            resolver.scope_filter(&actor).matches(&entity)
        );
    }

    #[test]
    fn prop_unknown_staff_role_is_always_denied(
        actor_clinic in clinic_strategy(),
        owner in proptest::option::of(actor_id_strategy()),
        created_by_external in any::<bool>(),
        entity_clinic in clinic_strategy(),
        strict in any::<bool>(),
    ) {
        let resolver = scope(strict);
        let actor = ActorContext::new(actor_id(0), Role::Unknown, false, actor_clinic);
        let entity = EntityOwnership::new(owner, created_by_external, entity_clinic);

        prop_assert!(!resolver.can_access(&actor, &entity));
    }
}
