//! Model-based property tests.
//!
//! These tests generate random operation sequences and verify that the real
//! controller behaves identically to the reference model, while every
//! standard invariant holds after each step.
//!
//! ```text
//! proptest generates: Vec<Operation>
//!                          │
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!      ModelKiosk      SimWorld        Compare
//!      (reference)   (SimAdapter)      Results
//! ```

use lockdown_harness::{
    Capability, InvariantRegistry, KeyChoice, ModelKiosk, Operation, SimAdapter, SimWorld,
};
use proptest::prelude::*;

fn capability_strategy() -> impl Strategy<Value = Capability> {
    prop_oneof![Just(Capability::Granted), Just(Capability::Denied), Just(Capability::Unsupported)]
}

fn key_strategy() -> impl Strategy<Value = KeyChoice> {
    prop_oneof![
        Just(KeyChoice::Back),
        Just(KeyChoice::Home),
        Just(KeyChoice::AppSwitch),
        Just(KeyChoice::Menu),
        Just(KeyChoice::Power),
        Just(KeyChoice::VolumeUp),
        Just(KeyChoice::VolumeDown),
        Just(KeyChoice::IncomingCall),
        Just(KeyChoice::EndCall),
        any::<u8>().prop_map(KeyChoice::Other),
    ]
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<bool>().prop_map(Operation::SetActive),
        4 => (key_strategy(), any::<bool>())
            .prop_map(|(key, release)| Operation::Key { key, release }),
        2 => any::<bool>().prop_map(|user_leaving| Operation::Lifecycle { user_leaving }),
        1 => Just(Operation::RevokeLock),
        1 => capability_strategy().prop_map(Operation::SetCapability),
    ]
}

proptest! {
    #[test]
    fn prop_controller_matches_model(
        capability in capability_strategy(),
        ops in prop::collection::vec(operation_strategy(), 0..60),
    ) {
        let mut model = ModelKiosk::new();
        let mut world = SimWorld::new(SimAdapter::new(capability));
        let invariants = InvariantRegistry::standard();

        for op in &ops {
            let expected = model.apply(op);
            let actual = world.apply(op);
            prop_assert_eq!(expected, actual, "diverged on {:?}", op);
            prop_assert!(invariants.check_all(&world.snapshot()).is_ok());
        }

        prop_assert_eq!(model.is_active(), world.controller().state().is_active());
    }

    #[test]
    fn prop_set_active_is_idempotent(
        capability in capability_strategy(),
        active in any::<bool>(),
        repeats in 1usize..5,
    ) {
        let mut once = SimWorld::new(SimAdapter::new(capability));
        once.apply(&Operation::SetActive(active));

        let mut many = SimWorld::new(SimAdapter::new(capability));
        for _ in 0..repeats {
            many.apply(&Operation::SetActive(active));
        }

        prop_assert_eq!(once.controller().state(), many.controller().state());
        prop_assert_eq!(once.adapter().lock_held(), many.adapter().lock_held());
        prop_assert_eq!(once.adapter().surfaces_hidden(), many.adapter().surfaces_hidden());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariants_hold_under_run(ops in prop::collection::vec(operation_strategy(), 0..100)) {
        let mut world = SimWorld::new(SimAdapter::granted());
        world.run(&ops, &InvariantRegistry::standard());
    }
}
