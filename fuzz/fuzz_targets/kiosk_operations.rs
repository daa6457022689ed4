//! Fuzz target for the kiosk controller
//!
//! Drives arbitrary sequences of commands, key events, lifecycle signals and
//! platform-side changes through a controller on a simulated platform.
//!
//! # Strategy
//!
//! - Start capability: granted, denied or unsupported
//! - Config: fallback and window protection toggled
//! - Operations: interleaved freely, including lock revocation
//!
//! # Invariants
//!
//! - Every standard harness invariant holds after every step
//! - Real controller matches the reference model step by step
//! - Call keys are never consumed

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lockdown_core::{KioskConfig, WindowProtection};
use lockdown_harness::{Capability, InvariantRegistry, ModelKiosk, Operation, SimAdapter, SimWorld};

#[derive(Debug, Arbitrary)]
struct KioskScenario {
    capability: Capability,
    foreground_fallback: bool,
    secure_surface: bool,
    keep_screen_on: bool,
    operations: Vec<Operation>,
}

fuzz_target!(|scenario: KioskScenario| {
    let config = KioskConfig {
        window_protection: WindowProtection {
            secure_surface: scenario.secure_surface,
            keep_screen_on: scenario.keep_screen_on,
        },
        foreground_fallback: scenario.foreground_fallback,
    };
    let mut world = SimWorld::with_config(SimAdapter::new(scenario.capability), config);
    let mut model = ModelKiosk::new();
    let invariants = InvariantRegistry::standard();

    for (step, op) in scenario.operations.iter().enumerate() {
        let expected = model.apply(op);
        let actual = world.apply(op);
        assert_eq!(expected, actual, "model divergence at step {step}: {op:?}");
        invariants.assert_all(&world.snapshot(), &format!("step {step}"));
    }
});
