//! Property-based tests for the UI handle registry
//!
//! Random mount/unmount sequences are checked against a simple model: a
//! column resolves to the handle of its most recent registration while that
//! registration is alive, and to nothing otherwise.

use std::collections::HashMap;

use colboard_core::{ColumnId, Registration, Registry, RegistryError};
use proptest::prelude::*;

const COLUMNS: [&str; 3] = ["confluence", "jira", "trello"];

#[derive(Debug, Clone)]
enum RegistryOp {
    /// Mount a view of the column
    Register(usize),
    /// Unmount the n-th registration made so far (modulo count)
    Cleanup(usize),
}

fn op_strategy() -> impl Strategy<Value = RegistryOp> {
    prop_oneof![
        (0..COLUMNS.len()).prop_map(RegistryOp::Register),
        any::<usize>().prop_map(RegistryOp::Cleanup),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    #[test]
    fn prop_registry_matches_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let registry: Registry<u32> = Registry::new();
        let mut registrations: Vec<Option<Registration<u32>>> = Vec::new();
        // column index -> (registration slot, handle) of the latest registration
        let mut latest: HashMap<usize, (usize, u32)> = HashMap::new();

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                RegistryOp::Register(column) => {
                    let handle = u32::try_from(step).unwrap();
                    registrations.push(Some(registry.register(COLUMNS[column], handle)));
                    latest.insert(column, (registrations.len() - 1, handle));
                }
                RegistryOp::Cleanup(n) => {
                    if !registrations.is_empty() {
                        let slot = n % registrations.len();
                        if let Some(registration) = registrations[slot].take() {
                            registration.cleanup();
                        }
                    }
                }
            }

            for (column, name) in COLUMNS.iter().enumerate() {
                let id = ColumnId::from(*name);
                let expected = latest
                    .get(&column)
                    .filter(|(slot, _)| registrations[*slot].is_some())
                    .map(|(_, handle)| *handle);
                match expected {
                    Some(handle) => prop_assert_eq!(registry.lookup(&id), Ok(handle)),
                    None => prop_assert_eq!(
                        registry.lookup(&id),
                        Err(RegistryError::NotFound(id.clone()))
                    ),
                }
            }
        }
    }
}

#[test]
fn stale_cleanup_keeps_remounted_handle() {
    let registry: Registry<&str> = Registry::new();
    let first = registry.register("jira", "old");
    let _second = registry.register("jira", "new");

    first.cleanup();
    assert_eq!(registry.lookup(&ColumnId::from("jira")), Ok("new"));
}
