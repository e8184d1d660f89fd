//! Property-based tests for step ordering and key casing
//!
//! The projector is checked against a direct simulation of its steps on an
//! ordered map.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use structomap_core::casing::to_snake_case;
use structomap_core::{Projector, ProjectorConfig};

const FIELDS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone)]
enum Step {
    PickAll,
    Pick(usize),
    Omit(usize),
    Add(usize, i64),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::PickAll),
        (0..FIELDS.len()).prop_map(Step::Pick),
        (0..FIELDS.len()).prop_map(Step::Omit),
        (0..FIELDS.len(), -100i64..100).prop_map(|(i, v)| Step::Add(i, v)),
    ]
}

fn record() -> Value {
    json!({"A": 1, "B": 2, "C": 3, "D": 4})
}

fn simulate(steps: &[Step]) -> BTreeMap<String, Value> {
    let record = record();
    let mut model = BTreeMap::new();
    for step in steps {
        match step {
            Step::PickAll => {
                model = FIELDS
                    .iter()
                    .map(|f| (f.to_string(), record[*f].clone()))
                    .collect();
            }
            Step::Pick(i) => {
                model.insert(FIELDS[*i].to_string(), record[FIELDS[*i]].clone());
            }
            Step::Omit(i) => {
                model.remove(FIELDS[*i]);
            }
            Step::Add(i, v) => {
                model.insert(FIELDS[*i].to_string(), json!(v));
            }
        }
    }
    model
}

proptest! {
    #[test]
    fn prop_steps_match_simulation(steps in prop::collection::vec(step_strategy(), 0..12)) {
        let mut projector = Projector::<Value>::with_config(&ProjectorConfig::default());
        for step in &steps {
            match step {
                Step::PickAll => projector.pick_all(),
                Step::Pick(i) => projector.pick([FIELDS[*i]]),
                Step::Omit(i) => projector.omit([FIELDS[*i]]),
                Step::Add(i, v) => projector.add(FIELDS[*i], *v),
            };
        }

        let result: BTreeMap<String, Value> = projector
            .transform(&record())
            .unwrap()
            .into_iter()
            .collect();
        prop_assert_eq!(result, simulate(&steps));
    }

    #[test]
    fn prop_snake_case_is_idempotent(key in "[A-Za-z0-9_]{0,24}") {
        let once = to_snake_case(&key);
        prop_assert_eq!(to_snake_case(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_ascii_uppercase()));
    }
}
