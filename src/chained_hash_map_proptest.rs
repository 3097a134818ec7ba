#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they sit next
// to the structure they check.

use crate::chained_hash_map::ChainedHashMap;
use crate::config::MapConfig;
use crate::hash::{bucket_index, rolling_hash};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Remove(usize),
    Get(usize),
    Has(String),
    Mutate(usize, i32),
    Clear,
    Iterate,
}

fn arb_ops(pool: Vec<String>) -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    let idx = proptest::sample::select((0..pool.len()).collect::<Vec<_>>());
    let has_pool = proptest::sample::select(pool.clone());
    let op = prop_oneof![
        6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
        2 => idx.clone().prop_map(OpI::Remove),
        2 => idx.clone().prop_map(OpI::Get),
        1 => prop_oneof![has_pool, "[a-z]{0,5}"].prop_map(OpI::Has),
        1 => (idx, any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
        1 => Just(OpI::Clear),
        1 => Just(OpI::Iterate),
    ];
    proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=40).prop_flat_map(arb_ops)
}

// Every key built from equal numbers of "Aa"/"BB" blocks hashes identically.
fn arb_colliding_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec(
        proptest::collection::vec(prop_oneof![Just("Aa"), Just("BB")], 3)
            .prop_map(|blocks| blocks.concat()),
        1..=8,
    )
    .prop_flat_map(arb_ops)
}

fn check_structure(sut: &ChainedHashMap<i32>) -> Result<(), TestCaseError> {
    let cap = sut.capacity();
    prop_assert!(cap.is_power_of_two());
    let mut total = 0;
    for (idx, chain) in sut.buckets().enumerate() {
        for e in chain {
            prop_assert_eq!(bucket_index(rolling_hash(e.key()), cap), idx);
        }
        total += chain.len();
    }
    prop_assert_eq!(total, sut.len());
    prop_assert_eq!(sut.keys().count(), sut.len());
    prop_assert!((sut.len() as f64) < cap as f64 * sut.load_factor() + 1.0);
    Ok(())
}

fn run(
    mut sut: ChainedHashMap<i32>,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut last_cap = sut.capacity();

    for op in ops {
        match op {
            OpI::Set(i, v) => {
                let k = pool[i].clone();
                let before = sut.len();
                let prev = sut.set(k.clone(), v);
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                prop_assert_eq!(sut.len(), before + usize::from(prev.is_none()));
                prop_assert_eq!(sut.get(&k), Some(&v));
                prop_assert!(sut.has(&k));
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                let before = sut.len();
                let got = sut.remove(k);
                prop_assert_eq!(got, model.remove(k));
                prop_assert_eq!(sut.len(), before - usize::from(got.is_some()));
                prop_assert!(!sut.has(k));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Has(s) => {
                prop_assert_eq!(sut.has(&s), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                if let Some(v) = sut.get_mut(k) {
                    *v = v.saturating_add(d);
                    let mv = model.get_mut(k).expect("present in model");
                    *mv = mv.saturating_add(d);
                } else {
                    prop_assert!(!model.contains_key(k));
                }
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), last_cap);
            }
            OpI::Iterate => {
                let s: BTreeSet<(String, i32)> =
                    sut.entries().map(|(k, v)| (k.to_string(), *v)).collect();
                let m: BTreeSet<(String, i32)> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(s, m);
            }
        }

        // Post-conditions after each op
        prop_assert!(sut.capacity() >= last_cap);
        last_cap = sut.capacity();
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        check_structure(&sut)?;
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` returns the replaced value and only grows `len` for new keys.
// - `get`/`has`/`remove` agree with the model.
// - Every entry lives in the bucket its hash selects for the current capacity.
// - Capacity is a power of two, never shrinks, and keeps `len` under the threshold.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run(ChainedHashMap::new(), pool, ops)?;
    }
}

// Property: Same invariants with every pool key hashing identically and a
// single starting bucket, so all entries share one chain and growth runs
// from the first insert.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_colliding_scenario()) {
        let cfg = MapConfig::new().with_initial_capacity(1).with_load_factor(1.0);
        let sut = ChainedHashMap::with_config(cfg);
        run(sut, pool, ops)?;
    }
}
