//! Provides a set of patterns useful for testing and benchmarking the sort engine.
//! Patterns are generated as i32 values and turned into [`Value`] collections of every
//! comparable class with the `*_values` adapters.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::OnceCell;
use rand::prelude::*;

use crate::value::{Mapping, Slice, Value};

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = rand::rngs::StdRng::from(new_seed());

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

// --- Value adapters ---

pub fn int_values(pattern: &[i32]) -> Vec<Value> {
    pattern.iter().map(|&val| Value::Int(val.into())).collect()
}

pub fn uint_values(pattern: &[i32]) -> Vec<Value> {
    pattern
        .iter()
        .map(|&val| {
            // Shifts the value into the unsigned range, while preserving input order.
            Value::Uint(((val as i64) + (i32::MAX as i64) + 1) as u64)
        })
        .collect()
}

pub fn float_values(pattern: &[i32]) -> Vec<Value> {
    pattern
        .iter()
        .map(|&val| Value::Float(f64::from(val) / 4.0))
        .collect()
}

pub fn string_values(pattern: &[i32]) -> Vec<Value> {
    pattern
        .iter()
        .map(|&val| Value::Str(format!("{val}")))
        .collect()
}

pub fn time_values(pattern: &[i32]) -> Vec<Value> {
    pattern.iter().map(|&val| Value::Time(timestamp(val))).collect()
}

/// String-keyed mappings holding the pattern value under `key` and its position under `pos`.
pub fn keyed_map_values(pattern: &[i32]) -> Vec<Value> {
    pattern
        .iter()
        .enumerate()
        .map(|(i, &val)| {
            Value::Map(Mapping::from_iter([
                ("key", Value::Int(val.into())),
                ("pos", Value::Uint(i as u64)),
            ]))
        })
        .collect()
}

/// Two element slices holding the pattern value at index 0 and its position at index 1.
pub fn keyed_slice_values(pattern: &[i32]) -> Vec<Value> {
    pattern
        .iter()
        .enumerate()
        .map(|(i, &val)| Value::Slice(Slice(vec![Value::Int(val.into()), Value::Uint(i as u64)])))
        .collect()
}

/// Wraps every other element in an indirection layer.
pub fn with_pointers(values: Vec<Value>) -> Vec<Value> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, val)| if i % 2 == 0 { Value::ptr(val) } else { val })
        .collect()
}

pub fn timestamp(secs: i32) -> DateTime<Utc> {
    Utc.timestamp_opt(secs.into(), 0).single().unwrap_or_default()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, the tests print it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = rand::rngs::StdRng::from(new_seed());

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
