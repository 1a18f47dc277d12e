use std::fs::{create_dir_all, File};
use std::path::Path;
use serde_json::json;

use rand::seq::SliceRandom;
use rand::thread_rng;

use bounded_ord_set::CapacityPolicy;

/// Generates `n` distinct values in random order.
pub fn gen_rand_values_i32(n: usize) -> Vec<i32> {
    let mut values: Vec<i32> = (0 .. n as i32).map(|x| x * 2).collect();
    shuffle(&mut values);
    values
}

/// A policy under which `n` distinct values fit without overflowing.
pub fn policy_for(n: usize) -> CapacityPolicy {
    let min_increment = 512;
    let blocks = (n / min_increment + 1).max(1);
    CapacityPolicy::new(min_increment, blocks * min_increment, blocks)
        .expect("Increment divides the ceiling by construction.")
}

#[allow(clippy::too_many_arguments)]
pub fn export_elapsed_times(
    name: &str,
    run: i32,
    mode: &str,
    gen_mode: &str,
    n: usize,
    measure_every: usize,
    filename: &str,
    iters: &[usize],
    times: &[f64],
) {
    let json_data = json!({
        "name": name,
        "run": run,
        "mode": mode,
        "gen_mode": gen_mode,
        "n": n,
        "measure_every": measure_every,
        "iters": iters,
        "times": times,
    });
    write_json(filename, &json_data);
}

pub fn export_stats(
    iters: &[usize],
    lens: &[usize],
    capacities: &[usize],
    resize_counts: &[usize],
    overflow_at: Option<usize>,
) {
    let json_data = json!({
        "iters": iters,
        "lens": lens,
        "capacities": capacities,
        "resize_counts": resize_counts,
        "overflow_at": overflow_at,
    });
    write_json("results/fill_stats.json", &json_data);
}

fn write_json(filename: &str, json_data: &serde_json::Value) {
    let path = Path::new(filename);
    if let Some(parent) = path.parent() {
        create_dir_all(parent).expect("Unable to create results directory.");
    }

    let f = File::create(path).expect("Unable to create json file.");
    serde_json::to_writer_pretty(f, json_data).expect("Unable to write json file.");
    log::info!("Exported {}", filename);
}

pub fn shuffle<T>(v: &mut [T]) {
    let mut rng = thread_rng();
    v.shuffle(&mut rng);
}

pub fn shuffle_clone<T>(v: &[T]) -> Vec<T>
where
    T: Clone,
{
    let mut v_cloned = v.to_vec();
    shuffle(&mut v_cloned);
    v_cloned
}

pub fn sample_clone<T>(v: &[T], amount: usize) -> Vec<T>
where
    T: Clone,
{
    let mut rng = thread_rng();
    v.choose_multiple(&mut rng, amount).cloned().collect()
}
