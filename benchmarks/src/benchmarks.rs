use super::alternatives::plain_array::PlainArray;
use super::helpers;

use bounded_ord_set::{BoundedOrdSet, CapacityPolicy};
use skiplist::ordered_skiplist::OrderedSkipList;
use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use std::rc::Rc;
use std::time::Instant;

#[derive(Clone, Copy)]
pub struct BenchmarkParams {
    pub n: usize,
    pub measure_every: usize,
    pub num_runs: i32,
    pub all_combatants: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub enum BenchmarkMode {
    Insert,
    Remove,
    Find { recent: bool },
    Union,
}

impl std::fmt::Display for BenchmarkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            BenchmarkMode::Insert => "insert",
            BenchmarkMode::Remove => "remove",
            BenchmarkMode::Find { recent } => {
                if *recent {
                    "find_recent"
                } else {
                    "find_rand"
                }
            }
            BenchmarkMode::Union => "union",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy)]
pub enum GeneratorMode {
    Avg,
    Asc,
    Dsc,
}

impl std::fmt::Display for GeneratorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            GeneratorMode::Avg => "avg",
            GeneratorMode::Asc => "asc",
            GeneratorMode::Dsc => "dsc",
        };
        write!(f, "{}", name)
    }
}

#[allow(clippy::too_many_arguments)]
fn run_generic_benchmark<T, Init, Insert, Remove, GetLen, Find, Union>(
    mode: BenchmarkMode,
    params: BenchmarkParams,
    values: &[i32],
    init: Init,
    insert: Insert,
    remove: Remove,
    get_len: GetLen,
    find: Find,
    union: Union,
) -> Vec<(usize, f64)>
where
    Init: Fn() -> T,
    Insert: Fn(&mut T, i32) -> bool,
    Remove: Fn(&mut T, i32) -> bool,
    GetLen: Fn(&T) -> usize,
    Find: Fn(&T, i32) -> bool,
    Union: Fn(&T, &T) -> usize,
{
    let mut set = init();
    let mut elapsed_times = Vec::with_capacity(values.len() / params.measure_every);

    match mode {
        BenchmarkMode::Insert => {
            let start = Instant::now();
            for (i, x) in values.iter().enumerate() {
                insert(&mut set, *x);

                let len = i + 1;
                if len % params.measure_every == 0 {
                    elapsed_times.push((len, start.elapsed().as_secs_f64()));
                }
            }
            assert_eq!(get_len(&set), values.len());
        }
        BenchmarkMode::Remove => {
            // Insert
            for x in values {
                insert(&mut set, *x);
            }
            assert_eq!(get_len(&set), values.len());

            let values_to_remove = helpers::shuffle_clone(values);

            // Remove
            let start = Instant::now();
            for (i, x) in values_to_remove.iter().enumerate() {
                remove(&mut set, *x);

                let len = i + 1;
                if len % params.measure_every == 0 {
                    elapsed_times.push((len, start.elapsed().as_secs_f64()));
                }
            }
            assert_eq!(get_len(&set), 0);

            // Note: we reverse the elapsed times so that the reported N corresponds to the collection size.
            let mut elapsed_times_reversed = Vec::with_capacity(elapsed_times.len());
            let mut t = 0.0;
            let mut n = 0;
            for i in (0 .. elapsed_times.len()).rev() {
                let (delta_n, delta_t) = if i > 0 {
                    (
                        elapsed_times[i].0 - elapsed_times[i - 1].0,
                        elapsed_times[i].1 - elapsed_times[i - 1].1,
                    )
                } else {
                    elapsed_times[0]
                };
                t += delta_t;
                n += delta_n;
                elapsed_times_reversed.push((n, t));
            }
            elapsed_times = elapsed_times_reversed;
        }
        BenchmarkMode::Find { recent } => {
            let mut total_elapsed = 0.0;
            for (i, x) in values.iter().enumerate() {
                insert(&mut set, *x);

                let len = i + 1;
                if len % params.measure_every == 0 {
                    let search_values_shuffled = if recent {
                        helpers::shuffle_clone(&values[len - params.measure_every .. len])
                    } else {
                        helpers::sample_clone(&values[.. len], params.measure_every)
                    };
                    assert_eq!(search_values_shuffled.len(), params.measure_every);

                    let start = Instant::now();
                    for x in search_values_shuffled {
                        assert!(find(&set, x));
                    }
                    total_elapsed += start.elapsed().as_secs_f64();
                    elapsed_times.push((len, total_elapsed));
                }
            }
            assert_eq!(get_len(&set), values.len());
        }
        BenchmarkMode::Union => {
            let mut total_elapsed = 0.0;
            for (i, x) in values.iter().enumerate() {
                insert(&mut set, *x);

                let len = i + 1;
                if len % params.measure_every == 0 {
                    // Mirrored values are mostly absent from `set`.
                    let mut other = init();
                    for y in helpers::sample_clone(&values[.. len], params.measure_every) {
                        insert(&mut other, -y - 1);
                    }

                    let start = Instant::now();
                    let union_len = union(&set, &other);
                    total_elapsed += start.elapsed().as_secs_f64();
                    assert_eq!(union_len, len + params.measure_every);
                    elapsed_times.push((len, total_elapsed));
                }
            }
        }
    }

    elapsed_times
}

type BenchFunc = Rc<dyn Fn(BenchmarkMode, BenchmarkParams, &[i32]) -> Vec<(usize, f64)>>;

struct AllBenches {
    bench_bounded_ord_set: BenchFunc,
    bench_b_tree: BenchFunc,
    bench_skiplist: BenchFunc,
    bench_plain_array: BenchFunc,
}

impl AllBenches {
    fn new(policy: CapacityPolicy) -> Self {
        let bench_bounded_ord_set = move |mode: BenchmarkMode, params: BenchmarkParams, values: &[i32]| {
            run_generic_benchmark(
                mode,
                params,
                values,
                || BoundedOrdSet::with_policy(0, policy),
                |set, x| set.insert(x).expect("Policy is sized to hold all values."),
                |set, x| set.remove(x).expect("Set never overflows during benchmarks."),
                |set| set.len(),
                |set, x| set.contains(x),
                |a, b| a.union(b).expect("Policy is sized to hold the union.").len(),
            )
        };
        let bench_b_tree = |mode: BenchmarkMode, params: BenchmarkParams, values: &[i32]| {
            run_generic_benchmark(
                mode,
                params,
                values,
                BTreeSet::new,
                |set, x| set.insert(x),
                |set, x| set.remove(&x),
                |set| set.len(),
                |set, x| set.contains(&x),
                |a, b| a.union(b).cloned().collect::<BTreeSet<_>>().len(),
            )
        };
        let bench_skiplist = |mode: BenchmarkMode, params: BenchmarkParams, values: &[i32]| {
            run_generic_benchmark(
                mode,
                params,
                values,
                OrderedSkipList::<i32>::new,
                |set, x| {
                    set.insert(x);
                    true
                },
                |set, x| set.remove(&x).is_some(),
                |set| set.len(),
                |set, x| set.contains(&x),
                |_a, _b| unimplemented!(),
            )
        };
        let bench_plain_array = |mode: BenchmarkMode, params: BenchmarkParams, values: &[i32]| {
            run_generic_benchmark(
                mode,
                params,
                values,
                || PlainArray::new(1024),
                |set, x| set.insert(x),
                |set, x| set.remove(&x),
                |set| set.len(),
                |set, x| set.contains(&x),
                |a, b| a.union(b).len(),
            )
        };
        AllBenches {
            bench_bounded_ord_set: Rc::new(bench_bounded_ord_set),
            bench_b_tree: Rc::new(bench_b_tree),
            bench_skiplist: Rc::new(bench_skiplist),
            bench_plain_array: Rc::new(bench_plain_array),
        }
    }
}

#[derive(Clone)]
struct BenchmarkTask {
    name: String,
    func: BenchFunc,
    run: i32,
}

fn construct_benchmark_tasks(
    all_benches: &AllBenches,
    mode: BenchmarkMode,
    run: i32,
    all_combatants: bool,
) -> Vec<BenchmarkTask> {
    let mut benchmarks: Vec<BenchmarkTask> = vec![
        BenchmarkTask {
            run,
            name: "BoundedOrdSet".to_string(),
            func: all_benches.bench_bounded_ord_set.clone(),
        },
        BenchmarkTask {
            run,
            name: "BTree".to_string(),
            func: all_benches.bench_b_tree.clone(),
        },
    ];
    if all_combatants {
        benchmarks.push(BenchmarkTask {
            run,
            name: "PlainArray".to_string(),
            func: all_benches.bench_plain_array.clone(),
        });
        // Skip lists keep duplicates, so there is no meaningful union to compare.
        if mode != BenchmarkMode::Union {
            benchmarks.push(BenchmarkTask {
                run,
                name: "SkipList".to_string(),
                func: all_benches.bench_skiplist.clone(),
            });
        }
    }
    helpers::shuffle(&mut benchmarks);
    benchmarks
}

pub fn run_benchmarks(mode: BenchmarkMode, params: BenchmarkParams, gen_mode: GeneratorMode) {
    if cfg!(debug_assertions) {
        log::warn!("Debug assertions are enabled. Benchmarking should be done in `--release`.");
    }
    log::info!("Running benchmark...");
    log::info!("    Benchmark mode: {}", mode);
    log::info!("    Generator mode: {}", gen_mode);
    log::info!("    N: {}", params.n);
    log::info!("    Measure every: {}", params.measure_every);
    log::info!("    Num runs: {}", params.num_runs);
    let n = params.n;

    // Union results hold up to `n + measure_every` values.
    let all_benches = AllBenches::new(helpers::policy_for(n + params.measure_every));

    for run in 0 ..= params.num_runs {
        let benchmark_tasks = construct_benchmark_tasks(&all_benches, mode, run, params.all_combatants);

        let values: Vec<i32> = match gen_mode {
            GeneratorMode::Avg => helpers::gen_rand_values_i32(n),
            GeneratorMode::Asc => (0 .. n as i32).collect(),
            GeneratorMode::Dsc => (0 .. n as i32).rev().collect(),
        };
        assert_eq!(values.len(), n);

        for benchmark_task in benchmark_tasks {
            log::info!(
                "Running benchmark task: {} / {}",
                benchmark_task.name, benchmark_task.run
            );

            let measurements = (benchmark_task.func)(mode, params, &values);

            // Use zero-th iteration for warm up
            if run > 0 {
                let iters: Vec<_> = measurements.iter().map(|i_t| i_t.0).collect();
                let times: Vec<_> = measurements.iter().map(|i_t| i_t.1).collect();
                helpers::export_elapsed_times(
                    &benchmark_task.name,
                    benchmark_task.run,
                    &mode.to_string(),
                    &gen_mode.to_string(),
                    params.n,
                    params.measure_every,
                    &format!(
                        "results/{}_{}_{}_{}.json",
                        mode, gen_mode, benchmark_task.name, benchmark_task.run
                    ),
                    &iters,
                    &times,
                );
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_modes_smoke() {
        let params = BenchmarkParams {
            n: 200,
            measure_every: 20,
            num_runs: 0,
            all_combatants: true,
        };
        let all_benches = AllBenches::new(helpers::policy_for(params.n + params.measure_every));
        let values = helpers::gen_rand_values_i32(params.n);
        for mode in vec![
            BenchmarkMode::Insert,
            BenchmarkMode::Remove,
            BenchmarkMode::Find { recent: true },
            BenchmarkMode::Find { recent: false },
            BenchmarkMode::Union,
        ] {
            for task in construct_benchmark_tasks(&all_benches, mode, 0, true) {
                let measurements = (task.func)(mode, params, &values);
                assert_eq!(measurements.len(), params.n / params.measure_every, "{} {}", task.name, mode);
            }
        }
    }
}
