use clap::{value_t_or_exit, App, AppSettings, Arg};

use bounded_ord_set_benchmarks::benchmarks::{BenchmarkMode, BenchmarkParams, GeneratorMode, run_benchmarks};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[rustfmt::skip]
    let matches = App::new("Benchmark runner")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(Arg::with_name("bench-mode")
                 .long("bench-mode")
                 .short("b")
                 .default_value("insert")
                 .possible_values(&["insert", "remove", "find_recent", "find_rand", "union"])
                 .help("Benchmark mode"))
        .arg(Arg::with_name("gen-mode")
                 .long("gen-mode")
                 .short("g")
                 .default_value("avg")
                 .possible_values(&["avg", "asc", "dsc"])
                 .help("Generator mode"))
        .arg(Arg::with_name("n")
                 .long("num-elements")
                 .short("n")
                 .default_value("10000")
                 .help("Number of elements"))
        .arg(Arg::with_name("measure-every")
                 .long("measure-every")
                 .short("m")
                 .default_value("25")
                 .help("Measurement interval"))
        .arg(Arg::with_name("num-runs")
                 .long("num-runs")
                 .short("r")
                 .default_value("3")
                 .help("Number of measured runs (an extra warm up run is always added)"))
        .arg(Arg::with_name("all-combatants")
                 .long("all-combatants")
                 .short("a")
                 .help("Also run the plain array and skip list"))
        .get_matches();

    let bench_mode = match matches.value_of("bench-mode").unwrap_or("insert") {
        "insert" => BenchmarkMode::Insert,
        "remove" => BenchmarkMode::Remove,
        "find_recent" => BenchmarkMode::Find { recent: true },
        "find_rand" => BenchmarkMode::Find { recent: false },
        "union" => BenchmarkMode::Union,
        _ => panic!("Illegal benchmark mode"),
    };
    let gen_mode = match matches.value_of("gen-mode").unwrap_or("avg") {
        "avg" => GeneratorMode::Avg,
        "asc" => GeneratorMode::Asc,
        "dsc" => GeneratorMode::Dsc,
        _ => panic!("Illegal generator mode"),
    };

    let bench_params = BenchmarkParams {
        n: value_t_or_exit!(matches, "n", usize),
        measure_every: value_t_or_exit!(matches, "measure-every", usize),
        num_runs: value_t_or_exit!(matches, "num-runs", i32),
        all_combatants: matches.is_present("all-combatants"),
    };
    if bench_params.measure_every == 0 || bench_params.measure_every > bench_params.n {
        clap::Error::with_description(
            "measure-every must be in 1..=num-elements",
            clap::ErrorKind::InvalidValue,
        )
        .exit();
    }

    run_benchmarks(bench_mode, bench_params, gen_mode);
}
