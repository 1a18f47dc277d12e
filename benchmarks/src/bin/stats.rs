use clap::{value_t_or_exit, App, Arg};

use bounded_ord_set::{BoundedOrdSet, CapacityPolicy, OrdSetError, DEFAULT_MAX_CAPACITY, DEFAULT_MAX_RESIZES, DEFAULT_MIN_INCREMENT};
use bounded_ord_set_benchmarks::helpers;

fn run_fill_statistics() {
    let default_increment = DEFAULT_MIN_INCREMENT.to_string();
    let default_max_capacity = DEFAULT_MAX_CAPACITY.to_string();
    let default_max_resizes = DEFAULT_MAX_RESIZES.to_string();

    #[rustfmt::skip]
    let matches = App::new("Fill statistics")
        .arg(Arg::with_name("n")
                 .long("num-elements")
                 .short("n")
                 .default_value("12")
                 .help("Number of distinct values to insert"))
        .arg(Arg::with_name("increment")
                 .long("increment")
                 .short("i")
                 .default_value(&default_increment)
                 .help("Capacity increment"))
        .arg(Arg::with_name("max-capacity")
                 .long("max-capacity")
                 .short("c")
                 .default_value(&default_max_capacity)
                 .help("Capacity ceiling"))
        .arg(Arg::with_name("max-resizes")
                 .long("max-resizes")
                 .short("r")
                 .default_value(&default_max_resizes)
                 .help("Maximum number of resizes"))
        .get_matches();

    let n = value_t_or_exit!(matches, "n", usize);
    let policy = match CapacityPolicy::new(
        value_t_or_exit!(matches, "increment", usize),
        value_t_or_exit!(matches, "max-capacity", usize),
        value_t_or_exit!(matches, "max-resizes", usize),
    ) {
        Ok(policy) => policy,
        Err(err) => {
            clap::Error::with_description(&err.to_string(), clap::ErrorKind::InvalidValue).exit()
        }
    };

    let values = helpers::gen_rand_values_i32(n);
    let mut set = BoundedOrdSet::with_policy(0, policy);

    let mut iters = Vec::new();
    let mut lens = Vec::new();
    let mut capacities = Vec::new();
    let mut resize_counts = Vec::new();
    let mut overflow_at = None;

    log::info!("Inserting {} values with {:?}", n, policy);
    for (i, x) in values.iter().enumerate() {
        match set.insert(*x) {
            Ok(_) => {}
            Err(OrdSetError::Overflow) => {
                log::info!("Overflow after {} inserts", i);
                overflow_at = Some(i + 1);
                break;
            }
            Err(err) => panic!("Unexpected error: {}", err),
        }
        iters.push(i + 1);
        lens.push(set.len());
        capacities.push(set.capacity());
        resize_counts.push(set.resize_count());
    }

    log::info!("Final set: {}", set);
    helpers::export_stats(&iters, &lens, &capacities, &resize_counts, overflow_at);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_fill_statistics();
}
