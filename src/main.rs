use toroidal_life::config::{DEFAULT_FILL_PROBABILITY, DEFAULT_HEIGHT, DEFAULT_WIDTH};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Toroidal Life");
    log::info!("Board size: {}x{}", DEFAULT_WIDTH, DEFAULT_HEIGHT);

    let outcome = toroidal_life::run_simulation(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_FILL_PROBABILITY);

    log::info!(
        "Done: {:?} after {} generations",
        outcome.termination,
        outcome.generations
    );
}
