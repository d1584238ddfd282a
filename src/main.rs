/* 3rd party libraries */
use clap::Parser;
use log::error;

/* Custom libraries */
use config::SimConfig;
use shared::ElevatorState;
use simulation::Simulator;

/* Modules */
mod config;
mod shared;
mod simulation;

const USAGE: &str = "\
Usage: elevator-sim start=int floor=int(,int)*
Simulate an elevator visiting the floors of a building, then
output the total travel time and the list of floors visited.
";

/// Elevator travel-time simulator
#[derive(Parser, Debug)]
#[clap(name = "elevator-sim", version, about, long_about = None)]
struct Args {
    /// Simulation parameters: start=<floor> and floor=<floor>(,<floor>)*
    #[clap(value_name = "PARAM")]
    params: Vec<String>,
}

/* Main */
fn main() {
    env_logger::init();

    let args = Args::parse();

    // No parameters at all means the caller wants the usage text
    if args.params.is_empty() {
        print!("{}", USAGE);
        return;
    }

    let config = SimConfig::default();
    let mut state = ElevatorState::new();

    // Set values of start and floor params
    crate::unwrap_or_exit!(simulation::parse_params(&mut state, &args.params));

    // Run the simulation
    let simulator = Simulator::new(&config);
    simulator.run(&mut state);

    // Report the results
    let report = crate::unwrap_or_exit!(simulation::render(&state, &config));
    println!("{}", report);
}
