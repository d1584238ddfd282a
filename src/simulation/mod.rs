pub mod formatter;
pub mod parser;
pub mod simulator;

pub mod simulator_tests;

pub use formatter::render;
pub use parser::parse_params;
pub use simulator::Simulator;
