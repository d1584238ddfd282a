pub mod errors;
pub mod macros;
pub mod structs;

pub use errors::SimError;
pub use structs::ElevatorState;
