/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
/// Failures surfaced by the simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A parameter value expected to be an integer literal was not one.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A result needs more decimal digits than the output ceiling allows.
    #[error("output too large: {digits} digits exceeds the limit of {max}")]
    OutputTooLarge { digits: usize, max: usize },
}
