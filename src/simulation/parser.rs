/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use num_bigint::BigInt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ElevatorState;
use crate::shared::SimError;

// Names of the recognized command line parameters
const START_ARG: &str = "start";
const FLOOR_ARG: &str = "floor";

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Applies `key=value` parameters to an elevator state.
 *
 * Tokens are processed strictly in input order and the last write to a key
 * wins. Tokens without a `=`, and tokens with an unrecognized key, are
 * skipped without error. Keys match exactly: `"floor "` with a trailing
 * space is not `"floor"` and is skipped rather than trimmed.
 *
 * - `start=<int>` overwrites the start floor.
 * - `floor=<int>(,<int>)*` replaces the whole requested floor list.
 *
 * A value that fails to parse as an integer aborts with
 * `SimError::InvalidNumber`. Earlier tokens stay applied; the failing token
 * itself is applied either fully or not at all.
 */
pub fn parse_params(state: &mut ElevatorState, params: &[String]) -> Result<(), SimError> {
    for param in params {
        match param.split_once('=') {
            Some((START_ARG, value)) => {
                state.start_floor = parse_floor(value)?;
            }
            Some((FLOOR_ARG, value)) => {
                state.requested_floors = value
                    .split(',')
                    .map(parse_floor)
                    .collect::<Result<Vec<BigInt>, SimError>>()?;
            }
            Some((key, _)) => {
                debug!("Skipping parameter with unrecognized key {:?}", key);
            }
            None => {
                debug!("Skipping parameter without key=value form {:?}", param);
            }
        }
    }

    Ok(())
}

/***************************************/
/*          Private functions          */
/***************************************/
// Signed decimal literal of any length; everything else is InvalidNumber
fn parse_floor(literal: &str) -> Result<BigInt, SimError> {
    literal
        .parse::<BigInt>()
        .map_err(|_| SimError::InvalidNumber(literal.to_string()))
}
