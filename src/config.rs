/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * Program constants for a simulation run.
 *
 * # Fields
 * - `single_floor_travel_time`: Time units spent travelling between two adjacent floors.
 * - `max_output_digits`:        Most decimal digits one rendered integer may have, sign
 *                               excluded. Larger results are refused as too large
 *                               instead of being truncated.
 */
#[derive(Deserialize, Clone)]
pub struct SimConfig {
    #[serde(rename = "singleFloorTravelTime")]
    pub single_floor_travel_time: u32,
    #[serde(rename = "maxOutputDigits")]
    pub max_output_digits: usize,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            single_floor_travel_time: 10,
            max_output_digits: 4300,
        }
    }
}
