/***************************************/
/*        3rd party libraries          */
/***************************************/
use num_bigint::BigInt;
use num_bigint::BigUint;
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * Holds the state of one elevator simulation.
 *
 * The parser writes `start_floor` and `requested_floors`; the simulator
 * derives `total_travel_time` and `visited_floors` from them. Floors are
 * arbitrary-precision integers, so basements (negative floors) and floor
 * numbers far beyond any machine word are representable without overflow.
 *
 * # Fields
 * - `start_floor`:        Floor the elevator starts from. Defaults to 1.
 * - `requested_floors`:   Floors to visit, in request order. May be empty,
 *                         unsorted, negative, or contain duplicates.
 * - `total_travel_time`:  Time units spent travelling, recomputed on every
 *                         simulation run.
 * - `visited_floors`:     Start floor followed by every requested floor, in
 *                         visit order. Empty until the first run.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorState {
    #[serde(rename = "startFloor")]
    pub start_floor: BigInt,
    #[serde(rename = "requestedFloors")]
    pub requested_floors: Vec<BigInt>,
    #[serde(rename = "totalTravelTime")]
    pub total_travel_time: BigUint,
    #[serde(rename = "visitedFloors")]
    pub visited_floors: Vec<BigInt>,
}

impl ElevatorState {
    pub fn new() -> ElevatorState {
        ElevatorState {
            start_floor: BigInt::from(1),
            requested_floors: Vec::new(),
            total_travel_time: BigUint::from(0u32),
            visited_floors: Vec::new(),
        }
    }
}

impl Default for ElevatorState {
    fn default() -> ElevatorState {
        ElevatorState::new()
    }
}
