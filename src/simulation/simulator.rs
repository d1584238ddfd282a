/***************************************/
/*        3rd party libraries          */
/***************************************/
use num_bigint::BigUint;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimConfig;
use crate::shared::ElevatorState;

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Computes travel time and visit order for an elevator state.
 *
 * The elevator starts at `start_floor` and visits every requested floor in
 * request order, paying a constant time per floor of distance. There is no
 * reordering and no acceleration model; the run is a pure fold over the
 * request list.
 *
 * # Fields
 * - `single_floor_travel_time`: Time units to travel between two adjacent floors.
 */
pub struct Simulator {
    single_floor_travel_time: u32,
}

impl Simulator {
    pub fn new(config: &SimConfig) -> Simulator {
        Simulator {
            single_floor_travel_time: config.single_floor_travel_time,
        }
    }

    /**
     * Recomputes `total_travel_time` and `visited_floors` from the current
     * `start_floor` and `requested_floors`, overwriting any previous result.
     * Re-running after changing `start_floor` therefore reflects only the
     * current fields. An empty request list yields a travel time of zero and
     * a visit list holding just the start floor.
     */
    pub fn run(&self, state: &mut ElevatorState) {
        let mut total_travel_time = BigUint::from(0u32);
        let mut visited_floors = Vec::with_capacity(state.requested_floors.len() + 1);
        visited_floors.push(state.start_floor.clone());

        let mut current_floor = state.start_floor.clone();
        for floor in &state.requested_floors {
            let distance = (&current_floor - floor).magnitude().clone();
            total_travel_time += distance * self.single_floor_travel_time;
            visited_floors.push(floor.clone());
            current_floor = floor.clone();
        }

        state.total_travel_time = total_travel_time;
        state.visited_floors = visited_floors;
    }
}
