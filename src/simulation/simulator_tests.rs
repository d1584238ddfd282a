/*
 * Unit tests for the simulator
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_simulate_no_requests
 * - test_simulate_visit_order
 * - test_simulate_travel_time
 * - test_simulate_duplicates
 * - test_resimulation_uses_current_state
 * - test_travel_time_constant_injected
 * - test_large_magnitude
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod simulator_tests {
    use crate::config::SimConfig;
    use crate::shared::ElevatorState;
    use crate::simulation::Simulator;
    use num_bigint::BigInt;
    use num_bigint::BigUint;

    fn floors(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|v| BigInt::from(*v)).collect()
    }

    #[test]
    fn test_simulate_no_requests() {
        // Purpose: Verify that no requested floors yields zero travel time and
        // a visit list holding just the start floor

        // Arrange
        let mut state = ElevatorState::new();
        let simulator = Simulator::new(&SimConfig::default());

        // Act
        simulator.run(&mut state);

        // Assert
        assert_eq!(state.total_travel_time, BigUint::from(0u32));
        assert_eq!(state.visited_floors, floors(&[1]));
    }

    #[test]
    fn test_simulate_visit_order() {
        // Purpose: Verify that floors are visited in request order with the
        // start floor prepended, without reordering or deduplication

        // Arrange
        let mut state = ElevatorState::new();
        state.start_floor = BigInt::from(12);
        state.requested_floors = floors(&[2, 9, 1, 32]);
        let simulator = Simulator::new(&SimConfig::default());

        // Act
        simulator.run(&mut state);

        // Assert
        assert_eq!(state.visited_floors, floors(&[12, 2, 9, 1, 32]));
        assert_eq!(
            state.visited_floors.len(),
            state.requested_floors.len() + 1
        );
    }

    #[test]
    fn test_simulate_travel_time() {
        // Purpose: Verify the travel time sum over consecutive floor distances

        // Arrange
        let mut state = ElevatorState::new();
        state.start_floor = BigInt::from(12);
        state.requested_floors = floors(&[2, 9, 1, 32]);
        let simulator = Simulator::new(&SimConfig::default());

        // Act
        simulator.run(&mut state);

        // Assert
        // |12-2| + |2-9| + |9-1| + |1-32| = 56 floors, 10 time units each
        assert_eq!(state.total_travel_time, BigUint::from(560u32));
    }

    #[test]
    fn test_simulate_duplicates() {
        // Purpose: Verify that repeated floors cost nothing but are still visited

        // Arrange
        let mut state = ElevatorState::new();
        state.start_floor = BigInt::from(5);
        state.requested_floors = floors(&[5, 5]);
        let simulator = Simulator::new(&SimConfig::default());

        // Act
        simulator.run(&mut state);

        // Assert
        assert_eq!(state.total_travel_time, BigUint::from(0u32));
        assert_eq!(state.visited_floors, floors(&[5, 5, 5]));
    }

    #[test]
    fn test_resimulation_uses_current_state() {
        // Purpose: Verify that a rerun recomputes from scratch and reflects a
        // changed start floor, carrying nothing over from the previous run

        // Arrange
        let mut state = ElevatorState::new();
        state.start_floor = BigInt::from(12);
        state.requested_floors = floors(&[2, 9, 1, 32]);
        let simulator = Simulator::new(&SimConfig::default());
        simulator.run(&mut state);

        // Act
        state.start_floor = BigInt::from(13);
        simulator.run(&mut state);

        // Assert
        assert_eq!(state.total_travel_time, BigUint::from(570u32));
        assert_eq!(state.visited_floors, floors(&[13, 2, 9, 1, 32]));
    }

    #[test]
    fn test_travel_time_constant_injected() {
        // Purpose: Verify that the per-floor constant comes from the config,
        // not from a hard-coded value inside the simulator

        // Arrange
        let mut state = ElevatorState::new();
        state.start_floor = BigInt::from(0);
        state.requested_floors = floors(&[7]);
        let config = SimConfig {
            single_floor_travel_time: 1,
            ..SimConfig::default()
        };
        let simulator = Simulator::new(&config);

        // Act
        simulator.run(&mut state);

        // Assert
        assert_eq!(state.total_travel_time, BigUint::from(7u32));
    }

    #[test]
    fn test_large_magnitude() {
        // Purpose: Verify that distances far beyond 64-bit range sum without overflow

        // Arrange
        let mut state = ElevatorState::new();
        state.start_floor = "99999999999999999999".parse::<BigInt>().unwrap();
        state.requested_floors = floors(&[0]);
        let simulator = Simulator::new(&SimConfig::default());

        // Act
        simulator.run(&mut state);

        // Assert
        assert_eq!(
            state.total_travel_time,
            "999999999999999999990".parse::<BigUint>().unwrap()
        );
    }
}
