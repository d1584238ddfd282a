/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimConfig;
use crate::shared::ElevatorState;
use crate::shared::SimError;

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Renders the most recent simulation as a single line: the total travel
 * time, one space, then the visited floors comma-joined. Every integer is
 * written in canonical decimal (leading `-` for negatives, no leading
 * zeros, no `+`).
 *
 * Any integer whose decimal form needs more digits than
 * `SimConfig::max_output_digits` makes the whole render fail with
 * `SimError::OutputTooLarge`; nothing is truncated and no partial line is
 * produced. The travel time is checked first, then the floors in visit
 * order.
 */
pub fn render(state: &ElevatorState, config: &SimConfig) -> Result<String, SimError> {
    let total_travel_time =
        checked_decimal(state.total_travel_time.to_string(), config.max_output_digits)?;

    let visited_floors = state
        .visited_floors
        .iter()
        .map(|floor| checked_decimal(floor.to_string(), config.max_output_digits))
        .collect::<Result<Vec<String>, SimError>>()?;

    Ok(format!("{} {}", total_travel_time, visited_floors.join(",")))
}

/***************************************/
/*          Private functions          */
/***************************************/
// The sign does not count towards the digit ceiling
fn checked_decimal(rendered: String, max_digits: usize) -> Result<String, SimError> {
    let digits = if rendered.starts_with('-') {
        rendered.len() - 1
    } else {
        rendered.len()
    };

    if digits > max_digits {
        return Err(SimError::OutputTooLarge {
            digits,
            max: max_digits,
        });
    }

    Ok(rendered)
}
