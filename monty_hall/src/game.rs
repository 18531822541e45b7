// Monty Hall Core Game Logic
//
// One trial runs the fixed sequence: hide the car, take the contestant's
// pick, open a goat door, apply the switch policy, settle. Every step is a
// pure function of its inputs and the injected RNG, so trials can be
// replayed from seed material and checked after the fact.

use crate::error::GameError;
use crate::types::{SwitchPolicy, TrialRecord, DOOR_COUNT};
use rand::Rng;

// =============================================================================
// VALIDATION
// =============================================================================

/// Reject any label outside {0, 1, 2}.
pub fn validate_door(door: u8) -> Result<(), GameError> {
    if door >= DOOR_COUNT {
        return Err(GameError::InvalidDoor(door));
    }
    Ok(())
}

// =============================================================================
// TRIAL STEPS
// =============================================================================

/// Hide the car behind a uniformly random door.
pub fn pick_target<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(0..DOOR_COUNT)
}

/// Open a goat door: never the target, never the contestant's pick.
///
/// When the pick missed the car there is exactly one such door and the host
/// has no choice. When the pick IS the car, the host opens one of the two
/// remaining doors with equal probability.
pub fn host_reveal<R: Rng>(rng: &mut R, target: u8, chosen: u8) -> u8 {
    debug_assert!(target < DOOR_COUNT && chosen < DOOR_COUNT);
    if chosen != target {
        // Labels sum to 0 + 1 + 2 = 3, so the remaining door is forced.
        DOOR_COUNT - chosen - target
    } else {
        // Offset of 1 or 2 walks to either non-chosen door uniformly.
        let offset = rng.gen_range(1..DOOR_COUNT);
        (chosen + offset) % DOOR_COUNT
    }
}

/// The unique door that is neither the current pick nor the revealed one.
pub fn switch_choice(chosen: u8, revealed: u8) -> u8 {
    debug_assert!(chosen < DOOR_COUNT && revealed < DOOR_COUNT && chosen != revealed);
    DOOR_COUNT - chosen - revealed
}

// =============================================================================
// FULL TRIAL
// =============================================================================

/// Run one complete round and return its record.
///
/// `first_pick` fixes the contestant's door (validated), or `None` draws it
/// uniformly. The draw order is fixed - target, optional pick, reveal coin,
/// policy coin - so a trial replayed from the same RNG stream is identical.
pub fn play_trial<R: Rng>(
    rng: &mut R,
    first_pick: Option<u8>,
    policy: SwitchPolicy,
) -> Result<TrialRecord, GameError> {
    if let Some(door) = first_pick {
        validate_door(door)?;
    }

    let target = pick_target(rng);
    let chosen = match first_pick {
        Some(door) => door,
        None => rng.gen_range(0..DOOR_COUNT),
    };

    let revealed = host_reveal(rng, target, chosen);

    let switched = match policy {
        SwitchPolicy::Always => true,
        SwitchPolicy::Never => false,
        SwitchPolicy::Random => rng.gen::<bool>(),
    };

    let final_pick = if switched {
        switch_choice(chosen, revealed)
    } else {
        chosen
    };

    Ok(TrialRecord {
        target,
        first_pick: chosen,
        revealed,
        final_pick,
        switched,
        is_win: final_pick == target,
    })
}
