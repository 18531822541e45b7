// Hosted Round State Machine
//
// An interactive round walks the same steps as a batch trial, but with a
// live contestant answering at each decision point. The round object gates
// every step so callers cannot settle before the reveal or pick a door
// twice, no matter how the front end drives it.

use crate::error::GameError;
use crate::game::{host_reveal, pick_target, switch_choice, validate_door};
use crate::types::TrialRecord;
use rand::Rng;

// =============================================================================
// CONTESTANT PORT
// =============================================================================

/// Decision source for a hosted round.
///
/// Implementations can be a console prompt, a scripted policy, or anything
/// else that answers the two questions a round asks.
pub trait Contestant {
    /// Which door to pick first (0, 1 or 2).
    fn first_pick(&mut self) -> Result<u8, GameError>;

    /// Whether to switch after the host opens `revealed`.
    fn wants_switch(&mut self, revealed: u8) -> Result<bool, GameError>;
}

// =============================================================================
// ROUND STATE
// =============================================================================

/// One round in progress. Steps must run in order:
/// `deal` -> `choose` -> `open_goat_door` -> `settle`.
#[derive(Clone, Debug)]
pub struct HostedRound {
    target: u8,
    chosen: Option<u8>,
    revealed: Option<u8>,
    settled: bool,
}

impl HostedRound {
    /// Start a round: hide the car behind a random door.
    pub fn deal<R: Rng>(rng: &mut R) -> Self {
        Self {
            target: pick_target(rng),
            chosen: None,
            revealed: None,
            settled: false,
        }
    }

    /// Record the contestant's first pick.
    pub fn choose(&mut self, door: u8) -> Result<(), GameError> {
        if self.chosen.is_some() {
            return Err(GameError::OutOfTurn("choose"));
        }
        validate_door(door)?;
        self.chosen = Some(door);
        Ok(())
    }

    /// Host opens a goat door and returns its label.
    pub fn open_goat_door<R: Rng>(&mut self, rng: &mut R) -> Result<u8, GameError> {
        let chosen = self.chosen.ok_or(GameError::OutOfTurn("reveal"))?;
        if self.revealed.is_some() {
            return Err(GameError::OutOfTurn("reveal"));
        }
        let door = host_reveal(rng, self.target, chosen);
        self.revealed = Some(door);
        Ok(door)
    }

    /// Apply the contestant's switch decision and settle the round.
    pub fn settle(&mut self, switch: bool) -> Result<TrialRecord, GameError> {
        let chosen = self.chosen.ok_or(GameError::OutOfTurn("settle"))?;
        let revealed = self.revealed.ok_or(GameError::OutOfTurn("settle"))?;
        if self.settled {
            return Err(GameError::OutOfTurn("settle"));
        }
        self.settled = true;

        let final_pick = if switch {
            switch_choice(chosen, revealed)
        } else {
            chosen
        };

        Ok(TrialRecord {
            target: self.target,
            first_pick: chosen,
            revealed,
            final_pick,
            switched: switch,
            is_win: final_pick == self.target,
        })
    }
}

/// Drive a full round against a contestant.
pub fn play_hosted<R: Rng, C: Contestant>(
    rng: &mut R,
    contestant: &mut C,
) -> Result<TrialRecord, GameError> {
    let mut round = HostedRound::deal(rng);
    round.choose(contestant.first_pick()?)?;
    let revealed = round.open_goat_door(rng)?;
    let switch = contestant.wants_switch(revealed)?;
    round.settle(switch)
}

// =============================================================================
// REPLY PARSING
// =============================================================================

/// Parse a door reply ("0", "1", "2", with surrounding whitespace allowed).
pub fn parse_door_reply(reply: &str) -> Result<u8, GameError> {
    let trimmed = reply.trim();
    let door: u8 = trimmed
        .parse()
        .map_err(|_| GameError::InvalidReply(trimmed.to_string()))?;
    validate_door(door)?;
    Ok(door)
}

/// Parse a yes/no reply for the switch question.
pub fn parse_switch_reply(reply: &str) -> Result<bool, GameError> {
    match reply.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(GameError::InvalidReply(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // Contestant with canned answers
    struct Scripted {
        pick: u8,
        switch: bool,
    }

    impl Contestant for Scripted {
        fn first_pick(&mut self) -> Result<u8, GameError> {
            Ok(self.pick)
        }

        fn wants_switch(&mut self, _revealed: u8) -> Result<bool, GameError> {
            Ok(self.switch)
        }
    }

    #[test]
    fn test_full_round_switching() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut player = Scripted {
            pick: 0,
            switch: true,
        };
        let record = play_hosted(&mut rng, &mut player).unwrap();
        assert_eq!(record.first_pick, 0);
        assert!(record.switched);
        assert_ne!(record.final_pick, 0);
        assert_ne!(record.final_pick, record.revealed);
        assert_eq!(record.is_win, record.final_pick == record.target);
    }

    #[test]
    fn test_full_round_staying() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut player = Scripted {
            pick: 2,
            switch: false,
        };
        let record = play_hosted(&mut rng, &mut player).unwrap();
        assert_eq!(record.final_pick, 2);
        assert_eq!(record.is_win, record.target == 2);
    }

    #[test]
    fn test_steps_must_run_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut round = HostedRound::deal(&mut rng);

        // No pick yet
        assert_eq!(
            round.open_goat_door(&mut rng),
            Err(GameError::OutOfTurn("reveal"))
        );
        assert_eq!(round.settle(true), Err(GameError::OutOfTurn("settle")));

        round.choose(1).unwrap();
        assert_eq!(round.choose(2), Err(GameError::OutOfTurn("choose")));

        // Picked but not revealed
        assert_eq!(round.settle(true), Err(GameError::OutOfTurn("settle")));

        round.open_goat_door(&mut rng).unwrap();
        assert_eq!(
            round.open_goat_door(&mut rng),
            Err(GameError::OutOfTurn("reveal"))
        );

        round.settle(false).unwrap();
        assert_eq!(round.settle(false), Err(GameError::OutOfTurn("settle")));
    }

    #[test]
    fn test_choose_validates_door() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut round = HostedRound::deal(&mut rng);
        assert_eq!(round.choose(3), Err(GameError::InvalidDoor(3)));
        // A rejected pick leaves the round at the choose step
        assert!(round.choose(0).is_ok());
    }

    #[test]
    fn test_parse_door_reply() {
        assert_eq!(parse_door_reply("0"), Ok(0));
        assert_eq!(parse_door_reply(" 2 \n"), Ok(2));
        assert_eq!(parse_door_reply("3"), Err(GameError::InvalidDoor(3)));
        assert_eq!(
            parse_door_reply("two"),
            Err(GameError::InvalidReply("two".to_string()))
        );
        assert_eq!(
            parse_door_reply(""),
            Err(GameError::InvalidReply(String::new()))
        );
    }

    #[test]
    fn test_parse_switch_reply() {
        assert_eq!(parse_switch_reply("y"), Ok(true));
        assert_eq!(parse_switch_reply("YES\n"), Ok(true));
        assert_eq!(parse_switch_reply(" n"), Ok(false));
        assert_eq!(parse_switch_reply("No"), Ok(false));
        assert_eq!(
            parse_switch_reply("maybe"),
            Err(GameError::InvalidReply("maybe".to_string()))
        );
    }
}
