// Console Play
//
// Thin I/O wrapper around the hosted round. All decisions flow through the
// Contestant port, so the round logic stays pure and this module only moves
// lines of text. Works over any BufRead/Write pair, which is also how the
// tests drive it.

use anyhow::Result;
use monty_hall::{
    expand_seed, parse_door_reply, parse_switch_reply, play_hosted, seed_fingerprint, trial_rng,
    Contestant, GameError,
};
use std::io::{BufRead, Write};

// Invalid replies re-prompt this many times before the round gives up
const MAX_ATTEMPTS: u32 = 3;

// =============================================================================
// CONSOLE CONTESTANT
// =============================================================================

pub struct ConsoleContestant<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleContestant<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{text}")
            .map_err(|e| GameError::ContestantUnavailable(e.to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        write!(self.output, "{text}")
            .map_err(|e| GameError::ContestantUnavailable(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| GameError::ContestantUnavailable(e.to_string()))?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|e| GameError::ContestantUnavailable(e.to_string()))?;
        if bytes == 0 {
            return Err(GameError::ContestantUnavailable("end of input".to_string()));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Contestant for ConsoleContestant<R, W> {
    fn first_pick(&mut self) -> Result<u8, GameError> {
        let mut attempts = 0;
        loop {
            let reply = self.prompt("Pick a door (0, 1 or 2): ")?;
            match parse_door_reply(&reply) {
                Ok(door) => return Ok(door),
                Err(err) => {
                    attempts += 1;
                    if attempts >= MAX_ATTEMPTS {
                        return Err(err);
                    }
                    self.say("That is not a door on this stage.")?;
                }
            }
        }
    }

    fn wants_switch(&mut self, revealed: u8) -> Result<bool, GameError> {
        self.say(&format!("Monty opens door {revealed}!"))?;
        let mut attempts = 0;
        loop {
            let reply = self.prompt("Switch to the other closed door? (y/n): ")?;
            match parse_switch_reply(&reply) {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    attempts += 1;
                    if attempts >= MAX_ATTEMPTS {
                        return Err(err);
                    }
                    self.say("Answer y or n.")?;
                }
            }
        }
    }
}

// =============================================================================
// SESSION LOOP
// =============================================================================

/// Host rounds at the console until the player stops.
///
/// The seed fingerprint is shown before any round and the seed itself after
/// the last one, so the player can replay every round with `monty verify`.
pub fn play_session<I: BufRead, O: Write>(
    mut input: I,
    mut output: O,
    seed: u64,
    client_seed: &str,
) -> Result<()> {
    let server_seed = expand_seed(seed);

    writeln!(output, "Welcome to the Monty Hall stage.")?;
    writeln!(output, "Three doors. One car. Two goats.")?;
    writeln!(output, "Seed fingerprint: {}", seed_fingerprint(&server_seed))?;

    // The fingerprint is committed now, so the reveal below has to happen
    // even when a round fails mid-way.
    let outcome = host_rounds(&mut input, &mut output, &server_seed, client_seed);

    writeln!(
        output,
        "Server seed was {}. Every round above replays from it.",
        seed
    )?;
    outcome
}

// One round per iteration until the player stops or a round breaks down.
fn host_rounds<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    server_seed: &[u8; 32],
    client_seed: &str,
) -> Result<()> {
    let mut nonce: u64 = 0;
    loop {
        writeln!(output)?;
        writeln!(output, "Round {} begins!", nonce + 1)?;

        let record = {
            let mut rng = trial_rng(server_seed, client_seed, nonce);
            let mut contestant = ConsoleContestant::new(&mut *input, &mut *output);
            play_hosted(&mut rng, &mut contestant)?
        };

        if record.is_win {
            writeln!(output, "You won! The car was behind door {}.", record.target)?;
        } else {
            writeln!(output, "You lost! The car was behind door {}.", record.target)?;
        }

        // The seed itself stays secret until the session ends; the hint
        // leaves a placeholder for it.
        let client_part = if client_seed.is_empty() {
            String::new()
        } else {
            format!(" --client-seed {client_seed}")
        };
        writeln!(
            output,
            "Round record (replay with `monty verify --seed <server seed>{} --nonce {} --pinned-pick {}`):",
            client_part, nonce, record.first_pick
        )?;
        writeln!(output, "{}", serde_json::to_string(&record)?)?;

        nonce += 1;

        let mut host = ConsoleContestant::new(&mut *input, &mut *output);
        match host.prompt("Play again? (y/n): ").map(|reply| parse_switch_reply(&reply)) {
            Ok(Ok(true)) => continue,
            Ok(Ok(false)) => break,
            // Out of input means the player is gone
            Err(GameError::ContestantUnavailable(_)) => break,
            Ok(Err(_)) => {
                writeln!(output, "Taking that as a no.")?;
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
