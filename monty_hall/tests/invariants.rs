//! Property Tests for Round Invariants
//!
//! Exercises the trial engine across the full input space: any seed, any
//! policy, any pinned pick. The round rules must hold on every path.

use monty_hall::{
    expand_seed, host_reveal, parse_door_reply, play_trial, switch_choice, trial_rng,
    validate_door, verify_trial, SwitchPolicy,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================
// STRATEGIES
// ============================================

fn door() -> impl Strategy<Value = u8> {
    0..3u8
}

fn policy() -> impl Strategy<Value = SwitchPolicy> {
    prop_oneof![
        Just(SwitchPolicy::Always),
        Just(SwitchPolicy::Never),
        Just(SwitchPolicy::Random),
    ]
}

fn pinned_pick() -> impl Strategy<Value = Option<u8>> {
    proptest::option::of(door())
}

// ============================================
// ROUND RULE PROPERTIES
// ============================================

proptest! {
    #[test]
    fn prop_host_never_opens_target_or_pick(
        seed in any::<u64>(),
        target in door(),
        chosen in door(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let revealed = host_reveal(&mut rng, target, chosen);

        prop_assert!(revealed < 3);
        prop_assert_ne!(revealed, target);
        prop_assert_ne!(revealed, chosen);
    }

    #[test]
    fn prop_switch_completes_the_door_set(chosen in door(), revealed in door()) {
        prop_assume!(chosen != revealed);
        let switched = switch_choice(chosen, revealed);

        prop_assert!(switched < 3);
        prop_assert_ne!(switched, chosen);
        prop_assert_ne!(switched, revealed);
    }

    #[test]
    fn prop_trial_records_are_legal_rounds(
        seed in any::<u64>(),
        first_pick in pinned_pick(),
        policy in policy(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let record = play_trial(&mut rng, first_pick, policy).unwrap();

        if let Some(door) = first_pick {
            prop_assert_eq!(record.first_pick, door);
        }
        prop_assert_ne!(record.revealed, record.target);
        prop_assert_ne!(record.revealed, record.first_pick);
        prop_assert_eq!(record.is_win, record.final_pick == record.target);

        match policy {
            SwitchPolicy::Always => prop_assert!(record.switched),
            SwitchPolicy::Never => prop_assert!(!record.switched),
            SwitchPolicy::Random => {}
        }

        if record.switched {
            prop_assert_eq!(
                record.final_pick,
                switch_choice(record.first_pick, record.revealed)
            );
        } else {
            prop_assert_eq!(record.final_pick, record.first_pick);
        }
    }

    #[test]
    fn prop_trials_replay_deterministically(
        seed in any::<u64>(),
        nonce in any::<u64>(),
        client_seed in "[a-z]{0,12}",
        policy in policy(),
    ) {
        let server_seed = expand_seed(seed);

        let mut first_rng = trial_rng(&server_seed, &client_seed, nonce);
        let first = play_trial(&mut first_rng, None, policy).unwrap();

        let mut second_rng = trial_rng(&server_seed, &client_seed, nonce);
        let second = play_trial(&mut second_rng, None, policy).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_genuine_records_always_verify(
        seed in any::<u64>(),
        nonce in 0..1_000u64,
        first_pick in pinned_pick(),
        policy in policy(),
    ) {
        let server_seed = expand_seed(seed);
        let mut rng = trial_rng(&server_seed, "prop", nonce);
        let record = play_trial(&mut rng, first_pick, policy).unwrap();

        let ok = verify_trial(&server_seed, "prop", nonce, first_pick, policy, &record).unwrap();
        prop_assert!(ok, "genuine record failed to verify");
    }
}

// ============================================
// INPUT PARSING PROPERTIES
// ============================================

proptest! {
    #[test]
    fn prop_door_parsing_agrees_with_validation(n in any::<u8>()) {
        let reply = n.to_string();
        match parse_door_reply(&reply) {
            Ok(door) => {
                prop_assert_eq!(door, n);
                prop_assert!(validate_door(n).is_ok());
            }
            Err(_) => prop_assert!(validate_door(n).is_err()),
        }
    }

    #[test]
    fn prop_junk_replies_never_parse(reply in "[a-zA-Z !?.]{1,16}") {
        prop_assert!(parse_door_reply(&reply).is_err());
    }
}
