use assert_cmd::cargo_bin;
use calcpad::domain::key::Key;
use calcpad::domain::state::CalculatorState;
use calcpad::interfaces::keypad::Keypad;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::process::Command;

mod common;

const TOKENS: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "=",
];

fn random_script(rng: &mut StdRng, len: usize) -> Vec<&'static str> {
    (0..len)
        .map(|_| {
            // Keep clears rare so chains get long enough to hit large values.
            if rng.gen_ratio(1, 40) {
                "C"
            } else {
                TOKENS[rng.gen_range(0..TOKENS.len())]
            }
        })
        .collect()
}

#[test]
fn test_cli_matches_library_replay() {
    let mut rng = StdRng::seed_from_u64(0x00ca_1c);
    let dir = tempfile::tempdir().unwrap();

    for round in 0..10 {
        let script = random_script(&mut rng, 200);
        let path = dir.path().join(format!("walk_{round}.csv"));
        common::write_key_csv(&path, &script).expect("Failed to write key script");

        let mut keypad = Keypad::default();
        for token in &script {
            keypad.press(token.parse::<Key>().unwrap());
        }
        let screen = keypad.screen();
        let mut expected = format!("{}\n", screen.main);
        if let Some(pending) = &screen.secondary {
            expected.push_str(pending);
            expected.push('\n');
        }

        let output = Command::new(cargo_bin!("calcpad"))
            .arg(&path)
            .output()
            .expect("Failed to execute command");
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), expected, "round {round}");
    }
}

#[test]
fn test_clear_always_restores_initial_state() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let script = random_script(&mut rng, 50);
        let mut keypad = Keypad::default();
        for token in &script {
            keypad.press(token.parse::<Key>().unwrap());
        }
        keypad.press(Key::Clear);
        assert_eq!(keypad.state(), &CalculatorState::default());
        assert_eq!(keypad.screen().main, "0");
    }
}
