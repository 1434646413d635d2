//! Guessing game integration tests
//!
//! Drives the binary search with scripted, truthful and adversarial oracles.

use numtrio::{
    oracle_fn, run_guessing_game, Config, GameConfig, GameOutcome, GuessingGame, NumtrioError,
    Oracle, Question, ScriptedOracle, TruthfulOracle,
};

// =============================================================================
// Truthful oracles
// =============================================================================

mod truthful_tests {
    use super::*;

    #[test]
    fn test_finds_forty_two_within_seven_guesses() {
        let mut oracle = TruthfulOracle::new(42);
        let outcome = run_guessing_game(&mut oracle).unwrap();

        assert_eq!(outcome.number(), Some(42));
        assert!(outcome.guesses() <= 7);
        // two questions per miss, one for the hit
        assert_eq!(oracle.asked(), outcome.guesses() * 2 - 1);
    }

    #[test]
    fn test_scripted_path_to_forty_two() {
        // 50 no/lower, 25 no/higher, 37 no/higher, 43 no/lower, 40 no/higher, 41 no/higher, 42 yes
        let mut oracle = ScriptedOracle::parse("n,n, n,y, n,y, n,n, n,y, n,y, y").unwrap();
        let outcome = run_guessing_game(&mut oracle).unwrap();

        assert_eq!(
            outcome,
            GameOutcome::Found {
                number: 42,
                guesses: 7
            }
        );
        assert_eq!(oracle.remaining(), 0);
    }

    #[test]
    fn test_bounds_of_range_reachable() {
        for target in [1, 100] {
            let outcome = run_guessing_game(&mut TruthfulOracle::new(target)).unwrap();
            assert_eq!(outcome.number(), Some(target));
        }
    }

    #[test]
    fn test_configured_range() {
        let game = GuessingGame::from_config(&GameConfig { low: 1, high: 1000 });
        let outcome = game.play(&mut TruthfulOracle::new(777)).unwrap();
        assert_eq!(outcome.number(), Some(777));
        assert!(outcome.guesses() <= game.worst_case_guesses());
    }
}

// =============================================================================
// Inconsistent oracles
// =============================================================================

mod inconsistent_tests {
    use super::*;

    #[test]
    fn test_always_greater_terminates_exhausted() {
        let mut oracle = oracle_fn(|prompt: &str| prompt.contains("greater"));
        let outcome = run_guessing_game(&mut oracle).unwrap();

        assert!(matches!(outcome, GameOutcome::Exhausted { .. }));
        assert!(outcome.guesses() <= 7);
    }

    #[test]
    fn test_target_outside_range_exhausts() {
        let outcome = run_guessing_game(&mut TruthfulOracle::new(250)).unwrap();
        assert_eq!(outcome.number(), None);
    }

    #[test]
    fn test_range_at_i64_max_from_config_file() {
        let json = r#"{"game": {"low": 9223372036854775806, "high": 9223372036854775807}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        config.validate().unwrap();

        let game = GuessingGame::from_config(&config.game);
        let mut oracle = oracle_fn(|prompt: &str| prompt.contains("greater"));
        let outcome = game.play(&mut oracle).unwrap();
        assert_eq!(outcome, GameOutcome::Exhausted { guesses: 2 });
    }

    #[test]
    fn test_full_i64_range_config() {
        let config = Config {
            game: GameConfig {
                low: i64::MIN,
                high: i64::MAX,
            },
            ..Default::default()
        };
        let game = GuessingGame::from_config(&config.game);
        assert_eq!(game.worst_case_guesses(), 65);

        let outcome = game.play(&mut TruthfulOracle::new(i64::MIN)).unwrap();
        assert_eq!(outcome.number(), Some(i64::MIN));
    }

    #[test]
    fn test_exhausted_serializes_with_tag() {
        let outcome = GameOutcome::Exhausted { guesses: 7 };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["outcome"], "exhausted");
        assert_eq!(json["guesses"], 7);
    }
}

// =============================================================================
// Oracle failures
// =============================================================================

mod oracle_error_tests {
    use super::*;

    struct FailingOracle;

    impl Oracle for FailingOracle {
        fn answer(&mut self, _question: &Question) -> numtrio::Result<bool> {
            Err(NumtrioError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )))
        }
    }

    #[test]
    fn test_oracle_error_propagates() {
        let err = run_guessing_game(&mut FailingOracle).unwrap_err();
        assert!(matches!(err, NumtrioError::Io(_)));
    }

    #[test]
    fn test_short_script_reports_pending_question() {
        let mut oracle = ScriptedOracle::parse("n").unwrap();
        let err = run_guessing_game(&mut oracle).unwrap_err();
        assert!(matches!(err, NumtrioError::OracleExhausted(ref q) if q == "Is your number greater than 50?"));
    }

    #[test]
    fn test_dyn_oracle_accepted() {
        let mut oracle: Box<dyn Oracle> = Box::new(TruthfulOracle::new(3));
        let outcome = run_guessing_game(oracle.as_mut()).unwrap();
        assert_eq!(outcome.number(), Some(3));
    }
}
