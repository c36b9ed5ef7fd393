//! End-to-end integration tests
//!
//! These tests validate the complete pipelines using predefined CSV test
//! fixtures under tests/fixtures/:
//!
//! - `settle/<name>/` - `round.csv` settled into `expected.csv`
//! - `settle_errors/<name>/` - `round.csv` rejected with `expected_error.txt`
//! - `stats/<name>/` - `history.csv` (and optional `balances.csv`) producing
//!   `expected_stats.csv` and `expected_rankings.csv`
//!
//! Statistics fixtures are run twice: once with the synchronous strategy and
//! once with the async strategy, with a small batch size so players span
//! several batches.

#[cfg(test)]
mod tests {
    use poker_ledger::cli::StrategyType;
    use poker_ledger::compute_settlement;
    use poker_ledger::io::{
        append_history, read_round, write_rankings_csv, write_statistics_csv,
        write_transfers_csv, SyncReader,
    };
    use poker_ledger::strategy::{create_strategy, BatchConfig, StatisticsInput};
    use poker_ledger::types::LedgerError;
    use poker_ledger::Rankings;
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn fixture_path(group: &str, fixture_name: &str, file: &str) -> PathBuf {
        let path = Path::new("tests/fixtures")
            .join(group)
            .join(fixture_name)
            .join(file);
        assert!(path.exists(), "Fixture file not found: {}", path.display());
        path
    }

    fn read_fixture(path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
    }

    fn settle_to_csv(round_path: &Path) -> Result<String, LedgerError> {
        let round = read_round(round_path)?;
        let transfers = compute_settlement(&round)?;

        let mut output = Vec::new();
        write_transfers_csv(&transfers, &mut output)?;
        Ok(String::from_utf8(output).expect("Output is not UTF-8"))
    }

    /// Settle round.csv and compare with expected.csv
    #[rstest]
    #[case("single_debtor")]
    #[case("largest_first")]
    #[case("partial_payments")]
    #[case("ties_by_input_order")]
    #[case("all_even")]
    #[case("padded_fields")]
    fn test_settle_fixtures(#[case] fixture: &str) {
        let round_path = fixture_path("settle", fixture, "round.csv");
        let expected = read_fixture(&fixture_path("settle", fixture, "expected.csv"));

        let actual = settle_to_csv(&round_path)
            .unwrap_or_else(|e| panic!("Failed to settle {}: {}", fixture, e));

        assert_eq!(
            actual, expected,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture, actual, expected
        );
    }

    /// Rounds that must be rejected, compared by error message
    #[rstest]
    #[case("deficit")]
    #[case("excess")]
    #[case("missing_cash_out")]
    #[case("duplicate_player")]
    #[case("negative_amount")]
    fn test_settle_error_fixtures(#[case] fixture: &str) {
        let round_path = fixture_path("settle_errors", fixture, "round.csv");
        let expected = read_fixture(&fixture_path("settle_errors", fixture, "expected_error.txt"));

        match settle_to_csv(&round_path) {
            Ok(output) => panic!("Fixture {} settled unexpectedly:\n{}", fixture, output),
            Err(e) => assert_eq!(e.to_string(), expected.trim_end()),
        }
    }

    fn run_statistics(fixture_name: &str, strategy_type: StrategyType) -> (String, String) {
        let history = fixture_path("stats", fixture_name, "history.csv");
        let balances = Path::new("tests/fixtures/stats")
            .join(fixture_name)
            .join("balances.csv");

        let mut input = StatisticsInput::new(history);
        if balances.exists() {
            input = input.with_balances(balances);
        }

        let strategy = create_strategy(strategy_type, Some(BatchConfig::new(2, 2)));
        let stats = strategy
            .compute(&input)
            .unwrap_or_else(|e| panic!("Failed to compute statistics: {}", e));

        let mut stats_output = Vec::new();
        write_statistics_csv(&stats, &mut stats_output).expect("Failed to write statistics");
        let mut rankings_output = Vec::new();
        write_rankings_csv(&Rankings::compute(&stats), &mut rankings_output)
            .expect("Failed to write rankings");

        (
            String::from_utf8(stats_output).expect("Output is not UTF-8"),
            String::from_utf8(rankings_output).expect("Output is not UTF-8"),
        )
    }

    /// Statistics and rankings for all fixtures with both strategies
    #[rstest]
    #[case("league_season")]
    #[case("with_balances")]
    #[case("malformed_rows")]
    #[case("draws_keep_streaks")]
    #[case("empty_history")]
    fn test_stats_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let expected_stats = read_fixture(&fixture_path("stats", fixture, "expected_stats.csv"));
        let expected_rankings =
            read_fixture(&fixture_path("stats", fixture, "expected_rankings.csv"));

        let (stats, rankings) = run_statistics(fixture, strategy);

        assert_eq!(
            stats, expected_stats,
            "\n\nStatistics mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture, strategy, stats, expected_stats
        );
        assert_eq!(
            rankings, expected_rankings,
            "\n\nRankings mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture, strategy, rankings, expected_rankings
        );
    }

    /// Recorded rounds feed back into the statistics pipeline
    #[rstest]
    fn test_recorded_rounds_feed_statistics(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let history = dir.path().join("history.csv");

        for (fixture, date) in [("single_debtor", "2024-05-01"), ("largest_first", "2024-05-08")] {
            let round = read_round(&fixture_path("settle", fixture, "round.csv")).unwrap();
            let date = poker_ledger::io::parse_date(date).unwrap();
            append_history(&history, &round.history_entries(date).unwrap()).unwrap();
        }

        assert_eq!(SyncReader::new(&history).unwrap().count(), 7);

        let stats = create_strategy(strategy, None)
            .compute(&StatisticsInput::new(&history))
            .unwrap();
        let names: Vec<&str> = stats.iter().map(|s| s.player_name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);

        // A: +50 then +100; C: 0 then -50
        assert_eq!(stats[0].total_winnings, 150);
        assert_eq!(stats[0].current_streak, 2);
        assert_eq!(stats[2].total_games, 2);
        assert_eq!(stats[2].games_lost, 1);
        assert_eq!(stats[3].total_games, 1);
    }
}
