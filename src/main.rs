//! Bounce Scores command line
//!
//! Lists or extends the leaderboard kept in the native data directory.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use bounce_scores::persistence::FileBlobStore;
    use bounce_scores::{Config, LeaderboardEntry, LeaderboardStore};
    use clap::{Parser, Subcommand};

    /// `bounce-scores` command arguments.
    #[derive(Debug, Parser)]
    #[command(
        name = "bounce-scores",
        about = "Show or add to the local high score leaderboard",
        version
    )]
    struct Cli {
        /// Directory holding the leaderboard file.
        #[arg(long, value_name = "dir", env = "BOUNCE_SCORES_DIR")]
        data_dir: Option<PathBuf>,
        /// Key the leaderboard is stored under.
        #[arg(long, value_name = "key", env = "BOUNCE_SCORES_KEY")]
        key: Option<String>,
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, PartialEq, Subcommand)]
    enum Command {
        /// Print the leaderboard
        List,
        /// Record a score and print the leaderboard
        Add {
            username: String,
            #[arg(allow_negative_numbers = true)]
            score: i64,
            #[arg(allow_negative_numbers = true)]
            level: i64,
        },
    }

    impl Cli {
        /// Defaults with any command line or environment overrides applied
        fn config(&self) -> Config {
            let mut config = Config::default();
            if let Some(dir) = &self.data_dir {
                config = config.with_data_dir(dir);
            }
            if let Some(key) = &self.key {
                config = config.with_storage_key(key);
            }
            config
        }
    }

    fn print_board(entries: &[LeaderboardEntry]) {
        if entries.is_empty() {
            println!("No high scores yet");
            return;
        }
        println!("{:>3}  {:<20} {:>10} {:>6}", "#", "Player", "Score", "Level");
        for (i, entry) in entries.iter().enumerate() {
            println!(
                "{:>3}  {:<20} {:>10} {:>6}",
                i + 1,
                entry.username,
                entry.score,
                entry.level
            );
        }
    }

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();

        let cli = Cli::parse();
        let config = cli.config();

        let store = match FileBlobStore::open(&config.data_dir) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        };
        let mut board = LeaderboardStore::with_key(store, config.storage_key);

        match cli.command {
            Command::List => print_board(board.entries()),
            Command::Add {
                username,
                score,
                level,
            } => {
                board.add_entry(username, score, level);
                print_board(board.entries());
            }
        }
        ExitCode::SUCCESS
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_list() {
            let cli = Cli::try_parse_from(["bounce-scores", "list"]).unwrap();
            assert_eq!(cli.command, Command::List);
        }

        #[test]
        fn test_parse_add_with_options() {
            let cli = Cli::try_parse_from([
                "bounce-scores",
                "--data-dir",
                "d",
                "--key",
                "K",
                "add",
                "alice",
                "120",
                "3",
            ])
            .unwrap();
            assert_eq!(
                cli.command,
                Command::Add {
                    username: "alice".into(),
                    score: 120,
                    level: 3
                }
            );
            let config = cli.config();
            assert_eq!(config.storage_key, "K");
            assert_eq!(config.data_dir, PathBuf::from("d"));
        }

        #[test]
        fn test_parse_add_negative_score() {
            let cli = Cli::try_parse_from(["bounce-scores", "add", "bob", "-5", "0"]).unwrap();
            assert_eq!(
                cli.command,
                Command::Add {
                    username: "bob".into(),
                    score: -5,
                    level: 0
                }
            );
        }

        #[test]
        fn test_parse_rejects_bad_input() {
            assert!(Cli::try_parse_from(["bounce-scores"]).is_err());
            assert!(Cli::try_parse_from(["bounce-scores", "add", "a", "x", "1"]).is_err());
            assert!(Cli::try_parse_from(["bounce-scores", "add", "a", "1"]).is_err());
            assert!(Cli::try_parse_from(["bounce-scores", "list", "--key"]).is_err());
            assert!(Cli::try_parse_from(["bounce-scores", "remove"]).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is `bounce_scores::web::start`
}
