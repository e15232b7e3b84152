//! Runner configuration: data directory, seed and game parameters.
//!
//! Sources in increasing priority: defaults, environment
//! (`COLOR_LINES_DATA_DIR`, `COLOR_LINES_SEED`), command line.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use crate::core::GameConfig;

pub const ENV_DATA_DIR: &str = "COLOR_LINES_DATA_DIR";
pub const ENV_SEED: &str = "COLOR_LINES_SEED";

pub const USAGE: &str = "usage: color-lines [--data-dir DIR] [--seed N] [--size N] [--match N] [--colors N] [--next N]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub seed: u64,
    pub game: GameConfig,
}

impl AppConfig {
    /// Read the real process environment and arguments (program name skipped).
    pub fn from_env_and_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(|key| std::env::var(key).ok(), &args)
    }

    /// Build from an environment lookup and an argument list.
    ///
    /// `--help` comes back as an error carrying the usage text.
    pub fn from_sources(env: impl Fn(&str) -> Option<String>, args: &[String]) -> Result<Self> {
        let mut data_dir = default_data_dir(&env);
        let mut seed = None;

        if let Some(dir) = non_empty(env(ENV_DATA_DIR)) {
            data_dir = PathBuf::from(dir);
        }
        if let Some(v) = non_empty(env(ENV_SEED)) {
            seed = Some(
                v.parse::<u64>()
                    .map_err(|_| anyhow!("invalid {} value: {}", ENV_SEED, v))?,
            );
        }

        let mut game = GameConfig::default();
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "--help" || flag == "-h" {
                return Err(anyhow!(USAGE));
            }
            i += 1;
            let v = args
                .get(i)
                .ok_or_else(|| anyhow!("missing value for {}", flag))?;
            match flag {
                "--data-dir" => data_dir = PathBuf::from(v),
                "--seed" => seed = Some(parse_flag(flag, v)?),
                "--size" => game.board_size = parse_flag(flag, v)?,
                "--match" => game.match_len = parse_flag(flag, v)?,
                "--colors" => game.palette_size = parse_flag(flag, v)?,
                "--next" => game.next_len = parse_flag(flag, v)?,
                other => return Err(anyhow!("unknown argument: {}\n{}", other, USAGE)),
            }
            i += 1;
        }

        game.validate().context("invalid game parameters")?;

        Ok(Self {
            data_dir,
            seed: seed.unwrap_or_else(clock_seed),
            game,
        })
    }
}

fn parse_flag<T: std::str::FromStr>(flag: &str, v: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// `$HOME/.color-lines`, or `.color-lines` in the working directory
fn default_data_dir(env: &impl Fn(&str) -> Option<String>) -> PathBuf {
    match non_empty(env("HOME")) {
        Some(home) => PathBuf::from(home).join(".color-lines"),
        None => PathBuf::from(".color-lines"),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
