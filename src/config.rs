use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Config {
    /// Simulation tuning constants
    #[serde(default)]
    pub(crate) tuning: Tuning,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("tetrosnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Simulation tuning constants.
///
/// Everything that affects game-feel is a knob here so that alternate rule
/// sets are a config file away rather than a rebuild.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(try_from = "RawTuning")]
pub(crate) struct Tuning {
    /// Time between simulation ticks, in milliseconds
    pub(crate) tick_period_ms: u64,

    /// The snake moves once every this many ticks
    pub(crate) snake_cadence: u64,

    /// Pieces descend once every this many ticks
    pub(crate) fall_cadence: u64,

    /// Number of ticks a piece spends in the warning phase before it starts
    /// falling
    pub(crate) warning_ticks: u64,

    /// Per-tick probability of spawning a new piece when below capacity
    pub(crate) spawn_chance: f64,

    /// Maximum number of active pieces at one time
    pub(crate) max_pieces: usize,
}

impl Tuning {
    /// Time between simulation ticks as a [`Duration`]
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}

impl Default for Tuning {
    fn default() -> Tuning {
        Tuning {
            tick_period_ms: consts::DEFAULT_TICK_PERIOD_MS,
            snake_cadence: consts::DEFAULT_SNAKE_CADENCE,
            fall_cadence: consts::DEFAULT_FALL_CADENCE,
            warning_ticks: consts::DEFAULT_WARNING_TICKS,
            spawn_chance: consts::DEFAULT_SPAWN_CHANCE,
            max_pieces: consts::DEFAULT_MAX_PIECES,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawTuning {
    tick_period_ms: u64,
    snake_cadence: u64,
    fall_cadence: u64,
    warning_ticks: u64,
    spawn_chance: f64,
    max_pieces: usize,
}

impl Default for RawTuning {
    fn default() -> RawTuning {
        let tuning = Tuning::default();
        RawTuning {
            tick_period_ms: tuning.tick_period_ms,
            snake_cadence: tuning.snake_cadence,
            fall_cadence: tuning.fall_cadence,
            warning_ticks: tuning.warning_ticks,
            spawn_chance: tuning.spawn_chance,
            max_pieces: tuning.max_pieces,
        }
    }
}

impl TryFrom<RawTuning> for Tuning {
    type Error = TuningError;

    fn try_from(value: RawTuning) -> Result<Tuning, TuningError> {
        if value.tick_period_ms == 0 {
            return Err(TuningError::ZeroTickPeriod);
        }
        if value.snake_cadence == 0 || value.fall_cadence == 0 {
            return Err(TuningError::ZeroCadence);
        }
        if !(0.0..=1.0).contains(&value.spawn_chance) {
            return Err(TuningError::SpawnChanceRange);
        }
        if value.max_pieces == 0 {
            return Err(TuningError::ZeroMaxPieces);
        }
        Ok(Tuning {
            tick_period_ms: value.tick_period_ms,
            snake_cadence: value.snake_cadence,
            fall_cadence: value.fall_cadence,
            warning_ticks: value.warning_ticks,
            spawn_chance: value.spawn_chance,
            max_pieces: value.max_pieces,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum TuningError {
    #[error("tick-period-ms must be positive")]
    ZeroTickPeriod,
    #[error("snake-cadence and fall-cadence must be positive")]
    ZeroCadence,
    #[error("spawn-chance must be between 0 and 1")]
    SpawnChanceRange,
    #[error("max-pieces must be positive")]
    ZeroMaxPieces,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_full() {
        let src = concat!(
            "[tuning]\n",
            "tick-period-ms = 50\n",
            "snake-cadence = 2\n",
            "fall-cadence = 3\n",
            "warning-ticks = 20\n",
            "spawn-chance = 0.25\n",
            "max-pieces = 5\n",
        );
        let config = toml::from_str::<Config>(src).unwrap();
        assert_eq!(
            config.tuning,
            Tuning {
                tick_period_ms: 50,
                snake_cadence: 2,
                fall_cadence: 3,
                warning_ticks: 20,
                spawn_chance: 0.25,
                max_pieces: 5,
            }
        );
        assert_eq!(config.tuning.tick_period(), Duration::from_millis(50));
    }

    #[test]
    fn parse_empty() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_partial() {
        let src = "[tuning]\nfall-cadence = 4\n";
        let config = toml::from_str::<Config>(src).unwrap();
        assert_eq!(config.tuning.fall_cadence, 4);
        assert_eq!(
            config.tuning.max_pieces,
            consts::DEFAULT_MAX_PIECES,
            "unset fields should keep their defaults"
        );
    }

    #[rstest]
    #[case("tick-period-ms = 0")]
    #[case("snake-cadence = 0")]
    #[case("fall-cadence = 0")]
    #[case("spawn-chance = 1.5")]
    #[case("spawn-chance = -0.1")]
    #[case("max-pieces = 0")]
    fn parse_invalid(#[case] line: &str) {
        let src = format!("[tuning]\n{line}\n");
        assert!(toml::from_str::<Config>(&src).is_err());
    }

    #[test]
    fn load_missing_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::load(&path, false).is_err());
    }

    #[test]
    fn load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[tuning]\nmax-pieces = 7\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.tuning.max_pieces, 7);
    }
}
