use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::core::GameConfig;
use crate::types::{DEFAULT_BALL_SPEED, DEFAULT_PADDLE_SPEED, DEFAULT_PADDLE_WIDTH, FRAME_MS};

/// Settings taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub seed: Option<u64>,
    pub paddle_width: u16,
    pub paddle_speed: f64,
    pub ball_speed: f64,
    pub fps: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            paddle_width: DEFAULT_PADDLE_WIDTH,
            paddle_speed: DEFAULT_PADDLE_SPEED,
            ball_speed: DEFAULT_BALL_SPEED,
            fps: (1000 / FRAME_MS) as u32,
            log_file: None,
        }
    }
}

impl CliConfig {
    /// Game settings for a surface of the given size.
    ///
    /// Without `--seed`, `fallback_seed` is used (the binary passes wall-clock time).
    pub fn game_config(&self, width: u16, height: u16, fallback_seed: u64) -> GameConfig {
        GameConfig::new(width, height)
            .with_paddle_width(self.paddle_width)
            .with_paddle_speed(self.paddle_speed)
            .with_ball_speed(self.ball_speed)
            .with_seed(self.seed.unwrap_or(fallback_seed))
    }

    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

pub const USAGE: &str = "usage: tui-breakout [--seed N] [--paddle-width CELLS] \
[--paddle-speed CELLS_PER_SEC] [--ball-speed CELLS_PER_SEC] [--fps N] [--log-file PATH]";

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .map(String::as_str)
                .ok_or_else(|| anyhow!("breakout: missing value for {}", flag))
        };
        match flag {
            "--seed" => config.seed = Some(parse_num(flag, value()?)?),
            "--paddle-width" => {
                config.paddle_width = parse_num(flag, value()?)?;
                if config.paddle_width == 0 {
                    return Err(anyhow!("breakout: --paddle-width must be at least 1"));
                }
            }
            "--paddle-speed" => config.paddle_speed = parse_positive(flag, value()?)?,
            "--ball-speed" => config.ball_speed = parse_positive(flag, value()?)?,
            "--fps" => {
                config.fps = parse_num(flag, value()?)?;
                if config.fps == 0 {
                    return Err(anyhow!("breakout: --fps must be at least 1"));
                }
            }
            "--log-file" => config.log_file = Some(PathBuf::from(value()?)),
            other => return Err(anyhow!("breakout: unknown argument: {}\n{}", other, USAGE)),
        }
        i += 1;
    }
    Ok(config)
}

fn parse_num<T: std::str::FromStr>(flag: &str, v: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("breakout: invalid {} value: {}", flag, v))
}

fn parse_positive(flag: &str, v: &str) -> Result<f64> {
    let n: f64 = parse_num(flag, v)?;
    if !(n.is_finite() && n > 0.0) {
        return Err(anyhow!("breakout: {} must be a positive number, got {}", flag, v));
    }
    Ok(n)
}
