use std::time::Duration;

use anyhow::ensure;
use clap::{Parser, ValueEnum};
use life_core::OscillationCheck;

/// Command line arguments for the Game of Life window.
///
/// The board gets one cell per `cell_size` pixels of the window in each direction.
#[derive(Parser, Debug)]
#[command(name = "life-gui", about = "Interactive Conway's Game of Life")]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    pub window_width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    pub window_height: u32,

    /// Edge length of one cell in pixels
    #[arg(short = 'c', long, default_value_t = 10)]
    pub cell_size: u32,

    /// Minimum time between generations in milliseconds while throttled.
    /// 0 advances once per frame.
    #[arg(short = 't', long, default_value_t = 0)]
    pub tick_ms: u64,

    /// Seed for the random fill, fresh entropy when omitted
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Start with a randomly populated board instead of an empty one
    #[arg(short = 'r', long)]
    pub random: bool,

    /// How period-2 oscillators are detected
    #[arg(long, value_enum, default_value_t = OscillationMode::OddSnapshot)]
    pub oscillation: OscillationMode,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OscillationMode {
    /// Compare against a snapshot taken on odd generations
    OddSnapshot,
    /// Compare against the board from two generations back, every generation
    EveryTick,
}

impl From<OscillationMode> for OscillationCheck {
    fn from(mode: OscillationMode) -> Self {
        match mode {
            OscillationMode::OddSnapshot => OscillationCheck::OddSnapshot,
            OscillationMode::EveryTick => OscillationCheck::EveryTick,
        }
    }
}

/// Validated launch settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_size: [f32; 2],
    pub cell_size: f32,
    pub columns: usize,
    pub rows: usize,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub random: bool,
    pub oscillation_check: OscillationCheck,
}

impl Args {
    pub fn settings(&self) -> anyhow::Result<Settings> {
        ensure!(self.cell_size > 0, "cell size must be at least one pixel");
        ensure!(
            self.window_width >= self.cell_size && self.window_height >= self.cell_size,
            "a {}x{} window cannot hold a single {} px cell",
            self.window_width,
            self.window_height,
            self.cell_size
        );

        Ok(Settings {
            window_size: [self.window_width as f32, self.window_height as f32],
            cell_size: self.cell_size as f32,
            columns: (self.window_width / self.cell_size) as usize,
            rows: (self.window_height / self.cell_size) as usize,
            tick_interval: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            random: self.random,
            oscillation_check: self.oscillation.into(),
        })
    }
}
