//! Simulator: owns the CPU and drives the bounded run loop.
//!
//! The simulator holds the program image alongside the CPU so that a reset
//! restores the exact initial program state, and multiple simulator
//! instances never share storage.

use tracing::debug;

use crate::common::SimError;
use crate::config::Config;
use crate::core::{Cpu, StepOutcome};
use crate::mem::ProgramImage;

/// Result of a bounded run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of instructions that retired.
    pub steps: u64,
    /// Whether the CPU is halted.
    pub halted: bool,
}

/// Top-level simulator: CPU architectural state plus run policy.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, PC, halt flag, stats).
    pub cpu: Cpu,
    image: ProgramImage,
    stop_on_halt: bool,
}

impl Simulator {
    /// Creates a simulator with `image` loaded and the CPU at reset state.
    pub fn new(image: ProgramImage, config: &Config) -> Self {
        let mut cpu = Cpu::new();
        cpu.reset(&image);
        Self {
            cpu,
            image,
            stop_on_halt: config.stop_on_halt,
        }
    }

    /// Restores the initial program state: registers, memory, PC, halt flag.
    pub fn reset(&mut self) {
        self.cpu.reset(&self.image);
    }

    /// Executes at most `steps` instructions.
    ///
    /// With `stop_on_halt` set the loop exits as soon as the halt encoding
    /// is reached; otherwise the remaining budget is spent re-fetching the
    /// halt word, which changes no architectural state. Exhausting the
    /// budget does not set the halt flag, so a later `run` resumes from the
    /// same PC.
    ///
    /// # Errors
    ///
    /// Propagates the first fatal [`SimError`] from [`Cpu::step`]; the run
    /// aborts at that instruction with all earlier state transitions
    /// applied.
    pub fn run(&mut self, steps: u64) -> Result<RunOutcome, SimError> {
        let mut executed: u64 = 0;
        for _ in 0..steps {
            if self.cpu.halted && self.stop_on_halt {
                break;
            }
            match self.cpu.step()? {
                StepOutcome::Executed => executed += 1,
                StepOutcome::Halted if self.stop_on_halt => {
                    debug!("halt reached: pc={:#06x}", self.cpu.pc);
                    break;
                }
                StepOutcome::Halted => {}
            }
        }
        Ok(RunOutcome {
            steps: executed,
            halted: self.cpu.halted,
        })
    }
}
