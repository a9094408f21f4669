//! Configuration for the RiSC-16 simulator.
//!
//! This module defines the runtime options that parameterize a simulation
//! run. Configuration is supplied by the CLI flags or deserialized from
//! JSON; use `Config::default()` for the reference defaults.

use serde::Deserialize;

/// Runtime options for a simulation run.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Enable per-step instruction tracing.
    ///
    /// The core emits TRACE-level events unconditionally; this flag tells
    /// the front end to select a subscriber filter that shows them.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Exit the run loop as soon as the halt encoding retires.
    ///
    /// The run loop always stops at a halted CPU either way, so the model
    /// stays deterministic; the flag is accepted for interface compatibility
    /// with RTL testbench drivers.
    #[serde(default = "Config::default_stop_on_halt")]
    pub stop_on_halt: bool,
}

impl Config {
    /// Halt stops the run loop unless explicitly configured otherwise.
    fn default_stop_on_halt() -> bool {
        true
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            stop_on_halt: true,
        }
    }
}
