use super::send::{self, CommandRequest};
use anyhow::{Context, Result};
use bytes::Bytes;
use cfscmd_core::{
    catalog,
    payload::{attitude_payload, display_param_payload},
    Destination,
};
use tracing::warn;

/// Named commands with a fixed MID/CC pairing
#[derive(Debug, Clone, PartialEq)]
pub enum NamedCommand {
    /// Executive Services NOOP
    EsNoop,
    /// Sample app NOOP
    Noop,
    /// Sample app RESET_COUNTERS
    ResetCounters,
    /// Sample app PROCESS
    Process,
    /// Sample app DISPLAY_PARAM
    DisplayParam {
        /// `ValU32`
        val_u32: u32,
        /// `ValI16`
        val_i16: i16,
        /// `ValStr`, truncated/padded to 32 bytes
        val_str: String,
    },
    /// Attitude command in degrees
    SetAttitude {
        /// Yaw
        yaw: f64,
        /// Pitch
        pitch: f64,
        /// Roll
        roll: f64,
    },
}

impl NamedCommand {
    /// Operator-facing name, matching the catalog
    pub fn name(&self) -> &'static str {
        match self {
            NamedCommand::EsNoop => "es-noop",
            NamedCommand::Noop => "noop",
            NamedCommand::ResetCounters => "reset-counters",
            NamedCommand::Process => "process",
            NamedCommand::DisplayParam { .. } => "display-param",
            NamedCommand::SetAttitude { .. } => "set-attitude",
        }
    }

    /// Build the request for this command
    ///
    /// The MID/CC pair comes from the core catalog.
    pub fn request(&self, sequence: u16) -> Result<CommandRequest> {
        let entry = catalog::find(self.name())
            .with_context(|| format!("No catalog entry for {}", self.name()))?;
        let request = CommandRequest::new(entry.message_id, entry.command_code, sequence);

        let request = match self {
            NamedCommand::DisplayParam {
                val_u32,
                val_i16,
                val_str,
            } => request.with_payload(display_param_payload(*val_u32, *val_i16, val_str).to_vec()),
            NamedCommand::SetAttitude { yaw, pitch, roll } => {
                let payload = attitude_payload(*yaw, *pitch, *roll)
                    .context("Invalid attitude command")?;
                request.with_payload(payload.to_vec())
            }
            _ => request,
        };

        Ok(request)
    }
}

/// Build and send a named command
pub fn execute(
    command: &NamedCommand,
    sequence: u16,
    destination: &Destination,
    dry_run: bool,
) -> Result<Bytes> {
    if matches!(command, NamedCommand::SetAttitude { .. }) {
        warn!("set-attitude has no handler in stock sample_app; the target will reject it");
    }
    send::execute(&command.request(sequence)?, destination, dry_run)
}
