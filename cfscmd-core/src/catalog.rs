//! Well-known cFS message ids and command codes
//!
//! Values match a default cFS build: command MIDs are the platform command
//! base OR'd with the topic id.

/// Platform base value for command message ids
pub const CMD_BASE_MID: u16 = 0x1800;

/// Executive Services command topic id
pub const ES_CMD_TOPICID: u16 = 0x06;

/// Executive Services command MID (`0x1806`)
pub const ES_CMD_MID: u16 = cmd_topic_to_mid(ES_CMD_TOPICID);

/// Executive Services NOOP command code
pub const ES_NOOP_CC: u8 = 0;

/// Sample app command topic id
pub const SAMPLE_APP_CMD_TOPICID: u16 = 0x82;

/// Sample app command MID (`0x1882`)
pub const SAMPLE_APP_CMD_MID: u16 = cmd_topic_to_mid(SAMPLE_APP_CMD_TOPICID);

/// Sample app NOOP
pub const SAMPLE_APP_NOOP_CC: u8 = 0;

/// Sample app RESET_COUNTERS
pub const SAMPLE_APP_RESET_COUNTERS_CC: u8 = 1;

/// Sample app PROCESS
pub const SAMPLE_APP_PROCESS_CC: u8 = 2;

/// Sample app DISPLAY_PARAM
pub const SAMPLE_APP_DISPLAY_PARAM_CC: u8 = 3;

/// Attitude command. Stock sample_app has no handler for it; the receiving
/// side must be extended before it does anything.
pub const SAMPLE_APP_SET_ATTITUDE_CC: u8 = 4;

/// Width of `ValStr` in the DISPLAY_PARAM payload
pub const SAMPLE_APP_STRING_VAL_LEN: usize = 32;

/// Map a command topic id to its on-wire message id
pub const fn cmd_topic_to_mid(topic_id: u16) -> u16 {
    CMD_BASE_MID | (topic_id & 0x07FF)
}

/// A named command in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownCommand {
    /// Operator-facing name
    pub name: &'static str,
    /// Raw message id
    pub message_id: u16,
    /// Command code
    pub command_code: u8,
    /// Payload size in bytes
    pub payload_len: usize,
    /// One-line description
    pub summary: &'static str,
}

/// Every command with a fixed MID/CC pairing
pub const KNOWN_COMMANDS: &[KnownCommand] = &[
    KnownCommand {
        name: "es-noop",
        message_id: ES_CMD_MID,
        command_code: ES_NOOP_CC,
        payload_len: 0,
        summary: "Executive Services no-op",
    },
    KnownCommand {
        name: "noop",
        message_id: SAMPLE_APP_CMD_MID,
        command_code: SAMPLE_APP_NOOP_CC,
        payload_len: 0,
        summary: "Sample app no-op",
    },
    KnownCommand {
        name: "reset-counters",
        message_id: SAMPLE_APP_CMD_MID,
        command_code: SAMPLE_APP_RESET_COUNTERS_CC,
        payload_len: 0,
        summary: "Sample app reset command/error counters",
    },
    KnownCommand {
        name: "process",
        message_id: SAMPLE_APP_CMD_MID,
        command_code: SAMPLE_APP_PROCESS_CC,
        payload_len: 0,
        summary: "Sample app process",
    },
    KnownCommand {
        name: "display-param",
        message_id: SAMPLE_APP_CMD_MID,
        command_code: SAMPLE_APP_DISPLAY_PARAM_CC,
        payload_len: 4 + 2 + SAMPLE_APP_STRING_VAL_LEN,
        summary: "Sample app display u32/i16/string parameters",
    },
    KnownCommand {
        name: "set-attitude",
        message_id: SAMPLE_APP_CMD_MID,
        command_code: SAMPLE_APP_SET_ATTITUDE_CC,
        payload_len: 6,
        summary: "Yaw/pitch/roll in centi-degrees (needs receiver support)",
    },
];

/// Look up a catalog entry by name
pub fn find(name: &str) -> Option<&'static KnownCommand> {
    KNOWN_COMMANDS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mids() {
        assert_eq!(ES_CMD_MID, 0x1806);
        assert_eq!(SAMPLE_APP_CMD_MID, 0x1882);
        assert_eq!(cmd_topic_to_mid(0xFFFF), 0x1FFF);
    }

    #[test]
    fn test_find() {
        let cmd = find("display-param").unwrap();
        assert_eq!(cmd.command_code, 3);
        assert_eq!(cmd.payload_len, 38);
        assert!(find("launch").is_none());
    }
}
