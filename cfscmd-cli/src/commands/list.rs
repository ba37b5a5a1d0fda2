use cfscmd_core::catalog::KNOWN_COMMANDS;

/// Print the command catalog
pub fn execute() {
    println!("{:<16} {:<8} {:<4} {:<8} DESCRIPTION", "NAME", "MID", "CC", "PAYLOAD");
    for cmd in KNOWN_COMMANDS {
        println!(
            "{:<16} 0x{:04X}   {:<4} {:<8} {}",
            cmd.name, cmd.message_id, cmd.command_code, cmd.payload_len, cmd.summary
        );
    }
}
