use anyhow::Result;
use cfscmd_cli::{
    commands::{self, sample::NamedCommand, send::CommandRequest},
    config::TargetConfig,
    parse_u16, parse_u8, ChecksumArg, HexPayload,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "cfscmd")]
#[command(about = "cfscmd - Build and send cFS command packets to CI_LAB", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// CI_LAB host (overrides config and CFSCMD_TARGET_IP)
    #[arg(long, global = true)]
    target: Option<String>,

    /// CI_LAB UDP port (overrides config and CFSCMD_CI_LAB_PORT)
    #[arg(long, global = true)]
    port: Option<u16>,

    /// TOML config file with `host` and `port`
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print the encoded packet as hex instead of sending it
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Raw packet fields shared by `send` and `build`
#[derive(Args)]
struct PacketArgs {
    /// Message id, decimal or 0x-prefixed (masked to 11 bits)
    #[arg(long, value_parser = parse_u16)]
    mid: u16,

    /// Command code, decimal or 0x-prefixed
    #[arg(long, value_parser = parse_u8)]
    cc: u8,

    /// Payload as hex bytes
    #[arg(long, default_value = "")]
    payload: HexPayload,

    /// Sequence count (masked to 14 bits)
    #[arg(long, value_parser = parse_u16, default_value = "1")]
    seq: u16,

    /// Checksum convention
    #[arg(long, value_enum, default_value_t = ChecksumArg::Xor)]
    checksum: ChecksumArg,
}

impl PacketArgs {
    fn request(&self) -> CommandRequest {
        let mut request =
            CommandRequest::new(self.mid, self.cc, self.seq).with_payload(self.payload.0.clone());
        request.checksum = self.checksum.into();
        request
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Send an arbitrary command packet
    Send(PacketArgs),

    /// Encode a command packet without sending it
    Build {
        #[command(flatten)]
        packet: PacketArgs,

        /// Output file for the raw packet, or - for hex on stdout
        #[arg(short, long, default_value = "-")]
        output: String,
    },

    /// Decode a packet and verify its length and checksum
    Verify {
        /// Input file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Input holds hex text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// Checksum convention
        #[arg(long, value_enum, default_value_t = ChecksumArg::Xor)]
        checksum: ChecksumArg,

        /// Print the decoded packet as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the named commands
    List,

    /// Executive Services NOOP
    EsNoop {
        #[arg(long, value_parser = parse_u16, default_value = "1")]
        seq: u16,
    },

    /// Sample app NOOP
    Noop {
        #[arg(long, value_parser = parse_u16, default_value = "1")]
        seq: u16,
    },

    /// Sample app RESET_COUNTERS
    ResetCounters {
        #[arg(long, value_parser = parse_u16, default_value = "1")]
        seq: u16,
    },

    /// Sample app PROCESS
    Process {
        #[arg(long, value_parser = parse_u16, default_value = "1")]
        seq: u16,
    },

    /// Sample app DISPLAY_PARAM
    DisplayParam {
        /// ValU32
        #[arg(long = "u32")]
        val_u32: u32,

        /// ValI16
        #[arg(long = "i16", allow_hyphen_values = true)]
        val_i16: i16,

        /// ValStr (ASCII, truncated to 32 bytes)
        #[arg(long = "text", default_value = "")]
        val_str: String,

        #[arg(long, value_parser = parse_u16, default_value = "1")]
        seq: u16,
    },

    /// Attitude command (needs a receiver-side handler for CC 4)
    SetAttitude {
        #[arg(long, allow_hyphen_values = true)]
        yaw: f64,

        #[arg(long, allow_hyphen_values = true)]
        pitch: f64,

        #[arg(long, allow_hyphen_values = true)]
        roll: f64,

        #[arg(long, value_parser = parse_u16, default_value = "1")]
        seq: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let target = TargetConfig::load(cli.config.as_deref())?.with_overrides(cli.target, cli.port);
    let destination = target.destination();
    let dry_run = cli.dry_run;

    let named = |command: NamedCommand, seq: u16| {
        commands::sample::execute(&command, seq, &destination, dry_run).map(|_| ())
    };

    // Execute command
    match cli.command {
        Commands::Send(packet) => {
            commands::send::execute(&packet.request(), &destination, dry_run).map(|_| ())
        }

        Commands::Build { packet, output } => {
            commands::build::execute(&packet.request(), &output).map(|_| ())
        }

        Commands::Verify {
            input,
            hex,
            checksum,
            json,
        } => commands::verify::execute(&input, hex, checksum.into(), json).map(|_| ()),

        Commands::List => {
            commands::list::execute();
            Ok(())
        }

        Commands::EsNoop { seq } => named(NamedCommand::EsNoop, seq),
        Commands::Noop { seq } => named(NamedCommand::Noop, seq),
        Commands::ResetCounters { seq } => named(NamedCommand::ResetCounters, seq),
        Commands::Process { seq } => named(NamedCommand::Process, seq),

        Commands::DisplayParam {
            val_u32,
            val_i16,
            val_str,
            seq,
        } => named(
            NamedCommand::DisplayParam {
                val_u32,
                val_i16,
                val_str,
            },
            seq,
        ),

        Commands::SetAttitude {
            yaw,
            pitch,
            roll,
            seq,
        } => named(NamedCommand::SetAttitude { yaw, pitch, roll }, seq),
    }
}
