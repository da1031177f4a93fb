use clap::{Args, Subcommand};
use v8hd_session::SessionConfig;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod control;
pub mod decode;
pub mod doctor;
pub mod encode;
pub mod ports;
pub mod send;
pub mod version;

pub use control::ControlArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List MIDI output ports and flag the ones that match.
    Ports(PortsArgs),
    /// Open the V-8HD and send one control.
    Send(SendArgs),
    /// Print the Control-Change message for a control without sending it.
    Encode(EncodeArgs),
    /// Print the control a three-byte message sets.
    Decode(DecodeArgs),
    /// Run MIDI backend and device health checks.
    Doctor(DoctorArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, config: &SessionConfig) -> CliResult<i32> {
    match command {
        Command::Ports(args) => ports::run(args, format, config),
        Command::Send(args) => send::run(args, format, config),
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Doctor(args) => doctor::run(args, format, config),
        Command::Version(args) => version::run(args, format),
    }
}

#[derive(Args, Debug, Default)]
pub struct PortsArgs {}

#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(subcommand)]
    pub control: ControlArgs,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub control: ControlArgs,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Status byte (decimal, or hex with a 0x prefix).
    pub status: String,
    /// Control byte.
    pub control: String,
    /// Value byte.
    pub value: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct DoctorArgs {}
