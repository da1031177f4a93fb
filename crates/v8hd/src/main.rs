mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use v8hd_session::SessionConfig;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "v8hd", version, about = "Roland V-8HD MIDI control CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    /// Substring identifying the switcher's MIDI output (repeatable).
    /// Default: Roland, V-8HD.
    #[arg(
        long = "match",
        value_name = "SUBSTRING",
        env = "V8HD_MATCH",
        value_delimiter = ',',
        global = true
    )]
    match_patterns: Vec<String>,

    /// Client name registered with the MIDI backend.
    #[arg(long, value_name = "NAME", env = "V8HD_CLIENT_NAME", global = true)]
    client_name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::default();
        if let Some(name) = &self.client_name {
            config = config.with_client_name(name.as_str());
        }
        if !self.match_patterns.is_empty() {
            config = config.with_match_patterns(self.match_patterns.iter().cloned());
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = cli.session_config();
    let result = cmd::run(cli.command, format, &config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use v8hd_codec::{ButtonState, TransitionType};

    use super::*;
    use crate::cmd::ControlArgs;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from(["v8hd", "encode", "mix-wipe-time", "1.5"])
            .expect("encode args should parse");
        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.control, ControlArgs::MixWipeTime { seconds: 1.5 })
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_negative_position() {
        let cli = Cli::try_parse_from(["v8hd", "send", "pinp1-position-h", "-25"])
            .expect("negative positions should parse");
        match cli.command {
            Command::Send(args) => {
                assert_eq!(args.control, ControlArgs::Pinp1PositionH { percent: -25.0 })
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_named_values() {
        let cli = Cli::try_parse_from(["v8hd", "encode", "transition-type", "WIPE"])
            .expect("enum names should parse");
        assert!(matches!(
            cli.command,
            Command::Encode(args) if args.control == ControlArgs::TransitionType {
                transition: TransitionType::Wipe
            }
        ));

        let cli = Cli::try_parse_from(["v8hd", "encode", "cut-button"])
            .expect("button state should default");
        assert!(matches!(
            cli.command,
            Command::Encode(args) if args.control == ControlArgs::CutButton {
                state: ButtonState::On
            }
        ));
    }

    #[test]
    fn rejects_unknown_enum_name() {
        let err = Cli::try_parse_from(["v8hd", "encode", "transition-type", "dissolve"])
            .expect_err("unknown transition should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn match_patterns_override_defaults() {
        let cli = Cli::try_parse_from([
            "v8hd",
            "--match",
            "UM-ONE,V-8HD",
            "--client-name",
            "booth",
            "ports",
        ])
        .expect("global flags should parse");
        let config = cli.session_config();
        assert_eq!(config.match_patterns, vec!["UM-ONE", "V-8HD"]);
        assert_eq!(config.client_name, "booth");
    }

    #[test]
    fn decode_takes_three_bytes() {
        let cli = Cli::try_parse_from(["v8hd", "decode", "0xB0", "0x0C", "15"])
            .expect("decode args should parse");
        assert!(matches!(cli.command, Command::Decode(_)));
        assert!(Cli::try_parse_from(["v8hd", "decode", "0xB0", "0x0C"]).is_err());
    }
}
