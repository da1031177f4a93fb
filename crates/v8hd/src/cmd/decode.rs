use v8hd_codec::{Command, ControlChange};

use crate::cmd::DecodeArgs;
use crate::exit::{codec_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_unit, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = [
        parse_byte("status", &args.status)?,
        parse_byte("control", &args.control)?,
        parse_byte("value", &args.value)?,
    ];
    let cc = ControlChange::from_bytes(&bytes).map_err(|err| codec_error("decode failed", err))?;
    let command = Command::decode(cc).map_err(|err| codec_error("decode failed", err))?;

    print_unit(&command, &cc, None, format);
    Ok(SUCCESS)
}

/// Decimal, or hex with a `0x` prefix.
fn parse_byte(name: &str, input: &str) -> CliResult<u8> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => input.parse(),
    };
    parsed.map_err(|_| CliError::new(USAGE, format!("{name} byte is not a byte: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_byte_accepts_decimal_and_hex() {
        assert_eq!(parse_byte("status", "0xB0").unwrap(), 0xB0);
        assert_eq!(parse_byte("status", "0Xb0").unwrap(), 0xB0);
        assert_eq!(parse_byte("value", "15").unwrap(), 15);
        assert_eq!(parse_byte("value", " 0x0f ").unwrap(), 15);
    }

    #[test]
    fn parse_byte_rejects_garbage() {
        for input in ["", "256", "0x100", "B0", "-1"] {
            let err = parse_byte("value", input).unwrap_err();
            assert_eq!(err.code, USAGE, "{input}");
        }
    }
}
