use crate::cmd::EncodeArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_unit, OutputFormat};

/// Encode without touching any MIDI device.
pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let command = args
        .control
        .to_command()
        .map_err(|err| codec_error("invalid value", err))?;
    let cc = command
        .encode()
        .map_err(|err| codec_error("invalid value", err))?;

    print_unit(&command, &cc, None, format);
    Ok(SUCCESS)
}
