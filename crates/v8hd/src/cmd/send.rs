use tracing::debug;
use v8hd_session::{connect_device, SessionConfig};

use crate::cmd::SendArgs;
use crate::exit::{codec_error, session_error, CliResult, SUCCESS};
use crate::output::{print_unit, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat, config: &SessionConfig) -> CliResult<i32> {
    // Validate before opening the device so a bad value never binds a port.
    let command = args
        .control
        .to_command()
        .map_err(|err| codec_error("invalid value", err))?;
    command
        .encode()
        .map_err(|err| codec_error("invalid value", err))?;

    let mut session =
        connect_device(config).map_err(|err| session_error("connect failed", err))?;
    let port = session
        .port()
        .map(|port| port.name.clone())
        .unwrap_or_default();
    debug!(%command, port = %port, "sending");

    let cc = session
        .send(command)
        .map_err(|err| session_error("send failed", err))?;
    session.close();

    print_unit(&command, &cc, Some(&port), format);
    Ok(SUCCESS)
}
