use v8hd_transport::MidiTransport;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::session::Session;

/// Discover the switcher on `transport` and open a session to it.
pub fn connect<T: MidiTransport>(transport: T) -> Result<Session<T>> {
    connect_with_config(transport, &SessionConfig::default())
}

/// Connect with explicit configuration.
pub fn connect_with_config<T: MidiTransport>(
    transport: T,
    config: &SessionConfig,
) -> Result<Session<T>> {
    let mut session = Session::with_config(transport, config.clone());
    session.discover_and_open()?;
    Ok(session)
}

/// Open a session over the system MIDI outputs.
#[cfg(feature = "midir")]
pub fn connect_device(
    config: &SessionConfig,
) -> Result<Session<v8hd_transport::MidirTransport>> {
    let transport = v8hd_transport::MidirTransport::new(&config.client_name)?;
    connect_with_config(transport, config)
}

#[cfg(test)]
mod tests {
    use v8hd_transport::MemoryTransport;

    use super::*;
    use crate::error::SessionError;
    use crate::session::SessionState;

    #[test]
    fn connect_convenience() {
        let transport = MemoryTransport::new(["Midi Through", "V-8HD"]);
        let handle = transport.handle();

        let mut session = connect(transport).unwrap();
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.port().map(|port| port.index), Some(1));

        session.set_mix_wipe_time(1.5).unwrap();
        assert_eq!(handle.sent(), vec![vec![0xB0, 0x0C, 15]]);
    }

    #[test]
    fn connect_with_config_uses_patterns_and_label() {
        let config = SessionConfig::default()
            .with_match_patterns(["Through"])
            .with_port_label("switcher");
        let session =
            connect_with_config(MemoryTransport::new(["Midi Through", "V-8HD"]), &config).unwrap();
        assert_eq!(session.port().map(|port| port.index), Some(0));
        assert_eq!(session.config().port_label, "switcher");
    }

    #[test]
    fn connect_fails_without_device() {
        let err = connect(MemoryTransport::new(["Midi Through"])).unwrap_err();
        assert!(matches!(err, SessionError::DeviceNotFound { .. }));
    }
}
