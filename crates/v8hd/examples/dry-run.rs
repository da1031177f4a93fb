//! Drive a session against the in-memory transport and print what would
//! reach the switcher.
//!
//! Run with:
//!   cargo run --example dry-run

use v8hd::codec::{ButtonState, InputSource};
use v8hd::session::connect;
use v8hd::transport::MemoryTransport;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let transport = MemoryTransport::new(["Midi Through Port-0", "Roland V-8HD"]);
    let recorder = transport.handle();
    let mut session = connect(transport)?;

    session.set_pinp1_source(InputSource::Hdmi2)?;
    session.set_pinp1_position_h(-25.0)?;
    session.set_pinp1_size(40)?;
    session.set_audio_input_mute(3, ButtonState::On)?;
    session.trigger_h_cut()?;

    if let Err(err) = session.set_mix_wipe_time(4.1) {
        eprintln!("rejected: {err}");
    }
    session.close();

    for message in recorder.sent() {
        let hex: Vec<String> = message.iter().map(|byte| format!("{byte:02X}")).collect();
        println!("{}", hex.join(" "));
    }
    Ok(())
}
