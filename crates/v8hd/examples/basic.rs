//! Set up a mix transition and take it with AUTO.
//!
//! Run with the switcher connected over USB:
//!   cargo run --example basic --features midir

use v8hd::codec::{ButtonState, TransitionType};
use v8hd::session::{connect_device, SessionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = connect_device(&SessionConfig::default())?;
    if let Some(port) = session.port() {
        eprintln!("Connected to {port}");
    }

    session.set_transition_type(TransitionType::Mix)?;
    session.set_mix_wipe_time(1.5)?;
    session.set_auto_button(ButtonState::On)?;

    session.close();
    Ok(())
}
