use cursive::Cursive;
use cursive::event::{Event, Key};
use tracing::info;

use crate::logging;
use crate::state::AppState;
use crate::views::{on_escape, show_calculator_form};

/// Installs fresh session state and the global key bindings.
pub fn setup_app(siv: &mut Cursive) {
    siv.set_user_data(AppState::new());

    siv.add_global_callback(Event::CtrlChar('q'), quit);
    siv.add_global_callback(Key::Esc, on_escape);
}

fn quit(siv: &mut Cursive) {
    info!("Executing quit handler");
    siv.quit();
}

/// Runs the interactive form until the user quits.
///
/// Console logging is switched off while the form owns the terminal.
pub fn run_form() -> anyhow::Result<()> {
    logging::set_console_enabled(false)?;

    let mut siv = cursive::default();
    setup_app(&mut siv);
    show_calculator_form(&mut siv);

    info!("calculator form started");
    siv.run();
    info!("calculator form closed");
    Ok(())
}
