use nidhi::app::App;
use nidhi::config::AppConfig;
use nidhi::{Result, APP_NAME, LOG_FILE};
use std::fs::File;
use std::sync::Mutex;

fn main() -> Result<()> {
    init_logging();

    // Restore the terminal before the default panic output, otherwise the
    // message is lost to the alternate screen
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let config = AppConfig::load()?;
    tracing::info!(name = %config.profile.name, "starting session");

    let mut app = App::new(config)?;
    app.init()?;
    app.run()
}

/// Route tracing output to a file in the data dir; the TUI owns stdout.
/// Logging is best-effort: the app runs fine without it.
fn init_logging() {
    let Some(data_dir) = dirs::data_dir() else {
        return;
    };
    let log_dir = data_dir.join(APP_NAME);
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = File::create(log_dir.join(LOG_FILE)) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
}
