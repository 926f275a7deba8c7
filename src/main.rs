use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Instant,
};
use tracing::{info, warn};

use slowpoke::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    pad::Pad,
    runtime::{
        CrosstermEventSource, FixedTicker, PadEvent, PadEventSource, Runner, Ticker,
    },
    settings::Settings,
};

/// a typing pad that tells you off for typing too fast
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type into the pad at a relaxed pace. Press keys faster than the threshold and the pad gets annoyed for a while. Esc or Ctrl+C quits."
)]
pub struct Cli {
    /// minimum milliseconds between keystrokes before the pad gets annoyed
    #[clap(short = 't', long)]
    threshold: Option<u64>,

    /// how many thresholds the annoyance lasts
    #[clap(long)]
    revert_factor: Option<u32>,

    /// config file to read instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// file to write logs to (filter with SLOWPOKE_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        self.config
            .as_ref()
            .map(FileConfigStore::with_path)
            .unwrap_or_default()
    }

    /// Command line flags win over the config file
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(threshold) = self.threshold {
            cfg.threshold_ms = threshold;
        }
        if let Some(factor) = self.revert_factor {
            cfg.revert_factor = factor;
        }
        cfg
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) {
        if let Err(err) = logging::init(&path) {
            eprintln!("slowpoke: not logging to {}: {}", path.display(), err);
        }
    }

    let store = cli.config_store();
    let cfg = cli.apply(store.load());
    if cli.save_config {
        store.save(&cfg)?;
        info!(path = %store.path().display(), "saved config");
    }

    let settings = match Settings::try_from(&cfg) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(%err, "invalid settings");
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, err).exit();
        }
    };
    info!(
        threshold_ms = cfg.threshold_ms,
        revert_factor = cfg.revert_factor,
        "starting"
    );

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut pad = Pad::new(settings);
    let mut runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    let result = start_tui(&mut terminal, &mut pad, &mut runner);
    pad.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    info!("bye");
    result
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn start_tui<B: Backend, E: PadEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    pad: &mut Pad,
    runner: &mut Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*pad, f.area()))?;

    loop {
        match runner.step() {
            PadEvent::Tick => pad.on_frame(Instant::now()),
            PadEvent::Resize => {}
            PadEvent::Key(key) => {
                if is_quit(&key) {
                    break;
                }
                pad.on_key(key, Instant::now());
            }
        }
        terminal.draw(|f| f.render_widget(&*pad, f.area()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use slowpoke::runtime::TestEventSource;
    use std::{sync::mpsc, time::Duration};
    use tempfile::tempdir;

    fn key(code: KeyCode) -> PadEvent {
        PadEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["slowpoke"]);

        assert_eq!(cli.threshold, None);
        assert_eq!(cli.revert_factor, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_file, None);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_threshold() {
        let cli = Cli::parse_from(["slowpoke", "-t", "200"]);
        assert_eq!(cli.threshold, Some(200));

        let cli = Cli::parse_from(["slowpoke", "--threshold", "500"]);
        assert_eq!(cli.threshold, Some(500));
    }

    #[test]
    fn test_cli_paths_and_flags() {
        let cli = Cli::parse_from([
            "slowpoke",
            "-c",
            "/tmp/pad.json",
            "--log-file",
            "/tmp/pad.log",
            "--revert-factor",
            "2",
            "--save-config",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pad.json")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/pad.log")));
        assert_eq!(cli.revert_factor, Some(2));
        assert!(cli.save_config);
    }

    #[test]
    fn test_cli_rejects_bad_threshold() {
        assert!(Cli::try_parse_from(["slowpoke", "-t", "fast"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["slowpoke", "-t", "120", "--revert-factor", "3"]);
        let cfg = cli.apply(Config::default());
        assert_eq!(cfg.threshold_ms, 120);
        assert_eq!(cfg.revert_factor, 3);
        assert_eq!(cfg.warnings, Config::default().warnings);

        let untouched = Cli::parse_from(["slowpoke"]).apply(Config::default());
        assert_eq!(untouched, Config::default());
    }

    #[test]
    fn test_cli_config_store_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        let cli = Cli::parse_from(["slowpoke", "-c", path.to_str().unwrap()]);
        assert_eq!(cli.config_store().path(), path.as_path());
    }

    #[test]
    fn test_is_quit() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_start_tui_quits_on_esc() {
        let (tx, rx) = mpsc::channel();
        tx.send(key(KeyCode::Char('h'))).unwrap();
        tx.send(key(KeyCode::Esc)).unwrap();

        let mut runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(1)),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut pad = Pad::new(Settings::default());

        start_tui(&mut terminal, &mut pad, &mut runner).unwrap();

        assert_eq!(pad.surface().content(), "h");
        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("h|"));
    }

    #[test]
    fn test_start_tui_back_to_back_keys_annoy() {
        let (tx, rx) = mpsc::channel();
        tx.send(key(KeyCode::Char('h'))).unwrap();
        tx.send(key(KeyCode::Char('i'))).unwrap();
        tx.send(key(KeyCode::Esc)).unwrap();

        let mut runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(1)),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut pad = Pad::new(Settings::default());

        start_tui(&mut terminal, &mut pad, &mut runner).unwrap();

        assert!(pad.is_annoyed());
        assert_eq!(pad.surface().content(), "h");
        assert_eq!(pad.pending_timers(), 1);
        pad.shutdown();
        assert_eq!(pad.pending_timers(), 0);
    }
}
