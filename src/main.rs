use std::io::{self, Stderr};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use tickr::App;
use tickr::config::load_config;

/// The UI draws on stderr so the chosen ticker can be piped from stdout
type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Pick a ticker symbol with live search suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the ticker search service (overrides config)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Idle time in milliseconds before a search is sent (overrides config)
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Path to a config file [default: ~/.config/tickr/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    tickr::logging::init();

    let loaded = load_config(args.config.as_deref());
    let mut config = loaded.config;
    if let Some(endpoint) = args.endpoint {
        config.search.endpoint = endpoint;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }

    let mut app = App::new(&config);
    app.config_warning = loaded.warning;
    app.start_search(&config.search)?;

    install_panic_hook();
    let mut terminal = init_terminal()?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal before any error or output reaches the screen
    restore_terminal()?;
    result?;

    if let Some(ticker) = &app.output {
        println!("{}", ticker);
    }

    Ok(())
}

fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(
        stderr,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    Terminal::new(CrosstermBackend::new(stderr))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stderr(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
}

/// Leave raw mode before the panic report is printed
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}
