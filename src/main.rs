mod app;
mod input;
mod ui;

use app::App;
use climber::build_info;
use climber::core::constants::INPUT_POLL_MS;
use climber::EngineConfig;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{handle_key, InputResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq, Eq)]
enum CliCommand {
    Version,
    Help,
    Play {
        config_path: Option<String>,
        /// `Some(None)` serves on the configured port.
        serve: Option<Option<u16>>,
    },
}

fn parse_cli(args: &[String]) -> Result<CliCommand, String> {
    let mut config_path = None;
    let mut serve = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a file path")?;
                config_path = Some(path.clone());
            }
            "--serve" => serve = Some(None),
            other => {
                if let Some(port) = other.strip_prefix("--serve=") {
                    let port = port
                        .parse()
                        .map_err(|_| format!("Invalid port: {}", port))?;
                    serve = Some(Some(port));
                } else {
                    return Err(format!("Unknown command: {}", other));
                }
            }
        }
        i += 1;
    }
    Ok(CliCommand::Play { config_path, serve })
}

fn print_help() {
    println!("Climber - Incremental Floor-Climbing Battler\n");
    println!("Usage: climber [options]\n");
    println!("Options:");
    println!("  --config FILE   Load engine settings from a JSON file");
    println!("  --serve[=PORT]  Host the game over websockets instead of the terminal UI");
    println!("  --version       Show version information");
    println!("  --help          Show this help message");
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let (config_path, serve) = match parse_cli(&args) {
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(CliCommand::Help) => {
            print_help();
            std::process::exit(0);
        }
        Ok(CliCommand::Play { config_path, serve }) => (config_path, serve),
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'climber --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    if let Some(port) = serve {
        init_tracing("info");
        let port = port.unwrap_or(config.serve_port);
        return serve_session(config, port);
    }

    // Logs would tear the alternate screen, so they stay off unless asked for
    init_tracing("off");
    run_terminal(config)
}

#[cfg(feature = "web")]
fn serve_session(config: EngineConfig, port: u16) -> io::Result<()> {
    use climber::core::SessionState;
    use climber::web::{start_web_server, Session};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    let session = Arc::new(Mutex::new(Session::new(SessionState::new(config))));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(start_web_server(port, session))
}

#[cfg(not(feature = "web"))]
fn serve_session(_config: EngineConfig, _port: u16) -> io::Result<()> {
    eprintln!("Web server not available. Rebuild with: cargo build --features web");
    std::process::exit(1);
}

fn run_terminal(config: EngineConfig) -> io::Result<()> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = game_loop(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    let player = &app.session.player;
    println!(
        "Goodbye! Best floor {}, {} gold in hand.",
        player.best_floor, player.gold
    );
    Ok(())
}

fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        let view = app.session.get_state();
        terminal.draw(|frame| ui::draw_ui(frame, app, &view))?;

        // Poll for input (non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press
                    && handle_key(app, key_event) == InputResult::Quit
                {
                    return Ok(());
                }
            }
        }

        app.on_frame(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("climber")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_plays() {
        assert_eq!(
            parse_cli(&args(&[])),
            Ok(CliCommand::Play {
                config_path: None,
                serve: None
            })
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_cli(&args(&["--version"])), Ok(CliCommand::Version));
        assert_eq!(parse_cli(&args(&["-h"])), Ok(CliCommand::Help));
    }

    #[test]
    fn test_serve_with_and_without_port() {
        assert_eq!(
            parse_cli(&args(&["--serve"])),
            Ok(CliCommand::Play {
                config_path: None,
                serve: Some(None)
            })
        );
        assert_eq!(
            parse_cli(&args(&["--config", "c.json", "--serve=8080"])),
            Ok(CliCommand::Play {
                config_path: Some("c.json".to_string()),
                serve: Some(Some(8080))
            })
        );
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_cli(&args(&["--serve=abc"])).is_err());
        assert!(parse_cli(&args(&["--config"])).is_err());
        assert!(parse_cli(&args(&["update"])).is_err());
    }
}
