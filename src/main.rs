use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::mpsc;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;

use linkwise::ai::worker::spawn_worker;
use linkwise::app::App;
use linkwise::config::{ConfigResult, load_config};
use linkwise::{headless, logging};

mod args;
use args::Args;

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    let (page_content, available_links) = args.read_inputs()?;

    if args.print {
        return run_print(&args, &page_content, &available_links);
    }

    let log_path = logging::init_file();
    let ConfigResult { config, warning } = load_config(args.config.as_deref());

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(&config.ai, request_rx, response_tx);

    let mut app = App::new(&page_content, &available_links, config.clipboard.backend);
    app.set_channels(request_tx, response_rx);
    app.status = warning.map(|w| format!("Config warning: {w}"));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableBracketedPaste) {
        log::warn!("Bracketed paste unavailable: {}", e);
    }

    let result = run(terminal, &mut app);

    let _ = execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    if let Some(path) = log_path {
        log::debug!("Session log written to {}", path.display());
    }

    result.map(|_| ExitCode::SUCCESS)
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn run_print(args: &Args, page_content: &str, available_links: &str) -> Result<ExitCode> {
    logging::init_stderr();

    let ConfigResult { config, warning } = load_config(args.config.as_deref());
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }

    let outcome = headless::run(
        &config.ai,
        page_content,
        available_links,
        args.format.into(),
    )?;

    if let Some(output) = &outcome.output {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            writeln!(stdout)?;
        }
        stdout.flush()?;
    }

    if let Some(notice) = outcome.notice {
        eprintln!("{notice}");
    }

    Ok(ExitCode::from(outcome.status.exit_code()))
}
