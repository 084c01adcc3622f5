use std::path::PathBuf;
use std::sync::Once;

use clap::Parser;
use smartcalc::error::CalcDiagnostic;
use smartcalc::session::{Outcome, Session, HELP};

const PROMPT: &str = "> ";

#[derive(Parser)]
#[command(name = "smartcalc")]
#[command(about = "An integer calculator with arbitrary-precision variables")]
#[command(version)]
struct Cli {
    /// File of lines to run, one expression, assignment or command per line
    script: Option<PathBuf>,

    /// Run a line directly (may be given more than once)
    #[arg(short = 'e', long, allow_hyphen_values = true)]
    eval: Vec<String>,

    /// Print only the bare error message for failing lines
    #[arg(long)]
    terse: bool,

    /// Do not read or write the REPL history file
    #[arg(long)]
    no_history: bool,
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if !cli.eval.is_empty() {
        let ok = run_batch(cli.eval.iter().map(String::as_str), cli.terse);
        std::process::exit(i32::from(!ok));
    } else if let Some(path) = &cli.script {
        match std::fs::read_to_string(path) {
            Ok(source) => {
                let ok = run_batch(source.lines(), cli.terse);
                std::process::exit(i32::from(!ok));
            }
            Err(e) => {
                eprintln!("smartcalc: cannot read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        run_repl(&cli);
    }
}

/// Result of running a single line.
enum Step {
    Continue,
    Failed,
    Exit,
}

fn run_line(session: &mut Session, line: &str, terse: bool) -> Step {
    match session.process(line) {
        Ok(Outcome::Silent) => Step::Continue,
        Ok(Outcome::Value(value)) => {
            println!("{value}");
            Step::Continue
        }
        Ok(Outcome::Help) => {
            println!("{HELP}");
            Step::Continue
        }
        Ok(Outcome::Exit) => {
            println!("Bye!");
            Step::Exit
        }
        Err(e) => {
            report(&e, terse);
            Step::Failed
        }
    }
}

fn report(e: &CalcDiagnostic, terse: bool) {
    if terse {
        eprintln!("{}", e.error);
    } else {
        eprintln!("{e}");
    }
}

/// Run lines in one session. Returns `false` if any line failed.
fn run_batch<'a>(lines: impl Iterator<Item = &'a str>, terse: bool) -> bool {
    let mut session = Session::new();
    let mut ok = true;
    for line in lines {
        match run_line(&mut session, line, terse) {
            Step::Continue => {}
            Step::Failed => ok = false,
            Step::Exit => break,
        }
    }
    ok
}

fn history_path() -> Option<PathBuf> {
    home::home_dir().map(|d| d.join(".smartcalc_history"))
}

fn run_repl(cli: &Cli) {
    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("smartcalc: cannot initialize line editor: {e}");
            std::process::exit(1);
        }
    };

    let history = if cli.no_history { None } else { history_path() };
    if let Some(path) = &history {
        let _ = rl.load_history(path);
    }

    let mut session = Session::new();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                if let Step::Exit = run_line(&mut session, trimmed, cli.terse) {
                    break;
                }
            }
            Err(
                rustyline::error::ReadlineError::Interrupted | rustyline::error::ReadlineError::Eof,
            ) => {
                println!("Bye!");
                break;
            }
            Err(e) => {
                eprintln!("smartcalc: {e}");
                break;
            }
        }
    }

    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("failed to save history to {}: {e}", path.display());
        }
    }
}
