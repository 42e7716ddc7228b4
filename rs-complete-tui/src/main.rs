mod input;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::cursor::Show;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use log::{error, info};
use rs_complete_core::io::{load_corpus, load_text_content};
use rs_complete_core::{CompletionConfig, EditSession, LanguageModel};

use ui::TerminalUi;

/// Interactive word completion over a character n-gram model.
///
/// Tab cycles suggestions, Enter accepts the selected one, Esc quits.
#[derive(Parser)]
#[command(name = "rs-complete", version)]
struct Cli {
	/// Training corpus: a text file or a directory of .txt files
	corpus: PathBuf,

	/// Optional passage shown above the input
	text_content: Option<PathBuf>,

	/// N-gram order (>= 2)
	#[arg(short, long)]
	order: Option<usize>,

	/// Number of suggestions offered
	#[arg(short = 'k', long)]
	top_k: Option<usize>,

	/// JSON configuration file; flags override its values
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Where log output goes while the terminal is in use
	#[arg(long, default_value = "rs-complete.log")]
	log_file: PathBuf,
}

impl Cli {
	/// Merges the configuration file (if any) with the command line flags.
	fn completion_config(&self) -> Result<CompletionConfig, Box<dyn std::error::Error>> {
		let mut config = match &self.config {
			Some(path) => CompletionConfig::from_json_file(path)?,
			None => CompletionConfig::default(),
		};
		if let Some(order) = self.order {
			config.set_order(order)?;
		}
		if let Some(top_k) = self.top_k {
			config.top_k = top_k;
		}
		Ok(config)
	}
}

/// Restores the terminal when dropped, including on early returns.
struct TerminalGuard;

impl TerminalGuard {
	fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		execute!(io::stdout(), EnterAlternateScreen)?;
		Ok(Self)
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
		let _ = disable_raw_mode();
	}
}

fn init_logging(path: &Path) -> io::Result<()> {
	let file = File::create(path)?;
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.target(env_logger::Target::Pipe(Box::new(file)))
		.init();
	Ok(())
}

/// Blocks on terminal input until the session is terminated.
fn run(session: &mut EditSession<'_>, ui: &mut TerminalUi) -> io::Result<()> {
	ui.draw(session)?;
	while session.is_active() {
		if let Some(key) = input::translate(&event::read()?) {
			session.dispatch(key);
		}
		ui.draw(session)?;
	}
	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();
	init_logging(&cli.log_file)?;

	let config = cli.completion_config()?;

	// Corpus failures stop here, before any model is built
	let corpus = load_corpus(&cli.corpus)?;
	let text_content = match &cli.text_content {
		Some(path) => load_text_content(path)?,
		None => String::new(),
	};

	let model = LanguageModel::train(&corpus, config.order)?;
	let mut session = EditSession::with_config(&model, &config);
	let mut ui = TerminalUi::new(text_content);

	let result = {
		let _guard = TerminalGuard::enter()?;
		run(&mut session, &mut ui)
	};

	if let Err(e) = &result {
		error!("Terminal session failed: {e}");
	}
	let metrics = session.current_metrics();
	info!(
		"Session ended: {} letters, {} tabs, {:.2} letters/word, {:.2} tabs/word",
		metrics.letters_typed, metrics.tab_presses, metrics.avg_letters_per_word, metrics.avg_tabs_per_word
	);

	Ok(result?)
}
