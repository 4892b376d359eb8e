use anyhow::Result;
use std::io;
use tracing::info;

mod config;
mod logging;
mod quiz;
mod source;
mod terminal;

use crate::config::Config;
use crate::quiz::QuestionPool;
use crate::terminal::Terminal;

fn run() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config);

    let (table, origin) = source::load_rows(&config)?;
    let pool = QuestionPool::from_table(&table);
    info!(
        "{} usable questions from {} ({} rows discarded)",
        pool.len(),
        origin,
        pool.discarded()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());
    terminal.run(&pool, &config.settings(), &mut rand::thread_rng())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
