use std::path::PathBuf;

use colored::Colorize;

use postbox::cli::TerminalPrompt;
use postbox::error::{PostboxError, Result};
use postbox::session;
use postbox::store::fs::FsBackend;
use postbox::store::PostStore;

/// Default location of the post document, relative to the working directory.
const DATA_FILE: &str = "posts.json";
/// Environment override for the document location.
const DATA_FILE_ENV: &str = "POSTBOX_FILE";

const FAREWELL: &str = "That's all. See you next time!";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        match err {
            PostboxError::Interrupted => log::debug!("session interrupted by the user"),
            other => {
                log::error!("session ended on a failure: {other}");
                eprintln!("{}", format!("Error: {}", other).red());
            }
        }
    }

    // The same goodbye no matter how the session ended.
    println!("{}", FAREWELL.cyan());
}

fn run() -> Result<()> {
    let path = std::env::var_os(DATA_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_FILE));
    log::debug!("post document at {}", path.display());

    let mut store = PostStore::with_backend(FsBackend::new(path));
    store.load()?;

    println!("{}", "Welcome to postbox, your tiny journal of posts.".bold());
    let ui = TerminalPrompt::new();
    session::run(&mut store, &ui)
}
