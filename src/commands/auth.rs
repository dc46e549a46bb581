//! Authentication commands: login, logout, whoami.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;
use crate::remote::{DirectoryClient, authenticate};
use crate::session::{Session, SessionStore};

/// Authenticate against the directory and persist the session identity.
pub async fn cmd_login(username: &str, password: Option<&str>) -> Result<()> {
    let store = SessionStore::open_default()?;

    if let Some(session) = store.load()? {
        println!(
            "Already logged in as {}. Run `larder logout` to switch users.",
            session.first_name.bold()
        );
        return Ok(());
    }

    let password = match password {
        Some(p) => p.to_string(),
        None => prompt_password()?,
    };

    let config = Config::load()?;
    let directory = DirectoryClient::from_config(&config)?;
    let user = authenticate(&directory, username, &password).await?;

    store.save(&Session {
        first_name: user.first_name.clone(),
    })?;

    println!(
        "{} Welcome, {}!",
        "Login success.".green().bold(),
        user.first_name.bold()
    );
    Ok(())
}

/// Clear the session identity.
pub fn cmd_logout() -> Result<()> {
    let store = SessionStore::open_default()?;
    store.clear()?;
    println!("Logged out.");
    Ok(())
}

/// Print the current session identity.
pub fn cmd_whoami() -> Result<()> {
    let store = SessionStore::open_default()?;
    match store.load()? {
        Some(session) => println!("{}", session.first_name),
        None => println!("{}", "not logged in".dimmed()),
    }
    Ok(())
}

fn prompt_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
