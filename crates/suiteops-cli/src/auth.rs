//! # Login, Logout, and Registration Subcommands

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use suiteops_client::auth::{RegisterRequest, SignInRequest};

use crate::session;

/// Arguments for the `suiteops login` subcommand.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Staff e-mail address.
    #[arg(long)]
    pub email: String,

    /// Password. Falls back to $SUITEOPS_PASSWORD, then an interactive
    /// prompt.
    #[arg(long)]
    pub password: Option<String>,
}

/// Execute the login subcommand: exchange credentials for a session and
/// store it.
pub async fn run_login(args: &LoginArgs) -> Result<u8> {
    let password = resolve_password(args.password.clone())?;
    let client = crate::anonymous_client()?;

    match client
        .auth()
        .sign_in(&SignInRequest {
            email: args.email.clone(),
            password,
        })
        .await
    {
        Ok(session) => {
            session::save(&session)?;
            println!(
                "Signed in as {} <{}>.",
                session.name.as_deref().unwrap_or("?"),
                session.email.as_deref().unwrap_or(&args.email)
            );
            Ok(0)
        }
        Err(err) if err.status() == Some(401) => {
            println!("Invalid credentials.");
            Ok(1)
        }
        Err(err) => Err(err).context("sign-in failed"),
    }
}

/// Execute the logout subcommand: drop the stored session.
pub fn run_logout() -> Result<u8> {
    if session::clear()? {
        println!("Session dropped.");
    } else {
        println!("No stored session.");
    }
    Ok(0)
}

/// Arguments for the `suiteops register` subcommand.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,

    /// E-mail address.
    #[arg(long)]
    pub email: String,

    /// Phone number, 8-15 digits with optional leading +.
    #[arg(long)]
    pub phone: String,

    /// Birth date as YYYY-MM-DD.
    #[arg(long)]
    pub birth_date: String,

    /// Favorite team; the registration form requires it.
    #[arg(long)]
    pub favorite_team: String,

    /// Password. Falls back to $SUITEOPS_PASSWORD, then an interactive
    /// prompt.
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation; defaults to the password when omitted.
    #[arg(long)]
    pub confirm: Option<String>,
}

/// Execute the register subcommand: validate the form client-side, then
/// submit it.
pub async fn run_register(args: &RegisterArgs) -> Result<u8> {
    let password = resolve_password(args.password.clone())?;
    let confirmation = args.confirm.clone().unwrap_or_else(|| password.clone());

    let request = RegisterRequest {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        birth_date: args.birth_date.clone(),
        password,
        favorite_team: args.favorite_team.clone(),
    };

    if let Err(err) = request.validate(&confirmation) {
        println!("Registration rejected: {err}");
        return Ok(1);
    }

    let client = crate::anonymous_client()?;
    client
        .auth()
        .register(&request)
        .await
        .context("registration failed")?;

    println!(
        "User registered. Sign in with `suiteops login --email {}`.",
        args.email
    );
    Ok(0)
}

fn resolve_password(flag: Option<String>) -> Result<String> {
    if let Some(password) = flag {
        return Ok(password);
    }
    if let Ok(password) = std::env::var("SUITEOPS_PASSWORD") {
        return Ok(password);
    }

    eprint!("Password: ");
    std::io::stderr().flush().context("failed to flush prompt")?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
