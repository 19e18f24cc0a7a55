use tbl::{Money, Result};

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid initial balance: {0}")]
    InitialBalance(String),
}

#[derive(Debug)]
pub struct InputArgs {
    pub input_path: PathBuf,
    pub initial_balance: Option<Money>,
}

/// Parses the input arguments: a required filepath, then an optional starting balance
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = env::args().skip(1);

    let filename = args
        .next()
        .ok_or_else(|| InputArgsError::Parse("First argument must be the input file.".to_string()))?;

    let input_path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    let initial_balance = match args.next() {
        None => None,
        Some(balance) => Some(
            balance
                .parse::<Money>()
                .with_context(|| InputArgsError::InitialBalance(balance.clone()))?,
        ),
    };

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra}")))?
    }

    return Ok(InputArgs {
        input_path,
        initial_balance,
    });
}
