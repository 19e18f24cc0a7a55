use crate::TransactionType;
use crate::Result;

use std::{fs::File, io, path::Path};

use csv::{Reader, ReaderBuilder, Trim};
use serde::Deserialize;
use thiserror::Error;

/// Represents one request row of the input file: `type,amount`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    #[serde(rename = "type")]
    pub typ: TransactionType,

    pub amount: Option<String>,
}

impl InputEvent {
    /// Raw amount text; a missing amount reads as empty text and is rejected downstream
    pub fn amount_text(&self) -> &str {
        self.amount.as_deref().unwrap_or_default()
    }
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input row at line {line:?}: {message}")]
    Malformed { line: Option<u64>, message: String },
}

impl From<csv::Error> for InputParseError {
    fn from(e: csv::Error) -> Self {
        return Self::Malformed {
            line: e.position().map(|position| position.line()),
            message: e.to_string(),
        };
    }
}

pub fn build_csv_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(filepath)?;

    return Ok(reader);
}

pub fn build_csv_reader_from<R: io::Read>(source: R) -> Reader<R> {
    return ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);
}

/// Deserializes every row, keeping the parse error for rows that do not fit
pub fn read_input_rows<R: io::Read>(
    reader: &mut Reader<R>,
) -> Vec<std::result::Result<InputEvent, InputParseError>> {
    return reader
        .deserialize::<InputEvent>()
        .map(|record| {
            log::debug!("Parsing record into InputEvent: {record:?}");
            record.map_err(InputParseError::from)
        })
        .collect();
}

/// Deserializes every row, logging and skipping the ones that do not parse
pub fn read_input_events<R: io::Read>(reader: &mut Reader<R>) -> Vec<InputEvent> {
    let mut events = vec![];

    for row in read_input_rows(reader) {
        match row {
            Ok(input_event) => events.push(input_event),
            Err(e) => log::warn!("{e}"),
        }
    }

    events
}
