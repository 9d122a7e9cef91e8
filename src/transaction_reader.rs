// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reads transactions from CSV.
//!
//! Two layouts are understood. If the first line has a `Transaction`
//! column, each following record's cell in that column holds the items,
//! comma separated (quoted when the cell itself contains commas). Otherwise
//! every line is a transaction and every field an item.

use crate::dataset::Dataset;
use crate::error::{MiningError, Result};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

const TRANSACTION_COLUMN: &str = "Transaction";

#[derive(Clone, Copy)]
enum Layout {
    Unknown,
    Column(usize),
    PerLine,
}

pub struct TransactionReader<R> {
    reader: R,
    layout: Layout,
    line_number: usize,
}

impl TransactionReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TransactionReader<BufReader<File>>> {
        let file = File::open(path)?;
        Ok(TransactionReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TransactionReader<R> {
    pub fn new(reader: R) -> TransactionReader<R> {
        TransactionReader {
            reader,
            layout: Layout::Unknown,
            line_number: 0,
        }
    }

    fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        let mut line = String::new();
        loop {
            line.clear();
            let len = self.reader.read_line(&mut line)?;
            if len == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_fields(line).ok_or_else(|| MiningError::Parse {
                line: self.line_number,
                message: "unterminated quoted field".to_string(),
            })?;

            let items = match self.layout {
                Layout::Unknown => {
                    let header = fields
                        .iter()
                        .position(|f| f.trim().eq_ignore_ascii_case(TRANSACTION_COLUMN));
                    match header {
                        Some(column) => {
                            self.layout = Layout::Column(column);
                            continue;
                        }
                        None => {
                            self.layout = Layout::PerLine;
                            fields
                        }
                    }
                }
                Layout::Column(column) => match fields.get(column) {
                    Some(cell) => cell.split(',').map(String::from).collect(),
                    None => {
                        return Err(MiningError::Parse {
                            line: self.line_number,
                            message: format!("missing {} column", TRANSACTION_COLUMN),
                        })
                    }
                },
                Layout::PerLine => fields,
            };

            let items: Vec<String> = items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();

            if !items.is_empty() {
                return Ok(Some(items));
            }
        }
    }
}

impl<R: BufRead> Iterator for TransactionReader<R> {
    type Item = Result<Vec<String>>;
    fn next(&mut self) -> Option<Result<Vec<String>>> {
        self.read_record().transpose()
    }
}

// Splits one CSV line on commas outside double quotes. A doubled quote
// inside a quoted field is a literal quote. None if a quote is left open.
fn split_fields(line: &str) -> Option<Vec<String>> {
    let mut fields = vec![];
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    if in_quotes {
        return None;
    }
    fields.push(field);
    Some(fields)
}

pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let transactions = TransactionReader::open(path)?.collect::<Result<Vec<Vec<String>>>>()?;
    Ok(Dataset::from_transactions(transactions))
}
