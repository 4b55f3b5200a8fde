// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Instance loader for textual distance matrices.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `DistanceMatrix`. The format is line-oriented: the token count of the
//! first line determines the city count `n`, and that line plus the `n - 1`
//! following lines must each contain exactly `n` non-negative integers.
//! Diagonal entries are present in the file but semantically unused.
//!
//! Loading is all-or-nothing: on any error no partially built matrix is
//! exposed. Errors carry enough context (row number, offending token) to
//! point directly at the problem in the file.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice,
//! making it convenient to integrate with benchmarks, tests, and tooling.

use crate::matrix::DistanceMatrix;
use num_traits::PrimInt;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the matrix loading process.
#[derive(Debug)]
pub enum MatrixLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The source contained no rows at all.
    EmptySource,
    /// The source ended before all `n` rows were read.
    MissingRows {
        /// The number of rows the first line promised.
        expected: usize,
        /// The number of rows actually present.
        actual: usize,
    },
    /// A row's token count differs from the city count of the first row.
    RowLength {
        /// The zero-based row that was malformed.
        row: usize,
        /// The number of tokens the first row promised.
        expected: usize,
        /// The number of tokens actually found.
        actual: usize,
    },
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// A parsed entry was negative. Edge costs must be non-negative.
    NegativeCost {
        /// The zero-based row of the offending entry.
        row: usize,
        /// The zero-based column of the offending entry.
        column: usize,
    },
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for MatrixLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::EmptySource => write!(f, "Instance file is empty"),
            Self::MissingRows { expected, actual } => write!(
                f,
                "Instance file ended early: expected {} rows but found {}",
                expected, actual
            ),
            Self::RowLength {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Row {} has {} entries but the first row declared {}",
                row, actual, expected
            ),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::NegativeCost { row, column } => write!(
                f,
                "Negative edge cost at row {}, column {}; costs must be non-negative",
                row, column
            ),
        }
    }
}

impl std::error::Error for MatrixLoaderError {}

impl From<std::io::Error> for MatrixLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for MatrixLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

/// A loader for textual TSP distance matrices.
///
/// The format this parser expects is as follows (one row per line,
/// whitespace-separated tokens, `n` taken from the first line):
///
/// ```raw
/// d_0_0 d_0_1 ... d_0_{n-1}
/// d_1_0 d_1_1 ... d_1_{n-1}
/// ...
/// d_{n-1}_0 ... d_{n-1}_{n-1}
/// ```
///
/// Content after the `n`-th row is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLoader<T> {
    _marker: std::marker::PhantomData<T>,
}

impl<T> Default for MatrixLoader<T> {
    fn default() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> MatrixLoader<T>
where
    T: PrimInt + FromStr,
{
    /// Creates a new `MatrixLoader`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a matrix from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<DistanceMatrix<T>, MatrixLoaderError> {
        let mut lines = rdr.lines();

        let first_line = match lines.next() {
            Some(line) => line?,
            None => return Err(MatrixLoaderError::EmptySource),
        };

        let first_row = Self::parse_row(&first_line, 0, None)?;
        let num_cities = first_row.len();
        if num_cities == 0 {
            return Err(MatrixLoaderError::EmptySource);
        }

        let mut costs = Vec::with_capacity(num_cities * num_cities);
        costs.extend(first_row);

        for row in 1..num_cities {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(MatrixLoaderError::MissingRows {
                        expected: num_cities,
                        actual: row,
                    });
                }
            };
            costs.extend(Self::parse_row(&line, row, Some(num_cities))?);
        }

        Ok(DistanceMatrix::new(num_cities, costs))
    }

    /// Loads a matrix from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<DistanceMatrix<T>, MatrixLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a matrix from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<DistanceMatrix<T>, MatrixLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a matrix from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<DistanceMatrix<T>, MatrixLoaderError> {
        self.from_reader(s.as_bytes())
    }

    /// Parses one row of whitespace-separated tokens. When `expected` is
    /// given, the token count must match it exactly.
    fn parse_row(
        line: &str,
        row: usize,
        expected: Option<usize>,
    ) -> Result<Vec<T>, MatrixLoaderError> {
        let mut values = match expected {
            Some(n) => Vec::with_capacity(n),
            None => Vec::new(),
        };

        for (column, token) in line.split_whitespace().enumerate() {
            let value = token.parse::<T>().map_err(|_| {
                MatrixLoaderError::Parse(ParseTokenError {
                    token: token.to_owned(),
                    type_name: std::any::type_name::<T>(),
                })
            })?;

            if value < T::zero() {
                return Err(MatrixLoaderError::NegativeCost { row, column });
            }

            values.push(value);
        }

        if let Some(n) = expected {
            if values.len() != n {
                return Err(MatrixLoaderError::RowLength {
                    row,
                    expected: n,
                    actual: values.len(),
                });
            }
        }

        Ok(values)
    }
}
