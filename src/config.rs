//! JSON parameter files.
//!
//! The constants are the permutation's only configuration. A parameter file
//! carries the linear layer and both round constant tables as strings, each
//! entry either decimal or `0x` prefixed hex:
//!
//! ```json
//! {
//!   "mds": [["5", "7", "1"], ["3", "4", "6"], ["1", "1", "4"]],
//!   "full_round_constants": [["0x8a8b7c6d5", "0x9e9f8a7b6", "0xa5b4c3d2e"], ...],
//!   "partial_round_constants": ["0x1a2b3c4d5e6f7890", ...]
//! }
//! ```
//!
//! Entries are reduced modulo `p`, the same way the built in tables are.
//! Loading a file runs the full [`Params::new`] validation.

use std::fs;
use std::path::Path;

use group::ff::PrimeField;
use serde::{Deserialize, Serialize};

use crate::field::parse_constant;
use crate::params::{Params, WIDTH};
use crate::{to_hex, Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsFile {
    pub mds: Vec<Vec<String>>,
    pub full_round_constants: Vec<Vec<String>>,
    pub partial_round_constants: Vec<String>,
}

impl ParamsFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading poseidon2 params from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Exports parameters as 0x prefixed hex strings.
    pub fn from_params<F: PrimeField>(params: &Params<F>) -> Self {
        let row = |words: &[F; WIDTH]| -> Vec<String> {
            words.iter().map(|word| to_hex(*word)).collect()
        };
        Self {
            mds: params.mds().rows().iter().map(row).collect(),
            full_round_constants: params.constants().full().iter().map(row).collect(),
            partial_round_constants: params
                .constants()
                .partial()
                .iter()
                .map(|word| to_hex(*word))
                .collect(),
        }
    }

    /// Parses every entry and validates the resulting tables.
    pub fn into_params<F: PrimeField>(&self) -> Result<Params<F>> {
        if self.mds.len() != WIDTH {
            return Err(Error::MatrixShape {
                expected: WIDTH,
                rows: self.mds.len(),
                cols: self.mds.first().map_or(0, Vec::len),
            });
        }
        let mut mds = [[F::ZERO; WIDTH]; WIDTH];
        for (row, entries) in mds.iter_mut().zip(self.mds.iter()) {
            *row = parse_row(entries).unwrap_or_else(|| {
                Err(Error::MatrixShape {
                    expected: WIDTH,
                    rows: self.mds.len(),
                    cols: entries.len(),
                })
            })?;
        }

        let full = self
            .full_round_constants
            .iter()
            .enumerate()
            .map(|(index, entries)| {
                parse_row(entries).unwrap_or(Err(Error::ConstantWidth {
                    index,
                    expected: WIDTH,
                    got: entries.len(),
                }))
            })
            .collect::<Result<Vec<_>>>()?;

        let partial = self
            .partial_round_constants
            .iter()
            .map(|entry| parse_constant(entry))
            .collect::<Result<Vec<F>>>()?;

        Params::new(mds, full, partial)
    }
}

/// `None` when the row is not `WIDTH` wide.
fn parse_row<F: PrimeField>(entries: &[String]) -> Option<Result<[F; WIDTH]>> {
    if entries.len() != WIDTH {
        return None;
    }
    let mut row = [F::ZERO; WIDTH];
    for (word, entry) in row.iter_mut().zip(entries.iter()) {
        *word = match parse_constant(entry) {
            Ok(word) => word,
            Err(e) => return Some(Err(e)),
        };
    }
    Some(Ok(row))
}
