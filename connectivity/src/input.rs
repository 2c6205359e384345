//! Pair streams: an element count followed by one `p q` pair per line.
//!
//! ```text
//! # ten elements
//! 10
//! 4 3
//! 3 8
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use log::debug;

use crate::algorithm::{Algorithm, Sequence};
use crate::error::{ConnectivityError, InputError};
use crate::sequence::{check_id, DynamicConnectivity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairStream {
    pub len: usize,
    pub pairs: Vec<(usize, usize)>,
}

/// Outcome of applying a pair stream to a fresh structure.
#[derive(Debug, Clone)]
pub struct Applied {
    pub sequence: Sequence,
    /// Pairs that joined two different components, in input order.
    pub new_connections: Vec<(usize, usize)>,
}

impl PairStream {
    pub fn parse(text: &str) -> Result<PairStream, InputError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (header_line, header) = lines.next().ok_or(InputError::MissingHeader)?;
        let len = parse_id(header, header_line)?;

        let mut pairs = Vec::new();
        for (line_no, line) in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(InputError::WrongFieldCount {
                    line: line_no,
                    found: fields.len(),
                });
            }
            let p = parse_id(fields[0], line_no)?;
            let q = parse_id(fields[1], line_no)?;
            for id in [p, q] {
                check_id(id, len).map_err(|source| InputError::OutOfRange {
                    line: line_no,
                    source,
                })?;
            }
            pairs.push((p, q));
        }

        debug!("parsed pair stream: {len} elements, {} pairs", pairs.len());
        Ok(PairStream { len, pairs })
    }

    /// Fold every pair through a new structure of the given algorithm.
    pub fn apply(&self, algorithm: Algorithm) -> Result<Applied, ConnectivityError> {
        let mut sequence = Sequence::new(algorithm, self.len);
        let mut new_connections = Vec::new();
        for &(p, q) in &self.pairs {
            if sequence.try_merge(p, q)? {
                new_connections.push((p, q));
            }
        }
        Ok(Applied {
            sequence,
            new_connections,
        })
    }
}

fn parse_id(field: &str, line: usize) -> Result<usize, InputError> {
    field
        .parse()
        .map_err(|_| InputError::InvalidInteger(field.to_string(), line))
}
