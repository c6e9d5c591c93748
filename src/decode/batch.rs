//! Batch parsing of independent documents.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::Value;
use crate::{ParseOptions, Result};

use super::parse_bytes;

/// Parse every buffer in `inputs`, keeping input order. Each document fails on its own.
#[cfg(feature = "parallel")]
pub fn parse_many<I>(inputs: &[I], options: &ParseOptions) -> Vec<Result<Value>>
where
    I: AsRef<[u8]> + Sync,
{
    log::debug!("parsing batch of {} documents in parallel", inputs.len());
    inputs
        .par_iter()
        .map(|input| parse_bytes(input.as_ref(), options))
        .collect()
}

/// Parse every buffer in `inputs`, keeping input order. Each document fails on its own.
#[cfg(not(feature = "parallel"))]
pub fn parse_many<I>(inputs: &[I], options: &ParseOptions) -> Vec<Result<Value>>
where
    I: AsRef<[u8]>,
{
    log::debug!("parsing batch of {} documents", inputs.len());
    inputs
        .iter()
        .map(|input| parse_bytes(input.as_ref(), options))
        .collect()
}
