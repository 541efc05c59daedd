//! Skip mask construction.
//!
//! Each position gets at most one reason; the first that applies wins:
//! `Duplicate`, then `AlreadyIncluded`, then `Malformed`.

use crate::config::MaterializerConfig;
use shared_types::{Hash, Transaction, ZERO_HASH};
use std::collections::HashSet;
use std::fmt;

/// Why a transaction is excluded from execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Same hash appears earlier in the batch.
    Duplicate,
    /// Executed by an earlier block.
    AlreadyIncluded,
    /// Fails shape validation.
    Malformed(ShapeViolation),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeViolation {
    ZeroGas,
    GasAboveLimit,
    DataTooLarge,
    MissingSignature,
    EmptyInitCode,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Duplicate => write!(f, "duplicate"),
            SkipReason::AlreadyIncluded => write!(f, "already included"),
            SkipReason::Malformed(v) => write!(f, "malformed ({:?})", v),
        }
    }
}

/// Structural checks that need no state.
pub fn check_shape(
    tx: &Transaction,
    config: &MaterializerConfig,
) -> std::result::Result<(), ShapeViolation> {
    if tx.gas_limit == 0 {
        return Err(ShapeViolation::ZeroGas);
    }
    if tx.gas_limit > config.max_tx_gas {
        return Err(ShapeViolation::GasAboveLimit);
    }
    if tx.data.len() > config.max_tx_data_bytes {
        return Err(ShapeViolation::DataTooLarge);
    }
    if tx.r == ZERO_HASH || tx.s == ZERO_HASH {
        return Err(ShapeViolation::MissingSignature);
    }
    if tx.is_contract_creation() && tx.data.is_empty() {
        return Err(ShapeViolation::EmptyInitCode);
    }
    Ok(())
}

/// Skip reasons for a concatenated transaction list.
///
/// `hashes[i]` is the hash of `txs[i]`. `already_included` answers whether a
/// prior block executed a hash.
pub fn compute_skips<F, E>(
    txs: &[Transaction],
    hashes: &[Hash],
    config: &MaterializerConfig,
    mut already_included: F,
) -> std::result::Result<Vec<(u32, SkipReason)>, E>
where
    F: FnMut(&Hash) -> std::result::Result<bool, E>,
{
    let mut seen: HashSet<Hash> = HashSet::with_capacity(hashes.len());
    let mut skips = Vec::new();

    for (position, (tx, hash)) in (0u32..).zip(txs.iter().zip(hashes)) {
        let reason = if !seen.insert(*hash) {
            Some(SkipReason::Duplicate)
        } else if already_included(hash)? {
            Some(SkipReason::AlreadyIncluded)
        } else {
            check_shape(tx, config).err().map(SkipReason::Malformed)
        };
        if let Some(reason) = reason {
            skips.push((position, reason));
        }
    }
    Ok(skips)
}
