//! # Block Materializer Service

use crate::config::MaterializerConfig;
use crate::domain::batch::{FinalizedBatch, MaterializedBlock};
use crate::domain::head::{load_head, ChainHead, SharedChainHead};
use crate::domain::skip::compute_skips;
use crate::error::{MaterializeError, Result};
use crate::metrics::MaterializerMetrics;
use lx_02_ledger_store::{KeyValueStore, LedgerError, LedgerStore};
use parking_lot::{Mutex, RwLock};
use shared_types::{short_hex, transactions_root, Block, Hash, Transaction};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sole writer of blocks after genesis.
pub struct BlockMaterializer<KV: KeyValueStore> {
    ledger: Arc<LedgerStore<KV>>,
    head: SharedChainHead,
    config: MaterializerConfig,
    metrics: Arc<MaterializerMetrics>,
    in_flight: Mutex<()>,
}

impl<KV: KeyValueStore> BlockMaterializer<KV> {
    /// Resume from the ledger's latest block. Genesis must be applied.
    pub fn new(ledger: Arc<LedgerStore<KV>>, config: MaterializerConfig) -> Result<Self> {
        let head = load_head(&ledger)?;
        info!(
            "[lx-05] materializer starting at block {} {}",
            head.index,
            short_hex(&head.hash)
        );
        Ok(Self {
            ledger,
            head: Arc::new(RwLock::new(head)),
            config,
            metrics: Arc::new(MaterializerMetrics::new()),
            in_flight: Mutex::new(()),
        })
    }

    /// Handle on the shared head for readers.
    pub fn head(&self) -> SharedChainHead {
        Arc::clone(&self.head)
    }

    pub fn current_head(&self) -> ChainHead {
        *self.head.read()
    }

    pub fn metrics(&self) -> Arc<MaterializerMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn config(&self) -> &MaterializerConfig {
        &self.config
    }

    /// Build, commit and publish the block for `batch`.
    ///
    /// On error nothing is written. If the ledger was extended by another
    /// writer, the head is reloaded from it before the error is returned, so
    /// retrying the batch builds on the stored tip.
    pub fn materialize(&self, batch: &FinalizedBatch) -> Result<MaterializedBlock> {
        let _guard = self.in_flight.lock();
        let head = *self.head.read();

        let txs = self.collect_transactions(&batch.events)?;
        if txs.len() > u32::MAX as usize {
            return Err(MaterializeError::BatchTooLarge {
                transactions: txs.len(),
            });
        }
        let hashes: Vec<Hash> = txs.iter().map(Transaction::hash).collect();

        let skip_reasons = compute_skips(&txs, &hashes, &self.config, |hash| {
            Ok::<_, MaterializeError>(self.ledger.tx_block_index(hash)?.is_some())
        })?;
        for (position, reason) in &skip_reasons {
            debug!(
                "[lx-05] block {} skips tx #{} {}: {}",
                head.index + 1,
                position,
                short_hex(&hashes[*position as usize]),
                reason
            );
        }

        let mut block = Block::new(head.index + 1, batch.time, batch.events.clone(), head.hash);
        block.transactions_root = transactions_root(&hashes);
        block.skipped_txs = skip_reasons.iter().map(|(position, _)| *position).collect();
        block.root = head.root;

        let skipped: HashSet<u32> = block.skipped_txs.iter().copied().collect();
        let included: Vec<Hash> = hashes
            .iter()
            .zip(0u32..)
            .filter(|(_, position)| !skipped.contains(position))
            .map(|(hash, _)| *hash)
            .collect();

        let hash = match self.ledger.commit_block(&block, &included) {
            Ok(hash) => hash,
            Err(
                e @ (LedgerError::BlockConflict { .. }
                | LedgerError::IndexGap { .. }
                | LedgerError::ParentMismatch { .. }),
            ) => {
                let stored = load_head(&self.ledger)?;
                warn!(
                    "[lx-05] ledger advanced to block {} {} elsewhere, head reloaded",
                    stored.index,
                    short_hex(&stored.hash)
                );
                *self.head.write() = stored;
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        *self.head.write() = ChainHead {
            index: block.index,
            hash,
            root: block.root,
            time: block.time,
        };
        self.metrics.record_block(included.len(), skip_reasons.len());

        info!(
            "[lx-05] materialized block {} {}: {} events, {} txs executed, {} skipped",
            block.index,
            short_hex(&hash),
            block.events.len(),
            included.len(),
            skip_reasons.len()
        );
        Ok(MaterializedBlock {
            block,
            hash,
            skip_reasons,
        })
    }

    fn collect_transactions(&self, events: &[Hash]) -> Result<Vec<Transaction>> {
        let mut txs = Vec::new();
        for hash in events {
            match self.ledger.get_event(hash)? {
                Some(event) => txs.extend(event.transactions),
                None => {
                    warn!(
                        "[lx-05] finalized event {} not stored yet",
                        short_hex(hash)
                    );
                    self.metrics.record_missing_event();
                    return Err(MaterializeError::MissingEvent { hash: *hash });
                }
            }
        }
        Ok(txs)
    }
}
