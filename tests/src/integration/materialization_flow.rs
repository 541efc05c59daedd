//! # Materialization Flow
//!
//! Finalized batches turned into blocks and read back as EVM blocks.

#[cfg(test)]
mod tests {
    use crate::fixtures::{event, transfer, TestChain};
    use lx_02_ledger_store::LedgerError;
    use lx_05_block_materializer::{
        FinalizedBatch, MaterializeError, MaterializerConfig, ShapeViolation, SkipReason,
    };
    use shared_types::{Block, Transaction, EMPTY_ROOT, ZERO_HASH};

    #[test]
    fn test_skipped_positions_are_invisible_to_the_evm() {
        let chain = TestChain::fake(5).unwrap();
        let txs: Vec<Transaction> = (0..6).map(transfer).collect();

        let e1 = chain.store_event(1, txs[..1].to_vec()).unwrap();
        let e2 = chain.store_event(2, txs[1..].to_vec()).unwrap();

        let mut block = Block::new(1, 123, vec![e1, e2], chain.genesis_hash);
        block.skipped_txs = vec![0, 2, 4];
        chain.ledger.set_block(&block).unwrap();

        let evm = chain.reader.get_dag_block(&block.hash(), 1).unwrap().unwrap();
        assert_eq!(evm.number, 1);
        assert_eq!(evm.hash, block.hash());
        assert_eq!(evm.parent_hash, chain.genesis_hash);
        assert_eq!(evm.time, 123);
        assert_eq!(evm.transactions.len(), txs.len() - block.skipped_txs.len());
        assert_eq!(
            evm.transaction_hashes(),
            vec![txs[1].hash(), txs[3].hash(), txs[5].hash()]
        );
    }

    #[test]
    fn test_materializer_masks_and_reader_filters() {
        let chain = TestChain::fake(3).unwrap();

        let replayed = transfer(50);
        let e0 = chain.store_event(1, vec![replayed.clone()]).unwrap();
        chain
            .materializer
            .materialize(&FinalizedBatch::new(vec![e0], 1_565_000_001))
            .unwrap();

        let mut unsigned = transfer(0);
        unsigned.r = ZERO_HASH;
        let t1 = transfer(1);
        let t3 = transfer(3);
        let t5 = transfer(5);
        let e1 = chain.store_event(2, vec![unsigned, t1.clone()]).unwrap();
        let e2 = chain
            .store_event(3, vec![t1.clone(), t3.clone(), replayed, t5.clone()])
            .unwrap();

        let out = chain
            .materializer
            .materialize(&FinalizedBatch::new(vec![e1, e2], 1_565_000_002))
            .unwrap();
        assert_eq!(out.block.skipped_txs, vec![0, 2, 4]);
        assert_eq!(
            out.skip_reasons,
            vec![
                (0, SkipReason::Malformed(ShapeViolation::MissingSignature)),
                (2, SkipReason::Duplicate),
                (4, SkipReason::AlreadyIncluded),
            ]
        );

        let evm = chain.reader.current_block().unwrap().unwrap();
        assert_eq!(evm.number, 2);
        assert_eq!(evm.hash, out.hash);
        assert_eq!(
            evm.transaction_hashes(),
            vec![t1.hash(), t3.hash(), t5.hash()]
        );
    }

    #[test]
    fn test_indices_are_gapless_and_linked() {
        let chain = TestChain::fake(2).unwrap();
        let mut hashes = vec![chain.genesis_hash];

        for i in 1..=5u64 {
            let e = chain.store_event(i, vec![transfer(i)]).unwrap();
            let out = chain
                .materializer
                .materialize(&FinalizedBatch::new(vec![e], 1_565_000_000 + i))
                .unwrap();
            assert_eq!(out.block.index, i);
            assert_eq!(out.block.parent_hash, hashes[(i - 1) as usize]);
            assert_eq!(out.block.root, chain.state_hash);
            hashes.push(out.hash);
        }

        assert_eq!(chain.ledger.latest_index().unwrap(), Some(5));
        for (index, hash) in hashes.iter().enumerate() {
            assert_eq!(chain.ledger.block_hash_at(index as u64).unwrap(), Some(*hash));
        }
        assert_eq!(chain.reader.current_index(), 5);
    }

    #[test]
    fn test_empty_batch_yields_empty_block() {
        let chain = TestChain::fake(1).unwrap();
        let out = chain
            .materializer
            .materialize(&FinalizedBatch::new(vec![], 1_565_000_001))
            .unwrap();
        assert!(out.block.events.is_empty());
        assert_eq!(out.block.transactions_root, EMPTY_ROOT);

        let evm = chain.reader.get_block(&out.hash, 1).unwrap().unwrap();
        assert!(evm.transactions.is_empty());
    }

    #[test]
    fn test_tx_from_written_block_is_not_executed_again() {
        let chain = TestChain::fake(3).unwrap();
        let paid = transfer(7);

        let e1 = chain.store_event(1, vec![paid.clone()]).unwrap();
        let block = Block::new(1, 1_565_000_001, vec![e1], chain.genesis_hash);
        let block_hash = chain.ledger.set_block(&block).unwrap();
        assert_eq!(chain.ledger.tx_block_index(&paid.hash()).unwrap(), Some(1));

        let e2 = chain.store_event(2, vec![paid.clone()]).unwrap();
        let batch = FinalizedBatch::new(vec![e2], 1_565_000_002);
        assert!(matches!(
            chain.materializer.materialize(&batch),
            Err(MaterializeError::Ledger(LedgerError::BlockConflict { index: 1, .. }))
        ));
        assert_eq!(chain.reader.current_index(), 1);

        let out = chain.materializer.materialize(&batch).unwrap();
        assert_eq!(out.block.index, 2);
        assert_eq!(out.block.parent_hash, block_hash);
        assert_eq!(out.skip_reasons, vec![(0, SkipReason::AlreadyIncluded)]);

        let mut executed = Vec::new();
        for number in 1..=2 {
            let evm = chain.reader.get_dag_block(&ZERO_HASH, number).unwrap().unwrap();
            executed.extend(evm.transactions);
        }
        assert_eq!(executed, vec![paid]);
    }

    #[test]
    fn test_conflicting_block_is_rejected() {
        let chain = TestChain::fake(1).unwrap();
        let out = chain
            .materializer
            .materialize(&FinalizedBatch::new(vec![], 1_565_000_001))
            .unwrap();

        let rival = Block::new(1, 1_565_000_999, vec![], chain.genesis_hash);
        assert_eq!(
            chain.ledger.set_block(&rival).unwrap_err(),
            LedgerError::BlockConflict {
                index: 1,
                existing: out.hash,
                proposed: rival.hash(),
            }
        );
        assert_eq!(chain.ledger.set_block(&out.block).unwrap(), out.hash);
    }

    #[test]
    fn test_set_event_is_idempotent_across_the_flow() {
        let chain = TestChain::fake(1).unwrap();
        let e = event(chain.creator(), 1, vec![transfer(1)]);

        let first = chain.ledger.set_event(&e).unwrap();
        let second = chain.ledger.set_event(&e).unwrap();
        assert_eq!(first, second);

        let out = chain
            .materializer
            .materialize(&FinalizedBatch::new(vec![first], 1_565_000_001))
            .unwrap();
        assert!(out.skip_reasons.is_empty());
    }

    #[test]
    fn test_missing_event_then_retry() {
        let chain = TestChain::fake(1).unwrap();
        let late = event(chain.creator(), 1, vec![transfer(1)]);
        let batch = FinalizedBatch::new(vec![late.hash()], 1_565_000_001);

        assert_eq!(
            chain.materializer.materialize(&batch).unwrap_err(),
            MaterializeError::MissingEvent { hash: late.hash() }
        );
        assert_eq!(chain.reader.current_index(), 0);

        chain.ledger.set_event(&late).unwrap();
        assert_eq!(chain.materializer.materialize(&batch).unwrap().block.index, 1);
    }

    #[test]
    fn test_shape_limits_come_from_config() {
        let chain = TestChain::new(
            lx_04_genesis::Genesis::fake(1),
            MaterializerConfig::default().with_max_tx_gas(20_000),
        )
        .unwrap();
        let e = chain.store_event(1, vec![transfer(1)]).unwrap();
        let out = chain
            .materializer
            .materialize(&FinalizedBatch::new(vec![e], 1_565_000_001))
            .unwrap();
        assert_eq!(
            out.skip_reasons,
            vec![(0, SkipReason::Malformed(ShapeViolation::GasAboveLimit))]
        );
        assert_eq!(chain.materializer.metrics().skipped(), 1);
    }
}
