//! # Properties
//!
//! proptest properties over genesis determinism, skip-mask filtering and
//! index continuity.

#[cfg(test)]
mod tests {
    use crate::fixtures::{event, transfer, TestChain};
    use lx_02_ledger_store::LedgerStore;
    use lx_03_state_engine::InMemoryStateEngine;
    use lx_04_genesis::{apply_genesis, fake_accounts, Genesis};
    use lx_05_block_materializer::FinalizedBatch;
    use proptest::prelude::*;
    use shared_types::{Block, Hash, Transaction, U256};
    use std::collections::BTreeSet;

    fn apply(genesis: &Genesis) -> (Hash, Hash) {
        let ledger = LedgerStore::in_memory();
        let state = InMemoryStateEngine::default();
        apply_genesis(genesis, &ledger, &state).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_genesis_is_deterministic(
            from in 0u64..50,
            count in 0u64..6,
            balance in any::<u64>(),
            stake in 0u64..100,
            time in any::<u64>(),
        ) {
            let (alloc, validators) =
                fake_accounts(from, count, U256::from(balance), stake).unwrap();
            let genesis = Genesis::new(time, alloc, validators);

            let first = apply(&genesis);
            let second = apply(&genesis.clone());
            prop_assert_eq!(first, second);

            let mut later = genesis.clone();
            later.time = time.wrapping_add(1);
            prop_assert_ne!(apply(&later).0, first.0);
        }

        #[test]
        fn prop_skip_mask_keeps_order_of_survivors(
            split in proptest::collection::vec(0usize..4, 1..5),
            mask in proptest::collection::btree_set(0u32..16, 0..16),
        ) {
            let chain = TestChain::fake(1).unwrap();

            // One event per entry of `split`, each with that many transactions.
            let mut nonce = 0;
            let mut all: Vec<Transaction> = Vec::new();
            let mut events = Vec::new();
            for (i, n) in split.iter().enumerate() {
                let txs: Vec<Transaction> = (0..*n)
                    .map(|_| {
                        nonce += 1;
                        transfer(nonce)
                    })
                    .collect();
                all.extend(txs.iter().cloned());
                let stored = chain.ledger.set_event(&event(chain.creator(), i as u64 + 1, txs));
                events.push(stored.unwrap());
            }

            let skipped: Vec<u32> =
                mask.iter().copied().filter(|p| (*p as usize) < all.len()).collect();
            let mut block = Block::new(1, 1, events, chain.genesis_hash);
            block.skipped_txs = skipped.clone();
            chain.ledger.set_block(&block).unwrap();

            let evm = chain.reader.get_dag_block(&block.hash(), 1).unwrap().unwrap();
            let skipped: BTreeSet<u32> = skipped.into_iter().collect();
            let expected: Vec<Hash> = all
                .iter()
                .enumerate()
                .filter(|(pos, _)| !skipped.contains(&(*pos as u32)))
                .map(|(_, tx)| tx.hash())
                .collect();
            prop_assert_eq!(evm.transaction_hashes(), expected);
        }

        #[test]
        fn prop_indices_are_gapless(sizes in proptest::collection::vec(0usize..3, 1..8)) {
            let chain = TestChain::fake(2).unwrap();
            let mut nonce = 0u64;
            let mut seq = 0u64;

            for (i, size) in sizes.iter().enumerate() {
                let mut events = Vec::new();
                for _ in 0..*size {
                    seq += 1;
                    nonce += 1;
                    events.push(chain.store_event(seq, vec![transfer(nonce)]).unwrap());
                }
                let out = chain
                    .materializer
                    .materialize(&FinalizedBatch::new(events, 1_565_000_001 + i as u64))
                    .unwrap();
                prop_assert_eq!(out.block.index, i as u64 + 1);
            }

            let latest = chain.ledger.latest_index().unwrap().unwrap();
            prop_assert_eq!(latest, sizes.len() as u64);
            for index in 1..=latest {
                let block = chain.ledger.get_block_by_index(index).unwrap().unwrap();
                let parent = chain.ledger.block_hash_at(index - 1).unwrap();
                prop_assert_eq!(Some(block.parent_hash), parent);
            }
        }
    }
}
