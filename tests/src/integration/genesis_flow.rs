//! # Genesis Flow
//!
//! Fake and JSON-described genesis applied to a fresh ledger, then read back
//! through the chain reader.

#[cfg(test)]
mod tests {
    use crate::fixtures::TestChain;
    use lx_02_ledger_store::LedgerStore;
    use lx_03_state_engine::{InMemoryStateEngine, StateView};
    use lx_04_genesis::{
        apply_genesis, GenesisBuilder, GenesisConfig, GenesisError, GenesisSource, Genesis,
    };
    use lx_05_block_materializer::MaterializerConfig;
    use shared_types::{keccak256, U256, ZERO_HASH};

    #[test]
    fn test_genesis_block_and_state_round_trip() {
        let mut genesis = Genesis::fake(5);
        let with_code = genesis.alloc.addresses()[0];
        let mut one = [0u8; 32];
        one[31] = 1;
        if let Some(account) = genesis.alloc.get_mut(&with_code) {
            account.code = vec![1, 2, 3];
            account.storage.insert([0u8; 32], one);
        }

        let chain = TestChain::new(genesis.clone(), MaterializerConfig::default()).unwrap();
        assert_ne!(chain.genesis_hash, ZERO_HASH);
        assert_ne!(chain.state_hash, ZERO_HASH);

        let block = chain.reader.get_block(&chain.genesis_hash, 0).unwrap().unwrap();
        assert_eq!(block.hash, chain.genesis_hash);
        assert_eq!(block.root, chain.state_hash);
        assert_eq!(block.time, genesis.time);
        assert!(block.transactions.is_empty());

        let view = chain.reader.state_at(&chain.state_hash).unwrap();
        for (address, account) in genesis.alloc.iter() {
            assert_eq!(view.balance(address), account.balance);
            if *address == with_code {
                assert_eq!(view.code(address), vec![1, 2, 3]);
                assert_eq!(view.code_hash(address), keccak256(&[1, 2, 3]));
                assert_eq!(view.storage(address, &[0u8; 32]), one);
            } else {
                assert!(view.code(address).is_empty());
                assert_eq!(view.storage(address, &[0u8; 32]), [0u8; 32]);
            }
        }
    }

    #[test]
    fn test_double_genesis_is_rejected() {
        let chain = TestChain::fake(3).unwrap();
        let err = apply_genesis(&chain.genesis, chain.ledger.as_ref(), chain.state.as_ref())
            .unwrap_err();
        assert_eq!(
            err,
            GenesisError::AlreadyApplied {
                genesis_hash: chain.genesis_hash
            }
        );
        assert_eq!(chain.ledger.latest_index().unwrap(), Some(0));
    }

    #[test]
    fn test_fake_networks_are_reproducible() {
        let a = TestChain::fake(4).unwrap();
        let b = TestChain::fake(4).unwrap();
        assert_eq!(a.genesis_hash, b.genesis_hash);
        assert_eq!(a.state_hash, b.state_hash);
        assert_eq!(
            a.reader.validators().unwrap(),
            b.reader.validators().unwrap()
        );

        let c = TestChain::fake(5).unwrap();
        assert_ne!(a.genesis_hash, c.genesis_hash);
    }

    #[test]
    fn test_stake_change_changes_genesis_hash_only() {
        let base = Genesis::fake(2);
        let mut restaked = base.clone();
        let first = restaked.validators.addresses()[0];
        restaked.validators.set(first, 0);

        let a = TestChain::new(base, MaterializerConfig::default()).unwrap();
        let b = TestChain::new(restaked, MaterializerConfig::default()).unwrap();
        assert_eq!(a.state_hash, b.state_hash);
        assert_ne!(a.genesis_hash, b.genesis_hash);

        let validators = b.reader.validators().unwrap().unwrap();
        assert_eq!(validators.len(), 2);
        assert_eq!(validators.active().len(), 1);
    }

    #[test]
    fn test_genesis_from_json() {
        let json = r#"{
            "time": 1565000000,
            "alloc": {
                "0x00000000000000000000000000000000000000a1": { "balance": "0xde0b6b3a7640000" },
                "0x00000000000000000000000000000000000000c0": {
                    "code": "0x6001600055",
                    "storage": {
                        "0x0000000000000000000000000000000000000000000000000000000000000000": "0x01"
                    }
                }
            },
            "validators": [
                { "address": "0x00000000000000000000000000000000000000a1", "stake": 10 }
            ]
        }"#;
        let genesis = Genesis::from_json(json).unwrap();
        let chain = TestChain::new(genesis, MaterializerConfig::default()).unwrap();

        let mut a1 = [0u8; 20];
        a1[19] = 0xa1;
        let mut c0 = [0u8; 20];
        c0[19] = 0xc0;

        let view = chain.reader.state_at(&chain.state_hash).unwrap();
        assert_eq!(view.balance(&a1), U256::exp10(18));
        assert_eq!(view.code(&c0), vec![0x60, 0x01, 0x60, 0x00, 0x55]);
        assert_eq!(view.storage(&c0, &[0u8; 32])[31], 1);
        assert_eq!(chain.reader.validators().unwrap().unwrap().get(&a1), Some(10));
    }

    #[test]
    fn test_strict_mode_rejects_unfunded_validator() {
        let source = GenesisSource::Spec(
            lx_04_genesis::GenesisSpec::from_json(
                r#"{ "time": 1, "validators": [ { "address": "0x01", "stake": 1 } ] }"#,
            )
            .unwrap(),
        );
        // "0x01" is not a 20-byte address.
        assert!(matches!(
            Genesis::from_source(1, &source),
            Err(GenesisError::InvalidSpec(_))
        ));

        let source = GenesisSource::Spec(
            lx_04_genesis::GenesisSpec::from_json(
                r#"{ "time": 1, "validators": [
                    { "address": "0x00000000000000000000000000000000000000b1", "stake": 1 }
                ] }"#,
            )
            .unwrap(),
        );
        let genesis = Genesis::from_source(1, &source).unwrap();

        let ledger = LedgerStore::in_memory();
        let state = InMemoryStateEngine::default();
        let err = GenesisBuilder::new(GenesisConfig::strict())
            .apply(&genesis, &ledger, &state)
            .unwrap_err();
        assert!(matches!(err, GenesisError::MissingValidatorAllocation { .. }));
        assert!(apply_genesis(&genesis, &ledger, &state).is_ok());
    }
}
