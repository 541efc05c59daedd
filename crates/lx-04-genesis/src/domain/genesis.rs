use crate::domain::source::{fake_range, GenesisSource};
use crate::domain::spec::GenesisSpec;
use crate::error::Result;
use lx_01_validators::ValidatorRegistry;
use shared_types::{keccak256, rlp, Allocation, Block, Hash, U256, ZERO_HASH};

/// Genesis time of fake networks (unix seconds).
pub const FAKE_GENESIS_TIME: u64 = 1_565_000_000;

/// Balance of every fake account: 10^27 wei.
pub const FAKE_BALANCE: U256 = U256([0x9fd0_803c_e800_0000, 0x033b_2e3c, 0, 0]);

/// Everything block 0 is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    /// Block 0 time (unix seconds).
    pub time: u64,
    pub alloc: Allocation,
    pub validators: ValidatorRegistry,
}

impl Genesis {
    pub fn new(time: u64, alloc: Allocation, validators: ValidatorRegistry) -> Self {
        Self {
            time,
            alloc,
            validators,
        }
    }

    /// Fake network of `validators` funded identities with stake 1 each.
    pub fn fake(validators: u64) -> Self {
        let (alloc, registry) = fake_range(0..validators, FAKE_BALANCE, 1);
        Self::new(FAKE_GENESIS_TIME, alloc, registry)
    }

    pub fn from_source(time: u64, source: &GenesisSource) -> Result<Self> {
        let (alloc, validators) = source.build()?;
        Ok(Self::new(time, alloc, validators))
    }

    pub fn from_spec(spec: GenesisSpec) -> Result<Self> {
        let time = spec.time;
        Self::from_source(time, &GenesisSource::Spec(spec))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_spec(GenesisSpec::from_json(json)?)
    }

    /// Block 0 for a committed state root.
    pub fn block(&self, state_root: Hash) -> Block {
        let commitment = genesis_commitment(&state_root, &self.validators, self.time);
        let mut block = Block::new(0, self.time, vec![commitment], ZERO_HASH);
        block.root = state_root;
        block
    }
}

/// Pseudo-event hash binding the state root, the validator set and the time.
pub fn genesis_commitment(state_root: &Hash, validators: &ValidatorRegistry, time: u64) -> Hash {
    keccak256(&rlp::encode_list(&[
        rlp::encode_bytes(state_root),
        rlp::encode_bytes(&validators.hash()),
        rlp::encode_u64(time),
    ]))
}
