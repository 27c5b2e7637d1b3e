use alloy::primitives::Address;

use crate::utils::config::{L1ContractAddresses, ShastaConfig};

#[derive(Debug, Clone)]
pub struct ContractAddresses {
    pub inbox: Address,
    pub inbox_helper: Address,
    pub codec: Address,
    pub compose_verifier: Address,
}

impl TryFrom<L1ContractAddresses> for ContractAddresses {
    type Error = anyhow::Error;

    fn try_from(l1_contract_addresses: L1ContractAddresses) -> Result<Self, Self::Error> {
        Ok(ContractAddresses {
            inbox: l1_contract_addresses.inbox.parse()?,
            inbox_helper: l1_contract_addresses.inbox_helper.parse()?,
            codec: l1_contract_addresses.codec.parse()?,
            compose_verifier: l1_contract_addresses.compose_verifier.parse()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct EthereumL1Config {
    pub contract_addresses: ContractAddresses,
}

impl TryFrom<ShastaConfig> for EthereumL1Config {
    type Error = anyhow::Error;

    fn try_from(config: ShastaConfig) -> Result<Self, Self::Error> {
        Ok(EthereumL1Config {
            contract_addresses: ContractAddresses::try_from(config.l1_contract_addresses)?,
        })
    }
}
