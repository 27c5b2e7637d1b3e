use std::fmt;

use common::config::{ConfigTrait, read_env_or};

const DEFAULT_EMPTY_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

#[derive(Debug, Clone)]
pub struct L1ContractAddresses {
    pub inbox: String,
    pub inbox_helper: String,
    pub codec: String,
    pub compose_verifier: String,
}

#[derive(Debug, Clone)]
pub struct L2ContractAddresses {
    pub anchor: String,
}

#[derive(Debug, Clone)]
pub struct ShastaConfig {
    pub l1_contract_addresses: L1ContractAddresses,
    pub l2_contract_addresses: L2ContractAddresses,
}

impl ConfigTrait for ShastaConfig {
    fn read_env_variables() -> Self {
        let read_contract_address =
            |env_var: &str| read_env_or(env_var, DEFAULT_EMPTY_ADDRESS);

        ShastaConfig {
            l1_contract_addresses: L1ContractAddresses {
                inbox: read_contract_address("SHASTA_INBOX_ADDRESS"),
                inbox_helper: read_contract_address("SHASTA_INBOX_HELPER_ADDRESS"),
                codec: read_contract_address("SHASTA_CODEC_ADDRESS"),
                compose_verifier: read_contract_address("SHASTA_COMPOSE_VERIFIER_ADDRESS"),
            },
            l2_contract_addresses: L2ContractAddresses {
                anchor: read_contract_address("SHASTA_ANCHOR_ADDRESS"),
            },
        }
    }
}

impl fmt::Display for ShastaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shasta inbox: {}", self.l1_contract_addresses.inbox)?;
        writeln!(
            f,
            "Shasta inbox helper: {}",
            self.l1_contract_addresses.inbox_helper
        )?;
        writeln!(f, "Shasta codec: {}", self.l1_contract_addresses.codec)?;
        writeln!(
            f,
            "Shasta compose verifier: {}",
            self.l1_contract_addresses.compose_verifier
        )?;
        writeln!(f, "Shasta anchor: {}", self.l2_contract_addresses.anchor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l1::config::ContractAddresses;

    #[test]
    fn default_addresses_parse_to_zero() {
        let config = ShastaConfig {
            l1_contract_addresses: L1ContractAddresses {
                inbox: DEFAULT_EMPTY_ADDRESS.to_string(),
                inbox_helper: DEFAULT_EMPTY_ADDRESS.to_string(),
                codec: DEFAULT_EMPTY_ADDRESS.to_string(),
                compose_verifier: DEFAULT_EMPTY_ADDRESS.to_string(),
            },
            l2_contract_addresses: L2ContractAddresses {
                anchor: DEFAULT_EMPTY_ADDRESS.to_string(),
            },
        };
        let parsed = ContractAddresses::try_from(config.l1_contract_addresses).unwrap();
        assert!(parsed.inbox.is_zero());
        assert!(parsed.compose_verifier.is_zero());
    }

    #[test]
    fn malformed_address_fails_conversion() {
        let addresses = L1ContractAddresses {
            inbox: "not-an-address".to_string(),
            inbox_helper: DEFAULT_EMPTY_ADDRESS.to_string(),
            codec: DEFAULT_EMPTY_ADDRESS.to_string(),
            compose_verifier: DEFAULT_EMPTY_ADDRESS.to_string(),
        };
        assert!(ContractAddresses::try_from(addresses).is_err());
    }
}
