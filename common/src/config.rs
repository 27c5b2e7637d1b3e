use std::fmt;

use tracing::warn;

/// Configuration types that populate themselves from environment variables.
pub trait ConfigTrait {
    fn read_env_variables() -> Self;
}

/// Reads an environment variable, warning and falling back to `default` when
/// it is not set.
pub fn read_env_or(env_var: &str, default: &str) -> String {
    std::env::var(env_var).unwrap_or_else(|_| {
        warn!("No value found in {} env var, using default", env_var);
        default.to_string()
    })
}

#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub l1_rpc_url: String,
    pub l2_rpc_url: String,
}

impl ConfigTrait for RpcConfig {
    fn read_env_variables() -> Self {
        RpcConfig {
            l1_rpc_url: read_env_or("L1_RPC_URL", "ws://127.0.0.1:8546"),
            l2_rpc_url: read_env_or("L2_RPC_URL", "ws://127.0.0.1:8548"),
        }
    }
}

impl fmt::Display for RpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "L1 RPC URL: {}", self.l1_rpc_url)?;
        writeln!(f, "L2 RPC URL: {}", self.l2_rpc_url)?;
        Ok(())
    }
}
