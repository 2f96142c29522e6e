//! Tendermint-style `/status` document.
//!
//! Every field is a fixed placeholder, including the block timestamps; none
//! of it is derived from the clock.

use serde::{Deserialize, Serialize};

use crate::error::{MockNodeError, Result};
use crate::node::BASE_HEIGHT;

/// JSON-RPC envelope returned by `/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub jsonrpc: String,
    pub id: String,
    pub result: StatusResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    pub node_info: NodeInfo,
    pub sync_info: SyncInfo,
    pub validator_info: ValidatorInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub protocol_version: ProtocolVersion,
    pub id: String,
    pub listen_addr: String,
    pub network: String,
    pub version: String,
    pub channels: String,
    pub moniker: String,
    pub other: NodeOther,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolVersion {
    pub p2p: String,
    pub block: String,
    pub app: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOther {
    pub tx_index: String,
    pub rpc_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncInfo {
    pub latest_block_hash: String,
    pub latest_app_hash: String,
    pub latest_block_height: String,
    pub latest_block_time: String,
    pub earliest_block_hash: String,
    pub earliest_app_hash: String,
    pub earliest_block_height: String,
    pub earliest_block_time: String,
    pub catching_up: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorInfo {
    pub address: String,
    pub pub_key: PubKey,
    pub voting_power: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

impl NodeStatus {
    /// The fixed document a mock node reports.
    pub fn mock() -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id: String::new(),
            result: StatusResult {
                node_info: NodeInfo {
                    protocol_version: ProtocolVersion {
                        p2p: "8".into(),
                        block: "11".into(),
                        app: "0".into(),
                    },
                    id: "mock-node-id".into(),
                    listen_addr: "tcp://0.0.0.0:26656".into(),
                    network: "axelar-testnet-lisbon-3".into(),
                    version: "v0.35.5".into(),
                    channels: "40202122233038606100".into(),
                    moniker: "mock-axelar-node".into(),
                    other: NodeOther {
                        tx_index: "on".into(),
                        rpc_address: "tcp://0.0.0.0:26657".into(),
                    },
                },
                sync_info: SyncInfo {
                    latest_block_hash: "mock-hash".into(),
                    latest_app_hash: "mock-app-hash".into(),
                    latest_block_height: BASE_HEIGHT.to_string(),
                    latest_block_time: "2025-01-28T09:00:00.000Z".into(),
                    earliest_block_hash: "mock-early-hash".into(),
                    earliest_app_hash: "mock-early-app-hash".into(),
                    earliest_block_height: "1".into(),
                    earliest_block_time: "2024-01-01T00:00:00.000Z".into(),
                    catching_up: false,
                },
                validator_info: ValidatorInfo {
                    address: "mock-validator-address".into(),
                    pub_key: PubKey {
                        key_type: "tendermint/PubKeyEd25519".into(),
                        value: "mock-pubkey".into(),
                    },
                    voting_power: "0".into(),
                },
            },
        }
    }

    /// Pretty-printed JSON body.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MockNodeError::Internal(format!("encode status failed: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mock_status_has_rpc_envelope() {
        let body = NodeStatus::mock().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["jsonrpc"], "2.0");
        assert_eq!(v["id"], "");
        assert_eq!(v["result"]["sync_info"]["latest_block_height"], "12345");
        assert_eq!(v["result"]["sync_info"]["catching_up"], false);
        assert_eq!(
            v["result"]["validator_info"]["pub_key"]["type"],
            "tendermint/PubKeyEd25519"
        );
    }

    #[test]
    fn status_json_reads_back_unchanged() {
        let status = NodeStatus::mock();
        let parsed: NodeStatus = serde_json::from_str(&status.to_json().unwrap()).unwrap();
        assert_eq!(parsed, status);
    }
}
