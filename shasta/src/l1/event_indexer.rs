use std::time::Duration;

use alloy::{
    primitives::{Address, B256},
    providers::{DynProvider, Provider},
    rpc::types::{Filter, Log},
    sol_types::SolEvent,
};
use anyhow::{Error, anyhow};
use tokio::{sync::mpsc::Sender, time::sleep};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::bindings::inbox::{
    ICheckpointStore::{self, Checkpoint},
    IInbox::{self, ProposedEventPayload, ProvedEventPayload},
    LibBonds::BondInstruction,
};
use crate::codec;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(12);

/// A decoded `Proposed` event together with its raw log.
#[derive(Debug, Clone)]
pub struct ProposedEvent {
    pub payload: ProposedEventPayload,
    pub log: Log,
}

/// A decoded `Proved` event together with its raw log.
#[derive(Debug, Clone)]
pub struct ProvedEvent {
    pub payload: ProvedEventPayload,
    pub log: Log,
}

/// Typed inbox activity delivered by the indexer.
#[derive(Debug, Clone)]
pub enum InboxEvent {
    Proposed(ProposedEvent),
    Proved(ProvedEvent),
    BondInstructed {
        instructions: Vec<BondInstruction>,
        log: Log,
    },
    CheckpointSaved {
        checkpoint: Checkpoint,
        log: Log,
    },
}

/// Fetches and streams inbox events. Event payload bytes are decoded through
/// the local compact codec, so no codec contract calls are needed.
pub struct EventIndexer {
    provider: DynProvider,
    inbox_address: Address,
    poll_interval: Duration,
}

impl EventIndexer {
    pub fn new(provider: DynProvider, inbox_address: Address) -> Self {
        Self {
            provider,
            inbox_address,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub async fn fetch_proposed(&self, from: u64, to: u64) -> Result<Vec<ProposedEvent>, Error> {
        let logs = self
            .fetch_logs(IInbox::Proposed::SIGNATURE_HASH, from, to)
            .await?;
        logs.into_iter().map(decode_proposed_log).collect()
    }

    pub async fn fetch_proved(&self, from: u64, to: u64) -> Result<Vec<ProvedEvent>, Error> {
        let logs = self
            .fetch_logs(IInbox::Proved::SIGNATURE_HASH, from, to)
            .await?;
        logs.into_iter().map(decode_proved_log).collect()
    }

    pub async fn fetch_bond_instructed(
        &self,
        from: u64,
        to: u64,
    ) -> Result<Vec<InboxEvent>, Error> {
        let logs = self
            .fetch_logs(IInbox::BondInstructed::SIGNATURE_HASH, from, to)
            .await?;
        logs.into_iter().map(decode_bond_instructed_log).collect()
    }

    pub async fn fetch_checkpoint_saved(
        &self,
        from: u64,
        to: u64,
    ) -> Result<Vec<InboxEvent>, Error> {
        let logs = self
            .fetch_logs(ICheckpointStore::CheckpointSaved::SIGNATURE_HASH, from, to)
            .await?;
        logs.into_iter().map(decode_checkpoint_saved_log).collect()
    }

    /// Fetches every inbox event kind in the block range, ordered by block
    /// number and log index.
    pub async fn fetch_range(&self, from: u64, to: u64) -> Result<Vec<InboxEvent>, Error> {
        let mut events: Vec<InboxEvent> = Vec::new();
        events.extend(
            self.fetch_proposed(from, to)
                .await?
                .into_iter()
                .map(InboxEvent::Proposed),
        );
        events.extend(
            self.fetch_proved(from, to)
                .await?
                .into_iter()
                .map(InboxEvent::Proved),
        );
        events.extend(self.fetch_bond_instructed(from, to).await?);
        events.extend(self.fetch_checkpoint_saved(from, to).await?);

        events.sort_by_key(|event| {
            let log = event_log(event);
            (
                log.block_number.unwrap_or_default(),
                log.log_index.unwrap_or_default(),
            )
        });
        Ok(events)
    }

    /// Polls the chain head and delivers new inbox events over `sender`
    /// until the token is cancelled or the receiver is dropped.
    pub async fn run(
        &self,
        start_block: u64,
        sender: Sender<InboxEvent>,
        cancel_token: CancellationToken,
    ) -> Result<(), Error> {
        let mut next_block = start_block;
        loop {
            if cancel_token.is_cancelled() {
                return Ok(());
            }

            let current_block = self
                .provider
                .get_block_number()
                .await
                .map_err(|e| anyhow!("Failed to get block number: {e}"))?;

            if next_block <= current_block {
                debug!(
                    "event indexer: fetching blocks {} to {}",
                    next_block, current_block
                );
                for event in self.fetch_range(next_block, current_block).await? {
                    if sender.send(event).await.is_err() {
                        debug!("event indexer: receiver dropped, stopping");
                        return Ok(());
                    }
                }
                next_block = current_block + 1;
            }

            tokio::select! {
                _ = cancel_token.cancelled() => return Ok(()),
                _ = sleep(self.poll_interval) => {}
            }
        }
    }

    async fn fetch_logs(&self, signature: B256, from: u64, to: u64) -> Result<Vec<Log>, Error> {
        let filter = Filter::new()
            .address(self.inbox_address)
            .event_signature(signature)
            .from_block(from)
            .to_block(to);
        self.provider
            .get_logs(&filter)
            .await
            .map_err(|e| anyhow!("Failed to get logs: {e}"))
    }
}

fn event_log(event: &InboxEvent) -> &Log {
    match event {
        InboxEvent::Proposed(proposed) => &proposed.log,
        InboxEvent::Proved(proved) => &proved.log,
        InboxEvent::BondInstructed { log, .. } => log,
        InboxEvent::CheckpointSaved { log, .. } => log,
    }
}

fn decode_proposed_log(log: Log) -> Result<ProposedEvent, Error> {
    let event = log
        .log_decode::<IInbox::Proposed>()
        .map_err(|e| anyhow!("Failed to decode Proposed log: {e}"))?;
    let payload = codec::decode_proposed_event(&event.inner.data.data)
        .map_err(|e| anyhow!("Failed to decode Proposed payload: {e}"))?;
    Ok(ProposedEvent { payload, log })
}

fn decode_proved_log(log: Log) -> Result<ProvedEvent, Error> {
    let event = log
        .log_decode::<IInbox::Proved>()
        .map_err(|e| anyhow!("Failed to decode Proved log: {e}"))?;
    let payload = codec::decode_proved_event(&event.inner.data.data)
        .map_err(|e| anyhow!("Failed to decode Proved payload: {e}"))?;
    Ok(ProvedEvent { payload, log })
}

fn decode_bond_instructed_log(log: Log) -> Result<InboxEvent, Error> {
    let event = log
        .log_decode::<IInbox::BondInstructed>()
        .map_err(|e| anyhow!("Failed to decode BondInstructed log: {e}"))?;
    Ok(InboxEvent::BondInstructed {
        instructions: event.inner.data.instructions.clone(),
        log,
    })
}

fn decode_checkpoint_saved_log(log: Log) -> Result<InboxEvent, Error> {
    let event = log
        .log_decode::<ICheckpointStore::CheckpointSaved>()
        .map_err(|e| anyhow!("Failed to decode CheckpointSaved log: {e}"))?;
    let data = &event.inner.data;
    Ok(InboxEvent::CheckpointSaved {
        checkpoint: Checkpoint {
            blockNumber: data.blockNumber,
            blockHash: data.blockHash,
            stateRoot: data.stateRoot,
        },
        log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::aliases::U48;

    fn raw_log<E: SolEvent>(event: &E, address: Address) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn proposed_log_decodes_through_local_codec() {
        let mut payload = ProposedEventPayload::default();
        payload.proposal.id = U48::from(7u64);
        let encoded = codec::encode_proposed_event(&payload).unwrap();
        let log = raw_log(
            &IInbox::Proposed {
                data: encoded.into(),
            },
            Address::repeat_byte(0x10),
        );

        let decoded = decode_proposed_log(log).unwrap();
        assert_eq!(decoded.payload, payload);
    }

    #[test]
    fn proved_log_with_wrong_topic_fails() {
        let payload = ProposedEventPayload::default();
        let encoded = codec::encode_proposed_event(&payload).unwrap();
        let log = raw_log(
            &IInbox::Proposed {
                data: encoded.into(),
            },
            Address::repeat_byte(0x10),
        );

        assert!(decode_proved_log(log).is_err());
    }

    #[test]
    fn malformed_payload_bytes_fail_decoding() {
        let log = raw_log(
            &IInbox::Proposed {
                data: vec![0x01, 0x02].into(),
            },
            Address::repeat_byte(0x10),
        );
        assert!(decode_proposed_log(log).is_err());
    }

    #[test]
    fn checkpoint_saved_log_rebuilds_checkpoint() {
        let event = ICheckpointStore::CheckpointSaved {
            blockNumber: U48::from(99u64),
            blockHash: B256::repeat_byte(0x0C),
            stateRoot: B256::repeat_byte(0x0D),
        };
        let log = raw_log(&event, Address::repeat_byte(0x10));
        let decoded = decode_checkpoint_saved_log(log).unwrap();
        match decoded {
            InboxEvent::CheckpointSaved { checkpoint, .. } => {
                assert_eq!(checkpoint.blockNumber, U48::from(99u64));
                assert_eq!(checkpoint.blockHash, B256::repeat_byte(0x0C));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
