//! Per-request metrics snapshot.
//!
//! Every randomized field is drawn independently; there is no correlation
//! between peers, memory, mempool and the rest. Height follows the wall clock
//! so consecutive scrapes appear to advance (and wrap every 100 seconds).

use rand::Rng;

use crate::exposition::{Bucket, Exposition};
use crate::node::BASE_HEIGHT;

pub const VALIDATORS: u64 = 75;
pub const VOTE_EVENTS: u64 = 1234;
pub const HEARTBEAT_EVENTS: u64 = 5678;
pub const KEY_ASSIGNMENTS: u64 = 42;
pub const SIGN_ATTEMPTS: u64 = 987;

const BLOCK_INTERVAL_BUCKETS: [Bucket; 5] = [
    Bucket::new("1", 0),
    Bucket::new("2", 45),
    Bucket::new("5", 120),
    Bucket::new("10", 150),
    Bucket::new("+Inf", 150),
];
const BLOCK_INTERVAL_SUM: f64 = 450.5;
const BLOCK_INTERVAL_COUNT: u64 = 150;

/// One draw of every time-derived or random metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub height: u64,
    pub peers: u64,
    pub mempool_size: u64,
    pub receive_bytes: u64,
    pub send_bytes: u64,
    pub resident_memory_bytes: u64,
    pub cpu_seconds: f64,
    pub alloc_bytes: u64,
    pub goroutines: u64,
}

impl MetricsSnapshot {
    /// Draw a snapshot for the given unix time (seconds).
    pub fn sample(now_unix: u64, rng: &mut (impl Rng + ?Sized)) -> Self {
        let height = BASE_HEIGHT + now_unix % 100;
        let peers = rng.gen_range(8..=15);
        let resident_memory_bytes = rng.gen_range(2_000_000_000..=4_000_000_000);
        let cpu_share: f64 = rng.gen_range(0.1..=0.8);
        let mempool_size = rng.gen_range(0..=50);
        let receive_bytes = rng.gen_range(1_000_000..=10_000_000);
        let send_bytes = rng.gen_range(1_000_000..=10_000_000);
        let alloc_bytes = rng.gen_range(50_000_000..=200_000_000);
        let goroutines = rng.gen_range(100..=500);

        Self {
            height,
            peers,
            mempool_size,
            receive_bytes,
            send_bytes,
            resident_memory_bytes,
            cpu_seconds: cpu_share * now_unix as f64,
            alloc_bytes,
            goroutines,
        }
    }

    pub fn last_signed_height(&self) -> u64 {
        self.height.saturating_sub(1)
    }

    /// Render as Prometheus exposition text.
    pub fn render(&self) -> String {
        let mut e = Exposition::new();
        e.gauge("tendermint_consensus_height", "Height of the chain", self.height)
            .gauge("tendermint_p2p_peers", "Number of peers", self.peers)
            .gauge(
                "tendermint_consensus_validators",
                "Number of validators",
                VALIDATORS,
            )
            .gauge(
                "tendermint_consensus_validator_power",
                "Voting power of the validator",
                0,
            )
            .gauge(
                "tendermint_consensus_validator_last_signed_height",
                "Last height signed by validator",
                self.last_signed_height(),
            )
            .counter(
                "tendermint_consensus_validator_missed_blocks",
                "Number of missed blocks",
                0,
            )
            .histogram(
                "tendermint_consensus_block_interval_seconds",
                "Time between blocks",
                &BLOCK_INTERVAL_BUCKETS,
                BLOCK_INTERVAL_SUM,
                BLOCK_INTERVAL_COUNT,
            )
            .gauge(
                "tendermint_mempool_size",
                "Number of transactions in mempool",
                self.mempool_size,
            )
            .counter(
                "tendermint_p2p_peer_receive_bytes_total",
                "Bytes received from peers",
                self.receive_bytes,
            )
            .counter(
                "tendermint_p2p_peer_send_bytes_total",
                "Bytes sent to peers",
                self.send_bytes,
            )
            .gauge(
                "process_resident_memory_bytes",
                "Resident memory size in bytes",
                self.resident_memory_bytes,
            )
            .counter(
                "process_cpu_seconds_total",
                "Total user and system CPU time spent in seconds",
                self.cpu_seconds,
            )
            .gauge(
                "go_memstats_alloc_bytes",
                "Number of bytes allocated and still in use",
                self.alloc_bytes,
            )
            .gauge(
                "go_goroutines",
                "Number of goroutines that currently exist",
                self.goroutines,
            )
            .counter(
                "axelar_vote_events_total",
                "Total number of vote events",
                VOTE_EVENTS,
            )
            .counter(
                "axelar_heartbeat_events_total",
                "Total number of heartbeat events",
                HEARTBEAT_EVENTS,
            )
            .counter(
                "axelar_key_assignments_total",
                "Total number of key assignments",
                KEY_ASSIGNMENTS,
            )
            .counter(
                "axelar_sign_attempts_total",
                "Total number of sign attempts",
                SIGN_ATTEMPTS,
            );
        e.finish()
    }
}

/// Sample and render in one step.
pub fn render_metrics(now_unix: u64, rng: &mut (impl Rng + ?Sized)) -> String {
    MetricsSnapshot::sample(now_unix, rng).render()
}
