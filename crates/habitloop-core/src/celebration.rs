//! Celebration timer implementation.
//!
//! A two-state machine that auto-resets a "celebrating" flag after a
//! duration bound to the reported outcome tier. Like the timer engine it is
//! wall-clock based with no internal threads -- the caller invokes `tick()`
//! periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Celebrating -> Idle
//! ```
//!
//! `trigger()` is external (the core never decides to celebrate on its own);
//! re-triggering mid-flight replaces the armed deadline, so at most one
//! reset ever fires per celebration.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Outcome tier controlling the celebratory display duration.
///
/// Wire names keep the source locale ("oro"/"plata"/"bronce").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelebrationTier {
    #[serde(rename = "oro")]
    Gold,
    #[serde(rename = "plata")]
    Silver,
    #[serde(rename = "bronce")]
    Bronze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelebrationState {
    Idle,
    Celebrating,
}

/// Tier → display duration table. The only celebration tunable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelebrationDurations {
    pub gold_ms: u64,
    pub silver_ms: u64,
    pub bronze_ms: u64,
}

impl Default for CelebrationDurations {
    fn default() -> Self {
        Self {
            gold_ms: 10_000,
            silver_ms: 7_000,
            bronze_ms: 5_000,
        }
    }
}

impl CelebrationDurations {
    /// Total over all tiers; every tier maps to exactly one duration.
    pub fn for_tier(&self, tier: CelebrationTier) -> u64 {
        match tier {
            CelebrationTier::Gold => self.gold_ms,
            CelebrationTier::Silver => self.silver_ms,
            CelebrationTier::Bronze => self.bronze_ms,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveCelebration {
    tier: CelebrationTier,
    deadline_ms: u64,
}

/// Self-expiring celebration state machine.
#[derive(Debug)]
pub struct CelebrationTimer {
    durations: CelebrationDurations,
    state: CelebrationState,
    active: Option<ActiveCelebration>,
}

impl CelebrationTimer {
    pub fn new() -> Self {
        Self::with_durations(CelebrationDurations::default())
    }

    pub fn with_durations(durations: CelebrationDurations) -> Self {
        Self {
            durations,
            state: CelebrationState::Idle,
            active: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CelebrationState {
        self.state
    }

    /// The outward flag consumed by celebratory overlay components.
    pub fn is_celebrating(&self) -> bool {
        self.state == CelebrationState::Celebrating
    }

    pub fn tier(&self) -> Option<CelebrationTier> {
        self.active.map(|a| a.tier)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Enter (or re-enter) the celebrating state for the given tier.
    ///
    /// Re-triggering mid-flight replaces the armed deadline with the new
    /// tier's duration; no two deadlines are ever live concurrently.
    pub fn trigger(&mut self, tier: CelebrationTier) -> Event {
        self.trigger_at(tier, now_ms())
    }

    /// Deterministic variant of [`trigger`](Self::trigger).
    pub fn trigger_at(&mut self, tier: CelebrationTier, now_ms: u64) -> Event {
        let duration_ms = self.durations.for_tier(tier);
        self.state = CelebrationState::Celebrating;
        self.active = Some(ActiveCelebration {
            tier,
            deadline_ms: now_ms.saturating_add(duration_ms),
        });
        Event::CelebrationStarted {
            tier,
            duration_ms,
            at: Utc::now(),
        }
    }

    /// Call periodically. Forces `Celebrating → Idle` once the armed
    /// deadline passes.
    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(now_ms())
    }

    /// Deterministic variant of [`tick`](Self::tick).
    pub fn tick_at(&mut self, now_ms: u64) -> Option<Event> {
        let expired = matches!(&self.active, Some(a) if now_ms >= a.deadline_ms);
        if !expired {
            return None;
        }
        let active = self.active.take()?;
        self.state = CelebrationState::Idle;
        Some(Event::CelebrationEnded {
            tier: active.tier,
            at: Utc::now(),
        })
    }

    /// Teardown/manual reset: unconditionally return to idle and disarm
    /// the deadline. Idempotent; nothing fires afterwards.
    pub fn dismiss(&mut self) {
        self.state = CelebrationState::Idle;
        self.active = None;
    }
}

impl Default for CelebrationTimer {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
