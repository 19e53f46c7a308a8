// NEP-297 events emitted on state transitions.
//
// Distribution is logged as a single summary: a receipt is capped at 100
// logs and 16 KiB of log text, so one entry per recipient does not fit.
use near_sdk::{near, AccountId};

use crate::tier::TokenId;

#[near(event_json(standard = "tiered_token"))]
pub enum TieredTokenEvent {
    #[event_version("1.0.0")]
    Distribution {
        owner_id: AccountId,
        recipient_count: u64,
        last_token_id: TokenId,
        /// Units distributed per tier, indexed by tier number.
        tier_counts: [u64; 4],
    },
    #[event_version("1.0.0")]
    MintDisabled { owner_id: AccountId },
}
