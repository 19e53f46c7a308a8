// Tier layout for the distributable token ids.
//
// Ids are partitioned into four contiguous ranges:
//   tier0: 1..=100, tier1: 101..=150, tier2: 151..=200, tier3: 201..=206
// Anything else (0, or 207 and up) is out of range.
use near_sdk::near;

use crate::error::ContractError;

pub type TokenId = u64;

/// Inclusive upper bound of each tier, in tier order.
pub const TIER_UPPER_BOUNDS: [TokenId; 4] = [100, 150, 200, 206];

/// Highest distributable token id.
pub const MAX_TOKEN_ID: TokenId = TIER_UPPER_BOUNDS[3];

/// A distribution covers at most one recipient per token id.
pub const MAX_RECIPIENTS: u64 = MAX_TOKEN_ID;

#[near(serializers = [borsh])]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Tier0,
    Tier1,
    Tier2,
    Tier3,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Tier0, Tier::Tier1, Tier::Tier2, Tier::Tier3];

    /// Resolve the tier of a token id by direct range comparison.
    pub fn from_token_id(token_id: TokenId) -> Result<Self, ContractError> {
        match token_id {
            1..=100 => Ok(Tier::Tier0),
            101..=150 => Ok(Tier::Tier1),
            151..=200 => Ok(Tier::Tier2),
            201..=206 => Ok(Tier::Tier3),
            _ => Err(ContractError::OutOfRange(token_id)),
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Metadata file name shared by every token of this tier.
    pub fn file_name(self) -> &'static str {
        match self {
            Tier::Tier0 => "tier0.json",
            Tier::Tier1 => "tier1.json",
            Tier::Tier2 => "tier2.json",
            Tier::Tier3 => "tier3.json",
        }
    }
}

/// Build the metadata locator `<base_uri><tierN.json>` for a token id.
pub fn metadata_locator(base_uri: &str, token_id: TokenId) -> Result<String, ContractError> {
    let tier = Tier::from_token_id(token_id)?;
    Ok(format!("{}{}", base_uri, tier.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ranges() {
        for token_id in 1..=100 {
            assert_eq!(Tier::from_token_id(token_id), Ok(Tier::Tier0));
        }
        for token_id in 101..=150 {
            assert_eq!(Tier::from_token_id(token_id), Ok(Tier::Tier1));
        }
        for token_id in 151..=200 {
            assert_eq!(Tier::from_token_id(token_id), Ok(Tier::Tier2));
        }
        for token_id in 201..=206 {
            assert_eq!(Tier::from_token_id(token_id), Ok(Tier::Tier3));
        }
    }

    #[test]
    fn test_out_of_range_boundaries() {
        for token_id in [0, 207, 208, 209, u64::MAX] {
            assert_eq!(
                Tier::from_token_id(token_id),
                Err(ContractError::OutOfRange(token_id))
            );
        }
    }

    #[test]
    fn test_upper_bounds_match_ranges() {
        for (tier, bound) in Tier::ALL.iter().zip(TIER_UPPER_BOUNDS) {
            assert_eq!(Tier::from_token_id(bound), Ok(*tier));
        }
        assert_eq!(MAX_RECIPIENTS, 206);
    }

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Tier::Tier2.index(), 2);
        assert_eq!(Tier::from_index(3), Some(Tier::Tier3));
        assert_eq!(Tier::from_index(4), None);
    }

    #[test]
    fn test_metadata_locator() {
        let base = "https://ipfs/<SAMPLE_URI>/";
        assert_eq!(
            metadata_locator(base, 1).unwrap(),
            "https://ipfs/<SAMPLE_URI>/tier0.json"
        );
        assert_eq!(
            metadata_locator(base, 206).unwrap(),
            "https://ipfs/<SAMPLE_URI>/tier3.json"
        );
        assert_eq!(
            metadata_locator(base, 207),
            Err(ContractError::OutOfRange(207))
        );
    }
}
