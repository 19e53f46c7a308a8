// Tiered Token Contract
//
// This contract manages a fixed set of 206 token ids split into four tiers:
// - tier0: ids 1-100, tier1: ids 101-150, tier2: ids 151-200, tier3: ids 201-206
// - Every tier shares one metadata file: <base_uri>tier<N>.json
// - The owner distributes the whole set once, one unit per recipient,
//   assigning ids in recipient order
// - The owner can permanently disable minting
//
// Both the distribution flag and the mint gate only ever move from false to true.
use std::collections::HashSet;

use near_sdk::store::LookupMap;
use near_sdk::{env, log, near, require, AccountId, PanicOnDefault};

mod error;
mod events;
mod tier;

pub use error::ContractError;
pub use events::TieredTokenEvent;
pub use tier::{metadata_locator, Tier, TokenId, MAX_RECIPIENTS, MAX_TOKEN_ID, TIER_UPPER_BOUNDS};

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct TieredTokenContract {
    owner_id: AccountId,
    /// Prefix of every metadata locator, e.g. "https://ipfs/<CID>/"
    base_uri: String,
    has_distributed: bool,
    is_mint_disabled: bool,
    /// Recipient of each distributed token id
    token_owners: LookupMap<TokenId, AccountId>,
    /// Units held per (account, tier)
    tier_balances: LookupMap<(AccountId, Tier), u64>,
    /// Units distributed per tier, indexed by tier number
    tier_supply: [u64; 4],
}

#[near]
impl TieredTokenContract {
    /// Initialize the contract
    ///
    /// # Arguments
    /// * `base_uri` - Prefix for metadata locators. The tier file name is appended as-is,
    ///                so it normally ends with a '/'.
    /// * `owner_id` - Optional owner account. If not provided, the account initializing
    ///                the contract becomes the owner.
    #[init]
    #[allow(clippy::use_self)]
    pub fn new(base_uri: String, owner_id: Option<AccountId>) -> Self {
        require!(!base_uri.is_empty(), "Base URI cannot be empty");

        let owner_id = owner_id.unwrap_or_else(env::predecessor_account_id);

        log!("Initialized with owner {} and base URI {}", owner_id, base_uri);

        Self {
            owner_id,
            base_uri,
            has_distributed: false,
            is_mint_disabled: false,
            token_owners: LookupMap::new(b"o"),
            tier_balances: LookupMap::new(b"b"),
            tier_supply: [0; 4],
        }
    }

    /// Metadata locator for a token id: `<base_uri>tier<N>.json`.
    ///
    /// # Errors
    /// `OutOfRange` for token ids outside 1..=206
    #[handle_result]
    pub fn uri(&self, token_id: TokenId) -> Result<String, ContractError> {
        metadata_locator(&self.base_uri, token_id)
    }

    /// Tier number (0-3) of a token id.
    ///
    /// # Errors
    /// `OutOfRange` for token ids outside 1..=206
    #[handle_result]
    pub fn get_tier_by_token_id(&self, token_id: TokenId) -> Result<u8, ContractError> {
        Tier::from_token_id(token_id).map(Tier::index)
    }

    /// Distribute one token to each recipient (owner only, once).
    ///
    /// Recipient `i` receives token id `i + 1`, and so one unit of that id's tier.
    /// A list shorter than 206 assigns only the first `recipients.len()` ids.
    ///
    /// # Arguments
    /// * `recipients` - Ordered list of distinct recipient accounts, at most 206
    ///
    /// # Returns
    /// `true` once the distribution is recorded
    ///
    /// # Errors
    /// - `Unauthorized` if the caller is not the owner
    /// - `AlreadyDistributed` if a distribution already happened
    /// - `MintDisabled` if minting has been disabled
    /// - `TooManyRecipients`, `NoRecipients` or `DuplicateRecipient` for an invalid list
    #[handle_result]
    pub fn distribute(&mut self, recipients: Vec<AccountId>) -> Result<bool, ContractError> {
        self.internal_distribute(&env::predecessor_account_id(), recipients)
    }

    pub fn has_distributed(&self) -> bool {
        self.has_distributed
    }

    /// Permanently disable minting (owner only).
    /// Calling it again once disabled is a no-op.
    #[handle_result]
    pub fn disable_mint(&mut self) -> Result<(), ContractError> {
        self.internal_disable_mint(&env::predecessor_account_id())
    }

    pub fn is_mint_disabled(&self) -> bool {
        self.is_mint_disabled
    }

    /// Number of units of `tier` held by `account_id`. Unknown tiers hold nothing.
    pub fn balance_of(&self, account_id: AccountId, tier: u8) -> u64 {
        Tier::from_index(tier)
            .and_then(|tier| self.tier_balances.get(&(account_id, tier)).copied())
            .unwrap_or(0)
    }

    /// Account that received `token_id`, if it has been distributed
    pub fn token_owner(&self, token_id: TokenId) -> Option<AccountId> {
        self.token_owners.get(&token_id).cloned()
    }

    /// Number of units distributed for `tier`
    pub fn tier_supply(&self, tier: u8) -> u64 {
        Tier::from_index(tier)
            .map(|tier| self.tier_supply[tier.index() as usize])
            .unwrap_or(0)
    }

    pub fn owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn base_uri(&self) -> String {
        self.base_uri.clone()
    }
}

impl TieredTokenContract {
    fn assert_owner(&self, caller: &AccountId) -> Result<(), ContractError> {
        if *caller != self.owner_id {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// First account that appears twice in `recipients`
    fn find_duplicate(recipients: &[AccountId]) -> Option<&AccountId> {
        let mut seen = HashSet::with_capacity(recipients.len());
        recipients.iter().find(|recipient| !seen.insert(*recipient))
    }

    /// Distribution with an explicit caller identity.
    ///
    /// Every check runs before the first write, so a rejected call leaves no
    /// partial state behind.
    pub(crate) fn internal_distribute(
        &mut self,
        caller: &AccountId,
        recipients: Vec<AccountId>,
    ) -> Result<bool, ContractError> {
        self.assert_owner(caller)?;

        if self.has_distributed {
            return Err(ContractError::AlreadyDistributed);
        }
        if self.is_mint_disabled {
            return Err(ContractError::MintDisabled);
        }

        let count = recipients.len() as u64;
        if count > MAX_RECIPIENTS {
            return Err(ContractError::TooManyRecipients {
                count,
                max: MAX_RECIPIENTS,
            });
        }
        if recipients.is_empty() {
            return Err(ContractError::NoRecipients);
        }
        if let Some(duplicate) = Self::find_duplicate(&recipients) {
            return Err(ContractError::DuplicateRecipient(duplicate.clone()));
        }

        let mut tier_counts = [0u64; 4];
        for (token_id, recipient) in (1..=MAX_TOKEN_ID).zip(recipients) {
            let tier = Tier::from_token_id(token_id)?;

            let key = (recipient.clone(), tier);
            let balance = self.tier_balances.get(&key).copied().unwrap_or(0);
            self.tier_balances.insert(key, balance + 1);
            self.token_owners.insert(token_id, recipient);

            tier_counts[tier.index() as usize] += 1;
        }

        for (supply, added) in self.tier_supply.iter_mut().zip(tier_counts) {
            *supply += added;
        }
        self.has_distributed = true;

        TieredTokenEvent::Distribution {
            owner_id: caller.clone(),
            recipient_count: count,
            last_token_id: count,
            tier_counts,
        }
        .emit();

        log!(
            "Distributed {} tokens (tier0: {}, tier1: {}, tier2: {}, tier3: {})",
            count,
            tier_counts[0],
            tier_counts[1],
            tier_counts[2],
            tier_counts[3]
        );

        Ok(true)
    }

    pub(crate) fn internal_disable_mint(&mut self, caller: &AccountId) -> Result<(), ContractError> {
        self.assert_owner(caller)?;

        if self.is_mint_disabled {
            log!("Minting is already disabled");
            return Ok(());
        }

        self.is_mint_disabled = true;

        TieredTokenEvent::MintDisabled {
            owner_id: caller.clone(),
        }
        .emit();

        log!("Minting disabled by {}", caller);

        Ok(())
    }
}
