use near_sdk::{AccountId, FunctionError};
use thiserror::Error;

use crate::tier::TokenId;

/// Failure of a contract call. Returned through `#[handle_result]`, so an
/// `Err` aborts the call with the `Display` text and reverts its writes.
#[derive(Error, FunctionError, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("Token id {0} is out of range")]
    OutOfRange(TokenId),

    #[error("Only the owner can call this method")]
    Unauthorized,

    #[error("Tokens have already been distributed")]
    AlreadyDistributed,

    #[error("Too many recipients: {count}, maximum is {max}")]
    TooManyRecipients { count: u64, max: u64 },

    #[error("Recipient list cannot be empty")]
    NoRecipients,

    #[error("Duplicate recipient: {0}")]
    DuplicateRecipient(AccountId),

    #[error("Minting is disabled")]
    MintDisabled,
}
