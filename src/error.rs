use thiserror::Error;

/// Failure to read a loot identifier of the form `{type}_{rarity}_{number}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentKeyError {
    #[error("loot key `{0}` must have exactly three `_`-separated tokens")]
    WrongTokenCount(String),

    #[error("unknown item type `{0}`")]
    UnknownItemType(String),

    #[error("unknown rarity `{0}`")]
    UnknownRarity(String),

    #[error("invalid loot number `{0}`")]
    InvalidNumber(String),
}
