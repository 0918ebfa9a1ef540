use cosmwasm_schema::cw_serde;
use omniflix_std::types::omniflix::onft::v1beta1::WeightedAddress;
use thiserror::Error;

const MAX_SHORT_FIELD_LENGTH: usize = 256;
const MAX_LONG_FIELD_LENGTH: usize = 4096;

#[derive(Error, Debug, PartialEq)]
pub enum CollectionDetailsError {
    #[error("Collection id cannot be empty")]
    EmptyCollectionId {},
    #[error("Invalid collection name")]
    InvalidCollectionName {},
    #[error("Invalid symbol")]
    InvalidSymbol {},
    #[error("Invalid description")]
    InvalidDescription {},
    #[error("Invalid preview uri")]
    InvalidPreviewUri {},
    #[error("Invalid schema")]
    InvalidSchema {},
    #[error("Invalid uri")]
    InvalidUri {},
    #[error("Invalid uri hash")]
    InvalidUriHash {},
    #[error("Invalid data")]
    InvalidData {},
}

/// The onft denom created for the sale. The minter contract is its creator,
/// so every item of the collection is issued through it.
#[cw_serde]
pub struct CollectionDetails {
    pub id: String,
    pub collection_name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub preview_uri: Option<String>,
    pub schema: Option<String>,
    pub uri: Option<String>,
    pub uri_hash: Option<String>,
    pub data: Option<String>,
    // Defaults to the payment collector when unset
    pub royalty_receivers: Option<Vec<WeightedAddress>>,
}

impl CollectionDetails {
    pub fn check_integrity(&self) -> Result<(), CollectionDetailsError> {
        if self.id.is_empty() {
            return Err(CollectionDetailsError::EmptyCollectionId {});
        }
        check_length(
            Some(&self.collection_name),
            MAX_SHORT_FIELD_LENGTH,
            CollectionDetailsError::InvalidCollectionName {},
        )?;
        check_length(
            Some(&self.symbol),
            MAX_SHORT_FIELD_LENGTH,
            CollectionDetailsError::InvalidSymbol {},
        )?;
        check_length(
            self.description.as_ref(),
            MAX_LONG_FIELD_LENGTH,
            CollectionDetailsError::InvalidDescription {},
        )?;
        check_length(
            self.preview_uri.as_ref(),
            MAX_SHORT_FIELD_LENGTH,
            CollectionDetailsError::InvalidPreviewUri {},
        )?;
        check_length(
            self.schema.as_ref(),
            MAX_SHORT_FIELD_LENGTH,
            CollectionDetailsError::InvalidSchema {},
        )?;
        check_length(
            self.uri.as_ref(),
            MAX_SHORT_FIELD_LENGTH,
            CollectionDetailsError::InvalidUri {},
        )?;
        check_length(
            self.uri_hash.as_ref(),
            MAX_SHORT_FIELD_LENGTH,
            CollectionDetailsError::InvalidUriHash {},
        )?;
        check_length(
            self.data.as_ref(),
            MAX_LONG_FIELD_LENGTH,
            CollectionDetailsError::InvalidData {},
        )
    }
}

fn check_length(
    value: Option<&String>,
    max: usize,
    error: CollectionDetailsError,
) -> Result<(), CollectionDetailsError> {
    match value {
        Some(value) if value.chars().count() > max => Err(error),
        _ => Ok(()),
    }
}
