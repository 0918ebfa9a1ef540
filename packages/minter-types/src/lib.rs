pub mod collection_details;
pub mod config;
pub mod stage;
pub mod token_details;
pub mod utils;
pub mod wave;

pub use collection_details::{CollectionDetails, CollectionDetailsError};
pub use config::{Config, ConfigurationError, MintLimit};
pub use stage::{current_stage, wave_phase, Stage, WalletStage};
pub use token_details::{TokenDetails, TokenDetailsError};
pub use wave::{Wave, WaveError, WaveID};
