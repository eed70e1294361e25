use model::interaction::InteractionType;
use serde::Serializer;
use warp::reject::Reject;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing {0} header")]
    MissingSignatureHeader(&'static str),

    #[error("invalid ed25519 signature: {0}")]
    InvalidSignatureFormat(#[from] hex::FromHexError),

    #[error("ed25519 signature does not match payload")]
    InvalidSignature,

    #[error("error while decoding json payload: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("interaction type {0:?} cannot be deferred")]
    UnsupportedInteractionType(InteractionType),

    #[error("error while publishing to queue: {0}")]
    QueueError(#[from] event_queue::QueueError),

    #[error("error while reading config from environment: {0}")]
    EnvyError(#[from] envy::Error),

    #[error("public key was not valid hex: {0}")]
    InvalidPublicKeyFormat(hex::FromHexError),

    #[error("invalid ed25519 public key: {0}")]
    InvalidPublicKey(ed25519_dalek::SignatureError),

    #[error("error while parsing server address: {0}")]
    AddrParseError(#[from] std::net::AddrParseError),
}

impl Reject for Error {}

impl serde::Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}", self)[..])
    }
}
