use std::net::SocketAddr;
use std::sync::Arc;

use ed25519_dalek::Signature;
use tracing::debug;
use warp::http::StatusCode;
use warp::reply::{Json, Reply};
use warp::{Filter, Rejection};

use event_queue::EventPublisher;

use crate::http::response::ErrorResponse;
use crate::{Config, Error};

pub struct Server {
    pub config: Config,
    pub publisher: Arc<dyn EventPublisher + Send + Sync>,
}

impl Server {
    pub fn new(config: Config, publisher: Arc<dyn EventPublisher + Send + Sync>) -> Server {
        Server { config, publisher }
    }

    pub async fn start(self) -> Result<(), Error> {
        let address: SocketAddr = self.config.server_addr.parse()?;

        let filter = Arc::new(self).filter_handle();

        warp::serve(filter).run(address).await;

        Ok(())
    }

    pub fn filter_handle(
        self: Arc<Self>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = Rejection> + Clone {
        warp::post()
            .and(warp::path("interactions"))
            .and(warp::any().map(move || self.clone()))
            .and(Server::parse_signature())
            .and(Server::parse_timestamp())
            .and(warp::body::bytes())
            .and_then(super::handle)
            .with(warp::log("warp"))
            .recover(handle_rejection)
    }

    fn parse_signature() -> impl Filter<Extract = (Signature,), Error = Rejection> + Clone {
        warp::header::optional::<String>("x-signature-ed25519").and_then(
            |signature: Option<String>| async move {
                let signature = signature.ok_or_else(|| {
                    warp::reject::custom(Error::MissingSignatureHeader("x-signature-ed25519"))
                })?;

                let mut bytes = [0u8; 64];
                if let Err(e) = hex::decode_to_slice(signature, &mut bytes) {
                    return Err(warp::reject::custom(Error::InvalidSignatureFormat(e)));
                }

                Ok(Signature::from(bytes))
            },
        )
    }

    fn parse_timestamp() -> impl Filter<Extract = (String,), Error = Rejection> + Clone {
        warp::header::optional::<String>("x-signature-timestamp").and_then(
            |timestamp: Option<String>| async move {
                timestamp.ok_or_else(|| {
                    warp::reject::custom(Error::MissingSignatureHeader("x-signature-timestamp"))
                })
            },
        )
    }
}

async fn handle_rejection(error: Rejection) -> Result<warp::reply::Response, Rejection> {
    if let Some(err) = error.find::<Error>() {
        let status_code = match err {
            Error::MissingSignatureHeader(..)
            | Error::InvalidSignatureFormat(..)
            | Error::InvalidSignature => StatusCode::UNAUTHORIZED,
            Error::JsonError(..) | Error::UnsupportedInteractionType(..) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        debug!(status = %status_code, error = %err, "Rejecting request");

        // Unauthorized responses carry an empty body
        let response = if status_code == StatusCode::UNAUTHORIZED {
            warp::reply::with_status(warp::reply(), status_code).into_response()
        } else {
            let json: Json = ErrorResponse::from(err).into();
            warp::reply::with_status(json, status_code).into_response()
        };

        Ok(response)
    } else {
        Err(error)
    }
}
