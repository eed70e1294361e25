use std::sync::Arc;

use ed25519_dalek::Signature;
use tracing::{debug, error};
use warp::hyper::body::Bytes;
use warp::Rejection;

use model::interaction::{Interaction, InteractionResponse};

use crate::http::Server;
use crate::{signature, Error};

/// One request, one pass: verify, classify, then either answer a ping or
/// enqueue the raw body and defer. The body is not parsed until the
/// signature over `timestamp || body` has checked out.
pub async fn handle(
    server: Arc<Server>,
    sig: Signature,
    timestamp: String,
    body: Bytes,
) -> Result<warp::reply::Json, Rejection> {
    if !signature::verify(&server.config.public_key, &sig, timestamp.as_bytes(), &body) {
        return Err(Error::InvalidSignature.into());
    }

    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(Error::JsonError)
        .map_err(warp::reject::custom)?;

    match interaction {
        Interaction::Ping(_) => {
            debug!("Acknowledged ping");
            Ok(warp::reply::json(&InteractionResponse::new_pong()))
        }

        Interaction::ApplicationCommand(command) => {
            // The broker must durably accept the exact inbound bytes before
            // the platform is told a response is coming
            if let Err(e) = server.publisher.publish(&body).await {
                error!(error = %e, command = %command.data.name, "Failed to publish interaction");
                return Err(Error::QueueError(e).into());
            }

            debug!(command = %command.data.name, "Queued interaction");

            Ok(warp::reply::json(
                &InteractionResponse::new_deferred_channel_message_with_source(),
            ))
        }

        other => Err(Error::UnsupportedInteractionType(other.r#type()).into()),
    }
}
