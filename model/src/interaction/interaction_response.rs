use serde::Serialize;
use serde_repr::Serialize_repr;

/// The acknowledgement shapes this service sends back to the platform.
///
/// Pong answers liveness pings; DeferredChannelMessageWithSource tells the
/// platform the real response will arrive via a follow-up call. Neither
/// carries a `data` member.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum InteractionResponse {
    Pong(SimpleInteractionResponse),
    DeferredChannelMessageWithSource(SimpleInteractionResponse),
}

#[derive(Serialize, Debug)]
pub struct SimpleInteractionResponse {
    r#type: InteractionResponseType,
}

#[derive(Serialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[non_exhaustive]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    DeferredMessageUpdate = 6,
    UpdateMessage = 7,
    ApplicationCommandAutoCompleteResult = 8,
    Modal = 9,
}

impl InteractionResponse {
    pub fn new_pong() -> InteractionResponse {
        InteractionResponse::Pong(SimpleInteractionResponse {
            r#type: InteractionResponseType::Pong,
        })
    }

    pub fn new_deferred_channel_message_with_source() -> InteractionResponse {
        InteractionResponse::DeferredChannelMessageWithSource(SimpleInteractionResponse {
            r#type: InteractionResponseType::DeferredChannelMessageWithSource,
        })
    }
}
