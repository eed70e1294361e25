mod interaction;
pub use interaction::{
    ApplicationCommandAutoCompleteInteraction, ApplicationCommandInteraction,
    ApplicationCommandInteractionData, ApplicationCommandInteractionDataOption, Interaction,
    InteractionType, MessageComponentInteraction, ModalSubmitInteraction, PingInteraction,
};

mod interaction_response;
pub use interaction_response::{InteractionResponse, InteractionResponseType};
