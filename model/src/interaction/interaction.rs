use crate::Snowflake;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

/// An inbound interaction, dispatched on the payload's `type` tag.
///
/// Only the type tag and `data.name` (for application commands) are required
/// to be present; all other context fields are optional so that
/// classification never fails on fields this service does not interpret. The
/// original request bytes, not these structs, are what gets forwarded
/// downstream.
#[derive(Serialize, Debug)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Interaction {
    Ping(Box<PingInteraction>),
    ApplicationCommand(Box<ApplicationCommandInteraction>),
    MessageComponent(Box<MessageComponentInteraction>),
    ApplicationCommandAutoComplete(Box<ApplicationCommandAutoCompleteInteraction>),
    ModalSubmit(Box<ModalSubmitInteraction>),
}

impl Interaction {
    pub fn r#type(&self) -> InteractionType {
        match self {
            Interaction::Ping(_) => InteractionType::Ping,
            Interaction::ApplicationCommand(_) => InteractionType::ApplicationCommand,
            Interaction::MessageComponent(_) => InteractionType::MessageComponent,
            Interaction::ApplicationCommandAutoComplete(_) => {
                InteractionType::ApplicationCommandAutoComplete
            }
            Interaction::ModalSubmit(_) => InteractionType::ModalSubmit,
        }
    }
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutoComplete = 4,
    ModalSubmit = 5,
}

impl TryFrom<u64> for InteractionType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutoComplete,
            5 => Self::ModalSubmit,
            _ => return Err(format!("invalid interaction type \"{}\"", value).into_boxed_str()),
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PingInteraction {
    pub r#type: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationCommandInteraction {
    pub r#type: InteractionType,
    pub data: ApplicationCommandInteractionData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Box<str>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationCommandInteractionData {
    pub name: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandInteractionDataOption>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationCommandInteractionDataOption {
    pub name: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandInteractionDataOption>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageComponentInteraction {
    pub r#type: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Box<str>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationCommandAutoCompleteInteraction {
    pub r#type: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Box<str>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ModalSubmitInteraction {
    pub r#type: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Box<str>>,
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let interaction_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("interaction type was not an integer"))
            .and_then(InteractionType::try_from)
            .map_err(D::Error::custom)?;

        let interaction = match interaction_type {
            InteractionType::Ping => serde_json::from_value(value).map(Interaction::Ping),
            InteractionType::ApplicationCommand => {
                serde_json::from_value(value).map(Interaction::ApplicationCommand)
            }
            InteractionType::MessageComponent => {
                serde_json::from_value(value).map(Interaction::MessageComponent)
            }
            InteractionType::ApplicationCommandAutoComplete => {
                serde_json::from_value(value).map(Interaction::ApplicationCommandAutoComplete)
            }
            InteractionType::ModalSubmit => {
                serde_json::from_value(value).map(Interaction::ModalSubmit)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bare_ping() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":1}"#).unwrap();
        assert_eq!(interaction.r#type(), InteractionType::Ping);
    }

    #[test]
    fn test_deserialize_ping_with_context() {
        let json = r#"{"type":1,"id":"846266025439330324","application_id":"700742994386550880"}"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();

        match interaction {
            Interaction::Ping(ping) => {
                assert_eq!(ping.id, Some(Snowflake(846266025439330324)));
                assert_eq!(ping.application_id, Some(Snowflake(700742994386550880)));
            }
            other => panic!("expected ping, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_application_command() {
        let json = r#"{"type":2,"data":{"name":"roll"}}"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();

        match interaction {
            Interaction::ApplicationCommand(cmd) => {
                assert_eq!(&*cmd.data.name, "roll");
                assert!(cmd.guild_id.is_none());
            }
            other => panic!("expected application command, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_application_command_with_options() {
        let json = r#"{
            "type": 2,
            "id": "1",
            "guild_id": "2",
            "data": {
                "id": "3",
                "name": "roll",
                "options": [{"name": "sides", "value": 20}]
            }
        }"#;

        let interaction: Interaction = serde_json::from_str(json).unwrap();

        match interaction {
            Interaction::ApplicationCommand(cmd) => {
                let options = cmd.data.options.unwrap();
                assert_eq!(&*options[0].name, "sides");
            }
            other => panic!("expected application command, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_message_component() {
        let json = r#"{"type":3,"data":{"custom_id":"close","component_type":2}}"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction.r#type(), InteractionType::MessageComponent);
    }

    #[test]
    fn test_command_without_data_is_rejected() {
        let result: Result<Interaction, _> = serde_json::from_str(r#"{"type":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<Interaction, _> = serde_json::from_str(r#"{"type":9}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let result: Result<Interaction, _> = serde_json::from_str(r#"{"data":{"name":"roll"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_string_type_is_rejected() {
        let result: Result<Interaction, _> = serde_json::from_str(r#"{"type":"1"}"#);
        assert!(result.is_err());
    }
}
