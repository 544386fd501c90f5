//! Messages exchanged with the UI surface.
//!
//! Both directions are JSON objects discriminated by a `type` field. Inbound
//! decoding is total: anything the dispatcher does not recognise becomes
//! [`InboundMessage::Unknown`] rather than an error.

use serde::Serialize;
use serde_json::Value;

use crate::PluginData;

/// Message sent by the UI surface to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundMessage {
    /// `{ "type": "runAction" }`
    RunAction,
    /// `{ "type": "closePlugin" }`
    ClosePlugin,
    /// Unrecognised discriminator, or no string `type` field at all.
    Unknown { discriminator: Option<String> },
}

impl InboundMessage {
    pub fn from_value(value: &Value) -> Self {
        let discriminator = value
            .as_object()
            .and_then(|fields| fields.get("type"))
            .and_then(Value::as_str);
        match discriminator {
            Some("runAction") => Self::RunAction,
            Some("closePlugin") => Self::ClosePlugin,
            other => Self::Unknown {
                discriminator: other.map(ToOwned::to_owned),
            },
        }
    }

    /// Decodes raw JSON text. Text that is not valid JSON is `Unknown`.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::Unknown {
                discriminator: None,
            },
        }
    }

    pub fn discriminator(&self) -> Option<&str> {
        match self {
            Self::RunAction => Some("runAction"),
            Self::ClosePlugin => Some("closePlugin"),
            Self::Unknown { discriminator } => discriminator.as_deref(),
        }
    }
}

/// Message pushed from the controller to the UI surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    SelectionData { data: PluginData },
}

impl OutboundMessage {
    pub fn to_value(&self) -> Value {
        // A string-keyed enum of plain strings always serializes.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn recognised_discriminators_ignore_extra_fields() {
        let msg = InboundMessage::from_value(&json!({ "type": "runAction", "count": 3 }));
        assert_eq!(msg, InboundMessage::RunAction);

        let msg = InboundMessage::from_value(&json!({ "type": "closePlugin" }));
        assert_eq!(msg, InboundMessage::ClosePlugin);
    }

    #[test]
    fn unknown_discriminator_is_kept() {
        let msg = InboundMessage::from_value(&json!({ "type": "somethingElse" }));
        assert_eq!(
            msg,
            InboundMessage::Unknown {
                discriminator: Some("somethingElse".to_string())
            }
        );
    }

    #[test]
    fn malformed_shapes_decode_to_unknown() {
        for value in [json!({}), json!(null), json!(42), json!({ "type": 5 }), json!(["runAction"])] {
            assert_eq!(
                InboundMessage::from_value(&value),
                InboundMessage::Unknown {
                    discriminator: None
                },
                "value: {value}"
            );
        }
        assert_eq!(
            InboundMessage::from_json("{not json"),
            InboundMessage::Unknown {
                discriminator: None
            }
        );
    }

    #[test]
    fn discriminator_is_case_sensitive() {
        let msg = InboundMessage::from_json(r#"{"type":"RunAction"}"#);
        assert_eq!(msg.discriminator(), Some("RunAction"));
        assert!(matches!(msg, InboundMessage::Unknown { .. }));
    }

    #[test]
    fn selection_data_wire_shape() {
        let msg = OutboundMessage::SelectionData {
            data: PluginData::new("FRAME"),
        };
        assert_eq!(msg.to_value(), json!({ "type": "selectionData", "data": "FRAME" }));
    }
}
