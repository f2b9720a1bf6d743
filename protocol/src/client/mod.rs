/// Commands that clients can send to the server during a battle
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    /// /choose CHOICE|RQID
    Choose { choice: String, rqid: Option<u64> },

    /// /team ORDER|RQID
    Team { order: String, rqid: Option<u64> },

    /// /undo
    Undo,

    /// /forfeit
    Forfeit,

    /// Raw command for catch-all
    Raw(String),
}

impl ClientCommand {
    /// Serialize command to protocol format
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::Choose { choice, rqid } => with_rqid(format!("/choose {}", choice), *rqid),
            Self::Team { order, rqid } => with_rqid(format!("/team {}", order), *rqid),
            Self::Undo => "/undo".to_string(),
            Self::Forfeit => "/forfeit".to_string(),
            Self::Raw(command) => command.clone(),
        }
    }
}

fn with_rqid(text: String, rqid: Option<u64>) -> String {
    match rqid {
        Some(id) => format!("{}|{}", text, id),
        None => text,
    }
}

/// Client message with optional room context
#[derive(Debug, Clone, PartialEq)]
pub struct ClientMessage {
    pub room_id: Option<String>,
    pub command: ClientCommand,
}

impl ClientMessage {
    pub fn new(room_id: impl Into<String>, command: ClientCommand) -> Self {
        Self {
            room_id: Some(room_id.into()),
            command,
        }
    }

    /// Serialize to wire format: ROOMID|TEXT or |TEXT
    pub fn to_wire_format(&self) -> String {
        let text = self.command.to_protocol_string();
        match &self.room_id {
            Some(room) => format!("{}|{}", room, text),
            None => format!("|{}", text),
        }
    }
}
