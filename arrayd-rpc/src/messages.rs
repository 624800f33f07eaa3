use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A backend command with its argument mapping.
///
/// The argument map is ordered so an encoded request is deterministic for a
/// given set of arguments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub cmd: String,
    pub args: BTreeMap<String, String>,
}

impl Request {
    pub fn new(cmd: impl Into<String>, args: &[(&str, &str)]) -> Request {
        Request {
            cmd: cmd.into(),
            args: args
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// The backend's reply to a request: the raw payload on success, or the
/// failure message the backend reported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Ok(String),
    Error(String),
}

/// Packet is the base element transmitted on the wire: an encoded message
/// body tagged with the session that owns it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct Packet {
    session_id: u64,
    data: Vec<u8>,
}

impl Packet {
    pub(crate) fn new(session_id: u64, data: Vec<u8>) -> Packet {
        Packet { session_id, data }
    }

    pub(crate) fn session_id(&self) -> u64 {
        self.session_id
    }

    pub(crate) fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}
