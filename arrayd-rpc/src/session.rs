use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{error::Error, messages::Packet, transport::Transport};

/// Session provides send/receive between server/client. One session owns one
/// transport; every packet it emits carries the session id, and packets that
/// arrive tagged with another id are rejected.
pub struct Session {
    transport: Transport,
    id: u64,
}

impl Session {
    pub fn new(id: u64, transport: Transport) -> Self {
        Self { transport, id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn send<T: Serialize>(&mut self, data: &T) -> Result<(), Error> {
        let body = bincode::serialize(data).map_err(Error::Encode)?;
        self.transport.send(&Packet::new(self.id, body))
    }

    pub(crate) fn recv<R: DeserializeOwned>(&mut self) -> Result<R, Error> {
        let packet = self.transport.recv()?;
        if packet.session_id() != self.id {
            return Err(Error::SessionMismatch {
                expected: self.id,
                got: packet.session_id(),
            });
        }
        debug!("session {} received {} bytes", self.id, packet.data().len());
        bincode::deserialize(packet.data()).map_err(Error::Decode)
    }
}
