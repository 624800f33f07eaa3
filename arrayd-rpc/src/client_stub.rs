use serde::{de::DeserializeOwned, Serialize};

use crate::{error::Error, session::Session};

/// Client stub for RPC calls: one synchronous round trip per call.
pub struct ClientStub {
    session: Session,
}

impl ClientStub {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session_id(&self) -> u64 {
        self.session.id()
    }

    pub fn sync_call<T: Serialize, R: DeserializeOwned>(&mut self, args: &T) -> Result<R, Error> {
        self.session.send(args)?;
        self.session.recv()
    }
}
