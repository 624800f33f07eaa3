use std::net::ToSocketAddrs;

use arrayd_rpc::{ClientStub, Reply, Request, Session, Transport};
use rand::Rng;
use tracing::{debug, info};

use crate::{
    array::ArrayHandle,
    error::ClientError,
    io::{lshdf, read_hdf5},
};

/// The generic request seam: submit a command with its argument mapping and
/// get the raw reply payload back. Operations in [`crate::io`] are written
/// against this trait so they can run against a real connection or a test
/// double.
pub trait GenericMsg {
    fn generic_msg(&mut self, cmd: &str, args: &[(&str, &str)]) -> Result<String, ClientError>;
}

/// Connection to an arrayd server.
pub struct Client {
    stub: ClientStub,
}

impl Client {
    /// Connect to the server at `addr` under a fresh session id.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, ClientError> {
        let transport = Transport::connect(addr)?;
        let id = rand::thread_rng().gen();
        info!("connected, session {id}");
        Ok(Self {
            stub: ClientStub::new(Session::new(id, transport)),
        })
    }

    /// Read the named dataset from an HDF5 file on the server as an array of
    /// the given rank. See [`crate::io::read_hdf5`].
    pub fn read_hdf5(
        &mut self,
        filename: &str,
        dataset: &str,
        rank: usize,
    ) -> Result<ArrayHandle, ClientError> {
        read_hdf5(self, filename, dataset, rank)
    }

    /// List datasets in an HDF5 file on the server. See [`crate::io::lshdf`].
    pub fn lshdf(&mut self, filename: &str) -> Result<String, ClientError> {
        lshdf(self, filename)
    }
}

impl GenericMsg for Client {
    fn generic_msg(&mut self, cmd: &str, args: &[(&str, &str)]) -> Result<String, ClientError> {
        let request = Request::new(cmd, args);
        debug!("sending {cmd}");
        let reply: Reply = self.stub.sync_call(&request)?;
        match reply {
            Reply::Ok(payload) => Ok(payload),
            Reply::Error(msg) => Err(ClientError::Server(msg)),
        }
    }
}
