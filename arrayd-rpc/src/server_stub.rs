use std::{
    io::ErrorKind,
    net::{TcpListener, TcpStream, ToSocketAddrs},
    sync::Arc,
    thread,
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

use crate::{error::Error, messages::Packet, transport::Transport};

/// Server-side request handler.
pub trait RpcHandler: Send + Sync {
    type Args;
    type Resp;
    fn handle(&self, arg: Self::Args) -> Self::Resp;
}

/// Accept loop that decodes one request per frame, dispatches it to the
/// handler, and sends the response back on the same session.
pub struct ServerStub<T, R> {
    listener: TcpListener,
    handler: Arc<dyn RpcHandler<Args = T, Resp = R>>,
}

impl<T, R> ServerStub<T, R>
where
    T: DeserializeOwned + Send + 'static,
    R: Serialize + Send + 'static,
{
    pub fn bind<A: ToSocketAddrs>(
        addr: A,
        handler: Arc<dyn RpcHandler<Args = T, Resp = R>>,
    ) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self { listener, handler })
    }

    /// Address the stub is listening on, for callers that bound port 0.
    pub fn local_addr(&self) -> Result<std::net::SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    pub fn serve(self) -> Result<(), Error> {
        info!("serving on {}", self.listener.local_addr()?);
        loop {
            let (stream, peer) = match self.listener.accept() {
                Ok(accepted) => accepted,
                Err(err) => {
                    warn!("failed to accept connection, {err}");
                    continue;
                }
            };
            info!("accepted connection from {peer}");
            let handler = Arc::clone(&self.handler);
            thread::spawn(move || {
                if let Err(err) = serve_connection(stream, handler) {
                    warn!("connection from {peer} ended, {err}");
                }
            });
        }
    }
}

fn serve_connection<T, R>(
    stream: TcpStream,
    handler: Arc<dyn RpcHandler<Args = T, Resp = R>>,
) -> Result<(), Error>
where
    T: DeserializeOwned,
    R: Serialize,
{
    let mut transport = Transport::from_stream(stream)?;
    loop {
        // the session id is whatever the client tagged the request with;
        // the response goes back under the same id
        let packet = match transport.recv() {
            Ok(packet) => packet,
            Err(Error::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => return Ok(()),
            Err(err) => return Err(err),
        };
        let args = bincode::deserialize(packet.data()).map_err(Error::Decode)?;
        let resp = handler.handle(args);
        let body = bincode::serialize(&resp).map_err(Error::Encode)?;
        transport.send(&Packet::new(packet.session_id(), body))?;
    }
}
