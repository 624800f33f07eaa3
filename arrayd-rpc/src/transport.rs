use std::{
    io::{Read, Write},
    net::{TcpStream, ToSocketAddrs},
};

use tracing::{debug, error};

use crate::{error::Error, messages::Packet};

/// Upper bound on a single frame body. A peer announcing anything larger is
/// broken or hostile, so the frame is rejected before any allocation.
pub const MAX_FRAME_BYTES: usize = 4 * 1024 * 1024;

/// Framed stream transport: each packet travels as a u32-le length prefix
/// followed by its bincode-encoded body.
pub struct Transport {
    stream: TcpStream,
}

impl Transport {
    /// Connect to the server at `addr`.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, Error> {
        let stream = TcpStream::connect(addr).map_err(Error::Connect)?;
        stream.set_nodelay(true).map_err(Error::Connect)?;
        Ok(Self { stream })
    }

    /// Wrap an accepted connection on the server side.
    pub fn from_stream(stream: TcpStream) -> Result<Self, Error> {
        stream.set_nodelay(true)?;
        Ok(Self { stream })
    }

    pub(crate) fn send(&mut self, packet: &Packet) -> Result<(), Error> {
        let body = bincode::serialize(packet).map_err(|err| {
            error!("failed to encode packet, {err}");
            Error::Encode(err)
        })?;
        if body.len() > MAX_FRAME_BYTES {
            return Err(Error::FrameTooLarge(body.len()));
        }

        self.stream.write_all(&(body.len() as u32).to_le_bytes())?;
        self.stream.write_all(&body)?;
        self.stream.flush()?;
        debug!("sent frame of {} bytes", body.len());
        Ok(())
    }

    pub(crate) fn recv(&mut self) -> Result<Packet, Error> {
        let mut prefix = [0u8; 4];
        self.stream.read_exact(&mut prefix)?;
        let len = u32::from_le_bytes(prefix) as usize;
        if len > MAX_FRAME_BYTES {
            return Err(Error::FrameTooLarge(len));
        }

        let mut body = vec![0u8; len];
        self.stream.read_exact(&mut body)?;
        debug!("received frame of {len} bytes");
        bincode::deserialize(&body).map_err(|err| {
            error!("failed to decode packet, {err}");
            Error::Decode(err)
        })
    }
}
