use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to connect to the server, {0}")]
    Connect(#[source] std::io::Error),
    #[error("failed to encode message")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode message")]
    Decode(#[source] bincode::Error),
    #[error("io error on transport, {0}")]
    Io(#[from] std::io::Error),
    #[error("frame of {0} bytes exceeds the frame size limit")]
    FrameTooLarge(usize),
    #[error("packet for session {got} arrived on session {expected}")]
    SessionMismatch { expected: u64, got: u64 },
}
