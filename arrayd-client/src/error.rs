use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Rpc(#[from] arrayd_rpc::Error),
    #[error("server error, {0}")]
    Server(String),
    #[error("unsupported array rank {0}")]
    UnsupportedRank(usize),
    #[error("malformed array descriptor reply, {0}")]
    MalformedReply(String),
}
