pub mod client_stub;
pub mod error;
pub mod messages;
pub mod server_stub;
pub mod session;
pub mod transport;

pub use client_stub::ClientStub;
pub use error::Error;
pub use messages::{Reply, Request};
pub use server_stub::{RpcHandler, ServerStub};
pub use session::Session;
pub use transport::Transport;
