//! Client for an arrayd server: a backend that holds large arrays and
//! executes commands against them. This crate forwards dataset operations
//! over the [`arrayd_rpc`] messaging layer and wraps replies into
//! client-side array handles.

pub mod array;
pub mod client;
pub mod error;
pub mod io;

pub use array::{ArrayHandle, DType};
pub use client::{Client, GenericMsg};
pub use error::ClientError;
pub use io::{lshdf, read_hdf5, MAX_ARRAY_RANK};
