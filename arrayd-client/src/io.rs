//! HDF5 dataset operations, forwarded to the server.

use tracing::debug;

use crate::{array::ArrayHandle, client::GenericMsg, error::ClientError};

/// Highest array rank the server builds read commands for.
pub const MAX_ARRAY_RANK: usize = 3;

/// Command name for a single-dataset read of the given rank. The mapping is
/// enumerated rather than formatted so an out-of-range rank can never turn
/// into a command string the server has no handler for.
fn read_command(rank: usize) -> Result<&'static str, ClientError> {
    match rank {
        1 => Ok("readSingleHdfArray1D"),
        2 => Ok("readSingleHdfArray2D"),
        3 => Ok("readSingleHdfArray3D"),
        _ => Err(ClientError::UnsupportedRank(rank)),
    }
}

/// Read `dataset` from the HDF5 file at `filename` on the server as an array
/// of the given rank, returning a handle to the resulting server-resident
/// array.
///
/// `filename` and `dataset` are passed through uninterpreted; the server
/// decides whether they name anything. All server and transport failures
/// propagate unmodified.
pub fn read_hdf5<C: GenericMsg>(
    client: &mut C,
    filename: &str,
    dataset: &str,
    rank: usize,
) -> Result<ArrayHandle, ClientError> {
    let cmd = read_command(rank)?;
    let rep_msg = client.generic_msg(cmd, &[("dset", dataset), ("filename", filename)])?;
    debug!("{cmd} replied {rep_msg}");
    ArrayHandle::from_reply(&rep_msg)
}

/// List the datasets in the HDF5 file at `filename` on the server. The reply
/// is returned exactly as the server produced it, uninterpreted.
pub fn lshdf<C: GenericMsg>(client: &mut C, filename: &str) -> Result<String, ClientError> {
    client.generic_msg("lshdf", &[("filename", filename)])
}
