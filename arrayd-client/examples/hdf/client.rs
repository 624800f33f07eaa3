use anyhow::Result;
use arrayd_client::Client;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Opts {
    /// Server address
    #[arg(long, default_value = "127.0.0.1:10001")]
    addr: String,
    /// HDF5 file to inspect on the server
    #[arg(long, default_value = "data.h5")]
    filename: String,
    /// Dataset to read
    #[arg(long, default_value = "counts")]
    dataset: String,
    /// Rank of the dataset
    #[arg(long, default_value_t = 1)]
    rank: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .with_max_level(Level::DEBUG)
        .init();
    let opts = Opts::parse();

    let mut client = Client::connect(opts.addr.as_str())?;
    info!("datasets in {}: {}", opts.filename, client.lshdf(&opts.filename)?);

    let handle = client.read_hdf5(&opts.filename, &opts.dataset, opts.rank)?;
    info!(
        "read {} as {} ({} x {} elements, shape {:?})",
        opts.dataset, handle.name, handle.dtype, handle.size, handle.shape
    );
    Ok(())
}
