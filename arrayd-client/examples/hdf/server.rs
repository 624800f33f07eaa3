use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use arrayd_rpc::{Reply, Request, RpcHandler, ServerStub};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
struct Opts {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:10001")]
    addr: String,
}

/// Toy backend with a canned file table, enough to serve `lshdf` and the
/// single-dataset read commands.
struct HdfHandler {
    files: HashMap<&'static str, Vec<(&'static str, &'static str, Vec<u64>)>>,
    next_id: Mutex<u64>,
}

impl HdfHandler {
    fn new() -> Self {
        let mut files = HashMap::new();
        files.insert(
            "data.h5",
            vec![
                ("temps", "float64", vec![20, 5]),
                ("counts", "int64", vec![100]),
            ],
        );
        Self {
            files,
            next_id: Mutex::new(0),
        }
    }

    fn lshdf(&self, filename: &str) -> Reply {
        match self.files.get(filename) {
            Some(datasets) => {
                let names: Vec<&str> = datasets.iter().map(|(name, _, _)| *name).collect();
                Reply::Ok(format!("{names:?}"))
            }
            None => Reply::Error(format!("file {filename} not found")),
        }
    }

    fn read(&self, filename: &str, dset: &str, rank: usize) -> Reply {
        let Some(datasets) = self.files.get(filename) else {
            return Reply::Error(format!("file {filename} not found"));
        };
        let Some((_, dtype, shape)) = datasets.iter().find(|(name, _, _)| *name == dset) else {
            return Reply::Error(format!("dataset {dset} not found in {filename}"));
        };
        if shape.len() != rank {
            return Reply::Error(format!("dataset {dset} has rank {}", shape.len()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        let size: u64 = shape.iter().product();
        let dims = shape
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Reply::Ok(format!("created id_{id} {dtype} {size} {rank} ({dims}) 8"))
    }
}

impl RpcHandler for HdfHandler {
    type Args = Request;
    type Resp = Reply;

    fn handle(&self, req: Request) -> Reply {
        let missing = |key: &str| Reply::Error(format!("missing argument {key}"));
        match req.cmd.as_str() {
            "lshdf" => match req.args.get("filename") {
                Some(filename) => self.lshdf(filename),
                None => missing("filename"),
            },
            "readSingleHdfArray1D" | "readSingleHdfArray2D" | "readSingleHdfArray3D" => {
                let rank = match req.cmd.as_bytes()[req.cmd.len() - 2] {
                    b'1' => 1,
                    b'2' => 2,
                    _ => 3,
                };
                match (req.args.get("filename"), req.args.get("dset")) {
                    (Some(filename), Some(dset)) => self.read(filename, dset, rank),
                    (None, _) => missing("filename"),
                    (_, None) => missing("dset"),
                }
            }
            other => Reply::Error(format!("unknown command {other}")),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::fmt()
        .without_time()
        .with_max_level(Level::DEBUG)
        .init();
    let opts = Opts::parse();
    let server = ServerStub::bind(opts.addr.as_str(), Arc::new(HdfHandler::new()))?;
    server.serve()?;
    Ok(())
}
