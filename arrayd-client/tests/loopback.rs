//! End-to-end checks against an in-process backend stub over TCP.

use std::{net::SocketAddr, sync::Arc, thread};

use arrayd_client::{Client, ClientError, DType};
use arrayd_rpc::{Reply, Request, RpcHandler, ServerStub};

struct StubBackend;

impl RpcHandler for StubBackend {
    type Args = Request;
    type Resp = Reply;

    fn handle(&self, req: Request) -> Reply {
        let filename = req.args.get("filename").map(String::as_str);
        match (req.cmd.as_str(), filename) {
            ("lshdf", Some("data.h5")) => Reply::Ok("[\"temps\", \"counts\"]".to_string()),
            ("readSingleHdfArray2D", Some("data.h5")) => {
                match req.args.get("dset").map(String::as_str) {
                    Some("temps") => Reply::Ok("created id_0 float64 100 2 (20,5) 8".to_string()),
                    Some(other) => Reply::Error(format!("dataset {other} not found")),
                    None => Reply::Error("missing argument dset".to_string()),
                }
            }
            (cmd, _) => Reply::Error(format!("unknown command {cmd}")),
        }
    }
}

fn spawn_backend() -> SocketAddr {
    let server = ServerStub::bind("127.0.0.1:0", Arc::new(StubBackend)).unwrap();
    let addr = server.local_addr().unwrap();
    thread::spawn(move || server.serve());
    addr
}

#[test]
fn read_hdf5_returns_a_handle_for_the_backend_array() {
    let addr = spawn_backend();
    let mut client = Client::connect(addr).unwrap();

    let handle = client.read_hdf5("data.h5", "temps", 2).unwrap();
    assert_eq!(handle.name, "id_0");
    assert_eq!(handle.dtype, DType::Float64);
    assert_eq!(handle.size, 100);
    assert_eq!(handle.ndim, 2);
    assert_eq!(handle.shape, vec![20, 5]);
    assert_eq!(handle.itemsize, 8);
}

#[test]
fn lshdf_returns_the_backend_listing_verbatim() {
    let addr = spawn_backend();
    let mut client = Client::connect(addr).unwrap();

    let listing = client.lshdf("data.h5").unwrap();
    assert_eq!(listing, "[\"temps\", \"counts\"]");
}

#[test]
fn backend_failures_surface_as_server_errors() {
    let addr = spawn_backend();
    let mut client = Client::connect(addr).unwrap();

    let got = client.read_hdf5("data.h5", "missing", 2);
    assert!(matches!(got, Err(ClientError::Server(msg)) if msg == "dataset missing not found"));
}

#[test]
fn one_connection_serves_several_calls() {
    let addr = spawn_backend();
    let mut client = Client::connect(addr).unwrap();

    client.lshdf("data.h5").unwrap();
    client.read_hdf5("data.h5", "temps", 2).unwrap();
    client.lshdf("data.h5").unwrap();
}
