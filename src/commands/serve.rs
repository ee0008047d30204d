use std::net::SocketAddr;
use std::time::Duration;

use textcodec::error::Result;
use textcodec::http::{serve, ServerConfig};

pub fn run_serve(bind: SocketAddr, read_timeout: Duration) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(serve(ServerConfig { bind, read_timeout }))
}
