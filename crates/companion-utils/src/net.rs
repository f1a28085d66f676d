use listenfd::ListenFd;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;

/// Binds the server socket.
///
/// If neither host nor port is given, a socket passed in by a supervisor (systemfd, systemd) is preferred.
pub async fn create_listener(host: Option<IpAddr>, port: Option<u16>) -> io::Result<TcpListener> {
    if host.is_none() && port.is_none() {
        let mut listenfd = ListenFd::from_env();
        if let Some(listener) = listenfd.take_tcp_listener(0)? {
            listener.set_nonblocking(true)?;
            tracing::debug!("using socket from listenfd");
            return TcpListener::from_std(listener);
        }
    }

    let address = SocketAddr::from((host.unwrap_or(DEFAULT_HOST), port.unwrap_or(DEFAULT_PORT)));
    tracing::debug!(%address, "binding listener");
    TcpListener::bind(address).await
}
