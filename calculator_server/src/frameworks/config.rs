use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

// Runtime/server settings read from the environment.

pub const DEFAULT_HTTP_PORT: u16 = 8000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

pub fn http_host() -> IpAddr {
    parse_or(env::var("CALCULATOR_HOST").ok(), IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn http_port() -> u16 {
    parse_or(env::var("CALCULATOR_PORT").ok(), DEFAULT_HTTP_PORT)
}

pub fn bind_address() -> SocketAddr {
    SocketAddr::new(http_host(), http_port())
}

pub fn max_body_bytes() -> usize {
    parse_or(
        env::var("CALCULATOR_MAX_BODY_BYTES").ok(),
        DEFAULT_MAX_BODY_BYTES,
    )
}

// Unset or unparseable values fall back to the default.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
