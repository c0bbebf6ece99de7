use rand::Rng;
use std::net::Ipv4Addr;

pub const SOURCE_PORT_MIN: u16 = 1024;

/// Random address in 10.0.0.0/8, drawn from the thread-local generator.
pub fn random_source_ip() -> Ipv4Addr {
    random_source_ip_with(&mut rand::rng())
}

/// Random port in 1024..=65535, drawn from the thread-local generator.
pub fn random_source_port() -> u16 {
    random_source_port_with(&mut rand::rng())
}

pub fn random_source_ip_with<R: Rng + ?Sized>(rng: &mut R) -> Ipv4Addr {
    Ipv4Addr::new(10, rng.random_range(0..=255), rng.random_range(0..=255), rng.random_range(0..=255))
}

pub fn random_source_port_with<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.random_range(SOURCE_PORT_MIN..=u16::MAX)
}
