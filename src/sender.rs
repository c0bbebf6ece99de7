use crate::packet::SynPacket;

use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::packet::ipv4::Ipv4Packet;
use pnet::transport::TransportChannelType::Layer3;
use pnet::transport::{transport_channel, TransportSender};
use std::io;
use std::net::IpAddr;
use tracing::debug;

const CHANNEL_BUFFER_SIZE: usize = 1024;

/// Anything that can put a SYN packet on the wire.
pub trait Transmit {
    fn transmit(&mut self, packet: &SynPacket) -> io::Result<()>;
}

/// Sends packets through a raw IPv4 socket that carries our own IP header,
/// so the randomized source address is what the target sees.
pub struct RawSender {
    transport_sender: TransportSender,
}

impl RawSender {

    /// Needs CAP_NET_RAW (or root).
    pub fn open() -> io::Result<RawSender> {
        let (transport_sender, _) = transport_channel(CHANNEL_BUFFER_SIZE, Layer3(IpNextHeaderProtocols::Tcp))?;
        Ok(RawSender { transport_sender })
    }
}

impl Transmit for RawSender {

    fn transmit(&mut self, packet: &SynPacket) -> io::Result<()> {
        let buf = packet.to_bytes();
        let ip_packet = Ipv4Packet::new(&buf)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "packet buffer too short"))?;
        let written = self.transport_sender.send_to(ip_packet, IpAddr::V4(packet.destination))?;
        debug!(
            "sent {} bytes {}:{} -> {}:{}",
            written, packet.source, packet.source_port, packet.destination, packet.destination_port
        );
        Ok(())
    }
}
