use crate::source::{random_source_ip, random_source_port};

use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::packet::ipv4::{self, MutableIpv4Packet};
use pnet::packet::tcp::{self, MutableTcpPacket, TcpFlags};
use std::net::Ipv4Addr;

const IPV4_HEADER_LEN: usize = 20;
const TCP_HEADER_LEN: usize = 20;
pub const SYN_PACKET_LEN: usize = IPV4_HEADER_LEN + TCP_HEADER_LEN;

const TTL: u8 = 64;
const IP_IDENTIFICATION: u16 = 1;
const TCP_WINDOW: u16 = 8192;

/// A single TCP SYN datagram. Built once, sent once, dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynPacket {
    pub source: Ipv4Addr,
    pub source_port: u16,
    pub destination: Ipv4Addr,
    pub destination_port: u16,
}

impl SynPacket {

    pub fn random(destination: Ipv4Addr, destination_port: u16) -> SynPacket {
        SynPacket {
            source: random_source_ip(),
            source_port: random_source_port(),
            destination,
            destination_port,
        }
    }

    pub fn flags(&self) -> u8 {
        TcpFlags::SYN
    }

    /// Serializes the IPv4 header followed by the TCP header, checksums filled in.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; SYN_PACKET_LEN];
        let (ip_buf, tcp_buf) = buf.split_at_mut(IPV4_HEADER_LEN);

        // both slices have exactly the minimum header size, so the builders always succeed
        if let Some(mut tcp_packet) = MutableTcpPacket::new(tcp_buf) {
            tcp_packet.set_source(self.source_port);
            tcp_packet.set_destination(self.destination_port);
            tcp_packet.set_sequence(0);
            tcp_packet.set_acknowledgement(0);
            tcp_packet.set_data_offset((TCP_HEADER_LEN / 4) as u8);
            tcp_packet.set_flags(self.flags());
            tcp_packet.set_window(TCP_WINDOW);
            tcp_packet.set_urgent_ptr(0);
            let tcp_checksum = tcp::ipv4_checksum(&tcp_packet.to_immutable(), &self.source, &self.destination);
            tcp_packet.set_checksum(tcp_checksum);
        }

        if let Some(mut ip_packet) = MutableIpv4Packet::new(ip_buf) {
            ip_packet.set_version(4);
            ip_packet.set_header_length((IPV4_HEADER_LEN / 4) as u8);
            ip_packet.set_total_length(SYN_PACKET_LEN as u16);
            ip_packet.set_identification(IP_IDENTIFICATION);
            ip_packet.set_ttl(TTL);
            ip_packet.set_next_level_protocol(IpNextHeaderProtocols::Tcp);
            ip_packet.set_source(self.source);
            ip_packet.set_destination(self.destination);
            let ip_checksum = ipv4::checksum(&ip_packet.to_immutable());
            ip_packet.set_checksum(ip_checksum);
        }

        buf
    }
}
