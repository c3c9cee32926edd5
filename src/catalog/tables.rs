//! The five built-in capability tables.
//!
//! Row order is significant: listings iterate tables top to bottom and lookups
//! return the first row whose `value` matches.

use crate::catalog::model::CapabilityOption;

pub static TRANSPORT_OPTIONS: &[CapabilityOption] = &[
    CapabilityOption::new(
        "tcp",
        "tcp",
        "tcp()",
        "TCP",
        "Traditional TCP transport for reliable connections",
    ),
    CapabilityOption::new(
        "websockets",
        "webSockets",
        "webSockets()",
        "WebSockets",
        "WebSocket transport for browser compatibility",
    ),
    CapabilityOption::new(
        "webrtc",
        "webRTC",
        "webRTC()",
        "WebRTC",
        "Direct peer-to-peer communication",
    ),
    CapabilityOption::new(
        "quic",
        "quic",
        "quic()",
        "QUIC",
        "Fast, secure transport protocol",
    ),
];

pub static MULTIPLEXER_OPTIONS: &[CapabilityOption] = &[
    CapabilityOption::new(
        "yamux",
        "yamux",
        "yamux()",
        "Yamux",
        "Efficient stream multiplexer (recommended)",
    ),
    CapabilityOption::new(
        "mplex",
        "mplex",
        "mplex()",
        "Mplex",
        "Legacy multiplexer for compatibility",
    ),
];

pub static ENCRYPTION_OPTIONS: &[CapabilityOption] = &[
    CapabilityOption::new(
        "noise",
        "noise",
        "noise()",
        "Noise Protocol",
        "Modern cryptographic protocol (recommended)",
    ),
    CapabilityOption::new("tls", "tls", "tls()", "TLS", "Standard TLS encryption"),
];

pub static DISCOVERY_OPTIONS: &[CapabilityOption] = &[
    CapabilityOption::new(
        "bootstrap",
        "bootstrap",
        "bootstrap({ list: [] })",
        "Bootstrap",
        "Connect to known bootstrap nodes",
    ),
    CapabilityOption::new(
        "mdns",
        "mdnsDiscovery",
        "mdnsDiscovery()",
        "mDNS Discovery",
        "Discover peers on local network",
    ),
];

pub static PROTOCOL_OPTIONS: &[CapabilityOption] = &[
    CapabilityOption::new(
        "identify",
        "identify",
        "identify()",
        "Identify Protocol",
        "Protocol identification",
    )
    .with_package("@libp2p/identify"),
    CapabilityOption::new("ping", "ping", "ping()", "Ping Protocol", "Ping/pong protocol")
        .with_package("@libp2p/ping"),
    CapabilityOption::new(
        "dht",
        "kadDHT",
        "kadDHT()",
        "Kademlia DHT",
        "Distributed hash table",
    )
    .with_package("@libp2p/kad-dht"),
    CapabilityOption::new(
        "pubsub",
        "gossipsub",
        "gossipsub()",
        "GossipSub PubSub",
        "Publish-subscribe messaging",
    )
    .with_package("@libp2p/gossipsub"),
];
