// Property checks over random selections drawn from catalog values plus
// identifiers the catalog does not know.
use p2p_wizard::emitter::min_connections;
use p2p_wizard::{INSTALL_PREFIX, ROOT_PACKAGE, Selection, generate};
use proptest::prelude::*;

fn identifiers(known: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    let mut pool: Vec<&'static str> = known.to_vec();
    pool.extend(["", "unknown", "TCP", "relay"]);
    prop::collection::vec(prop::sample::select(pool).prop_map(str::to_string), 0..6)
}

fn selections() -> impl Strategy<Value = Selection> {
    (
        identifiers(&["tcp", "websockets", "webrtc", "quic"]),
        identifiers(&["yamux", "mplex"]),
        identifiers(&["noise", "tls"]),
        identifiers(&["bootstrap", "mdns"]),
        identifiers(&["identify", "ping", "dht", "pubsub"]),
        0i64..10_000,
    )
        .prop_map(
            |(transports, stream_muxers, connection_encryption, peer_discovery, protocols, max)| {
                Selection {
                    transports,
                    stream_muxers,
                    connection_encryption,
                    peer_discovery,
                    protocols,
                    max_connections: max,
                    connection_manager: "basic".to_string(),
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn min_connections_is_floor_quarter(max in 0i64..i64::MAX) {
        prop_assert_eq!(min_connections(max), max / 4);
        let result = generate(&Selection { max_connections: max, ..Selection::default() });
        let expected = format!("      maxConnections: {max},\n      minConnections: {}\n", max / 4);
        prop_assert!(result.code.contains(&expected));
    }

    #[test]
    fn root_package_leads_exactly_once(selection in selections()) {
        let result = generate(&selection);
        prop_assert_eq!(result.packages[0].as_str(), ROOT_PACKAGE);
        prop_assert_eq!(
            result.packages.iter().filter(|p| p.as_str() == ROOT_PACKAGE).count(),
            1
        );
        let prefix = format!("{INSTALL_PREFIX} ");
        prop_assert!(result.install_command.starts_with(&prefix));
        prop_assert_eq!(
            result.install_command.trim_start_matches(&prefix),
            result.packages.join(" ")
        );
    }

    #[test]
    fn imports_round_trip_with_packages(selection in selections()) {
        let result = generate(&selection);
        let imports: Vec<&str> = result
            .code
            .lines()
            .filter(|line| line.starts_with("import { "))
            .collect();
        prop_assert_eq!(imports.len(), result.packages.len());
        for package in &result.packages {
            let needle = format!(" from '{package}'");
            prop_assert!(imports.iter().any(|line| line.ends_with(&needle)));
        }
        let mut sorted = imports.clone();
        sorted.sort();
        prop_assert_eq!(imports, sorted);
    }

    #[test]
    fn packages_are_unique(selection in selections()) {
        let result = generate(&selection);
        let mut seen = std::collections::BTreeSet::new();
        for package in &result.packages {
            prop_assert!(seen.insert(package.clone()), "duplicate {}", package);
        }
    }
}
