/// Returned for any route missing from [`ROUTE_DISTANCES`].
pub const DEFAULT_DISTANCE: f64 = 1000.0;

/// Known route distances keyed `"ORIGIN-DEST"`.
///
/// Each direction is its own entry; nothing is mirrored at lookup time.
pub const ROUTE_DISTANCES: &[(&str, f64)] = &[
    ("JFK-LAX", 2500.0),
    ("LAX-JFK", 2500.0),
    ("ATL-ORD", 600.0),
    ("ORD-ATL", 600.0),
    ("SFO-DEN", 950.0),
    ("DEN-SFO", 950.0),
    ("JFK-SFO", 2600.0),
    ("SFO-JFK", 2600.0),
    ("LAX-ORD", 1750.0),
    ("ORD-LAX", 1750.0),
    ("ATL-LAX", 1950.0),
    ("LAX-ATL", 1950.0),
];

/// Look up the distance for an ordered, case-sensitive airport pair.
pub fn estimate_distance(origin: &str, dest: &str) -> f64 {
    let key = format!("{origin}-{dest}");
    ROUTE_DISTANCES
        .iter()
        .find(|(route, _)| *route == key)
        .map(|(_, distance)| *distance)
        .unwrap_or(DEFAULT_DISTANCE)
}
