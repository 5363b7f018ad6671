/// Callsign words a trainee is expected to say on their own, without a flight
/// number attached (`november` for general aviation registrations, airline
/// telephony designators otherwise).
pub const KNOWN_CALLSIGN_PREFIXES: &[&str] = &[
    "november",
    "delta",
    "american",
    "united",
    "southwest",
    "spirit",
    "jetblue",
];

/// Case-insensitive check against [`KNOWN_CALLSIGN_PREFIXES`].
pub fn is_known_callsign_prefix(word: &str) -> bool {
    let word = word.to_lowercase();
    KNOWN_CALLSIGN_PREFIXES.contains(&word.as_str())
}
