//! Station kind shared by the station and traveler crates.

/// Whether a turnstile can be hopped.
///
/// The only transition is `Normal → Gate`; it is irreversible.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationKind {
    /// Waist-high turnstile: a fraudster can jump it.
    #[default]
    Normal,
    /// Full-height gate: nobody gets through without paying.
    Gate,
}

impl StationKind {
    #[inline]
    pub fn permits_fraud(self) -> bool {
        matches!(self, StationKind::Normal)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            StationKind::Normal => "normal",
            StationKind::Gate   => "gate",
        }
    }
}

impl std::fmt::Display for StationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
