//! Defines the identifier type for ASOS observation stations. The portal
//! addresses stations by the numeric identifiers listed in its surface
//! observation documentation (e.g. 108 for Seoul).

use std::fmt;

/// Numeric identifier of a single ASOS observation point.
///
/// The portal's daily service takes this number as its `stnIds` query
/// parameter. Identifiers for every station are listed in the portal's
/// surface observation documentation; a few frequently used ones are
/// provided as constants.
///
/// # Examples
///
/// ```
/// use kma_asos::StationId;
///
/// assert_eq!(StationId::SEOUL, StationId(108));
/// assert_eq!(StationId(159).to_string(), "159");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(pub u32);

impl StationId {
    /// Seoul.
    pub const SEOUL: StationId = StationId(108);
    /// Incheon.
    pub const INCHEON: StationId = StationId(112);
    /// Busan.
    pub const BUSAN: StationId = StationId(159);
    /// Jeju.
    pub const JEJU: StationId = StationId(184);
}

impl From<u32> for StationId {
    fn from(id: u32) -> Self {
        StationId(id)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
