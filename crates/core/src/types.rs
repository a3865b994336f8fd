//! Country records and the upstream wire schema they are decoded from.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Domain record
// ---------------------------------------------------------------------------

/// One country as shown by the browser. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Display and search key.
    pub common_name: String,
    /// Externally hosted flag image.
    pub flag_image_url: String,
    /// Unique short code, used as the stable render key.
    /// Uniqueness is assumed of the upstream source and not checked here.
    pub identifier: String,
}

impl CountryRecord {
    pub fn new(
        common_name: impl Into<String>,
        flag_image_url: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            common_name: common_name.into(),
            flag_image_url: flag_image_url.into(),
            identifier: identifier.into(),
        }
    }

    /// Alt text for the flag image.
    pub fn flag_alt(&self) -> String {
        format!("{} flag", self.common_name)
    }
}

// ---------------------------------------------------------------------------
// Wire schema (restcountries v3.1)
// ---------------------------------------------------------------------------

/// A single element of the upstream `/all` response. Only the fields the
/// browser reads are declared; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct WireCountry {
    pub name: WireName,
    pub flags: WireFlags,
    pub cca3: String,
}

#[derive(Debug, Deserialize)]
pub struct WireName {
    pub common: String,
}

#[derive(Debug, Deserialize)]
pub struct WireFlags {
    pub png: String,
}

impl From<WireCountry> for CountryRecord {
    fn from(wire: WireCountry) -> Self {
        CountryRecord {
            common_name: wire.name.common,
            flag_image_url: wire.flags.png,
            identifier: wire.cca3,
        }
    }
}
