//! The fixed set of Indian states the chain operates in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 28 Indian states covered by the dashboard.
///
/// Variant order is the canonical order used for store generation and for
/// every per-state rollup.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndianState {
    #[serde(rename = "Andhra Pradesh")]
    AndhraPradesh,
    #[serde(rename = "Arunachal Pradesh")]
    ArunachalPradesh,
    #[serde(rename = "Assam")]
    Assam,
    #[serde(rename = "Bihar")]
    Bihar,
    #[serde(rename = "Chhattisgarh")]
    Chhattisgarh,
    #[serde(rename = "Goa")]
    Goa,
    #[serde(rename = "Gujarat")]
    Gujarat,
    #[serde(rename = "Haryana")]
    Haryana,
    #[serde(rename = "Himachal Pradesh")]
    HimachalPradesh,
    #[serde(rename = "Jharkhand")]
    Jharkhand,
    #[serde(rename = "Karnataka")]
    Karnataka,
    #[serde(rename = "Kerala")]
    Kerala,
    #[serde(rename = "Madhya Pradesh")]
    MadhyaPradesh,
    #[serde(rename = "Maharashtra")]
    Maharashtra,
    #[serde(rename = "Manipur")]
    Manipur,
    #[serde(rename = "Meghalaya")]
    Meghalaya,
    #[serde(rename = "Mizoram")]
    Mizoram,
    #[serde(rename = "Nagaland")]
    Nagaland,
    #[serde(rename = "Odisha")]
    Odisha,
    #[serde(rename = "Punjab")]
    Punjab,
    #[serde(rename = "Rajasthan")]
    Rajasthan,
    #[serde(rename = "Sikkim")]
    Sikkim,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    #[serde(rename = "Telangana")]
    Telangana,
    #[serde(rename = "Tripura")]
    Tripura,
    #[serde(rename = "Uttar Pradesh")]
    UttarPradesh,
    #[serde(rename = "Uttarakhand")]
    Uttarakhand,
    #[serde(rename = "West Bengal")]
    WestBengal,
}

impl IndianState {
    /// Number of states in the enumeration.
    pub const COUNT: usize = 28;

    /// All states in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::AndhraPradesh,
        Self::ArunachalPradesh,
        Self::Assam,
        Self::Bihar,
        Self::Chhattisgarh,
        Self::Goa,
        Self::Gujarat,
        Self::Haryana,
        Self::HimachalPradesh,
        Self::Jharkhand,
        Self::Karnataka,
        Self::Kerala,
        Self::MadhyaPradesh,
        Self::Maharashtra,
        Self::Manipur,
        Self::Meghalaya,
        Self::Mizoram,
        Self::Nagaland,
        Self::Odisha,
        Self::Punjab,
        Self::Rajasthan,
        Self::Sikkim,
        Self::TamilNadu,
        Self::Telangana,
        Self::Tripura,
        Self::UttarPradesh,
        Self::Uttarakhand,
        Self::WestBengal,
    ];

    /// Display name, e.g. `"Tamil Nadu"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::ArunachalPradesh => "Arunachal Pradesh",
            Self::Assam => "Assam",
            Self::Bihar => "Bihar",
            Self::Chhattisgarh => "Chhattisgarh",
            Self::Goa => "Goa",
            Self::Gujarat => "Gujarat",
            Self::Haryana => "Haryana",
            Self::HimachalPradesh => "Himachal Pradesh",
            Self::Jharkhand => "Jharkhand",
            Self::Karnataka => "Karnataka",
            Self::Kerala => "Kerala",
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::Maharashtra => "Maharashtra",
            Self::Manipur => "Manipur",
            Self::Meghalaya => "Meghalaya",
            Self::Mizoram => "Mizoram",
            Self::Nagaland => "Nagaland",
            Self::Odisha => "Odisha",
            Self::Punjab => "Punjab",
            Self::Rajasthan => "Rajasthan",
            Self::Sikkim => "Sikkim",
            Self::TamilNadu => "Tamil Nadu",
            Self::Telangana => "Telangana",
            Self::Tripura => "Tripura",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Uttarakhand => "Uttarakhand",
            Self::WestBengal => "West Bengal",
        }
    }

    /// Position of this state in [`IndianState::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for IndianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name one of the 28 states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownState(pub String);

impl fmt::Display for UnknownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown state: {}", self.0)
    }
}

impl std::error::Error for UnknownState {}

impl FromStr for IndianState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}
