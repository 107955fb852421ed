//! Network equipment vendors.

use serde::{Deserialize, Serialize};

/// A switch/router vendor whose telemetry dialect the generators imitate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vendor {
    Cisco,
    Huawei,
    Juniper,
    Arista,
    Dell,
    #[serde(rename = "Broadcom Sonic")]
    BroadcomSonic,
    #[serde(rename = "Community Sonic")]
    CommunitySonic,
}

impl Vendor {
    /// Every vendor, in the order used for weighted selection.
    pub const ALL: [Vendor; 7] = [
        Vendor::Cisco,
        Vendor::Huawei,
        Vendor::Juniper,
        Vendor::Arista,
        Vendor::Dell,
        Vendor::BroadcomSonic,
        Vendor::CommunitySonic,
    ];

    /// Display name as it appears in output columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Cisco => "Cisco",
            Vendor::Huawei => "Huawei",
            Vendor::Juniper => "Juniper",
            Vendor::Arista => "Arista",
            Vendor::Dell => "Dell",
            Vendor::BroadcomSonic => "Broadcom Sonic",
            Vendor::CommunitySonic => "Community Sonic",
        }
    }

    /// Parse a display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// SNMP private enterprise OID prefix.
    pub fn oid_prefix(&self) -> &'static str {
        match self {
            Vendor::Cisco => "1.3.6.1.4.1.9",
            Vendor::Huawei => "1.3.6.1.4.1.2011",
            Vendor::Juniper => "1.3.6.1.4.1.2636",
            Vendor::Arista => "1.3.6.1.4.1.30065",
            Vendor::Dell => "1.3.6.1.4.1.674",
            Vendor::BroadcomSonic => "1.3.6.1.4.1.7244",
            Vendor::CommunitySonic => "1.3.6.1.4.1.50852",
        }
    }

    /// Whether this vendor runs SONiC and speaks OpenConfig.
    pub fn is_sonic(&self) -> bool {
        matches!(self, Vendor::BroadcomSonic | Vendor::CommunitySonic)
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
