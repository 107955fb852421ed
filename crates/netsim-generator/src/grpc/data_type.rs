//! Telemetry subscription data types.

use netsim_core::GrpcConfig;
use rand::distributions::WeightedIndex;

use crate::error::GeneratorError;

/// What a gRPC subscription sample reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    RouteTable,
    Ecmp,
    Fib,
    MacTable,
    Qos,
    Tcam,
    Vxlan,
    Mpls,
    Vni,
    Congestion,
}

impl DataType {
    pub const ALL: [DataType; 10] = [
        DataType::RouteTable,
        DataType::Ecmp,
        DataType::Fib,
        DataType::MacTable,
        DataType::Qos,
        DataType::Tcam,
        DataType::Vxlan,
        DataType::Mpls,
        DataType::Vni,
        DataType::Congestion,
    ];

    /// Built-in relative weights, in [`DataType::ALL`] order.
    pub const DEFAULT_WEIGHTS: [(&'static str, f64); 10] = [
        ("route_table", 10.0),
        ("ecmp", 10.0),
        ("fib", 10.0),
        ("mac_table", 10.0),
        ("qos", 10.0),
        ("tcam", 10.0),
        ("vxlan", 15.0),
        ("mpls", 15.0),
        ("vni", 10.0),
        ("congestion", 10.0),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::RouteTable => "route_table",
            DataType::Ecmp => "ecmp",
            DataType::Fib => "fib",
            DataType::MacTable => "mac_table",
            DataType::Qos => "qos",
            DataType::Tcam => "tcam",
            DataType::Vxlan => "vxlan",
            DataType::Mpls => "mpls",
            DataType::Vni => "vni",
            DataType::Congestion => "congestion",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("Unknown data type: {s}"))
    }
}

/// Weighted distribution over [`DataType::ALL`] after applying config overrides.
pub fn data_type_distribution(config: &GrpcConfig) -> Result<WeightedIndex<f64>, GeneratorError> {
    let weights = config.resolve_weights(&DataType::DEFAULT_WEIGHTS)?;
    Ok(WeightedIndex::new(weights)?)
}
