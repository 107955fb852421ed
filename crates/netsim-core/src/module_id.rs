//! Composite optical module identifiers.
//!
//! A module id is the loosely-enforced key shared by the DDM, SNMP, syslog and
//! prediction datasets:
//!
//! ```text
//! <optic vendor>-<datacenter>-<pod>-<rack>-<device>-<interface>-<speed>
//! Innolight-DC1-Pod02-Rack04-SW07-Eth3/5-100G
//! ```
//!
//! Uniqueness is not enforced; two modules drawn from the same vocabularies
//! can collide.

use crate::random::pick;
use crate::vocab::{DATACENTERS, OPTICAL_VENDORS, PODS, RACKS, SPEEDS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between module id components.
pub const SEPARATOR: char = '-';

/// Replacement for separators found inside a component.
const SEPARATOR_ESCAPE: char = '_';

/// Number of components in a well-formed module id.
pub const COMPONENT_COUNT: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModuleIdError {
    #[error("module id '{id}' has {found} components, expected {COMPONENT_COUNT}")]
    ComponentCount { id: String, found: usize },

    #[error("module id '{0}' has an empty component")]
    EmptyComponent(String),
}

/// A simulated optical module, identified by where it is plugged in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId {
    pub vendor: String,
    pub datacenter: String,
    pub pod: String,
    pub rack: String,
    pub device: String,
    pub interface: String,
    pub speed: String,
}

impl ModuleId {
    /// Build a module id. Separators inside any component are replaced so the
    /// rendered id always splits into exactly [`COMPONENT_COUNT`] parts.
    pub fn new(
        vendor: &str,
        datacenter: &str,
        pod: &str,
        rack: &str,
        device: &str,
        interface: &str,
        speed: &str,
    ) -> Self {
        Self {
            vendor: escape(vendor),
            datacenter: escape(datacenter),
            pod: escape(pod),
            rack: escape(rack),
            device: escape(device),
            interface: escape(interface),
            speed: escape(speed),
        }
    }

    /// A module on `device`/`interface` with vendor, location and speed drawn
    /// from the shared vocabularies.
    pub fn random_for_port<R: Rng + ?Sized>(rng: &mut R, device: &str, interface: &str) -> Self {
        let speed = *pick(rng, SPEEDS);
        Self::random_for_port_with_speed(rng, device, interface, speed)
    }

    /// Same as [`ModuleId::random_for_port`] with a fixed speed.
    pub fn random_for_port_with_speed<R: Rng + ?Sized>(
        rng: &mut R,
        device: &str,
        interface: &str,
        speed: &str,
    ) -> Self {
        let vendor = *pick(rng, OPTICAL_VENDORS);
        let datacenter = *pick(rng, DATACENTERS);
        let pod = *pick(rng, PODS);
        let rack = *pick(rng, RACKS);
        Self::new(vendor, datacenter, pod, rack, device, interface, speed)
    }

    /// Components in canonical order.
    pub fn components(&self) -> [&str; COMPONENT_COUNT] {
        [
            &self.vendor,
            &self.datacenter,
            &self.pod,
            &self.rack,
            &self.device,
            &self.interface,
            &self.speed,
        ]
    }
}

fn escape(component: &str) -> String {
    component.replace(SEPARATOR, &SEPARATOR_ESCAPE.to_string())
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [vendor, datacenter, pod, rack, device, interface, speed] = self.components();
        write!(
            f,
            "{vendor}{SEPARATOR}{datacenter}{SEPARATOR}{pod}{SEPARATOR}{rack}{SEPARATOR}{device}{SEPARATOR}{interface}{SEPARATOR}{speed}"
        )
    }
}

impl std::str::FromStr for ModuleId {
    type Err = ModuleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(SEPARATOR).collect();
        if parts.len() != COMPONENT_COUNT {
            return Err(ModuleIdError::ComponentCount {
                id: s.to_string(),
                found: parts.len(),
            });
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(ModuleIdError::EmptyComponent(s.to_string()));
        }
        Ok(Self {
            vendor: parts[0].to_string(),
            datacenter: parts[1].to_string(),
            pod: parts[2].to_string(),
            rack: parts[3].to_string(),
            device: parts[4].to_string(),
            interface: parts[5].to_string(),
            speed: parts[6].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_display_and_parse() {
        let id = ModuleId::new("Innolight", "DC1", "Pod02", "Rack04", "SW07", "Eth3/5", "100G");
        let rendered = id.to_string();
        assert_eq!(rendered, "Innolight-DC1-Pod02-Rack04-SW07-Eth3/5-100G");
        assert_eq!(rendered.parse::<ModuleId>().unwrap(), id);
    }

    #[test]
    fn test_hyphenated_device_keeps_component_count() {
        let id = ModuleId::new("Finisar", "DC2", "Pod01", "Rack01", "leaf-12-3", "Ethernet1/4", "25G");
        let rendered = id.to_string();
        assert_eq!(rendered.split(SEPARATOR).count(), COMPONENT_COUNT);
        assert_eq!(id.device, "leaf_12_3");
    }

    #[test]
    fn test_random_module_ids_split_into_seven_components() {
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..200 {
            let device = format!("spine-{i}-1");
            let id = ModuleId::random_for_port(&mut rng, &device, "Eth1/1");
            let rendered = id.to_string();
            let parts: Vec<&str> = rendered.split(SEPARATOR).collect();
            assert_eq!(parts.len(), COMPONENT_COUNT);
            assert!(OPTICAL_VENDORS.contains(&parts[0]));
            assert!(DATACENTERS.contains(&parts[1]));
            assert!(PODS.contains(&parts[2]));
            assert!(RACKS.contains(&parts[3]));
            assert!(SPEEDS.contains(&parts[6]));
        }
    }

    #[test]
    fn test_parse_rejects_wrong_component_count() {
        let err = "Innolight-DC1-SW01-Eth1-100G".parse::<ModuleId>().unwrap_err();
        assert!(matches!(err, ModuleIdError::ComponentCount { found: 5, .. }));

        let err = "Innolight--Pod01-Rack01-SW01-Eth1/1-100G"
            .parse::<ModuleId>()
            .unwrap_err();
        assert!(matches!(err, ModuleIdError::EmptyComponent(_)));
    }
}
