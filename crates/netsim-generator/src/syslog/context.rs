//! Per-run syslog context: devices, their optics and their L3 configuration.

use crate::error::GeneratorError;
use crate::topology::{setup_devices, DeviceIdentity};
use netsim_core::random::pick;
use netsim_core::vocab::SERIAL_ALPHABET;
use netsim_core::{EnvironmentPreset, ModuleId};
use rand::Rng;
use tracing::info;

/// Upper bound on simulated syslog sources.
pub const MAX_SYSLOG_DEVICES: u64 = 10_000;

/// Largest MPLS label value.
const MPLS_LABEL_MAX: i64 = 1_048_575;

/// A transceiver that optical events can be raised against.
#[derive(Debug, Clone, PartialEq)]
pub struct SyslogOptic {
    pub port: String,
    pub module_id: ModuleId,
    pub serial: String,
}

impl SyslogOptic {
    pub fn vendor(&self) -> &str {
        &self.module_id.vendor
    }

    pub fn speed(&self) -> &str {
        &self.module_id.speed
    }
}

/// Routing and overlay protocols configured on a device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L3Config {
    pub bgp_as: Option<i64>,
    pub ospf_area: Option<i64>,
    /// Empty when VXLAN is not configured.
    pub vxlan_vnis: Vec<i64>,
    /// Empty when MPLS is not configured.
    pub mpls_labels: Vec<i64>,
}

impl L3Config {
    /// Protocols the environment prefers are configured 70% of the time,
    /// others 30%.
    fn generate<R: Rng + ?Sized>(rng: &mut R, preset: &EnvironmentPreset) -> Self {
        let mut enabled = |protocol: &str| {
            let probability = if preset.prefers_protocol(protocol) { 0.7 } else { 0.3 };
            rng.gen_bool(probability)
        };
        let bgp = enabled("BGP");
        let ospf = enabled("OSPF");
        let vxlan = enabled("VXLAN");
        let mpls = enabled("MPLS");

        let bgp_as = bgp.then(|| rng.gen_range(1000..=65_000));
        let ospf_area = ospf.then(|| rng.gen_range(0..=100));
        let vxlan_vnis = if vxlan {
            let n = rng.gen_range(1..=10);
            (0..n).map(|_| rng.gen_range(1000..=9000)).collect()
        } else {
            Vec::new()
        };
        let mpls_labels = if mpls {
            let n = rng.gen_range(1..=5);
            (0..n).map(|_| rng.gen_range(16..=MPLS_LABEL_MAX)).collect()
        } else {
            Vec::new()
        };

        Self {
            bgp_as,
            ospf_area,
            vxlan_vnis,
            mpls_labels,
        }
    }

    pub fn has_vxlan(&self) -> bool {
        !self.vxlan_vnis.is_empty()
    }

    pub fn has_mpls(&self) -> bool {
        !self.mpls_labels.is_empty()
    }
}

/// A syslog source and everything its messages can refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct SyslogDevice {
    pub identity: DeviceIdentity,
    pub optics: Vec<SyslogOptic>,
    pub l3: L3Config,
}

impl SyslogDevice {
    pub fn name(&self) -> &str {
        &self.identity.name
    }
}

/// Everything the syslog generator draws from, built once per run.
#[derive(Debug, Clone)]
pub struct SyslogContext {
    pub devices: Vec<SyslogDevice>,
}

impl SyslogContext {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        preset: &EnvironmentPreset,
        device_count: u64,
    ) -> Result<Self, GeneratorError> {
        let identities = setup_devices(rng, preset, device_count.min(MAX_SYSLOG_DEVICES))?;
        let devices: Vec<SyslogDevice> = identities
            .into_iter()
            .map(|identity| {
                let optics = generate_optics(rng, &identity, preset);
                let l3 = L3Config::generate(rng, preset);
                SyslogDevice {
                    identity,
                    optics,
                    l3,
                }
            })
            .collect();

        info!(
            "Generated {} syslog sources with {} optics",
            devices.len(),
            devices.iter().map(|d| d.optics.len()).sum::<usize>()
        );
        Ok(Self { devices })
    }
}

fn generate_optics<R: Rng + ?Sized>(
    rng: &mut R,
    identity: &DeviceIdentity,
    preset: &EnvironmentPreset,
) -> Vec<SyslogOptic> {
    let (min_ports, max_ports) = preset.port_density;
    let count = rng.gen_range(min_ports..=max_ports.max(min_ports));
    (0..count)
        .map(|_| {
            let port = format!("Ethernet{}/{}", rng.gen_range(1..=8), rng.gen_range(1..=48));
            let module_id = ModuleId::random_for_port(rng, &identity.name, &port);
            let serial = (0..8)
                .map(|_| *pick(rng, SERIAL_ALPHABET) as char)
                .collect();
            SyslogOptic {
                port,
                module_id,
                serial,
            }
        })
        .collect()
}
