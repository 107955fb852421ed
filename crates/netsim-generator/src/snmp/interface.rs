//! IF-MIB interface entries and the optical modules plugged into them.

use super::device::SnmpDevice;
use netsim_core::random::{pick, uniform};
use netsim_core::vocab::{
    speed_to_bps, ADMIN_STATES, INTERFACE_TYPES, OPER_STATES, OPTIC_TYPES, PEER_ROLES,
    SERIAL_ALPHABET, SPEEDS,
};
use netsim_core::{EnvironmentPreset, ModuleId};
use rand::Rng;

/// Share of ports that carry a pluggable optic. 1G ports never do.
const OPTIC_PROBABILITY: f64 = 0.7;

/// Speed whose ports use fixed copper rather than pluggable optics.
const COPPER_SPEED: &str = "1G";

/// Length of generated optic serial numbers.
const SERIAL_LEN: usize = 8;

/// A transceiver and its inventory data.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticalModule {
    pub module_id: ModuleId,
    pub serial: String,
    /// `<vendor>-<speed>-<form factor>`, e.g. `Finisar-100G-LR4`.
    pub part: String,
}

/// Digital diagnostic readings of a port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticalReadings {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Volts.
    pub voltage: f64,
    /// Milliamps.
    pub bias_current: f64,
    /// dBm.
    pub tx_power: f64,
    /// dBm.
    pub rx_power: f64,
}

impl OpticalReadings {
    /// Healthy readings of a working transceiver.
    fn healthy<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            temperature: uniform(rng, 10.0, 90.0),
            voltage: uniform(rng, 2.33, 4.32),
            bias_current: uniform(rng, 10.0, 80.0),
            tx_power: uniform(rng, -2.0, 2.0),
            rx_power: uniform(rng, -4.0, 1.0),
        }
    }

    /// Readings reported by an empty cage: plausible environmentals, near-dark
    /// optical power.
    fn empty_cage<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            temperature: uniform(rng, 10.0, 90.0),
            voltage: uniform(rng, 2.33, 4.32),
            bias_current: uniform(rng, 10.0, 80.0),
            tx_power: uniform(rng, -7.0, -5.0),
            rx_power: uniform(rng, -10.0, -8.0),
        }
    }

    /// Apply one polling interval of random drift, kept inside sensor limits.
    pub fn drift<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            temperature: (self.temperature + uniform(rng, -1.0, 1.0)).clamp(10.0, 90.0),
            voltage: (self.voltage + uniform(rng, -0.01, 0.01)).clamp(2.33, 4.32),
            bias_current: (self.bias_current + uniform(rng, -0.5, 0.5)).clamp(5.0, 85.0),
            tx_power: (self.tx_power + uniform(rng, -0.1, 0.1)).clamp(-7.0, 3.0),
            rx_power: (self.rx_power + uniform(rng, -0.2, 0.2)).clamp(-12.0, 2.0),
        }
    }
}

/// IF-MIB / IF-MIB HC counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfCounters {
    pub in_octets: i64,
    pub out_octets: i64,
    pub in_ucast_pkts: i64,
    pub out_ucast_pkts: i64,
    pub in_errors: i64,
    pub out_errors: i64,
    pub in_discards: i64,
    pub out_discards: i64,
    pub in_broadcast_pkts: i64,
    pub out_broadcast_pkts: i64,
    pub in_multicast_pkts: i64,
    pub out_multicast_pkts: i64,
}

impl IfCounters {
    /// Counters since boot. Down ports keep small historical values; nothing
    /// starts at zero.
    fn initial<R: Rng + ?Sized>(rng: &mut R, up: bool) -> Self {
        let (octets, packets, discards) = if up {
            (
                1_000_000..=10_000_000_000i64,
                10_000..=100_000_000i64,
                1..=1000i64,
            )
        } else {
            (1000..=100_000, 1000..=100_000, 1..=100)
        };
        Self {
            in_octets: rng.gen_range(octets.clone()),
            out_octets: rng.gen_range(octets),
            in_ucast_pkts: rng.gen_range(packets.clone()),
            out_ucast_pkts: rng.gen_range(packets),
            in_errors: rng.gen_range(1..=100),
            out_errors: rng.gen_range(1..=100),
            in_discards: rng.gen_range(discards.clone()),
            out_discards: rng.gen_range(discards),
            in_broadcast_pkts: rng.gen_range(100..=10_000),
            out_broadcast_pkts: rng.gen_range(100..=10_000),
            in_multicast_pkts: rng.gen_range(100..=10_000),
            out_multicast_pkts: rng.gen_range(100..=10_000),
        }
    }

    /// Traffic seen during one polling interval, with occasional errors.
    pub fn advance<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = *self;
        next.in_octets += rng.gen_range(1000..=1_000_000);
        next.out_octets += rng.gen_range(1000..=1_000_000);
        next.in_ucast_pkts += rng.gen_range(10..=10_000);
        next.out_ucast_pkts += rng.gen_range(10..=10_000);
        if rng.gen_bool(0.1) {
            next.in_errors += rng.gen_range(0..=5);
        }
        if rng.gen_bool(0.1) {
            next.out_errors += rng.gen_range(0..=5);
        }
        if rng.gen_bool(0.1) {
            next.in_discards += rng.gen_range(0..=10);
        }
        if rng.gen_bool(0.1) {
            next.out_discards += rng.gen_range(0..=10);
        }
        next
    }
}

/// Physical location of a port. Only known for ports with an optic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub datacenter: String,
    pub room: String,
    pub rack: String,
}

/// One row of the interface table of a device.
#[derive(Debug, Clone, PartialEq)]
pub struct SnmpInterface {
    /// Position of the owning device in the inventory.
    pub device_index: usize,
    pub device_ip: String,
    pub device_hostname: String,
    pub device_vendor: &'static str,
    pub name: String,
    pub speed: &'static str,
    pub location: Option<Location>,
    pub optic: Option<OpticalModule>,
    pub if_index: i64,
    pub alias: String,
    pub if_type: &'static str,
    pub mtu: i64,
    pub admin_status: &'static str,
    pub oper_status: &'static str,
    pub last_change: i64,
    pub counters: IfCounters,
    pub readings: OpticalReadings,
}

impl SnmpInterface {
    pub fn is_up(&self) -> bool {
        self.oper_status == "up"
    }

    pub fn speed_bps(&self) -> i64 {
        speed_to_bps(self.speed)
    }
}

fn random_alias<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("to_{}-{}", pick(rng, PEER_ROLES), rng.gen_range(1..=100)),
        1 => String::new(),
        _ => format!("Server{}", rng.gen_range(1..=500)),
    }
}

fn random_serial<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SERIAL_LEN)
        .map(|_| *pick(rng, SERIAL_ALPHABET) as char)
        .collect()
}

fn generate_optic<R: Rng + ?Sized>(
    rng: &mut R,
    device: &str,
    interface: &str,
    speed: &str,
) -> OpticalModule {
    let module_id = ModuleId::random_for_port_with_speed(rng, device, interface, speed);
    let part = format!("{}-{}-{}", module_id.vendor, speed, pick(rng, OPTIC_TYPES));
    OpticalModule {
        serial: random_serial(rng),
        part,
        module_id,
    }
}

/// Interfaces of one device; port count follows the preset's port density.
pub fn generate_interfaces<R: Rng + ?Sized>(
    rng: &mut R,
    device_index: usize,
    device: &SnmpDevice,
    preset: &EnvironmentPreset,
) -> Vec<SnmpInterface> {
    let (min_ports, max_ports) = preset.port_density;
    let num_ports = rng.gen_range(min_ports..=max_ports.max(min_ports));

    (1..=num_ports)
        .map(|port| {
            let name = format!("Eth{}/{}", rng.gen_range(1..=8), port);
            let admin_status = *pick(rng, ADMIN_STATES);
            let oper_status = if admin_status == "down" {
                "down"
            } else {
                *pick(rng, OPER_STATES)
            };
            let speed = *pick(rng, SPEEDS);

            let optic = (rng.gen_bool(OPTIC_PROBABILITY) && speed != COPPER_SPEED)
                .then(|| generate_optic(rng, device.name(), &name, speed));
            let location = optic.as_ref().map(|o| Location {
                datacenter: o.module_id.datacenter.clone(),
                room: o.module_id.pod.clone(),
                rack: o.module_id.rack.clone(),
            });
            let readings = if optic.is_some() {
                OpticalReadings::healthy(rng)
            } else {
                OpticalReadings::empty_cage(rng)
            };

            SnmpInterface {
                device_index,
                device_ip: device.identity.ip.to_string(),
                device_hostname: device.name().to_string(),
                device_vendor: device.identity.vendor.as_str(),
                speed,
                location,
                optic,
                if_index: rng.gen_range(1..=256),
                alias: random_alias(rng),
                if_type: *pick(rng, INTERFACE_TYPES),
                mtu: *pick(rng, &[1500, 9000, 9216]),
                admin_status,
                oper_status,
                last_change: rng.gen_range(1..=2_000_000),
                counters: IfCounters::initial(rng, oper_status == "up"),
                readings,
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::device::generate_devices;
    use crate::topology::setup_devices;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn interfaces(rng: &mut StdRng) -> Vec<SnmpInterface> {
        let preset = EnvironmentPreset::datacenter();
        let identities = setup_devices(rng, &preset, 10).unwrap();
        let devices = generate_devices(rng, identities);
        devices
            .iter()
            .enumerate()
            .flat_map(|(i, device)| generate_interfaces(rng, i, device, &preset))
            .collect()
    }

    #[test]
    fn test_admin_down_forces_oper_down() {
        let mut rng = StdRng::seed_from_u64(42);
        for iface in interfaces(&mut rng) {
            if iface.admin_status == "down" {
                assert_eq!(iface.oper_status, "down");
            }
        }
    }

    #[test]
    fn test_optics_never_on_copper_ports() {
        let mut rng = StdRng::seed_from_u64(42);
        let all = interfaces(&mut rng);
        assert!(all.iter().any(|i| i.optic.is_some()));
        for iface in &all {
            if iface.speed == COPPER_SPEED {
                assert!(iface.optic.is_none());
            }
            match &iface.optic {
                Some(optic) => {
                    assert_eq!(optic.module_id.speed, iface.speed);
                    assert_eq!(optic.module_id.interface, iface.name);
                    assert_eq!(optic.serial.len(), SERIAL_LEN);
                    assert!(optic.part.starts_with(&optic.module_id.vendor));
                    let location = iface.location.as_ref().unwrap();
                    assert_eq!(location.datacenter, optic.module_id.datacenter);
                }
                None => assert!(iface.location.is_none()),
            }
        }
    }

    #[test]
    fn test_drift_stays_within_sensor_limits() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut readings = OpticalReadings {
            temperature: 89.9,
            voltage: 2.33,
            bias_current: 5.0,
            tx_power: 3.0,
            rx_power: -12.0,
        };
        for _ in 0..1000 {
            readings = readings.drift(&mut rng);
            assert!((10.0..=90.0).contains(&readings.temperature));
            assert!((2.33..=4.32).contains(&readings.voltage));
            assert!((5.0..=85.0).contains(&readings.bias_current));
            assert!((-7.0..=3.0).contains(&readings.tx_power));
            assert!((-12.0..=2.0).contains(&readings.rx_power));
        }
    }

    #[test]
    fn test_counters_only_grow() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = IfCounters::initial(&mut rng, true);
        let next = start.advance(&mut rng);
        assert!(next.in_octets > start.in_octets);
        assert!(next.out_ucast_pkts > start.out_ucast_pkts);
        assert!(next.in_errors >= start.in_errors);
    }
}
