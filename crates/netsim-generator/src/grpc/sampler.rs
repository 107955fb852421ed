//! Subscription sample generation.

use super::data_type::{data_type_distribution, DataType};
use super::entities::{DeviceInventory, InterfaceEntry, MplsEntry, TcamEntry, VrfEntry, VxlanEntry};
use super::format::{format_payload, MacTableStats, SampleData};
use super::paths::subscription_path;
use crate::error::GeneratorError;
use chrono::NaiveDateTime;
use netsim_core::random::pick;
use netsim_core::time::format_timestamp;
use netsim_core::{ColumnDef, GrpcConfig, Row, TableSchema, TelemetryRecord, TimeWindow, Vendor};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// One flattened gRPC/gNMI subscription sample.
#[derive(Debug, Clone, PartialEq)]
pub struct GrpcSample {
    pub timestamp: NaiveDateTime,
    pub device_ip: String,
    pub device_name: String,
    pub vendor: Vendor,
    pub data_type: DataType,
    pub subscription_path: &'static str,
    /// Vendor payload, always JSON text.
    pub raw_data: String,
    pub data: SampleData,
    /// Hardware FIB size of the device.
    pub fib_size: i64,
}

impl TelemetryRecord for GrpcSample {
    fn table_schema() -> TableSchema {
        TableSchema::new(
            "grpc_samples",
            vec![
                ColumnDef::utf8("timestamp"),
                ColumnDef::utf8("device_ip"),
                ColumnDef::utf8("device_name"),
                ColumnDef::utf8("vendor"),
                ColumnDef::utf8("data_type"),
                ColumnDef::utf8("subscription_path"),
                ColumnDef::utf8("raw_data"),
                // TCAM
                ColumnDef::utf8("tcam_resource").nullable(),
                ColumnDef::int64("tcam_capacity").nullable(),
                ColumnDef::int64("tcam_used").nullable(),
                ColumnDef::float64("tcam_utilization").nullable(),
                // VRF / routing
                ColumnDef::utf8("vrf_name").nullable(),
                ColumnDef::int64("route_count").nullable(),
                ColumnDef::int64("bgp_routes").nullable(),
                ColumnDef::int64("ospf_routes").nullable(),
                ColumnDef::int64("ecmp_groups").nullable(),
                ColumnDef::int64("ecmp_routes").nullable(),
                // Interface / QoS
                ColumnDef::utf8("interface").nullable(),
                ColumnDef::bool("qos_enabled").nullable(),
                ColumnDef::int64("congestion_drops").nullable(),
                ColumnDef::int64("max_queue_depth").nullable(),
                ColumnDef::int64("max_queue_drops").nullable(),
                // FIB
                ColumnDef::bool("fib_synced").nullable(),
                ColumnDef::int64("fib_size").nullable(),
                // MPLS
                ColumnDef::utf8("mpls_service").nullable(),
                ColumnDef::int64("label_count").nullable(),
                ColumnDef::int64("tunnels").nullable(),
                ColumnDef::int64("tunnels_up").nullable(),
                // VXLAN / MAC
                ColumnDef::int64("vni_id").nullable(),
                ColumnDef::int64("mac_count").nullable(),
                ColumnDef::int64("mac_capacity").nullable(),
            ],
        )
    }

    fn to_row(&self) -> Row {
        let mut row = Row::new()
            .with("timestamp", format_timestamp(self.timestamp))
            .with("device_ip", self.device_ip.as_str())
            .with("device_name", self.device_name.as_str())
            .with("vendor", self.vendor.as_str())
            .with("data_type", self.data_type.as_str())
            .with("subscription_path", self.subscription_path)
            .with("raw_data", self.raw_data.as_str());

        match &self.data {
            SampleData::Tcam(tcam) => {
                row.set("tcam_resource", tcam.resource.as_str());
                row.set("tcam_capacity", tcam.capacity);
                row.set("tcam_used", tcam.used);
                row.set("tcam_utilization", tcam.utilization);
            }
            SampleData::Vrf(vrf) => {
                row.set("vrf_name", vrf.vrf_name.as_str());
                row.set("route_count", vrf.route_count);
                row.set("bgp_routes", vrf.bgp_routes);
                row.set("ospf_routes", vrf.ospf_routes);
                row.set("ecmp_groups", vrf.ecmp_groups);
                row.set("ecmp_routes", vrf.ecmp_routes);
                if self.data_type == DataType::Fib {
                    row.set("fib_synced", vrf.fib_synced);
                    row.set("fib_size", self.fib_size);
                }
            }
            SampleData::Interface(iface) => {
                row.set("interface", iface.name.as_str());
                row.set("qos_enabled", iface.qos_enabled);
                row.set("congestion_drops", iface.congestion_drops);
                row.set("max_queue_depth", iface.max_queue_depth);
                row.set("max_queue_drops", iface.max_queue_drops);
            }
            SampleData::Mpls(mpls) => {
                row.set("mpls_service", mpls.service);
                row.set("label_count", mpls.label_count);
                row.set("tunnels", mpls.tunnels);
                row.set("tunnels_up", mpls.tunnels_up);
            }
            SampleData::Vxlan(vni) => {
                row.set("vni_id", vni.vni_id);
                row.set("vrf_name", vni.vrf_name());
                row.set("route_count", vni.route_count());
                row.set("mac_count", vni.mac_count());
            }
            SampleData::MacTable(mac) => {
                row.set("mac_count", mac.mac_count);
                row.set("mac_capacity", mac.mac_capacity);
            }
        }
        row
    }
}

/// Draws subscription samples across an inventory.
pub struct GrpcSampler<'a> {
    inventory: &'a [DeviceInventory],
    window: TimeWindow,
    data_types: WeightedIndex<f64>,
}

impl<'a> GrpcSampler<'a> {
    pub fn new(
        inventory: &'a [DeviceInventory],
        window: TimeWindow,
        config: &GrpcConfig,
    ) -> Result<Self, GeneratorError> {
        if inventory.is_empty() {
            return Err(GeneratorError::NoDevices);
        }
        Ok(Self {
            inventory,
            window,
            data_types: data_type_distribution(config)?,
        })
    }

    /// One sample: random instant, uniform device, weighted data type.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> GrpcSample {
        let timestamp = self.window.random_instant(rng);
        let entry = pick(rng, self.inventory);
        let data_type = DataType::ALL[self.data_types.sample(rng)];
        let data = select_data(rng, entry, data_type);

        let device = &entry.device;
        let raw_data = format_payload(device.identity.vendor, data_type, &data, device.fib_size, rng);

        GrpcSample {
            timestamp,
            device_ip: device.ip(),
            device_name: device.name().to_string(),
            vendor: device.identity.vendor,
            data_type,
            subscription_path: subscription_path(device.identity.vendor, data_type),
            raw_data,
            data,
            fib_size: device.fib_size,
        }
    }

    pub fn samples<R: Rng>(&self, rng: &mut R, count: u64) -> Vec<GrpcSample> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// Pick the record behind a sample, synthesising one when the device has
/// none of the required kind.
fn select_data<R: Rng + ?Sized>(rng: &mut R, entry: &DeviceInventory, data_type: DataType) -> SampleData {
    let device = &entry.device;
    match data_type {
        DataType::RouteTable | DataType::Ecmp | DataType::Fib => SampleData::Vrf(
            pick_or(rng, &entry.vrfs, |_| VrfEntry::fallback(device)),
        ),
        DataType::Qos | DataType::Congestion => SampleData::Interface(pick_or(
            rng,
            &entry.interfaces,
            InterfaceEntry::fallback,
        )),
        DataType::Tcam => SampleData::Tcam(pick_or(rng, &entry.tcam, |_| TcamEntry::fallback(device))),
        DataType::Vxlan | DataType::Vni => {
            SampleData::Vxlan(pick_or(rng, &entry.vxlan, VxlanEntry::fallback))
        }
        DataType::Mpls => SampleData::Mpls(pick_or(rng, &entry.mpls, MplsEntry::fallback)),
        DataType::MacTable => SampleData::MacTable(MacTableStats {
            mac_count: device.mac_table_size,
            mac_capacity: device.mac_table_capacity,
        }),
    }
}

fn pick_or<T, R, F>(rng: &mut R, items: &[T], fallback: F) -> T
where
    T: Clone,
    R: Rng + ?Sized,
    F: FnOnce(&mut R) -> T,
{
    if items.is_empty() {
        fallback(rng)
    } else {
        pick(rng, items).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grpc::device::generate_devices;
    use crate::grpc::entities::generate_inventory;
    use crate::topology::setup_devices;
    use netsim_core::{CellValue, EnvironmentPreset, NormalizedTable};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn inventory(rng: &mut StdRng, count: u64) -> Vec<DeviceInventory> {
        let preset = EnvironmentPreset::complete();
        let identities = setup_devices(rng, &preset, count).unwrap();
        let devices = generate_devices(rng, identities, &preset);
        generate_inventory(rng, devices, &preset)
    }

    fn window() -> TimeWindow {
        TimeWindow::from_dates("2025-02-01", "2025-03-01").unwrap()
    }

    #[test]
    fn test_samples_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        let inventory = inventory(&mut rng, 5);
        let sampler = GrpcSampler::new(&inventory, window(), &GrpcConfig::default()).unwrap();
        let samples = sampler.samples(&mut rng, 500);
        assert_eq!(samples.len(), 500);
        for sample in &samples {
            assert!(sample.timestamp >= window().start() && sample.timestamp <= window().end());
            assert_eq!(
                sample.subscription_path,
                subscription_path(sample.vendor, sample.data_type)
            );
            let payload: serde_json::Value = serde_json::from_str(&sample.raw_data).unwrap();
            assert!(payload.is_object());
        }
    }

    #[test]
    fn test_empty_device_falls_back() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut inventory = inventory(&mut rng, 1);
        let entry = &mut inventory[0];
        entry.vrfs.clear();
        entry.interfaces.clear();
        entry.vxlan.clear();
        entry.mpls.clear();
        entry.tcam.clear();

        for data_type in DataType::ALL {
            let data = select_data(&mut rng, &inventory[0], data_type);
            let expected_kind = match data_type {
                DataType::RouteTable | DataType::Ecmp | DataType::Fib => {
                    matches!(data, SampleData::Vrf(_))
                }
                DataType::Qos | DataType::Congestion => matches!(data, SampleData::Interface(_)),
                DataType::Tcam => matches!(data, SampleData::Tcam(_)),
                DataType::Vxlan | DataType::Vni => matches!(data, SampleData::Vxlan(_)),
                DataType::Mpls => matches!(data, SampleData::Mpls(_)),
                DataType::MacTable => matches!(data, SampleData::MacTable(_)),
            };
            assert!(expected_kind, "wrong record kind for {data_type}");
        }
    }

    #[test]
    fn test_rows_normalize_against_schema() {
        let mut rng = StdRng::seed_from_u64(42);
        let inventory = inventory(&mut rng, 3);
        let sampler = GrpcSampler::new(&inventory, window(), &GrpcConfig::default()).unwrap();
        let samples = sampler.samples(&mut rng, 200);
        let table = NormalizedTable::from_records(&samples, &mut rng).unwrap();
        assert_eq!(table.num_rows(), 200);
        for value in table.column("raw_data").unwrap() {
            assert!(matches!(value, CellValue::Utf8(_)));
        }
    }

    #[test]
    fn test_empty_inventory_is_an_error() {
        let err = GrpcSampler::new(&[], window(), &GrpcConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, GeneratorError::NoDevices));
    }
}
