//! TCAM resource utilisation.

use crate::grpc::device::GrpcDevice;
use netsim_core::random::{rand_between, uniform};
use netsim_core::vocab::TCAM_RESOURCES;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct TcamEntry {
    pub resource: String,
    pub capacity: i64,
    pub used: i64,
    /// `used / capacity`.
    pub utilization: f64,
}

impl TcamEntry {
    fn new(resource: impl Into<String>, capacity: i64, used: i64) -> Self {
        let capacity = capacity.max(1);
        let used = used.clamp(0, capacity);
        Self {
            resource: resource.into(),
            capacity,
            used,
            utilization: used as f64 / capacity as f64,
        }
    }

    /// Whole-device stand-in used when a device has no TCAM entries.
    pub fn fallback(device: &GrpcDevice) -> Self {
        let used = (device.tcam_capacity as f64 * device.tcam_utilization) as i64;
        Self::new("L3_Routes", device.tcam_capacity, used)
    }
}

/// One entry per TCAM resource. Usage scatters 20% around the device's
/// overall utilisation and never exceeds capacity.
pub fn generate_tcam<R: Rng + ?Sized>(rng: &mut R, device: &GrpcDevice) -> Vec<TcamEntry> {
    TCAM_RESOURCES
        .iter()
        .map(|resource| {
            let capacity = rand_between(rng, 1000, device.tcam_capacity);
            let used =
                (capacity as f64 * device.tcam_utilization * uniform(rng, 0.8, 1.2)) as i64;
            TcamEntry::new(*resource, capacity, used)
        })
        .collect()
}
