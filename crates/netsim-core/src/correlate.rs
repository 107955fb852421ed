//! Best-effort module id correlation for free-text log messages.
//!
//! Syslog lines mention optical modules in two ways: optical events embed the
//! full module id in parentheses, port events only name the interface. This
//! module recovers a [`ModuleId`] from either, and synthesises one from the
//! device and interface when only the interface is known. Nothing here is a
//! referential-integrity guarantee; a synthesised id may never appear in the
//! DDM or SNMP datasets.

use crate::module_id::ModuleId;
use rand::Rng;
use regex_lite::Regex;
use std::sync::OnceLock;

fn interface_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b(?:Ethernet|Eth|ge-|xe-|et-|GigabitEthernet)\d+(?:/\d+){1,2}\b")
            .expect("interface pattern is valid")
    })
}

/// Find a module id enclosed in parentheses, e.g. `... (Innolight-DC1-...-100G): ...`.
pub fn extract_module_id(message: &str) -> Option<ModuleId> {
    let mut rest = message;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(')') else {
            break;
        };
        if let Ok(id) = after[..close].parse::<ModuleId>() {
            return Some(id);
        }
        rest = &after[close + 1..];
    }
    None
}

/// First interface name mentioned in a message.
pub fn extract_interface(message: &str) -> Option<&str> {
    interface_pattern().find(message).map(|m| m.as_str())
}

/// Resolve the module a message refers to.
///
/// Tries an embedded module id first, then synthesises one for the interface
/// named in the message on `device`. Returns `None` when the message names
/// neither.
pub fn correlate_module_id<R: Rng + ?Sized>(
    rng: &mut R,
    message: &str,
    device: &str,
) -> Option<ModuleId> {
    if let Some(id) = extract_module_id(message) {
        return Some(id);
    }
    extract_interface(message).map(|interface| ModuleId::random_for_port(rng, device, interface))
}
