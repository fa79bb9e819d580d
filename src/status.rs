//! Host status lookups and the text shown on the panel.

use std::ffi::CStr;
use std::net::Ipv4Addr;

use log::{debug, warn};

use crate::error::{MonitorError, Result};
use crate::traits::StatusProvider;

/// Status line for the panel: `host (ip)`, or whichever part is known
pub fn format_status(hostname: &str, ipv4: &str) -> String {
    match (hostname.is_empty(), ipv4.is_empty()) {
        (false, false) => format!("{} ({})", hostname, ipv4),
        (false, true) => hostname.to_string(),
        (true, false) => ipv4.to_string(),
        (true, true) => String::new(),
    }
}

/// Read the kernel host name
pub fn lookup_hostname() -> Result<String> {
    let mut buf = [0u8; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        return Err(MonitorError::Lookup(format!(
            "gethostname: {}",
            std::io::Error::last_os_error()
        )));
    }

    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}

/// Last non-loopback IPv4 address bound to `interface`.
///
/// `Ok(None)` when the interface exists without a usable address, an error
/// when it does not exist at all.
pub fn lookup_ipv4(interface: &str) -> Result<Option<Ipv4Addr>> {
    let mut addrs: *mut libc::ifaddrs = std::ptr::null_mut();
    if unsafe { libc::getifaddrs(&mut addrs) } != 0 {
        return Err(MonitorError::Lookup(format!(
            "getifaddrs: {}",
            std::io::Error::last_os_error()
        )));
    }

    let mut seen = false;
    let mut found = None;
    let mut cursor = addrs;
    while !cursor.is_null() {
        // SAFETY: cursor walks the list returned by getifaddrs, freed below
        let entry = unsafe { &*cursor };
        cursor = entry.ifa_next;

        if entry.ifa_name.is_null() {
            continue;
        }
        let name = unsafe { CStr::from_ptr(entry.ifa_name) };
        if name.to_bytes() != interface.as_bytes() {
            continue;
        }
        seen = true;

        if entry.ifa_addr.is_null() {
            continue;
        }
        let family = unsafe { (*entry.ifa_addr).sa_family };
        if i32::from(family) != libc::AF_INET {
            continue;
        }

        let sin = unsafe { &*(entry.ifa_addr as *const libc::sockaddr_in) };
        let addr = Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr));
        if !addr.is_loopback() {
            found = Some(addr);
        }
    }
    unsafe { libc::freeifaddrs(addrs) };

    if !seen {
        return Err(MonitorError::Lookup(format!("interface {} not found", interface)));
    }
    Ok(found)
}

/// Status provider backed by the running system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStatus;

impl SystemStatus {
    pub fn new() -> Self {
        Self
    }
}

impl StatusProvider for SystemStatus {
    fn hostname(&self) -> String {
        match lookup_hostname() {
            Ok(name) => {
                debug!("Hostname: {}", name);
                name
            }
            Err(err) => {
                warn!("error getting hostname: {}", err);
                String::new()
            }
        }
    }

    fn ipv4(&self, interface: &str) -> String {
        match lookup_ipv4(interface) {
            Ok(Some(addr)) => addr.to_string(),
            Ok(None) => {
                debug!("no IPv4 address on {}", interface);
                String::new()
            }
            Err(err) => {
                warn!("error getting IPv4 address: {}", err);
                String::new()
            }
        }
    }
}
