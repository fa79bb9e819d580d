/// Source of the host facts shown on the panel.
///
/// Lookups never fail: a value that cannot be determined is returned as an
/// empty string and the failure is logged by the implementation.
pub trait StatusProvider {
    /// Host name, empty on failure
    fn hostname(&self) -> String;

    /// IPv4 address of `interface`, empty when absent, unaddressed or loopback-only
    fn ipv4(&self, interface: &str) -> String;
}
