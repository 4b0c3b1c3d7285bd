// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// The number of concurrent sessions a device admits unless configured otherwise.
pub const DEFAULT_MAX_SESSIONS: usize = 6;

/// The device name used in log messages unless configured otherwise.
pub const DEFAULT_DEVICE_NAME: &str = "math";

/// Configuration for a `Device`.
///
/// # Examples
///
/// ```rust
/// # use abacus_device::config::DeviceConfig;
/// let config = DeviceConfig::new().max_sessions(2).name("calc");
/// assert_eq!(config.get_max_sessions(), 2);
/// assert_eq!(config.get_name(), "calc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    name: String,
    max_sessions: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DEVICE_NAME.to_string(),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl DeviceConfig {
    /// Creates a configuration with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of sessions that may be open at the same time.
    /// A bound of zero admits nobody.
    #[inline]
    pub fn max_sessions(mut self, n: usize) -> Self {
        self.max_sessions = n;
        self
    }

    /// Sets the name the device reports in log messages.
    #[inline]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn get_max_sessions(&self) -> usize {
        self.max_sessions
    }

    #[inline]
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for DeviceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DeviceConfig(name: {}, max_sessions: {})",
            self.name, self.max_sessions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeviceConfig::default();
        assert_eq!(config.get_max_sessions(), 6);
        assert_eq!(config.get_name(), "math");
        assert_eq!(config, DeviceConfig::new());
    }

    #[test]
    fn test_builder_overrides() {
        let config = DeviceConfig::new().max_sessions(0).name(String::from("other"));
        assert_eq!(config.get_max_sessions(), 0);
        assert_eq!(config.get_name(), "other");
        assert_eq!(
            config.to_string(),
            "DeviceConfig(name: other, max_sessions: 0)"
        );
    }
}
