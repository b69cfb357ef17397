//! crates/logging/src/routing.rs
//! Per-severity channel routing state.

use diagnostic::{Channel, Severity};

use crate::flags::SeverityFlags;

/// Routing state deciding which severities are emitted and where.
///
/// Each severity is either disabled (`None`, messages dropped) or bound to
/// the channel it is emitted on. The state starts disabled-for-all and only
/// changes through [`configure`](Self::configure) and
/// [`reset`](Self::reset); every emission reads it at call time, so a change
/// takes effect for the very next call.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingConfig {
    /// Channel binding for error messages.
    pub error: Option<Channel>,
    /// Channel binding for warning messages.
    pub warning: Option<Channel>,
    /// Channel binding for informational messages.
    pub info: Option<Channel>,
    /// Channel binding for verbose messages.
    pub verbose: Option<Channel>,
    /// Channel binding for debugging messages.
    pub debug: Option<Channel>,
}

impl RoutingConfig {
    /// Creates a routing state with every severity disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            error: None,
            warning: None,
            info: None,
            verbose: None,
            debug: None,
        }
    }

    /// Re-derives the whole state from `flags`.
    ///
    /// Every severity present in `flags` is enabled on its conventional
    /// channel; every severity absent from `flags` is disabled. Prior state
    /// does not survive: `configure` replaces, it never merges.
    ///
    /// # Examples
    ///
    /// ```
    /// use diagnostic::{Channel, Severity};
    /// use logging::{RoutingConfig, SeverityFlags};
    ///
    /// let mut routing = RoutingConfig::new();
    /// routing.configure(SeverityFlags::TERSE);
    /// assert_eq!(routing.get(Severity::Error), Some(Channel::Error));
    /// assert_eq!(routing.get(Severity::Info), Some(Channel::Standard));
    /// assert_eq!(routing.get(Severity::Warning), None);
    /// ```
    pub fn configure(&mut self, flags: SeverityFlags) {
        self.reset();
        for severity in Severity::ALL {
            if flags.contains(SeverityFlags::from(severity)) {
                self.set(severity, Some(severity.channel()));
            }
        }
    }

    /// Disables every severity. Equivalent to configuring the empty set.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the channel binding for one severity.
    #[must_use]
    pub const fn get(&self, severity: Severity) -> Option<Channel> {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Verbose => self.verbose,
            Severity::Debug => self.debug,
        }
    }

    /// Sets the channel binding for one severity.
    pub fn set(&mut self, severity: Severity, channel: Option<Channel>) {
        match severity {
            Severity::Error => self.error = channel,
            Severity::Warning => self.warning = channel,
            Severity::Info => self.info = channel,
            Severity::Verbose => self.verbose = channel,
            Severity::Debug => self.debug = channel,
        }
    }

    /// Reports whether the severity currently reaches a channel.
    #[must_use]
    pub const fn is_enabled(&self, severity: Severity) -> bool {
        self.get(severity).is_some()
    }

    /// Returns the set of currently enabled severities.
    #[must_use]
    pub fn enabled_flags(&self) -> SeverityFlags {
        let mut flags = SeverityFlags::NONE;
        for severity in Severity::ALL {
            if self.is_enabled(severity) {
                flags.insert(SeverityFlags::from(severity));
            }
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disabled_for_all() {
        let routing = RoutingConfig::new();
        for severity in Severity::ALL {
            assert_eq!(routing.get(severity), None);
            assert!(!routing.is_enabled(severity));
        }
        assert_eq!(routing, RoutingConfig::default());
    }

    #[test]
    fn configure_binds_conventional_channels() {
        let mut routing = RoutingConfig::new();
        routing.configure(SeverityFlags::ALL);

        assert_eq!(routing.error, Some(Channel::Error));
        assert_eq!(routing.warning, Some(Channel::Error));
        assert_eq!(routing.info, Some(Channel::Standard));
        assert_eq!(routing.verbose, Some(Channel::Standard));
        assert_eq!(routing.debug, Some(Channel::Standard));
    }

    #[test]
    fn configure_disables_absent_severities() {
        let mut routing = RoutingConfig::new();
        routing.configure(SeverityFlags::TERSE);

        assert!(routing.is_enabled(Severity::Error));
        assert!(routing.is_enabled(Severity::Info));
        assert!(!routing.is_enabled(Severity::Warning));
        assert!(!routing.is_enabled(Severity::Verbose));
        assert!(!routing.is_enabled(Severity::Debug));
    }

    #[test]
    fn reconfigure_leaves_no_residue() {
        let mut reconfigured = RoutingConfig::new();
        reconfigured.configure(SeverityFlags::ALL);
        reconfigured.configure(SeverityFlags::TERSE);

        let mut fresh = RoutingConfig::new();
        fresh.configure(SeverityFlags::TERSE);

        assert_eq!(reconfigured, fresh);
    }

    #[test]
    fn configure_is_idempotent() {
        let mut once = RoutingConfig::new();
        once.configure(SeverityFlags::VERBOSE_AND_UP);

        let mut twice = once.clone();
        twice.configure(SeverityFlags::VERBOSE_AND_UP);

        assert_eq!(once, twice);
    }

    #[test]
    fn reset_disables_everything_and_is_idempotent() {
        let mut routing = RoutingConfig::new();
        routing.configure(SeverityFlags::ALL);
        routing.reset();
        assert_eq!(routing, RoutingConfig::new());

        routing.reset();
        assert_eq!(routing, RoutingConfig::new());
    }

    #[test]
    fn reset_equals_configure_of_empty_set() {
        let mut via_reset = RoutingConfig::new();
        via_reset.configure(SeverityFlags::ALL);
        via_reset.reset();

        let mut via_configure = RoutingConfig::new();
        via_configure.configure(SeverityFlags::ALL);
        via_configure.configure(SeverityFlags::NONE);

        assert_eq!(via_reset, via_configure);
    }

    #[test]
    fn enabled_flags_round_trips_the_configured_set() {
        for flags in [
            SeverityFlags::NONE,
            SeverityFlags::TERSE,
            SeverityFlags::VERBOSE_AND_UP,
            SeverityFlags::ALL,
            SeverityFlags::WARNING | SeverityFlags::DEBUG,
        ] {
            let mut routing = RoutingConfig::new();
            routing.configure(flags);
            assert_eq!(routing.enabled_flags(), flags);
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn routing_serde_round_trip() {
            let mut routing = RoutingConfig::new();
            routing.configure(SeverityFlags::VERBOSE_AND_UP);

            let json = serde_json::to_string(&routing).expect("serialize");
            let decoded: RoutingConfig = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(routing, decoded);
        }
    }
}
