//! Non-volatile status

/// Non-volatile status, including the healthy and fainted states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Healthy,
    Burned,
    Frozen,
    Paralyzed,
    Poisoned,
    Toxic,
    Asleep,
    Fainted,
}

impl Status {
    /// Parse a `-status` code ("brn", "frz", "par", "psn", "tox", "slp");
    /// anything else is healthy
    ///
    /// Fainted never comes from a status code, only from the "0 fnt"
    /// condition, so HP and status cannot disagree.
    pub fn from_protocol(s: &str) -> Self {
        match s.trim() {
            "brn" => Status::Burned,
            "frz" => Status::Frozen,
            "par" => Status::Paralyzed,
            "psn" => Status::Poisoned,
            "tox" => Status::Toxic,
            "slp" => Status::Asleep,
            _ => Status::Healthy,
        }
    }

    /// Convert to protocol format
    pub fn to_protocol(&self) -> Option<&'static str> {
        match self {
            Status::Healthy => None,
            Status::Burned => Some("brn"),
            Status::Frozen => Some("frz"),
            Status::Paralyzed => Some("par"),
            Status::Poisoned => Some("psn"),
            Status::Toxic => Some("tox"),
            Status::Asleep => Some("slp"),
            Status::Fainted => Some("fnt"),
        }
    }

    /// Burned, frozen, paralyzed, poisoned or asleep
    pub fn is_afflicted(&self) -> bool {
        !matches!(self, Status::Healthy | Status::Fainted)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_protocol().unwrap_or("healthy"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_protocol() {
        assert_eq!(Status::from_protocol("tox"), Status::Toxic);
        assert_eq!(Status::from_protocol("brn"), Status::Burned);
        assert_eq!(Status::from_protocol("par"), Status::Paralyzed);
        assert_eq!(Status::from_protocol("psn"), Status::Poisoned);
        assert_eq!(Status::from_protocol("slp"), Status::Asleep);
        assert_eq!(Status::from_protocol("frz"), Status::Frozen);
        assert_eq!(Status::from_protocol("fnt"), Status::Healthy);
        assert_eq!(Status::from_protocol(""), Status::Healthy);
        assert_eq!(Status::from_protocol("confusion"), Status::Healthy);
    }

    #[test]
    fn test_round_trip_codes() {
        for code in ["brn", "frz", "par", "psn", "tox", "slp"] {
            assert_eq!(Status::from_protocol(code).to_protocol(), Some(code));
        }
        assert_eq!(Status::Healthy.to_protocol(), None);
        assert_eq!(Status::Fainted.to_protocol(), Some("fnt"));
    }

    #[test]
    fn test_is_afflicted() {
        assert!(Status::Asleep.is_afflicted());
        assert!(!Status::Healthy.is_afflicted());
        assert!(!Status::Fainted.is_afflicted());
    }
}
