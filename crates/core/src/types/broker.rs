//! The fixed broker reference set.
//!
//! Brokers are a closed set of id/label pairs used to categorize a
//! question. They are validated against and displayed, never created or
//! persisted on their own.

use super::id::BrokerId;

/// A broker: a reference identifier paired with a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broker {
    /// Reference identifier. The set is closed; ids are not contiguous.
    pub id: BrokerId,
    /// Human-readable label shown in tables and select boxes.
    pub label: &'static str,
}

/// The closed set of valid brokers.
const BROKERS: [Broker; 5] = [
    Broker {
        id: BrokerId::new(1),
        label: "Pepe Argento",
    },
    Broker {
        id: BrokerId::new(2),
        label: "Maria Elena",
    },
    Broker {
        id: BrokerId::new(3),
        label: "Paola Guerrero",
    },
    Broker {
        id: BrokerId::new(40),
        label: "Dardo Rocha",
    },
    Broker {
        id: BrokerId::new(6),
        label: "Coquito",
    },
];

impl Broker {
    /// All valid brokers, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &BROKERS
    }

    /// Look up a broker by id.
    #[must_use]
    pub fn get(id: BrokerId) -> Option<Self> {
        BROKERS.iter().find(|b| b.id == id).copied()
    }

    /// Whether `id` belongs to the fixed broker set.
    #[must_use]
    pub fn is_known(id: BrokerId) -> bool {
        Self::get(id).is_some()
    }

    /// Display label for `id`, or a placeholder for ids outside the set.
    ///
    /// Records can only ever hold known broker ids, so the placeholder is
    /// a rendering safety net rather than an expected path.
    #[must_use]
    pub fn label_for(id: BrokerId) -> &'static str {
        Self::get(id).map_or("Unknown", |b| b.label)
    }
}
