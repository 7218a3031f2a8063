//! Numeric fault flags for the LADRC state record.
//!
//! One flag per dynamic state field. A controller update that leaves any
//! flagged field non-finite is rejected as a numeric fault.

use bitflags::bitflags;

bitflags! {
    /// State fields that held a non-finite value after an update.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StateFields: u16 {
        /// Tracked reference.
        const V1 = 0x0001;
        /// Tracked reference rate.
        const V2 = 0x0002;
        /// Estimated output.
        const X1 = 0x0004;
        /// Estimated output rate.
        const X2 = 0x0008;
        /// Estimated total disturbance.
        const X3 = 0x0010;
        /// Proportional gain.
        const KP = 0x0020;
        /// Derivative gain.
        const KD = 0x0040;
        /// Nominal PD command.
        const U0 = 0x0080;
        /// Final command.
        const U  = 0x0100;
    }
}

impl StateFields {
    /// Differentiator fields.
    pub const DIFFERENTIATOR: Self = Self::from_bits_truncate(Self::V1.bits() | Self::V2.bits());

    /// Observer fields.
    pub const OBSERVER: Self =
        Self::from_bits_truncate(Self::X1.bits() | Self::X2.bits() | Self::X3.bits());

    /// Returns true if any observer estimate is affected.
    #[inline]
    pub const fn touches_observer(&self) -> bool {
        self.intersects(Self::OBSERVER)
    }
}

impl Default for StateFields {
    fn default() -> Self {
        Self::empty()
    }
}
