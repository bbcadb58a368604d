//! Seat identification.
//!
//! A seat is a fixed position in the turn rotation. The player sitting in it
//! can change mid-game (ragequit), the seat cannot.

use serde::{Deserialize, Serialize};

/// Seat identifier supporting 1-255 seats.
///
/// Seat indices are 0-based: the first seat is `SeatId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one in a rotation of `seat_count` seats.
    ///
    /// ```
    /// use straights::core::SeatId;
    ///
    /// assert_eq!(SeatId::new(1).next(4), SeatId::new(2));
    /// assert_eq!(SeatId::new(3).next(4), SeatId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, seat_count: usize) -> Self {
        Self(((self.index() + 1) % seat_count) as u8)
    }

    /// Iterate over all seats for a table with `seat_count` seats.
    ///
    /// ```
    /// use straights::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], SeatId::new(0));
    /// assert_eq!(seats[3], SeatId::new(3));
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0 + 1)
    }
}
