use crate::{error::ErrorMessage, CalendarError, CalendarResult, MS_PER_DAY};

/// Milliseconds since 1970-01-01T00:00:00Z, limited to +/-100,000,000 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct EpochMilliseconds(pub(crate) i64);

impl TryFrom<i64> for EpochMilliseconds {
    type Error = CalendarError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let result = Self(value);
        result.check_validity()?;
        Ok(result)
    }
}

impl EpochMilliseconds {
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn check_validity(&self) -> CalendarResult<()> {
        if !is_valid_epoch_millis(self.0) {
            return Err(CalendarError::invalid_date().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(())
    }

    /// Returns the result of adding `milliseconds`, failing when the sum
    /// leaves the valid range.
    pub fn checked_add(&self, milliseconds: i64) -> CalendarResult<Self> {
        let sum = self
            .0
            .checked_add(milliseconds)
            .ok_or(CalendarError::invalid_date().with_enum(ErrorMessage::InstantOutOfRange))?;
        Self::try_from(sum)
    }

    /// Returns the result of adding a whole number of days.
    pub fn checked_add_days(&self, days: i64) -> CalendarResult<Self> {
        let milliseconds = days
            .checked_mul(MS_PER_DAY)
            .ok_or(CalendarError::invalid_date().with_enum(ErrorMessage::InstantOutOfRange))?;
        self.checked_add(milliseconds)
    }
}

/// Utility for determining if the milliseconds are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_millis(millis: i64) -> bool {
    (crate::MS_MIN_INSTANT..=crate::MS_MAX_INSTANT).contains(&millis)
}
