#[cfg(test)]
#[path = "../../../tests/unit/models/common/time_test.rs"]
mod time_test;

/// Day of week index for Sunday.
pub const SUNDAY: u8 = 0;
/// Day of week index for Saturday.
pub const SATURDAY: u8 = 6;

/// Specifies when delivery is requested: local hour of day and day of week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryTime {
    /// Hour of day, 0-23.
    pub hour_of_day: u8,
    /// Day of week, 0 (Sunday) - 6 (Saturday).
    pub day_of_week: u8,
}

impl DeliveryTime {
    /// Creates a new instance of `DeliveryTime`. Values are not validated.
    pub fn new(hour_of_day: u8, day_of_week: u8) -> Self {
        Self { hour_of_day, day_of_week }
    }

    /// Returns true if delivery falls on Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.day_of_week == SUNDAY || self.day_of_week == SATURDAY
    }

    /// Returns true if delivery falls on Monday - Friday.
    pub fn is_weekday(&self) -> bool {
        (SUNDAY + 1..SATURDAY).contains(&self.day_of_week)
    }
}

/// Represents a range of hours `[start, end)`. When `start` is greater than `end`, the window wraps
/// around midnight, e.g. `20..6` covers the night.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HourWindow {
    /// The first hour included into the window.
    pub start: u8,
    /// The first hour after the window.
    pub end: u8,
}

impl HourWindow {
    /// Creates a new instance of `HourWindow`.
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Checks whether hour of given time is within the window.
    pub fn contains(&self, time: &DeliveryTime) -> bool {
        let hour = time.hour_of_day;

        if self.start <= self.end {
            hour >= self.start && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}
