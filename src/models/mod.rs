//! Scheduling domain models.
//!
//! Provides the data types the engine reads and returns. Dates are
//! day-granularity; there is no time-of-day or timezone component.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | `Activity` | One row: id, name, PREP date, GO date |
//! | `ActivityCollection` | Ordered snapshot of activities |
//! | `CalendarDate` | Typed day-first date |
//! | `SchedulingPolicy` | Weekend/holiday acceptance toggles |
//! | `HolidayFact` | Named holiday on a date, per jurisdiction |

mod activity;
mod calendar_date;
mod collection;
mod holiday;
mod policy;

pub use activity::Activity;
pub use calendar_date::{CalendarDate, DAY_FIRST_FORMAT, ISO_FORMAT};
pub use collection::ActivityCollection;
pub use holiday::{HolidayFact, ALL_JURISDICTIONS};
pub use policy::SchedulingPolicy;
