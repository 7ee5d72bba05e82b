//! PREP/GO activity scheduling engine.
//!
//! Schedules paired PREP (preparation) and GO (execution) dates for
//! activities, steering clear of weekends, public holidays, and dates other
//! activities already occupy, and keeps `{prefix}{number}` activity ids
//! dense and date-ordered as rows are added, edited, and removed.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `ActivityCollection`,
//!   `CalendarDate`, `SchedulingPolicy`, `HolidayFact`
//! - **`dates`**: Day-first (`DD/MM/YYYY`) parsing, normalization, ordering
//! - **`calendar`**: Weekend and holiday facts, `HolidayProvider`, built-in tables
//! - **`resolver`**: Policy acceptability, PREP derivation, backward resolution
//! - **`validation`**: Candidate checks and the structured error taxonomy
//! - **`conflict`**: Date collision detection and collection health checks
//! - **`sequencer`**: Id parsing, next-number, dense renumbering
//! - **`mutator`**: Insert/update/delete/move-forward over a collection
//! - **`import`**: Building activities from importer records
//! - **`config`**: Engine configuration
//!
//! # Concurrency
//!
//! Every operation is a synchronous, pure function of its inputs: a
//! collection snapshot goes in, a new snapshot comes out. Callers sharing
//! one logical collection must serialize their mutations.

pub mod calendar;
pub mod config;
pub mod conflict;
pub mod dates;
pub mod error;
pub mod import;
pub mod models;
pub mod mutator;
pub mod resolver;
pub mod sequencer;
pub mod validation;

pub use error::EngineError;
pub use mutator::ActivityScheduler;
