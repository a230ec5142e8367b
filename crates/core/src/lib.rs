//! # Booking Core
//!
//! Domain types and business rules for public booking pages: users, their
//! event types, weekly availability windows, and the resolver that decides
//! which working hours a booking page shows.
//!
//! Nothing in this crate talks to a database directly. Persistence is reached
//! through the [`store::BookingStore`] trait, which callers pass in explicitly.

pub mod errors;
pub mod models;
/// Working-hour resolution and public event-type listing
pub mod resolver;
/// Data store abstraction consumed by the resolver
pub mod store;
