// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Semana project*
//!
//! This crate lays a life out as weeks.  Given a date of birth and an expected
//! lifespan it generates every week of that life, and attaches to each week
//! the life entries (jobs, schooling, relationships, events) that overlap it.
//!
//! Everything here is a pure function of its inputs (plus "now", which can be
//! passed in explicitly).  Drawing the weeks is left to the caller.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod colour;
mod date;
mod entry;
mod generator;
mod grid;
mod id;
mod life_data;
mod overlap;
mod profile;
mod week;

pub use colour::*;
pub use date::*;
pub use entry::*;
pub use generator::*;
pub use grid::*;
pub use id::*;
pub use life_data::*;
pub use overlap::*;
pub use profile::*;
pub use week::*;
