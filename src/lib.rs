//! Wrapper around the `ipset` command line utility.
//!
//! Each method of [`IPSet`] runs the binary once, synchronously, with a
//! discrete argument vector (no shell). See <http://ipset.netfilter.org/>.

#[macro_use]
extern crate lazy_static;

pub mod command;
pub mod config;
pub mod error;
pub mod invocation;
pub mod listing;
pub mod myipset;

pub use command::SetCommand;
pub use config::Config;
pub use error::{ConfigError, Error};
pub use invocation::Invocation;
pub use listing::Listing;
pub use myipset::{IPSet, TestOutcome};
