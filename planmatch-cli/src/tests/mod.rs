//! Shared test harness modules for the planmatch CLI.

use super::*;

mod helpers;
mod unit;
