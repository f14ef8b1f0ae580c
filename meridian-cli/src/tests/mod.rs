//! Shared test harness modules for the Meridian CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::solve::*;

mod helpers;
mod solve_steps;
