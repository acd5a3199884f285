//! Reports how many channels a Mattermost user belongs to, broken out per
//! team, plus the number of direct-message channels.
//!
//! The run is a single pass over the Mattermost REST API (v4):
//!
//! 1. look the user up by username,
//! 2. list the teams the user is a member of,
//! 3. list the user's channels in each team and count them,
//!
//! and then print a summary. Direct-message channels are not tied to a team,
//! so they are counted once (from the first team) and reported on their own
//! line.
//!
//! ```bash
//! mm-channel-count --url chat.example.com --token "$TOKEN" --user jdoe
//! ```
//!
//! Every connection flag can also be supplied through the environment:
//! `MM_URL`, `MM_PORT`, `MM_SCHEME`, `MM_TOKEN`, `MM_USER` and `MM_DEBUG`.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod report;
