//! Server-rendered roster pages: a landing page, a player listing and a
//! validated create-player form, all backed by an in-process record store.

pub mod config;
pub mod http;
pub mod roster;
pub mod view;
