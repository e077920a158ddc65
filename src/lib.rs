//! Pesisir Intake - Conversational intake service for coastal disaster reports.
//!
//! Turns free-text citizen messages into classified incident reports with
//! templated guidance, and escalates messages that indicate an active
//! emergency through a notification boundary.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
