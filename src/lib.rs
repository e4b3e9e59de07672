// ABOUTME: Library crate for sos2a exposing the wizard, models, and store for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
pub mod storage;
