//! Banana Bot Library
//!
//! Configuration layer for a Telegram bot that generates images with
//! Google Gemini.
//!
//! This crate provides the startup functionality for:
//! - Loading environment variables from an optional `.env` file
//! - Reading and validating bot settings from the environment
//! - Initializing process-wide logging
//!
//! The Telegram and Gemini clients consume the validated
//! [`config::Settings`] value; they live outside this crate.

pub mod config;
pub mod logging;
