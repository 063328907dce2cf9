//! # Storefront WhatsApp Bot
//!
//! A webhook-driven menu bot: inbound messages and button taps arrive on an
//! HTTP callback, are routed by the identifier they carry, and are answered
//! with text, button and list messages through the WhatsApp Cloud API.

pub mod bot;
pub mod catalog;
pub mod config;
pub mod gateway;
pub mod localization;
pub mod reply;
pub mod telemetry;
pub mod webhook;
