//! chatdesk - platform adapters for a chat-style desktop app
//!
//! This crate provides clipboard access, a text-to-speech controller with a
//! persisted voice preference, and small presentation helpers (conditional
//! display, gradient styling, keyboard shortcuts, snapshot rendering).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (voices, utterances, clipboard images, config) and errors
//! - **Application**: Services and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, wl-clipboard, espeak-ng, rodio, TOML)
//! - **Presentation**: View tree, gradients, shortcuts and rendering (tiny-skia)
//! - **CLI**: Command-line interface and composition root

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
