//! # Core Application Logic
//!
//! This module contains Termfolio's state and the welcome animation.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • AnimationDriver      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the portfolio `ViewModel`
//! - [`action`]: The `Action` enum and `update()`
//! - [`animation`]: The welcome screen typing animation
//! - [`i18n`]: English/French string tables
//! - [`config`]: Optional `~/.termfolio/config.toml`

pub mod action;
pub mod animation;
pub mod config;
pub mod i18n;
pub mod state;
