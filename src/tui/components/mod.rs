//! # TUI Components
//!
//! One component per screen:
//! - `WelcomeScreen`: the typing animation and the "press any key" hint
//! - `PortfolioScreen`: the bordered two-panel frame built by `tui::frame`
//!
//! Both are stateless and receive everything as props; they are rebuilt on
//! every draw from the current `App`.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── welcome.rs    (animation line + hint)
//! └── portfolio.rs  (composed frame + measured scroll bound)
//! ```

pub mod portfolio;
pub mod welcome;

pub use portfolio::PortfolioScreen;
pub use welcome::WelcomeScreen;
