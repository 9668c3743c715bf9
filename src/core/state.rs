//! # Application State
//!
//! Everything the event loop owns, in one place. No terminal types here.
//!
//! ```text
//! App
//! ├── screen: Screen                // which half of the state is live
//! ├── animation: AnimationDriver    // welcome screen
//! ├── view: ViewModel               // portfolio screen, passed by value to the compositor
//! └── max_scroll: usize             // bound reported by the last portfolio render
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::animation::{AnimationDriver, AnimationTiming};
use crate::core::config::ResolvedConfig;
use crate::core::i18n::{self, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Portfolio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Experience,
    Education,
    Projects,
    Skills,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Experience, Tab::Education, Tab::Projects, Tab::Skills];

    pub fn index(self) -> usize {
        match self {
            Tab::Experience => 0,
            Tab::Education => 1,
            Tab::Projects => 2,
            Tab::Skills => 3,
        }
    }

    /// Tab at `index`, clamped to the last tab.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Previous tab; stays put on the first one.
    pub fn previous(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    /// Next tab; stays put on the last one.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn title(self, lang: Language) -> &'static str {
        let key = match self {
            Tab::Experience => "exp_title",
            Tab::Education => "edu_title",
            Tab::Projects => "proj_title",
            Tab::Skills => "skills_title",
        };
        i18n::t(lang, key)
    }
}

/// Portfolio screen inputs for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModel {
    pub width: u16,
    pub height: u16,
    pub tab: Tab,
    pub scroll: usize,
    pub language: Language,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            tab: Tab::Experience,
            scroll: 0,
            language: Language::default(),
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub animation: AnimationDriver,
    pub view: ViewModel,
    /// Largest scroll offset the last portfolio render allowed.
    pub max_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            animation: AnimationDriver::default(),
            view: ViewModel::default(),
            max_scroll: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let screen = if config.skip_welcome {
            Screen::Portfolio
        } else {
            Screen::Welcome
        };
        Self {
            screen,
            animation: AnimationDriver::new(
                config.domain.clone(),
                config.prefix.clone(),
                AnimationTiming::default(),
            ),
            view: ViewModel {
                language: config.language,
                ..ViewModel::default()
            },
            max_scroll: 0,
        }
    }
}
