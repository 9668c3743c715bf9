//! # Welcome Animation
//!
//! A tick-driven state machine that plays someone editing an address bar:
//! type the domain, jump home, prepend the prefix, jump to the end, delete
//! everything, start over.
//!
//! ```text
//! InitialBlink → TypingDomain → BlinkFirst → CursorHome → Prepend
//!      → PauseAfterPrepend → BlinkSecond → CursorEnd → Delete → Restart
//!                    ▲                                            │
//!                    └────────────────────────────────────────────┘
//! ```
//!
//! Nothing here reads a clock. The event loop calls [`AnimationDriver::advance`]
//! once per tick and [`AnimationDriver::render`] whenever it draws.

/// Default text typed first.
pub const DEFAULT_DOMAIN: &str = "termfolio.dev";
/// Default text typed in front of the domain.
pub const DEFAULT_PREFIX: &str = "Mohamed.Gacha@";

/// Glyph drawn for a visible trailing cursor.
pub const CURSOR_GLYPH: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimPhase {
    InitialBlink,
    TypingDomain,
    BlinkFirst,
    CursorHome,
    Prepend,
    PauseAfterPrepend,
    BlinkSecond,
    CursorEnd,
    Delete,
    Restart,
}

/// Phase durations, all counted in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    /// Ticks between cursor visibility toggles while blinking.
    pub blink_interval: u32,
    /// Length of the very first blink before anything is typed.
    pub initial_blink: u32,
    /// Length of each blinking phase.
    pub blink_duration: u32,
    /// Pause after a cursor jump (hands moving between keys).
    pub hand_move_pause: u32,
    /// Pause on the empty line before typing again.
    pub restart_pause: u32,
    /// Characters removed per tick while deleting.
    pub delete_rate: usize,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            blink_interval: 10,
            initial_blink: 12,
            blink_duration: 62,
            hand_move_pause: 10,
            restart_pause: 8,
            delete_rate: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub phase: AnimPhase,
    pub ticks_in_phase: u32,
    /// Logical cursor column, in chars.
    pub cursor_position: usize,
    pub cursor_visible: bool,
}

impl AnimationState {
    pub fn initial() -> Self {
        Self {
            phase: AnimPhase::InitialBlink,
            ticks_in_phase: 0,
            cursor_position: 0,
            cursor_visible: true,
        }
    }

    fn enter(&mut self, phase: AnimPhase) {
        self.phase = phase;
        self.ticks_in_phase = 0;
        self.cursor_visible = true;
    }
}

/// How the cursor is drawn in a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Appended after the typed text.
    Trailing { visible: bool },
    /// Drawn on top of an existing character (block cursor).
    Over { ch: char, visible: bool },
}

/// One rendered animation frame: `typed`, then the cursor, then `rest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedLine {
    pub typed: String,
    pub cursor: Cursor,
    pub rest: String,
}

impl AnimatedLine {
    /// Column the cursor occupies, in chars from the start of the line.
    pub fn cursor_column(&self) -> usize {
        self.typed.chars().count()
    }

    /// Plain-text form, with the trailing cursor as [`CURSOR_GLYPH`] or a space.
    pub fn to_plain(&self) -> String {
        let mut out = self.typed.clone();
        match self.cursor {
            Cursor::Trailing { visible: true } => out.push(CURSOR_GLYPH),
            Cursor::Trailing { visible: false } => out.push(' '),
            Cursor::Over { ch, .. } => out.push(ch),
        }
        out.push_str(&self.rest);
        out
    }
}

pub struct AnimationDriver {
    domain: String,
    prefix: String,
    timing: AnimationTiming,
    state: AnimationState,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN, DEFAULT_PREFIX, AnimationTiming::default())
    }
}

impl AnimationDriver {
    pub fn new(domain: impl Into<String>, prefix: impl Into<String>, timing: AnimationTiming) -> Self {
        Self {
            domain: domain.into(),
            prefix: prefix.into(),
            timing,
            state: AnimationState::initial(),
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn domain_len(&self) -> usize {
        self.domain.chars().count()
    }

    fn prefix_len(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Upper bound of the cursor position: prefix and domain fully typed.
    pub fn full_len(&self) -> usize {
        self.prefix_len() + self.domain_len()
    }

    fn blink(&mut self) {
        let interval = self.timing.blink_interval.max(1);
        if self.state.ticks_in_phase % interval == 0 {
            self.state.cursor_visible = !self.state.cursor_visible;
        }
    }

    /// Advance the animation by one tick.
    pub fn advance(&mut self) {
        let timing = self.timing;
        self.state.ticks_in_phase += 1;

        match self.state.phase {
            AnimPhase::InitialBlink => {
                self.blink();
                if self.state.ticks_in_phase >= timing.initial_blink {
                    self.state.enter(AnimPhase::TypingDomain);
                    self.state.cursor_position = 0;
                }
            }
            AnimPhase::TypingDomain => {
                let len = self.domain_len();
                if self.state.cursor_position < len {
                    self.state.cursor_position += 1;
                    self.state.cursor_visible = true;
                }
                if self.state.cursor_position >= len {
                    self.state.enter(AnimPhase::BlinkFirst);
                }
            }
            AnimPhase::BlinkFirst => {
                self.blink();
                if self.state.ticks_in_phase >= timing.blink_duration {
                    self.state.enter(AnimPhase::CursorHome);
                    self.state.cursor_position = 0;
                }
            }
            AnimPhase::CursorHome => {
                if self.state.ticks_in_phase >= timing.hand_move_pause {
                    self.state.enter(AnimPhase::Prepend);
                    self.state.cursor_position = 0;
                }
            }
            AnimPhase::Prepend => {
                let len = self.prefix_len();
                if self.state.cursor_position < len {
                    self.state.cursor_position += 1;
                    self.state.cursor_visible = true;
                }
                if self.state.cursor_position >= len {
                    self.state.enter(AnimPhase::PauseAfterPrepend);
                }
            }
            AnimPhase::PauseAfterPrepend => {
                if self.state.ticks_in_phase >= timing.hand_move_pause {
                    self.state.enter(AnimPhase::BlinkSecond);
                }
            }
            AnimPhase::BlinkSecond => {
                self.blink();
                if self.state.ticks_in_phase >= timing.blink_duration {
                    self.state.enter(AnimPhase::CursorEnd);
                    self.state.cursor_position = self.full_len();
                }
            }
            AnimPhase::CursorEnd => {
                if self.state.ticks_in_phase >= timing.hand_move_pause {
                    self.state.enter(AnimPhase::Delete);
                }
            }
            AnimPhase::Delete => {
                self.state.cursor_position = self
                    .state
                    .cursor_position
                    .saturating_sub(timing.delete_rate.max(1));
                if self.state.cursor_position == 0 {
                    // Position stays at 0; Restart owns the reset.
                    self.state.phase = AnimPhase::Restart;
                    self.state.ticks_in_phase = 0;
                }
            }
            AnimPhase::Restart => {
                if self.state.ticks_in_phase >= timing.restart_pause {
                    self.state.enter(AnimPhase::TypingDomain);
                    self.state.cursor_position = 0;
                }
            }
        }
    }

    /// Render the current frame. Pure; call as often as needed.
    pub fn render(&self) -> AnimatedLine {
        let visible = self.state.cursor_visible;
        let pos = self.state.cursor_position;
        let trailing = Cursor::Trailing { visible };

        let head = self.domain.chars().next().unwrap_or(' ');
        let tail: String = self.domain.chars().skip(1).chain([' ']).collect();
        let over = Cursor::Over { ch: head, visible };

        let full = || format!("{}{}", self.prefix, self.domain);

        let (typed, cursor, rest) = match self.state.phase {
            AnimPhase::InitialBlink | AnimPhase::Restart => (String::new(), trailing, String::new()),
            AnimPhase::TypingDomain => (take_chars(&self.domain, pos), trailing, String::new()),
            AnimPhase::BlinkFirst => (self.domain.clone(), trailing, String::new()),
            AnimPhase::CursorHome => (String::new(), over, tail),
            AnimPhase::Prepend => (take_chars(&self.prefix, pos), over, tail),
            AnimPhase::PauseAfterPrepend => (self.prefix.clone(), over, tail),
            AnimPhase::BlinkSecond | AnimPhase::CursorEnd => (full(), trailing, String::new()),
            AnimPhase::Delete => (take_chars(&full(), pos), trailing, String::new()),
        };

        AnimatedLine { typed, cursor, rest }
    }
}

fn take_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}
