//! One interactive drill: generate, present, wait for a response.

use std::io::{BufRead, Write};

use dd_core::{Briefing, DrillResult, Sampler, Settings};
use dd_narrator::Narrator;

/// Terminal escape that clears the screen.
pub const CLEAR_SCREEN: &str = "\x1bc";

/// Question asked once the briefing has been shown.
pub const PROMPT: &str = "How would you command these personnel and resources in this scenario?";

/// Where a session is in its single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Records are being generated.
    Generating,
    /// The briefing is being written.
    Presenting,
    /// Waiting for the player's response.
    AwaitingInput,
    /// The response was read; the session is over.
    Done,
}

/// Drives a single drill from generation to the player's response.
pub struct Session<'a, S> {
    settings: &'a Settings,
    sampler: S,
    narrator: Narrator,
    clear_screen: bool,
    state: SessionState,
}

impl<'a, S: Sampler> Session<'a, S> {
    /// Create a session over loaded settings.
    pub fn new(settings: &'a Settings, sampler: S, narrator: Narrator) -> Self {
        Self {
            settings,
            sampler,
            narrator,
            clear_screen: true,
            state: SessionState::Generating,
        }
    }

    /// Whether to emit the clear-screen escape before the briefing.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session to completion.
    ///
    /// The full briefing is generated and rendered before anything is
    /// written, so a generation error leaves `output` untouched. The
    /// response line is read and discarded; end of input counts as an
    /// empty response.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> DrillResult<()> {
        let briefing = Briefing::generate(self.settings, &mut self.sampler)?;
        let text = self.narrator.render_briefing(&briefing);
        self.state = SessionState::Presenting;

        if self.clear_screen {
            write!(output, "{CLEAR_SCREEN}")?;
        }
        write!(output, "{text}")?;
        writeln!(output, "{PROMPT}")?;
        output.flush()?;
        self.state = SessionState::AwaitingInput;

        let mut response = String::new();
        let read = input.read_line(&mut response)?;
        tracing::debug!(bytes = read, "response received");
        self.state = SessionState::Done;

        Ok(())
    }
}
