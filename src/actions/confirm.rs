//! Per-file operator confirmation.
//!
//! Batch actions never read standard input directly. They ask a [`Confirm`]
//! implementation, which is [`StdinConfirm`] in the binary and a fixed or
//! scripted answer in tests.

use std::io::{self, BufRead, Write};

/// Answers accepted as "yes", compared case-insensitively.
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["o", "oui"];

/// Source of yes/no answers for per-file prompts.
pub trait Confirm {
    /// Ask the operator about one file. Returns `true` only on an explicit yes.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Whether an operator reply counts as a yes.
///
/// Surrounding whitespace is ignored; anything other than `o` or `oui`
/// (any case) is a decline, including an empty reply.
///
/// ```
/// use filesift::actions::confirm::is_affirmative;
///
/// assert!(is_affirmative("O\n"));
/// assert!(is_affirmative("Oui"));
/// assert!(!is_affirmative(""));
/// assert!(!is_affirmative("yes"));
/// ```
#[must_use]
pub fn is_affirmative(reply: &str) -> bool {
    let reply = reply.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&reply.as_str())
}

/// Interactive prompt reading one line per question.
pub struct StdinConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinConfirm<R, W> {
    /// Prompt on `output`, read replies from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl StdinConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on standard output, read from standard input.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for StdinConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if let Err(e) = write!(self.output, "{prompt} [o/N] ").and_then(|()| self.output.flush()) {
            log::warn!("Failed to write prompt: {}", e);
        }

        let mut reply = String::new();
        match self.input.read_line(&mut reply) {
            Ok(0) => {
                log::debug!("Input closed, treating as a decline");
                false
            }
            Ok(_) => is_affirmative(&reply),
            Err(e) => {
                log::warn!("Failed to read answer, treating as a decline: {}", e);
                false
            }
        }
    }
}

/// Gives the same answer to every prompt.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, prompt: &str) -> bool {
        log::trace!("Fixed answer {} for: {}", self.0, prompt);
        self.0
    }
}
