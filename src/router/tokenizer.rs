#![forbid(unsafe_code)]

//! Turns raw process arguments into something the matcher can use
//!
//! Two views over the same arguments:
//! - [`tokenize`] joins every non-flag token into one sub-command phrase and
//!   notes whether `-h`/`--help` appeared. This drives dispatch.
//! - [`segments`] cuts the arguments at every flag so a handler can read the
//!   words that follow a flag such as `--name alice bob`.
//!
//! Empty tokens are skipped by both.

/// Short and long help flags
pub const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// Whole-phrase view of the arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    /// Non-flag tokens joined by single spaces
    pub phrase: String,
    /// `-h` or `--help` was present
    pub help_requested: bool,
}

/// Builds the sub-command phrase
///
/// Flags other than the help flags are left out of the phrase; they remain
/// reachable through the request view.
pub fn tokenize<S: AsRef<str>>(args: &[S]) -> CommandLine {
    let mut words: Vec<&str> = Vec::new();
    let mut help_requested = false;

    for arg in args {
        let arg = arg.as_ref();
        if arg.is_empty() {
            continue;
        }

        if HELP_FLAGS.contains(&arg) {
            help_requested = true;
            continue;
        }

        if !arg.starts_with('-') {
            words.push(arg);
        }
    }

    CommandLine {
        phrase: words.join(" "),
        help_requested,
    }
}

/// Kind of flag that opens a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// `-x`
    Short,
    /// `--x`
    Long,
}

/// A run of arguments that starts either at the beginning or at a flag
///
/// Tokens are kept as given, so an argument containing spaces stays one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    tokens: Vec<String>,
    text: String,
}

impl Segment {
    fn new(tokens: Vec<String>) -> Self {
        let text = tokens.join(" ");
        Segment { tokens, text }
    }

    /// Space-joined tokens of this segment, flag included
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn flag(&self) -> Option<FlagKind> {
        let first = self.tokens.first()?;
        if first.starts_with("--") {
            Some(FlagKind::Long)
        } else if first.starts_with('-') {
            Some(FlagKind::Short)
        } else {
            None
        }
    }

    /// First token with leading dashes removed
    pub fn name(&self) -> &str {
        self.tokens
            .first()
            .map(|first| first.trim_start_matches('-'))
            .unwrap_or_default()
    }

    /// Tokens after the first one
    pub fn trailing(&self) -> Vec<&str> {
        self.tokens.iter().skip(1).map(String::as_str).collect()
    }
}

/// Splits the arguments into segments, starting a new one at each flag
pub fn segments<S: AsRef<str>>(args: &[S]) -> Vec<Segment> {
    let mut result = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if arg.is_empty() {
            continue;
        }

        if arg.starts_with('-') && !buffer.is_empty() {
            result.push(Segment::new(std::mem::take(&mut buffer)));
        }

        buffer.push(arg.to_string());
    }

    if !buffer.is_empty() {
        result.push(Segment::new(buffer));
    }

    result
}
