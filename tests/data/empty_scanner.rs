// This file is automatically generated. Do not modify it.
// Generated by: rexgen version 0.3.0.

static PATTERNS: &[&str] = &[];

/// Error raised by the generated scanner.
#[derive(Debug)]
pub enum ScanError {
    /// No visible rule matched at the current position.
    UnmatchedInput {
        /// The active state at the failure position.
        state: Option<String>,
        /// The unconsumed remainder of the input.
        rest: String,
    },
    /// The active state has no dispatch block.
    UndefinedState {
        /// The offending state value.
        state: String,
    },
    /// An action produced a token that is not a sequence of at least two elements.
    MalformedToken {
        /// The offending token.
        token: Vec<String>,
    },
    /// Reading an input resource failed.
    Io(std::io::Error),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::UnmatchedInput { state, rest } => {
                write!(f, "can not match ({:?}): {:?}", state, rest)
            }
            ScanError::UndefinedState { state } => write!(f, "undefined state: {:?}", state),
            ScanError::MalformedToken { token } => write!(f, "bad lexical result: {:?}", token),
            ScanError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

/// Generated scanner. Matching is delegated to the `regex` crate; every pattern is
/// anchored at the current cursor and the first declared rule that matches wins.
pub struct EmptyScanner {
    /// Current line number, 1-based.
    pub lineno: usize,
    /// Name of the resource currently being scanned.
    pub filename: Option<String>,
    /// The active scan state. `None` is the default state.
    pub state: Option<String>,
    input: String,
    pos: usize,
    captures: Vec<Option<String>>,
    patterns: Vec<regex::Regex>,
}

impl Default for EmptyScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl EmptyScanner {
    /// Creates a scanner with a reset line counter and the default state active.
    pub fn new() -> Self {
        let patterns = PATTERNS
            .iter()
            .map(|pattern| {
                regex::Regex::new(&format!("\\A(?:{})", pattern))
                    .expect("invalid pattern in scanner definition")
            })
            .collect();
        EmptyScanner {
            lineno: 1,
            filename: None,
            state: None,
            input: String::new(),
            pos: 0,
            captures: Vec::new(),
            patterns,
        }
    }

    /// Scans `input` from the beginning, dispatching every token via `do_parse`.
    pub fn parse(&mut self, input: &str) -> Result<(), ScanError> {
        self.read_input(input);
        self.do_parse()
    }

    /// Reads the resource at `path` and parses its contents.
    pub fn parse_file(&mut self, path: &str) -> Result<(), ScanError> {
        self.filename = Some(path.to_string());
        let input = std::fs::read_to_string(path)?;
        self.parse(&input)
    }

    fn read_input(&mut self, input: &str) {
        self.input = input.to_string();
        self.pos = 0;
        self.lineno = 1;
    }

    fn eos(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn scan(&mut self, index: usize) -> Option<String> {
        let captures = self.patterns[index].captures(&self.input[self.pos..])?;
        let whole = captures.get(0)?;
        self.captures = (1..captures.len().min(10))
            .map(|i| captures.get(i).map(|group| group.as_str().to_string()))
            .collect();
        self.pos += whole.end();
        Some(whole.as_str().to_string())
    }

    /// Capture groups of the most recent match, with trailing empty captures removed.
    #[allow(dead_code)]
    fn matches(&self) -> Vec<Option<String>> {
        let mut matches = self.captures.clone();
        while matches.last().is_some_and(|group| group.is_none()) {
            matches.pop();
        }
        matches
    }

    /// Returns the next token, or `None` when the input is exhausted.
    ///
    /// A token whose kind is `state` switches the active state; an empty state name
    /// selects the default state.
    #[allow(unused_variables)]
    pub fn next_token(&mut self) -> Result<Option<Vec<String>>, ScanError> {

        let mut token: Option<Vec<String>> = None;

        while !self.eos() && token.is_none() {
            token = match self.state.as_deref() {
                None => {
                    return Err(ScanError::UnmatchedInput {
                        state: self.state.clone(),
                        rest: self.rest().to_string(),
                    });
                }
                Some(state) => {
                    return Err(ScanError::UndefinedState {
                        state: state.to_string(),
                    });
                }
            };
        }

        if let Some(token) = &token {
            if token.len() < 2 {
                return Err(ScanError::MalformedToken {
                    token: token.clone(),
                });
            }
            if token[0] == "state" {
                let target = &token[token.len() - 1];
                self.state = if target.is_empty() {
                    None
                } else {
                    Some(target.clone())
                };
            }
        }

        Ok(token)
    }
    fn do_parse(&mut self) -> Result<(), ScanError> {
        while self.next_token()?.is_some() {}
        Ok(())
    }
}
