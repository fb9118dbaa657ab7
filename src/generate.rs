//! Module with the assembly of the emitted scanner source.
//!
//! The emitted code is built as one `String` in a single pass over the model. String-based
//! construction is deliberate: rule patterns, macro patterns and the header/inner/footer
//! fragments are foreign text that is placed structurally, never parsed, so a token-level
//! builder has nothing to offer here. [`generate_to_file`] runs the finished text through
//! a full Rust parse before it is written, which catches malformed fragments lazily.

use std::path::Path;
use std::process::Command;

use log::{debug, trace};

use crate::{
    dispatch::partition_states, rule_compiler::RuleCompiler, DispatchGroup, GeneratorConfig,
    Result, ScannerModel,
};

/// Compiles the model into the source text of one scanner unit.
///
/// The output is a complete Rust module defining a scanner struct named after the model's
/// scanner name. Compiling an unmodified model twice yields byte-identical output.
///
/// The emitted scanner delegates all pattern matching to the `regex` crate, which the
/// embedding crate of the generated file must depend on. The generator itself only decides
/// which rule's guard is tested, in what order, under which state.
pub fn generate(model: &ScannerModel, config: &GeneratorConfig) -> Result<String> {
    let name = model.scanner_name()?;
    let groups = partition_states(model)?;
    debug!(
        "Generating scanner '{}': {} rules in {} dispatch groups",
        name,
        model.rules().len(),
        groups.len()
    );

    let mut buf = String::with_capacity(4096 + model.rules().len() * 256);
    emit_banner(&mut buf, config);
    emit_header(&mut buf, model);
    emit_macros(&mut buf, model);
    emit_pattern_table(&mut buf, model);
    emit_scan_error(&mut buf);
    emit_scanner_struct(&mut buf, name);
    emit_base_impl(&mut buf, name, &groups, config);
    emit_next_token(&mut buf, model, config, &groups);
    emit_inner(&mut buf, model);
    buf.push_str("}\n");
    emit_footer(&mut buf, model);
    if config.options.stub {
        emit_stub(&mut buf, name);
    }
    Ok(buf)
}

/// Compiles the model and writes the result to `path`.
///
/// The emitted text is parsed as Rust before anything is written, so malformed user
/// fragments surface here instead of in the consumer's build. After writing, the file is
/// run through `rustfmt` on a best-effort basis.
pub fn generate_to_file(
    model: &ScannerModel,
    config: &GeneratorConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let code = generate(model, config)?;
    syn::parse_file(&code)?;
    std::fs::write(path.as_ref(), &code)?;
    if let Err(err) = try_format(path.as_ref()) {
        debug!("rustfmt was not applied: {}", err);
    }
    Ok(())
}

/// Tries to format the source code of a given file.
fn try_format(path_to_file: &Path) -> Result<()> {
    Command::new("rustfmt")
        .args([path_to_file])
        .status()
        .map(|_| ())
        .map_err(|e| std::io::Error::new(e.kind(), format!("Failed to format file: {}", e)).into())
}

/// Wraps foreign pattern text in a raw string literal with enough `#` marks to keep the
/// literal well-formed regardless of the quotes inside the text.
fn raw_string_literal(text: &str) -> String {
    let mut hashes = 0;
    while text.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }
    let guard = "#".repeat(hashes);
    format!("r{guard}\"{text}\"{guard}")
}

fn emit_banner(buf: &mut String, config: &GeneratorConfig) {
    buf.push_str("// This file is automatically generated. Do not modify it.\n");
    buf.push_str(&format!(
        "// Generated by: rexgen version {}.\n",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(source_file) = &config.source_file {
        buf.push_str(&format!("// Source: {}\n", source_file));
    }
    buf.push('\n');
}

fn emit_header(buf: &mut String, model: &ScannerModel) {
    if model.header().is_empty() {
        return;
    }
    for line in model.header() {
        buf.push_str(line);
        buf.push('\n');
    }
    buf.push('\n');
}

/// Re-emits every macro as a standalone binding, in declaration order. The bindings are
/// documentation of the specification; the rule patterns already contain the substituted
/// macro bodies.
fn emit_macros(buf: &mut String, model: &ScannerModel) {
    if model.macros().is_empty() {
        return;
    }
    for mac in model.macros() {
        buf.push_str("#[allow(dead_code)]\n");
        buf.push_str(&format!(
            "pub const {}: &str = {};\n",
            mac.name,
            raw_string_literal(&mac.pattern)
        ));
    }
    buf.push('\n');
}

/// Emits the pattern table, one entry per rule in declaration order. The rule index in the
/// model doubles as the index into this table.
fn emit_pattern_table(buf: &mut String, model: &ScannerModel) {
    if model.rules().is_empty() {
        buf.push_str("static PATTERNS: &[&str] = &[];\n\n");
        return;
    }
    buf.push_str("static PATTERNS: &[&str] = &[\n");
    for rule in model.rules() {
        trace!("Pattern table entry: {}", rule);
        buf.push_str(&format!("    {},\n", raw_string_literal(rule.pattern())));
    }
    buf.push_str("];\n\n");
}

fn emit_scan_error(buf: &mut String) {
    buf.push_str(
        r#"/// Error raised by the generated scanner.
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

"#,
    );
}

fn emit_scanner_struct(buf: &mut String, name: &str) {
    buf.push_str(&format!(
        r#"/// Generated scanner. Matching is delegated to the `regex` crate; every pattern is
/// anchored at the current cursor and the first declared rule that matches wins.
pub struct {name} {{
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
}}

impl Default for {name} {{
    fn default() -> Self {{
        Self::new()
    }}
}}

"#
    ));
}

/// Emits the impl header and the state-independent part of the scanner: construction,
/// input handling, the cursor-anchored matching primitive and the capture access.
fn emit_base_impl(buf: &mut String, name: &str, groups: &[DispatchGroup], config: &GeneratorConfig) {
    buf.push_str(&format!(
        r#"impl {name} {{
    /// Creates a scanner with a reset line counter and the default state active.
    pub fn new() -> Self {{
        let patterns = PATTERNS
            .iter()
            .map(|pattern| {{
                regex::Regex::new(&format!("\\A(?:{{}})", pattern))
                    .expect("invalid pattern in scanner definition")
            }})
            .collect();
        {name} {{
            lineno: 1,
            filename: None,
            state: None,
            input: String::new(),
            pos: 0,
            captures: Vec::new(),
            patterns,
        }}
    }}

    /// Scans `input` from the beginning, dispatching every token via `do_parse`.
    pub fn parse(&mut self, input: &str) -> Result<(), ScanError> {{
        self.read_input(input);
        self.do_parse()
    }}

    /// Reads the resource at `path` and parses its contents.
    pub fn parse_file(&mut self, path: &str) -> Result<(), ScanError> {{
        self.filename = Some(path.to_string());
        let input = std::fs::read_to_string(path)?;
        self.parse(&input)
    }}

    fn read_input(&mut self, input: &str) {{
        self.input = input.to_string();
        self.pos = 0;
        self.lineno = 1;
    }}

    fn eos(&self) -> bool {{
        self.pos >= self.input.len()
    }}

    fn rest(&self) -> &str {{
        &self.input[self.pos..]
    }}

    fn scan(&mut self, index: usize) -> Option<String> {{
        let captures = self.patterns[index].captures(&self.input[self.pos..])?;
        let whole = captures.get(0)?;
        self.captures = (1..captures.len().min(10))
            .map(|i| captures.get(i).map(|group| group.as_str().to_string()))
            .collect();
        self.pos += whole.end();
        Some(whole.as_str().to_string())
    }}

    /// Capture groups of the most recent match, with trailing empty captures removed.
    #[allow(dead_code)]
    fn matches(&self) -> Vec<Option<String>> {{
        let mut matches = self.captures.clone();
        while matches.last().is_some_and(|group| group.is_none()) {{
            matches.pop();
        }}
        matches
    }}

"#
    ));
    let has_inclusive = groups
        .iter()
        .any(|group| matches!(group, DispatchGroup::Shared { inclusive } if !inclusive.is_empty()));
    if has_inclusive {
        buf.push_str(
            r#"    fn scan_in_state(&mut self, index: usize, state: &str) -> Option<String> {
        if self.state.as_deref() == Some(state) {
            self.scan(index)
        } else {
            None
        }
    }

"#,
        );
    }
    if config.options.do_parse {
        buf.push_str(
            r#"    /// Scans until the input is exhausted, forwarding the kind and the remaining
    /// elements of every token to the `lex_token` handler.
    pub fn do_parse(&mut self) -> Result<(), ScanError> {
        while let Some(token) = self.next_token()? {
            if let Some((kind, values)) = token.split_first() {
                self.lex_token(kind, values)?;
            }
        }
        Ok(())
    }

"#,
        );
    }
}

/// Emits the `next_token` routine: start-of-call fragments, the option-guarded line
/// counter, the match loop over the dispatch groups and the post-match invariant checks.
fn emit_next_token(
    buf: &mut String,
    model: &ScannerModel,
    config: &GeneratorConfig,
    groups: &[DispatchGroup],
) {
    buf.push_str(
        r#"    /// Returns the next token, or `None` when the input is exhausted.
    ///
    /// A token whose kind is `state` switches the active state; an empty state name
    /// selects the default state.
    #[allow(unused_variables)]
    pub fn next_token(&mut self) -> Result<Option<Vec<String>>, ScanError> {
"#,
    );
    for line in model.start_code() {
        buf.push_str("        ");
        buf.push_str(line);
        buf.push('\n');
    }
    if config.options.lineno {
        // The counter is checked exactly once per call, before the match loop. A single
        // match spanning several newlines therefore advances it by at most one.
        buf.push_str(
            r#"        if self.rest().starts_with('\n') {
            self.lineno += 1;
        }
"#,
        );
    }
    buf.push_str(
        r#"
        let mut token: Option<Vec<String>> = None;

        while !self.eos() && token.is_none() {
            token = match self.state.as_deref() {
"#,
    );
    for group in groups {
        emit_dispatch_arm(buf, model, group);
    }
    buf.push_str(
        r#"                Some(state) => {
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
"#,
    );
    if config.options.debug {
        buf.push_str("        eprintln!(\"{:?} {:?}\", self.state, token);\n");
    }
    buf.push_str("\n        Ok(token)\n    }\n");
}

/// Emits one arm of the state match: the group's membership pattern, the guard chain of
/// every visible rule in declaration order, and the unmatched-input fallback.
fn emit_dispatch_arm(buf: &mut String, model: &ScannerModel, group: &DispatchGroup) {
    let arm_pattern = match group {
        DispatchGroup::Shared { inclusive } => {
            let mut pattern = "None".to_string();
            for state in inclusive {
                pattern.push_str(&format!(" | Some(\"{}\")", state));
            }
            pattern
        }
        DispatchGroup::Exclusive { state } => format!("Some(\"{}\")", state),
    };
    buf.push_str(&format!("                {} => {{\n", arm_pattern));

    let compiler = RuleCompiler::new(group);
    let mut emitted = 0;
    for (index, rule) in model.rules().iter().enumerate() {
        if compiler.compile_rule(buf, rule, index, emitted == 0) {
            trace!("Rule {} emitted into {:?}", rule, group);
            emitted += 1;
        }
    }
    if emitted > 0 {
        buf.push_str(
            r#"                    } else {
                        return Err(ScanError::UnmatchedInput {
                            state: self.state.clone(),
                            rest: self.rest().to_string(),
                        });
                    }
"#,
        );
    } else {
        buf.push_str(
            r#"                    return Err(ScanError::UnmatchedInput {
                        state: self.state.clone(),
                        rest: self.rest().to_string(),
                    });
"#,
        );
    }
    buf.push_str("                }\n");
}

fn emit_inner(buf: &mut String, model: &ScannerModel) {
    for line in model.inner() {
        buf.push_str("    ");
        buf.push_str(line);
        buf.push('\n');
    }
}

fn emit_footer(buf: &mut String, model: &ScannerModel) {
    if model.footer().is_empty() {
        return;
    }
    buf.push('\n');
    for line in model.footer() {
        buf.push_str(line);
        buf.push('\n');
    }
}

/// Emits the standalone smoke-test entry point. It scans every resource given on the
/// command line, prints the produced tokens, and on failure reports the resource name,
/// the line number and the message before exiting with a non-zero status.
fn emit_stub(buf: &mut String, name: &str) {
    buf.push_str(&format!(
        r#"
fn scan_resource(scanner: &mut {name}, path: &str) -> Result<(), ScanError> {{
    scanner.filename = Some(path.to_string());
    let input = std::fs::read_to_string(path)?;
    scanner.read_input(&input);
    while let Some(token) = scanner.next_token()? {{
        println!("{{:?}}", token);
    }}
    Ok(())
}}

fn main() {{
    for path in std::env::args().skip(1) {{
        let mut scanner = {name}::new();
        if let Err(err) = scan_resource(&mut scanner, &path) {{
            eprintln!("{{}}:{{}}:{{}}", path, scanner.lineno, err);
            std::process::exit(1);
        }}
    }}
}}
"#
    ));
}
