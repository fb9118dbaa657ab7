//! Module with the generator configuration types.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, RexgenError, RexgenErrorKind};

/// The option set of the emitted scanner.
///
/// All options default to `false`. The specification reader builds the option set from the
/// recognized option names while reading the grammar and passes it into the compile call as
/// part of the [`GeneratorConfig`]. The generator itself never mutates options.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Trace every produced token on stderr.
    pub debug: bool,
    /// Install the auto-dispatch parse loop that forwards every token to a handler.
    pub do_parse: bool,
    /// Maintain a 1-based line counter, incremented once per `next_token` call when the
    /// next unconsumed character is a newline.
    pub lineno: bool,
    /// Emit a standalone smoke-test entry point into the generated unit.
    pub stub: bool,
}

impl ScannerOptions {
    /// Creates an option set with all options off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the option with the given name.
    ///
    /// The recognized names are `debug`, `do_parse`, `lineno` and `stub`. Any other name is
    /// rejected with [`RexgenErrorKind::UnknownOption`].
    pub fn set(&mut self, name: &str) -> Result<()> {
        match name {
            "debug" => self.debug = true,
            "do_parse" => self.do_parse = true,
            "lineno" => self.lineno = true,
            "stub" => self.stub = true,
            _ => {
                return Err(RexgenError::new(RexgenErrorKind::UnknownOption(
                    name.to_string(),
                )))
            }
        }
        Ok(())
    }
}

/// The configuration of one compile call.
///
/// The configuration is an explicit immutable value handed to [`crate::generate`] next to
/// the model. It carries no state of its own across calls.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// The option set of the emitted scanner.
    pub options: ScannerOptions,
    /// The name of the specification source file, mentioned in the generated-file banner
    /// when present.
    pub source_file: Option<String>,
}

impl GeneratorConfig {
    /// Creates a configuration with default options and no source file name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the option set.
    pub fn with_options(mut self, options: ScannerOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the specification source file name for the banner.
    pub fn with_source_file(mut self, source_file: &str) -> Self {
        self.source_file = Some(source_file.to_string());
        self
    }
}
