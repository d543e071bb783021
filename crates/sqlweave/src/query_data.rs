//! The positional-parameter buffer every clause serializes into.

use sqlweave_config::{RenderConfig, DEFAULT_MAX_ARGUMENTS};

use crate::{
    error::{BuildError, Result},
    value::Value,
};

/// Accumulates SQL text and the values bound to its placeholders.
///
/// One buffer is used per top-level serialization. Placeholders are numbered
/// by position: the `N`-th bound value is referenced as `$N`.
#[derive(Debug)]
pub struct QueryData {
    buff: String,
    args: Vec<Value>,
    line_separator: String,
    max_arguments: usize,
    debug: bool,
}

impl Default for QueryData {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryData {
    pub fn new() -> Self {
        Self {
            buff: String::new(),
            args: Vec::new(),
            line_separator: "\n".to_string(),
            max_arguments: DEFAULT_MAX_ARGUMENTS,
            debug: false,
        }
    }

    pub fn with_config(config: &RenderConfig) -> Self {
        Self {
            line_separator: config.line_separator.clone(),
            max_arguments: config.max_arguments,
            ..Self::new()
        }
    }

    /// A buffer that renders bound values inline instead of as placeholders.
    pub fn debug() -> Self {
        Self {
            debug: true,
            ..Self::new()
        }
    }

    /// Appends `text` verbatim. No escaping is performed.
    pub fn write_string(&mut self, text: &str) {
        self.buff.push_str(text);
    }

    /// Appends the clause separator.
    pub fn next_line(&mut self) {
        self.buff.push_str(&self.line_separator);
    }

    /// Records `value` and returns the placeholder text referencing it.
    ///
    /// This is the only path that produces a placeholder.
    pub fn bind_value(&mut self, value: Value) -> String {
        let placeholder = if self.debug {
            value.to_sql_literal()
        } else {
            format!("${}", self.args.len() + 1)
        };
        self.args.push(value);
        placeholder
    }

    /// Binds `value` and writes its placeholder.
    pub fn write_value(&mut self, value: Value) {
        let placeholder = self.bind_value(value);
        self.write_string(&placeholder);
    }

    /// Text written so far.
    pub fn sql(&self) -> &str {
        &self.buff
    }

    /// Values bound so far, in placeholder order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Number the next bound value will receive.
    pub fn next_index(&self) -> usize {
        self.args.len() + 1
    }

    pub fn finish(self) -> Result<(String, Vec<Value>)> {
        if self.args.len() > self.max_arguments {
            return Err(BuildError::TooManyArguments {
                count: self.args.len(),
                max: self.max_arguments,
            });
        }
        Ok((self.buff, self.args))
    }
}
