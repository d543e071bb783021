use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("TOML deserialization error: {0}")]
    #[diagnostic(
        code(sqlweave_config::toml_deserialize),
        help("Check your sqlweave.toml syntax and structure")
    )]
    TomlDeError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    #[diagnostic(
        code(sqlweave_config::toml_serialize),
        help("Check your configuration structure for invalid values")
    )]
    TomlSerError(#[from] toml::ser::Error),

    #[error("Line separator must not be empty")]
    #[diagnostic(
        code(sqlweave_config::empty_line_separator),
        help("Use \" \" to render statements on a single line")
    )]
    EmptyLineSeparator,

    #[error("Argument limit must be greater than zero")]
    #[diagnostic(
        code(sqlweave_config::zero_max_arguments),
        help("Remove `max_arguments` to use the PostgreSQL limit of 65535")
    )]
    ZeroMaxArguments,

    #[error("IO error: {0}")]
    #[diagnostic(code(sqlweave_config::io))]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
