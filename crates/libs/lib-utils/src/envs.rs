//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get and parse an environment variable, using `default` when it is unset.
///
/// A variable that is set but does not parse is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} must be set in environment"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_falls_back_to_default() {
        let value: u16 = get_env_parse_or("LIB_UTILS_TEST_UNSET_VARIABLE", 50).unwrap();
        assert_eq!(value, 50);
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET_VARIABLE", "fallback"), "fallback");
    }

    #[test]
    fn test_wrong_format_is_reported() {
        env::set_var("LIB_UTILS_TEST_BAD_NUMBER", "fifty");
        let result = get_env_parse_or::<u16>("LIB_UTILS_TEST_BAD_NUMBER", 50);
        assert_eq!(result, Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_NUMBER")));
    }
}
