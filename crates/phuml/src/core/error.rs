//! Core error types for diagram generation
//!
//! This module defines the error type returned by every fallible operation in
//! the pipeline, from building the definition model to printing the digraph.

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, PhumlError>;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum PhumlError {
    #[error("Invalid name: '{name}'")]
    InvalidName { name: String },

    #[error("Invalid visibility modifier: '{value}' (expected public, protected or private)")]
    InvalidVisibility { value: String },

    #[error("Duplicate definition: '{name}' is declared more than once")]
    DuplicateDefinition { name: String },

    #[error("Missing collaborator: no {collaborator} was provided")]
    MissingCollaborator { collaborator: String },

    #[error("Template error: {source}")]
    Template {
        #[from]
        source: minijinja::Error,
    },

    #[error("Input error: {source}")]
    Input {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PhumlError {
    /// Create a new invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create a new invalid visibility error
    pub fn invalid_visibility(value: impl Into<String>) -> Self {
        Self::InvalidVisibility {
            value: value.into(),
        }
    }

    /// Create a new duplicate definition error
    pub fn duplicate_definition(name: impl Into<String>) -> Self {
        Self::DuplicateDefinition { name: name.into() }
    }

    /// Create a new missing collaborator error
    pub fn missing_collaborator(collaborator: impl Into<String>) -> Self {
        Self::MissingCollaborator {
            collaborator: collaborator.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name() {
        let error = PhumlError::invalid_name("Foo Bar");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Invalid name"));
        assert!(error_msg.contains("Foo Bar"));
    }

    #[test]
    fn test_invalid_visibility() {
        let error = PhumlError::invalid_visibility("internal");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Invalid visibility"));
        assert!(error_msg.contains("internal"));
    }

    #[test]
    fn test_duplicate_definition() {
        let error = PhumlError::duplicate_definition("User");
        assert!(error.to_string().contains("'User' is declared more than once"));
    }

    #[test]
    fn test_missing_collaborator() {
        let error = PhumlError::missing_collaborator("digraph processor");
        assert_eq!(
            error.to_string(),
            "Missing collaborator: no digraph processor was provided"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error: PhumlError = json_err.into();
        assert!(error.to_string().contains("Input error"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: PhumlError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
