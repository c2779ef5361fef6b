// Dweve treebench - B-Tree/BST benchmark report generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for report generation.
//!
//! Every stage of the report returns `Result<T, ReportError>`. None of these
//! errors are recovered from: the binary prints the message and exits.

use plotters::drawing::DrawingAreaErrorKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use treebench_csv::CsvError;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// The main error type for report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// An input table could not be read or does not match its schema.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {message}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// An output file could not be written.
    #[error("Failed to write '{path}': {message}")]
    Write {
        /// The output path
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The plotting backend failed to draw or encode an image.
    #[error("Rendering error: {message}")]
    Render {
        /// The error message
        message: String,
    },

    /// The configured chart font could not be loaded.
    #[error("Failed to load font '{path}': {message}")]
    Font {
        /// The font file path
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl ReportError {
    /// Create a directory creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an output write error.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for ReportError
where
    E: std::error::Error + Send + Sync,
{
    fn from(source: DrawingAreaErrorKind<E>) -> Self {
        Self::Render {
            message: source.to_string(),
        }
    }
}
