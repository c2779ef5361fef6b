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

//! Chart font discovery.
//!
//! plotters draws text through a registered TrueType font. The font is
//! either given explicitly or found in a handful of well-known system
//! locations. Without one, charts are still rendered but carry no text.

use crate::error::{ReportError, Result};
use plotters::style::{register_font, FontStyle};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing::{debug, info, warn};

/// Font family name charts request.
pub const FAMILY: &str = "sans-serif";

/// Tried in order when no font is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// The font charts are drawn with, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typeface {
    source: Option<PathBuf>,
}

impl Typeface {
    /// Registers a chart font.
    ///
    /// An explicit path must load; a failure is fatal. Without one, system
    /// locations are tried and the first usable font wins.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            install(path)?;
            info!(font = %path.display(), "using configured chart font");
            return Ok(Self {
                source: Some(path.to_path_buf()),
            });
        }

        for candidate in SYSTEM_FONT_CANDIDATES {
            let path = Path::new(candidate);
            if !path.is_file() {
                continue;
            }
            match install(path) {
                Ok(()) => {
                    debug!(font = %path.display(), "using system chart font");
                    return Ok(Self {
                        source: Some(path.to_path_buf()),
                    });
                }
                Err(e) => warn!(error = %e, "skipping unusable system font"),
            }
        }

        warn!("no TrueType font found; charts will be rendered without text");
        Ok(Self::without_text())
    }

    /// A typeface that draws no text.
    pub fn without_text() -> Self {
        Self { source: None }
    }

    pub fn has_text(&self) -> bool {
        self.source.is_some()
    }

    /// The font file in use.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Font files read so far, keyed by path. plotters keeps registered fonts
/// for the life of the process, so each file is read and leaked once.
fn font_cache() -> &'static Mutex<HashMap<PathBuf, &'static [u8]>> {
    static CACHE: OnceLock<Mutex<HashMap<PathBuf, &'static [u8]>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn font_bytes(path: &Path) -> Result<&'static [u8]> {
    let mut cache = font_cache().lock().unwrap_or_else(|e| e.into_inner());
    if let Some(bytes) = cache.get(path) {
        return Ok(bytes);
    }
    let bytes = fs::read(path).map_err(|e| ReportError::Font {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    cache.insert(path.to_path_buf(), bytes);
    Ok(bytes)
}

fn install(path: &Path) -> Result<()> {
    let bytes = font_bytes(path)?;

    for style in [FontStyle::Normal, FontStyle::Bold] {
        register_font(FAMILY, style, bytes).map_err(|_| ReportError::Font {
            path: path.to_path_buf(),
            message: "not a valid TrueType or OpenType font".to_string(),
        })?;
    }
    Ok(())
}
