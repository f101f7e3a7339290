//! hilo-logging: NDJSON session events + session manifest.
//!
//! v1 scope: append-only NDJSON logs so a play or simulation session can be
//! reconstructed after the fact, plus a small JSON manifest holding the
//! session counters.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session manifest schema version.
pub const SESSION_MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionManifestV1 {
    pub session_manifest_version: u32,

    pub session_id: String,
    pub created_ts_ms: u64,
    pub updated_ts_ms: u64,

    // Counters.
    pub games_played: u32,
    pub wins: u32,
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

pub fn read_manifest(path: impl AsRef<Path>) -> Result<SessionManifestV1, NdjsonError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice::<SessionManifestV1>(&bytes)?)
}

pub fn write_manifest_atomic(
    path: impl AsRef<Path>,
    m: &SessionManifestV1,
) -> Result<(), NdjsonError> {
    let path = path.as_ref();
    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(m)?;
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// One event per round start.
#[derive(Debug, Clone, Serialize)]
pub struct RoundStartedEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,

    pub max_number: u32,
    pub max_attempts: u32,
}

/// One event per submitted guess, valid or not.
///
/// `kind` is one of "invalid", "continue", "win", "loss". `direction` and
/// `remaining` are only present for "continue".
#[derive(Debug, Clone, Serialize)]
pub struct GuessEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,

    pub kind: &'static str,
    pub direction: Option<&'static str>,
    pub remaining: Option<u32>,
}

/// One event per terminal outcome, written after the counters advance.
#[derive(Debug, Clone, Serialize)]
pub struct RoundEndedEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,

    pub won: bool,
    pub attempts_used: u32,
    pub secret_number: u32,

    pub games_played: u32,
    pub wins: u32,
}

#[derive(Debug)]
pub enum NdjsonError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for NdjsonError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NdjsonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl fmt::Display for NdjsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NdjsonError::Io(e) => write!(f, "io error: {e}"),
            NdjsonError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .write(true)
            .open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}
