//! Line-oriented `go.mod` scanning.
//!
//! Only two directives matter to godock: `module <path>` and `go <version>`.
//! Each is located with an anchored `^<name>[\t\n\f\r ]+(.+)$` pattern over
//! raw line bytes; the first matching line wins and the captured value is
//! kept verbatim. Lines that are not valid UTF-8 simply never match.

use regex::bytes::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Sequential property reader over a manifest.
///
/// Lines consumed by one [`property`](Self::property) call are never
/// revisited by the next, so properties must be requested in the order
/// they appear in the file.
pub struct ManifestScanner<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> ManifestScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    /// Advance to the first line starting with `name` followed by
    /// whitespace and return the rest of that line.
    pub fn property(&mut self, name: &str) -> crate::Result<String> {
        let pattern = property_pattern(name)?;

        while self.next_line().map_err(|e| crate::Error::ManifestRead {
            property: name.to_owned(),
            source: e,
        })? {
            if let Some(value) = pattern.captures(&self.line).and_then(|caps| caps.get(1)) {
                let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
                tracing::debug!(property = name, value = %value, "matched manifest property");
                return Ok(value);
            }
        }

        Err(crate::Error::MissingProperty {
            property: name.to_owned(),
        })
    }

    /// Load the next line into `self.line` without its `\n` or `\r\n`
    /// terminator. Returns `false` at end of input.
    fn next_line(&mut self) -> std::io::Result<bool> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        if self.line.last() == Some(&b'\n') {
            self.line.pop();
        }
        if self.line.last() == Some(&b'\r') {
            self.line.pop();
        }
        Ok(true)
    }
}

// Whitespace is the ASCII set `\t \n \f \r` and space; `\v` and Unicode
// spaces do not separate a property from its value.
fn property_pattern(name: &str) -> crate::Result<Regex> {
    Regex::new(&format!(r"^{}[\t\n\f\r ]+((?-u:.)+)$", regex::escape(name))).map_err(|e| {
        crate::Error::PropertyPattern {
            property: name.to_owned(),
            source: e,
        }
    })
}

/// Last `/`-separated segment of a module path.
///
/// ```
/// assert_eq!(godock_core::module_name("example.com/foo/bar"), "bar");
/// assert_eq!(godock_core::module_name("hello"), "hello");
/// ```
pub fn module_name(module_path: &str) -> &str {
    match module_path.rsplit_once('/') {
        Some((_, name)) => name,
        None => module_path,
    }
}

/// Metadata extracted from a `go.mod` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    /// Full module path as written after `module`
    pub module_path: String,
    /// Last path segment; names the compiled binary
    pub name: String,
    /// Go language version as written after `go`
    pub go_version: String,
}

impl GoModule {
    /// Read `module` and then `go` from a manifest source.
    pub fn scan<R: BufRead>(reader: R) -> crate::Result<Self> {
        let mut scanner = ManifestScanner::new(reader);
        let module_path = scanner.property("module")?;
        let go_version = scanner.property("go")?;

        let name = module_name(&module_path);
        if name.is_empty() {
            return Err(crate::Error::EmptyModuleName { module_path });
        }

        Ok(Self {
            name: name.to_owned(),
            module_path,
            go_version,
        })
    }

    /// Open and scan the manifest at `path`.
    pub fn from_manifest(path: &Path) -> crate::Result<Self> {
        let file = File::open(path).map_err(|e| crate::Error::ManifestOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::scan(BufReader::new(file))
    }
}
