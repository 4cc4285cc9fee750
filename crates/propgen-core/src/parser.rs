//! Line-oriented specification parser.
//!
//! A specification file is a flat sequence of directives: a line naming a
//! section switches the parser into that section; every other non-blank line
//! is data for whichever section is current. Sections may repeat and may
//! appear in any order; the accumulating sections (`properties`, `usings`)
//! keep appending, the scalar ones (`namespace`, `classname`,
//! `outputfilename`) are last-occurrence-wins.
//!
//! Comments run from the first unescaped `#` to end of line (`\#` keeps a
//! literal hash in the data). Blank and comment-only lines are ignored
//! everywhere. Any error aborts the whole input file — no partially parsed
//! [`ClassSpec`] is ever used.

use std::path::PathBuf;

use tracing::warn;

use crate::domain::{Capability, ClassSpec, DomainError, Property};

/// Parser section, switched by header lines.
///
/// `Start` is the initial section; data lines seen while still in `Start`
/// are discarded (no section has been selected yet). There is no terminal
/// section — parsing simply ends at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Start,
    Namespace,
    Classname,
    Interfaces,
    Properties,
    OutputFilename,
    Usings,
}

impl Section {
    /// Match a line against the fixed set of section names, ignoring ASCII
    /// case. Anything else is data, not a header.
    fn parse(line: &str) -> Option<Self> {
        const NAMES: [(&str, Section); 7] = [
            ("start", Section::Start),
            ("namespace", Section::Namespace),
            ("classname", Section::Classname),
            ("interfaces", Section::Interfaces),
            ("properties", Section::Properties),
            ("outputfilename", Section::OutputFilename),
            ("usings", Section::Usings),
        ];
        NAMES
            .into_iter()
            .find(|(name, _)| line.eq_ignore_ascii_case(name))
            .map(|(_, section)| section)
    }
}

/// Incremental specification parser.
///
/// Feed lines one at a time (or use [`SpecParser::parse_str`] for a whole
/// buffer) and take the accumulated [`ClassSpec`] with
/// [`SpecParser::finish`]. Required-field validation is deferred to the
/// synthesizer — a finished spec may still be incomplete.
#[derive(Debug)]
pub struct SpecParser {
    section: Section,
    spec: ClassSpec,
}

impl Default for SpecParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecParser {
    pub fn new() -> Self {
        Self {
            section: Section::Start,
            spec: ClassSpec::default(),
        }
    }

    /// Consume one raw input line.
    pub fn feed(&mut self, raw: &str) -> Result<(), DomainError> {
        let line = sanitize(raw);
        if line.is_empty() {
            return Ok(());
        }

        if let Some(next) = Section::parse(&line) {
            self.section = next;
            return Ok(());
        }

        match self.section {
            Section::Start => {
                // Intentional: data before any section header is dropped,
                // not an error.
                warn!(line = %line, "data line before any section header; ignored");
            }
            Section::Namespace => self.spec.namespace = line,
            Section::Classname => self.spec.class_name = line,
            Section::Interfaces => match Capability::parse(&line) {
                Some(capability) => self.spec.enable(capability),
                None => return Err(DomainError::UnknownCapability { line }),
            },
            Section::Properties => self.spec.properties.push(Property::parse(&line)?),
            Section::OutputFilename => self.spec.output_path = resolve_output_path(&line),
            Section::Usings => self.spec.usings.push(line),
        }

        Ok(())
    }

    /// Take the accumulated specification. Not validated — see
    /// [`ClassSpec::validate`].
    pub fn finish(self) -> ClassSpec {
        self.spec
    }

    /// Parse a whole buffer, aborting on the first error.
    pub fn parse_str(input: &str) -> Result<ClassSpec, DomainError> {
        let mut parser = Self::new();
        for line in input.lines() {
            parser.feed(line)?;
        }
        Ok(parser.finish())
    }
}

/// Strip the comment tail and surrounding whitespace from one raw line.
///
/// The comment starts at the first unescaped `#`; a `\#` sequence keeps a
/// literal hash in the retained text (the backslash is dropped). Any other
/// backslash passes through untouched.
fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '#' => break,
            '\\' => match chars.next() {
                Some('#') => out.push('#'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            _ => out.push(c),
        }
    }

    out.trim().to_string()
}

/// Strip quote characters and resolve the destination to an absolute path.
///
/// An all-quotes line collapses to the empty path, which the required-field
/// check rejects at synthesis time. Absolutization is CWD-relative and falls
/// back to the path as written if it cannot be resolved.
fn resolve_output_path(line: &str) -> PathBuf {
    let stripped = line.replace('"', "");
    if stripped.is_empty() {
        return PathBuf::new();
    }
    std::path::absolute(&stripped).unwrap_or_else(|_| PathBuf::from(stripped))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── sanitize ──────────────────────────────────────────────────────────

    #[test]
    fn sanitize_strips_comment_tail() {
        assert_eq!(sanitize("Int32 Count # how many"), "Int32 Count");
    }

    #[test]
    fn sanitize_keeps_escaped_hash() {
        assert_eq!(sanitize("Channel \\#general"), "Channel #general");
    }

    #[test]
    fn sanitize_trims_whitespace() {
        assert_eq!(sanitize("   namespace   "), "namespace");
    }

    #[test]
    fn sanitize_comment_only_line_is_blank() {
        assert_eq!(sanitize("# nothing but commentary"), "");
    }

    // ── section switching ─────────────────────────────────────────────────

    #[test]
    fn headers_match_case_insensitively() {
        assert_eq!(Section::parse("NAMESPACE"), Some(Section::Namespace));
        assert_eq!(Section::parse("OutputFilename"), Some(Section::OutputFilename));
        assert_eq!(Section::parse("usings"), Some(Section::Usings));
        assert_eq!(Section::parse("Acme.Models"), None);
    }

    #[test]
    fn full_specification_parses() {
        let input = "\
# widget model
namespace
Acme.Models
classname
Widget
interfaces
IChangeTracking
inotifypropertychanged
properties
Int32 Count
x List<Order> Orders
outputfilename
\"out/Widget.cs\"
usings
Acme.Common
";
        let spec = SpecParser::parse_str(input).unwrap();
        assert_eq!(spec.namespace, "Acme.Models");
        assert_eq!(spec.class_name, "Widget");
        assert!(spec.change_tracking);
        assert!(spec.property_changed);
        assert_eq!(spec.properties.len(), 2);
        assert!(spec.properties[1].is_collection);
        assert!(spec.output_path.is_absolute());
        assert!(spec.output_path.ends_with("out/Widget.cs"));
        assert_eq!(spec.usings.last().map(String::as_str), Some("Acme.Common"));
    }

    #[test]
    fn scalar_directives_are_last_wins() {
        let input = "\
namespace
First.Pass
classname
Draft
namespace
Second.Pass
classname
Final
";
        let spec = SpecParser::parse_str(input).unwrap();
        assert_eq!(spec.namespace, "Second.Pass");
        assert_eq!(spec.class_name, "Final");
    }

    #[test]
    fn repeated_sections_keep_accumulating() {
        let input = "\
properties
Int32 A
usings
One.Two
properties
Int32 B
usings
Three.Four
";
        let spec = SpecParser::parse_str(input).unwrap();
        assert_eq!(spec.properties.len(), 2);
        // Four defaults plus the two appended entries, in encounter order.
        assert_eq!(spec.usings.len(), 6);
        assert_eq!(spec.usings[4], "One.Two");
        assert_eq!(spec.usings[5], "Three.Four");
    }

    #[test]
    fn data_before_any_header_is_ignored() {
        let input = "\
stray data line
namespace
Acme.Models
";
        let spec = SpecParser::parse_str(input).unwrap();
        assert_eq!(spec.namespace, "Acme.Models");
        assert!(spec.properties.is_empty());
    }

    #[test]
    fn unknown_capability_is_fatal() {
        let input = "\
interfaces
IDisposable
";
        let err = SpecParser::parse_str(input).unwrap_err();
        assert!(matches!(err, DomainError::UnknownCapability { .. }));
        let message = err.to_string();
        assert!(message.contains("IDisposable"));
        assert!(message.contains("IChangeTracking"));
        assert!(message.contains("INotifyPropertyChanged"));
    }

    #[test]
    fn property_errors_abort_the_file() {
        let input = "\
properties
Int32
";
        assert!(matches!(
            SpecParser::parse_str(input),
            Err(DomainError::MalformedPropertySpec { .. })
        ));
    }

    #[test]
    fn output_path_strips_quotes_and_absolutizes() {
        let input = "\
outputfilename
\"generated/Widget.cs\"
";
        let spec = SpecParser::parse_str(input).unwrap();
        assert!(spec.output_path.is_absolute());
        assert!(spec.output_path.ends_with("generated/Widget.cs"));
    }

    #[test]
    fn quotes_only_output_path_stays_empty() {
        let input = "\
outputfilename
\"\"
";
        let spec = SpecParser::parse_str(input).unwrap();
        assert!(spec.output_path.as_os_str().is_empty());
    }

    #[test]
    fn switching_back_to_start_resumes_discarding() {
        let input = "\
namespace
Acme.Models
start
this line goes nowhere
";
        let spec = SpecParser::parse_str(input).unwrap();
        assert_eq!(spec.namespace, "Acme.Models");
    }

    #[test]
    fn crlf_input_parses_cleanly() {
        let input = "namespace\r\nAcme.Models\r\nclassname\r\nWidget\r\n";
        let spec = SpecParser::parse_str(input).unwrap();
        assert_eq!(spec.namespace, "Acme.Models");
        assert_eq!(spec.class_name, "Widget");
    }
}
