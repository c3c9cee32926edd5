//! Small structured renderer for the node options object.
//!
//! The emitter describes the options object as an ordered list of typed
//! sections; all indentation, delimiter and comma placement lives here.

const SECTION_INDENT: &str = "    ";
const ENTRY_INDENT: &str = "      ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Skipped when the body has no entries.
    IfNonEmpty,
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// `name: [ ... ]` with every element comma-terminated.
    Array(Vec<String>),
    /// `name: { key: value, ... }` with every entry comma-terminated.
    Object(Vec<(String, String)>),
    /// `name: { key: value, ... }` with commas between entries only.
    Record(Vec<(String, String)>),
}

impl Body {
    fn is_empty(&self) -> bool {
        match self {
            Body::Array(items) => items.is_empty(),
            Body::Object(entries) | Body::Record(entries) => entries.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub presence: Presence,
    pub body: Body,
}

impl Section {
    pub fn array(name: &'static str, items: Vec<String>) -> Self {
        Self {
            name,
            presence: Presence::IfNonEmpty,
            body: Body::Array(items),
        }
    }

    pub fn object(name: &'static str, entries: Vec<(String, String)>) -> Self {
        Self {
            name,
            presence: Presence::IfNonEmpty,
            body: Body::Object(entries),
        }
    }

    pub fn record(name: &'static str, entries: Vec<(String, String)>) -> Self {
        Self {
            name,
            presence: Presence::Always,
            body: Body::Record(entries),
        }
    }

    fn is_rendered(&self) -> bool {
        match self.presence {
            Presence::Always => true,
            Presence::IfNonEmpty => !self.body.is_empty(),
        }
    }

    fn render_into(&self, out: &mut String, last: bool) {
        let (open, close) = match self.body {
            Body::Array(_) => ('[', ']'),
            Body::Object(_) | Body::Record(_) => ('{', '}'),
        };
        push_line(out, SECTION_INDENT, &format!("{}: {open}", self.name));
        match &self.body {
            Body::Array(items) => {
                for item in items {
                    push_line(out, ENTRY_INDENT, &format!("{item},"));
                }
            }
            Body::Object(entries) => {
                for (key, value) in entries {
                    push_line(out, ENTRY_INDENT, &format!("{key}: {value},"));
                }
            }
            Body::Record(entries) => {
                let count = entries.len();
                for (idx, (key, value)) in entries.iter().enumerate() {
                    let sep = if idx + 1 == count { "" } else { "," };
                    push_line(out, ENTRY_INDENT, &format!("{key}: {value}{sep}"));
                }
            }
        }
        let sep = if last { "" } else { "," };
        push_line(out, SECTION_INDENT, &format!("{close}{sep}"));
    }
}

fn push_line(out: &mut String, indent: &str, text: &str) {
    out.push_str(indent);
    out.push_str(text);
    out.push('\n');
}

/// Render the sections that should appear, in order. Every closing
/// delimiter except the final one is comma-terminated.
pub fn render_sections(sections: &[Section]) -> String {
    let visible: Vec<&Section> = sections.iter().filter(|s| s.is_rendered()).collect();
    let mut out = String::new();
    for (idx, section) in visible.iter().enumerate() {
        section.render_into(&mut out, idx + 1 == visible.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optional_sections_are_skipped() {
        let sections = vec![
            Section::array("transports", Vec::new()),
            Section::object("services", Vec::new()),
            Section::record("limits", vec![("max".into(), "1".into())]),
        ];
        assert_eq!(
            render_sections(&sections),
            "    limits: {\n      max: 1\n    }\n"
        );
    }

    #[test]
    fn arrays_and_objects_use_trailing_commas() {
        let sections = vec![
            Section::array("transports", vec!["tcp()".into(), "quic()".into()]),
            Section::object("services", vec![("ping".into(), "ping()".into())]),
            Section::record(
                "limits",
                vec![("max".into(), "8".into()), ("min".into(), "2".into())],
            ),
        ];
        let expected = "    transports: [\n      tcp(),\n      quic(),\n    ],\n    services: {\n      ping: ping(),\n    },\n    limits: {\n      max: 8,\n      min: 2\n    }\n";
        assert_eq!(render_sections(&sections), expected);
    }

    #[test]
    fn last_visible_section_has_no_comma() {
        let sections = vec![
            Section::array("transports", vec!["tcp()".into()]),
            Section::array("streamMuxers", Vec::new()),
        ];
        assert_eq!(
            render_sections(&sections),
            "    transports: [\n      tcp(),\n    ]\n"
        );
    }

    #[test]
    fn always_record_renders_when_empty() {
        let sections = vec![
            Section::array("transports", vec!["tcp()".into()]),
            Section::record("limits", Vec::new()),
        ];
        assert_eq!(
            render_sections(&sections),
            "    transports: [\n      tcp(),\n    ],\n    limits: {\n    }\n"
        );
    }
}
