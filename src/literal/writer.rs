//! Literal-array rendering
//!
//! Groups are framed by banner comments carrying the uppercased group name.
//! Ungrouped values are written in place at the same indentation, without a
//! banner. Empty values are written as `null`.

use std::fmt::Write;

use crate::core::types::{Entry, Group, Properties};
use crate::store::escape::escape;

const GROUP_INDENT: &str = "\t\t";
const VALUE_INDENT: &str = "\t\t\t";

/// Render a mapping as a literal-array expression
pub fn render(properties: &Properties) -> String {
    let mut out = String::from("array(\n\n");

    for (key, entry) in properties {
        match entry {
            Entry::Group(values) => render_group(&mut out, key, values),
            Entry::Value(value) => {
                render_pair(&mut out, GROUP_INDENT, key, value);
                out.push('\n');
            },
        }
    }

    out.push_str("\t)\n");
    out
}

fn render_group(out: &mut String, name: &str, values: &Group) {
    // banner text must stay on one line
    let banner: String = name
        .to_uppercase()
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    // writing into a String cannot fail
    let _ = writeln!(out, "{}###### {} ######", GROUP_INDENT, banner);
    let _ = writeln!(out, "{}'{}' => array(", GROUP_INDENT, escape(name));
    for (key, value) in values {
        render_pair(out, VALUE_INDENT, key, value);
    }
    let _ = writeln!(out, "{}),", GROUP_INDENT);
    let _ = writeln!(out, "{}########", GROUP_INDENT);
    out.push('\n');
}

fn render_pair(out: &mut String, indent: &str, key: &str, value: &str) {
    if value.is_empty() {
        let _ = writeln!(out, "{}'{}' => null,", indent, escape(key));
    } else {
        let _ = writeln!(out, "{}'{}' => '{}',", indent, escape(key), escape(value));
    }
}
