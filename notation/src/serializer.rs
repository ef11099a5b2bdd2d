//! Rendering constraints back into notation.

use std::borrow::Cow;

use ward_constraint::Constraint;

use crate::ConstraintNode;

/// Whether a parameter must be quoted to survive a parse.
pub fn needs_quotes(param: &str) -> bool {
    param.is_empty()
        || param.contains([',', ')', ']', '\''])
        || param.starts_with(char::is_whitespace)
        || param.ends_with(char::is_whitespace)
}

/// The parameter as it appears in notation.
pub fn quote_param(param: &str) -> Cow<'_, str> {
    if needs_quotes(param) {
        Cow::Owned(format!("'{}'", param.replace('\'', "''")))
    } else {
        Cow::Borrowed(param)
    }
}

fn write_group(out: &mut String, name: &str, params: &[String]) {
    out.push('[');
    out.push_str(name);
    if !params.is_empty() {
        out.push('(');
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&quote_param(param));
        }
        out.push(')');
    }
    out.push(']');
}

/// `[Name]` or `[Name(p1,p2,...)]`.
pub fn serialize_node(node: &ConstraintNode) -> String {
    let mut out = String::new();
    write_group(&mut out, &node.name, &node.params);
    out
}

/// One configured constraint.
pub fn serialize_one(constraint: &dyn Constraint) -> String {
    let mut out = String::new();
    write_group(&mut out, constraint.name(), &constraint.parameters());
    out
}

/// A constraint list, groups concatenated in order.
pub fn serialize(constraints: &[Box<dyn Constraint>]) -> String {
    let mut out = String::new();
    for constraint in constraints {
        write_group(&mut out, constraint.name(), &constraint.parameters());
    }
    out
}
