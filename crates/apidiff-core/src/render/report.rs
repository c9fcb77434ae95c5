//! Per-class change report.

use super::bullet;
use crate::diff::{Action, ApiDiff, ChangeRecord};
use crate::model::Category;
use crate::options::ReportOptions;

const NO_CHANGES: &str = "_No API changes detected._\n";

/// Render the change tree of a diff as Markdown
///
/// Added and removed classes are listed first, then one `## {name}` section
/// per modified class. Records hidden by `options` are skipped at every
/// depth; a section whose records are all hidden is omitted entirely.
pub fn render_report(diff: &ApiDiff, options: &ReportOptions) -> String {
    let mut out = String::new();

    for action in [Action::Added, Action::Removed] {
        let visible: Vec<&ChangeRecord> = diff
            .classes_with(action)
            .filter(|c| options.shows(c))
            .collect();
        if visible.is_empty() {
            continue;
        }
        out.push_str(&format!("### {} Classes\n\n", action.label()));
        for class in visible {
            out.push_str(&format!("{}{}\n", bullet(0), class.name));
        }
        out.push('\n');
    }

    for class in diff.classes_with(Action::Modified) {
        if options.shows(class) {
            out.push_str(&render_class(class, options));
        }
    }

    if out.is_empty() {
        return NO_CHANGES.to_string();
    }
    out
}

/// Concatenate several reports under one title
///
/// # Example
///
/// ```
/// use apidiff_core::render::render_document;
///
/// let doc = render_document("Changes", &["a\n".to_string(), "b\n".to_string()]);
/// assert_eq!(doc, "# Changes\n\na\n\nb\n");
/// ```
pub fn render_document(title: &str, sections: &[String]) -> String {
    format!("# {}\n\n{}", title, sections.join("\n"))
}

fn render_class(class: &ChangeRecord, options: &ReportOptions) -> String {
    let mut body = String::new();

    for action in Action::ALL {
        for category in Category::MEMBERS {
            let Some(changes) = class.category(category) else {
                continue;
            };
            let visible: Vec<&ChangeRecord> = changes
                .get(action)
                .iter()
                .filter(|r| options.shows(r))
                .collect();
            if visible.is_empty() {
                continue;
            }

            body.push_str(&format!("### {} {}\n\n", action.label(), category.label()));
            for record in visible {
                body.push_str(&format!("{}{}\n", bullet(0), record.name));
                render_details(&mut body, record, 1, options);
            }
            body.push('\n');
        }
    }

    if let Some(details) = class.category(Category::ClassProps) {
        let deltas: Vec<_> = details
            .modified
            .iter()
            .filter(|r| options.shows(r))
            .filter_map(|r| r.delta.as_ref())
            .collect();
        if !deltas.is_empty() {
            body.push_str(&format!("### {}\n\n", Category::ClassProps.label()));
            for delta in deltas {
                body.push_str(&format!("{}{}\n", bullet(0), delta));
            }
            body.push('\n');
        }
    }

    if body.is_empty() {
        return body;
    }
    format!("## {}\n\n{}", class.name, body)
}

/// Delta and nested items of a record, one level below its bullet
fn render_details(out: &mut String, record: &ChangeRecord, depth: usize, options: &ReportOptions) {
    if let Some(delta) = &record.delta {
        out.push_str(&format!("{}{}\n", bullet(depth), delta));
    }

    let Some(items) = &record.items else {
        return;
    };
    for action in Action::ALL {
        for item in items.get(action).iter().filter(|r| options.shows(r)) {
            out.push_str(&format!(
                "{}{} _{}_ {}\n",
                bullet(depth),
                action.label(),
                item.name,
                item.kind
            ));
            render_details(out, item, depth + 1, options);
        }
    }
}
