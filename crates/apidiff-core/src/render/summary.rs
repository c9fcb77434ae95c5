//! Numeric summary.

use super::bullet;
use crate::diff::{Action, Bucket, CountTable, Counter};
use crate::model::Category;
use crate::options::ReportOptions;

/// Render displayed totals per category
///
/// Each category line carries the `all` bucket minus every bucket `options`
/// disables. With `verbose_summary`, each action gets a sub-line with the
/// displayed count of every enabled bucket that is non-zero.
pub fn render_summary(counts: &CountTable, options: &ReportOptions) -> String {
    let mut out = String::from("### Summary\n\n");
    let excluded = options.excluded_buckets(Bucket::All);

    for category in summary_categories(options) {
        let displayed = counts.totals(category, Bucket::All, &excluded);
        out.push_str(&format!(
            "{}{} {}\n",
            bullet(0),
            displayed.total,
            category.label()
        ));

        if options.verbose_summary {
            for action in Action::ALL {
                out.push_str(&verbose_line(counts, category, action, options));
            }
        }
    }
    out
}

fn summary_categories(options: &ReportOptions) -> Vec<Category> {
    let mut categories = vec![Category::Classes];
    if options.include_class_details {
        categories.push(Category::ClassProps);
    }
    categories.extend(Category::MEMBERS);
    categories
}

fn verbose_line(
    counts: &CountTable,
    category: Category,
    action: Action,
    options: &ReportOptions,
) -> String {
    let counter = Counter::from(action);
    let shown = |bucket: Bucket| {
        counts
            .totals(category, bucket, &options.excluded_buckets(bucket))
            .get(counter)
    };

    let mut line = format!("{}{} {}", bullet(1), shown(Bucket::All), action.label());
    for bucket in [Bucket::Private, Bucket::Deprecated] {
        if !options.includes(bucket) {
            continue;
        }
        let n = shown(bucket);
        if n > 0 {
            line.push_str(&format!(" ({} {})", n, bucket.label()));
        }
    }
    line.push('\n');
    line
}
