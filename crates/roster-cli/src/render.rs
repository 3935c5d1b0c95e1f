//! Terminal rendering for roster pages and candidate details.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use roster_model::{Candidate, Criteria};
use roster_query::{QueryResult, count_label};

/// Render one page of results with its count and navigation lines.
pub fn render_page(result: &QueryResult<'_>, criteria: &Criteria) -> String {
    let mut out = String::new();
    if let Some(filters) = describe_filters(criteria) {
        out.push_str(&format!("Filters: {filters}\n"));
    }
    out.push_str(&count_label(result.total_count));
    out.push('\n');

    if result.page.is_empty() {
        out.push_str("No candidates match the current filters.\n");
    } else {
        out.push_str(&page_table(&result.page).to_string());
        out.push('\n');
    }

    out.push_str(&page_line(result));
    out.push('\n');
    out
}

/// Render every field of one candidate.
pub fn render_candidate(candidate: &Candidate) -> String {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let tech = if candidate.tech_stack().is_empty() {
        dim_cell("-")
    } else {
        Cell::new(candidate.tech_stack().join(", "))
    };
    let rows = [
        ("Name", Cell::new(candidate.full_name()).add_attribute(Attribute::Bold)),
        ("Role", Cell::new(candidate.job_role())),
        ("Experience", level_cell(candidate)),
        ("Tech Stack", tech),
        ("LinkedIn", Cell::new(candidate.linked_in_url())),
        ("GitHub", Cell::new(candidate.github_url())),
        ("ID", dim_cell(candidate.id())),
    ];
    for (label, value) in rows {
        table.add_row(vec![header_cell(label), value]);
    }
    format!("{table}\n")
}

/// Render the tag list printed by `tags`.
pub fn render_tags(tags: &[&str]) -> String {
    if tags.is_empty() {
        return "No tech tags recorded.\n".to_string();
    }
    let mut out = String::new();
    for tag in tags {
        out.push_str(tag);
        out.push('\n');
    }
    out
}

fn page_table(page: &[&Candidate]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Role"),
        header_cell("Experience"),
        header_cell("Tech Stack"),
        header_cell("ID"),
    ]);
    apply_table_style(&mut table);
    // Ids are never wrapped so they can be copied into `show`.
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::LowerBoundary(Width::Fixed(32)),
    ]);
    for candidate in page {
        table.add_row(vec![
            Cell::new(candidate.full_name()).add_attribute(Attribute::Bold),
            Cell::new(candidate.job_role()),
            level_cell(candidate),
            Cell::new(candidate.tech_stack().join(", ")),
            dim_cell(candidate.id()),
        ]);
    }
    table
}

fn page_line(result: &QueryResult<'_>) -> String {
    let mut line = format!("Page {} of {}", result.page_number, result.total_pages);
    match (result.has_previous(), result.has_next()) {
        (true, true) => line.push_str("  (--page to move back or forward)"),
        (true, false) => line.push_str("  (last page)"),
        (false, true) => line.push_str(&format!(
            "  (next: --page {})",
            result.page_number + 1
        )),
        (false, false) => {}
    }
    line
}

fn describe_filters(criteria: &Criteria) -> Option<String> {
    if !criteria.has_filters() {
        return None;
    }
    let mut parts = Vec::new();
    if !criteria.role_substring().is_empty() {
        parts.push(format!("role contains \"{}\"", criteria.role_substring()));
    }
    if let Some(level) = criteria.experience_level() {
        parts.push(format!("experience {}", level.label()));
    }
    if let Some(tag) = criteria.tech_tag() {
        parts.push(format!("tech {tag}"));
    }
    Some(parts.join(", "))
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn level_cell(candidate: &Candidate) -> Cell {
    match candidate.experience_level() {
        Some(level) => Cell::new(level.label()),
        None => dim_cell("-"),
    }
}
