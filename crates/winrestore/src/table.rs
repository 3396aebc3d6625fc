use winrestore_core::monitor::MonitorDescriptor;
use winrestore_core::store::LayoutSummary;
use winrestore_core::window::WindowRecord;

fn border(left: &str, mid: &str, right: &str, widths: &[usize]) -> String {
    let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, cells.join(mid), right)
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {} ", truncate(cell, *width)))
        .collect();
    format!("│{}│", padded.join("│"))
}

fn column_width<'a, I>(values: I, min: usize, max: usize) -> usize
where
    I: Iterator<Item = &'a str>,
{
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(min)
        .clamp(min, max)
}

fn print_table(headers: &[&str], rows: &[Vec<String>], widths: &[usize]) {
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    println!("{}", border("┌", "┬", "┐", widths));
    println!("{}", row(&header_cells, widths));
    println!("{}", border("├", "┼", "┤", widths));
    for cells in rows {
        println!("{}", row(cells, widths));
    }
    println!("{}", border("└", "┴", "┘", widths));
}

/// Print a formatted table of saved layouts
pub fn print_layouts_table(layouts: &[LayoutSummary]) {
    let name_width = column_width(layouts.iter().map(|l| l.name.as_str()), 4, 30);
    let widths = [name_width, 7, 16, 36];

    let rows: Vec<Vec<String>> = layouts
        .iter()
        .map(|l| {
            vec![
                l.name.clone(),
                l.window_count.to_string(),
                format_created(&l.created),
                l.id.clone(),
            ]
        })
        .collect();
    print_table(&["Name", "Windows", "Created", "ID"], &rows, &widths);

    println!("\nTotal: {} layout(s)", layouts.len());
}

/// Print a formatted table of window records
pub fn print_records_table(records: &[WindowRecord]) {
    let title_width = column_width(records.iter().map(|r| r.title.as_str()), 5, 40);
    let names: Vec<String> = records.iter().map(|r| r.executable_name()).collect();
    let app_width = column_width(names.iter().map(String::as_str), 3, 20);
    let widths = [title_width, app_width, 11, 13, 9, 12, 4];

    let rows: Vec<Vec<String>> = records
        .iter()
        .zip(names)
        .map(|(r, name)| {
            vec![
                r.title.clone(),
                name,
                format!("{}x{}", r.bounds.width, r.bounds.height),
                format!("x:{} y:{}", r.bounds.x, r.bounds.y),
                r.state.to_string(),
                r.snap_type.map(|z| z.to_string()).unwrap_or_else(|| "-".to_string()),
                r.tabs.len().to_string(),
            ]
        })
        .collect();
    print_table(
        &["Title", "App", "Size", "Position", "State", "Snap", "Tabs"],
        &rows,
        &widths,
    );

    println!("\nTotal: {} window(s)", records.len());
}

/// Print a formatted table of monitors
pub fn print_monitors_table(monitors: &[MonitorDescriptor]) {
    let widths = [5, 11, 13, 11, 13, 7];

    let rows: Vec<Vec<String>> = monitors
        .iter()
        .map(|m| {
            vec![
                m.index.to_string(),
                format!("{}x{}", m.bounds.width, m.bounds.height),
                format!("x:{} y:{}", m.bounds.x, m.bounds.y),
                format!("{}x{}", m.work_area.width, m.work_area.height),
                format!("x:{} y:{}", m.work_area.x, m.work_area.y),
                if m.is_primary { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();
    print_table(
        &["Index", "Size", "Position", "Work Area", "Work Origin", "Primary"],
        &rows,
        &widths,
    );

    println!("\nTotal: {} monitor(s)", monitors.len());
}

/// Render an RFC 3339 timestamp as local `YYYY-MM-DD HH:MM`; unparseable input is shown as-is.
pub fn format_created(created: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(created) {
        Ok(ts) => ts
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => created.to_string(),
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
