use std::fmt::Write;

use csv::StringRecord;

use crate::models::AttendanceIndex;

/// Header row echoed back tab-separated, the way it appears in the file.
pub fn header_preview(header: &StringRecord) -> String {
    header.iter().collect::<Vec<&str>>().join("\t")
}

pub fn build_report(records_total: usize, index: &AttendanceIndex) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Total records: {records_total}");
    let _ = writeln!(output);

    for (name, summary) in index.sorted_by_name() {
        let _ = writeln!(output, "Name: {name}");
        let _ = writeln!(output, "Excused (IZIN): {}", summary.excused_count);
        let _ = writeln!(output, "Unexplained (GHOIB): {}", summary.unexplained_count);
        let _ = writeln!(output, "Absences:");
        for event in &summary.events {
            let _ = writeln!(
                output,
                "\t{}: {}",
                event.date.format("%Y-%m-%d"),
                event.category
            );
        }
        let _ = writeln!(output);
    }

    output
}
