// PlacePrep - core/export.rs
//
// Text, JSON and CSV export of a single analysis.
// Core layer: writes to any Write trait object; the caller owns the file.

use crate::core::model::Analysis;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Render a human-readable report.
///
/// Sections appear in a fixed order: header, scores, company intel, skills,
/// round mapping, checklist, plan, questions.
pub fn export_text<W: Write>(
    analysis: &Analysis,
    mut writer: W,
    export_path: &Path,
) -> Result<(), ExportError> {
    let io_err = |e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    };
    let or_dash = |s: &str| {
        if s.trim().is_empty() {
            "-".to_string()
        } else {
            s.trim().to_string()
        }
    };

    let w = &mut writer;
    writeln!(w, "Placement Readiness Report").map_err(io_err)?;
    writeln!(w, "==========================").map_err(io_err)?;
    writeln!(w, "ID:       {}", analysis.id).map_err(io_err)?;
    writeln!(w, "Company:  {}", or_dash(&analysis.company)).map_err(io_err)?;
    writeln!(w, "Role:     {}", or_dash(&analysis.role)).map_err(io_err)?;
    writeln!(w, "Created:  {}", analysis.created_at.to_rfc3339()).map_err(io_err)?;
    writeln!(w).map_err(io_err)?;

    writeln!(
        w,
        "Readiness: {}/100 (base {})",
        analysis.final_score, analysis.base_score
    )
    .map_err(io_err)?;
    writeln!(w).map_err(io_err)?;

    let intel = &analysis.company_intel;
    writeln!(w, "Company Intel").map_err(io_err)?;
    writeln!(w, "  Category: {}", intel.category).map_err(io_err)?;
    writeln!(w, "  Size:     {}", intel.size).map_err(io_err)?;
    writeln!(w, "  Industry: {}", intel.industry).map_err(io_err)?;
    writeln!(w, "  Focus:    {}", intel.focus).map_err(io_err)?;
    writeln!(w).map_err(io_err)?;

    writeln!(w, "Skills").map_err(io_err)?;
    for (category, skills) in analysis.extracted_skills.iter() {
        let marked: Vec<String> = skills
            .iter()
            .map(|s| match analysis.skill_confidence_map.get(s) {
                Some(c) => format!("{s} [{c}]"),
                None => s.clone(),
            })
            .collect();
        writeln!(w, "  {}: {}", category.label(), marked.join(", ")).map_err(io_err)?;
    }
    writeln!(w).map_err(io_err)?;

    writeln!(w, "Interview Rounds").map_err(io_err)?;
    for (i, round) in analysis.round_mapping.iter().enumerate() {
        writeln!(w, "  {}. {}", i + 1, round.round_title).map_err(io_err)?;
        writeln!(w, "     Focus: {}", round.focus_areas.join(", ")).map_err(io_err)?;
        writeln!(w, "     Why:   {}", round.why_it_matters).map_err(io_err)?;
    }
    writeln!(w).map_err(io_err)?;

    writeln!(w, "Checklist").map_err(io_err)?;
    for round in &analysis.checklist {
        writeln!(w, "  {}", round.round_title).map_err(io_err)?;
        for item in &round.items {
            writeln!(w, "    [ ] {item}").map_err(io_err)?;
        }
    }
    writeln!(w).map_err(io_err)?;

    writeln!(w, "7-Day Plan").map_err(io_err)?;
    for day in &analysis.plan {
        writeln!(w, "  Day {}: {}", day.day, day.focus).map_err(io_err)?;
        for task in &day.tasks {
            writeln!(w, "    - {task}").map_err(io_err)?;
        }
    }
    writeln!(w).map_err(io_err)?;

    writeln!(w, "Likely Questions").map_err(io_err)?;
    for (i, q) in analysis.questions.iter().enumerate() {
        writeln!(w, "  {}. {q}", i + 1).map_err(io_err)?;
    }

    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Export the full record as pretty-printed JSON, in the persisted layout.
pub fn export_json<W: Write>(
    analysis: &Analysis,
    mut writer: W,
    export_path: &Path,
) -> Result<(), ExportError> {
    let io_err = |e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    };
    serde_json::to_writer_pretty(&mut writer, analysis).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writeln!(writer).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Export the study plan as CSV, one row per task.
///
/// Writes: day, focus, task. Returns the number of data rows written.
pub fn export_plan_csv<W: Write>(
    analysis: &Analysis,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["day", "focus", "task"])
        .map_err(csv_err)?;

    let mut count = 0;
    for day in &analysis.plan {
        let day_number = day.day.to_string();
        for task in &day.tasks {
            csv_writer
                .write_record([day_number.as_str(), day.focus.as_str(), task.as_str()])
                .map_err(csv_err)?;
            count += 1;
        }
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::analyze;
    use crate::core::model::Confidence;

    fn sample() -> Analysis {
        analyze(
            "Amazon",
            "SDE Intern",
            "Strong DSA, Java and SQL. Experience with React and Docker is a plus.",
        )
        .unwrap()
    }

    #[test]
    fn test_text_export_sections_in_order() {
        let analysis = sample();
        let mut buf = Vec::new();
        export_text(&analysis, &mut buf, Path::new("out.txt")).unwrap();
        let output = String::from_utf8(buf).unwrap();

        let order = [
            "Company:  Amazon",
            "Readiness:",
            "Company Intel",
            "Skills",
            "Interview Rounds",
            "Checklist",
            "7-Day Plan",
            "Likely Questions",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| output.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(output.contains("Category: Enterprise"));
    }

    #[test]
    fn test_text_export_shows_confidence_marks_and_blank_company() {
        let mut analysis = analyze("", "", "We use SQL daily.").unwrap();
        analysis
            .skill_confidence_map
            .insert("SQL".to_string(), Confidence::Know);
        let mut buf = Vec::new();
        export_text(&analysis, &mut buf, Path::new("out.txt")).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Company:  -"));
        assert!(output.contains("SQL [know]"));
    }

    #[test]
    fn test_json_export_uses_persisted_field_names() {
        let analysis = sample();
        let mut buf = Vec::new();
        export_json(&analysis, &mut buf, Path::new("out.json")).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"jobText\""));
        assert!(output.contains("\"baseScore\""));
        assert!(output.contains("\"skillConfidenceMap\""));
    }

    /// Accepts nothing; every write and flush fails.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_buffered_write_failures_are_reported() {
        let analysis = sample();
        let path = Path::new("out");
        let json = export_json(&analysis, std::io::BufWriter::new(BrokenPipe), path);
        assert!(json.is_err(), "json export must surface the flush error");
        let text = export_text(&analysis, std::io::BufWriter::new(BrokenPipe), path);
        assert!(text.is_err());
        let csv = export_plan_csv(&analysis, std::io::BufWriter::new(BrokenPipe), path);
        assert!(csv.is_err());
    }

    #[test]
    fn test_json_export_ends_with_newline() {
        let mut buf = Vec::new();
        export_json(&sample(), &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(buf.last(), Some(&b'\n'));
    }

    #[test]
    fn test_plan_csv_one_row_per_task() {
        let analysis = sample();
        let expected: usize = analysis.plan.iter().map(|d| d.tasks.len()).sum();
        let mut buf = Vec::new();
        let count = export_plan_csv(&analysis, &mut buf, Path::new("plan.csv")).unwrap();
        assert_eq!(count, expected);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("day,focus,task"));
        assert_eq!(lines.count(), expected);
        assert!(output.lines().nth(1).unwrap_or_default().starts_with("1,"));
    }
}
