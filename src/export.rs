//! CSV export for application rows.
//!
//! Generated entirely client-side from in-memory rows: a header line plus
//! one line per row, every field wrapped in double quotes with embedded
//! quotes doubled.

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::application::IncubationForm;
use crate::error::Result;

/// Column headers for the applications export.
pub const APPLICATION_HEADERS: [&str; 7] = [
    "ID",
    "Project ID",
    "Project Title",
    "Team Leader Name",
    "Team Leader Email",
    "Created At",
    "Status",
];

/// Quote one field: wrap in `"` and double any embedded `"`.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render headers plus rows as CSV text.
pub fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        lines.push(
            row.iter()
                .map(|field| quote(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Flatten applications into export rows, one per application.
pub fn application_rows(applications: &[IncubationForm]) -> Vec<Vec<String>> {
    applications
        .iter()
        .map(|app| {
            vec![
                app.id.to_string(),
                app.project_id.clone(),
                app.project_title.clone(),
                app.team_leader_name.clone(),
                app.team_leader_email.clone(),
                app.created_at.to_rfc3339(),
                app.status.to_string(),
            ]
        })
        .collect()
}

/// Render the applications export as CSV text.
pub fn applications_to_csv(applications: &[IncubationForm]) -> String {
    to_csv(&APPLICATION_HEADERS, &application_rows(applications))
}

/// Dated export filename, e.g. `applications-2026-08-05.csv`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("applications-{}.csv", date.format("%Y-%m-%d"))
}

/// Write the applications export to `path`.
pub fn write_applications_csv(path: impl AsRef<Path>, applications: &[IncubationForm]) -> Result<()> {
    std::fs::write(path, applications_to_csv(applications))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::application::ApplicationStatus;
    use chrono::{TimeZone, Utc};

    fn application(id: i64, title: &str) -> IncubationForm {
        IncubationForm {
            id,
            project_id: format!("PRJ-{id:03}"),
            team_leader_name: "Yasmine D".to_string(),
            team_leader_year: "4".to_string(),
            team_leader_email: "yasmine@ensia.edu.dz".to_string(),
            team_leader_phone: "0550000000".to_string(),
            team_members: "Yasmine D, Karim L".to_string(),
            project_title: title.to_string(),
            project_domain: "agritech".to_string(),
            is_ai_project: true,
            project_summary: String::new(),
            dev_stage: "prototype".to_string(),
            demo_link: String::new(),
            project_video: String::new(),
            key_milestones: String::new(),
            current_challenges: String::new(),
            problem_statement: String::new(),
            target_audience: String::new(),
            expected_impact: String::new(),
            additional_motivation: String::new(),
            supporting_documents: None,
            confirmation: true,
            status: ApplicationStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2025, 11, 2, 9, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 11, 2, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_plus_one_line_per_row() {
        let apps = vec![
            application(1, "Smart Irrigation"),
            application(2, "Crop Vision"),
            application(3, "Soil Sense"),
        ];
        let csv = applications_to_csv(&apps);
        assert_eq!(csv.lines().count(), apps.len() + 1);
        assert!(csv.starts_with("ID,Project ID,"));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let apps = vec![application(4, r#"The "Green" Project"#)];
        let csv = applications_to_csv(&apps);
        assert!(csv.contains(r#""The ""Green"" Project""#));
    }

    #[test]
    fn test_fields_with_commas_stay_single_fields() {
        let csv = to_csv(&["a", "b"], &[vec!["x,y".to_string(), "z".to_string()]]);
        let data_line = csv.lines().nth(1).unwrap();
        assert_eq!(data_line, r#""x,y","z""#);
    }

    #[test]
    fn test_export_filename_is_dated() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(export_filename(date), "applications-2026-08-05.csv");
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = applications_to_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
