// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clinical report shaping. No I/O: the caller delivers the bytes.

use crate::models::{ClinicalReport, HealthLogEntry, ReportPeriodEntry, ReportSummary, UserProfile};
use crate::services::health_log::{
    distinct_symptoms, mean, period_entries, ratio_to_target, sum, Metric, ReportTargets,
};
use crate::time_utils::calendar_day;

pub const REPORT_MIME: &str = "application/json";

/// Serialized report ready for the download collaborator.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Build the report over the full log history.
pub fn build_report(
    profile: &UserProfile,
    entries: &[HealthLogEntry],
    targets: &ReportTargets,
) -> ClinicalReport {
    let summary = ReportSummary {
        avg_mood: one_decimal(mean(entries, Metric::Mood)),
        avg_pain: one_decimal(mean(entries, Metric::Pain)),
        total_kegels: sum(entries, Metric::KegelCount) as u64,
        hydration_rate: whole_percent(ratio_to_target(
            entries,
            Metric::WaterIntake,
            targets.hydration_units,
        )),
        sleep_rate: whole_percent(ratio_to_target(
            entries,
            Metric::SleepHours,
            targets.sleep_hours,
        )),
        entries: entries.len() as u32,
    };

    let period_logs = period_entries(entries)
        .into_iter()
        .filter_map(|e| {
            e.period_flow.map(|flow| ReportPeriodEntry {
                date: calendar_day(e.timestamp),
                flow,
                cramps: e.cramps_level,
                ovulating: e.is_ovulating,
            })
        })
        .collect();

    ClinicalReport {
        patient: profile.name.clone(),
        stage: profile.maternity_stage,
        summary,
        period_logs,
        symptoms: distinct_symptoms(entries).into_iter().collect(),
    }
}

/// Pretty-print the report and name the file after the patient.
pub fn export_json(report: &ClinicalReport) -> Result<ReportDocument, serde_json::Error> {
    let bytes = serde_json::to_vec_pretty(report)?;
    Ok(ReportDocument {
        filename: report_filename(&report.patient),
        mime: REPORT_MIME,
        bytes,
    })
}

fn report_filename(patient: &str) -> String {
    let safe: String = patient
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let safe = if safe.is_empty() { "Patient".to_string() } else { safe };
    format!("AfterMa_Clinical_Report_{}.json", safe)
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn whole_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flow, MaternityStage};
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, day: u32, mood: u8, pain: u8, flow: Option<Flow>) -> HealthLogEntry {
        HealthLogEntry {
            id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 2, day, 10, 0, 0).unwrap(),
            pain_level: pain,
            energy_level: 5,
            mood_level: mood,
            sleep_hours: 7.0,
            water_intake: 7.0,
            medications_taken: true,
            symptoms: vec!["Cramps".to_string()],
            kegel_count: 15,
            period_flow: flow,
            is_ovulating: Some(false),
            cramps_level: Some(4),
            notes: None,
        }
    }

    #[test]
    fn test_report_summary_and_period_subset() {
        let mut profile = UserProfile::new_default("2024-02-01");
        profile.name = "Aditi Sharma".to_string();

        let entries = vec![
            entry("a", 1, 5, 3, Some(Flow::Medium)),
            entry("b", 2, 8, 2, Some(Flow::None)),
            entry("c", 3, 6, 6, None),
        ];

        let report = build_report(&profile, &entries, &ReportTargets::default());

        assert_eq!(report.patient, "Aditi Sharma");
        assert_eq!(report.stage, MaternityStage::Postpartum);
        assert_eq!(report.summary.avg_mood, 6.3);
        assert_eq!(report.summary.avg_pain, 3.7);
        assert_eq!(report.summary.total_kegels, 45);
        assert_eq!(report.summary.hydration_rate, "70%");
        assert_eq!(report.summary.sleep_rate, "88%");
        assert_eq!(report.period_logs.len(), 1);
        assert_eq!(report.period_logs[0].date, "2024-02-01");
        assert_eq!(report.period_logs[0].flow, Flow::Medium);
        assert_eq!(report.symptoms, vec!["Cramps"]);
    }

    #[test]
    fn test_empty_report_has_zero_summary() {
        let profile = UserProfile::new_default("2024-02-01");
        let report = build_report(&profile, &[], &ReportTargets::default());
        assert_eq!(report.summary.avg_mood, 0.0);
        assert_eq!(report.summary.hydration_rate, "0%");
        assert!(report.period_logs.is_empty());
    }

    #[test]
    fn test_export_filename_and_mime() {
        let mut profile = UserProfile::new_default("2024-02-01");
        profile.name = "Aditi Sharma".to_string();
        let report = build_report(&profile, &[], &ReportTargets::default());
        let doc = export_json(&report).unwrap();

        assert_eq!(doc.filename, "AfterMa_Clinical_Report_Aditi_Sharma.json");
        assert_eq!(doc.mime, "application/json");
        let parsed: ClinicalReport = serde_json::from_slice(&doc.bytes).unwrap();
        assert_eq!(parsed, report);
    }
}
