use std::error::Error;

use chrono::Utc;
use serde::Serialize;

use crate::mock;

#[derive(Serialize, Clone)]
pub struct TrendPoint {
    pub week: String,
    pub attendance: u32,
    pub target: u32,
}

#[derive(Serialize, Clone)]
pub struct ClassComparison {
    pub class: String,
    pub attendance: u32,
    pub students: u32,
}

#[derive(Serialize, Clone)]
pub struct DistributionSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
    pub share: f64,
}

#[derive(Serialize, Clone)]
pub struct MonthlyBreakdown {
    pub month: String,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
}

#[derive(Serialize, Clone)]
pub struct TopPerformer {
    pub name: String,
    pub class: String,
    pub attendance: u32,
    pub streak: u32,
}

#[derive(Serialize, Clone)]
pub struct OverallStats {
    pub total_students: u32,
    pub average_attendance: f64,
    pub total_classes: u32,
    pub attended_classes: u32,
    pub improvement: f64,
}

#[derive(Serialize)]
pub struct AnalyticsData {
    pub overall: OverallStats,
    pub trends: Vec<TrendPoint>,
    pub comparison: Vec<ClassComparison>,
    pub distribution: Vec<DistributionSlice>,
    pub monthly: Vec<MonthlyBreakdown>,
    pub top_performers: Vec<TopPerformer>,
}

pub fn attendance_trends() -> Vec<TrendPoint> {
    let weekly = [92, 88, 94, 87, 91, 89, 93, 86];
    weekly
        .iter()
        .enumerate()
        .map(|(index, &attendance)| TrendPoint {
            week: format!("Week {}", index + 1),
            attendance,
            target: 85,
        })
        .collect()
}

pub fn class_comparison() -> Vec<ClassComparison> {
    vec![
        ClassComparison {
            class: "CS 101".to_string(),
            attendance: 92,
            students: 45,
        },
        ClassComparison {
            class: "CS 205".to_string(),
            attendance: 88,
            students: 38,
        },
        ClassComparison {
            class: "CS 301".to_string(),
            attendance: 85,
            students: 32,
        },
        ClassComparison {
            class: "CS 401".to_string(),
            attendance: 89,
            students: 28,
        },
    ]
}

pub fn distribution() -> Vec<DistributionSlice> {
    let buckets = [
        ("Excellent (90-100%)", 35, "#15803d"),
        ("Good (80-89%)", 28, "#84cc16"),
        ("Average (70-79%)", 20, "#f59e0b"),
        ("Poor (<70%)", 17, "#ef4444"),
    ];
    let total: u32 = buckets.iter().map(|(_, value, _)| value).sum();

    buckets
        .iter()
        .map(|&(name, value, color)| DistributionSlice {
            name: name.to_string(),
            value,
            color: color.to_string(),
            share: if total == 0 {
                0.0
            } else {
                value as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

pub fn monthly_breakdown() -> Vec<MonthlyBreakdown> {
    vec![
        MonthlyBreakdown {
            month: "Jan".to_string(),
            present: 1240,
            absent: 160,
            late: 80,
        },
        MonthlyBreakdown {
            month: "Feb".to_string(),
            present: 1180,
            absent: 180,
            late: 90,
        },
        MonthlyBreakdown {
            month: "Mar".to_string(),
            present: 1320,
            absent: 140,
            late: 70,
        },
        MonthlyBreakdown {
            month: "Apr".to_string(),
            present: 1280,
            absent: 150,
            late: 85,
        },
        MonthlyBreakdown {
            month: "May".to_string(),
            present: 1350,
            absent: 120,
            late: 60,
        },
    ]
}

pub fn top_performers() -> Vec<TopPerformer> {
    vec![
        TopPerformer {
            name: "Alex Johnson".to_string(),
            class: "CS 101".to_string(),
            attendance: 98,
            streak: 15,
        },
        TopPerformer {
            name: "Sarah Chen".to_string(),
            class: "CS 205".to_string(),
            attendance: 96,
            streak: 12,
        },
        TopPerformer {
            name: "Michael Rodriguez".to_string(),
            class: "CS 301".to_string(),
            attendance: 95,
            streak: 18,
        },
        TopPerformer {
            name: "Emily Davis".to_string(),
            class: "CS 401".to_string(),
            attendance: 94,
            streak: 10,
        },
        TopPerformer {
            name: "David Kim".to_string(),
            class: "CS 101".to_string(),
            attendance: 93,
            streak: 8,
        },
    ]
}

pub fn overall_stats() -> OverallStats {
    OverallStats {
        total_students: 143,
        average_attendance: 88.5,
        total_classes: 1480,
        attended_classes: 1310,
        improvement: 2.3,
    }
}

pub fn analytics_data() -> AnalyticsData {
    AnalyticsData {
        overall: overall_stats(),
        trends: attendance_trends(),
        comparison: class_comparison(),
        distribution: distribution(),
        monthly: monthly_breakdown(),
        top_performers: top_performers(),
    }
}

// Builds the downloadable per-class report for the export button.
pub fn export_report_csv() -> Result<String, Box<dyn Error>> {
    let generated_at = Utc::now().date_naive().to_string();
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["class", "code", "students", "attendance_pct", "generated_at"])?;
    for class in mock::classes() {
        let students = class.enrolled.to_string();
        let attendance = class.attendance.to_string();
        writer.write_record([
            class.name.as_str(),
            class.code.as_str(),
            students.as_str(),
            attendance.as_str(),
            generated_at.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trends_cover_eight_weeks_against_the_target() {
        let trends = attendance_trends();
        assert_eq!(trends.len(), 8);
        assert_eq!(trends[0].week, "Week 1");
        assert_eq!(trends[7].week, "Week 8");
        assert!(trends.iter().all(|point| point.target == 85));
    }

    #[test]
    fn distribution_shares_sum_to_one_hundred() {
        let slices = distribution();
        assert_eq!(slices.len(), 4);
        let total: f64 = slices.iter().map(|slice| slice.share).sum();
        assert!((total - 100.0).abs() < 0.001);
    }

    #[test]
    fn export_has_a_header_and_one_row_per_class() {
        let report = export_report_csv().unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 1 + mock::classes().len());
        assert_eq!(lines[0], "class,code,students,attendance_pct,generated_at");
        assert!(lines[1].starts_with("Data Structures,CS 101,45,87,"));
        assert!(lines.iter().any(|line| line.contains("CS 401")));
    }

    #[test]
    fn overall_stats_match_the_reporting_period() {
        let stats = overall_stats();
        assert_eq!(stats.total_students, 143);
        assert!(stats.attended_classes <= stats.total_classes);
    }
}
