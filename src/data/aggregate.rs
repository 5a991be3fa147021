//! Commit aggregation and whole-log statistics

use std::collections::HashMap;

use chrono::{Datelike, Timelike, Weekday};

use crate::model::{CommitSummary, LineRow};

/// Group log rows into one summary per distinct commit identifier.
///
/// Grouping is stable: summaries come out in order of each commit's first
/// appearance in the log. When a repository URL is known, each summary
/// gets a canonical `<repo>/commit/<id>` link.
pub fn summarize_commits(rows: Vec<LineRow>, repo_url: Option<&str>) -> Vec<CommitSummary> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<LineRow>> = HashMap::new();

    for row in rows {
        if !groups.contains_key(&row.commit) {
            order.push(row.commit.clone());
        }
        groups.entry(row.commit.clone()).or_default().push(row);
    }

    order
        .into_iter()
        .map(|id| {
            let lines = groups.remove(&id).unwrap_or_default();
            let url = repo_url.map(|base| {
                format!("{}/commit/{}", base.trim_end_matches('/'), id)
            });
            CommitSummary::new(id, url, lines)
        })
        .collect()
}

/// Part of the day a commit landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// [5, 12)
    Morning,
    /// [12, 17)
    Afternoon,
    /// [17, 21)
    Evening,
    /// everything else
    Night,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

/// Aggregate metrics over the whole log, shown on the Stats view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogStats {
    pub total_lines: usize,
    pub total_commits: usize,
    pub file_count: usize,
    /// Longest file (max per-file line index) and its length
    pub longest_file: Option<(String, u32)>,
    /// Mean of per-file max line indexes
    pub avg_file_length: f64,
    pub max_depth: u32,
    pub avg_depth: f64,
    /// Day period with the most changed lines
    pub busiest_period: Option<DayPeriod>,
    /// Weekday with the most changed lines
    pub busiest_weekday: Option<Weekday>,
}

impl LogStats {
    pub fn compute(rows: &[LineRow]) -> Self {
        let mut commit_ids: std::collections::HashSet<&str> = std::collections::HashSet::new();
        let mut file_max: HashMap<&str, u32> = HashMap::new();
        let mut by_period: HashMap<DayPeriod, usize> = HashMap::new();
        let mut by_weekday: HashMap<Weekday, usize> = HashMap::new();
        let mut depth_sum: u64 = 0;
        let mut max_depth: u32 = 0;

        for row in rows {
            commit_ids.insert(row.commit.as_str());
            let max = file_max.entry(row.file.as_str()).or_insert(0);
            *max = (*max).max(row.line);
            depth_sum += u64::from(row.depth);
            max_depth = max_depth.max(row.depth);
            if let Some(dt) = row.datetime {
                *by_period.entry(DayPeriod::from_hour(dt.hour())).or_insert(0) += 1;
                *by_weekday.entry(dt.weekday()).or_insert(0) += 1;
            }
        }

        let longest_file = file_max
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, len)| ((*name).to_string(), *len));
        let avg_file_length = if file_max.is_empty() {
            0.0
        } else {
            file_max.values().map(|len| f64::from(*len)).sum::<f64>() / file_max.len() as f64
        };
        let avg_depth = if rows.is_empty() {
            0.0
        } else {
            depth_sum as f64 / rows.len() as f64
        };

        // Ties resolved deterministically by the bucket's debug order key.
        let busiest_period = by_period
            .into_iter()
            .max_by_key(|(period, count)| (*count, period.label()))
            .map(|(period, _)| period);
        let busiest_weekday = by_weekday
            .into_iter()
            .max_by_key(|(day, count)| (*count, day.num_days_from_monday()))
            .map(|(day, _)| day);

        Self {
            total_lines: rows.len(),
            total_commits: commit_ids.len(),
            file_count: file_max.len(),
            longest_file,
            avg_file_length,
            max_depth,
            avg_depth,
            busiest_period,
            busiest_weekday,
        }
    }
}
