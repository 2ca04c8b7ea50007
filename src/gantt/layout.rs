// src/gantt/layout.rs
// Date-to-pixel layout of the Gantt chart

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::labels::{day_label, month_label, week_label};
use super::model::GanttTask;

/// Height of one task row in pixels
pub const ROW_HEIGHT: i64 = 50;

/// Days of padding before the earliest start and after the latest end
pub const MARGIN_DAYS: u64 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    #[default]
    Day,
    Week,
    Month,
}

impl TimeScale {
    /// Pixels per day
    pub fn day_width(&self) -> i64 {
        match self {
            Self::Day => 40,
            Self::Week => 20,
            Self::Month => 10,
        }
    }

    /// Unknown or missing values fall back to `Day`
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("week") => Self::Week,
            Some("month") => Self::Month,
            _ => Self::Day,
        }
    }

    fn next_tick(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day => date.checked_add_days(Days::new(1)),
            Self::Week => date.checked_add_days(Days::new(7)),
            Self::Month => date.checked_add_months(Months::new(1)),
        }
    }

    fn label(&self, date: NaiveDate) -> String {
        match self {
            Self::Day => day_label(date),
            Self::Week => week_label(date),
            Self::Month => month_label(date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderTick {
    pub date: NaiveDate,
    pub label: String,
    pub left: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub task_id: String,
    pub row: usize,
    pub left: i64,
    pub width: i64,
    pub top: i64,
    pub progress: u8,
    pub color: String,
}

/// Curve from the end of a predecessor's bar to the start of its successor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyCurve {
    pub from_task_id: String,
    pub to_task_id: String,
    pub from_x: i64,
    pub from_y: i64,
    pub to_x: i64,
    pub to_y: i64,
    /// SVG path data (cubic Bézier)
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttLayout {
    pub scale: TimeScale,
    pub day_width: i64,
    pub row_height: i64,
    /// Timeline origin: earliest start minus the margin
    pub origin: NaiveDate,
    /// Timeline extent: latest end plus the margin
    pub end: NaiveDate,
    pub total_days: i64,
    pub width: i64,
    pub height: i64,
    pub header: Vec<HeaderTick>,
    pub bars: Vec<Bar>,
    pub dependencies: Vec<DependencyCurve>,
}

impl GanttLayout {
    /// Lay out `tasks` in row order. `None` when there is nothing to draw.
    pub fn compute(tasks: &[GanttTask], scale: TimeScale) -> Option<Self> {
        let earliest = tasks.iter().map(|t| t.start).min()?;
        let latest = tasks.iter().map(|t| t.end).max()?;

        let origin = earliest
            .checked_sub_days(Days::new(MARGIN_DAYS))
            .unwrap_or(earliest);
        let end = latest
            .checked_add_days(Days::new(MARGIN_DAYS))
            .unwrap_or(latest);

        let day_width = scale.day_width();
        let total_days = (end - origin).num_days();

        let mut layout = Self {
            scale,
            day_width,
            row_height: ROW_HEIGHT,
            origin,
            end,
            total_days,
            width: total_days * day_width,
            height: tasks.len() as i64 * ROW_HEIGHT,
            header: Vec::new(),
            bars: Vec::with_capacity(tasks.len()),
            dependencies: Vec::new(),
        };

        layout.header = layout.header_ticks();
        layout.bars = tasks
            .iter()
            .enumerate()
            .map(|(row, task)| layout.bar(row, task))
            .collect();
        layout.dependencies = layout.dependency_curves(tasks);

        Some(layout)
    }

    /// Horizontal pixel offset of `date` from the origin
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        (date - self.origin).num_days() * self.day_width
    }

    fn row_center(row: usize) -> i64 {
        row as i64 * ROW_HEIGHT + ROW_HEIGHT / 2
    }

    fn bar(&self, row: usize, task: &GanttTask) -> Bar {
        let duration = (task.end - task.start).num_days().max(0);
        Bar {
            task_id: task.id.clone(),
            row,
            left: self.offset_of(task.start),
            width: duration * self.day_width,
            top: row as i64 * ROW_HEIGHT,
            progress: task.progress.min(100),
            color: task.color().to_string(),
        }
    }

    fn header_ticks(&self) -> Vec<HeaderTick> {
        let mut ticks = Vec::new();
        let mut current = Some(self.origin);
        while let Some(date) = current.filter(|d| *d <= self.end) {
            ticks.push(HeaderTick {
                date,
                label: self.scale.label(date),
                left: self.offset_of(date),
            });
            current = self.scale.next_tick(date);
        }
        ticks
    }

    fn dependency_curves(&self, tasks: &[GanttTask]) -> Vec<DependencyCurve> {
        let mut curves = Vec::new();
        for (to_row, task) in tasks.iter().enumerate() {
            for dep_id in &task.dependencies {
                let Some(from_row) = tasks.iter().position(|t| &t.id == dep_id) else {
                    continue;
                };
                let from = &tasks[from_row];

                let from_x = self.offset_of(from.end);
                let to_x = self.offset_of(task.start);
                let from_y = Self::row_center(from_row);
                let to_y = Self::row_center(to_row);
                let mid_x = (from_x + to_x) / 2;

                curves.push(DependencyCurve {
                    from_task_id: from.id.clone(),
                    to_task_id: task.id.clone(),
                    from_x,
                    from_y,
                    to_x,
                    to_y,
                    path: format!(
                        "M {from_x} {from_y} C {mid_x} {from_y}, {mid_x} {to_y}, {to_x} {to_y}"
                    ),
                });
            }
        }
        curves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(id: &str, start: &str, end: &str, deps: &[&str]) -> GanttTask {
        GanttTask {
            id: id.to_string(),
            name: id.to_uppercase(),
            start: d(start),
            end: d(end),
            progress: 0,
            dependencies: deps.iter().map(|s| s.to_string()).collect(),
            assignees: vec![],
            color: None,
        }
    }

    fn fixture_layout(scale: TimeScale) -> GanttLayout {
        let project = Fixtures::load().unwrap().gantt;
        GanttLayout::compute(&project.tasks, scale).unwrap()
    }

    #[test]
    fn test_timeline_bounds() {
        let layout = fixture_layout(TimeScale::Day);
        assert_eq!(layout.origin, d("2025-04-29"));
        assert_eq!(layout.end, d("2025-07-02"));
        assert_eq!(layout.total_days, 64);
        assert_eq!(layout.width, 64 * 40);
        assert_eq!(layout.height, 6 * ROW_HEIGHT);
    }

    #[test]
    fn test_extent_offset_equals_total_width() {
        for scale in [TimeScale::Day, TimeScale::Week, TimeScale::Month] {
            let layout = fixture_layout(scale);
            assert_eq!(layout.offset_of(layout.end), layout.width);
            // The latest end sits one margin short of the right edge
            assert_eq!(
                layout.offset_of(d("2025-06-30")),
                layout.width - MARGIN_DAYS as i64 * layout.day_width
            );
            assert_eq!(layout.offset_of(layout.origin), 0);
        }
    }

    #[test]
    fn test_bars() {
        let layout = fixture_layout(TimeScale::Day);
        let first = &layout.bars[0];
        assert_eq!(first.task_id, "task1");
        assert_eq!(first.left, 80);
        assert_eq!(first.width, 9 * 40);
        assert_eq!(first.top, 0);
        assert_eq!(first.progress, 100);
        assert_eq!(first.color, "#4F46E5");

        let second = &layout.bars[1];
        assert_eq!(second.left, 11 * 40);
        assert_eq!(second.width, 15 * 40);
        assert_eq!(second.top, 50);
    }

    #[test]
    fn test_bars_scale_with_day_width() {
        let layout = fixture_layout(TimeScale::Month);
        assert_eq!(layout.day_width, 10);
        assert_eq!(layout.bars[0].left, 20);
        assert_eq!(layout.bars[0].width, 90);
    }

    #[test]
    fn test_dependency_curves() {
        let layout = fixture_layout(TimeScale::Day);
        assert_eq!(layout.dependencies.len(), 6);

        let first = &layout.dependencies[0];
        assert_eq!(first.from_task_id, "task1");
        assert_eq!(first.to_task_id, "task2");
        assert_eq!(first.path, "M 440 25 C 440 25, 440 75, 440 75");

        let overlap = &layout.dependencies[1];
        assert_eq!(overlap.from_task_id, "task2");
        assert_eq!(overlap.to_task_id, "task3");
        assert_eq!(overlap.path, "M 1040 75 C 940 75, 940 125, 840 125");
    }

    #[test]
    fn test_missing_dependency_is_skipped() {
        let tasks = vec![
            task("a", "2025-01-01", "2025-01-05", &[]),
            task("b", "2025-01-05", "2025-01-10", &["ghost", "a"]),
        ];
        let layout = GanttLayout::compute(&tasks, TimeScale::Day).unwrap();
        assert_eq!(layout.dependencies.len(), 1);
        assert_eq!(layout.dependencies[0].from_task_id, "a");
    }

    #[test]
    fn test_cyclic_dependencies_still_lay_out() {
        let tasks = vec![
            task("a", "2025-01-01", "2025-01-05", &["b"]),
            task("b", "2025-01-05", "2025-01-10", &["a"]),
        ];
        let layout = GanttLayout::compute(&tasks, TimeScale::Week).unwrap();
        assert_eq!(layout.dependencies.len(), 2);
    }

    #[test]
    fn test_inverted_task_has_zero_width() {
        let tasks = vec![task("a", "2025-01-10", "2025-01-05", &[])];
        let layout = GanttLayout::compute(&tasks, TimeScale::Day).unwrap();
        assert_eq!(layout.bars[0].width, 0);
    }

    #[test]
    fn test_empty_task_list_has_no_layout() {
        assert!(GanttLayout::compute(&[], TimeScale::Day).is_none());
    }

    #[test]
    fn test_header_ticks_per_scale() {
        let day = fixture_layout(TimeScale::Day);
        assert_eq!(day.header.len(), 65);
        assert_eq!(day.header[0].label, "29 avr.");
        assert_eq!(day.header[2].label, "1 mai");
        assert_eq!(day.header[2].left, 80);

        let week = fixture_layout(TimeScale::Week);
        assert_eq!(week.header.len(), 10);
        assert_eq!(week.header[0].label, "S5");
        assert_eq!(week.header[1].left, 7 * 20);

        let month = fixture_layout(TimeScale::Month);
        let labels: Vec<&str> = month.header.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["avr. 2025", "mai 2025", "juin 2025"]);
    }

    #[test]
    fn test_scale_from_query() {
        assert_eq!(TimeScale::from_query(None), TimeScale::Day);
        assert_eq!(TimeScale::from_query(Some("week")), TimeScale::Week);
        assert_eq!(TimeScale::from_query(Some("MONTH")), TimeScale::Month);
        assert_eq!(TimeScale::from_query(Some("fortnight")), TimeScale::Day);
    }
}
