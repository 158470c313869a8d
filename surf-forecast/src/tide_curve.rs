//! Hourly tide curve interpolation from sparse extrema.

use chrono::NaiveDateTime;
use std::f64::consts::PI;
use surf_data::TideExtremum;
use surf_utils::dates;

/// One point of the dense hourly tide curve.
#[derive(Debug, Clone, PartialEq)]
pub struct TidePoint {
    pub time: NaiveDateTime,
    pub height: f64,
}

/// High and low water for one calendar day of the interpolated curve,
/// used for the dashed markers and labels on the tide chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTideMarks {
    pub day: String,
    pub high: TidePoint,
    pub low: TidePoint,
}

/// Interpolate a dense hourly curve between recorded tide extrema.
///
/// The records are sorted by time; anchor points are the local extrema
/// (strictly greater or strictly lesser than both neighbours) plus the
/// first and last record. Between each consecutive anchor pair one point
/// is generated per whole hour, the height following
/// `start + (end - start) * (0.5 - cos(progress * PI) / 2)` so the curve
/// eases in and out of each turn of the tide instead of moving linearly.
///
/// Anchor timestamps are truncated to the whole hour, each shared anchor is
/// emitted once, and a pair of anchors falling inside the same hour
/// contributes only its start point. Empty input produces an empty curve.
pub fn interpolate_hourly(extrema: &[TideExtremum]) -> Vec<TidePoint> {
    let mut sorted: Vec<&TideExtremum> = extrema.iter().collect();
    sorted.sort_by_key(|e| e.tide_time);

    let anchors = anchor_points(&sorted);
    let mut curve: Vec<TidePoint> = Vec::new();

    if anchors.len() == 1 {
        let only = anchors[0];
        curve.push(TidePoint {
            time: dates::truncate_to_hour(&only.tide_time),
            height: only.tide_height,
        });
        return curve;
    }

    for pair in anchors.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let start_hour = dates::truncate_to_hour(&start.tide_time);
        let end_hour = dates::truncate_to_hour(&end.tide_time);
        let total_hours = (end_hour - start_hour).num_hours();

        if total_hours <= 0 {
            // Both anchors inside the same hour; keep the earlier one.
            if curve.last().map(|p| p.time) != Some(start_hour) {
                curve.push(TidePoint {
                    time: start_hour,
                    height: start.tide_height,
                });
            }
            continue;
        }

        for hour in 0..=total_hours {
            let time = start_hour + chrono::Duration::hours(hour);
            if curve.last().map(|p| p.time) == Some(time) {
                continue;
            }
            let progress = hour as f64 / total_hours as f64;
            let height = start.tide_height
                + (end.tide_height - start.tide_height) * (0.5 - (progress * PI).cos() / 2.0);
            curve.push(TidePoint { time, height });
        }
    }

    curve
}

/// Local extrema plus the first and last record.
fn anchor_points<'a>(sorted: &[&'a TideExtremum]) -> Vec<&'a TideExtremum> {
    let mut anchors: Vec<&TideExtremum> = Vec::new();
    if sorted.is_empty() {
        return anchors;
    }

    anchors.push(sorted[0]);
    for i in 1..sorted.len().saturating_sub(1) {
        let (prev, curr, next) = (sorted[i - 1], sorted[i], sorted[i + 1]);
        let is_max = curr.tide_height > prev.tide_height && curr.tide_height > next.tide_height;
        let is_min = curr.tide_height < prev.tide_height && curr.tide_height < next.tide_height;
        if is_max || is_min {
            anchors.push(curr);
        }
    }
    if sorted.len() > 1 {
        anchors.push(sorted[sorted.len() - 1]);
    }
    anchors
}

/// Per-day high and low water of an interpolated curve, in day order.
pub fn daily_marks(curve: &[TidePoint]) -> Vec<DailyTideMarks> {
    let mut marks: Vec<DailyTideMarks> = Vec::new();
    for point in curve {
        let day = dates::day_key(&point.time);
        match marks.last_mut() {
            Some(m) if m.day == day => {
                if point.height > m.high.height {
                    m.high = point.clone();
                }
                if point.height < m.low.height {
                    m.low = point.clone();
                }
            }
            _ => marks.push(DailyTideMarks {
                day,
                high: point.clone(),
                low: point.clone(),
            }),
        }
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use surf_data::{TideExtremum, TideKind};
    use surf_utils::dates::parse_timestamp;

    fn extremum(ts: &str, kind: TideKind, height: f64) -> TideExtremum {
        TideExtremum {
            beach_id: 1,
            tide_time: parse_timestamp(ts).unwrap(),
            tide_type: kind,
            tide_height: height,
        }
    }

    #[test]
    fn test_one_point_per_hour_between_extrema() {
        let extrema = vec![
            extremum("2024-05-01T03:00:00", TideKind::Low, 0.4),
            extremum("2024-05-01T09:00:00", TideKind::High, 1.6),
        ];
        let curve = interpolate_hourly(&extrema);
        // 03:00 through 09:00 inclusive, one point per whole hour.
        assert_eq!(curve.len(), 7);
        for (i, point) in curve.iter().enumerate() {
            assert_eq!(
                point.time,
                parse_timestamp("2024-05-01T03:00:00").unwrap() + chrono::Duration::hours(i as i64)
            );
        }
        // Monotone rise between a low and a high.
        for pair in curve.windows(2) {
            assert!(pair[1].height > pair[0].height);
        }
    }

    #[test]
    fn test_extrema_heights_reproduced_exactly() {
        let extrema = vec![
            extremum("2024-05-01T03:00:00", TideKind::Low, 0.4),
            extremum("2024-05-01T09:00:00", TideKind::High, 1.6),
            extremum("2024-05-01T15:00:00", TideKind::Low, 0.5),
        ];
        let curve = interpolate_hourly(&extrema);
        let at = |ts: &str| {
            curve
                .iter()
                .find(|p| p.time == parse_timestamp(ts).unwrap())
                .unwrap()
                .height
        };
        assert!((at("2024-05-01T03:00:00") - 0.4).abs() < 1e-12);
        assert!((at("2024-05-01T09:00:00") - 1.6).abs() < 1e-12);
        assert!((at("2024-05-01T15:00:00") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_easing_midpoint() {
        let extrema = vec![
            extremum("2024-05-01T00:00:00", TideKind::Low, 0.0),
            extremum("2024-05-01T04:00:00", TideKind::High, 2.0),
        ];
        let curve = interpolate_hourly(&extrema);
        // Halfway through the rise the cosine easing is at exactly half the range.
        let mid = curve
            .iter()
            .find(|p| p.time == parse_timestamp("2024-05-01T02:00:00").unwrap())
            .unwrap();
        assert!((mid.height - 1.0).abs() < 1e-12);
        // Easing: the first hour climbs less than the second.
        assert!(curve[1].height - curve[0].height < curve[2].height - curve[1].height);
    }

    #[test]
    fn test_no_duplicate_boundary_points() {
        let extrema = vec![
            extremum("2024-05-01T03:00:00", TideKind::Low, 0.4),
            extremum("2024-05-01T09:00:00", TideKind::High, 1.6),
            extremum("2024-05-01T15:00:00", TideKind::Low, 0.5),
        ];
        let curve = interpolate_hourly(&extrema);
        for pair in curve.windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
        assert_eq!(curve.len(), 13);
    }

    #[test]
    fn test_off_hour_extrema_truncate() {
        let extrema = vec![
            extremum("2024-05-01T03:12:00", TideKind::Low, 0.4),
            extremum("2024-05-01T09:41:00", TideKind::High, 1.6),
        ];
        let curve = interpolate_hourly(&extrema);
        assert_eq!(curve[0].time, parse_timestamp("2024-05-01T03:00:00").unwrap());
        assert_eq!(
            curve.last().unwrap().time,
            parse_timestamp("2024-05-01T09:00:00").unwrap()
        );
    }

    #[test]
    fn test_interior_non_extremum_is_smoothed_over() {
        // Middle record sits on a monotone run; it is not an anchor, so the
        // curve interpolates straight from first to last.
        let extrema = vec![
            extremum("2024-05-01T00:00:00", TideKind::Low, 0.2),
            extremum("2024-05-01T06:00:00", TideKind::Low, 0.9),
            extremum("2024-05-01T12:00:00", TideKind::High, 1.8),
        ];
        let curve = interpolate_hourly(&extrema);
        assert_eq!(curve.len(), 13);
        let mid = curve
            .iter()
            .find(|p| p.time == parse_timestamp("2024-05-01T06:00:00").unwrap())
            .unwrap();
        // Cosine midpoint of the full 0.2..1.8 sweep, not the recorded 0.9.
        assert!((mid.height - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(interpolate_hourly(&[]).is_empty());

        let single = vec![extremum("2024-05-01T03:12:00", TideKind::Low, 0.4)];
        let curve = interpolate_hourly(&single);
        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].time, parse_timestamp("2024-05-01T03:00:00").unwrap());
        assert_eq!(curve[0].height, 0.4);

        // Two records within the same hour keep the earlier one only.
        let same_hour = vec![
            extremum("2024-05-01T03:05:00", TideKind::Low, 0.4),
            extremum("2024-05-01T03:50:00", TideKind::High, 0.6),
        ];
        let curve = interpolate_hourly(&same_hour);
        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].height, 0.4);
    }

    #[test]
    fn test_daily_marks() {
        let extrema = vec![
            extremum("2024-05-01T03:00:00", TideKind::Low, 0.4),
            extremum("2024-05-01T09:00:00", TideKind::High, 1.6),
            extremum("2024-05-01T15:00:00", TideKind::Low, 0.5),
            extremum("2024-05-02T04:00:00", TideKind::High, 1.4),
        ];
        let curve = interpolate_hourly(&extrema);
        let marks = daily_marks(&curve);
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].day, "2024-05-01");
        assert!((marks[0].high.height - 1.6).abs() < 1e-12);
        assert!((marks[0].low.height - 0.4).abs() < 1e-12);
        assert_eq!(
            marks[0].high.time,
            parse_timestamp("2024-05-01T09:00:00").unwrap()
        );
        assert_eq!(marks[1].day, "2024-05-02");
    }
}
