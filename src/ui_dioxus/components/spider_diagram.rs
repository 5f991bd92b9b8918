use dioxus::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::domain::{HiTopDimension, HiTopScores, Score};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 460.0;
const RADIUS: f64 = 170.0;
const GRID_RINGS: usize = 5;
const LABEL_OFFSET: f64 = 18.0;
const FILL: &str = "#8884d8";

/// Polar layout of the radar chart. The first axis points up, the rest
/// follow clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Value drawn on the outer ring. 1.0 unless a score exceeds it.
    pub domain_max: f64,
}

impl RadarGeometry {
    pub fn new(cx: f64, cy: f64, radius: f64, values: &[Option<f64>]) -> Self {
        let domain_max = values
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(1.0, f64::max);
        Self {
            cx,
            cy,
            radius,
            domain_max,
        }
    }

    pub fn angle(index: usize, axes: usize) -> f64 {
        -FRAC_PI_2 + TAU * index as f64 / axes.max(1) as f64
    }

    fn at(&self, index: usize, axes: usize, distance: f64) -> (f64, f64) {
        let angle = Self::angle(index, axes);
        (
            self.cx + distance * angle.cos(),
            self.cy + distance * angle.sin(),
        )
    }

    /// Absent, negative and non-finite values sit at the centre.
    pub fn point(&self, index: usize, axes: usize, value: Option<f64>) -> (f64, f64) {
        let value = value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0);
        self.at(index, axes, self.radius * value / self.domain_max)
    }

    pub fn ring(&self, fraction: f64, axes: usize) -> Vec<(f64, f64)> {
        (0..axes)
            .map(|index| self.at(index, axes, self.radius * fraction))
            .collect()
    }

    pub fn label_anchor(index: usize, axes: usize) -> &'static str {
        let cos = Self::angle(index, axes).cos();
        if cos > 0.1 {
            "start"
        } else if cos < -0.1 {
            "end"
        } else {
            "middle"
        }
    }
}

pub fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tooltip text: numbers to three decimals, anything else as delivered.
pub fn format_score(score: Option<&Score>) -> String {
    match score {
        Some(score) => score.to_string(),
        None => "n/a".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Axis {
    label: &'static str,
    end_x: String,
    end_y: String,
    label_x: String,
    label_y: String,
    anchor: &'static str,
    vertex: (f64, f64),
    vertex_x: String,
    vertex_y: String,
    value: String,
}

#[component]
pub fn SpiderDiagram(title: String, scores: HiTopScores) -> Element {
    let values = scores.values();
    let axes = values.len();
    let geometry = RadarGeometry::new(WIDTH / 2.0, HEIGHT / 2.0, RADIUS, &values);

    let rings: Vec<String> = (1..=GRID_RINGS)
        .map(|level| format_points(&geometry.ring(level as f64 / GRID_RINGS as f64, axes)))
        .collect();

    let axis_views: Vec<Axis> = HiTopDimension::ALL
        .iter()
        .enumerate()
        .map(|(index, dimension)| {
            let end = geometry.at(index, axes, RADIUS);
            let label_at = geometry.at(index, axes, RADIUS + LABEL_OFFSET);
            let vertex = geometry.point(index, axes, values[index]);
            Axis {
                label: dimension.short_label(),
                end_x: format!("{:.2}", end.0),
                end_y: format!("{:.2}", end.1),
                label_x: format!("{:.2}", label_at.0),
                label_y: format!("{:.2}", label_at.1),
                anchor: RadarGeometry::label_anchor(index, axes),
                vertex,
                vertex_x: format!("{:.2}", vertex.0),
                vertex_y: format!("{:.2}", vertex.1),
                value: format_score(scores.score(*dimension)),
            }
        })
        .collect();

    let shape = format_points(&axis_views.iter().map(|axis| axis.vertex).collect::<Vec<_>>());
    let scale = format!("{:.2}", geometry.domain_max);

    rsx! {
        div {
            class: "spider-diagram",
            style: "width: {WIDTH}px;",

            h2 { "{title}" }

            svg {
                width: "{WIDTH}",
                height: "{HEIGHT}",
                "viewBox": "0 0 {WIDTH} {HEIGHT}",

                // Grid
                for (index, ring) in rings.iter().enumerate() {
                    polygon {
                        key: "ring-{index}",
                        points: "{ring}",
                        fill: "none",
                        stroke: "#ccc",
                    }
                }
                for axis in axis_views.iter() {
                    line {
                        key: "axis-{axis.label}",
                        x1: "{geometry.cx}",
                        y1: "{geometry.cy}",
                        x2: "{axis.end_x}",
                        y2: "{axis.end_y}",
                        stroke: "#ccc",
                    }
                    text {
                        key: "label-{axis.label}",
                        x: "{axis.label_x}",
                        y: "{axis.label_y}",
                        "text-anchor": "{axis.anchor}",
                        "dominant-baseline": "middle",
                        "font-size": "12",
                        "{axis.label}"
                    }
                }

                polygon {
                    points: "{shape}",
                    stroke: FILL,
                    fill: FILL,
                    "fill-opacity": "0.6",
                }

                // Vertices with tooltips
                for axis in axis_views.iter() {
                    circle {
                        key: "vertex-{axis.label}",
                        cx: "{axis.vertex_x}",
                        cy: "{axis.vertex_y}",
                        r: "4",
                        fill: FILL,
                        title { "Dimension: {axis.label}: {axis.value}" }
                    }
                }
            }

            p {
                style: "font-size: 12px; color: #666;",
                "Skala 0 – {scale}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_first_axis_points_up_and_second_goes_clockwise() {
        let geometry = RadarGeometry::new(100.0, 100.0, 50.0, &[]);

        assert!(close(geometry.point(0, 6, Some(1.0)), (100.0, 50.0)));
        let (x, y) = geometry.point(1, 6, Some(1.0));
        assert!(x > 100.0);
        assert!(y < 100.0);
    }

    #[test]
    fn test_absent_and_negative_values_sit_at_centre() {
        let geometry = RadarGeometry::new(100.0, 100.0, 50.0, &[]);

        assert!(close(geometry.point(2, 6, None), (100.0, 100.0)));
        assert!(close(geometry.point(2, 6, Some(-0.5)), (100.0, 100.0)));
        assert!(close(geometry.point(2, 6, Some(f64::NAN)), (100.0, 100.0)));
    }

    #[test]
    fn test_domain_widens_for_values_above_one() {
        let values = [Some(0.5), Some(2.0), None];
        let geometry = RadarGeometry::new(0.0, 0.0, 100.0, &values);

        assert_eq!(geometry.domain_max, 2.0);
        assert!(close(geometry.point(0, 6, Some(2.0)), (0.0, -100.0)));

        let unit = RadarGeometry::new(0.0, 0.0, 100.0, &[Some(0.3)]);
        assert_eq!(unit.domain_max, 1.0);
    }

    #[test]
    fn test_ring_has_one_vertex_per_axis() {
        let geometry = RadarGeometry::new(0.0, 0.0, 100.0, &[]);
        let ring = geometry.ring(0.5, 6);

        assert_eq!(ring.len(), 6);
        assert!(close(ring[0], (0.0, -50.0)));
        assert!(close(ring[3], (0.0, 50.0)));
    }

    #[test]
    fn test_label_anchors() {
        assert_eq!(RadarGeometry::label_anchor(0, 6), "middle");
        assert_eq!(RadarGeometry::label_anchor(1, 6), "start");
        assert_eq!(RadarGeometry::label_anchor(3, 6), "middle");
        assert_eq!(RadarGeometry::label_anchor(4, 6), "end");
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_points(&[(1.0, 2.5), (3.333, 4.0)]), "1.00,2.50 3.33,4.00");
        assert_eq!(format_score(Some(&Score::Number(0.42))), "0.420");
        assert_eq!(format_score(Some(&Score::Other(serde_json::json!("0.7")))), "0.7");
        assert_eq!(format_score(None), "n/a");
    }
}
