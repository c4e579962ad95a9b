use std::f64::consts::{FRAC_PI_2, TAU};

use crate::domain::{Skill, SkillLevel};

/// Outer radius of the chart, sized for a 400px canvas.
pub const RADAR_RADIUS: f64 = 150.0;
/// Number of concentric reference circles.
pub const GRID_RINGS: u32 = 5;
/// Distance between a spoke's outer end and its label.
pub const LABEL_GAP: f64 = 20.0;
pub const POINT_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

/// Colors and fonts used when painting the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarTheme {
    pub grid: Stroke,
    pub label_font: &'static str,
    pub label_color: &'static str,
    pub area_fill: &'static str,
    pub outline: Stroke,
    pub point_color: &'static str,
}

impl Default for RadarTheme {
    fn default() -> Self {
        Self {
            grid: Stroke {
                color: "rgba(0, 255, 198, 0.2)",
                width: 1.0,
            },
            label_font: "12px Inter",
            label_color: "#00FFC6",
            area_fill: "rgba(0, 255, 198, 0.2)",
            outline: Stroke {
                color: "#00FFC6",
                width: 2.0,
            },
            point_color: "#00FFC6",
        }
    }
}

/// The handful of 2D primitives the chart needs. Labels are drawn centered
/// on their anchor.
pub trait DrawSurface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke);
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
    /// Closed path through `points`, filled then outlined.
    fn polygon(&mut self, points: &[Point], fill: &str, stroke: Stroke);
    fn text(&mut self, text: &str, at: Point, font: &str, color: &str);
}

/// Angle of spoke `index` out of `count`: the first spoke points straight up
/// and the rest follow clockwise in screen coordinates.
pub fn spoke_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    (index as f64).mul_add(TAU / count as f64, -FRAC_PI_2)
}

pub fn plotted_distance(radius: f64, level: SkillLevel) -> f64 {
    radius * level.fraction()
}

/// Layout of a chart with `count` spokes around `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
    pub count: usize,
}

impl RadarGeometry {
    pub const fn new(center: Point, radius: f64, count: usize) -> Self {
        Self {
            center,
            radius,
            count,
        }
    }

    /// Centers the chart on a surface of the given pixel size.
    pub fn centered(width: f64, height: f64, radius: f64, count: usize) -> Self {
        Self::new(Point::new(width / 2.0, height / 2.0), radius, count)
    }

    pub fn angle(&self, index: usize) -> f64 {
        spoke_angle(index, self.count)
    }

    /// Point `distance` away from the center along spoke `index`.
    pub fn along(&self, index: usize, distance: f64) -> Point {
        let angle = self.angle(index);
        Point::new(
            angle.cos().mul_add(distance, self.center.x),
            angle.sin().mul_add(distance, self.center.y),
        )
    }

    pub fn spoke_end(&self, index: usize) -> Point {
        self.along(index, self.radius)
    }

    pub fn label_anchor(&self, index: usize) -> Point {
        self.along(index, self.radius + LABEL_GAP)
    }

    pub fn skill_point(&self, index: usize, level: SkillLevel) -> Point {
        self.along(index, plotted_distance(self.radius, level))
    }

    /// Radii of the reference circles, innermost first.
    pub fn grid_radii(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=GRID_RINGS).map(|ring| self.radius / f64::from(GRID_RINGS) * f64::from(ring))
    }
}

/// Skill levels plotted on a circular grid.
#[derive(Debug, Clone)]
pub struct RadarChart<'a> {
    skills: &'a [Skill],
    radius: f64,
    theme: RadarTheme,
}

impl<'a> RadarChart<'a> {
    pub fn new(skills: &'a [Skill]) -> Self {
        Self {
            skills,
            radius: RADAR_RADIUS,
            theme: RadarTheme::default(),
        }
    }

    pub fn geometry_for<S: DrawSurface + ?Sized>(&self, surface: &S) -> RadarGeometry {
        let (width, height) = surface.size();
        RadarGeometry::centered(width, height, self.radius, self.skills.len())
    }

    /// Vertices of the skill polygon, in skill order.
    pub fn polygon(&self, geometry: &RadarGeometry) -> Vec<Point> {
        self.skills
            .iter()
            .enumerate()
            .map(|(index, skill)| geometry.skill_point(index, skill.level))
            .collect()
    }

    /// Paints the whole chart. Output depends only on the skills and the
    /// surface size.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let geometry = self.geometry_for(surface);
        let theme = &self.theme;

        surface.clear();

        for ring_radius in geometry.grid_radii() {
            surface.stroke_circle(geometry.center, ring_radius, theme.grid);
        }

        for (index, skill) in self.skills.iter().enumerate() {
            surface.line(geometry.center, geometry.spoke_end(index), theme.grid);
            surface.text(
                &skill.name,
                geometry.label_anchor(index),
                theme.label_font,
                theme.label_color,
            );
        }

        if self.skills.is_empty() {
            return;
        }

        let points = self.polygon(&geometry);
        surface.polygon(&points, theme.area_fill, theme.outline);

        for point in &points {
            surface.fill_circle(*point, POINT_RADIUS, theme.point_color);
        }
    }
}

/// Fires once, on the first report that the canvas is visible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RadarTrigger {
    fired: bool,
}

impl RadarTrigger {
    pub const fn new() -> Self {
        Self { fired: false }
    }

    pub const fn has_fired(self) -> bool {
        self.fired
    }

    /// Returns `true` when this intersection should schedule the draw.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
