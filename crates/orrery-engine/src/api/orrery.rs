use std::f64::consts::TAU;

use glam::DVec2;

use crate::api::types::{DisplayEvent, DisplaySink};
use crate::assets::catalog::BodyCatalog;
use crate::core::body::OrbitalBody;
use crate::core::clock::{self, SimClock};
use crate::core::orbit::{self, ORBIT_STEPS};
use crate::core::roster::BodyRoster;
use crate::input::command::{Command, EditCommand, PanCommand};
use crate::renderer::traits::DrawContext;
use crate::renderer::view::{PanState, ViewTransform, DEFAULT_ZOOM_SENSITIVITY};

/// Drawing and timing parameters.
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    /// Surface width in pixels (default: 800).
    pub width: f64,
    /// Surface height in pixels (default: 600).
    pub height: f64,
    /// Segments per orbit path (default: 100).
    pub orbit_steps: usize,
    /// Sun radius in world pixels (default: 30).
    pub sun_radius: f64,
    pub sun_color: String,
    /// Orbit path stroke color.
    pub orbit_color: String,
    /// Body marker radius in world pixels (default: 5).
    pub marker_radius: f64,
    pub label_color: String,
    /// Name label position relative to the marker.
    pub label_offset: DVec2,
    /// Vertical distance from the name label to the info label.
    pub label_line_height: f64,
    /// Zoom exponent per unit of wheel delta (default: 0.001).
    pub zoom_sensitivity: f64,
    /// Days advanced per frame at startup (default: 1).
    pub initial_speed: f64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            orbit_steps: ORBIT_STEPS,
            sun_radius: 30.0,
            sun_color: "yellow".to_string(),
            orbit_color: "white".to_string(),
            marker_radius: 5.0,
            label_color: "white".to_string(),
            label_offset: DVec2::new(10.0, 0.0),
            label_line_height: 10.0,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            initial_speed: 1.0,
        }
    }
}

/// The whole simulation: bodies, clock, and view.
///
/// State only changes through [`Orrery::apply`] and [`Orrery::step`];
/// [`Orrery::render`] is read-only. Display updates queue up as
/// [`DisplayEvent`]s until the host flushes them.
pub struct Orrery {
    config: OrreryConfig,
    roster: BodyRoster,
    clock: SimClock,
    view: ViewTransform,
    pan: PanState,
    events: Vec<DisplayEvent>,
}

impl Orrery {
    pub fn new(config: OrreryConfig, baseline: Vec<OrbitalBody>) -> Self {
        let clock = SimClock::new(config.initial_speed);
        Self {
            config,
            roster: BodyRoster::new(baseline),
            clock,
            view: ViewTransform::new(),
            pan: PanState::new(),
            events: Vec::with_capacity(8),
        }
    }

    pub fn with_catalog(config: OrreryConfig, catalog: BodyCatalog) -> Self {
        Self::new(config, catalog.bodies)
    }

    // -- Accessors --

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn roster(&self) -> &BodyRoster {
        &self.roster
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn is_dragging(&self) -> bool {
        self.pan.is_dragging()
    }

    /// Sun position in world space: the middle of the surface.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.config.width / 2.0, self.config.height / 2.0)
    }

    /// World position of a body at the current time.
    pub fn body_position(&self, index: usize) -> Option<DVec2> {
        self.roster
            .get(index)
            .map(|body| orbit::body_position(body, self.center(), self.clock.elapsed()))
    }

    // -- Update --

    /// Apply one command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Zoom { pointer, delta_y } => {
                self.view.zoom_at(pointer, delta_y, self.config.zoom_sensitivity);
            }
            Command::Pan(PanCommand::Begin(pointer)) => self.pan.begin(pointer, &self.view),
            Command::Pan(PanCommand::Move(pointer)) => {
                self.pan.drag(pointer, &mut self.view);
            }
            Command::Pan(PanCommand::End) => self.pan.end(),
            Command::Edit(edit) => self.apply_edit(edit),
            Command::Reset => {
                self.roster.reset();
                log::info!("orrery: restored {} bodies from baseline", self.roster.len());
                self.events.push(DisplayEvent::Description(String::new()));
            }
            Command::SetSpeed(speed) => {
                self.clock.set_speed(speed);
                self.events.push(DisplayEvent::Speed(clock::format_speed(speed)));
            }
            Command::ResetView => {
                self.view.reset();
                self.pan.end();
            }
            Command::Resize { width, height } => {
                if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
                    self.config.width = width;
                    self.config.height = height;
                } else {
                    log::debug!("orrery: ignoring resize to {width}x{height}");
                }
            }
        }
    }

    fn apply_edit(&mut self, edit: EditCommand) {
        let Some(body) = self.roster.get_mut(edit.index) else {
            log::warn!("orrery: edit for unknown body index {}", edit.index);
            return;
        };

        if let Err(err) = edit.axis.and_then(|a| body.set_axis(a)) {
            log::debug!("{}: axis edit dropped: {err}", body.name);
        }
        if let Err(err) = edit.eccentricity.and_then(|e| body.set_eccentricity(e)) {
            log::debug!("{}: eccentricity edit dropped: {err}", body.name);
        }
        if let Err(err) = edit.period.and_then(|p| body.set_period(p)) {
            log::debug!("{}: period edit dropped: {err}", body.name);
        }
        body.color = edit.color;

        let info = body.info.clone();
        self.events.push(DisplayEvent::Description(info));
    }

    /// Advance the clock one frame and publish the elapsed time.
    pub fn step(&mut self) {
        self.clock.tick();
        self.events
            .push(DisplayEvent::Time(format!("Time: {}", self.clock.format())));
    }

    // -- Drawing --

    /// Paint the current state: clear, sun, then each body's orbit and marker.
    pub fn render<D: DrawContext + ?Sized>(&self, ctx: &mut D) {
        let config = &self.config;
        ctx.clear_rect(0.0, 0.0, config.width, config.height);

        let center = self.center();
        self.view.scoped(ctx, |ctx| {
            ctx.begin_path();
            ctx.arc(center.x, center.y, config.sun_radius, 0.0, TAU);
            ctx.set_fill_style(&config.sun_color);
            ctx.fill();
        });

        for body in self.roster.iter() {
            self.draw_orbit(ctx, body, center);
            self.draw_body(ctx, body, center);
        }
    }

    /// Render, then step. One call per display refresh.
    pub fn frame<D: DrawContext + ?Sized>(&mut self, ctx: &mut D) {
        self.render(ctx);
        self.step();
    }

    fn draw_orbit<D: DrawContext + ?Sized>(&self, ctx: &mut D, body: &OrbitalBody, center: DVec2) {
        let points = orbit::path_points(body, center, self.config.orbit_steps);
        self.view.scoped(ctx, |ctx| {
            ctx.begin_path();
            if let Some((first, rest)) = points.split_first() {
                ctx.move_to(first.x, first.y);
                for p in rest {
                    ctx.line_to(p.x, p.y);
                }
            }
            ctx.close_path();
            ctx.set_stroke_style(&self.config.orbit_color);
            ctx.stroke();
        });
    }

    fn draw_body<D: DrawContext + ?Sized>(&self, ctx: &mut D, body: &OrbitalBody, center: DVec2) {
        let config = &self.config;
        let pos = orbit::body_position(body, center, self.clock.elapsed());
        let label = pos + config.label_offset;
        self.view.scoped(ctx, |ctx| {
            ctx.begin_path();
            ctx.arc(pos.x, pos.y, config.marker_radius, 0.0, TAU);
            ctx.set_fill_style(&body.color);
            ctx.fill();

            ctx.set_fill_style(&config.label_color);
            ctx.fill_text(&body.name, label.x, label.y);
            ctx.fill_text(&body.info, label.x, label.y + config.label_line_height);
        });
    }

    // -- Output --

    /// Take the display updates produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand pending display updates to `sink`.
    pub fn flush_events(&mut self, sink: &mut impl DisplaySink) {
        for event in self.events.drain(..) {
            sink.show(event);
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::with_catalog(OrreryConfig::default(), BodyCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawOp, RecordingSurface};

    fn edit(index: usize, axis: &str, e: &str, period: &str, color: &str) -> Command {
        Command::Edit(EditCommand::from_fields(index, axis, e, period, color))
    }

    #[test]
    fn invalid_axis_is_ignored_and_valid_axis_applied() {
        let mut orrery = Orrery::default();
        orrery.apply(edit(0, "-5", "", "", "gray"));
        assert_eq!(orrery.roster().get(0).unwrap().a, 50.0);

        orrery.apply(edit(0, "80", "", "", "gray"));
        assert_eq!(orrery.roster().get(0).unwrap().a, 80.0);
    }

    #[test]
    fn edit_applies_fields_independently() {
        let mut orrery = Orrery::default();
        orrery.apply(edit(3, "abc", "0.5", "0", "#123456"));

        let mars = orrery.roster().get(3).unwrap();
        assert_eq!(mars.a, 140.0);
        assert_eq!(mars.e, 0.5);
        assert_eq!(mars.period, 687.0);
        assert_eq!(mars.color, "#123456");
        assert_eq!(
            orrery.drain_events(),
            vec![DisplayEvent::Description("Known as the Red Planet.".into())]
        );
    }

    #[test]
    fn numeric_edit_applies_every_valid_field() {
        let mut orrery = Orrery::default();
        orrery.apply(Command::Edit(EditCommand::new(4, 220.0, 1.2, 4000.0, "tan")));

        let jupiter = orrery.roster().get(4).unwrap();
        assert_eq!(jupiter.a, 220.0);
        assert_eq!(jupiter.e, 0.0489);
        assert_eq!(jupiter.period, 4000.0);
        assert_eq!(jupiter.color, "tan");
    }

    #[test]
    fn edit_for_missing_body_changes_nothing() {
        let mut orrery = Orrery::default();
        orrery.apply(edit(42, "10", "0.1", "10", "red"));
        assert!(orrery.drain_events().is_empty());
        assert_eq!(
            orrery.roster().iter().cloned().collect::<Vec<_>>(),
            orrery.roster().baseline().to_vec()
        );
    }

    #[test]
    fn reset_restores_baseline_and_clears_description() {
        let mut orrery = Orrery::default();
        for i in 0..orrery.roster().len() {
            orrery.apply(edit(i, "12", "0.9", "3", "pink"));
        }
        orrery.drain_events();

        orrery.apply(Command::Reset);
        assert_eq!(
            orrery.roster().iter().cloned().collect::<Vec<_>>(),
            crate::core::body::default_bodies()
        );
        assert_eq!(orrery.drain_events(), vec![DisplayEvent::Description(String::new())]);

        orrery.apply(edit(2, "500", "", "", "blue"));
        assert_eq!(orrery.roster().baseline()[2].a, 100.0);
    }

    #[test]
    fn zero_speed_pauses_and_negative_reverses() {
        let mut orrery = Orrery::default();
        let mut surface = RecordingSurface::new();
        orrery.frame(&mut surface);
        assert_eq!(orrery.clock().elapsed(), 1.0);

        orrery.apply(Command::SetSpeed(0.0));
        for _ in 0..10 {
            orrery.frame(&mut surface);
        }
        assert_eq!(orrery.clock().elapsed(), 1.0);

        orrery.apply(Command::SetSpeed(-0.5));
        let mut last = orrery.clock().elapsed();
        for _ in 0..4 {
            orrery.step();
            assert!(orrery.clock().elapsed() < last);
            last = orrery.clock().elapsed();
        }
    }

    #[test]
    fn step_emits_time_and_speed_emits_readout() {
        let mut orrery = Orrery::default();
        orrery.apply(Command::SetSpeed(2.5));
        orrery.step();
        assert_eq!(
            orrery.drain_events(),
            vec![
                DisplayEvent::Speed("2.5".into()),
                DisplayEvent::Time("Time: 2 days, 0 months, 0 years".into()),
            ]
        );
    }

    #[test]
    fn frame_draws_sun_orbits_and_markers() {
        let orrery = Orrery::default();
        let mut surface = RecordingSurface::new();
        orrery.render(&mut surface);

        let ops = surface.ops();
        assert_eq!(ops[0], DrawOp::ClearRect(0.0, 0.0, 800.0, 600.0));
        assert_eq!(ops[1], DrawOp::Save);
        assert_eq!(
            ops[5],
            DrawOp::Arc { x: 400.0, y: 300.0, radius: 30.0, start: 0.0, end: TAU }
        );
        assert_eq!(ops[6], DrawOp::FillStyle("yellow".into()));

        let bodies = orrery.roster().len();
        // One scope for the sun, two per body
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Save)), 1 + 2 * bodies);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Stroke)), bodies);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::LineTo(..))), 100 * bodies);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::ClosePath)), bodies);
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.max_depth(), 1);

        let texts = surface.texts();
        assert_eq!(texts.len(), 2 * bodies);
        assert_eq!(texts[0], "Mercury");
        assert_eq!(texts[1], "Closest to the Sun.");
    }

    #[test]
    fn markers_are_labelled_to_the_right() {
        let orrery = Orrery::default();
        let mut surface = RecordingSurface::new();
        orrery.render(&mut surface);

        // At t = 0 every body sits at periapsis on the +x axis
        let earth_x = 400.0 + 100.0 * (1.0 - 0.016708);
        let labels: Vec<_> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, x, y } if text.contains("umans") || text == "Earth" => {
                    Some((*x, *y))
                }
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 2);
        assert!((labels[0].0 - (earth_x + 10.0)).abs() < 1e-9);
        assert!((labels[0].1 - 300.0).abs() < 1e-9);
        assert!((labels[1].1 - 310.0).abs() < 1e-9);
    }

    #[test]
    fn view_commands_pan_and_zoom() {
        let mut orrery = Orrery::default();
        orrery.apply(Command::Pan(PanCommand::Move(DVec2::new(50.0, 50.0))));
        assert_eq!(orrery.view().offset, DVec2::ZERO);

        orrery.apply(Command::Pan(PanCommand::Begin(DVec2::new(100.0, 100.0))));
        orrery.apply(Command::Pan(PanCommand::Move(DVec2::new(120.0, 90.0))));
        assert_eq!(orrery.view().offset, DVec2::new(20.0, -10.0));
        orrery.apply(Command::Pan(PanCommand::End));
        assert!(!orrery.is_dragging());

        let pointer = DVec2::new(300.0, 200.0);
        let before = orrery.view().screen_to_world(pointer);
        orrery.apply(Command::Zoom { pointer, delta_y: -250.0 });
        let after = orrery.view().screen_to_world(pointer);
        assert!((before - after).length() < 1e-9);
        assert!(orrery.view().scale > 1.0);

        orrery.apply(Command::ResetView);
        assert_eq!(*orrery.view(), ViewTransform::new());
    }

    #[test]
    fn resize_moves_the_sun() {
        let mut orrery = Orrery::default();
        orrery.apply(Command::Resize { width: 1024.0, height: 768.0 });
        assert_eq!(orrery.center(), DVec2::new(512.0, 384.0));

        orrery.apply(Command::Resize { width: 0.0, height: 768.0 });
        assert_eq!(orrery.center(), DVec2::new(512.0, 384.0));
    }

    #[test]
    fn body_position_tracks_clock() {
        let mut orrery = Orrery::default();
        let start = orrery.body_position(0).unwrap();
        orrery.step();
        let next = orrery.body_position(0).unwrap();
        assert!((start - next).length() > 0.0);
        assert!(orrery.body_position(99).is_none());
    }
}
