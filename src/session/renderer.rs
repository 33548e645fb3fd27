use std::collections::HashMap;

use crate::error::RenderError;
use crate::math::Point3;
use crate::tessellation::Mesh;

/// Surface lighting coefficients passed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.8,
            diffuse: 0.8,
            specular: 0.1,
        }
    }
}

/// Styling options that accompany a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Plot title, if any.
    pub title: Option<String>,
    /// Named color scale.
    pub color_scale: &'static str,
    pub opacity: f64,
    pub lighting: Lighting,
    /// Camera position relative to the scene center.
    pub camera_eye: Point3,
    /// Whether axis tick labels are drawn.
    pub show_tick_labels: bool,
}

impl PlotStyle {
    /// Style of the visualizer plot.
    #[must_use]
    pub fn visualizer() -> Self {
        Self {
            title: None,
            color_scale: "Viridis",
            opacity: 0.8,
            lighting: Lighting::default(),
            camera_eye: Point3::new(1.5, 1.5, 1.5),
            show_tick_labels: true,
        }
    }

    /// Style of the quiz plot, titled with the revealed family.
    #[must_use]
    pub fn quiz(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            camera_eye: Point3::new(1.2, 1.2, 1.2),
            show_tick_labels: false,
            ..Self::visualizer()
        }
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::visualizer()
    }
}

/// A 3D plotting backend treated as a black box.
///
/// Targets are opaque names of the surfaces a plot is drawn into.
pub trait Renderer {
    /// Creates a new plot in `target`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn new_plot(&mut self, target: &str, mesh: &Mesh, style: &PlotStyle)
        -> Result<(), RenderError>;

    /// Updates the existing plot in `target` in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or no plot exists in `target`.
    fn react(&mut self, target: &str, mesh: &Mesh, style: &PlotStyle) -> Result<(), RenderError>;

    /// Clears `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn purge(&mut self, target: &str) -> Result<(), RenderError>;
}

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    NewPlot(String),
    React(String),
    Purge(String),
}

/// A plot held by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPlot {
    pub mesh: Mesh,
    pub style: PlotStyle,
}

/// In-memory renderer that keeps the latest plot per target and a log of
/// every call.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    plots: HashMap<String, RecordedPlot>,
    calls: Vec<RenderCall>,
    fail_next: Option<RenderError>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call fail with `error`.
    pub fn fail_next(&mut self, error: RenderError) {
        self.fail_next = Some(error);
    }

    /// The plot currently held in `target`.
    #[must_use]
    pub fn plot(&self, target: &str) -> Option<&RecordedPlot> {
        self.plots.get(target)
    }

    /// Every call received so far, failed ones included.
    #[must_use]
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    fn record(&mut self, call: RenderCall) -> Result<(), RenderError> {
        self.calls.push(call);
        self.fail_next.take().map_or(Ok(()), Err)
    }
}

impl Renderer for RecordingRenderer {
    fn new_plot(
        &mut self,
        target: &str,
        mesh: &Mesh,
        style: &PlotStyle,
    ) -> Result<(), RenderError> {
        self.record(RenderCall::NewPlot(target.to_owned()))?;
        self.plots.insert(
            target.to_owned(),
            RecordedPlot {
                mesh: mesh.clone(),
                style: style.clone(),
            },
        );
        Ok(())
    }

    fn react(&mut self, target: &str, mesh: &Mesh, style: &PlotStyle) -> Result<(), RenderError> {
        self.record(RenderCall::React(target.to_owned()))?;
        let plot = self
            .plots
            .get_mut(target)
            .ok_or_else(|| RenderError::MissingPlot(target.to_owned()))?;
        plot.mesh = mesh.clone();
        plot.style = style.clone();
        Ok(())
    }

    fn purge(&mut self, target: &str) -> Result<(), RenderError> {
        self.record(RenderCall::Purge(target.to_owned()))?;
        self.plots.remove(target);
        Ok(())
    }
}
