use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::RenderError;
use crate::geometry::{Axis, Coefficient, Coefficients, SurfaceFamily};
use crate::input::{format_display_value, parse_coefficient, Preset};
use crate::operations::Equation;
use crate::tessellation::{Mesh, MeshParams, TessellateQuadric};

use super::{Debouncer, PlotStyle, Renderer};

/// Render target of the visualizer plot.
pub const VISUALIZER_TARGET: &str = "plot";

/// Quiet period before a coefficient change is re-meshed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(100);

/// State of the free-form visualizer.
///
/// Every coefficient change schedules a recomputation; bursts of changes
/// within [`DEBOUNCE_DELAY`] coalesce into one mesh of the latest values,
/// produced by [`poll`](Self::poll).
#[derive(Debug)]
pub struct Visualizer {
    coefficients: Coefficients,
    included: [bool; 3],
    remembered: [f64; 3],
    params: MeshParams,
    style: PlotStyle,
    pending: Debouncer<Coefficients>,
    plot_exists: bool,
    mesh: Option<Mesh>,
    recomputations: usize,
}

impl Visualizer {
    /// Creates a visualizer showing the unit sphere, with the first render
    /// already scheduled.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self::with_params(MeshParams::visualizer(), PlotStyle::visualizer(), now)
    }

    /// Creates a visualizer with custom mesh and plot settings.
    #[must_use]
    pub fn with_params(params: MeshParams, style: PlotStyle, now: Instant) -> Self {
        let coefficients = Coefficients::default();
        let mut pending = Debouncer::new(DEBOUNCE_DELAY);
        pending.schedule(now, coefficients);
        Self {
            coefficients,
            included: [true; 3],
            remembered: [1.0; 3],
            params,
            style,
            pending,
            plot_exists: false,
            mesh: None,
            recomputations: 0,
        }
    }

    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Returns `true` if the term along `axis` is enabled.
    #[must_use]
    pub fn is_included(&self, axis: Axis) -> bool {
        self.included[axis.index()]
    }

    /// Sets one coefficient and schedules a recomputation.
    ///
    /// While a term is disabled its value stays zero; the new value is
    /// remembered and applied when the term is enabled again.
    pub fn set_coefficient(&mut self, coefficient: Coefficient, value: f64, now: Instant) {
        if let Some(axis) = axis_of(coefficient) {
            if !self.is_included(axis) {
                self.remembered[axis.index()] = value;
                return;
            }
        }
        self.coefficients = self.coefficients.with(coefficient, value);
        self.schedule(now);
    }

    /// Parses `text` (decimal or fraction, `0` on failure) into a
    /// coefficient. Returns the value that was applied.
    pub fn edit_coefficient(&mut self, coefficient: Coefficient, text: &str, now: Instant) -> f64 {
        let value = parse_coefficient(text);
        self.set_coefficient(coefficient, value, now);
        value
    }

    /// Enables or disables the quadratic term along `axis`.
    ///
    /// Disabling remembers the current value and zeroes the term. Enabling
    /// restores the remembered value, or `1` if it was zero.
    #[allow(clippy::float_cmp)]
    pub fn set_included(&mut self, axis: Axis, included: bool, now: Instant) {
        let idx = axis.index();
        if self.included[idx] == included {
            return;
        }
        self.included[idx] = included;
        let coefficient = axis.coefficient();
        let value = if included {
            let remembered = self.remembered[idx];
            if remembered == 0.0 {
                1.0
            } else {
                remembered
            }
        } else {
            self.remembered[idx] = self.coefficients.along(axis);
            0.0
        };
        self.coefficients = self.coefficients.with(coefficient, value);
        self.schedule(now);
    }

    /// Loads a preset, enabling every term.
    pub fn load_preset(&mut self, preset: Preset, now: Instant) {
        self.included = [true; 3];
        self.coefficients = preset.coefficients();
        self.schedule(now);
    }

    /// The equation readout, with disabled terms shown as `0x²`.
    #[must_use]
    pub fn equation(&self) -> String {
        Equation::new(self.coefficients)
            .with_disabled_terms(self.included.map(|on| !on))
            .to_string()
    }

    #[must_use]
    pub fn family(&self) -> SurfaceFamily {
        self.coefficients.classify()
    }

    /// Sign-pattern description of the current surface.
    #[must_use]
    pub fn description(&self) -> String {
        self.family().describe_signs(&self.coefficients)
    }

    /// A coefficient formatted for its value label.
    #[must_use]
    pub fn display_value(&self, coefficient: Coefficient) -> String {
        format_display_value(self.coefficients.get(coefficient))
    }

    /// The most recently computed mesh.
    #[must_use]
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Number of meshes computed so far.
    #[must_use]
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Returns `true` while a recomputation is waiting for the input to
    /// settle.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Runs a due recomputation and hands the mesh to `renderer`.
    ///
    /// The first successful render creates the plot; later ones update it
    /// in place, and create it again if the target lost it. Renderer
    /// failures are logged and otherwise ignored.
    /// Returns `true` if a mesh was computed.
    pub fn poll<R: Renderer>(&mut self, now: Instant, renderer: &mut R) -> bool {
        let Some(coefficients) = self.pending.poll(now) else {
            return false;
        };

        let mesh = TessellateQuadric::new(coefficients, self.params).execute();
        self.recomputations += 1;
        debug!(family = ?mesh.family, ?coefficients, "visualizer mesh recomputed");

        let rendered = if self.plot_exists {
            match renderer.react(VISUALIZER_TARGET, &mesh, &self.style) {
                Err(RenderError::MissingPlot(_)) => {
                    debug!("visualizer plot vanished, creating it again");
                    self.plot_exists = false;
                    renderer.new_plot(VISUALIZER_TARGET, &mesh, &self.style)
                }
                other => other,
            }
        } else {
            renderer.new_plot(VISUALIZER_TARGET, &mesh, &self.style)
        };
        match rendered {
            Ok(()) => self.plot_exists = true,
            Err(err) => warn!(%err, "failed to render visualizer plot"),
        }

        self.mesh = Some(mesh);
        true
    }

    fn schedule(&mut self, now: Instant) {
        self.pending.schedule(now, self.coefficients);
    }
}

fn axis_of(coefficient: Coefficient) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|axis| axis.coefficient() == coefficient)
}
