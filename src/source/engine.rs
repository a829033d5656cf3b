//! Per-cell source evaluation.

use crate::config::SolverConfig;
use crate::mesh::{Grid, Topography};
use crate::solver::{FieldState, ShallowState};
use crate::source::{BedSlopeSource, FrictionScheme, ManningFriction, SourceContext, SourceTerm};

/// Sums the source terms of a cell.
///
/// Border cells and dry cells get the zero source. With
/// [`FrictionScheme::SemiImplicit`] friction is left out of the sum and
/// applied afterwards through [`SourceEngine::finish_update`].
pub struct SourceEngine {
    sources: Vec<Box<dyn SourceTerm>>,
    friction: FrictionScheme,
    g: f64,
    h_dry: f64,
    epsilon: f64,
}

impl SourceEngine {
    /// Bed slope plus Manning friction treated per `config.friction`.
    pub fn new(config: &SolverConfig) -> Self {
        let mut sources: Vec<Box<dyn SourceTerm>> = vec![Box::new(BedSlopeSource)];
        if config.friction == FrictionScheme::Explicit {
            sources.push(Box::new(ManningFriction));
        }
        Self {
            sources,
            friction: config.friction,
            g: config.gravity,
            h_dry: config.h_dry,
            epsilon: config.epsilon,
        }
    }

    /// Add an extra explicit source term.
    pub fn with_source(mut self, source: Box<dyn SourceTerm>) -> Self {
        self.sources.push(source);
        self
    }

    /// Names of the explicit source terms, in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Friction time treatment.
    pub fn friction(&self) -> FrictionScheme {
        self.friction
    }

    /// Explicit source `S` of cell `(i, j)`.
    pub fn evaluate(
        &self,
        grid: &Grid,
        topography: &Topography,
        state: &FieldState,
        i: usize,
        j: usize,
    ) -> ShallowState {
        if grid.is_border(i, j) {
            return ShallowState::zero();
        }
        let k = grid.index(i, j);
        let primitive = state.primitive(k);
        if primitive.h < self.h_dry {
            return ShallowState::zero();
        }

        let ctx = SourceContext {
            primitive,
            bed_slope: topography.slope(k),
            manning_n: topography.manning(k),
            g: self.g,
            h_dry: self.h_dry,
            epsilon: self.epsilon,
        };
        self.sources
            .iter()
            .fold(ShallowState::zero(), |acc, s| acc + s.evaluate(&ctx))
    }

    /// Post-update treatment of an updated cell state `U*`.
    ///
    /// Applies semi-implicit friction damping when selected; otherwise
    /// returns `U*` unchanged.
    #[inline]
    pub fn finish_update(&self, q: ShallowState, manning_n: f64, dt: f64) -> ShallowState {
        match self.friction {
            FrictionScheme::Explicit => q,
            FrictionScheme::SemiImplicit => ManningFriction::semi_implicit_update(
                q,
                manning_n,
                dt,
                self.g,
                self.h_dry,
                self.epsilon,
            ),
        }
    }
}

impl std::fmt::Debug for SourceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceEngine")
            .field("sources", &self.names())
            .field("friction", &self.friction)
            .finish()
    }
}
