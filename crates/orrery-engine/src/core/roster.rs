use crate::core::body::OrbitalBody;

/// Baseline bodies plus the working copy that user edits mutate.
/// Bodies are addressed by their index in the baseline order.
pub struct BodyRoster {
    baseline: Vec<OrbitalBody>,
    bodies: Vec<OrbitalBody>,
}

impl BodyRoster {
    /// Create a roster whose working copy starts equal to `baseline`.
    pub fn new(baseline: Vec<OrbitalBody>) -> Self {
        let bodies = baseline.clone();
        Self { baseline, bodies }
    }

    /// Restore every working body from the baseline by deep copy.
    pub fn reset(&mut self) {
        self.bodies.clone_from(&self.baseline);
    }

    /// Get a working body by index.
    pub fn get(&self, index: usize) -> Option<&OrbitalBody> {
        self.bodies.get(index)
    }

    /// Get a mutable working body by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut OrbitalBody> {
        self.bodies.get_mut(index)
    }

    /// Iterate over the working bodies in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &OrbitalBody> {
        self.bodies.iter()
    }

    /// The untouched startup bodies.
    pub fn baseline(&self) -> &[OrbitalBody] {
        &self.baseline
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for BodyRoster {
    fn default() -> Self {
        Self::new(crate::core::body::default_bodies())
    }
}
