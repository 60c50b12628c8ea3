use worldlet_kernel::Entity;

/// Inert entity: emits the standard signals and never moves.
///
/// Uses the trait's default init and update bodies, making it the reference
/// for the no-op-motion baseline the other variants override.
pub struct Prop {
    name: String,
    position: f64,
}

impl Prop {
    pub fn new(name: impl Into<String>, position: f64) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

impl Entity for Prop {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> f64 {
        self.position
    }
}
