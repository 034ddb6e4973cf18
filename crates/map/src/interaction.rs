/// Host-supplied capability invoked with a project id on feature click.
pub type FeatureClickHandler = Box<dyn Fn(i64)>;

/// Wires feature activation to the host callback.
///
/// An unbound bridge is a valid, common configuration; activating it is a
/// silent no-op.
pub struct ClickBridge {
    handler: Option<FeatureClickHandler>,
}

impl ClickBridge {
    pub fn new(handler: Option<FeatureClickHandler>) -> Self {
        Self { handler }
    }

    pub fn unbound() -> Self {
        Self { handler: None }
    }

    pub fn is_bound(&self) -> bool {
        self.handler.is_some()
    }

    /// Invokes the handler exactly once per call.
    pub fn activate(&self, project_id: i64) {
        if let Some(handler) = &self.handler {
            handler(project_id);
        }
    }
}

impl std::fmt::Debug for ClickBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickBridge")
            .field("bound", &self.is_bound())
            .finish()
    }
}
