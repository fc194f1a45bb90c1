/// Capability the query view needs from the service that owns query state.
pub trait QueryService {
    /// Prepare the service. Called once, before the view uses it.
    fn init(&mut self);
}

/// Owns a query service and initializes it on construction.
///
/// ```
/// use qsize::{QueryController, QueryService};
///
/// #[derive(Default)]
/// struct Jobs {
///     ready: bool,
///     submitted: Vec<String>,
/// }
///
/// impl QueryService for Jobs {
///     fn init(&mut self) {
///         self.ready = true;
///     }
/// }
///
/// let mut controller = QueryController::new(Jobs::default());
/// assert!(controller.service().ready);
///
/// controller.service_mut().submitted.push("SELECT 1".to_string());
/// assert_eq!(controller.service().submitted.len(), 1);
/// ```
pub struct QueryController<S: QueryService> {
    service: S,
}

impl<S: QueryService> QueryController<S> {
    pub fn new(mut service: S) -> Self {
        tracing::debug!("initializing query service");
        service.init();
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }
}
