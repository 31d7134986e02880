use thiserror::Error;

/// Errors surfaced through the node-view contract.
#[derive(Error, Debug)]
pub enum ViewError {
    /// The rendered output's first element child is missing the
    /// `data-node-view-wrapper` marker. The owning component must wrap
    /// its output in the wrapper primitive; raised at DOM-access time so
    /// it surfaces during development.
    #[error(
        "node view `{component}` rendered without the node view wrapper marker; \
         wrap the component output in the node view wrapper primitive"
    )]
    MissingWrapperMarker { component: String },
}
