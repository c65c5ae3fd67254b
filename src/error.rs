use crate::render::error::RenderError;
use crate::rentals::error::RentalDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    RentalData(#[from] RentalDataError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
