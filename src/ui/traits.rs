//! Core traits for the UI layer

use super::error::Result;
use crate::picker::{MultiSelect, PickerOutcome, PickerView, SingleSelect};

/// A frontend that drives a picker session until it closes
///
/// Implementations talk to the session only through [`PickerView`], so the
/// same frontend serves both pickers and any item type.
pub trait PickerFrontend {
    /// Run the session interactively
    ///
    /// Returning `Ok` with the view still open is treated as a cancel by
    /// [`pick_one`] and [`pick_many`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal or prompt cannot be driven.
    fn run(&self, view: &mut dyn PickerView) -> Result<()>;
}

/// Run a single-select session through `frontend`
///
/// # Errors
///
/// Propagates frontend failures.
pub fn pick_one<T: Clone>(
    frontend: &dyn PickerFrontend,
    mut picker: SingleSelect<T>,
) -> Result<PickerOutcome<T>> {
    frontend.run(&mut picker)?;
    Ok(picker.into_outcome())
}

/// Run a multi-select session through `frontend`
///
/// # Errors
///
/// Propagates frontend failures.
pub fn pick_many<T: Clone>(
    frontend: &dyn PickerFrontend,
    mut picker: MultiSelect<T>,
) -> Result<PickerOutcome<T>> {
    frontend.run(&mut picker)?;
    Ok(picker.into_outcome())
}
