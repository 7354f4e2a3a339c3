//! Turning a parameter set into what the page displays.

use serde::Serialize;

use crate::figure::ChartFigure;
use crate::parameters::{ParameterStore, ReactorParameters};
use crate::readout::ReactorReadouts;
use crate::sampling::sample_curves;

/// Complete display state for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactorView {
    pub parameters: ReactorParameters,
    pub figure: ChartFigure,
    pub readouts: ReactorReadouts,
}

/// Recompute curves and readouts from scratch.
pub fn render(parameters: &ReactorParameters) -> ReactorView {
    ReactorView {
        parameters: *parameters,
        figure: ChartFigure::steady_state(&sample_curves(parameters)),
        readouts: ReactorReadouts::from(parameters),
    }
}

/// Something that can show a [`ReactorView`]: a chart library, a test recorder.
pub trait ChartSurface {
    type Error;

    fn present(&mut self, view: &ReactorView) -> Result<(), Self::Error>;
}

/// Render the store's current parameters onto `surface`.
pub fn redraw<S: ChartSurface>(
    store: &ParameterStore,
    surface: &mut S,
) -> Result<ReactorView, S::Error> {
    let view = render(&store.current());
    surface.present(&view)?;
    Ok(view)
}
