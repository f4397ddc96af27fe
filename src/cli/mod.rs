pub mod convert;
pub mod history;
pub mod rates;
pub mod setup;
pub mod trend;
pub mod ui;

use crate::core::{AppState, RateProvider};

/// Fetches rates into `state`, showing a spinner while the fetch is pending.
pub(crate) async fn refresh_with_spinner(state: &mut AppState, provider: &dyn RateProvider) {
    let message = if state.inputs.live {
        "Fetching live rates..."
    } else {
        "Loading rates..."
    };
    let spinner = ui::new_spinner(message);
    state.refresh_rates(provider).await;
    spinner.finish_and_clear();
}
