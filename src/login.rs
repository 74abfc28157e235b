//! Login screen

use crate::context::AppContext;
use crate::error::Result;
use crate::navigation::Route;
use url::Url;

/// Start the OAuth login for a provider
///
/// Stores `provider` in the session as given, then navigates to the
/// backend's authorization entry point `{backend}/{provider}`. Returns the
/// URL navigated to.
pub fn begin_login(ctx: &AppContext, provider: &str) -> Result<Url> {
    ctx.session.set_provider(provider)?;

    let url = ctx.config().authorize_url(provider)?;
    tracing::debug!(provider, %url, "starting login");
    ctx.navigator.navigate(Route::External(url.clone()));

    Ok(url)
}

/// Finish the OAuth round trip
///
/// The backend sends the user back once it has issued the session. With a
/// provider stored this lands on the dashboard, otherwise on login. Returns
/// whether the dashboard was reached.
pub fn complete_login(ctx: &AppContext) -> Result<bool> {
    let signed_in = ctx.session.provider()?.is_some();
    let route = if signed_in {
        Route::Dashboard
    } else {
        Route::Login
    };
    tracing::debug!(?route, "login round trip finished");
    ctx.navigator.navigate(route);
    Ok(signed_in)
}
