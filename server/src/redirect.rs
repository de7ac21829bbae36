use std::net::SocketAddr;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{uri::{Authority, Scheme}, StatusCode, Uri},
    response::Redirect,
    BoxError,
};
use axum_extra::extract::Host;

/// Rewrites `uri` to the same path on `host` over https at `https_port`.
pub fn make_https(host: &str, uri: Uri, https_port: u16) -> Result<Uri, BoxError> {
    let mut parts = uri.into_parts();

    parts.scheme = Some(Scheme::HTTPS);

    if parts.path_and_query.is_none() {
        parts.path_and_query = Some("/".parse()?);
    }

    let authority: Authority = host.parse()?;
    // Authority::host drops the port, if any
    parts.authority = Some(format!("{}:{https_port}", authority.host()).parse()?);

    Ok(Uri::from_parts(parts)?)
}

/// Answers every plain http request with a permanent redirect to https.
pub async fn redirect_http_to_https(http_addr: SocketAddr, https_port: u16) -> anyhow::Result<()> {
    let redirect = move |Host(host): Host, uri: Uri| async move {
        match make_https(&host, uri, https_port) {
            Ok(uri) => Ok(Redirect::permanent(&uri.to_string())),
            Err(error) => {
                tracing::warn!(%error, "failed to convert URI to HTTPS");
                Err(StatusCode::BAD_REQUEST)
            }
        }
    };

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    tracing::info!("Redirecting http on {}", listener.local_addr()?);
    axum::serve(listener, redirect.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_scheme_and_port() {
        let uri: Uri = "/frontend/dist/index.html?x=1".parse().unwrap();
        let https = make_https("example.com:8080", uri, 8443).unwrap();
        assert_eq!(https.to_string(), "https://example.com:8443/frontend/dist/index.html?x=1");
    }

    #[test]
    fn host_without_port() {
        let https = make_https("example.com", "/".parse().unwrap(), 443).unwrap();
        assert_eq!(https.to_string(), "https://example.com:443/");
    }

    #[test]
    fn rejects_garbage_host() {
        assert!(make_https("not a host", "/".parse().unwrap(), 443).is_err());
    }
}
