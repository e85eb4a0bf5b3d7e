use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{header, request::Parts, HeaderMap};
use codeious_site_core::contact::SubmitterMeta;

/// Caller details recorded with a contact message. The address comes from
/// the first `x-forwarded-for` hop, then `x-real-ip`, then the socket peer.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta(pub SubmitterMeta);

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn client_ip(parts: &Parts) -> Option<String> {
    let forwarded = header_str(&parts.headers, "x-forwarded-for")
        .and_then(|list| list.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    forwarded
        .or_else(|| header_str(&parts.headers, "x-real-ip"))
        .map(str::to_string)
        .or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
}

impl<S: Send + Sync> FromRequestParts<S> for ClientMeta {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientMeta(SubmitterMeta {
            ip_address: client_ip(parts),
            user_agent: header_str(&parts.headers, header::USER_AGENT.as_str()).map(str::to_string),
        }))
    }
}
