//! Per-IP rate limiting for the public surface.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Read endpoints: 2 requests per second, bursts of 100.
pub const PUBLIC_LIMIT: (u64, u32) = (2, 100);

/// Submissions: 1 request per second, bursts of 10.
pub const SUBMISSION_LIMIT: (u64, u32) = (1, 10);

/// Limiter for listing, detail and vocabulary endpoints.
///
/// Keys on the peer socket address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>`. Requests over the
/// limit receive `429 Too Many Requests`.
pub fn public_layer() -> RateLimitLayer {
    limiter(PUBLIC_LIMIT)
}

/// Stricter limiter for `POST /api/resources`.
pub fn submission_layer() -> RateLimitLayer {
    limiter(SUBMISSION_LIMIT)
}

fn limiter((per_second, burst): (u64, u32)) -> RateLimitLayer {
    let config = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .expect("rate limit period and burst are non-zero");

    GovernorLayer::new(Arc::new(config))
}
