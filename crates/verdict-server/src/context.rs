use http::header::ACCEPT_LANGUAGE;

/// Request data available to localizers and fallback handlers
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP request parts (method, URI, headers, extensions)
    pub parts: http::request::Parts,
}

impl RequestContext {
    /// Context for the request described by `parts`
    pub const fn new(parts: http::request::Parts) -> Self {
        Self { parts }
    }

    /// Context for dispatch outside an HTTP request
    ///
    /// Contains an empty `GET /` request
    pub fn empty() -> Self {
        let (parts, ()) = http::Request::builder()
            .method(http::Method::GET)
            .uri("/")
            .body(())
            .expect("valid minimal request")
            .into_parts();

        Self { parts }
    }

    /// Access request headers
    pub fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }

    /// Language tags from `Accept-Language`, most preferred first
    ///
    /// Tags are lowercased; wildcards and `q=0` entries are dropped.
    pub fn accepted_languages(&self) -> Vec<String> {
        let Some(value) = self.headers().get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()) else {
            return Vec::new();
        };

        let mut tags: Vec<(String, f32)> = value
            .split(',')
            .filter_map(|item| {
                let mut pieces = item.split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }

                let quality = pieces
                    .filter_map(|p| p.split_once('='))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
                    .and_then(|(_, q)| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);

                (quality > 0.0).then(|| (tag.to_ascii_lowercase(), quality))
            })
            .collect();

        // Stable sort keeps header order among equal weights
        tags.sort_by(|a, b| b.1.total_cmp(&a.1));
        tags.into_iter().map(|(tag, _)| tag).collect()
    }
}

impl From<http::request::Parts> for RequestContext {
    fn from(parts: http::request::Parts) -> Self {
        Self::new(parts)
    }
}
