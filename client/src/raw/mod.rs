use std::fmt::{Formatter, Write};

pub mod attendance;
pub mod auth;
pub mod content;
pub mod manage;
pub mod students;

#[async_trait::async_trait]
pub trait Request {
    type Output;

    const METHOD: reqwest::Method = reqwest::Method::GET;

    /// Path of this endpoint under the portal root.
    fn url_suffix(&self) -> String;

    fn make_req(&self, req: reqwest::RequestBuilder) -> anyhow::Result<reqwest::RequestBuilder>;

    async fn parse_res(&mut self, response: reqwest::Response) -> anyhow::Result<Self::Output>;
}

/// Calls a [`Request`] and return its output.
pub async fn call<T: Request>(
    mut req: T,
    cx: &crate::Context,
) -> anyhow::Result<<T as Request>::Output> {
    let response = req
        .make_req(
            cx.req_client
                .request(T::METHOD, format!("{}{}", cx.url_prefix, req.url_suffix())),
        )?
        .send()
        .await?;
    let status = response.status();

    if !status.is_success() {
        #[derive(Debug)]
        struct ResponseError {
            status_code: reqwest::StatusCode,
            message: Option<String>,
        }

        impl std::fmt::Display for ResponseError {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.status_code.as_str())?;

                if let Some(msg) = self.status_code.canonical_reason() {
                    f.write_char(' ')?;
                    f.write_str(msg)?;
                }

                if let Some(ref msg) = self.message {
                    f.write_str(": ")?;
                    f.write_str(msg)?;
                }

                Ok(())
            }
        }

        impl std::error::Error for ResponseError {}

        #[derive(serde::Deserialize)]
        #[allow(unused)]
        struct ThrownError {
            message: String,
        }

        let err_msg = response
            .json::<ThrownError>()
            .await
            .ok()
            .map(|msg| msg.message);

        return Err(anyhow::Error::new(ResponseError {
            status_code: status,
            message: err_msg,
        }));
    }

    req.parse_res(response).await
}

impl From<&crate::Identity> for reqwest::header::HeaderMap<reqwest::header::HeaderValue> {
    fn from(identity: &crate::Identity) -> Self {
        let mut map = reqwest::header::HeaderMap::new();

        if let Ok(value) = identity.user_id.parse() {
            map.insert("X-User-Id", value);
        }
        if let Some(value) = identity.email.as_deref().and_then(|e| e.parse().ok()) {
            map.insert("X-User-Email", value);
        }
        if let Some(value) = identity.first_name.as_deref().and_then(|n| n.parse().ok()) {
            map.insert("X-User-First-Name", value);
        }
        if let Some(value) = identity.last_name.as_deref().and_then(|n| n.parse().ok()) {
            map.insert("X-User-Last-Name", value);
        }

        map
    }
}
