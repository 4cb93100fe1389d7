use reqwest::{RequestBuilder, Response};

use vis_portal_shared::account::handle::AuthUserResult;

/// Resolve the caller's identity and role.
pub struct AuthUser<'a> {
    pub identity: &'a crate::Identity,
}

#[async_trait::async_trait]
impl super::Request for AuthUser<'_> {
    type Output = AuthUserResult;

    fn url_suffix(&self) -> String {
        "/api/auth/user".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}
