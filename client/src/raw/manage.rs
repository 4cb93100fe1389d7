use reqwest::{Method, RequestBuilder, Response};

use vis_portal_shared::admin::handle::MakeAdminDescriptor;
use vis_portal_shared::admin::Admin;
use vis_portal_shared::dashboard::DashboardStats;

pub struct ListAdmins<'a> {
    pub identity: &'a crate::Identity,
}

#[async_trait::async_trait]
impl super::Request for ListAdmins<'_> {
    type Output = Vec<Admin>;

    fn url_suffix(&self) -> String {
        "/api/admins".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct MakeAdmin<'a> {
    pub identity: &'a crate::Identity,
    pub descriptor: MakeAdminDescriptor,
}

#[async_trait::async_trait]
impl super::Request for MakeAdmin<'_> {
    type Output = Admin;
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/api/admins".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct RemoveAdmin<'a> {
    pub identity: &'a crate::Identity,
    pub id: i32,
}

#[async_trait::async_trait]
impl super::Request for RemoveAdmin<'_> {
    type Output = ();
    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/api/admins/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, _response: Response) -> anyhow::Result<Self::Output> {
        Ok(())
    }
}

/// Aggregate counters for the admin landing view.
pub struct Stats<'a> {
    pub identity: &'a crate::Identity,
}

#[async_trait::async_trait]
impl super::Request for Stats<'_> {
    type Output = DashboardStats;

    fn url_suffix(&self) -> String {
        "/api/dashboard/stats".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}
