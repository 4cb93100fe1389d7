use reqwest::{Method, RequestBuilder, Response};

use vis_portal_shared::highlight::handle::{EditHighlightDescriptor, HighlightDescriptor};
use vis_portal_shared::highlight::Highlight;
use vis_portal_shared::schedule::handle::{EditScheduleDescriptor, ScheduleDescriptor};
use vis_portal_shared::schedule::ScheduleEvent;

pub struct ListHighlights<'a> {
    pub identity: &'a crate::Identity,
}

#[async_trait::async_trait]
impl super::Request for ListHighlights<'_> {
    type Output = Vec<Highlight>;

    fn url_suffix(&self) -> String {
        "/api/highlights".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct NewHighlight<'a> {
    pub identity: &'a crate::Identity,
    pub descriptor: HighlightDescriptor,
}

#[async_trait::async_trait]
impl super::Request for NewHighlight<'_> {
    type Output = Highlight;
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/api/highlights".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct EditHighlight<'a> {
    pub identity: &'a crate::Identity,
    pub id: i32,
    pub descriptor: EditHighlightDescriptor,
}

#[async_trait::async_trait]
impl super::Request for EditHighlight<'_> {
    type Output = Highlight;
    const METHOD: Method = Method::PATCH;

    fn url_suffix(&self) -> String {
        format!("/api/highlights/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct RemoveHighlight<'a> {
    pub identity: &'a crate::Identity,
    pub id: i32,
}

#[async_trait::async_trait]
impl super::Request for RemoveHighlight<'_> {
    type Output = ();
    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/api/highlights/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, _response: Response) -> anyhow::Result<Self::Output> {
        Ok(())
    }
}

/// Calendar events; `date` narrows to one day.
pub struct ListEvents<'a> {
    pub identity: &'a crate::Identity,
    pub date: Option<chrono::NaiveDate>,
}

#[async_trait::async_trait]
impl super::Request for ListEvents<'_> {
    type Output = Vec<ScheduleEvent>;

    fn url_suffix(&self) -> String {
        match self.date {
            Some(date) => format!("/api/schedule?date={date}"),
            None => "/api/schedule".to_string(),
        }
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct NewEvent<'a> {
    pub identity: &'a crate::Identity,
    pub descriptor: ScheduleDescriptor,
}

#[async_trait::async_trait]
impl super::Request for NewEvent<'_> {
    type Output = ScheduleEvent;
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/api/schedule".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct EditEvent<'a> {
    pub identity: &'a crate::Identity,
    pub id: i32,
    pub descriptor: EditScheduleDescriptor,
}

#[async_trait::async_trait]
impl super::Request for EditEvent<'_> {
    type Output = ScheduleEvent;
    const METHOD: Method = Method::PATCH;

    fn url_suffix(&self) -> String {
        format!("/api/schedule/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct RemoveEvent<'a> {
    pub identity: &'a crate::Identity,
    pub id: i32,
}

#[async_trait::async_trait]
impl super::Request for RemoveEvent<'_> {
    type Output = ();
    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/api/schedule/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, _response: Response) -> anyhow::Result<Self::Output> {
        Ok(())
    }
}
