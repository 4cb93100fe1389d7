use reqwest::{Method, RequestBuilder, Response};

use vis_portal_shared::student::handle::{
    EditStudentDescriptor, MakeStudentDescriptor, RegisterStudentDescriptor,
    SetStudentStatusDescriptor,
};
use vis_portal_shared::student::{Student, StudentStatus};

/// Public self-registration; needs no identity.
pub struct Register {
    pub name: String,
    pub email: String,
    pub reg_no: String,
    pub batch: Option<String>,
}

#[async_trait::async_trait]
impl super::Request for Register {
    type Output = Student;
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/api/students/register".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.json(&RegisterStudentDescriptor {
            name: self.name.clone(),
            email: self.email.parse()?,
            reg_no: self.reg_no.clone(),
            batch: self.batch.clone(),
        }))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct List<'a> {
    pub identity: &'a crate::Identity,
}

#[async_trait::async_trait]
impl super::Request for List<'_> {
    type Output = Vec<Student>;

    fn url_suffix(&self) -> String {
        "/api/students".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct ListPending<'a> {
    pub identity: &'a crate::Identity,
}

#[async_trait::async_trait]
impl super::Request for ListPending<'_> {
    type Output = Vec<Student>;

    fn url_suffix(&self) -> String {
        "/api/students/pending".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Admin-side creation, skipping the review queue.
pub struct Make<'a> {
    pub identity: &'a crate::Identity,
    pub descriptor: MakeStudentDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Make<'_> {
    type Output = Student;
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/api/students".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Approve or reject a registration.
pub struct SetStatus<'a> {
    pub identity: &'a crate::Identity,
    pub id: i32,
    pub status: StudentStatus,
}

#[async_trait::async_trait]
impl super::Request for SetStatus<'_> {
    type Output = Student;
    const METHOD: Method = Method::PATCH;

    fn url_suffix(&self) -> String {
        format!("/api/students/{}/status", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req
            .headers(self.identity.into())
            .json(&SetStudentStatusDescriptor {
                status: self.status,
            }))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct Edit<'a> {
    pub identity: &'a crate::Identity,
    pub id: i32,
    pub descriptor: EditStudentDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Edit<'_> {
    type Output = Student;
    const METHOD: Method = Method::PATCH;

    fn url_suffix(&self) -> String {
        format!("/api/students/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct Remove<'a> {
    pub identity: &'a crate::Identity,
    pub id: i32,
}

#[async_trait::async_trait]
impl super::Request for Remove<'_> {
    type Output = ();
    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/api/students/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, _response: Response) -> anyhow::Result<Self::Output> {
        Ok(())
    }
}
