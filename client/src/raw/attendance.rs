use reqwest::{Method, RequestBuilder, Response};

use vis_portal_shared::attendance::handle::{
    AttendanceRow, BulkMarkDescriptor, MarkAttendanceDescriptor,
};
use vis_portal_shared::attendance::AttendanceRecord;

/// Records for one date, joined with their students.
pub struct ByDate<'a> {
    pub identity: &'a crate::Identity,
    pub date: chrono::NaiveDate,
}

#[async_trait::async_trait]
impl super::Request for ByDate<'_> {
    type Output = Vec<AttendanceRow>;

    fn url_suffix(&self) -> String {
        format!("/api/attendance?date={}", self.date)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Mark or re-mark one student for one date.
pub struct Mark<'a> {
    pub identity: &'a crate::Identity,
    pub descriptor: MarkAttendanceDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Mark<'_> {
    type Output = AttendanceRecord;
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/api/attendance".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Mark a whole set of students in one request.
pub struct BulkMark<'a> {
    pub identity: &'a crate::Identity,
    pub descriptor: BulkMarkDescriptor,
}

#[async_trait::async_trait]
impl super::Request for BulkMark<'_> {
    /// Number of records written.
    type Output = usize;
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/api/attendance/bulk".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()).json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        #[derive(serde::Deserialize)]
        struct ResponseBody {
            marked: usize,
        }

        Ok(response.json::<ResponseBody>().await.map(|body| body.marked)?)
    }
}

/// One student's history, newest first.
pub struct History<'a> {
    pub identity: &'a crate::Identity,
    pub student_id: i32,
}

#[async_trait::async_trait]
impl super::Request for History<'_> {
    type Output = Vec<AttendanceRecord>;

    fn url_suffix(&self) -> String {
        format!("/api/students/{}/attendance", self.student_id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.headers(self.identity.into()))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}
