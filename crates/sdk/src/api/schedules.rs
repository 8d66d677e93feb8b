//! Job schedules API endpoints.

use crate::client::BatchApiClient;
use crate::error::BatchResult;
use crate::transport::Transport;
use batch_console_core::ScheduleId;

/// Job schedules API for inspecting and cancelling schedules.
pub struct SchedulesApi<'a, T> {
    client: &'a BatchApiClient<T>,
}

impl<'a, T: Transport> SchedulesApi<'a, T> {
    pub(crate) fn new(client: &'a BatchApiClient<T>) -> Self {
        Self { client }
    }

    /// List all job schedules.
    pub async fn list(&self) -> BatchResult<T::Response> {
        let url = self.client.endpoints().schedules().clone();
        self.client.transport().get(url).await
    }

    /// Get a job schedule.
    pub async fn get(&self, id: &ScheduleId) -> BatchResult<T::Response> {
        let url = self.client.endpoints().schedule(id)?;
        self.client.transport().get(url).await
    }

    /// Cancel a job schedule.
    pub async fn cancel(&self, id: &ScheduleId) -> BatchResult<T::Response> {
        let url = self.client.endpoints().schedule_cancel(id)?;
        self.client.transport().post(url, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::recording::RecordingTransport;
    use url::Url;

    #[tokio::test]
    async fn test_schedule_requests() {
        let base = Url::parse("http://localhost:8080/api/").unwrap();
        let client = BatchApiClient::with_transport(&base, RecordingTransport::default()).unwrap();
        let id = ScheduleId::new("2");

        let list = client.schedules().list().await.unwrap();
        let get = client.schedules().get(&id).await.unwrap();
        let cancel = client.schedules().cancel(&id).await.unwrap();

        assert_eq!(list.url, "http://localhost:8080/api/schedules");
        assert_eq!(get.url, "http://localhost:8080/api/schedules/2");
        assert_eq!(cancel.method, "POST");
        assert_eq!(cancel.url, "http://localhost:8080/api/schedules/2/cancel");
        assert!(cancel.body.is_none());
    }
}
