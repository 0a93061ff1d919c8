use crate::api::{
    ApiClient, ApiError, CalendarEntry, Employee, FileUploadModel, LeaveAction, LeaveBalance,
    LeaveListFilter, LeaveRequest, PageRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub fn new_with_client(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn employee(&self, id: &str) -> Result<Employee, ApiError> {
        self.client.get_employee(id).await
    }

    pub async fn balances(&self, id: &str) -> Result<Vec<LeaveBalance>, ApiError> {
        let page = self.client.list_leave_balances(Some(id)).await?;
        Ok(page.results)
    }

    pub async fn leaves(&self, id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        let page = self
            .client
            .list_leaves(&LeaveListFilter::for_employee(id), PageRequest::default())
            .await?;
        Ok(page.results)
    }

    pub async fn calendar(&self, id: &str) -> Result<Vec<CalendarEntry>, ApiError> {
        let page = self.client.employee_calendar(id).await?;
        Ok(page.results)
    }

    pub async fn documents(&self, id: &str) -> Result<Vec<FileUploadModel>, ApiError> {
        let page = self.client.list_files(id).await?;
        Ok(page.results)
    }

    pub async fn upload_document(
        &self,
        id: &str,
        file_name: &str,
        mime_type: &str,
        contents: Vec<u8>,
    ) -> Result<FileUploadModel, ApiError> {
        self.client
            .upload_file(id, file_name, mime_type, contents)
            .await
    }

    pub async fn rename_document(
        &self,
        file_id: &str,
        name: &str,
    ) -> Result<FileUploadModel, ApiError> {
        self.client.rename_file(file_id, name).await
    }

    pub async fn archive_document(
        &self,
        file_id: &str,
        reason: &str,
    ) -> Result<FileUploadModel, ApiError> {
        self.client.archive_file(file_id, reason).await
    }

    pub async fn set_balance(&self, balance_id: &str, value: f64) -> Result<LeaveBalance, ApiError> {
        self.client.set_leave_balance(balance_id, value).await
    }

    pub async fn decide(&self, leave_id: &str, action: LeaveAction) -> Result<LeaveRequest, ApiError> {
        self.client.apply_leave_action(leave_id, action).await
    }

    pub async fn avatar(&self, username: &str) -> Result<Vec<u8>, ApiError> {
        self.client.profile_picture(username).await
    }

    pub async fn upload_avatar(
        &self,
        username: &str,
        file_name: &str,
        mime_type: &str,
        contents: Vec<u8>,
    ) -> Result<(), ApiError> {
        self.client
            .upload_profile_picture(username, file_name, mime_type, contents)
            .await
    }

    pub async fn remove_avatar(&self, username: &str) -> Result<(), ApiError> {
        self.client.delete_profile_picture(username).await
    }
}

impl Default for ProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}
