//! Directory API trait
//!
//! The seam between the desk engine and the directory service. The engine
//! talks to `dyn DirectoryApi`; production code plugs in
//! [`HttpDirectoryClient`](crate::HttpDirectoryClient), tests plug in a
//! scripted double.

use async_trait::async_trait;
use shared::{Employee, PinChangeRequest, PinUpdateResponse};

use crate::error::ClientResult;

/// Operations exposed by the employee directory service
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch a single employee by id
    async fn employee(&self, emp_id: i64) -> ClientResult<Employee>;

    /// Fetch the full employee list
    async fn employees(&self) -> ClientResult<Vec<Employee>>;

    /// Submit a PIN change for one employee
    async fn update_pin(&self, request: &PinChangeRequest) -> ClientResult<PinUpdateResponse>;
}
