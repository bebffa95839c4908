//! Conversions between `todo.v1` messages and domain types
//!
//! Domain → proto is infallible. Proto → domain is only needed by the gateway
//! for server responses, so a malformed id there is an internal error.

use rpc::todo::v1 as proto;
use uuid::Uuid;

use crate::error::TodoError;
use crate::models::{DoneFilter, Project, ProjectInfo, TodoItem};

impl From<Project> for proto::Project {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name,
            owner_id: project.owner_id,
        }
    }
}

impl From<TodoItem> for proto::TodoItem {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title,
            owner_id: item.owner_id,
            is_done: item.is_done,
            project: item.project.map(Into::into),
        }
    }
}

impl From<ProjectInfo> for proto::GetProjectResponse {
    fn from(info: ProjectInfo) -> Self {
        Self {
            project: Some(info.project.into()),
            items: info.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<DoneFilter> for proto::DoneFilter {
    fn from(filter: DoneFilter) -> Self {
        match filter {
            DoneFilter::Both => Self::Both,
            DoneFilter::Done => Self::Done,
            DoneFilter::NotDone => Self::NotDone,
        }
    }
}

impl From<proto::DoneFilter> for DoneFilter {
    fn from(filter: proto::DoneFilter) -> Self {
        match filter {
            proto::DoneFilter::Both => Self::Both,
            proto::DoneFilter::Done => Self::Done,
            proto::DoneFilter::NotDone => Self::NotDone,
        }
    }
}

fn upstream_uuid(raw: &str) -> Result<Uuid, TodoError> {
    Uuid::parse_str(raw)
        .map_err(|e| TodoError::Internal(format!("server returned malformed id {raw:?}: {e}")))
}

impl TryFrom<proto::Project> for Project {
    type Error = TodoError;

    fn try_from(project: proto::Project) -> Result<Self, Self::Error> {
        Ok(Self {
            id: upstream_uuid(&project.id)?,
            name: project.name,
            owner_id: project.owner_id,
        })
    }
}

impl TryFrom<proto::TodoItem> for TodoItem {
    type Error = TodoError;

    fn try_from(item: proto::TodoItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: upstream_uuid(&item.id)?,
            title: item.title,
            owner_id: item.owner_id,
            is_done: item.is_done,
            project: item.project.map(Project::try_from).transpose()?,
        })
    }
}

impl TryFrom<proto::GetProjectResponse> for ProjectInfo {
    type Error = TodoError;

    fn try_from(response: proto::GetProjectResponse) -> Result<Self, Self::Error> {
        let project = response
            .project
            .ok_or_else(|| TodoError::Internal("response is missing the project".to_string()))?;
        Ok(Self {
            project: project.try_into()?,
            items: items_from_proto(response.items)?,
        })
    }
}

/// Unwrap a required message field from a response
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, TodoError> {
    value.ok_or_else(|| TodoError::Internal(format!("response is missing {field}")))
}

pub fn items_from_proto(items: Vec<proto::TodoItem>) -> Result<Vec<TodoItem>, TodoError> {
    items.into_iter().map(TodoItem::try_from).collect()
}

pub fn projects_from_proto(projects: Vec<proto::Project>) -> Result<Vec<Project>, TodoError> {
    projects.into_iter().map(Project::try_from).collect()
}
