use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A named group of todo items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Project {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub owner_id: String,
}

/// A single todo entry
///
/// Equality covers every field, including the nested project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TodoItem {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Account that created the item; may differ from the project owner
    pub owner_id: String,
    pub is_done: bool,
    /// Associated project, if any. Only id/name/owner are carried.
    pub project: Option<Project>,
}

/// A project together with the items currently associated with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectInfo {
    pub project: Project,
    /// Unordered; empty when the project has no items
    pub items: Vec<TodoItem>,
}

/// Tri-state filter on the done flag
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DoneFilter {
    /// No filter
    #[default]
    Both,
    Done,
    NotDone,
}

impl DoneFilter {
    pub fn matches(self, is_done: bool) -> bool {
        match self {
            Self::Both => true,
            Self::Done => is_done,
            Self::NotDone => !is_done,
        }
    }

    /// `Some(flag)` when the filter pins the done flag
    pub fn as_flag(self) -> Option<bool> {
        match self {
            Self::Both => None,
            Self::Done => Some(true),
            Self::NotDone => Some(false),
        }
    }
}

/// Item search predicates, ANDed together. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoItemQuery {
    pub id: Option<Uuid>,
    /// Exact title match
    pub title: Option<String>,
    pub done: DoneFilter,
    /// Item must belong to one of these projects; empty means any
    pub project_ids: Vec<Uuid>,
    pub owner_id: Option<String>,
}

impl TodoItemQuery {
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: Some(owner_id.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        self.id.is_none_or(|id| item.id == id)
            && self
                .owner_id
                .as_deref()
                .is_none_or(|owner| item.owner_id == owner)
            && self.title.as_deref().is_none_or(|title| item.title == title)
            && self.done.matches(item.is_done)
            && (self.project_ids.is_empty()
                || item
                    .project
                    .as_ref()
                    .is_some_and(|project| self.project_ids.contains(&project.id)))
    }
}

// Gateway DTOs. Ids stay strings so malformed values are rejected by the
// RPC service, not by JSON decoding.

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTodoItemBody {
    /// Client-supplied id; generated when absent
    pub id: Option<String>,
    pub title: String,
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTodoItemBody {
    pub title: String,
    #[serde(default)]
    pub is_done: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchTodoItemsParams {
    pub id: Option<String>,
    pub title: Option<String>,
    pub done: Option<DoneFilter>,
    /// Comma separated project ids
    pub project_ids: Option<String>,
}

impl SearchTodoItemsParams {
    pub fn project_id_list(&self) -> Vec<String> {
        self.project_ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoItemList {
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectBody {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProjectBody {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyTokenBody {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifiedIdentity {
    pub user_id: String,
}
