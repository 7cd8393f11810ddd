use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend identifiers arrive as integers for most entities but as strings
/// for a few composite ones, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(id) => write!(f, "{id}"),
            ItemId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Int(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        ItemId::Int(i64::from(id))
    }
}

impl ItemId {
    /// `0` and `""` mean "no id" on the wire.
    pub fn is_unset(&self) -> bool {
        match self {
            ItemId::Int(id) => *id == 0,
            ItemId::Text(id) => id.is_empty(),
        }
    }
}

/// A null or absent label must not sink the rest of the response.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultKind {
    Project,
    Task,
    SprintTask,
    Sprint,
    Employee,
    Team,
    Other(String),
}

impl From<String> for ResultKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "project" => ResultKind::Project,
            "task" => ResultKind::Task,
            "sprint_task" => ResultKind::SprintTask,
            "sprint" => ResultKind::Sprint,
            "employee" => ResultKind::Employee,
            "team" => ResultKind::Team,
            _ => ResultKind::Other(tag),
        }
    }
}

impl From<ResultKind> for String {
    fn from(kind: ResultKind) -> Self {
        kind.as_str().to_string()
    }
}

impl ResultKind {
    pub fn as_str(&self) -> &str {
        match self {
            ResultKind::Project => "project",
            ResultKind::Task => "task",
            ResultKind::SprintTask => "sprint_task",
            ResultKind::Sprint => "sprint",
            ResultKind::Employee => "employee",
            ResultKind::Team => "team",
            ResultKind::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuggestionKind {
    Result,
    Action,
    Search,
    Other(String),
}

impl From<String> for SuggestionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "result" => SuggestionKind::Result,
            "action" => SuggestionKind::Action,
            "search" => SuggestionKind::Search,
            _ => SuggestionKind::Other(tag),
        }
    }
}

impl From<SuggestionKind> for String {
    fn from(kind: SuggestionKind) -> Self {
        match kind {
            SuggestionKind::Result => "result".to_string(),
            SuggestionKind::Action => "action".to_string(),
            SuggestionKind::Search => "search".to_string(),
            SuggestionKind::Other(tag) => tag,
        }
    }
}

/// A literal backend match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SearchResultItem {
    pub fn new(kind: ResultKind, id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            title: title.into(),
            status: None,
            description: None,
            project: None,
            sprint: None,
            sprint_id: None,
            icon: None,
        }
    }
}

/// A proactive hint shown above the literal results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SearchResultItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl SearchSuggestion {
    pub fn new(kind: SuggestionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            icon: None,
            data: None,
            route: None,
            query: None,
        }
    }
}

/// Body of `GET /auth/search/`. Either list may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultItem>,
    #[serde(default)]
    pub suggestions: Vec<SearchSuggestion>,
}

/// A location in the console that a selection navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Projects,
    Tasks {
        search: Option<String>,
    },
    Sprints,
    Sprint(ItemId),
    Employees,
    Teams,
    Custom(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Dashboard => f.write_str("/"),
            Route::Projects => f.write_str("/projects"),
            Route::Tasks { search: None } => f.write_str("/tasks"),
            Route::Tasks {
                search: Some(query),
            } => write!(f, "/tasks?search={}", urlencoding::encode(query)),
            Route::Sprints => f.write_str("/sprints"),
            Route::Sprint(id) => write!(f, "/sprints/{id}"),
            Route::Employees => f.write_str("/employee"),
            Route::Teams => f.write_str("/teams"),
            Route::Custom(path) => f.write_str(path),
        }
    }
}

impl Route {
    /// Human-readable page title for the body view.
    pub fn title(&self) -> String {
        match self {
            Route::Dashboard => "Dashboard".to_string(),
            Route::Projects => "Projects".to_string(),
            Route::Tasks { search: None } => "Tasks".to_string(),
            Route::Tasks {
                search: Some(query),
            } => format!("Tasks matching \"{query}\""),
            Route::Sprints => "Sprints".to_string(),
            Route::Sprint(id) => format!("Sprint #{id}"),
            Route::Employees => "Employees".to_string(),
            Route::Teams => "Teams".to_string(),
            Route::Custom(path) => path.clone(),
        }
    }
}
