//! List query descriptor: pagination, sorting and filtering

use serde::{Deserialize, Serialize};

use super::WikiDocStatus;

/// Default page size for document lists
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Columns the remote service can sort on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Status,
    CreateAt,
    Id,
    TeamId,
    ChannelId,
    OwnerUserId,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Status => "status",
            SortField::CreateAt => "create_at",
            SortField::Id => "id",
            SortField::TeamId => "team_id",
            SortField::ChannelId => "channel_id",
            SortField::OwnerUserId => "owner_user_id",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ascending or descending order of returned results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Query descriptor for a document list
///
/// `team_id` and `channel_id` identify the scope the list is restricted to;
/// they are supplied by the enclosing scope and never user-edited through
/// the controller. The remaining fields mutate via [`ListParamsUpdate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    pub team_id: String,
    pub channel_id: String,
    pub page: u32,
    pub per_page: u32,
    pub sort: SortField,
    pub direction: SortDirection,
    pub search_term: String,
    pub owner_user_id: Option<String>,
    pub statuses: Option<Vec<WikiDocStatus>>,
}

impl ListParams {
    pub fn new(team_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            channel_id: channel_id.into(),
            page: 0,
            per_page: DEFAULT_PER_PAGE,
            sort: SortField::Name,
            direction: SortDirection::Asc,
            search_term: String::new(),
            owner_user_id: None,
            statuses: None,
        }
    }

    /// Restrict the list to documents owned by one user
    pub fn with_owner(mut self, owner_user_id: impl Into<String>) -> Self {
        self.owner_user_id = Some(owner_user_id.into());
        self
    }

    /// Restrict the list to documents in the given statuses
    pub fn with_statuses(mut self, statuses: Vec<WikiDocStatus>) -> Self {
        self.statuses = Some(statuses);
        self
    }

    /// Sort-toggle rule: sorting on the already-active column flips the
    /// direction; a new column resets the direction to descending.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort = field;
            self.direction = SortDirection::Desc;
        }
    }

    /// Shallow-merge a partial update
    pub fn apply(&mut self, update: ListParamsUpdate) {
        if let Some(page) = update.page {
            self.page = page;
        }
        if let Some(per_page) = update.per_page {
            self.per_page = per_page;
        }
        if let Some(sort) = update.sort {
            self.sort = sort;
        }
        if let Some(direction) = update.direction {
            self.direction = direction;
        }
        if let Some(search_term) = update.search_term {
            self.search_term = search_term;
        }
    }

    /// Serialize to query-string pairs. Array parameters use repeated keys
    /// (`statuses=a&statuses=b`), never index suffixes.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("team_id", self.team_id.clone()),
            ("channel_id", self.channel_id.clone()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("sort", self.sort.to_string()),
            ("direction", self.direction.to_string()),
            ("search_term", self.search_term.clone()),
        ];
        if let Some(owner) = &self.owner_user_id {
            query.push(("owner_user_id", owner.clone()));
        }
        if let Some(statuses) = &self.statuses {
            for status in statuses {
                query.push(("statuses", status.to_string()));
            }
        }
        query
    }
}

/// Partial update of the user-mutable fields of [`ListParams`]
#[derive(Debug, Clone, Default)]
pub struct ListParamsUpdate {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
    pub search_term: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ListParams::new("team1", "channel1");
        assert_eq!(params.page, 0);
        assert_eq!(params.per_page, DEFAULT_PER_PAGE);
        assert_eq!(params.sort, SortField::Name);
        assert_eq!(params.direction, SortDirection::Asc);
        assert_eq!(params.search_term, "");
    }

    #[test]
    fn test_sort_by_same_column_flips_direction() {
        let mut params = ListParams::new("team1", "channel1");
        assert_eq!(params.direction, SortDirection::Asc);

        params.sort_by(SortField::Name);
        assert_eq!(params.sort, SortField::Name);
        assert_eq!(params.direction, SortDirection::Desc);

        params.sort_by(SortField::Name);
        assert_eq!(params.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_by_new_column_resets_to_desc() {
        let mut params = ListParams::new("team1", "channel1");
        params.sort_by(SortField::Name); // now desc
        params.sort_by(SortField::Name); // back to asc

        params.sort_by(SortField::Status);
        assert_eq!(params.sort, SortField::Status);
        assert_eq!(params.direction, SortDirection::Desc);

        params.sort_by(SortField::CreateAt);
        assert_eq!(params.sort, SortField::CreateAt);
        assert_eq!(params.direction, SortDirection::Desc);
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut params = ListParams::new("team1", "channel1");
        params.apply(ListParamsUpdate {
            page: Some(3),
            search_term: Some("kickoff".to_string()),
            ..Default::default()
        });
        assert_eq!(params.page, 3);
        assert_eq!(params.search_term, "kickoff");
        assert_eq!(params.per_page, DEFAULT_PER_PAGE);
        assert_eq!(params.sort, SortField::Name);
    }

    #[test]
    fn test_to_query_statuses_use_repeated_keys() {
        let params = ListParams::new("team1", "channel1")
            .with_statuses(vec![WikiDocStatus::Private, WikiDocStatus::Published]);
        let query = params.to_query();

        let statuses: Vec<&String> = query
            .iter()
            .filter(|(key, _)| *key == "statuses")
            .map(|(_, value)| value)
            .collect();
        assert_eq!(statuses, ["Private", "Published"]);
        assert!(!query.iter().any(|(key, _)| key.contains('[')));
    }

    #[test]
    fn test_to_query_scope_and_paging() {
        let mut params = ListParams::new("team1", "channel1").with_owner("user1");
        params.page = 2;
        let query = params.to_query();

        let get = |key: &str| {
            query
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("team_id"), Some("team1"));
        assert_eq!(get("channel_id"), Some("channel1"));
        assert_eq!(get("page"), Some("2"));
        assert_eq!(get("per_page"), Some("10"));
        assert_eq!(get("sort"), Some("name"));
        assert_eq!(get("direction"), Some("asc"));
        assert_eq!(get("owner_user_id"), Some("user1"));
    }
}
