use contracts::domain::a100_team_member::TeamMember;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct TeamListState {
    pub items: Vec<TeamMember>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl TeamListState {
    pub fn new(items: Vec<TeamMember>) -> Self {
        Self {
            items,
            search_query: String::new(),
            sort_field: "id".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state(items: Vec<TeamMember>) -> RwSignal<TeamListState> {
    RwSignal::new(TeamListState::new(items))
}
